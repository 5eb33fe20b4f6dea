//! Roadmap model: the derived, ordered booking instructions.

use serde::{Deserialize, Serialize};

/// A single numbered booking instruction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapStep {
    /// 1-based position in the roadmap, contiguous with no gaps
    pub step: u32,

    /// The instruction itself
    pub instruction: String,

    /// Optional supporting detail shown under the instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Snapshot of the trip parameters taken when the roadmap was generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TripSummary {
    /// Route in `"YYZ → LHR"` form, empty when no trip was supplied
    pub route: String,

    /// Formatted date range, empty when no trip was supplied
    pub dates: String,

    /// Number of travelers, zero when no trip was supplied
    pub travelers: u32,
}

/// The ordered list of instructions needed to execute the chosen
/// redemptions end-to-end, with aggregate cost figures.
///
/// Roadmaps are recomputed from scratch whenever the trip or its
/// selections change; they are never persisted or patched incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    /// Trip parameter snapshot
    pub summary: TripSummary,

    /// Ordered instruction steps, never empty
    pub steps: Vec<RoadmapStep>,

    /// Total points across flight and hotel selections
    pub total_points: u64,

    /// Total fees in dollars (flight only; hotel fees are not modeled)
    pub total_fees: u64,

    /// Fallback suggestion shown when a flight is part of the plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_option: Option<String>,
}
