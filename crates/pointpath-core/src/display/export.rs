//! Plain-text roadmap export.

use std::fmt;

use crate::models::Roadmap;

/// Renders a roadmap as shareable plain text.
///
/// Unlike the markdown Display on [`Roadmap`], this format is meant to be
/// pasted into notes or messages. Each step renders as
/// `Step {n}: {instruction}`, with details on the next line indented three
/// spaces; steps are separated by a blank line and there is no trailing
/// newline.
pub struct RoadmapText<'a>(pub &'a Roadmap);

impl fmt::Display for RoadmapText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.0.steps {
            if !first {
                write!(f, "\n\n")?;
            }
            first = false;
            write!(f, "Step {}: {}", step.step, step.instruction)?;
            if let Some(details) = &step.details {
                write!(f, "\n   {details}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoadmapStep, TripSummary};

    fn roadmap(steps: Vec<RoadmapStep>) -> Roadmap {
        Roadmap {
            summary: TripSummary::default(),
            steps,
            total_points: 0,
            total_fees: 0,
            backup_option: None,
        }
    }

    #[test]
    fn test_export_format_exact() {
        let roadmap = roadmap(vec![
            RoadmapStep {
                step: 1,
                instruction: "Log in to Aeroplan.com".to_string(),
                details: Some("Use your Aeroplan member number".to_string()),
            },
            RoadmapStep {
                step: 2,
                instruction: "Confirm all bookings and save confirmation numbers".to_string(),
                details: None,
            },
        ]);

        assert_eq!(
            format!("{}", RoadmapText(&roadmap)),
            "Step 1: Log in to Aeroplan.com\n   Use your Aeroplan member number\n\n\
             Step 2: Confirm all bookings and save confirmation numbers"
        );
    }

    #[test]
    fn test_export_empty_roadmap() {
        let roadmap = roadmap(vec![]);
        assert_eq!(format!("{}", RoadmapText(&roadmap)), "");
    }
}
