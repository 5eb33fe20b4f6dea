use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FlightCommands, HotelCommands, RoadmapCommands, TripCommands};

/// Main command-line interface for the PointPath trip planning tool
///
/// PointPath helps travelers plan award trips with loyalty points. It manages
/// trip planning sessions, presents flight and hotel redemption options, and
/// synthesizes a step-by-step booking roadmap from the traveler's selections.
/// It provides both a local CLI and an MCP (Model Context Protocol) server
/// mode for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "pp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pointpath/pointpath.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the PointPath CLI
///
/// The CLI is organized into five main command categories:
/// - `trip`: Operations for managing trip sessions (create, list, archive, etc.)
/// - `flight`: Browse and select flight redemption options for a trip
/// - `hotel`: Browse and select hotel redemption options for a trip
/// - `roadmap`: View or export the synthesized booking roadmap
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trip planning sessions
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Browse and select flight redemption options
    #[command(alias = "f")]
    Flight {
        #[command(subcommand)]
        command: FlightCommands,
    },
    /// Browse and select hotel redemption options
    #[command(alias = "h")]
    Hotel {
        #[command(subcommand)]
        command: HotelCommands,
    },
    /// View or export the booking roadmap
    #[command(alias = "r")]
    Roadmap {
        #[command(subcommand)]
        command: RoadmapCommands,
    },
    /// Start the MCP server
    Serve,
}
