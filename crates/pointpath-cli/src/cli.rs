//! Command-line interface definitions using clap
//!
//! This module defines the CLI argument structures using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command has a clap-decorated argument struct here plus a `From`
//! conversion into the corresponding `pointpath_core::params` type. Core
//! parameter types stay free of clap attributes, so the same validation runs
//! for the CLI and the MCP server. The [`Cli`] struct at the bottom executes
//! the parsed commands against the planner and renders the results.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use pointpath_core::{
    display::{CreateResult, DeleteResult, OperationStatus, RoadmapText, SelectResult},
    params::{CreateTrip, DeleteTrip, Id, ListTrips, SelectOption},
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Create a new trip planning session
///
/// CLI wrapper for CreateTrip that adds clap-specific argument handling
/// including short/long flags, help text generation, and input validation.
#[derive(Args)]
pub struct CreateTripArgs {
    /// Destination city or airport code
    pub destination: String,
    /// Departure date in YYYY-MM-DD format
    pub depart_date: String,
    /// Origin airport or city code
    #[arg(long, help = "Origin airport or city code (defaults to YYZ)")]
    pub origin: Option<String>,
    /// Return date in YYYY-MM-DD format
    #[arg(short, long, help = "Return date in YYYY-MM-DD format")]
    pub return_date: Option<String>,
    /// Number of travelers (1-9)
    #[arg(short, long, default_value_t = 1, help = "Number of travelers (1-9)")]
    pub travelers: u32,
    /// What the session covers: flight, hotel, or both
    #[arg(long, help = "What the session covers: flight, hotel, or both")]
    pub trip_type: Option<TripTypeArg>,
    /// Loyalty programs the traveler holds points in - comma-separated list
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Loyalty programs the traveler holds points in, comma-separated (e.g. 'Aeroplan,Amex MR (Canada)')"
    )]
    pub programs: Vec<String>,
    /// Preferred cabin class: economy, premium, or business
    #[arg(long, help = "Preferred cabin class: economy, premium, or business")]
    pub cabin: Option<CabinArg>,
}

impl From<CreateTripArgs> for CreateTrip {
    /// Convert CLI arguments to core parameter structure
    ///
    /// This explicit conversion ensures type safety and makes the boundary
    /// between CLI concerns and core logic clear and verifiable.
    fn from(val: CreateTripArgs) -> Self {
        CreateTrip {
            origin: val.origin.unwrap_or_default(),
            destination: val.destination,
            depart_date: val.depart_date,
            return_date: val.return_date,
            travelers: val.travelers,
            trip_type: val.trip_type.map(|t| t.to_string()),
            points_programs: val.programs,
            cabin_preference: val.cabin.map(|c| c.to_string()),
        }
    }
}

/// List all trips
///
/// Display either active trips (default) or archived trips based on the
/// --archived flag. Active trips are sessions currently being planned, while
/// archived trips are completed or shelved sessions that have been moved out
/// of the main view.
#[derive(Args)]
pub struct ListTripsArgs {
    /// Show archived trips instead of active trips
    #[arg(
        long,
        help = "Show archived (completed/shelved) trips instead of active ones"
    )]
    pub archived: bool,
    /// Only show trips whose destination contains this text
    #[arg(short, long, help = "Only show trips whose destination contains this text")]
    pub destination: Option<String>,
}

impl From<ListTripsArgs> for ListTrips {
    fn from(val: ListTripsArgs) -> Self {
        ListTrips {
            archived: val.archived,
            destination: val.destination,
        }
    }
}

/// Show details of a specific trip
///
/// Display comprehensive information about a trip including its route, dates,
/// travelers, loyalty programs, and any flight or hotel selections already
/// made.
#[derive(Args)]
pub struct ShowTripArgs {
    /// ID of the trip to display
    #[arg(help = "Unique identifier of the trip to show details for")]
    pub id: u64,
}

impl From<ShowTripArgs> for Id {
    fn from(val: ShowTripArgs) -> Self {
        Id { id: val.id }
    }
}

/// Archive a trip
///
/// Move a trip to the archived state, hiding it from the default trip list.
/// Archived trips are preserved and can be restored later with the unarchive
/// command. Use this once a trip is booked or the planning is on hold.
#[derive(Args)]
pub struct ArchiveTripArgs {
    /// ID of the trip to archive
    #[arg(help = "Unique identifier of the trip to move to archived state")]
    pub id: u64,
}

impl From<ArchiveTripArgs> for Id {
    fn from(val: ArchiveTripArgs) -> Self {
        Id { id: val.id }
    }
}

/// Unarchive a trip
///
/// Restore an archived trip back to the active list. The trip and its
/// selections are preserved exactly as they were when archived.
#[derive(Args)]
pub struct UnarchiveTripArgs {
    /// ID of the trip to restore from archive
    #[arg(help = "Unique identifier of the archived trip to restore to active state")]
    pub id: u64,
}

impl From<UnarchiveTripArgs> for Id {
    fn from(val: UnarchiveTripArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a trip permanently
#[derive(Args)]
pub struct DeleteTripArgs {
    /// ID of the trip to delete
    #[arg(help = "Unique identifier of the trip to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTripArgs> for DeleteTrip {
    fn from(val: DeleteTripArgs) -> Self {
        DeleteTrip {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Reset a trip's selections
///
/// Remove both the flight and hotel selections from a trip, returning it to
/// its just-created state so different options can be picked.
#[derive(Args)]
pub struct ResetTripArgs {
    /// ID of the trip whose selections to clear
    #[arg(help = "Unique identifier of the trip whose selections to clear")]
    pub id: u64,
}

impl From<ResetTripArgs> for Id {
    fn from(val: ResetTripArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip planning session
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List all trips
    #[command(aliases = ["l", "ls"])]
    List(ListTripsArgs),
    /// Show details of a specific trip
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Archive a trip
    #[command(alias = "a")]
    Archive(ArchiveTripArgs),
    /// Unarchive a trip
    #[command(alias = "u")]
    Unarchive(UnarchiveTripArgs),
    /// Delete a trip permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTripArgs),
    /// Clear a trip's flight and hotel selections
    #[command(alias = "r")]
    Reset(ResetTripArgs),
}

/// Show the redemption options available for a trip
#[derive(Args)]
pub struct OptionsArgs {
    /// ID of the trip to show options for
    #[arg(help = "Unique identifier of the trip to show options for")]
    pub trip_id: u64,
}

impl From<OptionsArgs> for Id {
    fn from(val: OptionsArgs) -> Self {
        Id { id: val.trip_id }
    }
}

/// Select a redemption option for a trip
///
/// Attach one of the catalog options to the trip, replacing any previous
/// selection of the same kind. The selection feeds the booking roadmap.
#[derive(Args)]
pub struct SelectArgs {
    /// ID of the trip to attach the selection to
    #[arg(help = "Unique identifier of the trip to attach the selection to")]
    pub trip_id: u64,
    /// Catalog ID of the option to select
    #[arg(help = "Catalog ID of the option to select (as shown by 'options')")]
    pub option_id: String,
}

impl From<SelectArgs> for SelectOption {
    fn from(val: SelectArgs) -> Self {
        SelectOption {
            trip_id: val.trip_id,
            option_id: val.option_id,
        }
    }
}

#[derive(Subcommand)]
pub enum FlightCommands {
    /// List the flight redemption options for a trip
    #[command(aliases = ["o", "list", "l"])]
    Options(OptionsArgs),
    /// Select a flight option for a trip
    #[command(alias = "s")]
    Select(SelectArgs),
}

#[derive(Subcommand)]
pub enum HotelCommands {
    /// List the hotel redemption options for a trip
    #[command(aliases = ["o", "list", "l"])]
    Options(OptionsArgs),
    /// Select a hotel option for a trip
    #[command(alias = "s")]
    Select(SelectArgs),
}

/// Show the booking roadmap for a trip
///
/// Synthesizes the ordered booking instructions from the trip's current
/// flight and hotel selections and renders them as markdown.
#[derive(Args)]
pub struct RoadmapShowArgs {
    /// ID of the trip to synthesize the roadmap for
    #[arg(help = "Unique identifier of the trip to synthesize the roadmap for")]
    pub trip_id: u64,
}

impl From<RoadmapShowArgs> for Id {
    fn from(val: RoadmapShowArgs) -> Self {
        Id { id: val.trip_id }
    }
}

/// Export the booking roadmap as plain text
///
/// Produces the step-by-step instructions in a plain text format suitable for
/// sharing: "Step N: instruction" lines with indented details, one blank line
/// between steps.
#[derive(Args)]
pub struct RoadmapExportArgs {
    /// ID of the trip to export the roadmap for
    #[arg(help = "Unique identifier of the trip to export the roadmap for")]
    pub trip_id: u64,
    /// Write the export to a file instead of stdout
    #[arg(short, long, help = "Write the export to a file instead of stdout")]
    pub output: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
pub enum RoadmapCommands {
    /// Show the booking roadmap for a trip
    #[command(alias = "s")]
    Show(RoadmapShowArgs),
    /// Export the roadmap as plain text
    #[command(alias = "e")]
    Export(RoadmapExportArgs),
}

/// Command-line argument representation of trip type values
///
/// Converts between user-friendly command arguments and the string form the
/// core validation expects. Used with the `--trip-type` flag.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TripTypeArg {
    /// Plan flights only
    Flight,
    /// Plan hotels only
    Hotel,
    /// Plan both flights and hotels
    Both,
}

impl std::fmt::Display for TripTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripTypeArg::Flight => write!(f, "flight"),
            TripTypeArg::Hotel => write!(f, "hotel"),
            TripTypeArg::Both => write!(f, "both"),
        }
    }
}

/// Command-line argument representation of cabin class values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CabinArg {
    /// Economy cabin
    Economy,
    /// Premium economy cabin
    Premium,
    /// Business cabin
    Business,
}

impl std::fmt::Display for CabinArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CabinArg::Economy => write!(f, "economy"),
            CabinArg::Premium => write!(f, "premium"),
            CabinArg::Business => write!(f, "business"),
        }
    }
}

/// Command executor that connects parsed arguments to the planner
///
/// Owns the planner and terminal renderer for the lifetime of one command.
/// Each handler converts the CLI arguments into core parameters, runs the
/// planner operation, and renders the result through the display wrappers.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => {
                let trip = self.planner.create_trip(&args.into()).await?;
                self.renderer.render(&CreateResult::new(trip).to_string())
            }
            TripCommands::List(args) => self.list_trips(&args.into()).await,
            TripCommands::Show(args) => {
                let params: Id = args.into();
                let trip = self.planner.require_trip(&params).await?;
                self.renderer.render(&trip.to_string())
            }
            TripCommands::Archive(args) => {
                let params: Id = args.into();
                match self.planner.archive_trip(&params).await? {
                    Some(trip) => self.renderer.render(
                        &OperationStatus::success(format!(
                            "Archived trip {} → {} (ID: {})",
                            trip.origin, trip.destination, trip.id
                        ))
                        .to_string(),
                    ),
                    None => anyhow::bail!("Trip with ID {} not found", params.id),
                }
            }
            TripCommands::Unarchive(args) => {
                let params: Id = args.into();
                match self.planner.unarchive_trip(&params).await? {
                    Some(trip) => self.renderer.render(
                        &OperationStatus::success(format!(
                            "Unarchived trip {} → {} (ID: {})",
                            trip.origin, trip.destination, trip.id
                        ))
                        .to_string(),
                    ),
                    None => anyhow::bail!("Trip with ID {} not found", params.id),
                }
            }
            TripCommands::Delete(args) => {
                let params: DeleteTrip = args.into();
                match self.planner.delete_trip(&params).await? {
                    Some(trip) => self.renderer.render(&DeleteResult::new(trip).to_string()),
                    None => anyhow::bail!("Trip with ID {} not found", params.id),
                }
            }
            TripCommands::Reset(args) => {
                let params: Id = args.into();
                let trip = self.planner.reset_selections(&params).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Cleared selections for trip {} → {} (ID: {})",
                        trip.origin, trip.destination, trip.id
                    ))
                    .to_string(),
                )
            }
        }
    }

    pub async fn handle_flight_command(&self, command: FlightCommands) -> Result<()> {
        match command {
            FlightCommands::Options(args) => {
                let params: Id = args.into();
                let options = self.planner.flight_options_display(&params).await?;
                let output = format!("# Flight Options for Trip {}\n\n{}", params.id, options);
                self.renderer.render(&output)
            }
            FlightCommands::Select(args) => {
                let params: SelectOption = args.into();
                let option = self.planner.select_flight(&params).await?;
                self.renderer
                    .render(&SelectResult::new(params.trip_id, option).to_string())
            }
        }
    }

    pub async fn handle_hotel_command(&self, command: HotelCommands) -> Result<()> {
        match command {
            HotelCommands::Options(args) => {
                let params: Id = args.into();
                let options = self.planner.hotel_options_display(&params).await?;
                let output = format!("# Hotel Options for Trip {}\n\n{}", params.id, options);
                self.renderer.render(&output)
            }
            HotelCommands::Select(args) => {
                let params: SelectOption = args.into();
                let option = self.planner.select_hotel(&params).await?;
                self.renderer
                    .render(&SelectResult::new(params.trip_id, option).to_string())
            }
        }
    }

    pub async fn handle_roadmap_command(&self, command: RoadmapCommands) -> Result<()> {
        match command {
            RoadmapCommands::Show(args) => {
                let params: Id = args.into();
                let roadmap = self.planner.roadmap(&params).await?;
                self.renderer.render(&roadmap.to_string())
            }
            RoadmapCommands::Export(args) => {
                let params = Id { id: args.trip_id };
                let roadmap = self.planner.roadmap(&params).await?;
                let text = RoadmapText(&roadmap).to_string();
                match args.output {
                    Some(path) => {
                        std::fs::write(&path, &text)?;
                        println!("Exported roadmap for trip {} to {}", params.id, path.display());
                    }
                    // Exports are plain text by contract, so bypass the
                    // markdown renderer
                    None => println!("{text}"),
                }
                Ok(())
            }
        }
    }

    pub async fn list_trips(&self, params: &ListTrips) -> Result<()> {
        let trips = self.planner.list_trips_display(params).await?;
        let title = if params.archived {
            "Archived Trips"
        } else {
            "Active Trips"
        };
        let output = format!("# {}\n\n{}", title, trips);
        self.renderer.render(&output)
    }
}
