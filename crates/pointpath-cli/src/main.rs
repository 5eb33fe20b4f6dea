//! PointPath CLI Application
//!
//! Command-line interface for the PointPath trip planning tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, PointPathMcpServer};
use pointpath_core::{params::ListTrips, PlannerBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("PointPath started");

    match command {
        Some(Trip { command }) => {
            Cli::new(planner, renderer)
                .handle_trip_command(command)
                .await
        }
        Some(Flight { command }) => {
            Cli::new(planner, renderer)
                .handle_flight_command(command)
                .await
        }
        Some(Hotel { command }) => {
            Cli::new(planner, renderer)
                .handle_hotel_command(command)
                .await
        }
        Some(Roadmap { command }) => {
            Cli::new(planner, renderer)
                .handle_roadmap_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting PointPath MCP server");
            run_stdio_server(PointPathMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(planner, renderer)
                .list_trips(&ListTrips::default())
                .await
        }
    }
}
