//! MCP server implementation for PointPath
//!
//! This module implements the Model Context Protocol server for PointPath,
//! providing a standardized interface for AI models to interact with
//! the trip planning system.

use anyhow::Result;
use log::{debug, error, info};
use pointpath_core::Planner;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use std::future::Future;
use std::sync::Arc;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use errors::to_mcp_error;
// Re-export parameter types and result type from handlers for external use
pub use handlers::{CreateTrip, DeleteTrip, Id, ListTrips, McpResult, SelectOption};

/// MCP server for PointPath
#[derive(Clone)]
pub struct PointPathMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PointPathMcpServer {
    /// Create a new PointPath MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "create_trip",
        description = "Create a new trip planning session. Provide destination and depart_date (YYYY-MM-DD) as a minimum, plus the points_programs the traveler holds points in. Optional: origin (defaults to YYZ), return_date, travelers (1-9, default 1), trip_type ('flight', 'hotel', or 'both'), and cabin_preference ('economy', 'premium', 'business'). Returns the new trip ID for selecting options."
    )]
    async fn create_trip(&self, params: Parameters<CreateTrip>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.create_trip(params).await
    }

    #[tool(
        name = "list_trips",
        description = "List all trip sessions. Use archived=false (default) for trips being actively planned, or archived=true for completed/shelved trips. Optionally filter with 'destination' to match trips whose destination contains that text. Returns a formatted list with IDs, routes, and dates."
    )]
    async fn list_trips(&self, params: Parameters<ListTrips>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.list_trips(params).await
    }

    #[tool(
        name = "show_trip",
        description = "Display complete details of a specific trip including its route, dates, travelers, loyalty programs, and any flight or hotel selection already made. Use the trip ID to retrieve."
    )]
    async fn show_trip(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.show_trip(params).await
    }

    #[tool(
        name = "archive_trip",
        description = "Archive a booked or shelved trip to hide it from the active list. Archived trips are preserved and can be restored later with unarchive_trip. Use once a trip is fully booked or the planning is on hold."
    )]
    async fn archive_trip(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.archive_trip(params).await
    }

    #[tool(
        name = "unarchive_trip",
        description = "Restore an archived trip back to the active list. The trip and its selections are preserved exactly as they were when archived. Use when resuming planning for a previously shelved trip."
    )]
    async fn unarchive_trip(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.unarchive_trip(params).await
    }

    #[tool(
        name = "delete_trip",
        description = "Permanently delete a trip and its selections from the database. This operation cannot be undone and requires confirmed=true. Use with caution - consider archiving instead if you might need the trip later."
    )]
    async fn delete_trip(&self, params: Parameters<DeleteTrip>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.delete_trip(params).await
    }

    #[tool(
        name = "flight_options",
        description = "List the flight redemption options for a trip, with points cost, cash fees, a short rationale for each, and which option is recommended. Requires the trip ID. Not available for hotel-only trips."
    )]
    async fn flight_options(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.flight_options(params).await
    }

    #[tool(
        name = "hotel_options",
        description = "List the hotel redemption options for a trip, with per-night points cost and the total for the trip's stay length. Requires the trip ID. Not available for flight-only trips."
    )]
    async fn hotel_options(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.hotel_options(params).await
    }

    #[tool(
        name = "select_flight",
        description = "Select a flight redemption option for a trip by its catalog ID (as shown by flight_options). Replaces any previous flight selection. The selection feeds the booking roadmap."
    )]
    async fn select_flight(&self, params: Parameters<SelectOption>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.select_flight(params).await
    }

    #[tool(
        name = "select_hotel",
        description = "Select a hotel redemption option for a trip by its catalog ID (as shown by hotel_options). Replaces any previous hotel selection. The selection feeds the booking roadmap."
    )]
    async fn select_hotel(&self, params: Parameters<SelectOption>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.select_hotel(params).await
    }

    #[tool(
        name = "reset_selections",
        description = "Remove both the flight and hotel selections from a trip, returning it to its just-created state so different options can be picked. The trip itself is unchanged."
    )]
    async fn reset_selections(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.reset_selections(params).await
    }

    #[tool(
        name = "get_roadmap",
        description = "Synthesize the step-by-step booking roadmap for a trip from its current selections: transfer instructions, search-and-book steps, a confirmation step, totals, and a backup option. Steps are ordered so point transfers happen before booking. Works with partial selections; an empty trip yields just the confirmation step."
    )]
    async fn get_roadmap(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.get_roadmap(params).await
    }

    #[tool(
        name = "export_roadmap",
        description = "Export a trip's booking roadmap as plain text suitable for saving or sharing: 'Step N: instruction' lines with indented details and a blank line between steps. Same content as get_roadmap without markdown."
    )]
    async fn export_roadmap(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.export_roadmap(params).await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PointPathMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "pointpath".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"PointPath is a trip planning system for award travel: it manages trip sessions, presents loyalty-point redemption options for flights and hotels, and synthesizes a step-by-step booking roadmap from the traveler's selections.

## Core Concepts
- **Trips**: Planning sessions with a route (origin → destination), dates, traveler count, and the loyalty programs the traveler holds points in
- **Options**: Flight and hotel redemption choices from the catalog, each with a points cost, fees, and a recommendation
- **Roadmap**: Ordered booking instructions derived from the current selections, with point transfers sequenced before bookings

## Workflow Examples

### Planning a New Trip
1. Create a trip with `create_trip` - destination, depart_date, and the traveler's points programs
2. Compare redemptions with `flight_options` and `hotel_options`
3. Attach choices with `select_flight` and `select_hotel`
4. Call `get_roadmap` for the ordered booking instructions

### Revising a Plan
- Selections replace each other, so calling `select_flight` again swaps the choice
- `reset_selections` clears both slots to start over
- The roadmap always reflects the current selections; re-request it after any change

### Managing Multiple Trips
- Use `list_trips` to see active sessions, with an optional destination filter
- Archive booked trips with `archive_trip` to keep the list focused
- View archived trips with `list_trips` (archived=true) for reference

## Best Practices
- Record every loyalty program the traveler holds; the options lean on transfer partners
- Do transfer steps first: point transfers can take 24-48 hours and bookings depend on them
- Use `export_roadmap` to hand the traveler a plain-text copy of the instructions

## Tool Categories
- **Trip Management**: create_trip, list_trips, show_trip, archive_trip, unarchive_trip, delete_trip
- **Options & Selections**: flight_options, hotel_options, select_flight, select_hotel, reset_selections
- **Roadmap**: get_roadmap, export_roadmap"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: PointPathMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting PointPath MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
