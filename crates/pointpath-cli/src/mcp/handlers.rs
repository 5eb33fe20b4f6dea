//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use pointpath_core::{
    display::{CreateResult, OperationStatus, RoadmapText, SelectResult},
    params as core, Planner,
};
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, ErrorData, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{prompts::PROMPT_TEMPLATES, to_mcp_error};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Wraps any core parameter type in a transparent serde container, adding the
/// Deserialize and JsonSchema impls the MCP protocol needs while keeping the
/// core types clean of framework dependencies. `#[serde(transparent)]` passes
/// JSON straight through to the wrapped type, so the same validation runs for
/// the CLI and the MCP server.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreateTrip = McpParams<core::CreateTrip>;
pub type DeleteTrip = McpParams<core::DeleteTrip>;
pub type ListTrips = McpParams<core::ListTrips>;
pub type SelectOption = McpParams<core::SelectOption>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn create_trip(&self, Parameters(params): Parameters<CreateTrip>) -> McpResult {
        debug!("create_trip: {:?}", params);

        let trip = self
            .planner
            .lock()
            .await
            .create_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create trip", &e))?;

        let result = CreateResult::new(trip);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn list_trips(&self, Parameters(params): Parameters<ListTrips>) -> McpResult {
        debug!("list_trips: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let trips = planner
            .list_trips_display(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list trips", &e))?;

        let title = if trips.is_empty() {
            if inner_params.archived {
                "No archived trips found"
            } else {
                "No active trips found"
            }
        } else if inner_params.archived {
            "Archived Trips"
        } else {
            "Active Trips"
        };

        let result = format!("# {}\n\n{}", title, trips);
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_trip: {:?}", params);

        let trip = self
            .planner
            .lock()
            .await
            .get_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get trip", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Trip with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;

        Ok(CallToolResult::success(vec![Content::text(
            trip.to_string(),
        )]))
    }

    pub async fn archive_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("archive_trip: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let _archived_trip = planner
            .archive_trip(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to archive trip", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Trip with ID {} not found", inner_params.id),
                    None,
                )
            })?;

        let result = OperationStatus::success(format!(
            "Archived trip with ID {}. Use 'unarchive_trip' to restore it.",
            inner_params.id
        ));
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn unarchive_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("unarchive_trip: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let _unarchived_trip = planner
            .unarchive_trip(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to unarchive trip", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Trip with ID {} not found", inner_params.id),
                    None,
                )
            })?;

        let result = OperationStatus::success(format!(
            "Unarchived trip with ID {}. Trip is now active again.",
            inner_params.id
        ));
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn delete_trip(&self, Parameters(params): Parameters<DeleteTrip>) -> McpResult {
        debug!("delete_trip: {:?}", params);
        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();

        let deleted_trip = planner
            .delete_trip(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete trip", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Trip with ID {} not found", inner_params.id),
                    None,
                )
            })?;

        let result = OperationStatus::success(format!(
            "Permanently deleted trip '{} → {}' (ID: {}). This action cannot be undone.",
            deleted_trip.origin, deleted_trip.destination, inner_params.id
        ));
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn flight_options(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("flight_options: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let options = planner
            .flight_options_display(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to get flight options", &e))?;

        let result = format!("# Flight Options for Trip {}\n\n{}", inner_params.id, options);
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn hotel_options(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("hotel_options: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let options = planner
            .hotel_options_display(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to get hotel options", &e))?;

        let result = format!("# Hotel Options for Trip {}\n\n{}", inner_params.id, options);
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn select_flight(&self, Parameters(params): Parameters<SelectOption>) -> McpResult {
        debug!("select_flight: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let option = planner
            .select_flight(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to select flight", &e))?;

        let result = SelectResult::new(inner_params.trip_id, option);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn select_hotel(&self, Parameters(params): Parameters<SelectOption>) -> McpResult {
        debug!("select_hotel: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let option = planner
            .select_hotel(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to select hotel", &e))?;

        let result = SelectResult::new(inner_params.trip_id, option);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn reset_selections(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("reset_selections: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let trip = planner
            .reset_selections(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to reset selections", &e))?;

        let result = OperationStatus::success(format!(
            "Cleared flight and hotel selections for trip {} → {} (ID: {})",
            trip.origin, trip.destination, trip.id
        ));
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn get_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("get_roadmap: {:?}", params);

        let roadmap = self
            .planner
            .lock()
            .await
            .roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get roadmap", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            roadmap.to_string(),
        )]))
    }

    pub async fn export_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("export_roadmap: {:?}", params);

        let roadmap = self
            .planner
            .lock()
            .await
            .roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to export roadmap", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            RoadmapText(&roadmap).to_string(),
        )]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let templates = &PROMPT_TEMPLATES;
        let prompts = templates
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = &PROMPT_TEMPLATES;
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            // Check if any required arguments are missing
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(McpError::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
