use anyhow::Result;
use rmcp::{
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
        ServerHandler,
    },
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, PaginatedRequestParam, PromptMessage, PromptMessageRole,
        ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    prompt, prompt_handler, prompt_router,
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::HttpClient;
use crate::config::Config;
use crate::handlers::WeatherHandlers;
use crate::models::{
    ForecastSummaryArgs, GetAlertsRequest, GetForecastRequest, HeatSafetyTipsArgs,
    RenderPromptRequest, SevereWeatherAlertsArgs, TravelAdvisoryArgs,
};
use crate::prompts::{self, PromptArgs};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    handlers: Arc<WeatherHandlers<HttpClient>>,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = HttpClient::new(config)?;

        Ok(Self {
            handlers: Arc::new(WeatherHandlers::new(client, config.api_base.clone())),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        })
    }

    /// Renders a dedicated prompt from its catalog template
    fn prompt_result<A: PromptArgs>(args: A) -> GetPromptResult {
        let definition = A::definition();
        let text = prompts::render(definition.template, Some(&args.into_variables()));

        GetPromptResult {
            description: Some(definition.description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        }
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Tools: get-alerts (US state alerts), get-forecast (US coordinates), \
                list-prompts and render-prompt (weather prompt templates). \
                Each template is also available as an MCP prompt."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(
        name = "get-alerts",
        description = "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York)."
    )]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        request.validate()?;
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = self.handlers.alerts(&request.state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the weather forecast for a US location
    #[tool(
        name = "get-forecast",
        description = "Get the weather forecast for a US location. Provide latitude (-90 to 90) and longitude (-180 to 180), e.g. latitude: 40.7128, longitude: -74.0060 for New York."
    )]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        request.validate()?;
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self
            .handlers
            .forecast(request.latitude, request.longitude)
            .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Lists the prompt catalog
    #[tool(
        name = "list-prompts",
        description = "List the available weather prompt templates with their ids, descriptions and placeholders."
    )]
    async fn list_prompts(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Listing prompts");
        Ok(CallToolResult::success(vec![Content::text(
            prompts::format_catalog(),
        )]))
    }

    /// Renders a catalog prompt with caller-supplied variables
    #[tool(
        name = "render-prompt",
        description = "Render a weather prompt template by id. Optional variables fill the template's {placeholders}; unknown placeholders are left as-is."
    )]
    async fn render_prompt(
        &self,
        Parameters(request): Parameters<RenderPromptRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Rendering prompt: {}", request.prompt_id);

        let variables = request.variables.map(prompts::variables_from_json);
        let text = prompts::render_by_id(&request.prompt_id, variables.as_ref());

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[prompt_router]
impl Weather {
    /// Summarize the upcoming weather forecast for a location
    #[prompt(name = "forecast-summary")]
    async fn forecast_summary(
        &self,
        Parameters(args): Parameters<ForecastSummaryArgs>,
    ) -> Result<GetPromptResult, McpError> {
        tracing::info!("Building forecast-summary prompt for {}", args.location);
        Ok(Self::prompt_result(args))
    }

    /// Review active severe weather alerts for a US state
    #[prompt(name = "severe-weather-alerts")]
    async fn severe_weather_alerts(
        &self,
        Parameters(args): Parameters<SevereWeatherAlertsArgs>,
    ) -> Result<GetPromptResult, McpError> {
        tracing::info!("Building severe-weather-alerts prompt for {}", args.state);
        Ok(Self::prompt_result(args))
    }

    /// Heat safety guidance for hot weather at a location
    #[prompt(name = "heat-safety-tips")]
    async fn heat_safety_tips(
        &self,
        Parameters(args): Parameters<HeatSafetyTipsArgs>,
    ) -> Result<GetPromptResult, McpError> {
        tracing::info!("Building heat-safety-tips prompt for {}", args.location);
        Ok(Self::prompt_result(args))
    }

    /// Weather travel advisory for a trip between two locations
    #[prompt(name = "travel-advisory")]
    async fn travel_advisory(
        &self,
        Parameters(args): Parameters<TravelAdvisoryArgs>,
    ) -> Result<GetPromptResult, McpError> {
        tracing::info!(
            "Building travel-advisory prompt: {} -> {}",
            args.origin,
            args.destination
        );
        Ok(Self::prompt_result(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    // Nothing listens here; a request reaching the network would come back as
    // a failure message rather than an error.
    fn offline_weather() -> Weather {
        Weather::new(&Config {
            api_base: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        })
        .unwrap()
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn out_of_range_latitude_is_rejected() {
        let weather = offline_weather();
        let result = weather
            .get_forecast(Parameters(GetForecastRequest {
                latitude: 91.0,
                longitude: 0.0,
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn bad_state_code_is_rejected() {
        let weather = offline_weather();
        let result = weather
            .get_alerts(Parameters(GetAlertsRequest {
                state: "Texas".into(),
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn render_prompt_unknown_id() {
        let weather = offline_weather();
        let variables = serde_json::json!({ "location": "Phoenix" });
        let result = weather
            .render_prompt(Parameters(RenderPromptRequest {
                prompt_id: "nonexistent".into(),
                variables: variables.as_object().cloned(),
            }))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "Prompt not found: nonexistent");
    }

    #[tokio::test]
    async fn render_prompt_fills_variables() {
        let weather = offline_weather();
        let variables = serde_json::json!({ "location": "Phoenix", "temperature": 115 });
        let result = weather
            .render_prompt(Parameters(RenderPromptRequest {
                prompt_id: "heat-safety-tips".into(),
                variables: variables.as_object().cloned(),
            }))
            .await
            .unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("Prompt: Heat Safety Tips\n\n"));
        assert!(text.contains("Temperatures in Phoenix are expected to reach 115."));
    }

    #[tokio::test]
    async fn list_prompts_tool() {
        let weather = offline_weather();
        let result = weather.list_prompts().await.unwrap();
        assert_eq!(text_of(&result), prompts::format_catalog());
    }

    #[tokio::test]
    async fn dedicated_prompt_uses_catalog_text() {
        let weather = offline_weather();
        let result = weather
            .severe_weather_alerts(Parameters(SevereWeatherAlertsArgs {
                state: "FL".into(),
            }))
            .await
            .unwrap();

        assert_eq!(
            result.description.as_deref(),
            Some("Review active severe weather alerts for a US state")
        );
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, PromptMessageRole::User);
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => {
                assert!(text.starts_with("Check for active severe weather alerts in FL "));
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn server_info_advertises_tools_and_prompts() {
        let info = offline_weather().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert_eq!(info.server_info.name, "weather-prompt-server");
    }
}
