use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod mcp;

use domain::dispatcher::ToolDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: ToolDispatcher,
    /// Bearer token guarding `/mcp` on the HTTP transport. Unused over stdio.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher,
            api_token: None,
        }
    }

    pub fn with_api_token(mut self, api_token: String) -> Self {
        self.api_token = Some(Arc::<str>::from(api_token));
        self
    }
}

pub fn build_app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/mcp", post(http::handlers::mcp_endpoint))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ));

    Router::new()
        .route("/health", get(http::handlers::health))
        .route("/.well-known/mcp", get(http::handlers::discovery))
        .merge(protected)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::client::testing::{client_with, ScriptedTransport};
    use crate::domain::{dispatcher::ToolDispatcher, registry::ToolRegistry};
    use crate::AppState;

    pub fn state_with(transport: Arc<ScriptedTransport>) -> AppState {
        let registry = ToolRegistry::new().expect("registry");
        AppState::new(ToolDispatcher::new(
            client_with(1, transport),
            Arc::new(registry),
        ))
    }
}
