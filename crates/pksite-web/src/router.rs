//! Web router using Axum

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pksite_core::menu::{self, parse_accordion, parse_group};
use pksite_core::{render, CoreError, HeaderState};
use pksite_types::SiteConfig;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::shell;

/// Component stylesheet, compiled into the binary
pub const STYLESHEET: &str = include_str!("../static/pksite.css");

/// Create the web router
pub fn create_router(config: Arc<SiteConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/menu", get(menu_handler))
        .route("/api/header", get(header_handler))
        .route("/static/pksite.css", get(stylesheet_handler))
        .nest_service("/assets", ServeDir::new(&config.server.assets_dir));

    if let Some(bundle_dir) = &config.server.bundle_dir {
        router = router.nest_service("/pkg", ServeDir::new(bundle_dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// JSON error body with a status code
struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

async fn index_handler(State(config): State<Arc<SiteConfig>>) -> Html<String> {
    Html(shell::page(&config))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn menu_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "primary": menu::PRIMARY_LINKS,
        "groups": menu::groups(),
        "mobile_trailing": menu::MOBILE_TRAILING_LINK,
    }))
}

/// Query for `/api/header`: `menu=true&hover=services&expand=services,knowledge`
#[derive(Debug, Default, Deserialize)]
pub struct HeaderQuery {
    #[serde(default)]
    pub menu: bool,
    pub hover: Option<String>,
    pub expand: Option<String>,
}

impl HeaderQuery {
    /// State reached by opening the menu, hovering and expanding as requested
    pub fn to_state(&self) -> Result<HeaderState, CoreError> {
        let mut state = HeaderState::new();

        if self.menu {
            state.toggle_menu();
        }

        if let Some(hover) = self.hover.as_deref().filter(|h| !h.trim().is_empty()) {
            state.set_hovered(parse_group(hover)?);
        }

        let expand = self.expand.as_deref().unwrap_or_default();
        for id in expand.split(',').map(str::trim).filter(|id| !id.is_empty()) {
            let accordion = parse_accordion(id)?;
            if !state.accordion.is_open(accordion) {
                state.toggle_accordion(accordion);
            }
        }

        Ok(state)
    }
}

async fn header_handler(
    State(config): State<Arc<SiteConfig>>,
    Query(query): Query<HeaderQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = query.to_state()?;
    debug!(?state, "rendering header tree");

    Ok(Json(serde_json::json!({
        "state": state,
        "tree": render(&state, &config),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pksite_core::{AccordionGroup, GroupId};

    #[test]
    fn test_query_to_state() {
        let query = HeaderQuery {
            menu: true,
            hover: Some("knowledge".to_string()),
            expand: Some("services, knowledge,services".to_string()),
        };
        let state = query.to_state().unwrap();
        assert!(state.mobile_menu_open);
        assert_eq!(state.hovered, Some(GroupId::Knowledge));
        assert!(state.accordion.is_open(AccordionGroup::Services));
        assert!(state.accordion.is_open(AccordionGroup::Knowledge));
    }

    #[test]
    fn test_empty_query_is_initial_state() {
        assert_eq!(HeaderQuery::default().to_state().unwrap(), HeaderState::new());
    }

    #[test]
    fn test_query_rejects_unknown_groups() {
        let hover = HeaderQuery {
            hover: Some("blog".to_string()),
            ..Default::default()
        };
        assert!(matches!(hover.to_state(), Err(CoreError::UnknownGroup { .. })));

        let expand = HeaderQuery {
            expand: Some("quicklinks".to_string()),
            ..Default::default()
        };
        assert!(expand.to_state().is_err());
    }
}
