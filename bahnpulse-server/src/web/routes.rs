//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::StationId;
use crate::generator::JourneyProvider;
use crate::route::convert_journeys;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/info", get(info_page))
        .route("/api/stations/search", get(search_stations))
        .route("/api/journeys", get(search_journeys))
        .route("/api/departures", get(departure_board))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let stations = state.catalog.iter().map(StationOption::from_station).collect();
    Html(
        IndexTemplate { stations }
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Info page.
async fn info_page() -> impl IntoResponse {
    Html(
        InfoTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("No such page: {}", uri.path()),
    }
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);

    let stations = state
        .catalog
        .search(&req.q, limit)
        .into_iter()
        .map(StationResult::from_station)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a station identifier from a query parameter.
fn parse_station(raw: &str, role: &str) -> Result<StationId, AppError> {
    StationId::parse_normalized(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {role} station {raw:?}: {e}"),
    })
}

/// Display name for a station, falling back to its identifier.
fn station_name(state: &AppState, id: &StationId) -> String {
    state
        .catalog
        .get(id.as_str())
        .map(|s| s.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Search for connections between two stations.
async fn search_journeys(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<JourneySearchRequest>,
) -> Result<Response, AppError> {
    let from = parse_station(&req.from, "origin")?;
    let to = parse_station(&req.to, "destination")?;

    let journeys = state.provider.journeys(&from, &to, None).await;
    let routes = convert_journeys(&journeys);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteListTemplate {
            from_name: station_name(&state, &from),
            to_name: station_name(&state, &to),
            routes: routes.iter().map(RouteView::from_route).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(JourneySearchResponse { routes }).into_response())
    }
}

/// Departure board for a station.
async fn departure_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<DepartureBoardRequest>,
) -> Result<Response, AppError> {
    let station = parse_station(&req.station, "board")?;

    let departures = state.provider.departures(&station, None).await;

    if accepts_html(&headers) {
        let template = DepartureBoardTemplate {
            station_name: station_name(&state, &station),
            departures: departures.iter().map(DepartureView::from_departure).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let station_name = state.catalog.get(station.as_str()).map(|s| s.name.clone());
        Ok(Json(DepartureBoardResponse {
            station: station.to_string(),
            station_name,
            departures: departures.iter().map(DepartureResult::from_departure).collect(),
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), "{message}");
        } else {
            warn!(status = status.as_u16(), "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::generator::{GeneratorConfig, SimulatedProvider};
    use crate::stations::StationCatalog;

    fn app() -> Router {
        let catalog = Arc::new(StationCatalog::germany());
        let provider = SimulatedProvider::with_seed(
            catalog.clone(),
            Arc::new(GeneratorConfig::instant()),
            42,
        );
        create_router(AppState::new(catalog, provider), "static")
    }

    async fn get(uri: &str, accept: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::builder().uri(uri);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }

        let response = app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get(uri, None).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[test]
    fn accepts_html_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            "text/html,application/xhtml+xml".parse().unwrap(),
        );
        assert!(accepts_html(&headers));
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = get("/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn pages_render() {
        let (status, body) = get("/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Find a connection"));
        assert!(body.contains("8000261"));

        let (status, body) = get("/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("About BahnPulse"));
    }

    #[tokio::test]
    async fn station_search() {
        let (status, json) = get_json("/api/stations/search?q=berlin").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["stations"][0]["id"], "8000105");
        assert_eq!(json["stations"][0]["city"], "Berlin");

        let (_, json) = get_json("/api/stations/search?q=hbf&limit=3").await;
        assert_eq!(json["stations"].as_array().unwrap().len(), 3);

        let (_, json) = get_json("/api/stations/search?q=paris").await;
        assert!(json["stations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn journeys_json() {
        let (status, json) = get_json("/api/journeys?from=8000105&to=8000261").await;
        assert_eq!(status, StatusCode::OK);

        let routes = json["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 7);
        for route in routes {
            assert!(!route["trains"].as_array().unwrap().is_empty());
            assert_eq!(route["transfers"], 0);
        }
    }

    #[tokio::test]
    async fn journeys_unknown_station_is_empty() {
        let (status, json) = get_json("/api/journeys?from=1234567&to=8000261").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["routes"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn journeys_malformed_station_is_bad_request() {
        let (status, json) = get_json("/api/journeys?from=abc-def&to=8000261").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("origin"));
    }

    #[tokio::test]
    async fn journeys_missing_parameter_is_bad_request() {
        let (status, _) = get("/api/journeys?from=8000105", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn journeys_html_fragment() {
        let (status, body) = get(
            "/api/journeys?from=8000105&to=8000261",
            Some("text/html"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("badge--ice"));
        assert!(!body.contains("<html"));
        assert!(!body.contains("No connections found"));

        let (_, body) = get(
            "/api/journeys?from=1234567&to=8000261",
            Some("text/html"),
        )
        .await;
        assert!(body.contains("No connections found"));
    }

    #[tokio::test]
    async fn departures_json() {
        let (status, json) = get_json("/api/departures?station=8000152").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["station"], "8000152");
        assert_eq!(json["station_name"], "Frankfurt(Main)Hbf");
        assert_eq!(json["departures"].as_array().unwrap().len(), 20);

        let (_, json) = get_json("/api/departures?station=1234567").await;
        assert!(json["station_name"].is_null());
        assert!(json["departures"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn departures_html_fragment() {
        let (status, body) = get("/api/departures?station=8000096", Some("text/html")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Departures from Stuttgart Hbf"));
        assert!(body.contains("<table"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, json) = get_json("/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("/nowhere"));
    }
}
