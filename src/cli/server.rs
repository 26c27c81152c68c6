//! HTTP server mode: a paginated demo listing

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::collection::{Collection, Paginated};
use crate::config::PaginateConfig;
use crate::error::{Error, Result};
use crate::finders::{MemoryStore, PaginateArgs, SortOrder, SqlFinder, SqlQuery};
use crate::view::{
    page_entries_info, pluralize, underscore, will_paginate, LinkRenderer, RenderContext,
    RequestContext,
};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// DuckDB database file to list from
    pub database: Option<PathBuf>,
    /// Table to list from the database
    pub table: Option<String>,
    /// Number of generated records when no database is given
    pub records: u64,
}

/// Where the listed records come from
pub enum RecordSource {
    /// Generated in-memory documents
    Memory(MemoryStore),
    /// A DuckDB query
    Database {
        finder: Mutex<SqlFinder>,
        query: SqlQuery,
    },
}

impl RecordSource {
    /// `count` generated records: `{"id": n, "title": "Record n"}`
    pub fn generated(count: u64) -> Self {
        let documents =
            (1..=count).map(|id| json!({ "id": id, "title": format!("Record {id}") }));
        RecordSource::Memory(MemoryStore::new("Record").with_documents(documents))
    }

    /// Fetch one page of records
    fn fetch(&self, args: &PaginateArgs, config: &PaginateConfig) -> Result<Collection<Value>> {
        match self {
            RecordSource::Memory(store) => store
                .criteria()
                .sort_by("id", SortOrder::Asc)
                .paginate(args, config)?
                .to_collection(),
            RecordSource::Database { finder, query } => {
                let finder = finder
                    .lock()
                    .map_err(|_| Error::Other("database connection lock poisoned".to_string()))?;
                finder.paginate(query, args, config)
            }
        }
    }
}

/// App state shared across handlers
pub struct AppState {
    /// Pagination settings
    pub config: PaginateConfig,
    /// Listed records
    pub source: RecordSource,
}

impl AppState {
    /// Build the state for a server configuration
    pub fn from_config(server: &ServerConfig, config: PaginateConfig) -> Result<Self> {
        let source = match (&server.database, &server.table) {
            (Some(path), Some(table)) => RecordSource::Database {
                finder: Mutex::new(SqlFinder::open(path)?),
                query: SqlQuery::table(table)?,
            },
            (Some(_), None) => {
                return Err(Error::config("--database requires --table"));
            }
            _ => RecordSource::generated(server.records),
        };
        Ok(Self { config, source })
    }
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router for the given state
pub fn router(state: Arc<AppState>) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/records", get(list_records))
        .route("/records.html", get(list_records_html))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(server: ServerConfig, config: PaginateConfig) -> Result<()> {
    let state = AppState::from_config(&server, config)?;
    let app = router(Arc::new(state));

    let port = server.port;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn error_status(error: &Error) -> StatusCode {
    if error.is_invalid_argument() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Fetch the page requested by the query string
fn fetch_page(state: &AppState, context: &RequestContext) -> Result<Collection<Value>> {
    let args = PaginateArgs::from_params(context.params(), &state.config.view.param_name);
    state.source.fetch(&args, &state.config)
}

/// JSON listing: items, pagination metadata, typed links and the HTML fragment
async fn list_records(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    let context = RequestContext::from_parts(&method, &uri);

    let result = fetch_page(&state, &context).and_then(|page| {
        let renderer = LinkRenderer::prepare(&page, state.config.view.clone(), &context);
        let links = renderer.links()?;
        let html = will_paginate(&page, &state.config.view, &context)?;
        let mut body = serde_json::to_value(&page)?;
        body["links"] = serde_json::to_value(links)?;
        body["html"] = json!(html);
        Ok(body)
    });

    match result {
        Ok(body) => (StatusCode::OK, Json(ApiResponse::success(body))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, uri = %uri, "Failed to list records");
            (error_status(&e), Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}

/// HTML listing page
async fn list_records_html(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    let context = RequestContext::from_parts(&method, &uri);

    let result = fetch_page(&state, &context).and_then(|page| {
        let info = page_entries_info(&page, None, &state.config.entries_info)?;
        let links = will_paginate(&page, &state.config.view, &context)?;
        Ok(render_page(&page, &info, links.as_deref()))
    });

    match result {
        Ok(body) => Html(body.into_string()).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, uri = %uri, "Failed to list records");
            let body = html! { p class="error" { (e.to_string()) } };
            (error_status(&e), Html(body.into_string())).into_response()
        }
    }
}

/// Full listing page; `info` and `links` are already HTML
fn render_page(page: &Collection<Value>, info: &str, links: Option<&str>) -> Markup {
    let heading = pluralize(&underscore(page.item_type_name()));
    html! {
        (DOCTYPE)
        html {
            head { title { (heading) } }
            body {
                p class="page_info" { (PreEscaped(info)) }
                ul {
                    @for item in page.iter() {
                        li { (record_label(item)) }
                    }
                }
                @if let Some(links) = links {
                    (PreEscaped(links))
                }
            }
        }
    }
}

fn record_label(item: &Value) -> String {
    item.get("title")
        .and_then(Value::as_str)
        .map_or_else(|| item.to_string(), ToString::to_string)
}
