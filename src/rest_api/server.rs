//! # Product Routes
//!
//! Axum wiring for `/api/products`. Each route extracts its inputs, calls the
//! [`ProductHandler`] and hands any error to [`ApiState::forward`], which logs
//! it in development mode before the central mapper renders it.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};

use crate::http_server::RunMode;
use crate::products::{Product, ProductRepository};

use super::errors::{ApiError, ApiResult};
use super::handler::ProductHandler;
use super::parser::{parse_patch, CreateProductRequest, ListQuery};
use super::response::{DataResponse, ListResponse, MessageResponse};

/// Route prefix for the product collection
pub const PRODUCTS_PATH: &str = "/api/products";

/// State shared by the product routes
pub struct ApiState {
    handler: ProductHandler,
    run_mode: RunMode,
}

impl ApiState {
    pub fn new(repository: ProductRepository, run_mode: RunMode) -> Self {
        Self {
            handler: ProductHandler::new(repository),
            run_mode,
        }
    }

    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Pass a handler result through, logging the full error in development.
    fn forward<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(err) = &result {
            if self.run_mode.is_development() {
                tracing::error!(
                    status = err.status_code().as_u16(),
                    error = ?err,
                    "request failed"
                );
            }
        }
        result
    }
}

type SharedState = Arc<ApiState>;

/// Build the product router. Each path is also served with a trailing slash.
pub fn product_routes(state: Arc<ApiState>) -> Router {
    let collection = || -> MethodRouter<SharedState> { get(list_handler).post(create_handler) };
    let item = || -> MethodRouter<SharedState> {
        get(get_handler).put(update_handler).delete(delete_handler)
    };

    Router::new()
        .route(PRODUCTS_PATH, collection())
        .route(&format!("{}/", PRODUCTS_PATH), collection())
        .route(&format!("{}/:id", PRODUCTS_PATH), item())
        .route(&format!("{}/:id/", PRODUCTS_PATH), item())
        .with_state(state)
}

fn body_error(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request(rejection.body_text())
}

async fn list_handler(
    State(state): State<SharedState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<ListResponse<Product>>> {
    let result = query
        .map_err(|e| ApiError::bad_request(e.body_text()))
        .and_then(|Query(query)| state.handler.list(query));
    state.forward(result).map(Json)
}

async fn get_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<Product>>> {
    state.forward(state.handler.get(&id)).map(Json)
}

async fn create_handler(
    State(state): State<SharedState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<Product>>)> {
    let result = body
        .map_err(body_error)
        .and_then(|Json(body)| state.handler.create(body));
    state
        .forward(result)
        .map(|response| (StatusCode::CREATED, Json(response)))
}

/// The body is read raw so that a PUT without one is an empty patch
async fn update_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<DataResponse<Product>>> {
    let result = parse_patch(&body).and_then(|patch| state.handler.update(&id, patch));
    state.forward(result).map(Json)
}

async fn delete_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<MessageResponse>>> {
    state.forward(state.handler.delete(&id)).map(Json)
}
