//! # Product REST API
//!
//! HTTP-facing layer for the product collection: request parsing, the
//! handler that drives the repository, response envelopes and the error
//! taxonomy every failure is mapped through.

pub mod errors;
pub mod handler;
pub mod parser;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
pub use handler::ProductHandler;
pub use parser::{parse_patch, CreateProductRequest, ListQuery, ListRequest};
pub use response::{DataResponse, ListResponse, MessageResponse};
pub use server::{product_routes, ApiState, PRODUCTS_PATH};
