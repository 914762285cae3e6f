//! products-api - REST CRUD service for products stored in one JSON document
//!
//! Layers, leaves first:
//! - `storage`: whole-document read/write of the JSON file
//! - `products`: the product model and repository (CRUD, search, filter)
//! - `rest_api`: request parsing, handlers, response envelopes, error mapping
//! - `http_server`: configuration and the Axum application
//! - `observability`: tracing setup
//! - `cli`: `init` and `serve` commands

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod products;
pub mod rest_api;
pub mod storage;
