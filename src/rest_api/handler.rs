//! # Product Handler
//!
//! Validates request shape, dispatches to the repository and builds response
//! envelopes. Errors are returned, never handled here; the router forwards
//! them to the central mapper.

use crate::products::{Product, ProductPatch, ProductRepository, RepositoryError};

use super::errors::{ApiError, ApiResult};
use super::parser::{CreateProductRequest, ListQuery, ListRequest};
use super::response::{DataResponse, ListResponse, MessageResponse};

pub const PRODUCT_ID_REQUIRED: &str = "Product ID is required";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_DELETED: &str = "Product deleted successfully";
pub const CREATE_FAILED: &str =
    "Failed to create product, please check that product does not already exist";

pub struct ProductHandler {
    repository: ProductRepository,
}

impl ProductHandler {
    pub fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &ProductRepository {
        &self.repository
    }

    /// Search, filter or list everything, depending on which params are set
    pub fn list(&self, query: ListQuery) -> ApiResult<ListResponse<Product>> {
        if query.page.is_some() || query.limit.is_some() {
            tracing::debug!(
                page = ?query.page,
                limit = ?query.limit,
                "pagination parameters are not applied"
            );
        }

        let data = match ListRequest::parse(query)? {
            ListRequest::Search(name) => self.repository.search_by_name(&name)?,
            ListRequest::Filter(filter) => self.repository.filter_by_cost_and_sales(&filter)?,
            ListRequest::All => self.repository.get_all()?,
        };
        Ok(ListResponse::new(data))
    }

    pub fn get(&self, id: &str) -> ApiResult<DataResponse<Product>> {
        let id = require_id(id)?;
        let product = self
            .repository
            .get_by_id(id)?
            .ok_or_else(|| ApiError::not_found(PRODUCT_NOT_FOUND))?;
        Ok(DataResponse::new(product))
    }

    pub fn create(&self, body: CreateProductRequest) -> ApiResult<DataResponse<Product>> {
        let new_product = body.into_new_product()?;
        let product = self.repository.create(new_product).map_err(|e| match e {
            RepositoryError::DuplicateId(_) => ApiError::bad_request(CREATE_FAILED),
            other => other.into(),
        })?;
        Ok(DataResponse::new(product))
    }

    pub fn update(&self, id: &str, patch: ProductPatch) -> ApiResult<DataResponse<Product>> {
        let id = require_id(id)?;
        let product = self
            .repository
            .update_by_id(id, patch)?
            .ok_or_else(|| ApiError::not_found(PRODUCT_NOT_FOUND))?;
        Ok(DataResponse::new(product))
    }

    pub fn delete(&self, id: &str) -> ApiResult<DataResponse<MessageResponse>> {
        let id = require_id(id)?;
        if !self.repository.delete_by_id(id)? {
            return Err(ApiError::not_found(PRODUCT_NOT_FOUND));
        }
        Ok(DataResponse::new(MessageResponse::new(PRODUCT_DELETED)))
    }
}

fn require_id(id: &str) -> ApiResult<&str> {
    if id.trim().is_empty() {
        return Err(ApiError::bad_request(PRODUCT_ID_REQUIRED));
    }
    Ok(id)
}
