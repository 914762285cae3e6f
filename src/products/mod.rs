//! Products
//!
//! The product entity, id generation, threshold filters and the repository
//! that runs CRUD and query operations over the stored document.

mod errors;
mod filter;
mod id;
mod model;
mod repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use filter::{ComparisonOperator, InvalidOperator, ProductFilter};
pub use id::{generate_id, ID_LENGTH};
pub use model::{NewProduct, Product, ProductPatch};
pub use repository::ProductRepository;
