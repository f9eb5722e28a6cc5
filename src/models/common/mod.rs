pub mod error_body;
pub mod pagination;

pub use error_body::ApiErrorBody;
pub use pagination::{ListQuery, PaginatedResponse};
