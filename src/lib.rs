pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;

pub use error::{AppError, AppResult};
pub use response::{ApiResponse, PaginatedResponse};
pub use services::report::{ReportFilter, ReportQuery, ReportStore, SortKey};
