//! API response types and pagination utilities

pub mod pagination;
pub mod response;

pub use pagination::{DisplayWindow, Paginated, PaginationMeta};
pub use response::{Created, DataResponse, MessageResponse};
