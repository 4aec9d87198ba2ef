pub mod error;
pub mod page;

pub use error::ApiError;
pub use page::{ListQuery, Page};
