mod not_found;
mod response;

pub use not_found::{not_found_handler, not_found_response};
pub use response::{ApiError, ApiResponse};
