pub mod create_user;
pub mod error;

pub use create_user::{CreateUserRequest, create_user};
pub use error::{ApiError, ErrorResponse};
