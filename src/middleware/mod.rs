pub mod auth;

pub use auth::{require_admin, INIT_DATA_HEADER};
