pub mod crypto;
pub mod global_error_handler;
pub mod response;
