pub mod auth;
pub mod error_handler;
pub mod request_log;
