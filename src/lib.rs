pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod http;
