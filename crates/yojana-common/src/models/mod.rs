pub mod auth;
pub mod quiz;
pub mod scheme;
