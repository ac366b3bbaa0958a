pub mod client;
pub mod endpoints;
