pub mod app;
pub mod cli;
pub mod configuration;
pub mod responses;
pub mod routes;
pub mod upload;
