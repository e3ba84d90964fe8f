pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod icons;
pub mod model;
pub mod parser;
pub mod server;
