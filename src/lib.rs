pub mod broker;
pub mod config;
