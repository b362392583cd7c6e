//! Backend of the forecast dashboard: republishes the forecast CSV files as
//! JSON and derives the dashboard's headline figures.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod provider;
pub mod router;
pub mod schemas;

mod tests;
