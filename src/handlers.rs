pub mod forecasts;
pub mod health;
pub mod index;
pub mod summary;
