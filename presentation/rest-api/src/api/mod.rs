pub mod dish;
pub mod error;
pub mod health;
pub mod recipe;
pub mod tags;
