pub mod analysis;
pub mod champions;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
