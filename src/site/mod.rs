pub mod app;
pub mod component;
pub mod config;
pub mod dock;
pub mod navbar;
pub mod welcome;
