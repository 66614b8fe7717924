pub mod app;
pub mod components;
pub mod core;
pub mod dnd;
pub mod features;
pub mod logging;
