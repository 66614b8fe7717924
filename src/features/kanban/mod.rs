pub mod components;
pub mod hooks;
pub mod models;
pub mod services;

pub use components::*;
pub use hooks::*;
pub use models::DragData;
pub use services::*;
