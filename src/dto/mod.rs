//! View models
//!
//! Estructuras serializables que describen cada vista del dashboard.
//! Los controllers las construyen y `render` las convierte en texto o JSON.

pub mod calendar_dto;
pub mod dashboard_dto;
pub mod maintenance_dto;
pub mod settings_dto;
pub mod shell_dto;
pub mod stats_dto;
pub mod vehicle_dto;

pub use calendar_dto::*;
pub use dashboard_dto::*;
pub use maintenance_dto::*;
pub use settings_dto::*;
pub use shell_dto::*;
pub use stats_dto::*;
pub use vehicle_dto::*;
