//! Controllers
//!
//! Cada controller arma el view model de una vista a partir del
//! repositorio, las agregaciones y la configuración.

pub mod calendar_controller;
pub mod dashboard_controller;
pub mod maintenance_controller;
pub mod settings_controller;
pub mod shell_controller;
pub mod stats_controller;
pub mod vehicles_controller;

pub use calendar_controller::CalendarController;
pub use dashboard_controller::DashboardController;
pub use maintenance_controller::MaintenanceController;
pub use settings_controller::SettingsController;
pub use shell_controller::ShellController;
pub use stats_controller::StatsController;
pub use vehicles_controller::VehiclesController;
