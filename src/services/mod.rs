//! Services module
//!
//! Este módulo contiene la lógica de negocio: las agregaciones que
//! alimentan el dashboard y la vista de estadísticas.

pub mod fleet_metrics_service;

pub use fleet_metrics_service::*;
