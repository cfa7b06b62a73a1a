//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio de la flota (vehículos e
//! intervenciones), la navegación y los tonos de color.

pub mod intervention;
pub mod navigation;
pub mod tone;
pub mod vehicle;

pub use intervention::*;
pub use navigation::*;
pub use tone::*;
pub use vehicle::*;
