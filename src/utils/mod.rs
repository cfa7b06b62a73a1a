//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y formato de
//! valores para las vistas.

pub mod errors;
pub mod format;

pub use errors::*;
