//! Configuración del proyecto
//!
//! Este módulo contiene la configuración leída de variables de entorno.

pub mod environment;

pub use environment::*;
