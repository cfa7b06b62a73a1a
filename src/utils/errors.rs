//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema. Las degradaciones
//! de dominio (vehículo no encontrado, vista desconocida) no son errores:
//! aquí solo viven los fallos de arranque y de salida.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Seed data error: {0}")]
    Seed(#[source] serde_json::Error),

    #[error("Duplicate id in seed data: {0}")]
    DuplicateId(String),

    #[error("Invalid cost in seed data: {0}")]
    InvalidCost(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de configuración
pub fn config_error(variable: &str, value: &str, expected: &str) -> AppError {
    AppError::Config(format!(
        "{} has invalid value '{}' (expected {})",
        variable, value, expected
    ))
}

/// Función helper para crear errores de id duplicado
pub fn duplicate_id_error(resource: &str, id: &str) -> AppError {
    AppError::DuplicateId(format!("{} with id '{}' appears more than once", resource, id))
}

/// Función helper para crear errores de costo negativo
pub fn invalid_cost_error(id: &str, cost: &str) -> AppError {
    AppError::InvalidCost(format!("Intervention '{}' has negative cost {}", id, cost))
}
