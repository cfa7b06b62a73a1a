//! Repositorios de datos
//!
//! Acceso de solo lectura a la colección mock de la flota.

pub mod fleet_repository;

pub use fleet_repository::FleetRepository;
