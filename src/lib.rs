//! Veloce Fleet
//!
//! Núcleo del dashboard de flota: modelos de dominio, datos mock,
//! agregaciones, view models de cada pantalla y navegación del shell.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod render;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
