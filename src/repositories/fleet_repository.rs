//! Repositorio de la flota
//!
//! Única fuente de datos: vehículos e intervenciones mock embebidos en el
//! binario. No hay persistencia ni mutación; las búsquedas son lineales.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;

use crate::models::{Intervention, Vehicle};
use crate::utils::errors::{duplicate_id_error, invalid_cost_error, AppError, AppResult};

const MOCK_FLEET_JSON: &str = include_str!("../../data/mock_fleet.json");

#[derive(Debug, Deserialize)]
struct FleetSeed {
    vehicles: Vec<Vehicle>,
    interventions: Vec<Intervention>,
}

#[derive(Debug, Clone, Default)]
pub struct FleetRepository {
    vehicles: Vec<Vehicle>,
    interventions: Vec<Intervention>,
}

impl FleetRepository {
    pub fn new(vehicles: Vec<Vehicle>, interventions: Vec<Intervention>) -> Self {
        Self {
            vehicles,
            interventions,
        }
    }

    /// Cargar los datos mock embebidos
    pub fn seeded() -> AppResult<Self> {
        Self::from_json(MOCK_FLEET_JSON)
    }

    /// Construir el repositorio desde un documento `{ vehicles, interventions }`
    ///
    /// Los ids deben ser únicos dentro de cada colección y ningún costo puede
    /// ser negativo. `vehicleId` no se verifica contra los vehículos.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let seed: FleetSeed = serde_json::from_str(raw).map_err(AppError::Seed)?;

        ensure_unique("Vehicle", seed.vehicles.iter().map(|v| v.id.as_str()))?;
        ensure_unique("Intervention", seed.interventions.iter().map(|i| i.id.as_str()))?;
        ensure_non_negative_costs(&seed.interventions)?;

        log::debug!(
            "📦 Seed cargado: {} vehículos, {} intervenciones",
            seed.vehicles.len(),
            seed.interventions.len()
        );

        Ok(Self::new(seed.vehicles, seed.interventions))
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn interventions(&self) -> &[Intervention] {
        &self.interventions
    }

}

fn ensure_unique<'a>(resource: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(duplicate_id_error(resource, id));
        }
    }
    Ok(())
}

fn ensure_non_negative_costs(interventions: &[Intervention]) -> AppResult<()> {
    match interventions.iter().find(|i| i.cost < Decimal::ZERO) {
        Some(intervention) => Err(invalid_cost_error(&intervention.id, &intervention.cost.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InterventionStatus, VehicleStatus};
    use crate::services::resolve_vehicle;

    #[test]
    fn test_seeded_fleet() {
        let repository = FleetRepository::seeded().unwrap();

        assert_eq!(repository.vehicles().len(), 3);
        assert_eq!(repository.interventions().len(), 6);
        assert_eq!(repository.vehicles()[1].status, VehicleStatus::ServiceNeeded);
        assert_eq!(repository.interventions()[1].status, InterventionStatus::Overdue);
    }

    #[test]
    fn test_seeded_costs_are_non_negative() {
        let repository = FleetRepository::seeded().unwrap();
        assert!(repository.interventions().iter().all(|i| i.cost >= Decimal::ZERO));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{
            "vehicles": [],
            "interventions": [
                {"id":"i1","vehicleId":"v1","type":"Brakes","date":"2023-10-01","cost":10,"status":"planned"},
                {"id":"i1","vehicleId":"v1","type":"Brakes","date":"2023-10-02","cost":10,"status":"planned"}
            ]
        }"#;

        let result = FleetRepository::from_json(raw);
        assert!(matches!(result, Err(AppError::DuplicateId(_))));
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let result = FleetRepository::from_json(r#"{"vehicles": "nope"}"#);
        assert!(matches!(result, Err(AppError::Seed(_))));
    }

    #[test]
    fn test_dangling_vehicle_reference_is_kept() {
        let raw = r#"{
            "vehicles": [],
            "interventions": [
                {"id":"i1","vehicleId":"missing","type":"Inspection","date":"2023-10-01","cost":0,"status":"completed"}
            ]
        }"#;

        let repository = FleetRepository::from_json(raw).unwrap();
        assert_eq!(repository.interventions().len(), 1);
        assert!(resolve_vehicle(repository.vehicles(), "missing").is_none());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let raw = r#"{
            "vehicles": [],
            "interventions": [
                {"id":"i1","vehicleId":"v1","type":"Brakes","date":"2023-10-01","cost":40,"status":"completed"},
                {"id":"i2","vehicleId":"v1","type":"General Repair","date":"2023-10-02","cost":-500,"status":"completed"}
            ]
        }"#;

        let result = FleetRepository::from_json(raw);
        match result {
            Err(AppError::InvalidCost(message)) => assert!(message.contains("'i2'"), "{}", message),
            other => panic!("expected InvalidCost, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_cost_accepted() {
        let raw = r#"{
            "vehicles": [],
            "interventions": [
                {"id":"i1","vehicleId":"v1","type":"Inspection","date":"2023-10-01","cost":0,"status":"completed"}
            ]
        }"#;

        assert!(FleetRepository::from_json(raw).is_ok());
    }
}
