use crate::dto::{StatusBadge, VehicleCard, VehiclesView};
use crate::models::Vehicle;
use crate::repositories::FleetRepository;
use crate::utils::format::{format_mileage, format_short_date};

pub struct VehiclesController<'a> {
    repository: &'a FleetRepository,
}

impl<'a> VehiclesController<'a> {
    pub fn new(repository: &'a FleetRepository) -> Self {
        Self { repository }
    }

    pub fn view(&self) -> VehiclesView {
        VehiclesView {
            title: "Vehicles".to_string(),
            subtitle: "Manage your fleet inventory and status.".to_string(),
            cards: self.repository.vehicles().iter().map(vehicle_card).collect(),
        }
    }
}

fn vehicle_card(vehicle: &Vehicle) -> VehicleCard {
    let (label, tone) = vehicle.status.badge();
    VehicleCard {
        id: vehicle.id.clone(),
        name: vehicle.name.clone(),
        subtitle: format!("{} • {}", vehicle.year, vehicle.model),
        license_plate: vehicle.license_plate.clone(),
        badge: StatusBadge {
            label: label.to_string(),
            tone,
        },
        mileage_label: format_mileage(vehicle.mileage),
        next_service_label: format!("Next: {}", format_short_date(vehicle.next_service_date)),
        image: vehicle.image.clone(),
    }
}
