use chrono::NaiveDate;
use rust_decimal::Decimal;

use veloce_fleet::models::{Intervention, InterventionStatus, InterventionType, Vehicle, VehicleStatus};
use veloce_fleet::repositories::FleetRepository;
use veloce_fleet::services::{
    active_vehicle_count, cost_by_month, overdue_count, planned_count, resolve_vehicle,
    total_completed_cost, type_distribution, upcoming_tasks, GroupOrder, UPCOMING_TASK_LIMIT,
};

const STATUSES: [InterventionStatus; 3] = [
    InterventionStatus::Planned,
    InterventionStatus::Completed,
    InterventionStatus::Overdue,
];

// Colección determinista con fechas, tipos, costos y estados variados
fn generated_interventions(size: usize) -> Vec<Intervention> {
    (0..size)
        .map(|n| {
            let month = (n * 7 % 12) as u32 + 1;
            let day = (n * 5 % 28) as u32 + 1;
            let year = 2022 + (n % 3) as i32;
            Intervention {
                id: format!("i{}", n),
                vehicle_id: format!("v{}", n % 4),
                intervention_type: InterventionType::ALL[n * 3 % 5],
                date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                cost: Decimal::new((n as i64 * 1234) % 50_000, 2),
                status: STATUSES[n * 2 % 3],
                notes: None,
            }
        })
        .collect()
}

fn generated_vehicles(size: usize) -> Vec<Vehicle> {
    let statuses = [VehicleStatus::Active, VehicleStatus::ServiceNeeded, VehicleStatus::Archived];
    (0..size)
        .map(|n| Vehicle {
            id: format!("v{}", n),
            name: format!("Unit {}", n),
            model: "Generic".to_string(),
            year: 2015 + (n % 8) as u16,
            license_plate: format!("GN-{:03}", n),
            mileage: (n as u32) * 1500,
            status: statuses[n * 5 % 3],
            next_service_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            image: None,
        })
        .collect()
}

#[test]
fn test_active_count_equals_total_minus_archived() {
    for size in [0, 1, 2, 5, 13] {
        let vehicles = generated_vehicles(size);
        let archived = vehicles.iter().filter(|v| v.status == VehicleStatus::Archived).count();
        assert_eq!(active_vehicle_count(&vehicles), vehicles.len() - archived);
    }
}

#[test]
fn test_completed_cost_is_restricted_sum() {
    for size in [0, 1, 3, 10, 40] {
        let interventions = generated_interventions(size);
        let expected: Decimal = interventions
            .iter()
            .filter(|i| i.status == InterventionStatus::Completed)
            .map(|i| i.cost)
            .sum();
        assert_eq!(total_completed_cost(&interventions), expected);
    }

    let none_completed: Vec<Intervention> = generated_interventions(30)
        .into_iter()
        .filter(|i| i.status != InterventionStatus::Completed)
        .collect();
    assert_eq!(total_completed_cost(&none_completed), Decimal::ZERO);
}

#[test]
fn test_upcoming_invariants() {
    for size in [0, 1, 4, 9, 40] {
        let interventions = generated_interventions(size);
        let upcoming = upcoming_tasks(&interventions);

        assert!(upcoming.len() <= UPCOMING_TASK_LIMIT);
        assert!(upcoming.iter().all(|i| i.status != InterventionStatus::Completed));
        assert!(upcoming.windows(2).all(|w| w[0].date <= w[1].date));

        let pending = interventions.iter().filter(|i| i.status != InterventionStatus::Completed).count();
        assert_eq!(upcoming.len(), pending.min(UPCOMING_TASK_LIMIT));
    }
}

#[test]
fn test_grouping_conservation() {
    for size in [1, 2, 7, 40] {
        let interventions = generated_interventions(size);
        let total_cost: Decimal = interventions.iter().map(|i| i.cost).sum();

        for order in [GroupOrder::FirstSeen, GroupOrder::Chronological] {
            let by_month: Decimal = cost_by_month(&interventions, order).iter().map(|g| g.cost).sum();
            assert_eq!(by_month, total_cost);

            let by_type: usize = type_distribution(&interventions, order).iter().map(|g| g.count).sum();
            assert_eq!(by_type, interventions.len());
        }
    }
}

#[test]
fn test_month_groups_are_unique() {
    let interventions = generated_interventions(40);
    let groups = cost_by_month(&interventions, GroupOrder::FirstSeen);

    let mut months: Vec<&str> = groups.iter().map(|g| g.month).collect();
    months.sort_unstable();
    months.dedup();
    assert_eq!(months.len(), groups.len());
    assert!(groups.len() <= 12);
}

#[test]
fn test_resolution_idempotent_over_generated_data() {
    let vehicles = generated_vehicles(3);
    for intervention in generated_interventions(12) {
        let first = resolve_vehicle(&vehicles, &intervention.vehicle_id);
        let second = resolve_vehicle(&vehicles, &intervention.vehicle_id);
        assert_eq!(first, second);
    }
    // v3 no existe entre los tres vehículos generados
    assert!(resolve_vehicle(&vehicles, "v3").is_none());
}

#[test]
fn test_seed_headline_numbers() {
    let repository = FleetRepository::seeded().unwrap();

    assert_eq!(active_vehicle_count(repository.vehicles()), 3);
    assert_eq!(overdue_count(repository.interventions()), 1);
    assert_eq!(planned_count(repository.interventions()), 2);
    assert_eq!(total_completed_cost(repository.interventions()), Decimal::from(1280));
}
