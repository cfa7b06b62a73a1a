use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::InterventionType;

pub const TYPE_PALETTE: [&str; 5] = ["#8b5cf6", "#a78bfa", "#c4b5fd", "#ddd6fe", "#ede9fe"];

// Barra de "Maintenance Costs"
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostBar {
    pub month: String,
    pub cost: Decimal,
    pub cost_label: String,
}

// Porción de "Intervention Types"
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeSlice {
    pub intervention_type: InterventionType,
    pub count: usize,
    pub color: &'static str,
}

// Vista "Analytics"
#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub title: String,
    pub subtitle: String,
    pub cost_bars: Vec<CostBar>,
    pub type_slices: Vec<TypeSlice>,
    pub total_cost_label: String,
    pub total_interventions: usize,
}
