use serde::Serialize;

use crate::models::Tone;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// Tarea dentro de una celda
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarEntry {
    pub intervention_id: String,
    pub label: String,
    pub tone: Tone,
}

// Celda del mes; `day` vacío para el relleno antes y después del mes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub highlighted: bool,
    pub entries: Vec<CalendarEntry>,
}

// Vista "Schedule"
#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    pub title: String,
    pub subtitle: String,
    pub month_label: String,
    pub weekdays: [&'static str; 7],
    pub weeks: Vec<Vec<CalendarCell>>,
}
