use chrono::{Datelike, NaiveDate};

use crate::config::CalendarMonth;
use crate::dto::{CalendarCell, CalendarEntry, CalendarView, WEEKDAYS};
use crate::models::Intervention;
use crate::repositories::FleetRepository;
use crate::services::resolve_vehicle;

pub struct CalendarController<'a> {
    repository: &'a FleetRepository,
    month: CalendarMonth,
    today: NaiveDate,
}

impl<'a> CalendarController<'a> {
    pub fn new(repository: &'a FleetRepository, month: CalendarMonth, today: NaiveDate) -> Self {
        Self {
            repository,
            month,
            today,
        }
    }

    /// Grilla del mes, semanas de domingo a sábado
    ///
    /// Las celdas antes del día 1 y después del último día quedan vacías.
    /// Cada día lista las intervenciones con esa fecha exacta.
    pub fn view(&self) -> CalendarView {
        let mut view = CalendarView {
            title: "Schedule".to_string(),
            subtitle: "Plan and track maintenance windows.".to_string(),
            month_label: String::new(),
            weekdays: WEEKDAYS,
            weeks: Vec::new(),
        };

        let Some(first) = self.month.first_day() else {
            return view;
        };
        view.month_label = first.format("%B %Y").to_string();

        let leading = first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<CalendarCell> = (0..leading).map(|_| empty_cell()).collect();

        for day in 1..=days_in_month(first) {
            let Some(date) = first.with_day(day) else {
                continue;
            };
            cells.push(CalendarCell {
                day: Some(day),
                highlighted: date == self.today,
                entries: self.entries_for(date),
            });
        }

        while cells.len() % 7 != 0 {
            cells.push(empty_cell());
        }

        view.weeks = cells.chunks(7).map(|week| week.to_vec()).collect();
        view
    }

    fn entries_for(&self, date: NaiveDate) -> Vec<CalendarEntry> {
        self.repository
            .interventions()
            .iter()
            .filter(|task| task.date == date)
            .map(|task| CalendarEntry {
                intervention_id: task.id.clone(),
                label: self.entry_label(task),
                tone: task.status.calendar_tone(),
            })
            .collect()
    }

    fn entry_label(&self, task: &Intervention) -> String {
        match resolve_vehicle(self.repository.vehicles(), &task.vehicle_id) {
            Some(vehicle) => format!("{} - {}", task.intervention_type, vehicle.short_name()),
            None => task.intervention_type.to_string(),
        }
    }
}

fn empty_cell() -> CalendarCell {
    CalendarCell {
        day: None,
        highlighted: false,
        entries: Vec::new(),
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next.map(|n| (n - first).num_days() as u32).unwrap_or(31)
}
