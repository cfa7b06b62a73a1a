//! Salida de texto
//!
//! `Display` para la página del shell y cada vista. El layout imita el
//! dashboard: menú lateral, header, y el contenido de la vista activa.

use rust_decimal::prelude::ToPrimitive;
use std::fmt;

use crate::dto::{
    CalendarView, DashboardView, MaintenanceLogView, SettingsView, ShellPage, StatsView,
    ViewContent, VehiclesView,
};

const RULE: &str = "────────────────────────────────────────────────────────────";
const BAR_WIDTH: usize = 30;
const HEALTH_BAR_WIDTH: usize = 10;

fn bar(filled: usize) -> String {
    "█".repeat(filled)
}

impl fmt::Display for ShellPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}    [{}] {}", self.brand, self.user_initials, self.user_name)?;
        writeln!(f, "{}", RULE)?;
        for entry in &self.nav {
            let cursor = if entry.active { '›' } else { ' ' };
            writeln!(f, "{} {} {}", cursor, entry.icon.glyph(), entry.label)?;
        }
        writeln!(f, "{}", RULE)?;
        write!(f, "{}", self.content)
    }
}

impl fmt::Display for ViewContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewContent::Dashboard(view) => fmt::Display::fmt(view, f),
            ViewContent::Calendar(view) => fmt::Display::fmt(view, f),
            ViewContent::Vehicles(view) => fmt::Display::fmt(view, f),
            ViewContent::Interventions(view) => fmt::Display::fmt(view, f),
            ViewContent::Stats(view) => fmt::Display::fmt(view, f),
            ViewContent::Settings(view) => fmt::Display::fmt(view, f),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f, "{}", self.date_label)?;
        writeln!(f)?;

        for metric in &self.metrics {
            write!(f, "{} {}: {}", metric.tone.marker(), metric.title, metric.value)?;
            if let Some(trend) = &metric.trend {
                write!(f, " ({})", trend)?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "UPCOMING & OVERDUE")?;
        for task in &self.upcoming {
            write!(f, "  {} {}", task.tone.marker(), task.intervention_type)?;
            match &task.vehicle_name {
                Some(name) => writeln!(f, " - {} • {}", name, task.date_label)?,
                None => writeln!(f, " • {}", task.date_label)?,
            }
        }
        if let Some(message) = &self.empty_message {
            writeln!(f, "  {}", message)?;
        }

        writeln!(f)?;
        writeln!(f, "FLEET HEALTH")?;
        for entry in &self.fleet_health {
            let filled = usize::from(entry.health_percent) * HEALTH_BAR_WIDTH / 100;
            writeln!(
                f,
                "  {:<16} {} {:<8} {:<10} {}%",
                entry.name,
                entry.tone.marker(),
                entry.label,
                bar(filled),
                entry.health_percent
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for VehiclesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "{}  [{} {}]", card.name, card.badge.tone.marker(), card.badge.label)?;
            writeln!(f, "  {}", card.subtitle)?;
            writeln!(f, "  Plate: {}", card.license_plate)?;
            writeln!(f, "  {}", card.mileage_label)?;
            writeln!(f, "  {}", card.next_service_label)?;
        }
        Ok(())
    }
}

impl fmt::Display for MaintenanceLogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<12} {:<16} {:<16} {:>8}  {}",
            "DATE", "VEHICLE", "INTERVENTION", "COST", "STATUS"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {:<16} {:<16} {:>8}  {} {}",
                row.date_label,
                row.vehicle_name.as_deref().unwrap_or(""),
                row.intervention_type.as_str(),
                row.cost_label,
                row.tone.marker(),
                row.status.as_str()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;
        writeln!(f, "{}", self.month_label)?;

        for weekday in self.weekdays.iter() {
            write!(f, "{:>5}", weekday)?;
        }
        writeln!(f)?;

        for week in &self.weeks {
            for cell in week {
                let label = match cell.day {
                    Some(day) if cell.highlighted => format!("[{}]", day),
                    Some(day) if !cell.entries.is_empty() => format!("{}*", day),
                    Some(day) => day.to_string(),
                    None => String::new(),
                };
                write!(f, "{:>5}", label)?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        for cell in self.weeks.iter().flatten() {
            if let Some(day) = cell.day {
                for entry in &cell.entries {
                    writeln!(f, "  {:>2}: {} {}", day, entry.tone.marker(), entry.label)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;

        writeln!(f, "MAINTENANCE COSTS (total {})", self.total_cost_label)?;
        let max = self
            .cost_bars
            .iter()
            .filter_map(|b| b.cost.to_f64())
            .fold(0.0_f64, f64::max);
        for cost_bar in &self.cost_bars {
            let filled = match cost_bar.cost.to_f64() {
                Some(cost) if max > 0.0 => ((cost / max) * BAR_WIDTH as f64).round() as usize,
                _ => 0,
            };
            writeln!(f, "  {:<4} {:>8} {}", cost_bar.month, cost_bar.cost_label, bar(filled))?;
        }

        writeln!(f)?;
        writeln!(f, "INTERVENTION TYPES ({} total)", self.total_interventions)?;
        for slice in &self.type_slices {
            writeln!(
                f,
                "  ■ {:<16} {:>3}  {}",
                slice.intervention_type.as_str(),
                slice.count,
                slice.color
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SettingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "Profile")?;
        writeln!(f, "  {}", self.profile_name)?;
        writeln!(f)?;
        writeln!(f, "Preferences")?;
        for preference in &self.preferences {
            writeln!(f, "  {:<16} {}", preference.label, preference.value)?;
        }
        Ok(())
    }
}
