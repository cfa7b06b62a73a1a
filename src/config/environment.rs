//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración del dashboard desde el entorno (o un
//! `.env` cargado por `dotenvy`). Todas las variables tienen un valor por
//! defecto; un valor inválido es un error de configuración.

use chrono::{NaiveDate, Utc};
use std::env;

use crate::services::GroupOrder;
use crate::utils::errors::{config_error, AppResult};

/// Formato de salida del binario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Mes mostrado por el calendario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    /// Parsear `YYYY-MM` con año positivo
    ///
    /// Se separa en el primer `-`, así que un año negativo (`-0001-05`) no
    /// se acepta.
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl Default for CalendarMonth {
    fn default() -> Self {
        Self { year: 2023, month: 11 }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub initial_view: String,
    pub output_format: OutputFormat,
    pub group_order: GroupOrder,
    pub calendar_month: CalendarMonth,
    pub today: NaiveDate,
    pub user_name: String,
    pub currency: String,
    pub distance_unit: String,
    pub notifications: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            initial_view: "dashboard".to_string(),
            output_format: OutputFormat::default(),
            group_order: GroupOrder::default(),
            calendar_month: CalendarMonth::default(),
            today: Utc::now().date_naive(),
            user_name: "John Doe".to_string(),
            currency: "USD ($)".to_string(),
            distance_unit: "Kilometers (km)".to_string(),
            notifications: true,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración con una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("ENVIRONMENT") {
            config.environment = value;
        }
        if let Some(value) = lookup("FLEET_VIEW") {
            config.initial_view = value;
        }
        if let Some(value) = lookup("FLEET_OUTPUT") {
            config.output_format = match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(config_error("FLEET_OUTPUT", &value, "text or json")),
            };
        }
        if let Some(value) = lookup("FLEET_GROUP_ORDER") {
            config.group_order = GroupOrder::from_config_value(&value)
                .ok_or_else(|| config_error("FLEET_GROUP_ORDER", &value, "first-seen or chronological"))?;
        }
        if let Some(value) = lookup("FLEET_CALENDAR_MONTH") {
            config.calendar_month = CalendarMonth::parse(&value)
                .ok_or_else(|| config_error("FLEET_CALENDAR_MONTH", &value, "YYYY-MM"))?;
        }
        if let Some(value) = lookup("FLEET_TODAY") {
            config.today = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|_| config_error("FLEET_TODAY", &value, "YYYY-MM-DD"))?;
        }
        if let Some(value) = lookup("FLEET_USER_NAME") {
            config.user_name = value;
        }
        if let Some(value) = lookup("FLEET_CURRENCY") {
            config.currency = value;
        }
        if let Some(value) = lookup("FLEET_DISTANCE_UNIT") {
            config.distance_unit = value;
        }
        if let Some(value) = lookup("FLEET_NOTIFICATIONS") {
            config.notifications = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => true,
                "false" | "0" | "off" | "no" => false,
                _ => return Err(config_error("FLEET_NOTIFICATIONS", &value, "true or false")),
            };
        }

        Ok(config)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Iniciales del usuario para el avatar del header
    pub fn user_initials(&self) -> String {
        self.user_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = EnvironmentConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.initial_view, "dashboard");
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.group_order, GroupOrder::FirstSeen);
        assert_eq!(config.calendar_month, CalendarMonth { year: 2023, month: 11 });
        assert_eq!(config.user_initials(), "JD");
        assert!(config.notifications);
        assert!(config.is_development());
    }

    #[test]
    fn test_overrides() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("FLEET_VIEW", "stats"),
            ("FLEET_OUTPUT", "JSON"),
            ("FLEET_GROUP_ORDER", "chronological"),
            ("FLEET_CALENDAR_MONTH", "2024-02"),
            ("FLEET_TODAY", "2024-02-14"),
            ("FLEET_NOTIFICATIONS", "off"),
            ("FLEET_USER_NAME", "ada lovelace"),
        ]))
        .unwrap();

        assert_eq!(config.initial_view, "stats");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.group_order, GroupOrder::Chronological);
        assert_eq!(config.calendar_month, CalendarMonth { year: 2024, month: 2 });
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        assert!(!config.notifications);
        assert_eq!(config.user_initials(), "AL");
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        for (key, value) in [
            ("FLEET_OUTPUT", "xml"),
            ("FLEET_GROUP_ORDER", "alphabetical"),
            ("FLEET_CALENDAR_MONTH", "2023-13"),
            ("FLEET_TODAY", "yesterday"),
            ("FLEET_NOTIFICATIONS", "maybe"),
        ] {
            let result = EnvironmentConfig::from_lookup(lookup_from(&[(key, value)]));
            assert!(matches!(result, Err(AppError::Config(_))), "{} = {}", key, value);
        }
    }

    #[test]
    fn test_calendar_month_parse() {
        assert_eq!(CalendarMonth::parse(" 2024-02 "), Some(CalendarMonth { year: 2024, month: 2 }));
        assert_eq!(CalendarMonth::parse("2023-13"), None);
        assert_eq!(CalendarMonth::parse("2023"), None);
        assert_eq!(CalendarMonth::parse("-0001-05"), None);
    }

    #[test]
    fn test_is_development_follows_environment() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "production")])).unwrap();
        assert!(!config.is_development());
    }

    #[test]
    fn test_unknown_view_is_not_a_config_error() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("FLEET_VIEW", "reports")])).unwrap();
        assert_eq!(config.initial_view, "reports");
    }
}
