use crate::config::EnvironmentConfig;
use crate::dto::{Preference, SettingsView};

pub struct SettingsController<'a> {
    config: &'a EnvironmentConfig,
}

impl<'a> SettingsController<'a> {
    pub fn new(config: &'a EnvironmentConfig) -> Self {
        Self { config }
    }

    pub fn view(&self) -> SettingsView {
        let notifications = if self.config.notifications { "On" } else { "Off" };

        SettingsView {
            title: "Settings".to_string(),
            profile_name: self.config.user_name.clone(),
            preferences: vec![
                Preference {
                    label: "Currency".to_string(),
                    value: self.config.currency.clone(),
                },
                Preference {
                    label: "Distance Unit".to_string(),
                    value: self.config.distance_unit.clone(),
                },
                Preference {
                    label: "Notifications".to_string(),
                    value: notifications.to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_from_config() {
        let config = EnvironmentConfig {
            notifications: false,
            currency: "EUR (€)".to_string(),
            ..EnvironmentConfig::default()
        };
        let view = SettingsController::new(&config).view();

        assert_eq!(view.profile_name, "John Doe");
        assert_eq!(view.preferences[0].value, "EUR (€)");
        assert_eq!(view.preferences[1].value, "Kilometers (km)");
        assert_eq!(view.preferences[2], Preference { label: "Notifications".to_string(), value: "Off".to_string() });
    }
}
