use crate::config::EnvironmentConfig;
use crate::dto::{NavEntry, ShellPage, ViewContent};
use crate::models::{ViewId, NAV_ITEMS};
use crate::repositories::FleetRepository;
use crate::state::ShellState;

use super::{
    CalendarController, DashboardController, MaintenanceController, SettingsController,
    StatsController, VehiclesController,
};

pub const BRAND: &str = "Veloce Fleet";

/// Composición de la página: chrome (menú y header) + vista activa
pub struct ShellController<'a> {
    repository: &'a FleetRepository,
    config: &'a EnvironmentConfig,
}

impl<'a> ShellController<'a> {
    pub fn new(repository: &'a FleetRepository, config: &'a EnvironmentConfig) -> Self {
        Self { repository, config }
    }

    pub fn page(&self, state: &ShellState) -> ShellPage {
        let nav = NAV_ITEMS
            .iter()
            .map(|item| NavEntry {
                view: item.view,
                label: item.label.to_string(),
                icon: item.icon,
                active: item.view == state.active_view,
            })
            .collect();

        ShellPage {
            brand: BRAND.to_string(),
            user_name: self.config.user_name.clone(),
            user_initials: self.config.user_initials(),
            nav,
            active_view: state.active_view,
            content: self.content(state.active_view),
        }
    }

    fn content(&self, view: ViewId) -> ViewContent {
        log::debug!("🧭 Construyendo vista '{}'", view.id());

        match view {
            ViewId::Dashboard => {
                ViewContent::Dashboard(DashboardController::new(self.repository, self.config.today).view())
            }
            ViewId::Calendar => ViewContent::Calendar(
                CalendarController::new(self.repository, self.config.calendar_month, self.config.today).view(),
            ),
            ViewId::Vehicles => ViewContent::Vehicles(VehiclesController::new(self.repository).view()),
            ViewId::Interventions => {
                ViewContent::Interventions(MaintenanceController::new(self.repository).view())
            }
            ViewId::Stats => {
                ViewContent::Stats(StatsController::new(self.repository, self.config.group_order).view())
            }
            ViewId::Settings => ViewContent::Settings(SettingsController::new(self.config).view()),
        }
    }
}
