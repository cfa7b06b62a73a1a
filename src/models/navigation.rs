//! Modelo de navegación
//!
//! Identificadores de vista, íconos y la tabla del menú lateral.

use serde::Serialize;

/// Vista seleccionable desde el menú
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Calendar,
    Vehicles,
    Interventions,
    Stats,
    Settings,
}

impl ViewId {
    pub fn id(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Calendar => "calendar",
            ViewId::Vehicles => "vehicles",
            ViewId::Interventions => "interventions",
            ViewId::Stats => "stats",
            ViewId::Settings => "settings",
        }
    }

    /// Resolver un id de vista; un id desconocido cae en el dashboard
    pub fn from_id(id: &str) -> Self {
        match id.trim() {
            "calendar" => ViewId::Calendar,
            "vehicles" => ViewId::Vehicles,
            "interventions" => ViewId::Interventions,
            "stats" => ViewId::Stats,
            "settings" => ViewId::Settings,
            _ => ViewId::Dashboard,
        }
    }
}

/// Íconos del menú
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Icon {
    LayoutDashboard,
    Calendar,
    Car,
    Wrench,
    BarChart3,
    Settings,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "▦",
            Icon::Calendar => "▤",
            Icon::Car => "⛟",
            Icon::Wrench => "⚒",
            Icon::BarChart3 => "▥",
            Icon::Settings => "⚙",
        }
    }
}

/// Entrada del menú lateral
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewId,
    pub label: &'static str,
    pub icon: Icon,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { view: ViewId::Dashboard, label: "Dashboard", icon: Icon::LayoutDashboard },
    NavItem { view: ViewId::Calendar, label: "Calendar", icon: Icon::Calendar },
    NavItem { view: ViewId::Vehicles, label: "Vehicles", icon: Icon::Car },
    NavItem { view: ViewId::Interventions, label: "Maintenance", icon: Icon::Wrench },
    NavItem { view: ViewId::Stats, label: "Statistics", icon: Icon::BarChart3 },
    NavItem { view: ViewId::Settings, label: "Settings", icon: Icon::Settings },
];
