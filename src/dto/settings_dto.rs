use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Preference {
    pub label: String,
    pub value: String,
}

// Vista "Settings"
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub title: String,
    pub profile_name: String,
    pub preferences: Vec<Preference>,
}
