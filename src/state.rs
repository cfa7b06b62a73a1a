//! Estado del shell
//!
//! Este módulo define el único estado de la interfaz: la vista activa. El
//! estado pertenece a la raíz de composición (`main`) y solo cambia a
//! través de `reduce`.

use crate::models::ViewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub active_view: ViewId,
}

/// Acciones del usuario sobre el shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(ViewId),
    /// Navegación por id de texto; un id desconocido lleva al dashboard
    NavigateTo(String),
}

/// Transición pura: estado + acción -> nuevo estado
pub fn reduce(mut state: ShellState, action: Action) -> ShellState {
    state.active_view = match action {
        Action::Navigate(view) => view,
        Action::NavigateTo(id) => ViewId::from_id(&id),
    };
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_dashboard() {
        assert_eq!(ShellState::default().active_view, ViewId::Dashboard);
    }

    #[test]
    fn test_navigate() {
        let state = reduce(ShellState::default(), Action::Navigate(ViewId::Calendar));
        assert_eq!(state.active_view, ViewId::Calendar);

        let state = reduce(state, Action::NavigateTo("vehicles".to_string()));
        assert_eq!(state.active_view, ViewId::Vehicles);
    }

    #[test]
    fn test_unknown_id_falls_back_to_dashboard() {
        let state = ShellState { active_view: ViewId::Stats };
        let state = reduce(state, Action::NavigateTo("history".to_string()));
        assert_eq!(state.active_view, ViewId::Dashboard);
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let before = ShellState { active_view: ViewId::Settings };
        let after = reduce(before, Action::Navigate(ViewId::Interventions));

        assert_eq!(before.active_view, ViewId::Settings);
        assert_eq!(after.active_view, ViewId::Interventions);
        assert_eq!(reduce(before, Action::Navigate(ViewId::Interventions)), after);
    }
}
