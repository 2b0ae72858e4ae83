use dioxus::prelude::*;

pub type AppSignal = Signal<AppState>;

/// Cross-component view state. Column filter/sort selections live in each
/// column's own signal; only the suggestion drawer needs shared state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub selected_lead_id: Option<String>,
    pub draft_note: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn select_lead(&self, lead_id: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        if state.selected_lead_id.as_deref() != Some(lead_id.as_str()) {
            state.draft_note = None;
        }
        state.selected_lead_id = Some(lead_id);
    }

    pub fn clear_selection(&self) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.selected_lead_id = None;
        state.draft_note = None;
    }

    pub fn choose_suggestion(&self, text: String) {
        let mut signal = self.state;
        signal.write().draft_note = Some(text);
    }

    pub fn clear_note(&self) {
        let mut signal = self.state;
        signal.write().draft_note = None;
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}
