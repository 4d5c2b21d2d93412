use crate::domain::SummaryResult;

/// The controller's current phase in the request lifecycle.
///
/// There is exactly one instance, owned by the TUI controller. After the
/// first submission the state never returns to `Idle`; each new submit
/// re-enters `Loading` from whatever terminal state preceded it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(SummaryResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}
