//! View State Machine
//!
//! `Loading -> Editing <-> Preview`, with `ConfigurationError` absorbing and
//! reachable only from `Loading`.

use crate::entries::selected_count;
use crate::error::EditError;
use crate::models::ListEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Loading,
    Editing,
    Preview,
    ConfigurationError(String),
}

impl ViewState {
    /// Configuration arrived
    pub fn loaded(&self) -> ViewState {
        match self {
            ViewState::Loading => ViewState::Editing,
            other => other.clone(),
        }
    }

    /// Configuration could not be loaded
    pub fn failed(&self, message: impl Into<String>) -> ViewState {
        match self {
            ViewState::Loading => ViewState::ConfigurationError(message.into()),
            other => other.clone(),
        }
    }

    /// Editing -> Preview, guarded by a non-empty selection
    pub fn preview(&self, entries: &[ListEntry]) -> Result<ViewState, EditError> {
        match self {
            ViewState::Editing if selected_count(entries) == 0 => Err(EditError::NothingSelected),
            ViewState::Editing => Ok(ViewState::Preview),
            other => Ok(other.clone()),
        }
    }

    /// Preview -> Editing, unconditional
    pub fn edit(&self) -> ViewState {
        match self {
            ViewState::Preview => ViewState::Editing,
            other => other.clone(),
        }
    }
}
