//! Panel state and display region model.
//!
//! `PanelDisplay` is the plain-data form of a panel's visible regions:
//! description, running, output, error, spinner and the diagram image. The
//! controller mutates it, frontends only read snapshots of it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of one demo panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Idle description shown, nothing in flight.
    #[default]
    Idle,
    /// Running region shown, a check sequence may be in flight.
    Running,
    /// Last sequence completed with the connected diagram.
    Success,
    /// Last sequence ended in the error region.
    Error,
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Visible state of one panel's regions.
///
/// Region visibility is explicit rather than derived from `state` because
/// the output region stays visible through the error path (the resolve line
/// is kept on screen while the action error is shown below it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelDisplay {
    /// Lifecycle state.
    pub state: PanelState,
    /// Idle description region.
    pub description_visible: bool,
    /// "Running" region with the start/run controls.
    pub running_visible: bool,
    /// Activity spinner.
    pub spinner_visible: bool,
    /// Output region lines (resolve result, action status).
    pub output: Vec<String>,
    /// Output region visibility.
    pub output_visible: bool,
    /// Error region text; `None` means hidden.
    pub error: Option<String>,
    /// Current diagram asset path (connected or disconnected variant).
    pub diagram: String,
    /// Embedded frame content (request dump panel only).
    pub frame: Option<String>,
    /// When the last sequence finished, successfully or not.
    pub checked_at: Option<DateTime<Utc>>,
}

impl PanelDisplay {
    /// Idle display for a panel whose disconnected diagram is `diagram`.
    #[must_use]
    pub fn idle(diagram: impl Into<String>) -> Self {
        Self {
            state: PanelState::Idle,
            description_visible: true,
            running_visible: false,
            spinner_visible: false,
            output: Vec::new(),
            output_visible: false,
            error: None,
            diagram: diagram.into(),
            frame: None,
            checked_at: None,
        }
    }

    /// Append a line to the output region and make it visible.
    pub fn push_output(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
        self.output_visible = true;
    }

    /// Put `message` in the error region and show it.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.state = PanelState::Error;
    }

    /// Clear and hide the output and error regions.
    pub fn clear_results(&mut self) {
        self.output.clear();
        self.output_visible = false;
        self.error = None;
        self.frame = None;
    }
}
