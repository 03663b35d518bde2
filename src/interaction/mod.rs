use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DisplayMode;

/// User action that dismisses the fullscreen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseTrigger {
    /// Click on the dimmed backdrop around the modal.
    Overlay,
    /// Close button in the modal header or footer.
    CloseControl,
}

/// Two-state presentation machine: `Inline` ⇄ `Fullscreen`.
///
/// Transitions that do not apply in the current state are ignored and report
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayState {
    mode: DisplayMode,
}

impl DisplayState {
    #[must_use]
    pub fn mode(self) -> DisplayMode {
        self.mode
    }

    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        self.mode.is_fullscreen()
    }

    pub fn open_fullscreen(&mut self) -> bool {
        if self.mode.is_fullscreen() {
            return false;
        }
        self.mode = DisplayMode::Fullscreen;
        debug!("chart display entered fullscreen");
        true
    }

    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.mode.is_fullscreen() {
            return false;
        }
        self.mode = DisplayMode::Inline;
        debug!(?trigger, "chart display returned inline");
        true
    }
}
