use serde::{Deserialize, Serialize};

/// A user action the simulator understands, from either keyboard or buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    ToggleAnimation,
    SpeedUp,
    SpeedDown,
    ToggleTrail,
    ResetBounces,
}

/// Button element ids and the command each one triggers.
pub const CONTROLS: &[(&str, Command)] = &[
    ("playPauseBtn", Command::ToggleAnimation),
    ("speedUpBtn", Command::SpeedUp),
    ("speedDownBtn", Command::SpeedDown),
    ("trailBtn", Command::ToggleTrail),
    ("resetBtn", Command::ResetBounces),
];

impl Command {
    /// Map a `KeyboardEvent.key` value to a command, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            " " | "p" => Some(Self::ToggleAnimation),
            "arrowup" | "+" => Some(Self::SpeedUp),
            "arrowdown" | "-" => Some(Self::SpeedDown),
            "t" => Some(Self::ToggleTrail),
            "r" => Some(Self::ResetBounces),
            _ => None,
        }
    }

    /// Map a control button's element id to its command.
    pub fn from_control(id: &str) -> Option<Self> {
        CONTROLS
            .iter()
            .find(|(control, _)| *control == id)
            .map(|(_, cmd)| *cmd)
    }
}
