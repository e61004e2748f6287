use std::str::FromStr;

use serde::{Deserialize, Serialize};
use str_derive::Str;

use crate::Error;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Auto,
    Manual,
}

impl Mode {
    pub fn is_manual(self) -> bool {
        self == Mode::Manual
    }
}

/// User interaction with the controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleFan,
    ToggleLed,
    ToggleMode,
    SetMode(Mode),
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fan" => Ok(Command::ToggleFan),
            "led" => Ok(Command::ToggleLed),
            "mode" => Ok(Command::ToggleMode),
            other => Mode::from_str(other)
                .map(Command::SetMode)
                .map_err(|_| Error::UnknownCommand(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(Command::from_str("fan").unwrap(), Command::ToggleFan);
        assert_eq!(Command::from_str(" LED\n").unwrap(), Command::ToggleLed);
        assert_eq!(Command::from_str("mode").unwrap(), Command::ToggleMode);
        assert_eq!(
            Command::from_str("auto").unwrap(),
            Command::SetMode(Mode::Auto)
        );
        assert_eq!(
            Command::from_str("Manual").unwrap(),
            Command::SetMode(Mode::Manual)
        );

        assert!(matches!(
            Command::from_str("blink"),
            Err(Error::UnknownCommand(command)) if command == "blink"
        ));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Auto.to_string(), "auto");
        assert!(Mode::Manual.is_manual());
    }
}
