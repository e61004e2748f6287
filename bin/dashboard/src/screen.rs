use std::fmt;

use colored::{ColoredString, Colorize};
use smartroom::view::{Actuator, Reading, Tone};
use smartroom::{Dispatch, View};

/// Text rendering of a [`View`].
pub struct Screen<'v>(pub &'v View);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "{}", "Smart Room Controller".bold())?;

        let connection = if view.connected {
            "● connected".green()
        } else {
            "● disconnected".red()
        };
        writeln!(f, "  {:<12} {connection}", "Connection")?;

        write_reading(f, &view.temperature, |value| value.yellow())?;
        write_reading(f, &view.humidity, |value| value.blue())?;
        write_reading(f, &view.gas, |value| value.green())?;

        if let Some(hint) = view.gas_hint {
            writeln!(f, "  {:<12} {}", "", hint.red())?;
        }

        let mode = if view.manual_mode { "manual" } else { "auto" };
        writeln!(f, "  {:<12} {}", "Mode", mode.bold())?;

        write_actuator(f, &view.fan, "fan")?;
        write_actuator(f, &view.led, "led")?;

        write!(
            f,
            "  {:<12} max {} · min humidity {}",
            "Thresholds", view.temp_threshold, view.humidity_min_threshold
        )
    }
}

fn write_reading(
    f: &mut fmt::Formatter<'_>,
    reading: &Reading,
    normal: fn(&str) -> ColoredString,
) -> fmt::Result {
    let value = match reading.tone {
        Tone::Normal => normal(&reading.value),
        Tone::Alert => reading.value.red().bold(),
    };

    writeln!(f, "  {:<12} {value}", reading.title)
}

fn write_actuator(f: &mut fmt::Formatter<'_>, actuator: &Actuator, input: &str) -> fmt::Result {
    let status = if actuator.is_on {
        "ON ".green().bold()
    } else {
        "OFF".dimmed()
    };

    let control = format!("[{input}] {}", actuator.action);
    let control = if actuator.enabled {
        control.normal()
    } else {
        control.dimmed()
    };

    writeln!(f, "  {:<12} {status}  {control}", actuator.title)?;

    if let Some(hint) = actuator.hint {
        writeln!(f, "  {:<12} {}", "", hint.dimmed())?;
    }

    Ok(())
}

/// Feedback line after a command.
pub struct DispatchLine(pub Dispatch);

impl fmt::Display for DispatchLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Dispatch::Written { field, value } => write!(f, "sent {field} = {value}"),
            Dispatch::Suppressed(_) => write!(
                f,
                "{}",
                "switch to manual mode to control the fan and the LED".yellow()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartroom::{Command, Field, RoomState};

    #[test]
    fn test_screen_contains_readings() {
        let state = RoomState {
            temperature: 32.0,
            humidity: 35.0,
            gas_detected: true,
            ..RoomState::default()
        };
        let view = View::new(&state, true);

        let text = Screen(&view).to_string();

        assert!(text.contains("32.0°C"));
        assert!(text.contains("35.0%"));
        assert!(text.contains("GAS DETECTED"));
        assert!(text.contains("connected"));
        assert!(text.contains("[fan] turn fan on"));
        assert!(text.contains("max 30°C · min humidity 40%"));
    }

    #[test]
    fn test_screen_when_disconnected() {
        let view = View::new(&RoomState::default(), false);

        assert!(Screen(&view).to_string().contains("disconnected"));
    }

    #[test]
    fn test_dispatch_line() {
        let written = DispatchLine(Dispatch::Written {
            field: Field::LedStatus,
            value: true,
        });
        assert_eq!(written.to_string(), "sent ledStatus = true");

        let suppressed = DispatchLine(Dispatch::Suppressed(Command::ToggleFan));
        assert!(suppressed.to_string().contains("manual mode"));
    }
}
