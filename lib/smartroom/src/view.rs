//! Presentation derived from a [`RoomState`]. Rebuilt after every
//! reconciliation and never stored.

use crate::RoomState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Alert,
}

impl Tone {
    fn alert_if(condition: bool) -> Tone {
        if condition {
            Tone::Alert
        } else {
            Tone::Normal
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub title: &'static str,
    pub value: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Actuator {
    pub title: &'static str,
    pub is_on: bool,
    /// Toggling only has an effect in manual mode.
    pub enabled: bool,
    pub action: &'static str,
    pub hint: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub connected: bool,
    pub temperature: Reading,
    pub humidity: Reading,
    pub gas: Reading,
    pub gas_hint: Option<&'static str>,
    pub manual_mode: bool,
    pub fan: Actuator,
    pub led: Actuator,
    pub temp_threshold: String,
    pub humidity_min_threshold: String,
}

impl View {
    pub fn new(state: &RoomState, connected: bool) -> View {
        let manual = state.manual_mode;

        View {
            connected,
            temperature: Reading {
                title: "Temperature",
                value: format!("{:.1}°C", state.temperature),
                tone: temperature_tone(state),
            },
            humidity: Reading {
                title: "Humidity",
                value: format!("{:.1}%", state.humidity),
                tone: humidity_tone(state),
            },
            gas: Reading {
                title: "Gas",
                value: if state.gas_detected {
                    "GAS DETECTED".to_string()
                } else {
                    "safe".to_string()
                },
                tone: Tone::alert_if(state.gas_detected),
            },
            gas_hint: state
                .gas_detected
                .then_some("turn the fan on to ventilate the room"),
            manual_mode: manual,
            fan: Actuator {
                title: "Fan",
                is_on: state.fan_status,
                enabled: manual,
                action: if state.fan_status { "turn fan off" } else { "turn fan on" },
                hint: (!manual).then_some(
                    "auto mode: the fan follows temperature, humidity and gas readings",
                ),
            },
            led: Actuator {
                title: "LED",
                is_on: state.led_status,
                enabled: manual,
                action: if state.led_status { "turn LED off" } else { "turn LED on" },
                hint: (!manual).then_some("auto mode: the LED lights up when gas is detected"),
            },
            temp_threshold: format!("{}°C", state.temp_threshold.trunc()),
            humidity_min_threshold: format!("{}%", state.humidity_min_threshold.trunc()),
        }
    }
}

/// Alert from the threshold upwards.
pub fn temperature_tone(state: &RoomState) -> Tone {
    Tone::alert_if(state.temperature >= state.temp_threshold)
}

/// Alert below the minimum.
pub fn humidity_tone(state: &RoomState) -> Tone {
    Tone::alert_if(state.humidity < state.humidity_min_threshold)
}
