use crate::{Field, Snapshot};

pub const DEFAULT_TEMP_THRESHOLD: f64 = 30.0;
pub const DEFAULT_HUMIDITY_MIN_THRESHOLD: f64 = 40.0;

/// Local mirror of the smartroom node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoomState {
    pub temperature: f64,
    pub humidity: f64,
    pub gas_detected: bool,
    pub fan_status: bool,
    pub led_status: bool,
    pub manual_mode: bool,
    pub temp_threshold: f64,
    pub humidity_min_threshold: f64,
}

impl Default for RoomState {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
            gas_detected: false,
            fan_status: false,
            led_status: false,
            manual_mode: false,
            temp_threshold: DEFAULT_TEMP_THRESHOLD,
            humidity_min_threshold: DEFAULT_HUMIDITY_MIN_THRESHOLD,
        }
    }
}

impl RoomState {
    /// Builds the state from scratch; every absent or mistyped field falls
    /// back to its default.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let defaults = Self::default();

        Self {
            temperature: snapshot
                .get_f64(Field::Temperature)
                .unwrap_or(defaults.temperature),
            humidity: snapshot
                .get_f64(Field::Humidity)
                .unwrap_or(defaults.humidity),
            gas_detected: snapshot
                .get_bool(Field::GasDetected)
                .unwrap_or(defaults.gas_detected),
            fan_status: snapshot
                .get_bool(Field::FanStatus)
                .unwrap_or(defaults.fan_status),
            led_status: snapshot
                .get_bool(Field::LedStatus)
                .unwrap_or(defaults.led_status),
            manual_mode: snapshot
                .get_bool(Field::ManualMode)
                .unwrap_or(defaults.manual_mode),
            temp_threshold: snapshot
                .get_f64(Field::TempThreshold)
                .unwrap_or(defaults.temp_threshold),
            humidity_min_threshold: snapshot
                .get_f64(Field::HumidityMinThreshold)
                .unwrap_or(defaults.humidity_min_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_full_snapshot() {
        let snapshot = Snapshot::new(json!({
            "temperature": 32.5,
            "humidity": 35.0,
            "gasDetected": true,
            "fanStatus": true,
            "ledStatus": false,
            "manualMode": true,
            "tempThreshold": 28.0,
            "humidityMinThreshold": 45.0,
        }));

        assert_eq!(
            RoomState::from_snapshot(&snapshot),
            RoomState {
                temperature: 32.5,
                humidity: 35.0,
                gas_detected: true,
                fan_status: true,
                led_status: false,
                manual_mode: true,
                temp_threshold: 28.0,
                humidity_min_threshold: 45.0,
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let state = RoomState::from_snapshot(&Snapshot::new(json!({})));
        assert_eq!(state, RoomState::default());

        let state = RoomState::from_snapshot(&Snapshot::new(Value::Null));
        assert_eq!(state.temp_threshold, 30.0);
        assert_eq!(state.humidity_min_threshold, 40.0);
    }

    #[test]
    fn test_malformed_fields_use_defaults() {
        let snapshot = Snapshot::new(json!({
            "temperature": "32",
            "humidity": null,
            "gasDetected": "yes",
            "fanStatus": 1,
            "ledStatus": [],
            "manualMode": {},
            "tempThreshold": false,
            "humidityMinThreshold": { "value": 10 },
        }));

        assert_eq!(RoomState::from_snapshot(&snapshot), RoomState::default());
    }

    #[test]
    fn test_partial_snapshot_does_not_keep_previous_values() {
        let first = RoomState::from_snapshot(&Snapshot::new(json!({
            "fanStatus": true,
            "temperature": 25.0,
        })));
        assert!(first.fan_status);

        let second = RoomState::from_snapshot(&Snapshot::new(json!({ "temperature": 26.0 })));
        assert!(!second.fan_status);
        assert_eq!(second.temperature, 26.0);
    }

    #[test]
    fn test_firmware_keys() {
        let snapshot = Snapshot::new(json!({ "suhu": 27.0, "kelembaban": 70.0 }));
        let state = RoomState::from_snapshot(&snapshot);

        assert_eq!(state.temperature, 27.0);
        assert_eq!(state.humidity, 70.0);
    }
}
