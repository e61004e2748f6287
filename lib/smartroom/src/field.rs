use serde::{Deserialize, Serialize};
use str_derive::Str;

/// Children of the smartroom node.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Temperature,
    Humidity,
    GasDetected,
    FanStatus,
    LedStatus,
    ManualMode,
    TempThreshold,
    HumidityMinThreshold,
}

impl Field {
    /// Key the device firmware writes instead of the canonical one.
    pub const fn legacy_key(self) -> Option<&'static str> {
        match self {
            Field::Temperature => Some("suhu"),
            Field::Humidity => Some("kelembaban"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        let names: Vec<String> = Field::VARIANTS.iter().map(Field::to_string).collect();

        assert_eq!(
            names,
            [
                "temperature",
                "humidity",
                "gasDetected",
                "fanStatus",
                "ledStatus",
                "manualMode",
                "tempThreshold",
                "humidityMinThreshold",
            ]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Field::from_str("ledStatus").unwrap(), Field::LedStatus);
        assert_eq!(
            Field::from_str("humidityMinThreshold").unwrap(),
            Field::HumidityMinThreshold
        );
        assert!(Field::from_str("led_status").is_err());
        assert!(Field::from_str("suhu").is_err());
    }
}
