//! Configuration of a brand new card

use extended_gauge_core::ConfigValue;
use serde_json::json;

pub const CARD_TYPE: &str = "custom:extended-gauge-card";

/// Value text color, the host's secondary text color
const NORMAL_COLOR: [u8; 3] = [114, 114, 114];
/// Gauge background, the host's primary background color
const BACKGROUND_COLOR: [u8; 3] = [250, 250, 250];

pub fn default_config() -> ConfigValue {
    ConfigValue::from(json!({
        "type": CARD_TYPE,
        "main": {
            "color_value": NORMAL_COLOR,
            "color_background": BACKGROUND_COLOR,
            "show_needle": true,
            "show_entity_name": true,
            "show_min_max_values": true,
            "show_segment_labels": true,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_shows_everything() {
        let config = default_config();
        assert_eq!(config.get("type").and_then(ConfigValue::as_str), Some(CARD_TYPE));

        let main = config.get("main").unwrap();
        for flag in ["show_needle", "show_entity_name", "show_min_max_values", "show_segment_labels"] {
            assert_eq!(main.get(flag).and_then(ConfigValue::as_bool), Some(true), "{flag}");
        }
        assert_eq!(main.get("color_value").and_then(ConfigValue::as_list).map(<[_]>::len), Some(3));
    }
}
