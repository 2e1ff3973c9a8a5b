//! Conversion between stored RGB triples and color strings

use extended_gauge_core::ConfigValue;
use regex::Regex;

/// `#rrggbb` for a stored `[r, g, b]` list; `None` for anything else
pub fn rgb_to_hex(value: &ConfigValue) -> Option<String> {
    let items = value.as_list()?;
    if items.len() != 3 {
        return None;
    }
    let mut hex = String::from("#");
    for item in items {
        let channel = u8::try_from(item.as_i64()?).ok()?;
        hex.push_str(&format!("{channel:02x}"));
    }
    Some(hex)
}

/// Parse `#rrggbb`, `#rgb` or `rgb(r, g, b)`
pub fn hex_to_rgb(color: &str) -> Option<[u8; 3]> {
    let color = color.trim();

    if color.starts_with("rgb") {
        let re = Regex::new(r"^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").ok()?;
        let caps = re.captures(color)?;
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        return Some([channel(1)?, channel(2)?, channel(3)?]);
    }

    let digits = color.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ]),
        3 => {
            let doubled: Vec<String> = digits.chars().map(|c| format!("{c}{c}")).collect();
            Some([channel(&doubled[0])?, channel(&doubled[1])?, channel(&doubled[2])?])
        }
        _ => None,
    }
}
