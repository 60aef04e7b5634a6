//! Surface settings applied to every material of the displayed model.

use serde::{Deserialize, Serialize};

const WHITE: [u8; 3] = [255, 255, 255];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSettings {
    /// `#rrggbb`, as produced by a color input.
    pub color: String,
    pub roughness: f64,
    pub metalness: f64,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            roughness: 0.5,
            metalness: 0.5,
        }
    }
}

impl MaterialSettings {
    /// Keeps the previous color when `color` is not a `#rrggbb` value.
    pub fn with_color(mut self, color: &str) -> Self {
        if parse_hex_color(color).is_some() {
            self.color = color.to_ascii_lowercase();
        }
        self
    }

    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = unit(roughness, self.roughness);
        self
    }

    pub fn with_metalness(mut self, metalness: f64) -> Self {
        self.metalness = unit(metalness, self.metalness);
        self
    }

    /// Linear RGBA in `0..=1`, the form glTF's `baseColorFactor` takes.
    pub fn base_color_factor(&self) -> [f64; 4] {
        let [r, g, b] = parse_hex_color(&self.color).unwrap_or(WHITE);
        [channel(r), channel(g), channel(b), 1.0]
    }
}

fn unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() { fallback } else { value.clamp(0.0, 1.0) }
}

/// sRGB byte to linear intensity.
fn channel(value: u8) -> f64 {
    let c = f64::from(value) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_neutral() {
        let settings = MaterialSettings::default();
        assert_eq!(settings.base_color_factor(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!((settings.roughness, settings.metalness), (0.5, 0.5));
    }

    #[test]
    fn factors_are_clamped_to_unit_range() {
        let settings = MaterialSettings::default()
            .with_roughness(1.7)
            .with_metalness(-0.2);
        assert_eq!(settings.roughness, 1.0);
        assert_eq!(settings.metalness, 0.0);
        assert_eq!(settings.clone().with_roughness(f64::NAN).roughness, 1.0);
    }

    #[test]
    fn only_hex_colors_are_accepted() {
        let settings = MaterialSettings::default().with_color("#FF0000");
        assert_eq!(settings.color, "#ff0000");
        assert_eq!(settings.base_color_factor(), [1.0, 0.0, 0.0, 1.0]);

        assert_eq!(settings.clone().with_color("red").color, "#ff0000");
        assert_eq!(settings.clone().with_color("#12345").color, "#ff0000");
        assert_eq!(parse_hex_color("#0a0B0c"), Some([10, 11, 12]));
        assert_eq!(parse_hex_color("#zz0000"), None);
        assert_eq!(parse_hex_color("#+f+f+f"), None);
    }

    #[test]
    fn mid_grey_is_linearised() {
        let [r, g, b, a] = MaterialSettings::default().with_color("#808080").base_color_factor();
        assert!((r - 0.2158).abs() < 1e-3);
        assert_eq!((r, a), (g, 1.0));
        assert_eq!(g, b);
    }
}
