//! Visual configuration for the star field.
//!
//! [`StarStyle`] carries every tunable constant of the simulation. Its
//! `Default` is the production look; pages may override any subset of fields
//! through a JSON `<script id="starfield-config">` block.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Alpha, 0.0 to 1.0
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` string. Alpha is written unrounded (straight alpha).
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Star field tuning.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarStyle {
	/// Number of stars, fixed for the lifetime of the field.
	pub count: usize,
	/// Minimum star radius
	pub radius_min: f64,
	/// Maximum star radius
	pub radius_max: f64,
	/// Full width of the symmetric velocity range per axis.
	/// Each component is drawn from `[-speed / 2, speed / 2]`.
	pub speed: f64,
	/// Lower bound of the twinkle band
	pub opacity_min: f64,
	/// Upper bound of the twinkle band
	pub opacity_max: f64,
	/// Slowest opacity change per frame
	pub twinkle_min: f64,
	/// Fastest opacity change per frame
	pub twinkle_max: f64,
	/// Stars strictly larger than this radius glow.
	pub glow_threshold: f64,
	/// Shadow blur radius used for the glow.
	pub glow_blur: f64,
	/// Shadow color used for the glow.
	pub glow_color: Color,
	/// Fill color; alpha is replaced by each star's opacity.
	pub color: Color,
}

impl Default for StarStyle {
	fn default() -> Self {
		Self {
			count: 150,
			radius_min: 0.5,
			radius_max: 2.5,
			speed: 0.3,
			opacity_min: 0.3,
			opacity_max: 1.0,
			twinkle_min: 0.01,
			twinkle_max: 0.03,
			glow_threshold: 1.5,
			glow_blur: 4.0,
			glow_color: Color::rgba(162, 136, 140, 0.5),
			color: Color::rgb(255, 255, 255),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_color_css() {
		assert_eq!(Color::rgba(162, 136, 140, 0.5).to_css(), "rgba(162, 136, 140, 0.5)");
		assert_eq!(
			Color::rgb(255, 255, 255).with_alpha(0.42).to_css(),
			"rgba(255, 255, 255, 0.42)"
		);
	}

	#[test]
	fn test_partial_override() {
		let style: StarStyle = serde_json::from_str(r#"{ "count": 40, "glow_blur": 6.0 }"#).unwrap();
		assert_eq!(style.count, 40);
		assert!((style.glow_blur - 6.0).abs() < 1e-9);
		// Untouched fields keep their defaults
		assert!((style.radius_max - 2.5).abs() < 1e-9);
		assert_eq!(style.glow_color, Color::rgba(162, 136, 140, 0.5));
	}

	#[test]
	fn test_override_color() {
		let style: StarStyle =
			serde_json::from_str(r#"{ "color": { "r": 200, "g": 220, "b": 255, "a": 1.0 } }"#)
				.unwrap();
		assert_eq!(style.color, Color::rgb(200, 220, 255));
	}
}
