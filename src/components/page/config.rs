//! Tunables for the page behaviors.

use serde::Deserialize;

/// Page behavior configuration.
///
/// Every field can be overridden from a JSON `<script id="page-config">`
/// block; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	/// Pixels subtracted from a section's top when smooth-scrolling to it (fixed navbar height).
	pub nav_offset: f64,
	/// Added to `scrollY` to pick the "current" section.
	pub section_lookahead: f64,
	/// `scrollY` above which the navbar switches to its denser glass style.
	pub glass_threshold: f64,
	/// Section ids with a light background; the navbar inverts over them.
	pub light_sections: Vec<String>,
	/// Distance from the viewport bottom a card must pass before it is revealed.
	pub reveal_point: f64,
	/// Hero offset per scrolled pixel.
	pub parallax_speed: f64,
	/// Pointer offset from card center divided by this gives tilt degrees.
	pub tilt_divisor: f64,
	/// Visible fraction of a skill card that starts its bar.
	pub skill_threshold: f64,
	/// Delay between skill bars intersecting together.
	pub skill_stagger_ms: i32,
	/// How long a card keeps the `animated` class.
	pub skill_animated_ms: i32,
	/// Animation delay step between floating cards.
	pub float_stagger_secs: f64,
	/// How long the success message stays shown.
	pub success_visible_ms: i32,
	/// Shortest accepted name.
	pub name_min_len: usize,
	/// Shortest accepted message.
	pub message_min_len: usize,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			nav_offset: 70.0,
			section_lookahead: 100.0,
			glass_threshold: 50.0,
			light_sections: vec!["skills".to_string(), "projects".to_string()],
			reveal_point: 100.0,
			parallax_speed: 0.3,
			tilt_divisor: 20.0,
			skill_threshold: 0.2,
			skill_stagger_ms: 100,
			skill_animated_ms: 2000,
			float_stagger_secs: 0.5,
			success_visible_ms: 5000,
			name_min_len: 3,
			message_min_len: 10,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_json_is_default() {
		let cfg: PageConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(cfg, PageConfig::default());
	}

	#[test]
	fn test_override_light_sections() {
		let cfg: PageConfig =
			serde_json::from_str(r#"{ "light_sections": ["about"], "nav_offset": 90 }"#).unwrap();
		assert_eq!(cfg.light_sections, vec!["about".to_string()]);
		assert!((cfg.nav_offset - 90.0).abs() < 1e-9);
		assert_eq!(cfg.message_min_len, 10);
	}
}
