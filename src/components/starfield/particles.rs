//! Ambient star particles.
//!
//! Each star drifts with a constant velocity, wraps at the surface edges and
//! twinkles by walking its opacity up and down a fixed band. Stars never
//! interact, so the update order does not matter.

use super::theme::StarStyle;

/// Source of uniform draws in `[0, 1)`.
///
/// The browser build uses [`MathRandom`]; tests substitute seeded or scripted
/// sources so a star's whole life is reproducible.
pub trait RandomSource {
	/// Next uniform draw in `[0, 1)`.
	fn next_f64(&mut self) -> f64;
}

/// `Math.random()` from the host page.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// A single twinkling star.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Star {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Circle radius in pixels.
	pub radius: f64,
	/// Current fill alpha.
	pub opacity: f64,
	/// Opacity change per frame (magnitude).
	pub twinkle_rate: f64,
	/// `1.0` while brightening, `-1.0` while dimming.
	pub twinkle_direction: f64,
}

impl Star {
	/// Build a freshly randomized star inside `width` x `height`.
	pub fn new(rng: &mut impl RandomSource, style: &StarStyle, width: f64, height: f64) -> Self {
		let mut star = Self::default();
		star.reset(rng, style, width, height);
		star
	}

	/// Re-randomize every field.
	///
	/// Draws happen in a fixed order (x, y, radius, vx, vy, opacity, rate,
	/// direction) so a given draw sequence always produces the same star.
	pub fn reset(&mut self, rng: &mut impl RandomSource, style: &StarStyle, width: f64, height: f64) {
		self.x = rng.next_f64() * width;
		self.y = rng.next_f64() * height;
		self.radius = rng.next_f64() * (style.radius_max - style.radius_min) + style.radius_min;
		self.vx = (rng.next_f64() - 0.5) * style.speed;
		self.vy = (rng.next_f64() - 0.5) * style.speed;
		self.opacity =
			rng.next_f64() * (style.opacity_max - style.opacity_min) + style.opacity_min;
		self.twinkle_rate =
			rng.next_f64() * (style.twinkle_max - style.twinkle_min) + style.twinkle_min;
		self.twinkle_direction = if rng.next_f64() > 0.5 { 1.0 } else { -1.0 };
	}

	/// Advance one frame against a `width` x `height` surface.
	pub fn update(&mut self, width: f64, height: f64, style: &StarStyle) {
		self.x += self.vx;
		self.y += self.vy;

		// Wrap around screen edges. A coordinate sitting exactly on the far
		// edge stays there until it moves strictly past it.
		if self.x < 0.0 {
			self.x = width;
		}
		if self.x > width {
			self.x = 0.0;
		}
		if self.y < 0.0 {
			self.y = height;
		}
		if self.y > height {
			self.y = 0.0;
		}

		// The flip only affects the next step, so opacity may overshoot the
		// band by at most one step.
		self.opacity += self.twinkle_rate * self.twinkle_direction;
		if self.opacity >= style.opacity_max || self.opacity <= style.opacity_min {
			self.twinkle_direction = -self.twinkle_direction;
		}
	}

	/// Whether this star is drawn with a glow.
	pub fn glows(&self, style: &StarStyle) -> bool {
		self.radius > style.glow_threshold
	}
}

/// Owns the fixed star population.
pub struct StarField {
	stars: Vec<Star>,
	style: StarStyle,
}

impl StarField {
	/// Build `style.count` stars inside `width` x `height`.
	pub fn new(style: StarStyle, rng: &mut impl RandomSource, width: f64, height: f64) -> Self {
		let mut stars = Vec::with_capacity(style.count);
		for _ in 0..style.count {
			stars.push(Star::new(rng, &style, width, height));
		}
		Self { stars, style }
	}

	/// Advance every star one frame.
	pub fn update(&mut self, width: f64, height: f64) {
		for star in &mut self.stars {
			star.update(width, height, &self.style);
		}
	}

	/// Stars in population (draw) order.
	pub fn stars(&self) -> &[Star] {
		&self.stars
	}

	/// Style the field was built with.
	pub fn style(&self) -> &StarStyle {
		&self.style
	}

	/// Number of stars; fixed at construction.
	pub fn len(&self) -> usize {
		self.stars.len()
	}

	/// True for a zero-star field.
	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}
}
