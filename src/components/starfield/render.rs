//! Per-frame drawing for the star field.
//!
//! A frame is: clear once, advance every star, then paint every star in
//! population order. Stars above the glow threshold are painted with a soft
//! shadow; all others with the shadow switched off.

use super::particles::StarField;
use super::surface::{Glow, Surface};

/// Run one full animation frame against `surface`.
pub fn frame(field: &mut StarField, surface: &mut impl Surface) {
	surface.clear();
	field.update(surface.width(), surface.height());
	render(field, surface);
}

/// Paint every star. Does not clear.
pub fn render(field: &StarField, surface: &mut impl Surface) {
	let style = field.style();
	let glow = Glow {
		blur: style.glow_blur,
		color: style.glow_color,
	};

	for star in field.stars() {
		surface.set_glow(star.glows(style).then_some(glow));
		surface.fill_circle(star.x, star.y, star.radius, style.color.with_alpha(star.opacity));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::particles::tests::{Scripted, Seeded};
	use crate::components::starfield::particles::Star;
	use crate::components::starfield::theme::{Color, StarStyle};

	#[derive(Clone, Debug, PartialEq)]
	enum Op {
		Clear,
		Glow(Option<Glow>),
		Circle { x: f64, y: f64, r: f64, color: Color },
	}

	struct Recording {
		width: f64,
		height: f64,
		ops: Vec<Op>,
	}

	impl Recording {
		fn new(width: f64, height: f64) -> Self {
			Self {
				width,
				height,
				ops: Vec::new(),
			}
		}

		fn circles(&self) -> usize {
			self.ops
				.iter()
				.filter(|op| matches!(op, Op::Circle { .. }))
				.count()
		}
	}

	impl Surface for Recording {
		fn width(&self) -> f64 {
			self.width
		}

		fn height(&self) -> f64 {
			self.height
		}

		fn clear(&mut self) {
			self.ops.push(Op::Clear);
		}

		fn set_glow(&mut self, glow: Option<Glow>) {
			self.ops.push(Op::Glow(glow));
		}

		fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Color) {
			self.ops.push(Op::Circle { x, y, r, color });
		}
	}

	#[test]
	fn test_frame_clears_once_then_draws_all() {
		let mut rng = Seeded::new(3);
		let mut field = StarField::new(StarStyle::default(), &mut rng, 800.0, 600.0);
		let mut surface = Recording::new(800.0, 600.0);

		frame(&mut field, &mut surface);

		assert_eq!(surface.ops.first(), Some(&Op::Clear));
		assert_eq!(surface.ops.iter().filter(|op| **op == Op::Clear).count(), 1);
		assert_eq!(surface.circles(), 150);
	}

	#[test]
	fn test_draw_uses_updated_state() {
		// x=0.5, y=0.5, radius=0.0 (0.5px), vx=1.0 (+0.15), vy=0.5 (0), opacity=0.5, rate=0.5, dir up
		let style = StarStyle {
			count: 1,
			..StarStyle::default()
		};
		let mut rng = Scripted::new(&[0.5, 0.5, 0.0, 1.0, 0.5, 0.5, 0.5, 0.9]);
		let mut field = StarField::new(style, &mut rng, 100.0, 100.0);
		let mut surface = Recording::new(100.0, 100.0);

		frame(&mut field, &mut surface);

		match &surface.ops[2] {
			Op::Circle { x, y, r, color } => {
				assert!((x - 50.15).abs() < 1e-9);
				assert!((y - 50.0).abs() < 1e-9);
				assert!((r - 0.5).abs() < 1e-9);
				assert_eq!((color.r, color.g, color.b), (255, 255, 255));
				assert!((color.a - 0.67).abs() < 1e-9);
			}
			other => panic!("expected circle, got {:?}", other),
		}
	}

	#[test]
	fn test_glow_only_above_threshold() {
		let style = StarStyle {
			count: 2,
			..StarStyle::default()
		};
		// First star radius 1.5 exactly (draw 0.5), second radius 2.5 (draw 1.0)
		let mut rng = Scripted::new(&[
			0.1, 0.1, 0.5, 0.5, 0.5, 0.5, 0.5, 0.9, //
			0.2, 0.2, 1.0, 0.5, 0.5, 0.5, 0.5, 0.9,
		]);
		let field = StarField::new(style, &mut rng, 100.0, 100.0);
		let mut surface = Recording::new(100.0, 100.0);

		render(&field, &mut surface);

		assert_eq!(surface.ops[0], Op::Glow(None));
		assert_eq!(
			surface.ops[2],
			Op::Glow(Some(Glow {
				blur: 4.0,
				color: Color::rgba(162, 136, 140, 0.5),
			}))
		);
	}

	#[test]
	fn test_render_reads_current_surface_size() {
		let mut rng = Seeded::new(11);
		let mut field = StarField::new(StarStyle::default(), &mut rng, 800.0, 600.0);
		let mut surface = Recording::new(800.0, 600.0);
		frame(&mut field, &mut surface);

		// Viewport shrinks; stars outside relocate as they wrap
		surface.width = 200.0;
		surface.height = 100.0;
		for _ in 0..3 {
			frame(&mut field, &mut surface);
		}
		for star in field.stars() {
			assert!(star.x <= 200.0 && star.y <= 100.0);
		}
	}

	#[test]
	fn test_single_star_cycle_is_pure() {
		let style = StarStyle::default();
		let star = Star {
			x: 10.0,
			y: 20.0,
			vx: 0.1,
			vy: -0.1,
			radius: 2.0,
			opacity: 0.5,
			twinkle_rate: 0.02,
			twinkle_direction: -1.0,
		};
		let mut a = star.clone();
		let mut b = star;
		a.update(300.0, 300.0, &style);
		b.update(300.0, 300.0, &style);
		assert_eq!(a, b);

		// Same draws, same frames: both copies paint identical ops
		let draws = [0.1, 0.2, 0.9, 0.8, 0.3, 0.4, 0.6, 0.7];
		let one = StarStyle {
			count: 1,
			..StarStyle::default()
		};
		let mut field_a = StarField::new(one.clone(), &mut Scripted::new(&draws), 300.0, 300.0);
		let mut field_b = StarField::new(one, &mut Scripted::new(&draws), 300.0, 300.0);
		let mut surface_a = Recording::new(300.0, 300.0);
		let mut surface_b = Recording::new(300.0, 300.0);
		for _ in 0..5 {
			frame(&mut field_a, &mut surface_a);
			frame(&mut field_b, &mut surface_b);
		}
		assert_eq!(surface_a.circles(), 5);
		assert_eq!(surface_a.ops, surface_b.ops);
	}
}
