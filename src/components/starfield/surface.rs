//! Drawing surface abstraction.
//!
//! The simulator only needs four primitives: read the current size, clear,
//! set or drop a glow, and fill a circle. [`CanvasSurface`] maps them onto a
//! `CanvasRenderingContext2d`.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// Soft shadow drawn around subsequent fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// Shadow blur radius in pixels.
	pub blur: f64,
	/// Shadow color.
	pub color: Color,
}

/// A 2D raster target.
pub trait Surface {
	/// Current width in pixels. Read every frame, never cached.
	fn width(&self) -> f64;
	/// Current height in pixels. Read every frame, never cached.
	fn height(&self) -> f64;
	/// Erase the whole surface.
	fn clear(&mut self);
	/// Set the glow for following fills; `None` turns it off.
	fn set_glow(&mut self, glow: Option<Glow>);
	/// Fill a circle centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

/// Surface backed by an HTML canvas.
///
/// Dimensions come from the canvas element itself, so a resize listener that
/// sets `canvas.width`/`canvas.height` is picked up on the next frame.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap `canvas`, failing if it has no 2d context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
			.dyn_into()
			.map_err(JsValue::from)?;
		Ok(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
	}

	fn set_glow(&mut self, glow: Option<Glow>) {
		match glow {
			Some(g) => {
				self.ctx.set_shadow_blur(g.blur);
				self.ctx.set_shadow_color(&g.color.to_css());
			}
			None => self.ctx.set_shadow_blur(0.0),
		}
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}
}
