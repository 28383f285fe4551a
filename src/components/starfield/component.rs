//! Leptos component wrapping the star field canvas.
//!
//! The component creates a full-viewport canvas pinned behind the page. Once
//! the canvas is mounted, a `requestAnimationFrame` loop clears it, advances
//! the stars and paints them, then re-arms itself. A window `resize` listener
//! keeps the canvas pixel size equal to the viewport; the loop reads the new
//! size on its next frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::particles::{MathRandom, StarField};
use super::render;
use super::surface::{CanvasSurface, Surface};
use super::theme::StarStyle;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Renders the animated star background.
///
/// The animation never stops on its own; it lives as long as the page. If the
/// canvas cannot provide a 2d context the failure is logged and the page
/// renders without stars.
#[component]
pub fn StarfieldCanvas(#[prop(optional)] config: StarStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = start(canvas, config.clone(), animate.clone(), resize_cb.clone()) {
			error!("starfolio: star field failed to start: {:?}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="stars-canvas"
			class="stars-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}

fn start(
	canvas: HtmlCanvasElement,
	style: StarStyle,
	animate: FrameCallback,
	resize_cb: FrameCallback,
) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	fit_to_viewport(&window, &canvas)?;

	let mut surface = CanvasSurface::new(canvas.clone())?;
	let mut field = StarField::new(style, &mut MathRandom, surface.width(), surface.height());
	info!(
		"starfolio: {} stars on {}x{} surface",
		field.len(),
		surface.width(),
		surface.height()
	);

	let canvas_resize = canvas;
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		if let Err(e) = fit_to_viewport(&win, &canvas_resize) {
			warn!("starfolio: resize failed: {:?}", e);
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let animate_inner = animate.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		render::frame(&mut field, &mut surface);
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}

	Ok(())
}

/// Size the canvas backing store to the window's inner size.
fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
	let (w, h) = viewport_size(window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	Ok(())
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
	let w = window
		.inner_width()?
		.as_f64()
		.ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
	let h = window
		.inner_height()?
		.as_f64()
		.ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
	Ok((w, h))
}
