//! Scroll and pointer driven card effects.
//!
//! Covers the scroll reveal of cards, hero parallax, the 3D hover tilt, skill
//! bar fill-in, floating stagger, the reduced-motion switch and the initial
//! page fade-in.

use std::rc::Rc;

use js_sys::Array;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, MouseEvent, Window,
};

use super::{listen, on_load, query_all, set_style, set_timeout, viewport_height, PageConfig};

const REVEAL_SELECTOR: &str = ".service-card, .project-card, .soft-skill-card";
const TILT_SELECTOR: &str = ".glass-card, .service-card, .project-card";
const FLOAT_SELECTOR: &str = ".skill-card, .service-card";
const EASE: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
const TILT_REST: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// Whether a card whose top edge is at `element_top` (viewport coordinates)
/// should be revealed.
pub fn should_reveal(element_top: f64, viewport_height: f64, reveal_point: f64) -> bool {
	element_top < viewport_height - reveal_point
}

/// Hero image offset in pixels, or `None` once the hero has scrolled away.
pub fn parallax_offset(scroll_y: f64, viewport_height: f64, speed: f64) -> Option<f64> {
	(scroll_y < viewport_height).then(|| scroll_y * speed)
}

/// Tilt angles in degrees `(rotate_x, rotate_y)` for a pointer at `(x, y)`
/// relative to a `width` x `height` card.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> (f64, f64) {
	let (cx, cy) = (width / 2.0, height / 2.0);
	((y - cy) / divisor, (cx - x) / divisor)
}

/// CSS transform for a tilted, lifted card.
pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
	format!(
		"perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
		rotate_x, rotate_y
	)
}

pub(crate) fn install(window: &Window, document: &Document, config: &PageConfig) {
	install_skill_bars(window, document, config);
	install_reveal(window, document, config);
	install_tilt(document, config);
	install_parallax(window, document, config);

	for (i, el) in query_all(document, FLOAT_SELECTOR).iter().enumerate() {
		let delay = i as f64 * config.float_stagger_secs;
		set_style(el, "animation-delay", &format!("{}s", delay));
	}

	let reduced = window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.is_some_and(|q| q.matches());
	if reduced {
		info!("starfolio: reduced motion preferred, floating animations off");
		for el in query_all(document, ".floating") {
			set_style(&el, "animation", "none");
		}
	}

	let (win, body) = (window.clone(), document.body());
	on_load(window, document, move || {
		let Some(body) = body.clone() else {
			return;
		};
		set_style(&body, "opacity", "0");
		set_timeout(&win, 100, move || {
			set_style(&body, "transition", "opacity 0.8s ease");
			set_style(&body, "opacity", "1");
		});
	});
}

fn install_reveal(window: &Window, document: &Document, config: &PageConfig) {
	let cards = query_all(document, REVEAL_SELECTOR);
	let reveal_point = config.reveal_point;

	let reveal = {
		let win = window.clone();
		move || {
			let Some(viewport_h) = viewport_height(&win) else {
				return;
			};
			for card in &cards {
				let top = card.get_bounding_client_rect().top();
				if should_reveal(top, viewport_h, reveal_point) {
					set_style(card, "opacity", "1");
					set_style(card, "transform", "translateY(0)");
				}
			}
		}
	};

	let reveal = Rc::new(reveal);

	// Hide the cards, then reveal the ones already in view so they fade in.
	let (doc, on_ready) = (document.clone(), reveal.clone());
	on_load(window, document, move || {
		for card in query_all(&doc, REVEAL_SELECTOR) {
			set_style(&card, "opacity", "0");
			set_style(&card, "transform", "translateY(30px)");
			set_style(&card, "transition", &format!("all 0.8s {}", EASE));
		}
		(*on_ready)();
	});

	(*reveal)();
	listen(window, "scroll", move |_| (*reveal)());
}

fn install_tilt(document: &Document, config: &PageConfig) {
	let divisor = config.tilt_divisor;
	for card in query_all(document, TILT_SELECTOR) {
		let el = card.clone();
		listen(&card, "mouseenter", move |_| {
			set_style(&el, "transition", &format!("all 0.6s {}", EASE));
		});

		let el = card.clone();
		listen(&card, "mousemove", move |ev| {
			let Ok(ev) = ev.dyn_into::<MouseEvent>() else {
				return;
			};
			let rect = el.get_bounding_client_rect();
			let (x, y) = (
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
			let (rx, ry) = tilt_angles(x, y, rect.width(), rect.height(), divisor);
			set_style(&el, "transform", &tilt_transform(rx, ry));
		});

		let el = card.clone();
		listen(&card, "mouseleave", move |_| {
			set_style(&el, "transform", TILT_REST);
		});
	}
}

fn install_parallax(window: &Window, document: &Document, config: &PageConfig) {
	let Ok(Some(hero)) = document.query_selector(".hero-image-wrapper") else {
		return;
	};
	let Ok(hero) = hero.dyn_into::<HtmlElement>() else {
		return;
	};
	let (win, speed) = (window.clone(), config.parallax_speed);
	listen(window, "scroll", move |_| {
		let scrolled = win.page_y_offset().unwrap_or(0.0);
		let Some(viewport_h) = viewport_height(&win) else {
			return;
		};
		if let Some(offset) = parallax_offset(scrolled, viewport_h, speed) {
			set_style(&hero, "transform", &format!("translateY({}px)", offset));
		}
	});
}

fn install_skill_bars(window: &Window, document: &Document, config: &PageConfig) {
	let cards = query_all(document, ".skill-card");
	if cards.is_empty() {
		return;
	}

	let (win, stagger, hold) = (window.clone(), config.skill_stagger_ms, config.skill_animated_ms);
	let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			for (index, entry) in entries.iter().enumerate() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				observer.unobserve(&target);
				let Ok(card) = target.dyn_into::<HtmlElement>() else {
					continue;
				};
				let win_inner = win.clone();
				set_timeout(&win, index as i32 * stagger, move || {
					fill_skill_bar(&card);
					let _ = card.class_list().add_1("animated");
					set_timeout(&win_inner, hold, move || {
						let _ = card.class_list().remove_1("animated");
					});
				});
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.skill_threshold));
	let Ok(observer) =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
	else {
		return;
	};
	on_intersect.forget();
	for card in &cards {
		observer.observe(card);
	}
}

fn fill_skill_bar(card: &HtmlElement) {
	let Ok(Some(bar)) = card.query_selector(".skill-progress-bar") else {
		return;
	};
	let Ok(bar) = bar.dyn_into::<HtmlElement>() else {
		return;
	};
	let progress = card.get_attribute("data-progress").unwrap_or_default();
	set_style(&bar, "width", &format!("{}%", progress));
}
