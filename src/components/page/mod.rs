//! Page behaviors around the star field.
//!
//! These attach to the static portfolio markup that is already in the
//! document: navigation, scroll-linked styling, card effects and the contact
//! form. Each handler is independent and lives for the whole page, so the
//! closures are leaked with `forget`. Missing elements are skipped with a
//! debug log; a page without a contact form simply gets no form wiring.

pub mod config;
pub mod effects;
pub mod form;
pub mod nav;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, DocumentReadyState, Element, Event, EventTarget, HtmlElement, Window,
};

pub use config::PageConfig;

/// Wire every page behavior. Call once after the document is parsed.
pub fn install(config: &PageConfig) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};

	nav::install(&window, &document, config);
	effects::install(&window, &document, config);
	form::install(&window, &document, config);

	if let Some(toggle) = document.get_element_by_id("themeToggle") {
		listen(&toggle, "click", |_| {
			info!("starfolio: theme toggle clicked, light theme not implemented yet");
		});
	}
}

/// Attach a page-lifetime event listener.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
	let cb = Closure::<dyn FnMut(Event)>::new(handler);
	if target
		.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
		.is_ok()
	{
		cb.forget();
	}
}

/// Run `f` once the page has finished loading.
///
/// The app mounts from a module script, which may run after `load` has already
/// fired; in that case `f` runs immediately instead of waiting forever.
pub(crate) fn on_load(window: &Window, document: &Document, mut f: impl FnMut() + 'static) {
	if is_complete(document.ready_state()) {
		f();
	} else {
		listen(window, "load", move |_| f());
	}
}

fn is_complete(state: DocumentReadyState) -> bool {
	state == DocumentReadyState::Complete
}

/// Run `f` once after `ms` milliseconds.
pub(crate) fn set_timeout(window: &Window, ms: i32, f: impl FnOnce() + 'static) {
	let cb = Closure::once_into_js(f);
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
}

/// All elements matching `selector` that are `HtmlElement`s, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
	let Ok(list) = document.query_selector_all(selector) else {
		debug!("starfolio: bad selector {}", selector);
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

pub(crate) fn by_id(document: &Document, id: &str) -> Option<Element> {
	let el = document.get_element_by_id(id);
	if el.is_none() {
		debug!("starfolio: #{} not found, skipping", id);
	}
	el
}

/// Viewport height in CSS pixels.
pub(crate) fn viewport_height(window: &Window) -> Option<f64> {
	window.inner_height().ok()?.as_f64()
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
	let _ = el.style().set_property(property, value);
}
