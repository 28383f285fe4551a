//! starfolio: interactive layer for a single-page portfolio.
//!
//! This crate provides a WASM-based animated star background plus the
//! navigation, scroll effects and contact form handling of the static
//! portfolio markup it is mounted into.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::page::PageConfig;
pub use components::starfield::{StarField, StarStyle, StarfieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfolio: logging initialized");
}

/// Load a JSON config override from a script element with the given id.
/// Missing elements and malformed JSON both fall back to `T::default()`.
fn load_config<T: DeserializeOwned + Default>(id: &str) -> T {
	let Some(json_text) = config_text(id) else {
		return T::default();
	};

	match serde_json::from_str::<T>(&json_text) {
		Ok(config) => {
			info!("starfolio: loaded #{}", id);
			config
		}
		Err(e) => {
			warn!("starfolio: failed to parse #{}: {}", id, e);
			T::default()
		}
	}
}

fn config_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Mounts the star background and wires the page behaviors once mounted.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let star_style: StarStyle = load_config("starfield-config");
	let page_config: PageConfig = load_config("page-config");

	Effect::new(move |_| {
		components::page::install(&page_config);
		info!("starfolio: QA Engineer Portfolio, anti-gravity space theme active");
	});

	view! {
		<Meta name="color-scheme" content="dark" />
		<StarfieldCanvas config=star_style />
	}
}
