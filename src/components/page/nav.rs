//! Navigation: mobile menu, smooth scrolling, active link and navbar styling.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{by_id, listen, on_load, query_all, set_style, PageConfig};

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	/// Element id, without `#`.
	pub id: String,
	/// `offsetTop` in pixels.
	pub top: f64,
	/// `offsetHeight` in pixels.
	pub height: f64,
}

impl SectionBounds {
	fn contains(&self, y: f64) -> bool {
		y >= self.top && y < self.top + self.height
	}
}

/// Sections containing the line `scroll_y + lookahead`.
fn sections_at<'a>(
	sections: &'a [SectionBounds],
	scroll_y: f64,
	lookahead: f64,
) -> impl Iterator<Item = &'a SectionBounds> {
	let y = scroll_y + lookahead;
	sections.iter().filter(move |s| s.contains(y))
}

/// Id of the section the reader is in. Overlapping matches resolve to the
/// last one in document order.
pub fn current_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
	sections_at(sections, scroll_y, lookahead)
		.last()
		.map(|s| s.id.as_str())
}

/// Whether the navbar sits over a light-background section.
pub fn over_light_section(
	sections: &[SectionBounds],
	scroll_y: f64,
	lookahead: f64,
	light_sections: &[String],
) -> bool {
	sections_at(sections, scroll_y, lookahead).any(|s| light_sections.contains(&s.id))
}

/// Navbar glass styling for a scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavbarGlass {
	/// Near the top: faint background, shadow left as is.
	Top,
	/// Scrolled past the threshold: denser background plus a drop shadow.
	Scrolled,
}

impl NavbarGlass {
	/// Style for `scroll_y` against the glass threshold.
	pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
		if scroll_y > threshold {
			Self::Scrolled
		} else {
			Self::Top
		}
	}

	/// CSS background value.
	pub fn background(self) -> &'static str {
		match self {
			Self::Top => "rgba(255, 255, 255, 0.05)",
			Self::Scrolled => "rgba(255, 255, 255, 0.08)",
		}
	}

	/// CSS box-shadow, if this state sets one.
	pub fn box_shadow(self) -> Option<&'static str> {
		match self {
			Self::Top => None,
			Self::Scrolled => Some("0 4px 30px rgba(0, 0, 0, 0.2)"),
		}
	}
}

/// Smooth-scroll target for a section starting at `section_top`.
pub fn scroll_target(section_top: f64, nav_offset: f64) -> f64 {
	section_top - nav_offset
}

fn measure(sections: &[HtmlElement]) -> Vec<SectionBounds> {
	sections
		.iter()
		.map(|s| SectionBounds {
			id: s.id(),
			top: s.offset_top() as f64,
			height: s.offset_height() as f64,
		})
		.collect()
}

pub(crate) fn install(window: &Window, document: &Document, config: &PageConfig) {
	let links = Rc::new(query_all(document, ".nav-link"));
	let sections = Rc::new(query_all(document, "section"));

	if let (Some(hamburger), Some(menu)) = (by_id(document, "hamburger"), by_id(document, "navMenu")) {
		let (h, m) = (hamburger.clone(), menu.clone());
		listen(&hamburger, "click", move |_| {
			let _ = h.class_list().toggle("active");
			let _ = m.class_list().toggle("active");
		});

		for link in links.iter() {
			let (h, m) = (hamburger.clone(), menu.clone());
			listen(link, "click", move |_| {
				let _ = h.class_list().remove_1("active");
				let _ = m.class_list().remove_1("active");
			});
		}
	}

	for link in links.iter() {
		let (link_el, doc, win) = (link.clone(), document.clone(), window.clone());
		let nav_offset = config.nav_offset;
		listen(link, "click", move |ev| {
			ev.prevent_default();
			let Some(href) = link_el.get_attribute("href") else {
				return;
			};
			let Ok(Some(target)) = doc.query_selector(&href) else {
				return;
			};
			let Ok(target) = target.dyn_into::<HtmlElement>() else {
				return;
			};
			let opts = ScrollToOptions::new();
			opts.set_top(scroll_target(target.offset_top() as f64, nav_offset));
			opts.set_behavior(ScrollBehavior::Smooth);
			win.scroll_to_with_scroll_to_options(&opts);
		});
	}

	// Active link
	{
		let (links, sections, win) = (links.clone(), sections.clone(), window.clone());
		let lookahead = config.section_lookahead;
		listen(window, "scroll", move |_| {
			let scroll_y = win.scroll_y().unwrap_or(0.0);
			let bounds = measure(&sections);
			let Some(id) = current_section(&bounds, scroll_y, lookahead) else {
				return;
			};
			let wanted = format!("#{}", id);
			for link in links.iter() {
				let _ = link.class_list().remove_1("active");
				if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
					let _ = link.class_list().add_1("active");
				}
			}
		});
	}

	let Some(navbar) = by_id(document, "navbar").and_then(|n| n.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};

	// Glass effect
	{
		let (navbar, win) = (navbar.clone(), window.clone());
		let threshold = config.glass_threshold;
		listen(window, "scroll", move |_| {
			let glass = NavbarGlass::for_scroll(win.scroll_y().unwrap_or(0.0), threshold);
			set_style(&navbar, "background", glass.background());
			if let Some(shadow) = glass.box_shadow() {
				set_style(&navbar, "box-shadow", shadow);
			}
		});
	}

	// Light/dark navbar theme
	let (win, lookahead, light) = (
		window.clone(),
		config.section_lookahead,
		config.light_sections.clone(),
	);
	let update_theme = move || {
		let scroll_y = win.scroll_y().unwrap_or(0.0);
		let light_here = over_light_section(&measure(&sections), scroll_y, lookahead, &light);
		let _ = navbar
			.class_list()
			.toggle_with_force("navbar-light-theme", light_here);
	};
	let update_theme = Rc::new(update_theme);
	let on_scroll = update_theme.clone();
	listen(window, "scroll", move |_| (*on_scroll)());
	on_load(window, document, move || (*update_theme)());
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page() -> Vec<SectionBounds> {
		[
			("home", 0.0, 800.0),
			("skills", 800.0, 600.0),
			("projects", 1400.0, 900.0),
			("contact", 2300.0, 500.0),
		]
		.into_iter()
		.map(|(id, top, height)| SectionBounds {
			id: id.to_string(),
			top,
			height,
		})
		.collect()
	}

	#[test]
	fn test_current_section_uses_lookahead() {
		let sections = page();
		assert_eq!(current_section(&sections, 0.0, 100.0), Some("home"));
		// 699 + 100 is still inside home; 700 + 100 is the first pixel of skills
		assert_eq!(current_section(&sections, 699.0, 100.0), Some("home"));
		assert_eq!(current_section(&sections, 700.0, 100.0), Some("skills"));
		assert_eq!(current_section(&sections, 2200.0, 100.0), Some("contact"));
	}

	#[test]
	fn test_no_section_past_end() {
		let sections = page();
		assert_eq!(current_section(&sections, 2800.0, 100.0), None);
	}

	#[test]
	fn test_light_sections() {
		let sections = page();
		let light = PageConfig::default().light_sections;
		assert!(!over_light_section(&sections, 0.0, 100.0, &light));
		assert!(over_light_section(&sections, 750.0, 100.0, &light));
		assert!(over_light_section(&sections, 1500.0, 100.0, &light));
		assert!(!over_light_section(&sections, 2300.0, 100.0, &light));
	}

	#[test]
	fn test_navbar_glass() {
		assert_eq!(NavbarGlass::for_scroll(50.0, 50.0), NavbarGlass::Top);
		assert_eq!(NavbarGlass::for_scroll(51.0, 50.0), NavbarGlass::Scrolled);
		assert_eq!(NavbarGlass::Top.box_shadow(), None);
		assert_eq!(
			NavbarGlass::Scrolled.background(),
			"rgba(255, 255, 255, 0.08)"
		);
	}

	#[test]
	fn test_scroll_target() {
		assert_eq!(scroll_target(800.0, 70.0), 730.0);
	}
}
