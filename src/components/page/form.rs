//! Contact form validation.
//!
//! Fields are validated on every keystroke and again on submit. A valid
//! submission only shows a confirmation and resets the form; nothing is sent
//! anywhere.

use std::fmt;
use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use super::{by_id, listen, set_timeout, PageConfig};

/// A contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	/// Sender name
	Name,
	/// Reply address
	Email,
	/// Message body
	Message,
}

impl Field {
	fn label(self) -> &'static str {
		match self {
			Field::Name => "Name",
			Field::Email => "Email",
			Field::Message => "Message",
		}
	}
}

/// Why a field value was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
	/// Empty after trimming.
	Required(Field),
	/// Shorter than `min` characters.
	TooShort {
		/// Field that was too short
		field: Field,
		/// Required length
		min: usize,
	},
	/// Not shaped like an email address.
	InvalidEmail,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValidationError::Required(field) => write!(f, "{} is required", field.label()),
			ValidationError::TooShort { field, min } => {
				write!(f, "{} must be at least {} characters", field.label(), min)
			}
			ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
		}
	}
}

/// Minimum lengths applied to the free-text fields.
#[derive(Clone, Copy, Debug)]
pub struct Rules {
	/// Shortest accepted name.
	pub name_min_len: usize,
	/// Shortest accepted message.
	pub message_min_len: usize,
}

impl From<&PageConfig> for Rules {
	fn from(config: &PageConfig) -> Self {
		Self {
			name_min_len: config.name_min_len,
			message_min_len: config.message_min_len,
		}
	}
}

/// Loose email shape check: `local@domain.tld`, no whitespace, exactly one `@`.
pub fn is_valid_email(value: &str) -> bool {
	if value.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = value.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	domain
		.char_indices()
		.any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Whitespace as the browser trims it, which also strips the byte order mark.
fn trim(value: &str) -> &str {
	value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Length as the browser counts it, in UTF-16 code units.
fn text_len(value: &str) -> usize {
	value.encode_utf16().count()
}

/// Validate one field. The value is trimmed before any rule applies.
pub fn validate(field: Field, value: &str, rules: Rules) -> Result<(), ValidationError> {
	let value = trim(value);
	if value.is_empty() {
		return Err(ValidationError::Required(field));
	}
	let min = match field {
		Field::Name => rules.name_min_len,
		Field::Message => rules.message_min_len,
		Field::Email => {
			return if is_valid_email(value) {
				Ok(())
			} else {
				Err(ValidationError::InvalidEmail)
			};
		}
	};
	if text_len(value) < min {
		return Err(ValidationError::TooShort { field, min });
	}
	Ok(())
}

/// One form input together with its error line.
struct FieldBinding {
	field: Field,
	input: Element,
	error: Element,
}

impl FieldBinding {
	fn value(&self) -> String {
		if let Some(input) = self.input.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else if let Some(area) = self.input.dyn_ref::<HtmlTextAreaElement>() {
			area.value()
		} else {
			String::new()
		}
	}

	/// Validate and show the result. Returns whether the field is valid.
	fn check(&self, rules: Rules) -> bool {
		match validate(self.field, &self.value(), rules) {
			Ok(()) => {
				self.error.set_text_content(Some(""));
				true
			}
			Err(e) => {
				self.error.set_text_content(Some(&e.to_string()));
				false
			}
		}
	}
}

fn bind(document: &Document, field: Field, input_id: &str, error_id: &str) -> Option<FieldBinding> {
	Some(FieldBinding {
		field,
		input: by_id(document, input_id)?,
		error: by_id(document, error_id)?,
	})
}

pub(crate) fn install(window: &Window, document: &Document, config: &PageConfig) {
	let Some(form) = by_id(document, "contactForm").and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
	else {
		return;
	};
	let Some(success) = by_id(document, "successMessage") else {
		return;
	};
	let fields = [
		bind(document, Field::Name, "name", "nameError"),
		bind(document, Field::Email, "email", "emailError"),
		bind(document, Field::Message, "message", "messageError"),
	];
	let Some(fields) = fields.into_iter().collect::<Option<Vec<_>>>() else {
		return;
	};
	let fields = Rc::new(fields);
	let rules = Rules::from(config);

	for i in 0..fields.len() {
		let fields_ev = fields.clone();
		listen(&fields[i].input, "input", move |_| {
			fields_ev[i].check(rules);
		});
	}

	let (form_el, win, visible_ms) = (form.clone(), window.clone(), config.success_visible_ms);
	listen(&form, "submit", move |ev| {
		ev.prevent_default();

		// Every field is checked so all error lines update at once.
		let all_valid = fields
			.iter()
			.map(|f| f.check(rules))
			.fold(true, |acc, ok| acc && ok);
		if !all_valid {
			return;
		}

		let _ = success.class_list().add_1("show");
		form_el.reset();
		for f in fields.iter() {
			f.error.set_text_content(Some(""));
		}
		let success = success.clone();
		set_timeout(&win, visible_ms, move || {
			let _ = success.class_list().remove_1("show");
		});
		info!("starfolio: contact form submitted");
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rules() -> Rules {
		Rules::from(&PageConfig::default())
	}

	#[test]
	fn test_required_after_trim() {
		assert_eq!(
			validate(Field::Name, "   ", rules()),
			Err(ValidationError::Required(Field::Name))
		);
		assert_eq!(
			validate(Field::Email, "", rules()).unwrap_err().to_string(),
			"Email is required"
		);
		assert_eq!(
			validate(Field::Message, "\n\t", rules()).unwrap_err().to_string(),
			"Message is required"
		);
	}

	#[test]
	fn test_min_lengths() {
		assert_eq!(
			validate(Field::Name, " Al ", rules()).unwrap_err().to_string(),
			"Name must be at least 3 characters"
		);
		assert!(validate(Field::Name, "Ada", rules()).is_ok());
		assert_eq!(
			validate(Field::Message, "too short", rules())
				.unwrap_err()
				.to_string(),
			"Message must be at least 10 characters"
		);
		assert!(validate(Field::Message, "long enough", rules()).is_ok());
	}

	#[test]
	fn test_email_shapes() {
		assert!(is_valid_email("qa@example.com"));
		assert!(is_valid_email("a@b.c"));
		assert!(is_valid_email("first.last@sub.domain.org"));
		assert!(!is_valid_email("plain"));
		assert!(!is_valid_email("@example.com"));
		assert!(!is_valid_email("a@.com"));
		assert!(!is_valid_email("a@com."));
		assert!(!is_valid_email("a@com"));
		assert!(!is_valid_email("a@@b.com"));
		assert!(!is_valid_email("a b@c.com"));
	}

	#[test]
	fn test_email_trimmed_before_check() {
		assert!(validate(Field::Email, "  qa@example.com  ", rules()).is_ok());
		assert_eq!(
			validate(Field::Email, "qa@example", rules())
				.unwrap_err()
				.to_string(),
			"Please enter a valid email address"
		);
	}

	#[test]
	fn test_byte_order_mark_is_trimmed() {
		assert_eq!(
			validate(Field::Name, "\u{feff}  \u{feff}", rules()),
			Err(ValidationError::Required(Field::Name))
		);
		assert!(validate(Field::Email, "\u{feff}qa@example.com", rules()).is_ok());
	}

	#[test]
	fn test_length_counts_utf16_units() {
		// Each emoji is a surrogate pair, so two of them are four units
		assert_eq!(text_len("😀😀"), 4);
		assert!(validate(Field::Name, "😀😀", rules()).is_ok());
		assert_eq!(
			validate(Field::Name, "é", rules()),
			Err(ValidationError::TooShort {
				field: Field::Name,
				min: 3
			})
		);
	}
}
