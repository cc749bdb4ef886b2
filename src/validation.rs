use crate::{config::FormConfig, dom, email::is_valid_email, listener::Listener, Error};
use tracing::{instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// A form control that carries a value.
#[derive(Debug, Clone)]
pub enum Field {
	Input(HtmlInputElement),
	TextArea(HtmlTextAreaElement),
	Select(HtmlSelectElement),
}

impl Field {
	/// `None` for elements without a value, e.g. a `required` fieldset.
	#[must_use]
	pub fn from_element(element: &Element) -> Option<Self> {
		if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
			Some(Field::Input(input.clone()))
		} else if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
			Some(Field::TextArea(text_area.clone()))
		} else {
			element.dyn_ref::<HtmlSelectElement>().cloned().map(Field::Select)
		}
	}

	#[must_use]
	pub fn element(&self) -> &Element {
		match self {
			Field::Input(input) => input.as_ref(),
			Field::TextArea(text_area) => text_area.as_ref(),
			Field::Select(select) => select.as_ref(),
		}
	}

	#[must_use]
	pub fn value(&self) -> String {
		match self {
			Field::Input(input) => input.value(),
			Field::TextArea(text_area) => text_area.value(),
			Field::Select(select) => select.value(),
		}
	}

	#[must_use]
	pub fn is_email(&self) -> bool {
		matches!(self, Field::Input(input) if input.type_() == "email")
	}

	#[must_use]
	pub fn is_required(&self) -> bool {
		self.element().has_attribute("required")
	}
}

/// Why a field is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
	Blank,
	Email,
}

/// Checks a single required field's value.
///
/// Blank values (after trimming) are reported before the email shape is looked at.
#[must_use]
pub fn check_required(value: &str, is_email: bool) -> Result<(), Invalid> {
	if value.trim().is_empty() {
		Err(Invalid::Blank)
	} else if is_email && !is_valid_email(value) {
		Err(Invalid::Email)
	} else {
		Ok(())
	}
}

/// Submit and live validation for every opted-in form.
#[derive(Debug)]
pub struct FormValidation {
	forms: usize,
	_listeners: Vec<Listener>,
}

impl FormValidation {
	#[instrument(skip(document, root))]
	pub fn install(document: &Document, root: &Element, config: &FormConfig) -> Result<Self, Error> {
		let forms = dom::query_all(root, config.form_selector)?;
		let mut listeners = Vec::new();
		for form in &forms {
			let handler = {
				let (document, form, config) = (document.clone(), form.clone(), config.clone());
				move |event: Event| on_submit(&document, &form, &event, &config)
			};
			listeners.push(Listener::new(form, "submit", handler)?);

			for element in dom::query_all(form, config.field_selector)? {
				let field = match Field::from_element(&element) {
					Some(field) => field,
					None => continue,
				};
				let (document, config) = (document.clone(), config.clone());
				listeners.push(Listener::new(&element, "input", move |_| on_input(&document, &field, &config))?);
			}
		}
		trace!("Wired {} form(s) with {} listener(s).", forms.len(), listeners.len());
		Ok(Self {
			forms: forms.len(),
			_listeners: listeners,
		})
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.forms
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.forms == 0
	}
}

fn on_submit(document: &Document, form: &Element, event: &Event, config: &FormConfig) {
	let required = match dom::query_all(form, config.required_selector) {
		Ok(required) => required,
		Err(error) => return warn!("Failed to collect required fields: {}", error),
	};

	let mut valid = true;
	for field in required.iter().filter_map(Field::from_element) {
		match check_required(&field.value(), field.is_email()) {
			Ok(()) => clear_invalid(field.element(), config),
			Err(Invalid::Blank) => {
				valid = false;
				mark_invalid(document, field.element(), None, config);
			}
			Err(Invalid::Email) => {
				valid = false;
				clear_invalid(field.element(), config);
				mark_invalid(document, field.element(), Some(config.invalid_email_message), config);
			}
		}
	}

	if !valid {
		trace!("Blocked submission of an invalid form.");
		event.prevent_default();
	}
}

fn on_input(document: &Document, field: &Field, config: &FormConfig) {
	if !field.is_required() {
		return;
	}
	match check_required(&field.value(), field.is_email()) {
		Err(Invalid::Blank) => (),
		Ok(()) => clear_invalid(field.element(), config),
		Err(Invalid::Email) => {
			clear_invalid(field.element(), config);
			mark_invalid(document, field.element(), Some(config.invalid_email_message), config);
		}
	}
}

fn has_error_message_after(field: &Element, config: &FormConfig) -> Option<Element> {
	field.next_element_sibling().filter(|next| next.class_list().contains(config.error_message_marker))
}

/// Highlights `field` and, given a `message`, puts it right after the field unless one is already there.
pub fn mark_invalid(document: &Document, field: &Element, message: Option<&str>, config: &FormConfig) {
	dom::add_classes(field, config.invalid_classes);

	let message = match message {
		Some(message) if has_error_message_after(field, config).is_none() => message,
		_ => return,
	};
	let parent = match field.parent_node() {
		Some(parent) => parent,
		None => return warn!("Invalid field is detached."),
	};
	let result = dom::create_message(document, "span", config.error_message_class, message)
		.and_then(|span| parent.insert_before(&span, field.next_sibling().as_ref()).map_err(Error::from));
	if let Err(error) = result {
		warn!("Failed to insert error message: {}", error)
	}
}

/// Removes the highlight and an error message directly following `field`.
pub fn clear_invalid(field: &Element, config: &FormConfig) {
	dom::remove_classes(field, config.invalid_classes);
	if let Some(message) = has_error_message_after(field, config) {
		message.remove();
	}
}
