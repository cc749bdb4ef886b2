use crate::{config::NewsletterConfig, dom, email::is_valid_email, listener::Listener, Error};
use gloo_timers::callback::Timeout;
use tracing::{info, instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

/// Which status message a submission produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Subscribed,
	Rejected,
}

impl Outcome {
	/// An empty value is rejected like any other malformed address.
	#[must_use]
	pub fn for_email(email: &str) -> Self {
		if !email.is_empty() && is_valid_email(email) {
			Outcome::Subscribed
		} else {
			Outcome::Rejected
		}
	}
}

/// Local-only feedback for the newsletter signup.
///
/// Nothing is sent anywhere. A subscription endpoint would be called from the submit handler once one exists.
#[derive(Debug)]
pub struct Newsletter {
	listener: Option<Listener>,
}

impl Newsletter {
	#[instrument(skip(document, root))]
	pub fn install(document: &Document, root: &Element, config: &NewsletterConfig) -> Result<Self, Error> {
		let form = match root.query_selector(config.form_selector)? {
			Some(form) => form,
			None => {
				trace!("No newsletter form on this page.");
				return Ok(Self { listener: None });
			}
		};

		let handler = {
			let (document, form, config) = (document.clone(), form.clone(), config.clone());
			move |event: Event| on_submit(&document, &form, &event, &config)
		};
		Ok(Self {
			listener: Some(Listener::new(&form, "submit", handler)?),
		})
	}

	#[must_use]
	pub fn is_installed(&self) -> bool {
		self.listener.is_some()
	}
}

fn on_submit(document: &Document, form: &Element, event: &Event, config: &NewsletterConfig) {
	event.prevent_default();

	let input = match form.query_selector(config.email_selector) {
		Ok(Some(input)) => input,
		Ok(None) => return warn!("Newsletter form has no email input."),
		Err(error) => return warn!("Invalid email input selector {:?}: {:?}", config.email_selector, error),
	};
	let input = match input.dyn_into::<HtmlInputElement>() {
		Ok(input) => input,
		Err(_) => return warn!("Newsletter email field is not an <input>."),
	};
	let parent = match input.parent_element() {
		Some(parent) => parent,
		None => return warn!("Newsletter email input is detached."),
	};

	let outcome = Outcome::for_email(&input.value());
	let (class, text) = match outcome {
		Outcome::Subscribed => (config.success_class, config.success_message),
		Outcome::Rejected => (config.error_class, config.error_message),
	};
	let message = match dom::create_message(document, "div", class, text) {
		Ok(message) => message,
		Err(error) => return warn!("Failed to create newsletter message: {}", error),
	};

	match parent.query_selector(config.status_selector) {
		Ok(Some(existing)) => existing.remove(),
		Ok(None) => (),
		Err(error) => warn!("Invalid status selector {:?}: {:?}", config.status_selector, error),
	}
	if let Err(error) = parent.append_child(&message) {
		return warn!("Failed to show newsletter message: {:?}", error);
	}

	if outcome == Outcome::Subscribed {
		info!("Newsletter signup accepted locally.");
		input.set_value("");
		Timeout::new(config.success_ms, move || message.remove()).forget();
	}
}

#[cfg(test)]
mod tests {
	use super::Outcome;

	#[test]
	fn outcomes() {
		assert_eq!(Outcome::for_email("test@example.com"), Outcome::Subscribed);
		assert_eq!(Outcome::for_email("not-an-email"), Outcome::Rejected);
		assert_eq!(Outcome::for_email(""), Outcome::Rejected);
	}
}
