//! Selectors, class names, messages and delays shared between the page markup and the behaviors.
//!
//! The [`Default`] values match the site's templates. Everything here is `'static` because it is
//! baked into the page at build time.

/// Complete behavior configuration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
	pub alerts: AlertConfig,
	pub smooth_scroll: ScrollConfig,
	pub dropdowns: DropdownConfig,
	pub forms: FormConfig,
	pub newsletter: NewsletterConfig,
	pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertConfig {
	/// Dismiss buttons.
	pub close_selector: &'static str,
	/// Matched against the button and its ancestors with `closest`.
	pub alert_selector: &'static str,
	/// Fade duration, also the delay before the alert is removed.
	pub fade_ms: u32,
}

impl Default for AlertConfig {
	fn default() -> Self {
		Self {
			close_selector: ".alert-close",
			alert_selector: "[role=\"alert\"]",
			fade_ms: 300,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
	/// In-page anchors. The bare `#` is excluded since it names no element.
	pub anchor_selector: &'static str,
	/// Optional header whose height is subtracted from the destination.
	pub sticky_header_selector: &'static str,
}

impl Default for ScrollConfig {
	fn default() -> Self {
		Self {
			anchor_selector: "a[href^=\"#\"]:not([href=\"#\"])",
			sticky_header_selector: "header.sticky",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownConfig {
	pub toggle_selector: &'static str,
	pub hidden_class: &'static str,
	/// Delay before the outside-click listener is armed, so the opening click can't close the panel again.
	pub arm_delay_ms: u32,
}

impl Default for DropdownConfig {
	fn default() -> Self {
		Self {
			toggle_selector: ".dropdown-toggle",
			hidden_class: "hidden",
			arm_delay_ms: 100,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
	/// Forms that opted into validation.
	pub form_selector: &'static str,
	pub required_selector: &'static str,
	/// Fields that get live validation on `input`.
	pub field_selector: &'static str,
	pub invalid_classes: &'static [&'static str],
	/// Marker class identifying an inserted error message.
	pub error_message_marker: &'static str,
	/// Full `class` attribute of an inserted error message.
	pub error_message_class: &'static str,
	pub invalid_email_message: &'static str,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			form_selector: "form[data-validate=\"true\"]",
			required_selector: "[required]",
			field_selector: "input, select, textarea",
			invalid_classes: &["border-red-500", "bg-red-50"],
			error_message_marker: "error-message",
			error_message_class: "text-red-500 text-sm mt-1 error-message",
			invalid_email_message: "Please enter a valid email address",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsletterConfig {
	pub form_selector: &'static str,
	pub email_selector: &'static str,
	/// Finds a previous status message next to the email input.
	pub status_selector: &'static str,
	pub success_class: &'static str,
	pub success_message: &'static str,
	pub error_class: &'static str,
	pub error_message: &'static str,
	/// How long the success message stays visible.
	pub success_ms: u32,
}

impl Default for NewsletterConfig {
	fn default() -> Self {
		Self {
			form_selector: "#newsletter-form",
			email_selector: "input[type=\"email\"]",
			status_selector: ".text-green-500, .text-red-500",
			success_class: "text-green-500 mt-2 text-sm",
			success_message: "Thank you for subscribing!",
			error_class: "text-red-500 mt-2 text-sm",
			error_message: "Please enter a valid email address",
			success_ms: 3000,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
	pub selector: &'static str,
	/// Applied on install, removed once the element scrolls into view.
	pub pending_classes: &'static [&'static str],
	pub animated_class: &'static str,
	pub transition: &'static str,
	/// Fraction of the viewport height the element's top edge has to pass.
	pub threshold: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".animate-on-scroll",
			pending_classes: &["opacity-0", "translate-y-8"],
			animated_class: "has-animated",
			transition: "opacity 600ms ease-out, transform 600ms ease-out",
			threshold: 0.85,
		}
	}
}
