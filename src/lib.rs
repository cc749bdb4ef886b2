//! Progressive enhancement for the Pilgrims hotel and restaurant website.
//!
//! Each behavior looks for its elements once, wires up event listeners and stays out of the way if
//! the page doesn't contain any. Nothing here talks to a server.
//!
//! Use [`Enhancements::install`] to scope the behaviors to an element (and drop the result to remove
//! them again), or [`install_when_ready`] to attach them to the whole page for its lifetime.

#![doc(html_root_url = "https://docs.rs/pilgrims-dom/0.1.0")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod alert;
pub mod config;
mod dom;
pub mod dropdown;
pub mod email;
mod error;
mod listener;
pub mod nav;
pub mod newsletter;
pub mod reveal;
pub mod smooth_scroll;
pub mod validation;

pub use config::Config;
pub use email::is_valid_email;
pub use error::Error;

use alert::AlertDismissal;
use core::cell::RefCell;
use dropdown::Dropdowns;
use listener::Listener;
use newsletter::Newsletter;
use reveal::ScrollReveal;
use smooth_scroll::SmoothScroll;
use tracing::{error, info, instrument, warn};
use validation::FormValidation;
use web_sys::{Document, Element, Event};

/// All installed behaviors.
///
/// The behaviors are independent: one that fails to install is logged and left out.
/// Dropping this removes every event listener again; pending timers still run.
#[derive(Debug)]
pub struct Enhancements {
	alerts: Option<AlertDismissal>,
	smooth_scroll: Option<SmoothScroll>,
	dropdowns: Option<Dropdowns>,
	forms: Option<FormValidation>,
	newsletter: Option<Newsletter>,
	reveal: Option<ScrollReveal>,
}

impl Enhancements {
	/// Wires up every behavior for elements below `root`.
	///
	/// Fragment targets and the sticky header are looked up in the whole document.
	///
	/// # Errors
	///
	/// Iff there is no `window` or `document`.
	#[instrument(skip(root))]
	pub fn install(root: &Element, config: &Config) -> Result<Self, Error> {
		let window = web_sys::window().ok_or(Error::NoWindow)?;
		let document = window.document().ok_or(Error::NoDocument)?;

		nav::install();
		let enhancements = Self {
			alerts: independent("alert dismissal", AlertDismissal::install(root, &config.alerts)),
			smooth_scroll: independent("smooth scrolling", SmoothScroll::install(&window, root, &config.smooth_scroll)),
			dropdowns: independent("dropdowns", Dropdowns::install(&document, root, &config.dropdowns)),
			forms: independent("form validation", FormValidation::install(&document, root, &config.forms)),
			newsletter: independent("newsletter", Newsletter::install(&document, root, &config.newsletter)),
			reveal: independent("scroll reveal", ScrollReveal::install(&window, root, &config.reveal)),
		};
		info!("Page behaviors installed.");
		Ok(enhancements)
	}

	#[must_use]
	pub fn alerts(&self) -> Option<&AlertDismissal> {
		self.alerts.as_ref()
	}

	#[must_use]
	pub fn smooth_scroll(&self) -> Option<&SmoothScroll> {
		self.smooth_scroll.as_ref()
	}

	#[must_use]
	pub fn dropdowns(&self) -> Option<&Dropdowns> {
		self.dropdowns.as_ref()
	}

	#[must_use]
	pub fn forms(&self) -> Option<&FormValidation> {
		self.forms.as_ref()
	}

	#[must_use]
	pub fn newsletter(&self) -> Option<&Newsletter> {
		self.newsletter.as_ref()
	}

	#[must_use]
	pub fn reveal(&self) -> Option<&ScrollReveal> {
		self.reveal.as_ref()
	}

	/// Keeps the behaviors installed until the page goes away.
	pub fn leak(self) {
		core::mem::forget(self);
	}
}

fn independent<T>(behavior: &str, installed: Result<T, Error>) -> Option<T> {
	match installed {
		Ok(installed) => Some(installed),
		Err(error) => {
			error!("Failed to install {}: {}", behavior, error);
			None
		}
	}
}

thread_local! {
	static INSTALLED: RefCell<Option<Enhancements>> = RefCell::new(None);
	static READY_LISTENER: RefCell<Option<Listener>> = RefCell::new(None);
}

/// Installs all behaviors on the whole page once its structure is ready.
///
/// Runs immediately if the document has finished loading already, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// [`Error::AlreadyInstalled`] on repeated calls, [`Error::NoWindow`] or [`Error::NoDocument`]
/// outside a page, or [`Error::Js`] if the ready listener can't be registered.
pub fn install_when_ready(config: Config) -> Result<(), Error> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let document = window.document().ok_or(Error::NoDocument)?;

	let busy = INSTALLED.with(|installed| installed.borrow().is_some()) || READY_LISTENER.with(|listener| listener.borrow().is_some());
	if busy {
		warn!("Page behaviors are already installed.");
		return Err(Error::AlreadyInstalled);
	}

	if document.ready_state() != "loading" {
		return install_page(&document, &config);
	}

	let handler = {
		let document = document.clone();
		move |_: Event| {
			drop(READY_LISTENER.with(|listener| listener.borrow_mut().take()));
			if let Err(error) = install_page(&document, &config) {
				error!("Failed to install page behaviors: {}", error)
			}
		}
	};
	let listener = Listener::new(&document, "DOMContentLoaded", handler)?;
	READY_LISTENER.with(|ready_listener| *ready_listener.borrow_mut() = Some(listener));
	Ok(())
}

fn install_page(document: &Document, config: &Config) -> Result<(), Error> {
	let root = document.document_element().ok_or(Error::NoDocument)?;
	let enhancements = Enhancements::install(&root, config)?;
	INSTALLED.with(|installed| *installed.borrow_mut() = Some(enhancements));
	Ok(())
}

/// Entry point for the standalone page script.
#[cfg(feature = "start")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	tracing_wasm::set_as_global_default();

	if let Err(error) = install_when_ready(Config::default()) {
		error!("{}", error)
	}
}
