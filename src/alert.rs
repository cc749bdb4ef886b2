use crate::{config::AlertConfig, dom, listener::Listener, Error};
use gloo_timers::callback::Timeout;
use tracing::{instrument, trace, warn};
use web_sys::Element;

/// Dismiss buttons that fade out and remove their surrounding alert.
#[derive(Debug)]
pub struct AlertDismissal {
	listeners: Vec<Listener>,
}

impl AlertDismissal {
	#[instrument(skip(root))]
	pub fn install(root: &Element, config: &AlertConfig) -> Result<Self, Error> {
		let listeners = dom::query_all(root, config.close_selector)?
			.into_iter()
			.map(|button| {
				let config = config.clone();
				let target = button.clone();
				Listener::new(&button, "click", move |_| dismiss(&target, &config))
			})
			.collect::<Result<Vec<_>, _>>()?;
		trace!("Wired {} dismiss button(s).", listeners.len());
		Ok(Self { listeners })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}
}

fn dismiss(button: &Element, config: &AlertConfig) {
	let alert = match button.closest(config.alert_selector) {
		Ok(Some(alert)) => alert,
		Ok(None) => return trace!("Dismiss button outside of any alert."),
		Err(error) => return warn!("Invalid alert selector {:?}: {:?}", config.alert_selector, error),
	};

	dom::set_style(&alert, "transition", &format!("opacity {}ms ease-in-out", config.fade_ms));
	dom::set_style(&alert, "opacity", "0");

	// Removing an already detached alert is a no-op, so repeated clicks are harmless.
	Timeout::new(config.fade_ms, move || alert.remove()).forget();
}
