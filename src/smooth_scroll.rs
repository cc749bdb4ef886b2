use crate::{config::ScrollConfig, dom, listener::Listener, Error};
use tracing::{instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Where to scroll so that a target lands just below the sticky header.
///
/// `target_top` is relative to the viewport, `current_scroll` is the page's vertical offset.
#[must_use]
pub fn scroll_destination(target_top: f64, current_scroll: f64, header_height: f64) -> f64 {
	target_top + current_scroll - header_height
}

/// Animated scrolling for in-page anchors.
#[derive(Debug)]
pub struct SmoothScroll {
	listeners: Vec<Listener>,
}

impl SmoothScroll {
	#[instrument(skip(window, root))]
	pub fn install(window: &Window, root: &Element, config: &ScrollConfig) -> Result<Self, Error> {
		let listeners = dom::query_all(root, config.anchor_selector)?
			.into_iter()
			.map(|anchor| {
				let window = window.clone();
				let config = config.clone();
				let target = anchor.clone();
				Listener::new(&anchor, "click", move |event| on_click(&window, &target, &event, &config))
			})
			.collect::<Result<Vec<_>, _>>()?;
		trace!("Wired {} anchor(s).", listeners.len());
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

fn on_click(window: &Window, anchor: &Element, event: &Event, config: &ScrollConfig) {
	let document = match window.document() {
		Some(document) => document,
		None => return warn!("Window lost its document."),
	};
	let href = match anchor.get_attribute("href") {
		Some(href) => href,
		None => return,
	};

	// Without a target the browser's own fragment navigation is left alone.
	let target = match dom::find_in_document(&document, &href) {
		Some(target) => target,
		None => return trace!("No element for {:?}.", href),
	};
	event.prevent_default();

	let header_height = dom::find_in_document(&document, config.sticky_header_selector)
		.and_then(|header| header.dyn_into::<HtmlElement>().ok())
		.map_or(0.0, |header| f64::from(header.offset_height()));
	let current_scroll = window.page_y_offset().unwrap_or_else(|error| {
		warn!("Failed to read scroll offset: {:?}", error);
		0.0
	});
	let top = scroll_destination(target.get_bounding_client_rect().top(), current_scroll, header_height);

	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
	use super::scroll_destination;

	#[test]
	fn subtracts_header() {
		assert_eq!(scroll_destination(250.0, 1000.0, 80.0), 1170.0);
	}

	#[test]
	fn no_header() {
		assert_eq!(scroll_destination(250.0, 1000.0, 0.0), 1250.0);
	}

	#[test]
	fn target_above_viewport() {
		assert_eq!(scroll_destination(-400.0, 1000.0, 64.0), 536.0);
	}
}
