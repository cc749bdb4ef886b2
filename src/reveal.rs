use crate::{config::RevealConfig, dom, listener::Listener, Error};
use std::rc::Rc;
use tracing::{instrument, trace};
use web_sys::{Element, Event, Window};

/// Whether an element whose top edge sits at `top` (viewport coordinates) should be revealed.
#[must_use]
pub fn is_in_view(top: f64, viewport_height: f64, threshold: f64) -> bool {
	top <= viewport_height * threshold
}

/// Scroll-triggered fade-in for marked elements.
///
/// Every scroll event re-checks all elements that haven't animated yet. Once revealed, an element is
/// never touched again.
#[derive(Debug)]
pub struct ScrollReveal {
	elements: Rc<Vec<Element>>,
	listener: Option<Listener>,
}

impl ScrollReveal {
	#[instrument(skip(window, root))]
	pub fn install(window: &Window, root: &Element, config: &RevealConfig) -> Result<Self, Error> {
		let elements = Rc::new(dom::query_all(root, config.selector)?);
		if elements.is_empty() {
			return Ok(Self { elements, listener: None });
		}

		for element in elements.iter() {
			dom::add_classes(element, config.pending_classes);
			dom::set_style(element, "transition", config.transition);
		}
		check(window, &elements, config);

		let handler = {
			let (window, elements, config) = (window.clone(), Rc::clone(&elements), config.clone());
			move |_: Event| check(&window, &elements, &config)
		};
		let listener = Listener::new(window, "scroll", handler)?;
		trace!("Watching {} element(s).", elements.len());
		Ok(Self {
			elements,
			listener: Some(listener),
		})
	}

	/// Whether a scroll listener is registered. Pages without marked elements don't get one.
	#[must_use]
	pub fn is_watching(&self) -> bool {
		self.listener.is_some()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}
}

fn viewport_height(window: &Window) -> f64 {
	let inner = window.inner_height().ok().and_then(|height| height.as_f64()).unwrap_or(0.0);
	if inner > 0.0 {
		return inner;
	}
	window
		.document()
		.and_then(|document| document.document_element())
		.map_or(0.0, |root| f64::from(root.client_height()))
}

fn check(window: &Window, elements: &[Element], config: &RevealConfig) {
	let viewport_height = viewport_height(window);
	for element in elements {
		if element.class_list().contains(config.animated_class) {
			continue;
		}
		if is_in_view(element.get_bounding_client_rect().top(), viewport_height, config.threshold) {
			dom::remove_classes(element, config.pending_classes);
			dom::add_classes(element, &[config.animated_class]);
			trace!("Revealed {:?}.", element.id());
		}
	}
}
