#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

use std::sync::Once;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, EventInit, EventTarget, HtmlElement, HtmlInputElement};

static LOG_INITIALIZED: Once = Once::new();

/// A piece of markup appended to `<body>` for the duration of a test.
pub struct Fixture {
	pub root: Element,
}

impl Fixture {
	pub fn new(html: &str) -> Self {
		LOG_INITIALIZED.call_once(tracing_wasm::set_as_global_default);

		let document = document();
		let root = document.create_element("div").unwrap();
		root.set_inner_html(html);
		document.body().unwrap().append_child(&root).unwrap();
		Self { root }
	}

	pub fn get(&self, selector: &str) -> Element {
		self.root.query_selector(selector).unwrap().unwrap_or_else(|| panic!("No element matches {:?}", selector))
	}

	pub fn html(&self, selector: &str) -> HtmlElement {
		self.get(selector).dyn_into().unwrap()
	}

	pub fn input(&self, selector: &str) -> HtmlInputElement {
		self.get(selector).dyn_into().unwrap()
	}

	pub fn count(&self, selector: &str) -> u32 {
		self.root.query_selector_all(selector).unwrap().length()
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		self.root.remove();
	}
}

pub fn document() -> Document {
	window().unwrap().document().unwrap()
}

/// Dispatches a bubbling, cancelable event and returns whether its default action is still allowed.
pub fn dispatch(target: &EventTarget, name: &str) -> bool {
	let init = EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = Event::new_with_event_init_dict(name, &init).unwrap();
	target.dispatch_event(&event).unwrap()
}

pub fn has_class(element: &Element, class: &str) -> bool {
	element.class_list().contains(class)
}
