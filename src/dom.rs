//! Thin helpers over `web-sys` shared by the behaviors.

use crate::Error;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, Error> {
	Ok(elements(&root.query_selector_all(selector)?))
}

pub fn elements(node_list: &NodeList) -> Vec<Element> {
	(0..node_list.length()).filter_map(|i| node_list.item(i)).filter_map(|node| node.dyn_into::<Element>().ok()).collect()
}

/// `document.querySelector`, treating an invalid selector like a miss.
pub fn find_in_document(document: &Document, selector: &str) -> Option<Element> {
	match document.query_selector(selector) {
		Ok(found) => found,
		Err(error) => {
			warn!("Not a valid selector: {:?} ({:?})", selector, error);
			None
		}
	}
}

pub fn add_classes(element: &Element, classes: &[&str]) {
	for class in classes {
		if let Err(error) = element.class_list().add_1(class) {
			warn!("Failed to add class {:?}: {:?}", class, error)
		}
	}
}

pub fn remove_classes(element: &Element, classes: &[&str]) {
	for class in classes {
		if let Err(error) = element.class_list().remove_1(class) {
			warn!("Failed to remove class {:?}: {:?}", class, error)
		}
	}
}

pub fn set_style(element: &Element, property: &str, value: &str) {
	match element.dyn_ref::<HtmlElement>() {
		Some(element) => {
			if let Err(error) = element.style().set_property(property, value) {
				warn!("Failed to set style {}: {:?}", property, error)
			}
		}
		None => warn!("Can't style non-HTML element {:?}", element.tag_name()),
	}
}

/// Creates an element with the given `class` attribute and text.
pub fn create_message(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, Error> {
	let element = document.create_element(tag)?;
	element.set_class_name(class);
	element.set_text_content(Some(text));
	Ok(element)
}
