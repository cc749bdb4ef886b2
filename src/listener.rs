use crate::Error;
use core::fmt::{self, Debug, Formatter};
use js_sys::Function;
use tracing::{error, trace};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget};

/// An event listener that owns its [`Closure`] and unregisters it when dropped.
///
/// Dropping a [`Listener`] from inside its own handler is fine: the JavaScript glue defers
/// freeing the closure until the call returns.
pub struct Listener {
	target: EventTarget,
	name: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
	pub fn new(target: &EventTarget, name: &'static str, handler: impl 'static + FnMut(Event)) -> Result<Self, Error> {
		let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
		target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref::<Function>())?;
		trace!("Added {:?} listener.", name);
		Ok(Self {
			target: target.clone(),
			name,
			closure,
		})
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		if let Err(error) = self.target.remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref::<Function>()) {
			error!("Failed to remove event listener {:?}: {:?}", self.name, error)
		} else {
			trace!("Removed {:?} listener.", self.name);
		}
	}
}

impl Debug for Listener {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listener").field("target", &self.target).field("name", &self.name).finish_non_exhaustive()
	}
}
