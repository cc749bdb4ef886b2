use crate::{config::DropdownConfig, dom, listener::Listener, Error};
use core::{
	cell::RefCell,
	fmt::{self, Debug, Formatter},
};
use gloo_timers::callback::Timeout;
use std::rc::{Rc, Weak};
use tracing::{error, instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

/// Remembers the one panel that may be open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenTracker {
	open: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
	Opened { index: usize, superseded: Option<usize> },
	Closed { index: usize },
}

impl OpenTracker {
	/// A toggle click always leaves every other panel closed.
	pub(crate) fn toggle(&mut self, index: usize, was_hidden: bool) -> Transition {
		let previous = self.open.take();
		if was_hidden {
			self.open = Some(index);
			Transition::Opened {
				index,
				superseded: previous.filter(|&previous| previous != index),
			}
		} else {
			Transition::Closed { index }
		}
	}

	pub(crate) fn close(&mut self, index: usize) -> bool {
		if self.open == Some(index) {
			self.open = None;
			true
		} else {
			false
		}
	}

	pub(crate) fn open(self) -> Option<usize> {
		self.open
	}
}

struct Menu {
	toggle: Element,
	panel: Element,
}

struct State {
	document: Document,
	config: DropdownConfig,
	menus: Vec<Menu>,
	tracker: OpenTracker,
	arming: Option<Timeout>,
	outside_click: Option<Listener>,
}

impl State {
	/// Drops a pending arming timer and the outside-click listener, whichever exists.
	fn disarm(&mut self) {
		let pending = self.arming.take().is_some();
		let armed = self.outside_click.take().is_some();
		if pending || armed {
			trace!(pending, armed, "Disarmed outside click.");
		}
	}
}

/// Dropdown toggles, each owning the panel that directly follows it.
pub struct Dropdowns {
	state: Rc<RefCell<State>>,
	listeners: Vec<Listener>,
}

impl Dropdowns {
	#[instrument(skip(document, root))]
	pub fn install(document: &Document, root: &Element, config: &DropdownConfig) -> Result<Self, Error> {
		let menus = dom::query_all(root, config.toggle_selector)?
			.into_iter()
			.filter_map(|toggle| match toggle.next_element_sibling() {
				Some(panel) => Some(Menu { toggle, panel }),
				None => {
					warn!("Dropdown toggle {:?} has no panel; skipping.", toggle.id());
					None
				}
			})
			.collect::<Vec<_>>();

		let toggles = menus.iter().map(|menu| menu.toggle.clone()).collect::<Vec<_>>();
		let state = Rc::new(RefCell::new(State {
			document: document.clone(),
			config: config.clone(),
			menus,
			tracker: OpenTracker::default(),
			arming: None,
			outside_click: None,
		}));

		let listeners = toggles
			.iter()
			.enumerate()
			.map(|(index, toggle)| {
				let state = Rc::clone(&state);
				Listener::new(toggle, "click", move |event| on_toggle(&state, index, &event))
			})
			.collect::<Result<Vec<_>, _>>()?;
		trace!("Wired {} dropdown(s).", listeners.len());

		Ok(Self { state, listeners })
	}

	/// Index (in document order) of the open panel.
	#[must_use]
	pub fn open(&self) -> Option<usize> {
		self.state.borrow().tracker.open()
	}

	/// Whether an outside-click listener is currently registered.
	#[must_use]
	pub fn is_armed(&self) -> bool {
		self.state.borrow().outside_click.is_some()
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

impl Drop for Dropdowns {
	fn drop(&mut self) {
		self.state.borrow_mut().disarm();
	}
}

impl Debug for Dropdowns {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dropdowns")
			.field("menus", &self.listeners.len())
			.field("open", &self.open())
			.field("armed", &self.is_armed())
			.finish()
	}
}

fn on_toggle(state: &Rc<RefCell<State>>, index: usize, event: &Event) {
	event.prevent_default();

	let mut guard = state.borrow_mut();
	let state_ref = &mut *guard;
	let hidden = state_ref.config.hidden_class;

	let panel = &state_ref.menus[index].panel;
	let was_hidden = panel.class_list().contains(hidden);
	if let Err(error) = panel.class_list().toggle(hidden) {
		return error!("Failed to toggle dropdown panel: {:?}", error);
	}
	for (_, other) in state_ref.menus.iter().enumerate().filter(|&(i, _)| i != index) {
		dom::add_classes(&other.panel, &[hidden]);
	}

	state_ref.disarm();
	match state_ref.tracker.toggle(index, was_hidden) {
		Transition::Opened { index, superseded } => {
			trace!("Opened dropdown {} (closing {:?}).", index, superseded);
			let weak = Rc::downgrade(state);
			state_ref.arming = Some(Timeout::new(state_ref.config.arm_delay_ms, move || arm(&weak, index)));
		}
		Transition::Closed { index } => trace!("Closed dropdown {}.", index),
	}
}

fn arm(state: &Weak<RefCell<State>>, index: usize) {
	let strong = match state.upgrade() {
		Some(strong) => strong,
		None => return,
	};
	let mut state_ref = strong.borrow_mut();
	if state_ref.tracker.open() != Some(index) {
		return;
	}

	let weak = Weak::clone(state);
	let document = state_ref.document.clone();
	match Listener::new(&document, "click", move |event| on_outside_click(&weak, index, &event)) {
		Ok(listener) => state_ref.outside_click = Some(listener),
		Err(error) => error!("Failed to arm outside click for dropdown {}: {}", index, error),
	}
}

fn on_outside_click(state: &Weak<RefCell<State>>, index: usize, event: &Event) {
	let strong = match state.upgrade() {
		Some(strong) => strong,
		None => return,
	};
	let mut state_ref = strong.borrow_mut();

	let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
	let menu = &state_ref.menus[index];
	if menu.toggle.contains(target.as_ref()) || menu.panel.contains(target.as_ref()) {
		return;
	}

	dom::add_classes(&menu.panel, &[state_ref.config.hidden_class]);
	state_ref.tracker.close(index);
	state_ref.disarm();
	trace!("Closed dropdown {} on outside click.", index);
}
