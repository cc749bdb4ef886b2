use core::fmt::{self, Display, Formatter};
use wasm_bindgen::JsValue;

/// Failures while wiring up behaviors.
///
/// Nothing in here is raised from inside an event handler: once a behavior is installed,
/// DOM hiccups are logged and otherwise ignored.
#[derive(Debug)]
pub enum Error {
	/// There is no global `window`, e.g. when running inside a worker.
	NoWindow,
	/// The `window` has no `document`.
	NoDocument,
	/// [`install_when_ready`](`crate::install_when_ready`) was called a second time.
	AlreadyInstalled,
	/// A `web-sys` call threw, most likely because a configured selector is invalid.
	Js(JsValue),
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Error::NoWindow => write!(f, "no global `window` available"),
			Error::NoDocument => write!(f, "`window` has no `document`"),
			Error::AlreadyInstalled => write!(f, "behaviors are already installed on this page"),
			Error::Js(value) => write!(f, "JavaScript error: {:?}", value),
		}
	}
}

impl std::error::Error for Error {}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Error::Js(value)
	}
}
