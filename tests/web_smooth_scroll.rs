#![cfg(target_arch = "wasm32")]

use pilgrims_dom::{Config, Enhancements};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

mod web_fixture_;
use web_fixture_::{dispatch, Fixture};

const PAGE: &str = r##"
	<header class="sticky" style="height: 48px">Pilgrims</header>
	<nav>
		<a id="to-rooms" href="#rooms-section">Rooms</a>
		<a id="to-nowhere" href="#no-such-section">Nowhere</a>
		<a id="to-top" href="#">Top</a>
	</nav>
	<section id="rooms-section" style="margin-top: 2000px">Rooms</section>
"##;

#[wasm_bindgen_test]
fn bare_hash_is_not_wired() {
	let fixture = Fixture::new(PAGE);
	let enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();
	assert_eq!(enhancements.smooth_scroll().unwrap().len(), 2);
}

#[wasm_bindgen_test]
fn existing_target_prevents_navigation() {
	let fixture = Fixture::new(PAGE);
	let _enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();

	assert!(!dispatch(&fixture.get("#to-rooms"), "click"));
}

#[wasm_bindgen_test]
fn missing_target_falls_through() {
	let fixture = Fixture::new(PAGE);
	let _enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();

	assert!(dispatch(&fixture.get("#to-nowhere"), "click"));
}

#[wasm_bindgen_test]
fn unwired_after_drop() {
	let fixture = Fixture::new(PAGE);
	drop(Enhancements::install(&fixture.root, &Config::default()).unwrap());

	assert!(dispatch(&fixture.get("#to-rooms"), "click"));
}
