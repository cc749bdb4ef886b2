#![cfg(target_arch = "wasm32")]

use pilgrims_dom::{Config, Enhancements};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

mod web_fixture_;
use web_fixture_::{dispatch, has_class, Fixture};

const BOOKING: &str = r#"
	<form data-validate="true" id="booking-form" action="/book">
		<div><input type="text" name="name" id="guest-name" required></div>
		<div><input type="email" name="email" id="guest-email" required value="guest@pilgrims.example"></div>
		<div><textarea name="notes" id="guest-notes"></textarea></div>
	</form>
	<form id="plain-form"><input type="text" id="plain-name" required></form>
"#;

#[wasm_bindgen_test]
fn blank_required_field_blocks_submission() {
	let fixture = Fixture::new(BOOKING);
	let enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();
	assert_eq!(enhancements.forms().unwrap().len(), 1);

	let form = fixture.get("#booking-form");
	let name = fixture.input("#guest-name");

	assert!(!dispatch(&form, "submit"));
	assert!(has_class(&name, "border-red-500"));
	assert!(has_class(&name, "bg-red-50"));
	// Blank fields are highlighted without a message.
	assert_eq!(fixture.count(".error-message"), 0);

	name.set_value("   ");
	assert!(!dispatch(&form, "submit"));

	name.set_value("Ada Lovelace");
	assert!(dispatch(&form, "submit"));
	assert!(!has_class(&name, "border-red-500"));
}

#[wasm_bindgen_test]
fn malformed_email_gets_a_single_message() {
	let fixture = Fixture::new(BOOKING);
	let _enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();

	let form = fixture.get("#booking-form");
	fixture.input("#guest-name").set_value("Ada Lovelace");
	let email = fixture.input("#guest-email");
	email.set_value("not-an-email");

	assert!(!dispatch(&form, "submit"));
	assert!(!dispatch(&form, "submit"));
	assert!(has_class(&email, "border-red-500"));
	assert_eq!(fixture.count(".error-message"), 1);
	let message = email.next_element_sibling().unwrap();
	assert!(has_class(&message, "error-message"));
	assert_eq!(message.text_content().unwrap(), "Please enter a valid email address");
}

#[wasm_bindgen_test]
fn live_validation() {
	let fixture = Fixture::new(BOOKING);
	let _enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();

	let form = fixture.get("#booking-form");
	let name = fixture.input("#guest-name");
	let email = fixture.input("#guest-email");
	email.set_value("");
	assert!(!dispatch(&form, "submit"));

	// Still blank: nothing changes.
	dispatch(&name, "input");
	assert!(has_class(&name, "border-red-500"));

	name.set_value("A");
	dispatch(&name, "input");
	assert!(!has_class(&name, "border-red-500"));

	email.set_value("guest@");
	dispatch(&email, "input");
	assert!(has_class(&email, "border-red-500"));
	assert_eq!(fixture.count(".error-message"), 1);

	email.set_value("guest@pilgrims.example");
	dispatch(&email, "input");
	assert!(!has_class(&email, "border-red-500"));
	assert_eq!(fixture.count(".error-message"), 0);

	assert!(dispatch(&form, "submit"));
}

#[wasm_bindgen_test]
fn optional_fields_are_left_alone() {
	let fixture = Fixture::new(BOOKING);
	let _enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();

	fixture.input("#guest-name").set_value("Ada Lovelace");
	let notes = fixture.get("#guest-notes");
	dispatch(&notes, "input");
	assert!(!has_class(&notes, "border-red-500"));
	assert!(dispatch(&fixture.get("#booking-form"), "submit"));
}

#[wasm_bindgen_test]
fn forms_without_opt_in_submit_normally() {
	let fixture = Fixture::new(BOOKING);
	let _enhancements = Enhancements::install(&fixture.root, &Config::default()).unwrap();

	assert!(dispatch(&fixture.get("#plain-form"), "submit"));
	assert!(!has_class(&fixture.get("#plain-name"), "border-red-500"));
}
