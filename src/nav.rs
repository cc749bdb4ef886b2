use tracing::info;

/// The mobile navigation toggle ships with the base page template.
///
/// Nothing is wired up here so the two can't fight over the menu state.
pub fn install() {
	info!("Mobile navigation is handled by the page template.");
}
