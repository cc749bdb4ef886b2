//! The site's email shape check: `local@domain.tld`.

/// Checks `email` against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// That is: no whitespace anywhere, exactly one `@` with something in front of it, and a `.` after
/// it that has at least one character on either side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
	if email.chars().any(is_js_whitespace) {
		return false;
	}

	let mut parts = email.split('@');
	let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
		(Some(local), Some(domain), None) => (local, domain),
		_ => return false,
	};

	!local.is_empty() && domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// `\s` in an ECMAScript regular expression: `WhiteSpace` and `LineTerminator`.
fn is_js_whitespace(c: char) -> bool {
	c.is_whitespace() || c == '\u{feff}'
}
