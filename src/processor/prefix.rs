/*!
# Switcheroo: Prefix Patterns.
*/

use regex::{
	Regex,
	RegexBuilder,
};
use super::SwitchError;



#[derive(Debug, Clone)]
/// # Prefix Pattern.
///
/// A user-supplied regular expression compiled as `^(?:pattern)` in both
/// case-sensitive and case-insensitive flavors so the processor can flip
/// between the two without recompiling.
pub(super) struct Prefix {
	/// # Exact.
	exact: Regex,

	/// # Case-Insensitive.
	folded: Regex,
}

impl Prefix {
	/// # New.
	///
	/// ## Errors
	///
	/// Blank or uncompilable patterns are rejected.
	pub(super) fn new(pattern: &str) -> Result<Self, SwitchError> {
		if pattern.is_empty() { return Err(SwitchError::EmptyPattern); }

		let anchored = format!("^(?:{pattern})");
		let build = |insensitive: bool| RegexBuilder::new(&anchored)
			.case_insensitive(insensitive)
			.build()
			.map_err(|source| SwitchError::InvalidPattern {
				pattern: pattern.to_owned(),
				source,
			});

		Ok(Self {
			exact: build(false)?,
			folded: build(true)?,
		})
	}

	/// # Pattern.
	///
	/// Return the anchored source of the pattern.
	pub(super) fn as_str(&self) -> &str { self.exact.as_str() }

	/// # Strip.
	///
	/// Return whatever follows the prefix if `token` starts with it.
	/// Zero-length matches do not count.
	pub(super) fn strip<'a>(&self, token: &'a str, ignore_case: bool) -> Option<&'a str> {
		let re = if ignore_case { &self.folded } else { &self.exact };
		let m = re.find(token)?;
		if m.start() == 0 && m.end() != 0 { token.get(m.end()..) }
		else { None }
	}
}
