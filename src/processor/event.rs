/*!
# Switcheroo: Match Events.
*/



/// # Invalid Switch Identifier.
///
/// This is the [`SwitchMatch::switch`] reported to catch-all subscribers for
/// tokens that looked like switches but had no registered handler.
pub const INVALID_SWITCH: &str = "INVALID";



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Switch Match.
///
/// This is passed to handler callbacks as each switch is processed.
///
/// For valid matches, [`SwitchMatch::switch`] is the name as registered and
/// [`SwitchMatch::value`] is whatever value was attached to it, if any.
///
/// For invalid matches, the switch is [`INVALID_SWITCH`] and the value holds
/// the offending token, verbatim.
pub struct SwitchMatch<'a> {
	/// # Switch Name.
	switch: &'a str,

	/// # Value.
	value: Option<&'a str>,

	/// # Valid?
	valid: bool,
}

impl<'a> SwitchMatch<'a> {
	#[must_use]
	/// # Valid Match.
	pub(crate) const fn valid(switch: &'a str, value: Option<&'a str>) -> Self {
		Self { switch, value, valid: true }
	}

	#[must_use]
	/// # Invalid Match.
	pub(crate) const fn invalid(token: &'a str) -> Self {
		Self { switch: INVALID_SWITCH, value: Some(token), valid: false }
	}

	#[must_use]
	/// # Switch.
	pub const fn switch(&self) -> &'a str { self.switch }

	#[must_use]
	/// # Value.
	pub const fn value(&self) -> Option<&'a str> { self.value }

	#[must_use]
	/// # Is Valid Switch?
	pub const fn is_valid(&self) -> bool { self.valid }
}
