/*!
# Switcheroo: Errors.

Only configuration can fail. Parsing never does; unknown switches are
recorded as data instead.
*/

use thiserror::Error;



#[derive(Debug, Clone, Error)]
/// # Error!
pub enum SwitchError {
	#[error("Empty prefix pattern.")]
	/// # Empty Pattern.
	///
	/// A blank pattern would match every token.
	EmptyPattern,

	#[error("Invalid prefix pattern {pattern:?}: {source}")]
	/// # Invalid Pattern.
	InvalidPattern {
		/// # The Pattern.
		pattern: String,

		#[source]
		/// # Regex Error.
		source: regex::Error,
	},
}

impl SwitchError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a short, static description of the error kind.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::EmptyPattern => "Empty prefix pattern.",
			Self::InvalidPattern { .. } => "Invalid prefix pattern.",
		}
	}
}
