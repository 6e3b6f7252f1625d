/*!
# Switcheroo: Processor.

This module contains [`Processor`], a single-pass switch parser that strips
user-defined (regex) prefixes from each argument, looks the remainder up in a
registry of handlers, and calls them back as it goes.
*/

mod error;
mod event;
mod prefix;

pub use error::SwitchError;
pub use event::{
	INVALID_SWITCH,
	SwitchMatch,
};
use prefix::Prefix;
use std::{
	collections::BTreeMap,
	fmt,
};



/// # Flag: Ignore Case.
///
/// When set, prefixes and switch names are matched case-insensitively.
/// Values and invalid tokens are always kept as-are.
pub const FLAG_IGNORE_CASE: u8 =   0b0000_0001;

/// # Flag: Strict.
///
/// Arguments without any recognized prefix are normally skipped. (If they
/// follow a switch expecting a value, they're consumed as that value before
/// they would be looked at anyway.) When set, these stragglers are recorded
/// as invalid instead.
pub const FLAG_STRICT: u8 =        0b0000_0010;

/// # Flag: Reject Inline Values.
///
/// A `-key=value` argument given for a switch that doesn't take a value
/// normally counts as `-key` with the value thrown out. When set, such
/// arguments are recorded as invalid instead.
pub const FLAG_REJECT_INLINE: u8 = 0b0000_0100;

/// # Default Prefixes.
const DEFAULT_PREFIXES: [&str; 2] = ["-", "/"];



/// # Callback.
type Callback<'a> = Box<dyn FnMut(&SwitchMatch<'_>) + 'a>;



/// # Handler.
struct Handler<'a> {
	/// # Expects a Value?
	expects_value: bool,

	/// # Callback.
	///
	/// When `None`, matches are passed to the catch-all subscribers instead.
	callback: Option<Callback<'a>>,

	/// # Registration Order.
	seq: usize,
}



/// # Switch Processor.
///
/// `Processor` holds a list of prefix patterns, a registry of switch
/// handlers, and the results of any arguments it has processed.
///
/// Prefixes are regular expressions anchored to the start of each argument.
/// They are tried in the order they were added and the first (non-empty)
/// match wins, so if you want both `-` and `--`, add `--` first (or just use
/// `-{1,2}`). New instances come with `-` and `/` preloaded; call
/// [`Processor::clear_prefixes`] to start from scratch.
///
/// Whatever remains after the prefix is the switch name, unless it contains
/// an `=`, in which case everything after it is an inline value. The
/// following are equivalent for a switch expecting a value:
/// * `-key=val`; `-key` then `val`;
///
/// Arguments that have a prefix but no handler are recorded as invalid.
/// Arguments with no prefix at all are skipped, unless [`FLAG_STRICT`] is set.
/// Nothing here ever fails at parse time.
///
/// ## Examples
///
/// ```
/// use switcheroo::Processor;
///
/// let mut threads = None;
/// let mut verbose = false;
///
/// let mut args = Processor::default();
/// args.register("threads", true, |m| {
///     threads = m.value().and_then(|v| v.parse::<usize>().ok());
/// });
/// args.register_switch("verbose", |_| { verbose = true; });
///
/// args.process(["-threads", "4", "/verbose", "-nope"]);
///
/// assert_eq!(args.arg_count(), 2);
/// assert_eq!(args.get("threads"), Some("4"));
/// assert!(args.contains_switch("-verbose"));
/// assert_eq!(args.invalid_args(), ["-nope"]);
///
/// drop(args);
/// assert_eq!(threads, Some(4));
/// assert!(verbose);
/// ```
pub struct Processor<'a> {
	/// # Flags.
	flags: u8,

	/// # Prefix Patterns.
	prefixes: Vec<Prefix>,

	/// # Handlers.
	handlers: BTreeMap<String, Handler<'a>>,

	/// # Next Registration Number.
	next_seq: usize,

	/// # Catch-All Subscribers.
	catch_all: Vec<Callback<'a>>,

	/// # Parsed Switches (in order).
	parsed: Vec<(String, Option<String>)>,

	/// # Invalid Arguments (in order).
	invalid: Vec<String>,
}

impl Default for Processor<'_> {
	#[inline]
	fn default() -> Self { Self::new(0) }
}

impl fmt::Debug for Processor<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Processor")
			.field("flags", &self.flags)
			.field("prefixes", &self.prefixes().collect::<Vec<_>>())
			.field("handlers", &self.handlers.keys().collect::<Vec<_>>())
			.field("catch_all", &self.catch_all.len())
			.field("parsed", &self.parsed)
			.field("invalid", &self.invalid)
			.finish()
	}
}

/// # Setup.
impl<'a> Processor<'a> {
	#[must_use]
	/// # New.
	///
	/// Create a new instance with the default `-` and `/` prefixes and the
	/// given flags.
	///
	/// ## Examples
	///
	/// ```
	/// use switcheroo::{FLAG_IGNORE_CASE, FLAG_STRICT, Processor};
	///
	/// let args = Processor::new(FLAG_IGNORE_CASE | FLAG_STRICT);
	/// assert!(args.ignore_case());
	/// ```
	pub fn new(flags: u8) -> Self {
		Self {
			flags,
			prefixes: DEFAULT_PREFIXES.iter()
				.filter_map(|p| Prefix::new(p).ok())
				.collect(),
			handlers: BTreeMap::new(),
			next_seq: 0,
			catch_all: Vec::new(),
			parsed: Vec::new(),
			invalid: Vec::new(),
		}
	}

	/// # Add Prefix.
	///
	/// Append a regular expression used to recognize switches. It is matched
	/// against the start of each argument.
	///
	/// ## Errors
	///
	/// An error is returned if the pattern is empty or fails to compile.
	pub fn add_prefix(&mut self, pattern: &str) -> Result<(), SwitchError> {
		let prefix = Prefix::new(pattern)?;
		tracing::trace!(pattern = prefix.as_str(), "Added prefix.");
		self.prefixes.push(prefix);
		Ok(())
	}

	/// # Clear Prefixes.
	///
	/// Remove all prefix patterns, including the defaults.
	pub fn clear_prefixes(&mut self) { self.prefixes.clear(); }

	#[must_use]
	/// # Without Prefixes.
	///
	/// Builder-style version of [`Processor::clear_prefixes`], handy for
	/// starting over before adding longer prefixes ahead of shorter ones.
	///
	/// ## Examples
	///
	/// ```
	/// let args = switcheroo::Processor::default()
	///     .without_prefixes()
	///     .with_prefixes(["--", "-", "/"]).unwrap();
	///
	/// assert_eq!(args.prefixes().count(), 3);
	/// ```
	pub fn without_prefixes(mut self) -> Self {
		self.clear_prefixes();
		self
	}

	/// # Register Handler.
	///
	/// Associate a switch name with a callback, optionally requiring a value.
	/// Registering the same name again replaces the earlier handler.
	pub fn register<F>(&mut self, name: &str, expects_value: bool, callback: F)
	where F: FnMut(&SwitchMatch<'_>) + 'a {
		let callback: Callback<'a> = Box::new(callback);
		self.insert(name, expects_value, Some(callback));
	}

	/// # Register Switch Handler.
	///
	/// Same as [`Processor::register`] for switches that don't take a value.
	pub fn register_switch<F>(&mut self, name: &str, callback: F)
	where F: FnMut(&SwitchMatch<'_>) + 'a {
		self.register(name, false, callback);
	}

	/// # Allow Switch.
	///
	/// Register a switch name without a callback of its own. Matches are
	/// recorded as usual and passed along to any catch-all subscribers (see
	/// [`Processor::on_switch_match`]).
	pub fn allow(&mut self, name: &str, expects_value: bool) {
		self.insert(name, expects_value, None);
	}

	/// # Subscribe to All Matches.
	///
	/// Add a catch-all callback. It is called for every invalid argument, and
	/// for valid switches registered without a callback of their own.
	pub fn on_switch_match<F>(&mut self, callback: F)
	where F: FnMut(&SwitchMatch<'_>) + 'a {
		self.catch_all.push(Box::new(callback));
	}

	/// # Set Ignore Case.
	///
	/// If this is turned on after both `"A"` and `"a"` were registered, the
	/// most recent registration of the two is the one that answers.
	pub fn set_ignore_case(&mut self, on: bool) {
		if on { self.flags |= FLAG_IGNORE_CASE; }
		else { self.flags &= ! FLAG_IGNORE_CASE; }
	}

	/// # Reset.
	///
	/// Forget any previously-processed results, keeping the configuration.
	pub fn reset(&mut self) {
		self.parsed.clear();
		self.invalid.clear();
	}

	/// # Insert Handler.
	fn insert(&mut self, name: &str, expects_value: bool, callback: Option<Callback<'a>>) {
		// Under case-insensitivity, "A" and "a" are the same switch.
		if let Some(old) = self.find_handler(name).map(|(k, _)| k.to_owned()) {
			tracing::debug!(switch = name, replaced = old.as_str(), "Replacing handler.");
			self.handlers.remove(&old);
		}
		let seq = self.next_seq;
		self.next_seq += 1;
		self.handlers.insert(name.to_owned(), Handler { expects_value, callback, seq });
	}
}

/// # Builder.
impl<'a> Processor<'a> {
	/// # With Prefix.
	///
	/// Builder-style version of [`Processor::add_prefix`].
	///
	/// ## Examples
	///
	/// ```
	/// let args = switcheroo::Processor::default()
	///     .with_prefix("--").unwrap();
	/// ```
	///
	/// ## Errors
	///
	/// An error is returned if the pattern is empty or fails to compile.
	pub fn with_prefix(mut self, pattern: &str) -> Result<Self, SwitchError> {
		self.add_prefix(pattern)?;
		Ok(self)
	}

	/// # With Prefixes.
	///
	/// Add one or more prefix patterns, in order.
	///
	/// ## Errors
	///
	/// An error is returned if any pattern is empty or fails to compile.
	pub fn with_prefixes<'p, I: IntoIterator<Item=&'p str>>(self, patterns: I)
	-> Result<Self, SwitchError> {
		patterns.into_iter().try_fold(self, Self::with_prefix)
	}

	#[must_use]
	/// # With Handler.
	///
	/// Builder-style version of [`Processor::register`].
	pub fn with_handler<F>(mut self, name: &str, expects_value: bool, callback: F)
	-> Self
	where F: FnMut(&SwitchMatch<'_>) + 'a {
		self.register(name, expects_value, callback);
		self
	}

	#[must_use]
	/// # With Keys.
	///
	/// Allow one or more callback-less switches. The bool indicates whether or
	/// not each expects a value.
	///
	/// ## Examples
	///
	/// ```
	/// let mut args = switcheroo::Processor::default()
	///     .with_keys([("help", false), ("out", true)]);
	///
	/// args.process(["-out", "/tmp/foo", "/help"]);
	/// assert_eq!(args.get("out"), Some("/tmp/foo"));
	/// assert!(args.contains_switch("help"));
	/// ```
	pub fn with_keys<'k, I: IntoIterator<Item=(&'k str, bool)>>(mut self, keys: I)
	-> Self {
		for (k, v) in keys { self.allow(k, v); }
		self
	}
}

/// # Processing.
impl Processor<'_> {
	/// # Process Arguments.
	///
	/// Run through the arguments (not including the program path!) once,
	/// left to right, recording and dispatching any switches found.
	///
	/// Calling this more than once appends to the existing results; use
	/// [`Processor::reset`] first if that isn't what you want.
	pub fn process<I, S>(&mut self, args: I)
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let (parsed, invalid) = (self.parsed.len(), self.invalid.len());

		let mut args = args.into_iter();
		while let Some(arg) = args.next() {
			let token: &str = arg.as_ref();
			tracing::trace!(token, "Processing argument.");

			// No prefix, no switch.
			let Some(raw) = self.strip_prefix(token) else {
				if FLAG_STRICT == self.flags & FLAG_STRICT { self.reject(token); }
				continue;
			};

			let (name, inline) = match raw.split_once('=') {
				Some((n, v)) => (n, Some(v)),
				None => (raw, None),
			};

			let Some((key, expects_value)) = self.find_handler(name)
				.map(|(k, h)| (k.to_owned(), h.expects_value))
			else {
				self.reject(token);
				continue;
			};

			let value: Option<String> =
				if expects_value {
					match inline {
						Some(v) => Some(v.to_owned()),
						// Pull it from the next argument, if any.
						None => args.next().map(|v| v.as_ref().to_owned()),
					}
				}
				else if inline.is_some() && FLAG_REJECT_INLINE == self.flags & FLAG_REJECT_INLINE {
					self.reject(token);
					continue;
				}
				else { None };

			self.dispatch(key, value);
		}

		tracing::debug!(
			parsed = self.parsed.len() - parsed,
			invalid = self.invalid.len() - invalid,
			"Processed arguments."
		);
	}

	/// # Process Environment Arguments.
	///
	/// Process [`std::env::args_os`], skipping the first (command path)
	/// entry. Invalid UTF-8 is converted lossily.
	///
	/// See `demos/debug.rs` for this in action.
	pub fn process_env(&mut self) {
		self.process(
			std::env::args_os().skip(1).map(|a| a.to_string_lossy().into_owned())
		);
	}

	/// # Dispatch Valid Switch.
	fn dispatch(&mut self, key: String, value: Option<String>) {
		let event = SwitchMatch::valid(&key, value.as_deref());
		match self.handlers.get_mut(&key).and_then(|h| h.callback.as_mut()) {
			Some(cb) => cb(&event),
			None => for cb in &mut self.catch_all { cb(&event); },
		}

		// Repeat switches keep their original position.
		if let Some(slot) = self.parsed.iter_mut().find(|(k, _)| *k == key) {
			slot.1 = value;
		}
		else { self.parsed.push((key, value)); }
	}

	/// # Reject Argument.
	fn reject(&mut self, token: &str) {
		tracing::debug!(token, "Invalid argument.");
		let event = SwitchMatch::invalid(token);
		for cb in &mut self.catch_all { cb(&event); }
		self.invalid.push(token.to_owned());
	}
}

/// # Getters.
impl Processor<'_> {
	#[must_use]
	/// # Parsed Switch Count.
	pub fn arg_count(&self) -> usize { self.parsed.len() }

	#[must_use]
	/// # Contains Switch?
	///
	/// Returns `true` if the switch was successfully processed. The name may
	/// be given bare or with one of the prefixes attached.
	pub fn contains_switch(&self, name: &str) -> bool {
		self.find_parsed(name).is_some()
	}

	#[must_use]
	/// # Flags.
	pub const fn flags(&self) -> u8 { self.flags }

	#[must_use]
	/// # Get Value.
	///
	/// Return the value attached to the switch, if it was processed and had
	/// one. As with [`Processor::contains_switch`], prefixes are optional.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.find_parsed(name).and_then(|(_, v)| v.as_deref())
	}

	#[must_use]
	/// # Ignore Case?
	pub const fn ignore_case(&self) -> bool {
		FLAG_IGNORE_CASE == self.flags & FLAG_IGNORE_CASE
	}

	#[must_use]
	/// # Invalid Arguments.
	///
	/// Return the arguments that had a prefix but no handler (plus any
	/// stragglers if [`FLAG_STRICT`] is set), in the order they were found.
	pub fn invalid_args(&self) -> &[String] { &self.invalid }

	/// # Parsed Switches.
	///
	/// Iterate through the processed switches and their values, if any, in
	/// command-line order. Names are as registered.
	pub fn parsed(&self) -> impl Iterator<Item=(&str, Option<&str>)> {
		self.parsed.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
	}

	/// # Prefix Patterns.
	///
	/// Iterate through the (anchored) prefix patterns, in matching order.
	pub fn prefixes(&self) -> impl Iterator<Item=&str> {
		self.prefixes.iter().map(Prefix::as_str)
	}
}

/// # Lookups.
impl<'a> Processor<'a> {
	/// # Find Handler.
	fn find_handler(&self, name: &str) -> Option<(&String, &Handler<'a>)> {
		if self.ignore_case() {
			self.handlers.iter()
				.filter(|(k, _)| same_name(k, name, true))
				.max_by_key(|(_, h)| h.seq)
		}
		else { self.handlers.get_key_value(name) }
	}

	/// # Find Parsed Switch.
	fn find_parsed(&self, name: &str) -> Option<&(String, Option<String>)> {
		let name = self.strip_prefix(name).unwrap_or(name);
		let fold = self.ignore_case();
		self.parsed.iter().find(|(k, _)| same_name(k, name, fold))
	}

	/// # Strip Prefix.
	///
	/// Return whatever follows the first matching prefix, if any.
	fn strip_prefix<'t>(&self, token: &'t str) -> Option<&'t str> {
		let fold = self.ignore_case();
		self.prefixes.iter().find_map(|p| p.strip(token, fold))
	}
}



/// # Same Name?
fn same_name(a: &str, b: &str, fold: bool) -> bool {
	if fold { a == b || a.to_lowercase() == b.to_lowercase() }
	else { a == b }
}



#[cfg(test)]
mod test {
	use super::*;
	use std::cell::{
		Cell,
		RefCell,
	};

	/// # Recorded Event.
	type Seen = (String, Option<String>, bool);

	/// # Record Event.
	fn seen(m: &SwitchMatch<'_>) -> Seen {
		(m.switch().to_owned(), m.value().map(str::to_owned), m.is_valid())
	}

	#[test]
	fn t_option_with_value() {
		for args in [&["-a", "testarg"][..], &["-a=testarg"]] {
			let hits = Cell::new(0_u8);
			let mut cli = Processor::default();
			cli.register("a", true, |m| {
				assert_eq!(m.switch(), "a");
				assert_eq!(m.value(), Some("testarg"));
				assert!(m.is_valid());
				hits.set(hits.get() + 1);
			});

			cli.process(args);
			assert_eq!(cli.arg_count(), 1, "Wrong count for {args:?}.");
			assert_eq!(cli.get("a"), Some("testarg"));
			assert!(cli.invalid_args().is_empty());
			assert_eq!(hits.get(), 1);
		}
	}

	#[test]
	fn t_option_and_switch() {
		for args in [
			&["-a", "testarg", "-b"][..],
			&["-b", "-a", "testarg"],
			&["-a=testarg", "-b"],
			&["-b", "-a=testarg"],
		] {
			let mut cli = Processor::default()
				.with_handler("a", true, |_| {})
				.with_handler("b", false, |_| {});

			cli.process(args);
			assert_eq!(cli.arg_count(), 2, "Wrong count for {args:?}.");
			assert_eq!(cli.get("a"), Some("testarg"));
			assert!(cli.contains_switch("b"));
			assert_eq!(cli.get("b"), None);
			assert!(cli.invalid_args().is_empty());
		}
	}

	#[test]
	fn t_switch_with_trailing_value() {
		// The bare value is not consumed by a switch, so it is skipped.
		let mut cli = Processor::default().with_handler("a", false, |_| {});
		cli.process(["-a", "v"]);
		assert_eq!(cli.arg_count(), 1);
		assert!(cli.contains_switch("a"));
		assert_eq!(cli.get("a"), None);
		assert!(cli.invalid_args().is_empty());

		// Unless we're being strict about it.
		let mut cli = Processor::new(FLAG_STRICT).with_handler("a", false, |_| {});
		cli.process(["-a", "v"]);
		assert_eq!(cli.arg_count(), 1);
		assert_eq!(cli.invalid_args(), ["v"]);
	}

	#[test]
	fn t_switch_with_inline_value() {
		// By default the value is dropped.
		let mut cli = Processor::default().with_handler("a", false, |m| {
			assert_eq!(m.value(), None);
		});
		cli.process(["-a=testarg"]);
		assert_eq!(cli.arg_count(), 1);
		assert_eq!(cli.get("a"), None);
		assert!(cli.invalid_args().is_empty());

		// But it can be rejected instead.
		let mut cli = Processor::new(FLAG_REJECT_INLINE)
			.with_handler("a", false, |_| { panic!("Handler should not run."); });
		cli.process(["-a=testarg"]);
		assert_eq!(cli.arg_count(), 0);
		assert_eq!(cli.invalid_args(), ["-a=testarg"]);
	}

	#[test]
	fn t_invalid() {
		for args in [
			&["-a", "testarg", "-invalid"][..],
			&["-invalid", "-a", "testarg"],
			&["-a=testarg", "-invalid"],
		] {
			let events = RefCell::new(Vec::new());
			let mut cli = Processor::default().with_handler("a", true, |_| {});
			cli.on_switch_match(|m| events.borrow_mut().push(seen(m)));

			cli.process(args);
			assert_eq!(cli.arg_count(), 1, "Wrong count for {args:?}.");
			assert_eq!(cli.invalid_args(), ["-invalid"]);
			assert!(! cli.contains_switch("invalid"));

			drop(cli);
			assert_eq!(
				events.into_inner(),
				[(INVALID_SWITCH.to_owned(), Some("-invalid".to_owned()), false)],
			);
		}
	}

	#[test]
	fn t_missing_value() {
		let mut cli = Processor::default().with_handler("a", true, |m| {
			assert_eq!(m.value(), None);
		});
		cli.process(["-a"]);
		assert_eq!(cli.arg_count(), 1);
		assert!(cli.contains_switch("a"));
		assert_eq!(cli.get("a"), None);

		// An empty inline value is still a value.
		cli.reset();
		cli.register("a", true, |_| {});
		cli.process(["-a="]);
		assert_eq!(cli.get("a"), Some(""));
	}

	#[test]
	fn t_contains_switch() {
		let mut cli = Processor::default()
			.with_handler("a", true, |_| {})
			.with_handler("b", false, |_| {});
		assert!(! cli.contains_switch("a"));
		assert!(! cli.contains_switch("zzz"));

		cli.process(["/a", "1"]);
		assert!(cli.contains_switch("a"));
		assert!(cli.contains_switch("-a"));
		assert!(cli.contains_switch("/a"));
		assert!(! cli.contains_switch("A"));
		assert!(! cli.contains_switch("b"));
		assert!(! cli.contains_switch("zzz"));
		assert_eq!(cli.get("/a"), Some("1"));
	}

	#[test]
	fn t_ignore_case() {
		let mut cli = Processor::new(FLAG_IGNORE_CASE).with_handler("A", true, |m| {
			assert_eq!(m.switch(), "A");
			assert_eq!(m.value(), Some("MixedCase"));
		});
		cli.process(["-a", "MixedCase"]);
		assert_eq!(cli.arg_count(), 1);
		assert_eq!(cli.get("a"), Some("MixedCase"));
		assert_eq!(cli.get("-A"), Some("MixedCase"));
		assert_eq!(cli.parsed().collect::<Vec<_>>(), [("A", Some("MixedCase"))]);

		// Case matters by default.
		let mut cli = Processor::default().with_handler("A", true, |_| {});
		assert!(! cli.ignore_case());
		cli.process(["-a", "MixedCase"]);
		assert_eq!(cli.arg_count(), 0);
		assert_eq!(cli.invalid_args(), ["-a"]);

		// It can be toggled after the fact.
		cli.reset();
		cli.set_ignore_case(true);
		assert!(cli.ignore_case());
		cli.process(["-a", "MixedCase"]);
		assert_eq!(cli.arg_count(), 1);

		cli.set_ignore_case(false);
		assert_eq!(cli.flags(), 0);
	}

	#[test]
	fn t_prefixes() {
		// The defaults.
		let cli = Processor::default();
		assert_eq!(cli.prefixes().collect::<Vec<_>>(), ["^(?:-)", "^(?:/)"]);

		// A single dash wins if it comes first.
		let mut cli = Processor::default()
			.with_prefix("--").expect("Prefix failed.")
			.with_handler("long", false, |_| {});
		cli.process(["--long"]);
		assert_eq!(cli.arg_count(), 0);
		assert_eq!(cli.invalid_args(), ["--long"]);

		// But not if it comes last.
		let mut cli = Processor::default();
		cli.clear_prefixes();
		assert_eq!(cli.prefixes().count(), 0);
		let mut cli = cli.with_prefixes(["--", "-"]).expect("Prefixes failed.")
			.with_handler("long", false, |_| {})
			.with_handler("s", false, |_| {});
		cli.process(["--long", "-s", "/s"]);
		assert_eq!(cli.arg_count(), 2);
		assert!(cli.invalid_args().is_empty(), "Slashes should no longer count.");

		// Bad patterns fail immediately.
		let mut cli = Processor::default();
		assert!(matches!(cli.add_prefix("("), Err(SwitchError::InvalidPattern { .. })));
		assert!(matches!(cli.add_prefix(""), Err(SwitchError::EmptyPattern)));
		assert_eq!(cli.prefixes().count(), 2);
	}

	#[test]
	fn t_long_prefix_first() {
		let mut cli = Processor::new(FLAG_IGNORE_CASE)
			.without_prefixes()
			.with_prefixes(["--", "-", "/"]).expect("Prefixes failed.")
			.with_keys([
				("h", false), ("help", false),
				("v", false), ("verbose", false),
				("o", true), ("output", true),
			]);
		assert_eq!(cli.prefixes().collect::<Vec<_>>(), ["^(?:--)", "^(?:-)", "^(?:/)"]);

		cli.process(["--help", "--output", "x", "-v", "/VERBOSE"]);
		assert!(cli.invalid_args().is_empty(), "Long switches should be recognized.");
		assert_eq!(
			cli.parsed().collect::<Vec<_>>(),
			[("help", None), ("output", Some("x")), ("v", None), ("verbose", None)],
		);
	}

	#[test]
	fn t_ignore_case_late() {
		let upper = Cell::new(0_u8);
		let lower = Cell::new(0_u8);
		let mut cli = Processor::default();
		cli.register_switch("A", |_| upper.set(upper.get() + 1));
		cli.register_switch("a", |_| lower.set(lower.get() + 1));

		// Case-sensitive, they're separate switches.
		cli.process(["-A", "-a"]);
		assert_eq!(cli.arg_count(), 2);
		assert_eq!((upper.get(), lower.get()), (1, 1));

		// Once folded, the latest registration wins either way.
		cli.reset();
		cli.set_ignore_case(true);
		cli.process(["-a", "-A"]);
		assert_eq!(cli.parsed().collect::<Vec<_>>(), [("a", None)]);
		assert_eq!((upper.get(), lower.get()), (1, 3));

		// Registering again re-sorts the precedence.
		cli.register_switch("A", |_| upper.set(upper.get() + 1));
		cli.reset();
		cli.process(["-a"]);
		assert_eq!(cli.parsed().collect::<Vec<_>>(), [("A", None)]);
		assert_eq!((upper.get(), lower.get()), (2, 3));
	}

	#[test]
	fn t_reregister() {
		let first = Cell::new(0_u8);
		let second = Cell::new(0_u8);
		let mut cli = Processor::default();
		cli.register("a", true, |_| first.set(first.get() + 1));
		cli.register_switch("a", |_| second.set(second.get() + 1));

		cli.process(["-a", "v"]);
		assert_eq!(cli.get("a"), None, "The replacement doesn't take a value.");
		assert_eq!(first.get(), 0);
		assert_eq!(second.get(), 1);

		// Case-insensitive registrations replace each other too.
		let mut cli = Processor::new(FLAG_IGNORE_CASE);
		cli.register_switch("a", |_| {});
		cli.register("A", true, |_| {});
		cli.process(["-a", "v"]);
		assert_eq!(cli.parsed().collect::<Vec<_>>(), [("A", Some("v"))]);
	}

	#[test]
	fn t_catch_all() {
		let events = RefCell::new(Vec::new());
		let count = Cell::new(0_usize);
		let mut cli = Processor::default()
			.with_keys([("help", false), ("out", true)])
			.with_handler("own", false, |_| {});
		cli.on_switch_match(|m| events.borrow_mut().push(seen(m)));
		cli.on_switch_match(|_| count.set(count.get() + 1));

		cli.process(["/help", "-own", "-out=file", "-what", "bare"]);
		assert_eq!(cli.arg_count(), 3);
		assert_eq!(cli.invalid_args(), ["-what"]);

		drop(cli);
		assert_eq!(count.get(), 3, "Both subscribers should see everything.");
		assert_eq!(events.into_inner(), [
			("help".to_owned(), None, true),
			("out".to_owned(), Some("file".to_owned()), true),
			(INVALID_SWITCH.to_owned(), Some("-what".to_owned()), false),
		]);
	}

	#[test]
	fn t_repeat() {
		let hits = Cell::new(0_u8);
		let mut cli = Processor::default()
			.with_handler("a", true, |_| hits.set(hits.get() + 1))
			.with_handler("b", false, |_| {});

		cli.process(["-a", "1", "-b", "-a=2"]);
		assert_eq!(cli.arg_count(), 2);
		assert_eq!(cli.parsed().collect::<Vec<_>>(), [("a", Some("2")), ("b", None)]);

		// Processing again appends.
		cli.process(["-c"]);
		assert_eq!(cli.arg_count(), 2);
		assert_eq!(cli.invalid_args(), ["-c"]);

		cli.reset();
		assert_eq!(cli.arg_count(), 0);
		assert!(cli.invalid_args().is_empty());

		drop(cli);
		assert_eq!(hits.get(), 2);
	}

	#[test]
	fn t_value_lookahead() {
		// A value is whatever comes next, dashes and all.
		let mut cli = Processor::default()
			.with_handler("a", true, |_| {})
			.with_handler("b", false, |_| {});
		cli.process(["-a", "-b"]);
		assert_eq!(cli.arg_count(), 1);
		assert_eq!(cli.get("a"), Some("-b"));
		assert!(! cli.contains_switch("b"));

		// And only the first = splits.
		cli.reset();
		cli.process(["-a=x=y"]);
		assert_eq!(cli.get("a"), Some("x=y"));

		// A lone prefix is an invalid switch.
		cli.reset();
		cli.process(["-", "/"]);
		assert_eq!(cli.invalid_args(), ["-", "/"]);
	}
}
