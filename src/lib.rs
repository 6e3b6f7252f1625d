/*!
# Switcheroo

This crate provides [`Processor`], a small, flat command-line switch parser.

Switches are recognized by user-defined prefix patterns (regular expressions
like `-`, `-{1,2}`, or `/`), then looked up in a registry of handlers, each of
which may or may not expect a value. Matching handlers are called back
immediately, in argument order; anything that looks like a switch but isn't
registered is set aside as an invalid argument for you to deal with later.

That's it. There are no types, no help screens, and no subcommands. If you
need those, use [clap](https://crates.io/crates/clap) instead. Haha.



## Example

```
use switcheroo::{FLAG_IGNORE_CASE, Processor};

#[derive(Debug, Default)]
/// # Configuration.
struct Settings {
    output: Option<String>,
    verbose: bool,
}

let mut settings = Settings::default();
let mut args = Processor::new(FLAG_IGNORE_CASE)
    .without_prefixes()        // Drop the default "-" so "--" can go first.
    .with_prefixes(["--", "-", "/"])
    .unwrap(); // An error will only occur if a pattern is not a valid regex.

args.register("output", true, |m| {
    settings.output = m.value().map(String::from);
});
args.register_switch("verbose", |_| { settings.verbose = true; });

// Anything else can be handled here.
args.on_switch_match(|m| if ! m.is_valid() {
    eprintln!("Unknown argument: {}", m.value().unwrap_or_default());
});

args.process(["--Output=out.txt", "-VERBOSE", "/what"]);
assert_eq!(args.arg_count(), 2);
assert_eq!(args.invalid_args(), ["/what"]);

drop(args);
assert_eq!(settings.output.as_deref(), Some("out.txt"));
assert!(settings.verbose);
```



## Logging

Processing is instrumented with [`tracing`](https://crates.io/crates/tracing)
events at the `trace` and `debug` levels. Nothing is emitted unless your
program installs a subscriber.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates,
	unused_import_braces,
)]



mod processor;
pub use processor::{
	FLAG_IGNORE_CASE,
	FLAG_REJECT_INLINE,
	FLAG_STRICT,
	INVALID_SWITCH,
	Processor,
	SwitchError,
	SwitchMatch,
};
