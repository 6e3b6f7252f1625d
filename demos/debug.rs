/*!
# Switcheroo: Debug

This example processes whatever arguments are fed to it and displays the
results. Set `RUST_LOG=switcheroo=trace` to watch it work.

Recognized: `-h`/`--help`, `-v`/`--verbose`, `-o`/`--output <VAL>`.
*/

use switcheroo::{
	FLAG_IGNORE_CASE,
	Processor,
};
use tracing_subscriber::EnvFilter;



fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_target(true)
		.init();

	// Longer prefixes have to come first.
	let args = Processor::new(FLAG_IGNORE_CASE)
		.without_prefixes()
		.with_prefixes(["--", "-", "/"]);
	let mut args = match args {
		Ok(a) => a,
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(1);
		},
	};

	for key in ["h", "help", "v", "verbose"] { args.allow(key, false); }
	for key in ["o", "output"] { args.allow(key, true); }

	args.on_switch_match(|m| println!(
		"\x1b[2m-----\x1b[0m\n{:<8} {:?} (valid: {})",
		m.switch(),
		m.value(),
		m.is_valid(),
	));
	args.process_env();

	println!("\x1b[2m-----\x1b[0m");
	println!("{args:#?}");
}
