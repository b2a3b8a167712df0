extern crate clap;
extern crate sine_tools;

use clap::{App, Arg};
use std::io;
use std::process;
use std::str::FromStr;

use sine_tools::dump::{write_table, Format};

const FORMATS: &[&str] = &["hex", "decimal"];

fn validate_columns(columns: String) -> Result<(), String> {
	match columns.parse::<usize>() {
		Ok(0) => Err("zero values are not a valid argument".to_owned()),
		Ok(_) => Ok(()),
		Err(parse) => Err(parse.to_string()),
	}
}

fn main() {
	let matches = App::new("Sine Table Dumper")
		.version("0.1.0")
		.about("Prints the 259 precomputed samples used by the sine approximation")
		.arg(Arg::with_name("format")
			.short("f")
			.long("format")
			.value_name("FORMAT")
			.help("Output format: hex bit patterns (the fixture layout) or decimal literals")
			.possible_values(FORMATS)
			.default_value("hex")
		)
		.arg(Arg::with_name("columns")
			.short("c")
			.long("columns")
			.value_name("COUNT")
			.help("Sets the number of values printed per line")
			.default_value("8")
			.validator(validate_columns)
		)
		.get_matches();

	let format = matches.value_of("format").map(|value| Format::from_str(value).unwrap()).unwrap_or(Format::Hex);
	let columns = matches.value_of("columns").map(|value| usize::from_str(value).unwrap()).unwrap_or(8);

	let stdout = io::stdout();
	let mut out = stdout.lock();

	if let Err(e) = write_table(&mut out, format, columns) {
		eprintln!("error: failed to write the table: {}", e);
		process::exit(1);
	}
}
