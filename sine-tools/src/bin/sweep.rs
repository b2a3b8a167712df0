extern crate clap;
extern crate rayon;
extern crate sine_tools;

use clap::{App, Arg};
use std::process;

use sine_tools::sweep::{sweep, SweepConfig};

#[derive(Default)]
struct SweepOptions {
	start: String,
	end: String,
	step: String,
	threads: Option<usize>,
	limit: Option<f64>,
}

fn validate_float(number: String) -> Result<(), String> {
	number.parse::<f64>().map(|_| ()).map_err(|parse| parse.to_string())
}

fn validate_limit(number: String) -> Result<(), String> {
	match number.parse::<f64>() {
		Ok(limit) if limit.is_finite() && limit >= 0.0 => Ok(()),
		Ok(limit) => Err(format!("the limit must be a finite, non-negative error, got {}", limit)),
		Err(parse) => Err(parse.to_string()),
	}
}

fn validate_threads(number: String) -> Result<(), String> {
	match number.parse::<usize>() {
		Ok(0) => Err("zero values are not a valid argument".to_owned()),
		Ok(_) => Ok(()),
		Err(parse) => Err(parse.to_string()),
	}
}

fn main() {
	let matches = App::new("Sine Approximation Sweep")
		.version("0.1.0")
		.about("Compares the table-driven sine against f64::sin over a range of inputs")
		.arg(Arg::with_name("start")
			.short("s")
			.long("start")
			.value_name("RADIANS")
			.help("First input of the sweep")
			.default_value("-12.566371")
			.allow_hyphen_values(true)
			.validator(validate_float)
		)
		.arg(Arg::with_name("end")
			.short("e")
			.long("end")
			.value_name("RADIANS")
			.help("End of the sweep (exclusive)")
			.default_value("12.566371")
			.allow_hyphen_values(true)
			.validator(validate_float)
		)
		.arg(Arg::with_name("step")
			.short("d")
			.long("step")
			.value_name("RADIANS")
			.help("Distance between consecutive inputs")
			.default_value("0.001")
			.validator(validate_float)
		)
		.arg(Arg::with_name("threads")
			.short("j")
			.long("threads")
			.value_name("COUNT")
			.long_help("Configures the number of threads to use \n\
			               Default: CPU count")
			.takes_value(true)
			.validator(validate_threads)
		)
		.arg(Arg::with_name("limit")
			.short("l")
			.long("limit")
			.value_name("ERROR")
			.help("Exits with a failure status if the maximum absolute error exceeds this value")
			.takes_value(true)
			.validator(validate_limit)
		)
		.get_matches();

	let mut options = SweepOptions::default();

	options.start = matches.value_of("start").unwrap_or_default().to_owned();
	options.end = matches.value_of("end").unwrap_or_default().to_owned();
	options.step = matches.value_of("step").unwrap_or_default().to_owned();
	options.threads = matches.value_of("threads").and_then(|value| value.parse().ok());
	options.limit = matches.value_of("limit").and_then(|value| value.parse().ok());

	process::exit(execute(options));
}

fn execute(options: SweepOptions) -> i32 {
	let config = match SweepConfig::parse(&options.start, &options.end, &options.step) {
		Ok(config) => config,
		Err(e) => {
			eprintln!("error: {}", e);
			return 2;
		}
	};

	if let Some(threads) = options.threads {
		if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
			eprintln!("error: could not configure {} thread(s): {}", threads, e);
			return 2;
		}
	}

	println!("[=======] Sweeping [{}, {}) in steps of {} ({} samples) on {} thread(s)",
		config.start(),
		config.end(),
		config.step(),
		config.count(),
		rayon::current_num_threads()
	);

	let report = sweep(&config);

	println!("{}", report);

	match options.limit {
		Some(limit) if report.max_error > limit || report.non_finite != 0 => {
			println!("[=======] FAIL: outside the limit of {:e}", limit);
			1
		}
		Some(limit) => {
			println!("[=======] OK: within the limit of {:e}", limit);
			0
		}
		None => 0,
	}
}
