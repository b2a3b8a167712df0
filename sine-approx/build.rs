use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of interpolation cells covering one period.
const TABLE_SIZE: i32 = 256;

fn main() {
	let out_dir = env::var("OUT_DIR").unwrap();
	let dest_path = Path::new(&out_dir).join("sin_table.rs");
	let mut f = File::create(&dest_path).unwrap();

	println!("cargo:rerun-if-changed=build.rs");

	write!(f, "pub static SIN_TABLE: [f32; TABLE_LEN] = [").unwrap();

	// One sample before the period and two after it, so a four-sample window never wraps.
	for (i, n) in (-1..TABLE_SIZE + 2).enumerate() {
		if i % 8 == 0 {
			writeln!(f).unwrap();
			write!(f, "\t").unwrap();
		}

		write!(f, "{:?}, ", sample(n)).unwrap();
	}

	writeln!(f, "\n];").unwrap();
}

fn sample(n: i32) -> f32 {
	((n as f64) * std::f64::consts::PI * 2.0 / (TABLE_SIZE as f64)).sin() as f32
}
