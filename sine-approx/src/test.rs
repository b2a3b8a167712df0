use std::fs;

use crate::{locate, reduce_period, sample, SIN_TABLE, TABLE_LEN, TABLE_SIZE};

#[test]
fn test_table_matches_reference() {
	let reference = read_u32s("SinTable");

	assert_eq!(reference.len(), TABLE_LEN);

	for (index, (&r, &j)) in SIN_TABLE.iter().zip(reference.iter()).enumerate() {
		let expected = f32::from_bits(j);

		// The two entries at multiples of π are rounding noise around zero in both tables.
		if r.abs() < 1e-15 && expected.abs() < 1e-15 {
			continue;
		}

		let ulps = (r.to_bits() as i64 - j as i64).abs();

		if ulps > 1 {
			panic!("table mismatch @ index {}: {} (generated) != {} (reference)", index, r, expected);
		}
	}
}

#[test]
fn test_table_guards() {
	assert_eq!(SIN_TABLE[0], -SIN_TABLE[2]);
	assert_eq!(SIN_TABLE[1], 0.0);
	assert_eq!(SIN_TABLE[TABLE_LEN - 1], SIN_TABLE[2]);
	assert_eq!(SIN_TABLE[TABLE_SIZE / 4 + 1], 1.0);
	assert_eq!(SIN_TABLE[3 * TABLE_SIZE / 4 + 1], -1.0);
	assert!(SIN_TABLE[TABLE_SIZE + 1].abs() < 1e-15);
}

#[test]
fn test_sample() {
	assert_eq!(sample(-2), None);
	assert_eq!(sample(-1), Some(SIN_TABLE[0]));
	assert_eq!(sample(64), Some(1.0));
	assert_eq!(sample(257), Some(SIN_TABLE[TABLE_LEN - 1]));
	assert_eq!(sample(258), None);
}

#[test]
fn test_reduce_period() {
	assert_eq!(reduce_period(0.0), 0.0);

	let quarter = reduce_period(std::f32::consts::FRAC_PI_2);
	assert!((quarter - 0.25).abs() < 1e-6, "π/2 reduced to {}", quarter);

	let negative_quarter = reduce_period(-std::f32::consts::FRAC_PI_2);
	assert!((negative_quarter - 0.75).abs() < 1e-6, "-π/2 reduced to {}", negative_quarter);

	let wrapped = reduce_period(5.0 * std::f32::consts::PI);
	assert!((wrapped - 0.5).abs() < 1e-5, "5π reduced to {}", wrapped);

	// Tiny negative angles round up to a full period.
	assert_eq!(reduce_period(-1e-30), 1.0);

	assert_eq!(reduce_period(1e9), 0.0);
	assert_eq!(reduce_period(-1e9), 0.0);
	assert_eq!(reduce_period(f32::MAX), 0.0);
	assert!(reduce_period(f32::NAN).is_nan());
}

#[test]
fn test_reduce_period_range() {
	for step in -20_000..20_000 {
		let x = step as f32 * 0.0071;
		let phase = reduce_period(x);

		assert!(phase >= 0.0 && phase <= 1.0, "{} reduced to {}", x, phase);
	}
}

#[test]
fn test_locate() {
	assert_eq!(locate(0.0), (0, 0.0));
	assert_eq!(locate(0.5), (128, 0.0));
	assert_eq!(locate(0.25 + 0.5 / 256.0), (64, 0.5));

	// A full period stays inside the last window and selects its far endpoint.
	assert_eq!(locate(1.0), (TABLE_SIZE - 1, 1.0));
}

pub fn read_u32s(name: &str) -> Vec<u32> {
	let path = format!("{}/test_data/{}.txt", env!("CARGO_MANIFEST_DIR"), name);
	let text = fs::read_to_string(&path).unwrap();

	text.split_whitespace()
		.map(|word| u32::from_str_radix(word, 16).unwrap_or_else(|_| panic!("Bad hex word {} in {}", word, path)))
		.collect()
}
