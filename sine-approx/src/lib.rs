//! Fast sine approximation for single-precision input.
//!
//! The period is sampled at 256 points ahead of time (see [`table`]). A call reduces the
//! angle into one period, finds the cell it falls in, and blends the four nearest samples
//! with a cubic. The error stays around 1e-6 for inputs within a few periods of zero and
//! grows slowly with magnitude as the period reduction loses precision.
//!
//! Calls are pure, allocation free and safe to make from any number of threads at once.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod test;

mod interpolate;
pub mod table;

pub use crate::table::{sample, SIN_TABLE, TABLE_LEN, TABLE_SIZE};

/// 1/2π, mapping one period onto the unit interval.
const INV_TWO_PI: f32 = 0.159_154_943_092;

/// Magnitude at which every `f32` is a whole number of periods.
const INTEGRAL_LIMIT: f32 = 8_388_608.0;

/// Approximates `sin(x)` for `x` in radians.
///
/// Finite inputs always produce finite results, within rounding of `[-1, 1]`. NaN and
/// infinite inputs produce NaN.
pub fn sin(x: f32) -> f32 {
	let (index, fract) = locate(reduce_period(x));

	interpolate::cubic(table::window(index), fract)
}

/// Maps `x` onto its position within one period, as a fraction in `[0, 1]`.
///
/// The result only reaches 1.0 when rounding pushes a value just below 1.0 up.
#[inline(always)]
fn reduce_period(x: f32) -> f32 {
	let u = x * INV_TWO_PI;

	// Past this point `u` has no fractional part. Further out the cast below saturates.
	if u.is_finite() && (u >= INTEGRAL_LIMIT || u <= -INTEGRAL_LIMIT) {
		return 0.0;
	}

	// `as` truncates toward zero; negative inputs need the floor instead.
	let mut n = u as i32 as f32;
	if x < 0.0 {
		n -= 1.0;
	}

	u - n
}

/// Finds the table cell for a reduced phase and the offset within that cell.
///
/// The cell is clamped to the last full window. A phase of exactly 1.0 therefore lands in
/// cell 255 with an offset of 1.0, which evaluates to the same sample cell 256 would start at.
#[inline(always)]
fn locate(phase: f32) -> (usize, f32) {
	let position = TABLE_SIZE as f32 * phase;

	let mut index = position as i32;
	if index < 0 {
		index = 0;
	} else if index > (TABLE_SIZE - 1) as i32 {
		index = (TABLE_SIZE - 1) as i32;
	}

	(index as usize, position - index as f32)
}
