//! The precomputed sine samples.
//!
//! `SIN_TABLE[n + 1]` holds `sin(2π·n/256)` rounded to `f32`, for `n` from `-1` through `257`.
//! The entries for `n = -1`, `256` and `257` repeat the start and end of the period, so any
//! cell in `[0, 256)` can read one sample before it and two after it without wrapping.

/// Number of interpolation cells in one period.
pub const TABLE_SIZE: usize = 256;

/// Total number of stored samples: one period plus three guard samples.
pub const TABLE_LEN: usize = TABLE_SIZE + 3;

include!(concat!(env!("OUT_DIR"), "/sin_table.rs"));

/// Returns `sin(2π·n/256)` as stored in the table, or `None` if `n` is outside `-1 ..= 257`.
pub fn sample(n: i32) -> Option<f32> {
	if n < -1 {
		return None;
	}

	SIN_TABLE.get((n + 1) as usize).copied()
}

/// Reads the four samples surrounding cell `index`: the one before the cell, its two
/// endpoints, and the one after.
///
/// `index` must be below `TABLE_SIZE`; the caller clamps it.
#[inline(always)]
pub(crate) fn window(index: usize) -> [f32; 4] {
	let samples = &SIN_TABLE[index..index + 4];

	[samples[0], samples[1], samples[2], samples[3]]
}
