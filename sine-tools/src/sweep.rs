//! Measures the approximation against `f64::sin` over an evenly stepped range of inputs.

use rayon::prelude::*;
use std::fmt;
use std::num::ParseFloatError;

/// Upper bound on the number of points a single sweep will evaluate.
pub const MAX_SAMPLES: u64 = 1 << 32;

#[derive(Debug, PartialEq)]
pub enum Error {
	ParseFloat(ParseFloatError),
	NotFinite(f32),
	BadStep(f32),
	EmptyRange { start: f32, end: f32 },
	TooManySamples(u64),
}

impl From<ParseFloatError> for Error {
	fn from(from: ParseFloatError) -> Self {
		Error::ParseFloat(from)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::ParseFloat(e) => write!(f, "invalid number: {}", e),
			Error::NotFinite(value) => write!(f, "sweep bounds must be finite, got {}", value),
			Error::BadStep(step) => write!(f, "step must be a positive finite number, got {}", step),
			Error::EmptyRange { start, end } => write!(f, "empty range: end {} is not above start {}", end, start),
			Error::TooManySamples(count) => write!(f, "{} samples requested, the limit is {}", count, MAX_SAMPLES),
		}
	}
}

/// An evenly stepped range of inputs, `start` inclusive and `end` exclusive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepConfig {
	start: f32,
	end: f32,
	step: f32,
	count: u64,
}

impl SweepConfig {
	pub fn new(start: f32, end: f32, step: f32) -> Result<Self, Error> {
		for &bound in [start, end].iter() {
			if !bound.is_finite() {
				return Err(Error::NotFinite(bound));
			}
		}

		if !(step.is_finite() && step > 0.0) {
			return Err(Error::BadStep(step));
		}

		if end <= start {
			return Err(Error::EmptyRange { start, end });
		}

		let count = ((end as f64 - start as f64) / step as f64).ceil() as u64;
		if count > MAX_SAMPLES {
			return Err(Error::TooManySamples(count));
		}

		let mut config = SweepConfig { start, end, step, count };

		// The quotient above is taken on rounded values, so the last point can land on `end`.
		while config.count > 0 && config.point(config.count - 1) >= end {
			config.count -= 1;
		}

		Ok(config)
	}

	pub fn parse(start: &str, end: &str, step: &str) -> Result<Self, Error> {
		SweepConfig::new(start.parse()?, end.parse()?, step.parse()?)
	}

	pub fn start(&self) -> f32 {
		self.start
	}

	pub fn end(&self) -> f32 {
		self.end
	}

	pub fn step(&self) -> f32 {
		self.step
	}

	/// Number of inputs the sweep evaluates.
	pub fn count(&self) -> u64 {
		self.count
	}

	fn point(&self, index: u64) -> f32 {
		(self.start as f64 + self.step as f64 * index as f64) as f32
	}
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepReport {
	pub samples: u64,
	pub max_error: f64,
	pub worst_input: f32,
	pub mean_error: f64,
	pub non_finite: u64,
}

impl fmt::Display for SweepReport {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "samples:    {}", self.samples)?;
		writeln!(f, "max error:  {:e} (at x = {})", self.max_error, self.worst_input)?;
		writeln!(f, "mean error: {:e}", self.mean_error)?;
		write!(f, "non-finite: {}", self.non_finite)
	}
}

#[derive(Copy, Clone)]
struct Totals {
	samples: u64,
	max_error: f64,
	worst_input: f32,
	error_sum: f64,
	non_finite: u64,
}

impl Totals {
	fn empty() -> Self {
		Totals { samples: 0, max_error: 0.0, worst_input: 0.0, error_sum: 0.0, non_finite: 0 }
	}

	fn add(mut self, x: f32) -> Self {
		let approx = sine_approx::sin(x);

		self.samples += 1;

		if !approx.is_finite() {
			self.non_finite += 1;
			return self;
		}

		let error = (approx as f64 - (x as f64).sin()).abs();

		self.error_sum += error;
		if error > self.max_error {
			self.max_error = error;
			self.worst_input = x;
		}

		self
	}

	fn merge(self, other: Self) -> Self {
		let (max_error, worst_input) = if other.max_error > self.max_error {
			(other.max_error, other.worst_input)
		} else {
			(self.max_error, self.worst_input)
		};

		Totals {
			samples: self.samples + other.samples,
			max_error,
			worst_input,
			error_sum: self.error_sum + other.error_sum,
			non_finite: self.non_finite + other.non_finite,
		}
	}
}

/// Evaluates every point of the sweep across the rayon pool.
pub fn sweep(config: &SweepConfig) -> SweepReport {
	let totals = (0..config.count)
		.into_par_iter()
		.map(|index| config.point(index))
		.fold(Totals::empty, Totals::add)
		.reduce(Totals::empty, Totals::merge);

	let finite = totals.samples - totals.non_finite;

	SweepReport {
		samples: totals.samples,
		max_error: totals.max_error,
		worst_input: totals.worst_input,
		mean_error: if finite == 0 { 0.0 } else { totals.error_sum / finite as f64 },
		non_finite: totals.non_finite,
	}
}
