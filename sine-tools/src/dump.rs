//! Text renderings of the sample table.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use sine_approx::SIN_TABLE;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
	/// IEEE-754 bit patterns as 8 hex digits, the layout of the conformance fixture.
	Hex,
	/// Shortest decimal literal that round-trips to the same `f32`.
	Decimal,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
	UnknownFormat(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::UnknownFormat(name) => write!(f, "unknown table format {:?} (expected hex or decimal)", name),
		}
	}
}

impl FromStr for Format {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		match s {
			"hex" => Ok(Format::Hex),
			"decimal" => Ok(Format::Decimal),
			other => Err(Error::UnknownFormat(other.to_owned())),
		}
	}
}

/// Writes every table entry, `columns` to a line.
pub fn write_table<W: Write>(out: &mut W, format: Format, columns: usize) -> io::Result<()> {
	let columns = columns.max(1);

	for row in SIN_TABLE.chunks(columns) {
		for (i, value) in row.iter().enumerate() {
			if i != 0 {
				write!(out, " ")?;
			}

			match format {
				Format::Hex => write!(out, "{:08x}", value.to_bits())?,
				Format::Decimal => write!(out, "{:?}", value)?,
			}
		}

		writeln!(out)?;
	}

	Ok(())
}
