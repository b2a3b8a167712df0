extern crate rayon;
extern crate sine_approx;

pub mod dump;
pub mod sweep;
