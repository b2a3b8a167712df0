/// Blending weights for four equally spaced samples `a, b, c, d`, evaluated at `fract` cells
/// past `b`. These are the Lagrange basis polynomials through the four samples, so a cubic
/// passing through them is reproduced exactly.
///
/// At `fract = 0` the weights select `b`, at `fract = 1` they select `c`.
#[inline(always)]
pub fn cubic_weights(fract: f32) -> [f32; 4] {
	let fract_sq = fract * fract;
	let fract_cu = fract_sq * fract;

	let wa = -(1.0 / 6.0) * fract_cu + 0.5 * fract_sq - (1.0 / 3.0) * fract;
	let wb = 0.5 * fract_cu - fract_sq - 0.5 * fract + 1.0;
	let wc = -0.5 * fract_cu + 0.5 * fract_sq + fract;
	let wd = (1.0 / 6.0) * fract_cu - (1.0 / 6.0) * fract;

	[wa, wb, wc, wd]
}

#[inline(always)]
pub fn cubic(samples: [f32; 4], fract: f32) -> f32 {
	let [wa, wb, wc, wd] = cubic_weights(fract);
	let [a, b, c, d] = samples;

	(a * wa + b * wb) + (c * wc + d * wd)
}
