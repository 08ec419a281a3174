/// `10^resolution` as a float.
pub(crate) fn scale(resolution: u32) -> f64 {
    10f64.powi(resolution as i32)
}

/// Distance between two neighboring lattice keys.
pub(crate) fn lattice_spacing(resolution: u32) -> f64 {
    1.0 / scale(resolution)
}

/// Rounds `x` to `resolution` decimal places.
///
/// The exact decimal value of `x` is rounded, with halves going to the even digit, so `0.25`
/// becomes `0.2` while `0.35` (stored as `0.34999...`) becomes `0.3`. The result is then snapped
/// to `i / 10^resolution`, the same expression that builds the lattice, so a rounded value lands
/// on the exact `f64` of the lattice key it rounds to.
///
/// Returns a non-finite value when `x` is non-finite or too large to scale.
pub(crate) fn round_to(x: f64, resolution: u32) -> f64 {
    let scale = scale(resolution);
    format!("{:.*}", resolution as usize, x)
        .parse::<f64>()
        .map_or(f64::NAN, |rounded| (rounded * scale).round() / scale)
}
