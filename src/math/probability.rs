/// Bernoulli trial: `true` with probability `p`
///
/// Draws exactly one uniform sample regardless of `p`, so the random stream
/// advances identically whether or not the event fires.
pub fn chance<R: rand::Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// Choose `first` with probability `weight_first`, otherwise `second`
pub fn weighted_pair<T, R: rand::Rng + ?Sized>(
    rng: &mut R,
    first: T,
    second: T,
    weight_first: f64,
) -> T {
    if chance(rng, weight_first) {
        first
    } else {
        second
    }
}

/// Uniform sample from `[min, max)`
pub fn uniform<R: rand::Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random::<f64>().mul_add(max - min, min)
}
