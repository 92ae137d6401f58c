//! A tool to generate and clamp noise.

use rand_distr::{Normal, Distribution};


/// Samples a normal distribution at the given mean and standard deviation and clamps
/// the output between the given minimum and maximum, a standard deviation of `0.`
/// (or below) always returns the mean
pub fn limited_distr(mean: f32, std: f32, minimum: f32, maximum: f32) -> f32 {
    if std <= 0.0 {
        return mean;
    }

    let normal = Normal::new(mean, std).unwrap();
    let output: f32 = normal.sample(&mut rand::thread_rng());

    output.clamp(minimum, maximum)
}
