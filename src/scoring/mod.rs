pub mod company;
pub mod market;
pub mod outlook;
pub mod sector;

/// Rescale a 0-10 producer score onto the 0-100 axis the fusion engine
/// expects.
pub fn to_hundred(score: u8) -> f64 {
    f64::from(score) * 10.0
}
