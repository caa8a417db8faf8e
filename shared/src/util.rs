/// Generate a zero-padded random decimal string of `digits` digits.
///
/// Used as the collision-avoidance suffix of forced SKU generation.
/// `digits` is clamped to 1..=18 so the range fits in a `u64`.
pub fn random_digits(digits: u32) -> String {
    use rand::Rng;
    let digits = digits.clamp(1, 18);
    let upper = 10u64.pow(digits);
    let n: u64 = rand::thread_rng().gen_range(0..upper);
    format!("{:0width$}", n, width = digits as usize)
}
