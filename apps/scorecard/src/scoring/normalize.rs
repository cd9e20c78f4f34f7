/// Expresses `score` as a percentage of `weight`, clamped to `[0, 100]`.
///
/// Total over all inputs: a zero, negative or non-finite weight and a NaN
/// score all yield 0.
pub fn normalize(score: f64, weight: f64) -> f64 {
    if !weight.is_finite() || weight <= 0.0 || score.is_nan() {
        return 0.0;
    }
    (score * 100.0 / weight).clamp(0.0, 100.0)
}
