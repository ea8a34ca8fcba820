/// Margin of error shared by every approximate comparison: tuple coordinates,
/// matrix cells and color channels all go through [`approx_eq`].
pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
