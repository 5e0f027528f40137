/// Rounds to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Nearest integer, for calories and gram gaps shown to users.
pub fn whole(value: f64) -> i64 {
    value.round() as i64
}
