//Estimates are reported with a fixed number of decimal places, everything
//beyond that suggests a precision the emission factors don't have
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
