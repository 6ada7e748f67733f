//! Vital-sign calculations used by the screening front end.

/// Compute Body Mass Index from height in centimeters and weight in
/// kilograms.
///
/// BMI = weight / (height / 100)^2
///
/// # Examples
///
/// ```
/// let bmi = hepatica::vitals::bmi(170.0, 70.0);
/// assert!((bmi - 24.22).abs() < 0.01);
/// ```
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bmi_reference_value() {
        // 70kg at 170cm is the reference case from the screening form
        assert_relative_eq!(bmi(170.0, 70.0), 24.2215, epsilon = 1e-4);
    }

    #[test]
    fn test_bmi_tall_light() {
        let value = bmi(200.0, 60.0);
        assert_relative_eq!(value, 15.0, epsilon = 1e-10);
    }

    #[test]
    fn test_bmi_monotone_in_weight() {
        assert!(bmi(170.0, 80.0) > bmi(170.0, 70.0));
    }
}
