// Constants: WHO classification cutoffs, unit factors, and validation bounds.

use crate::types::BmiThresholds;

/// WHO adult BMI cutoffs. Each value is the exclusive upper bound of its category.
pub const WHO_BMI_THRESHOLDS: BmiThresholds = BmiThresholds {
    underweight: 18.5,
    normal_weight: 25.0,
    overweight: 30.0,
    obese_class_i: 35.0,
    obese_class_ii: 40.0,
    obese_class_iii: f64::INFINITY,
};

// Unit conversion factors
pub const CENTIMETERS_PER_METER: f64 = 100.0;
pub const KILOGRAMS_PER_POUND: f64 = 0.453592;
pub const INCHES_PER_FOOT: f64 = 12.0;
pub const METERS_PER_INCH: f64 = 0.0254;

// Sanity bounds (metric)
pub const MAX_HEIGHT_METERS: f64 = 3.0; // anything taller was almost certainly given in cm
pub const MAX_WEIGHT_KILOGRAMS: f64 = 1000.0;

// Sample sets for the randomized sweep. Invalid entries are deliberate.
pub const SAMPLE_WEIGHTS_KG: &[f64] = &[
    -70.0, 0.0, 2.5, 45.0, 50.0, 56.35, 56.7, 70.0, 80.0, 90.0, 105.0, 120.0, 250.0, 999.0,
    1000.0, 1500.0, f64::NAN,
];
pub const SAMPLE_HEIGHTS_M: &[f64] = &[
    -1.75, 0.0, 0.45, 1.2, 1.5, 1.7, 1.75, 1.8, 2.1, 3.0, 3.01, 175.0, f64::INFINITY,
];
pub const SAMPLE_WEIGHTS_LBS: &[f64] = &[
    -150.0, 0.0, 5.0, 110.0, 150.0, 154.0, 154.32, 220.46, 300.0,
];
pub const SAMPLE_HEIGHTS_CM: &[f64] = &[-175.0, 0.0, 50.0, 160.0, 175.0, 180.0, 250.0, f64::NAN];
pub const SAMPLE_FEET: &[f64] = &[0.0, 4.0, 5.0, 6.0, 7.0, 10.0];
pub const SAMPLE_INCHES: &[f64] = &[0.0, 3.0, 6.0, 9.0, 11.0];
