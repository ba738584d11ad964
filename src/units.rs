// Unit converters used to normalize imperial and centimeter inputs to metric.

use tracing::trace;

use crate::constants::*;
use crate::error::BmiError;
use crate::logic::round_to_hundredths;
use crate::types::{ErrorKey, Locale};

pub fn cm_to_meters(cm: f64, locale: Locale) -> Result<f64, BmiError> {
    if !(cm.is_finite() && cm > 0.0) {
        return Err(BmiError::from_key(ErrorKey::CmPositive, locale));
    }
    let meters = cm / CENTIMETERS_PER_METER;
    trace!(cm, meters, "converted centimeters");
    Ok(meters)
}

/// Pounds to kilograms, rounded to two decimals.
pub fn lbs_to_kg(lbs: f64, locale: Locale) -> Result<f64, BmiError> {
    if !(lbs.is_finite() && lbs > 0.0) {
        return Err(BmiError::from_key(ErrorKey::LbsPositive, locale));
    }
    let kg = round_to_hundredths(lbs * KILOGRAMS_PER_POUND);
    trace!(lbs, kg, "converted pounds");
    Ok(kg)
}

/// Feet and inches to meters. No validation; the calculator's height check covers it.
pub fn feet_inches_to_meters(feet: f64, inches: f64) -> f64 {
    (feet * INCHES_PER_FOOT + inches) * METERS_PER_INCH
}
