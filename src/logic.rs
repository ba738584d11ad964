// Pure functions: validation, classification, and the BMI calculator.
// Nothing here holds state; every call reads only its arguments and the static tables.

use tracing::{debug, trace};

use crate::constants::*;
use crate::error::BmiError;
use crate::types::*;
use crate::units;

/// Check metric inputs in a fixed order, stopping at the first failure.
pub fn validate(weight: f64, height: f64, locale: Locale) -> Result<(), BmiError> {
    let rejected = if !(weight.is_finite() && weight > 0.0) {
        Some(ErrorKey::WeightPositive)
    } else if !(height.is_finite() && height > 0.0) {
        Some(ErrorKey::HeightPositive)
    } else if height > MAX_HEIGHT_METERS {
        Some(ErrorKey::HeightUnrealistic)
    } else if weight > MAX_WEIGHT_KILOGRAMS {
        Some(ErrorKey::WeightUnrealistic)
    } else {
        None
    };

    match rejected {
        Some(key) => {
            debug!(weight, height, %locale, reason = key.key(), "rejected BMI input");
            Err(BmiError::from_key(key, locale))
        }
        None => Ok(()),
    }
}

/// First category whose upper bound is strictly greater than `bmi`.
/// A value sitting exactly on a cutoff belongs to the higher category.
pub fn classify(bmi: f64) -> BmiCategory {
    let category = WHO_BMI_THRESHOLDS
        .upper_bounds()
        .iter()
        .find(|(_, upper)| bmi < *upper)
        .map(|(category, _)| *category)
        // NaN and +inf compare false against every bound
        .unwrap_or(BmiCategory::ObeseClassIii);
    trace!(bmi, %category, "classified");
    category
}

/// Round to two decimals, halves away from zero (half up for the positive values used here).
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn calculate_bmi(input: &BmiInput) -> Result<BmiResult, BmiError> {
    let locale = input.locale.unwrap_or_default();
    validate(input.weight, input.height, locale)?;

    let bmi = round_to_hundredths(input.weight / (input.height * input.height));
    let category = classify(bmi);
    let text = locale.data().categories.get(category);

    debug!(
        weight = input.weight,
        height = input.height,
        %locale,
        bmi,
        %category,
        "calculated BMI"
    );

    Ok(BmiResult {
        bmi,
        category,
        category_name: text.name,
        range: text.range,
        recommendations: text.recommendations,
    })
}

pub fn calculate_bmi_simple(
    weight: f64,
    height: f64,
    locale: Locale,
) -> Result<BmiResult, BmiError> {
    calculate_bmi(&BmiInput::new(weight, height).with_locale(locale))
}

/// Pounds plus feet/inches. Pass `0.0` inches for whole feet.
pub fn calculate_bmi_imperial(
    weight_lbs: f64,
    height_feet: f64,
    height_inches: f64,
    locale: Locale,
) -> Result<BmiResult, BmiError> {
    let weight = units::lbs_to_kg(weight_lbs, locale)?;
    let height = units::feet_inches_to_meters(height_feet, height_inches);
    calculate_bmi(&BmiInput::new(weight, height).with_locale(locale))
}
