// Result invariants: properties every successful calculation must satisfy.

use crate::locales::{CategoryText, LocaleData};
use crate::logic::classify;
use crate::types::*;

/// Slack for float error when comparing against the unrounded formula.
const FORMULA_TOLERANCE: f64 = 0.005 + 1e-9;

pub fn bmi_finite_and_positive(_input: &BmiInput, result: &BmiResult) -> bool {
    result.bmi.is_finite() && result.bmi > 0.0
}

/// bmi carries at most two decimals
pub fn bmi_rounded_to_hundredths(_input: &BmiInput, result: &BmiResult) -> bool {
    let scaled = result.bmi * 100.0;
    (scaled - scaled.round()).abs() < 1e-6
}

/// |bmi - w / h^2| stays within half a hundredth
pub fn bmi_matches_formula(input: &BmiInput, result: &BmiResult) -> bool {
    let raw = input.weight / (input.height * input.height);
    (result.bmi - raw).abs() <= FORMULA_TOLERANCE
}

pub fn category_matches_thresholds(_input: &BmiInput, result: &BmiResult) -> bool {
    classify(result.bmi) == result.category
}

/// Name and range come from the requested locale (English when unset).
pub fn text_matches_locale(input: &BmiInput, result: &BmiResult) -> bool {
    let text = input
        .locale
        .unwrap_or_default()
        .data()
        .categories
        .get(result.category);
    text.name == result.category_name
        && text.range == result.range
        && std::ptr::eq(text.recommendations, result.recommendations)
}

pub fn recommendations_non_empty(_input: &BmiInput, result: &BmiResult) -> bool {
    !result.recommendations.is_empty() && result.recommendations.iter().all(|r| !r.is_empty())
}

/// All individual invariants with names for reporting.
pub const ALL_INVARIANTS: &[(&str, fn(&BmiInput, &BmiResult) -> bool)] = &[
    ("bmiFiniteAndPositive", bmi_finite_and_positive),
    ("bmiRoundedToHundredths", bmi_rounded_to_hundredths),
    ("bmiMatchesFormula", bmi_matches_formula),
    ("categoryMatchesThresholds", category_matches_thresholds),
    ("textMatchesLocale", text_matches_locale),
    ("recommendationsNonEmpty", recommendations_non_empty),
];

/// Check all invariants and return the name of the first violated one, if any.
pub fn check_invariants(input: &BmiInput, result: &BmiResult) -> Result<(), &'static str> {
    for (name, check) in ALL_INVARIANTS {
        if !check(input, result) {
            return Err(name);
        }
    }
    Ok(())
}

/// Completeness check for one of the shipped bundles.
pub fn check_locale(locale: Locale) -> Result<(), String> {
    check_locale_complete(locale.code(), locale.data())
}

/// Every category, error template, and unit label in `data` must be a non-empty string.
/// Returns the path of the first missing entry, e.g. `id.errors.cm_positive`.
pub fn check_locale_complete(code: &str, data: &LocaleData) -> Result<(), String> {
    let missing = |path: &str| Err(format!("{}.{}", code, path));

    for category in BmiCategory::ALL {
        let CategoryText {
            name,
            range,
            recommendations,
        } = data.categories.get(category);
        if name.is_empty() {
            return missing(&format!("categories.{}.name", category.key()));
        }
        if range.is_empty() {
            return missing(&format!("categories.{}.range", category.key()));
        }
        if recommendations.is_empty() || recommendations.iter().any(|r| r.is_empty()) {
            return missing(&format!("categories.{}.recommendations", category.key()));
        }
    }
    for key in ErrorKey::ALL {
        if data.errors.message(key).is_empty() {
            return missing(&format!("errors.{}", key.key()));
        }
    }
    for unit in Unit::ALL {
        if data.units.label(unit).is_empty() {
            return missing(&format!("units.{}", unit.key()));
        }
    }
    Ok(())
}
