// Locale Store: static category text, error templates, and unit labels.
// Two bundles ship, `en` and `id`. Both are plain `static` data.

use serde::Serialize;

use crate::error::BmiError;
use crate::types::{BmiCategory, ErrorKey, Locale, Unit};

pub mod en;
pub mod id;

/// Supported locales in their fixed listing order.
pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Id];

/// Display text for one BMI category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryText {
    pub name: &'static str,
    pub range: &'static str,
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTable {
    pub underweight: CategoryText,
    pub normal_weight: CategoryText,
    pub overweight: CategoryText,
    pub obese_class_i: CategoryText,
    pub obese_class_ii: CategoryText,
    pub obese_class_iii: CategoryText,
}

impl CategoryTable {
    pub fn get(&self, category: BmiCategory) -> &CategoryText {
        match category {
            BmiCategory::Underweight => &self.underweight,
            BmiCategory::NormalWeight => &self.normal_weight,
            BmiCategory::Overweight => &self.overweight,
            BmiCategory::ObeseClassI => &self.obese_class_i,
            BmiCategory::ObeseClassIi => &self.obese_class_ii,
            BmiCategory::ObeseClassIii => &self.obese_class_iii,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorMessages {
    pub weight_positive: &'static str,
    pub height_positive: &'static str,
    pub height_unrealistic: &'static str,
    pub weight_unrealistic: &'static str,
    pub cm_positive: &'static str,
    pub lbs_positive: &'static str,
}

impl ErrorMessages {
    pub fn message(&self, key: ErrorKey) -> &'static str {
        match key {
            ErrorKey::WeightPositive => self.weight_positive,
            ErrorKey::HeightPositive => self.height_positive,
            ErrorKey::HeightUnrealistic => self.height_unrealistic,
            ErrorKey::WeightUnrealistic => self.weight_unrealistic,
            ErrorKey::CmPositive => self.cm_positive,
            ErrorKey::LbsPositive => self.lbs_positive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitLabels {
    pub kg: &'static str,
    pub m: &'static str,
    pub cm: &'static str,
    pub lbs: &'static str,
    pub feet: &'static str,
    pub inches: &'static str,
}

impl UnitLabels {
    pub fn label(&self, unit: Unit) -> &'static str {
        match unit {
            Unit::Kg => self.kg,
            Unit::M => self.m,
            Unit::Cm => self.cm,
            Unit::Lbs => self.lbs,
            Unit::Feet => self.feet,
            Unit::Inches => self.inches,
        }
    }
}

/// Complete text bundle for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleData {
    pub categories: CategoryTable,
    pub errors: ErrorMessages,
    pub units: UnitLabels,
}

/// Look up a bundle by its exact code (`en` or `id`).
pub fn get_locale(code: &str) -> Result<&'static LocaleData, BmiError> {
    let locale: Locale = code.parse()?;
    Ok(locale.data())
}

pub fn supported_locales() -> &'static [Locale] {
    &SUPPORTED_LOCALES
}

pub fn supported_locale_codes() -> Vec<&'static str> {
    SUPPORTED_LOCALES.iter().map(|l| l.code()).collect()
}

/// Membership test; never fails.
pub fn is_locale_supported(code: &str) -> bool {
    SUPPORTED_LOCALES.iter().any(|l| l.code() == code)
}
