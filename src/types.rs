// Types: categories, locales, calculator input and result.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BmiError;
use crate::locales::{self, LocaleData};

/// WHO BMI category, ordered by ascending BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    ObeseClassI,
    ObeseClassIi,
    ObeseClassIii,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 6] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::ObeseClassI,
        BmiCategory::ObeseClassIi,
        BmiCategory::ObeseClassIii,
    ];

    /// Stable snake_case tag, e.g. `obese_class_ii`.
    pub fn key(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::NormalWeight => "normal_weight",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObeseClassI => "obese_class_i",
            BmiCategory::ObeseClassIi => "obese_class_ii",
            BmiCategory::ObeseClassIii => "obese_class_iii",
        }
    }
}

/// Display language. Only exact codes are accepted; there is no fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Static text bundle for this locale.
    pub fn data(self) -> &'static LocaleData {
        match self {
            Locale::En => &locales::en::EN,
            Locale::Id => &locales::id::ID,
        }
    }
}

impl FromStr for Locale {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            other => Err(BmiError::unsupported_locale(other)),
        }
    }
}

/// Keys of the six localized error templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    WeightPositive,
    HeightPositive,
    HeightUnrealistic,
    WeightUnrealistic,
    CmPositive,
    LbsPositive,
}

impl ErrorKey {
    pub const ALL: [ErrorKey; 6] = [
        ErrorKey::WeightPositive,
        ErrorKey::HeightPositive,
        ErrorKey::HeightUnrealistic,
        ErrorKey::WeightUnrealistic,
        ErrorKey::CmPositive,
        ErrorKey::LbsPositive,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ErrorKey::WeightPositive => "weight_positive",
            ErrorKey::HeightPositive => "height_positive",
            ErrorKey::HeightUnrealistic => "height_unrealistic",
            ErrorKey::WeightUnrealistic => "weight_unrealistic",
            ErrorKey::CmPositive => "cm_positive",
            ErrorKey::LbsPositive => "lbs_positive",
        }
    }
}

/// Keys of the six localized unit labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Kg,
    M,
    Cm,
    Lbs,
    Feet,
    Inches,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Kg, Unit::M, Unit::Cm, Unit::Lbs, Unit::Feet, Unit::Inches];

    pub fn key(self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::M => "m",
            Unit::Cm => "cm",
            Unit::Lbs => "lbs",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
        }
    }
}

/// WHO cutoffs, one per category. The last is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiThresholds {
    pub underweight: f64,
    pub normal_weight: f64,
    pub overweight: f64,
    pub obese_class_i: f64,
    pub obese_class_ii: f64,
    pub obese_class_iii: f64,
}

impl BmiThresholds {
    /// Categories paired with their exclusive upper bound, ascending.
    pub fn upper_bounds(&self) -> [(BmiCategory, f64); 6] {
        [
            (BmiCategory::Underweight, self.underweight),
            (BmiCategory::NormalWeight, self.normal_weight),
            (BmiCategory::Overweight, self.overweight),
            (BmiCategory::ObeseClassI, self.obese_class_i),
            (BmiCategory::ObeseClassIi, self.obese_class_ii),
            (BmiCategory::ObeseClassIii, self.obese_class_iii),
        ]
    }
}

/// Metric calculator input. `locale` falls back to English when absent.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BmiInput {
    /// Kilograms
    pub weight: f64,
    /// Meters
    pub height: f64,
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl BmiInput {
    pub fn new(weight: f64, height: f64) -> Self {
        BmiInput {
            weight,
            height,
            locale: None,
        }
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        BmiInput {
            locale: Some(locale),
            ..self
        }
    }
}

/// Classified BMI with text borrowed from the locale bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_name: &'static str,
    pub range: &'static str,
    pub recommendations: &'static [&'static str],
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::fmt::Display for BmiResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  bmi:       {:.2}", self.bmi)?;
        writeln!(f, "  category:  {} ({})", self.category_name, self.category)?;
        write!(f, "  range:     {}", self.range)?;
        for (i, rec) in self.recommendations.iter().enumerate() {
            write!(f, "\n  {:>2}. {}", i + 1, rec)?;
        }
        Ok(())
    }
}
