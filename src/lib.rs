#![forbid(unsafe_code)]

//! WHO Body Mass Index calculator.
//!
//! Computes BMI from metric or imperial input, classifies it against the WHO
//! adult cutoffs, and returns the category name, range, and recommendations
//! in English (`en`) or Indonesian (`id`).
//!
//! ```
//! use who_bmi::{calculate_bmi, BmiCategory, BmiInput};
//!
//! let result = calculate_bmi(&BmiInput::new(70.0, 1.75)).unwrap();
//! assert_eq!(result.bmi, 22.86);
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//! assert_eq!(result.category_name, "Normal Weight");
//! ```

pub mod constants;
pub mod error;
pub mod invariants;
pub mod locales;
pub mod logic;
pub mod request;
pub mod simulator;
pub mod types;
pub mod units;

pub use constants::WHO_BMI_THRESHOLDS;
pub use error::BmiError;
pub use locales::{
    get_locale, is_locale_supported, supported_locale_codes, supported_locales, LocaleData,
};
pub use logic::{calculate_bmi, calculate_bmi_imperial, calculate_bmi_simple, classify, validate};
pub use types::{BmiCategory, BmiInput, BmiResult, BmiThresholds, ErrorKey, Locale, Unit};
pub use units::{cm_to_meters, feet_inches_to_meters, lbs_to_kg};
