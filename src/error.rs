// Errors: validation failures carry text already resolved through the caller's
// locale, so `Display` prints it as-is.

use thiserror::Error;

use crate::locales::supported_locale_codes;
use crate::types::{ErrorKey, Locale};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BmiError {
    /// Weight is not a finite number greater than zero.
    #[error("{0}")]
    InvalidWeight(&'static str),

    /// Height is not a finite number greater than zero.
    #[error("{0}")]
    InvalidHeight(&'static str),

    /// Height above 3 m, usually centimeters passed as meters.
    #[error("{0}")]
    UnrealisticHeight(&'static str),

    /// Weight above 1000 kg.
    #[error("{0}")]
    UnrealisticWeight(&'static str),

    #[error("{0}")]
    InvalidCentimeters(&'static str),

    #[error("{0}")]
    InvalidPounds(&'static str),

    #[error("Unsupported locale: {code}. Supported locales: {supported}")]
    UnsupportedLocale { code: String, supported: String },
}

impl BmiError {
    /// Build a validation error with its message taken from `locale`.
    pub fn from_key(key: ErrorKey, locale: Locale) -> Self {
        let message = locale.data().errors.message(key);
        match key {
            ErrorKey::WeightPositive => BmiError::InvalidWeight(message),
            ErrorKey::HeightPositive => BmiError::InvalidHeight(message),
            ErrorKey::HeightUnrealistic => BmiError::UnrealisticHeight(message),
            ErrorKey::WeightUnrealistic => BmiError::UnrealisticWeight(message),
            ErrorKey::CmPositive => BmiError::InvalidCentimeters(message),
            ErrorKey::LbsPositive => BmiError::InvalidPounds(message),
        }
    }

    pub fn unsupported_locale(code: &str) -> Self {
        BmiError::UnsupportedLocale {
            code: code.to_string(),
            supported: supported_locale_codes().join(", "),
        }
    }

    /// Template key of a validation error; `None` for `UnsupportedLocale`.
    pub fn key(&self) -> Option<ErrorKey> {
        match self {
            BmiError::InvalidWeight(_) => Some(ErrorKey::WeightPositive),
            BmiError::InvalidHeight(_) => Some(ErrorKey::HeightPositive),
            BmiError::UnrealisticHeight(_) => Some(ErrorKey::HeightUnrealistic),
            BmiError::UnrealisticWeight(_) => Some(ErrorKey::WeightUnrealistic),
            BmiError::InvalidCentimeters(_) => Some(ErrorKey::CmPositive),
            BmiError::InvalidPounds(_) => Some(ErrorKey::LbsPositive),
            BmiError::UnsupportedLocale { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_round_trips_key() {
        for key in ErrorKey::ALL {
            let err = BmiError::from_key(key, Locale::En);
            assert_eq!(err.key(), Some(key));
        }
    }

    #[test]
    fn test_message_follows_locale() {
        let en = BmiError::from_key(ErrorKey::WeightPositive, Locale::En);
        let id = BmiError::from_key(ErrorKey::WeightPositive, Locale::Id);
        assert_eq!(en.to_string(), "Weight must be a positive number in kilograms");
        assert_eq!(
            id.to_string(),
            "Berat badan harus berupa angka positif dalam kilogram"
        );
    }

    #[test]
    fn test_unsupported_locale_message() {
        let err = BmiError::unsupported_locale("fr");
        assert_eq!(err.to_string(), "Unsupported locale: fr. Supported locales: en, id");
        assert_eq!(err.key(), None);
    }
}
