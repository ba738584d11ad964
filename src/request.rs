// Labelled requests: one variant per public calculator or converter call.
// `evaluate` dispatches a request to the matching library function with no extra logic,
// so the CLI, the sweep, and replay tests all go through the same entry points.

use serde::Serialize;

use crate::error::BmiError;
use crate::logic;
use crate::types::*;
use crate::units;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    Metric {
        weight: f64,
        height: f64,
        locale: Option<Locale>,
    },
    Imperial {
        weight_lbs: f64,
        feet: f64,
        inches: f64,
        locale: Locale,
    },
    Centimeters {
        cm: f64,
        locale: Locale,
    },
    Pounds {
        lbs: f64,
        locale: Locale,
    },
}

impl Request {
    /// Locale the request's messages resolve in.
    pub fn locale(&self) -> Locale {
        match self {
            Request::Metric { locale, .. } => locale.unwrap_or_default(),
            Request::Imperial { locale, .. }
            | Request::Centimeters { locale, .. }
            | Request::Pounds { locale, .. } => *locale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Bmi(BmiResult),
    Meters(f64),
    Kilograms(f64),
}

pub fn evaluate(request: &Request) -> Result<Outcome, BmiError> {
    match *request {
        Request::Metric {
            weight,
            height,
            locale,
        } => logic::calculate_bmi(&BmiInput {
            weight,
            height,
            locale,
        })
        .map(Outcome::Bmi),
        Request::Imperial {
            weight_lbs,
            feet,
            inches,
            locale,
        } => logic::calculate_bmi_imperial(weight_lbs, feet, inches, locale).map(Outcome::Bmi),
        Request::Centimeters { cm, locale } => units::cm_to_meters(cm, locale).map(Outcome::Meters),
        Request::Pounds { lbs, locale } => units::lbs_to_kg(lbs, locale).map(Outcome::Kilograms),
    }
}

/// Evaluate each request in order, pairing it with its outcome.
pub fn replay(requests: &[Request]) -> Vec<(Request, Result<Outcome, BmiError>)> {
    requests.iter().map(|r| (*r, evaluate(r))).collect()
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Request::Metric {
                weight,
                height,
                locale,
            } => match locale {
                Some(locale) => write!(f, "Metric({} kg, {} m, {})", weight, height, locale),
                None => write!(f, "Metric({} kg, {} m)", weight, height),
            },
            Request::Imperial {
                weight_lbs,
                feet,
                inches,
                locale,
            } => write!(
                f,
                "Imperial({} lbs, {}' {}\", {})",
                weight_lbs, feet, inches, locale
            ),
            Request::Centimeters { cm, locale } => write!(f, "Centimeters({}, {})", cm, locale),
            Request::Pounds { lbs, locale } => write!(f, "Pounds({}, {})", lbs, locale),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Bmi(result) => write!(f, "{}", result),
            Outcome::Meters(m) => write!(f, "{} m", m),
            Outcome::Kilograms(kg) => write!(f, "{} kg", kg),
        }
    }
}
