// Simulator: seeded random sweep over calculator requests.
// Each sample picks a request kind and draws its parameters from the sample sets in
// `constants`, evaluates it, and checks the outcome against the invariants.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::constants::*;
use crate::error::BmiError;
use crate::invariants;
use crate::locales::{LocaleData, SUPPORTED_LOCALES};
use crate::request::{self, Outcome, Request};
use crate::types::*;

/// Request kinds the sweep chooses between.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Metric,
    Imperial,
    Centimeters,
    Pounds,
}

const ALL_ACTIONS: &[Action] = &[
    Action::Metric,
    Action::Imperial,
    Action::Centimeters,
    Action::Pounds,
];

fn pick(values: &[f64], rng: &mut impl Rng) -> f64 {
    values.choose(rng).copied().unwrap_or_default()
}

fn pick_locale(rng: &mut impl Rng) -> Locale {
    SUPPORTED_LOCALES.choose(rng).copied().unwrap_or_default()
}

/// Draw one request with randomized parameters.
pub fn random_request(rng: &mut impl Rng) -> Request {
    let action = ALL_ACTIONS.choose(rng).copied().unwrap_or(Action::Metric);
    match action {
        Action::Metric => {
            // leave the locale unset a third of the time to exercise the default
            let locale = if rng.gen_ratio(1, 3) {
                None
            } else {
                Some(pick_locale(rng))
            };
            Request::Metric {
                weight: pick(SAMPLE_WEIGHTS_KG, rng),
                height: pick(SAMPLE_HEIGHTS_M, rng),
                locale,
            }
        }
        Action::Imperial => Request::Imperial {
            weight_lbs: pick(SAMPLE_WEIGHTS_LBS, rng),
            feet: pick(SAMPLE_FEET, rng),
            inches: pick(SAMPLE_INCHES, rng),
            locale: pick_locale(rng),
        },
        Action::Centimeters => Request::Centimeters {
            cm: pick(SAMPLE_HEIGHTS_CM, rng),
            locale: pick_locale(rng),
        },
        Action::Pounds => Request::Pounds {
            lbs: pick(SAMPLE_WEIGHTS_LBS, rng),
            locale: pick_locale(rng),
        },
    }
}

/// Metric input the calculator actually saw for a BMI request.
fn effective_input(request: &Request) -> Option<BmiInput> {
    match *request {
        Request::Metric {
            weight,
            height,
            locale,
        } => Some(BmiInput {
            weight,
            height,
            locale,
        }),
        Request::Imperial {
            weight_lbs,
            feet,
            inches,
            locale,
        } => {
            let weight = crate::units::lbs_to_kg(weight_lbs, locale).ok()?;
            let height = crate::units::feet_inches_to_meters(feet, inches);
            Some(BmiInput::new(weight, height).with_locale(locale))
        }
        Request::Centimeters { .. } | Request::Pounds { .. } => None,
    }
}

/// Check one evaluated request. Returns the name of the violated property.
pub fn check_outcome(
    request: &Request,
    outcome: &Result<Outcome, BmiError>,
) -> Result<(), &'static str> {
    match outcome {
        Ok(Outcome::Bmi(result)) => {
            let input = effective_input(request).ok_or("bmiFromValidRequest")?;
            invariants::check_invariants(&input, result)
        }
        Ok(Outcome::Meters(value)) | Ok(Outcome::Kilograms(value)) => {
            if value.is_finite() && *value > 0.0 {
                Ok(())
            } else {
                Err("conversionFiniteAndPositive")
            }
        }
        Err(err) => match err.key() {
            Some(key) if err.to_string() == request.locale().data().errors.message(key) => Ok(()),
            Some(_) => Err("errorMessageMatchesLocale"),
            None => Err("errorIsValidationFailure"),
        },
    }
}

pub struct ViolationInfo {
    pub invariant: &'static str,
    pub sample: usize,
    pub request: Request,
    pub outcome: String,
}

pub struct SweepResult {
    pub max_samples: usize,
    pub seed: u64,
    pub accepted: usize,
    pub rejected: usize,
    pub elapsed: std::time::Duration,
    pub locale_violation: Option<String>,
    pub violation: Option<ViolationInfo>,
}

impl SweepResult {
    pub fn is_ok(&self) -> bool {
        self.locale_violation.is_none() && self.violation.is_none()
    }
}

/// Run `max_samples` random requests from a fixed seed.
pub fn run_sweep(max_samples: usize, seed: u64, verbose: bool) -> SweepResult {
    let bundles: Vec<(&str, &LocaleData)> = SUPPORTED_LOCALES
        .iter()
        .map(|l| (l.code(), l.data()))
        .collect();
    run_sweep_with_bundles(max_samples, seed, verbose, &bundles)
}

/// Same as [`run_sweep`], but the locale completeness pre-check runs over `bundles`.
pub fn run_sweep_with_bundles(
    max_samples: usize,
    seed: u64,
    verbose: bool,
    bundles: &[(&str, &LocaleData)],
) -> SweepResult {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let start = std::time::Instant::now();
    let mut accepted = 0;
    let mut rejected = 0;

    // Locale tables are checked once before any sample
    let locale_violation = bundles
        .iter()
        .find_map(|(code, data)| invariants::check_locale_complete(code, data).err());
    if let Some(path) = &locale_violation {
        warn!(entry = %path, "locale bundle incomplete");
        return SweepResult {
            max_samples,
            seed,
            accepted,
            rejected,
            elapsed: start.elapsed(),
            locale_violation,
            violation: None,
        };
    }

    let mut violation = None;
    for sample in 0..max_samples {
        let req = random_request(&mut rng);
        let outcome = request::evaluate(&req);

        if verbose && sample < 20 {
            match &outcome {
                Ok(o) => info!(sample, request = %req, outcome = %o, "sample"),
                Err(e) => info!(sample, request = %req, error = %e, "sample"),
            }
        }

        if let Err(invariant) = check_outcome(&req, &outcome) {
            warn!(sample, invariant, request = %req, "invariant violated");
            violation = Some(ViolationInfo {
                invariant,
                sample,
                request: req,
                outcome: match &outcome {
                    Ok(o) => o.to_string(),
                    Err(e) => format!("error: {}", e),
                },
            });
            break;
        }

        if outcome.is_ok() {
            accepted += 1;
        } else {
            rejected += 1;
        }
    }

    let elapsed = start.elapsed();
    debug!(accepted, rejected, ?elapsed, "sweep finished");

    SweepResult {
        max_samples,
        seed,
        accepted,
        rejected,
        elapsed,
        locale_violation: None,
        violation,
    }
}

impl std::fmt::Display for SweepResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let samples_per_sec = self.max_samples as f64 / self.elapsed.as_secs_f64().max(1e-9);
        writeln!(f)?;
        if let Some(path) = &self.locale_violation {
            writeln!(f, "[VIOLATION] Locale entry '{}' is missing or empty.", path)?;
        } else {
            match &self.violation {
                None => {
                    writeln!(
                        f,
                        "[ok] No violation found ({:.0}ms at {:.0} samples/second).",
                        self.elapsed.as_millis(),
                        samples_per_sec,
                    )?;
                    writeln!(
                        f,
                        "Checked {} samples: {} accepted, {} rejected.",
                        self.max_samples, self.accepted, self.rejected,
                    )?;
                }
                Some(v) => {
                    writeln!(
                        f,
                        "[VIOLATION] Invariant '{}' violated at sample {}.",
                        v.invariant, v.sample,
                    )?;
                    writeln!(f, "Request: {}", v.request)?;
                    writeln!(f, "Outcome:\n{}", v.outcome)?;
                }
            }
        }
        writeln!(f, "Seed: {} ", self.seed)
    }
}
