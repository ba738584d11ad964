// Integration tests: deterministic replay of request sequences.
// Each test replays a hardcoded list of requests and asserts the outcomes in order.

use who_bmi::constants::*;
use who_bmi::request::{replay, Outcome, Request};
use who_bmi::simulator::check_outcome;
use who_bmi::types::*;

fn bmi(outcome: &Result<Outcome, who_bmi::BmiError>) -> &BmiResult {
    match outcome {
        Ok(Outcome::Bmi(result)) => result,
        other => panic!("expected a BMI outcome, got {:?}", other),
    }
}

/// 1. One person measured across every category on the same height
#[test]
fn replay_category_ladder() {
    let requests: Vec<Request> = [50.0, 70.0, 80.0, 90.0, 105.0, 120.0]
        .iter()
        .map(|&weight| Request::Metric {
            weight,
            height: 1.7,
            locale: None,
        })
        .collect();

    let trace = replay(&requests);
    let categories: Vec<BmiCategory> = trace.iter().map(|(_, o)| bmi(o).category).collect();
    assert_eq!(categories, BmiCategory::ALL.to_vec());

    for (req, outcome) in &trace {
        assert_eq!(check_outcome(req, outcome), Ok(()));
    }
}

/// 2. Same body in both locales: numbers agree, text differs
#[test]
fn replay_locale_switch() {
    let requests = vec![
        Request::Metric {
            weight: 70.0,
            height: 1.75,
            locale: Some(Locale::En),
        },
        Request::Metric {
            weight: 70.0,
            height: 1.75,
            locale: Some(Locale::Id),
        },
    ];

    let trace = replay(&requests);
    let en = bmi(&trace[0].1);
    let id = bmi(&trace[1].1);

    assert_eq!(en.bmi, id.bmi);
    assert_eq!(en.category, id.category);
    assert_eq!(en.category_name, "Normal Weight");
    assert_eq!(id.category_name, "Normal");
    assert_eq!(en.range, id.range);
    assert_ne!(en.recommendations, id.recommendations);
}

/// 3. Centimeters entered by mistake, then corrected through the converter
#[test]
fn replay_centimeter_mistake_then_fix() {
    let requests = vec![
        Request::Metric {
            weight: 70.0,
            height: 175.0,
            locale: None,
        },
        Request::Centimeters {
            cm: 175.0,
            locale: Locale::En,
        },
    ];

    let trace = replay(&requests);
    let err = trace[0].1.as_ref().unwrap_err();
    assert_eq!(err.key(), Some(ErrorKey::HeightUnrealistic));
    assert_eq!(trace[1].1, Ok(Outcome::Meters(1.75)));

    let fixed = replay(&[Request::Metric {
        weight: 70.0,
        height: 1.75,
        locale: None,
    }]);
    assert_eq!(bmi(&fixed[0].1).bmi, 22.86);
}

/// 4. Imperial request matches the metric request built from its conversions
#[test]
fn replay_imperial_matches_metric() {
    let imperial = Request::Imperial {
        weight_lbs: 154.0,
        feet: 5.0,
        inches: 9.0,
        locale: Locale::Id,
    };
    let pounds = Request::Pounds {
        lbs: 154.0,
        locale: Locale::Id,
    };

    let trace = replay(&[imperial, pounds]);
    let kg = match &trace[1].1 {
        Ok(Outcome::Kilograms(kg)) => *kg,
        other => panic!("expected kilograms, got {:?}", other),
    };
    let height = (5.0 * INCHES_PER_FOOT + 9.0) * METERS_PER_INCH;

    let metric = replay(&[Request::Metric {
        weight: kg,
        height,
        locale: Some(Locale::Id),
    }]);
    assert_eq!(bmi(&trace[0].1), bmi(&metric[0].1));
    assert_eq!(bmi(&trace[0].1).category_name, "Normal");
}

/// 5. Every validation failure in one trace, each in its own locale
#[test]
fn replay_rejections() {
    let requests = vec![
        Request::Metric {
            weight: -70.0,
            height: 1.75,
            locale: Some(Locale::Id),
        },
        Request::Metric {
            weight: 70.0,
            height: 0.0,
            locale: None,
        },
        Request::Metric {
            weight: 1500.0,
            height: 1.75,
            locale: None,
        },
        Request::Centimeters {
            cm: -1.0,
            locale: Locale::En,
        },
        Request::Pounds {
            lbs: 0.0,
            locale: Locale::Id,
        },
    ];

    let keys: Vec<Option<ErrorKey>> = replay(&requests)
        .iter()
        .map(|(_, o)| o.as_ref().unwrap_err().key())
        .collect();
    assert_eq!(
        keys,
        vec![
            Some(ErrorKey::WeightPositive),
            Some(ErrorKey::HeightPositive),
            Some(ErrorKey::WeightUnrealistic),
            Some(ErrorKey::CmPositive),
            Some(ErrorKey::LbsPositive),
        ]
    );

    for (req, outcome) in replay(&requests) {
        assert_eq!(check_outcome(&req, &outcome), Ok(()));
    }
}
