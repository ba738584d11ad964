use who_bmi::*;

#[test]
fn english_bundle() {
    let en = get_locale("en").unwrap();
    assert_eq!(en.categories.normal_weight.name, "Normal Weight");
    assert_eq!(en.categories.underweight.name, "Underweight");
    assert_eq!(
        en.errors.weight_positive,
        "Weight must be a positive number in kilograms"
    );
    assert_eq!(en.units.feet, "feet");
}

#[test]
fn indonesian_bundle() {
    let id = get_locale("id").unwrap();
    assert_eq!(id.categories.normal_weight.name, "Normal");
    assert_eq!(id.categories.underweight.name, "Kurus");
    assert_eq!(
        id.errors.weight_positive,
        "Berat badan harus berupa angka positif dalam kilogram"
    );
    assert_eq!(id.units.inches, "inci");
}

#[test]
fn unsupported_locale() {
    let err = get_locale("fr").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported locale: fr. Supported locales: en, id");
    assert!(get_locale("").is_err());
    assert!("fr".parse::<Locale>().is_err());
}

#[test]
fn supported_locale_listing() {
    assert_eq!(supported_locale_codes(), vec!["en", "id"]);
    assert!(is_locale_supported("en"));
    assert!(is_locale_supported("id"));
    assert!(!is_locale_supported("fr"));
    assert!(!is_locale_supported(""));
}

#[test]
fn every_bundle_is_complete() {
    for code in supported_locale_codes() {
        let data = get_locale(code).unwrap();
        for category in BmiCategory::ALL {
            let text = data.categories.get(category);
            assert!(!text.name.is_empty(), "{} {} name", code, category);
            assert!(!text.range.is_empty(), "{} {} range", code, category);
            assert!(!text.recommendations.is_empty(), "{} {} recs", code, category);
            assert!(text.recommendations.iter().all(|r| !r.is_empty()));
        }
        for key in ErrorKey::ALL {
            assert!(!data.errors.message(key).is_empty(), "{} {}", code, key.key());
        }
        for unit in Unit::ALL {
            assert!(!data.units.label(unit).is_empty(), "{} {}", code, unit.key());
        }
    }
}

#[test]
fn bundle_serializes_with_source_keys() {
    let json = serde_json::to_value(get_locale("id").unwrap()).unwrap();
    assert_eq!(
        json["categories"]["obese_class_iii"]["name"],
        "Obesitas Kelas III (Obesitas Berat)"
    );
    assert_eq!(
        json["errors"]["lbs_positive"],
        "Berat badan dalam pound harus berupa angka positif"
    );
    assert_eq!(json["units"]["feet"], "kaki");
}

#[test]
fn calculation_in_each_locale() {
    let cases = [
        (50.0, 1.75, "Underweight", "Kurus"),
        (70.0, 1.75, "Normal Weight", "Normal"),
        (80.0, 1.7, "Overweight", "Kelebihan Berat Badan"),
        (90.0, 1.7, "Obese Class I", "Obesitas Kelas I"),
        (105.0, 1.7, "Obese Class II", "Obesitas Kelas II"),
        (
            120.0,
            1.7,
            "Obese Class III (Severe Obesity)",
            "Obesitas Kelas III (Obesitas Berat)",
        ),
    ];

    for (weight, height, en_name, id_name) in cases {
        let en = calculate_bmi(&BmiInput::new(weight, height).with_locale(Locale::En)).unwrap();
        let id = calculate_bmi(&BmiInput::new(weight, height).with_locale(Locale::Id)).unwrap();
        assert_eq!(en.category_name, en_name);
        assert_eq!(id.category_name, id_name);
    }
}

#[test]
fn recommendations_follow_locale() {
    let en = calculate_bmi(&BmiInput::new(70.0, 1.75).with_locale(Locale::En)).unwrap();
    let id = calculate_bmi(&BmiInput::new(70.0, 1.75).with_locale(Locale::Id)).unwrap();
    assert!(en.recommendations[0].contains("Maintain current weight"));
    assert!(id.recommendations[0].contains("Pertahankan berat badan"));
}

#[test]
fn default_locale_is_english_everywhere() {
    let implicit = calculate_bmi(&BmiInput::new(70.0, 1.75)).unwrap();
    let explicit = calculate_bmi(&BmiInput::new(70.0, 1.75).with_locale(Locale::En)).unwrap();
    assert_eq!(implicit, explicit);

    let simple = calculate_bmi_simple(70.0, 1.75, Locale::default()).unwrap();
    assert_eq!(simple.category_name, "Normal Weight");

    let imperial = calculate_bmi_imperial(154.0, 5.0, 9.0, Locale::default()).unwrap();
    assert_eq!(imperial.category_name, "Normal Weight");
}

#[test]
fn localized_variants() {
    assert_eq!(
        calculate_bmi_simple(70.0, 1.75, Locale::Id).unwrap().category_name,
        "Normal"
    );
    assert_eq!(
        calculate_bmi_imperial(154.0, 5.0, 9.0, Locale::Id)
            .unwrap()
            .category_name,
        "Normal"
    );
}

#[test]
fn localized_errors() {
    let en = calculate_bmi(&BmiInput::new(-70.0, 1.75).with_locale(Locale::En)).unwrap_err();
    assert_eq!(en.to_string(), "Weight must be a positive number in kilograms");

    let id = calculate_bmi(&BmiInput::new(-70.0, 1.75).with_locale(Locale::Id)).unwrap_err();
    assert_eq!(id.to_string(), "Berat badan harus berupa angka positif dalam kilogram");
    assert_eq!(en.key(), id.key());
}
