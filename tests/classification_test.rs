//! Tests for the rule-based classifier

mod utils;

use nutri_screen::{Category, Measurement, RiskScorer, RuleBasedScorer, ScoreBreakdown, classify, score};
use utils::{healthy_measurement, worst_measurement};

#[test]
fn test_best_case_is_nourished() {
    let base = healthy_measurement();
    for muac in [13.5, 14.0, 16.0] {
        for meals in [4.0, 5.0, 6.0] {
            for diet in [5.0, 6.0, 8.0] {
                let m = Measurement {
                    muac,
                    meals_per_day: meals,
                    diet_groups: diet,
                    ..base
                };
                assert_eq!(score(&m).total(), 0);
                assert_eq!(classify(&m), Category::Nourished);
            }
        }
    }
}

#[test]
fn test_worst_case_is_severely_malnourished() {
    let base = worst_measurement();
    for muac in [8.0, 10.0, 11.4] {
        for meals in [0.0, 1.0, 2.0] {
            for diet in [0.0, 1.0, 2.0] {
                let m = Measurement {
                    muac,
                    meals_per_day: meals,
                    diet_groups: diet,
                    ..base
                };
                assert_eq!(score(&m).total(), ScoreBreakdown::MAX_TOTAL);
                assert_eq!(classify(&m), Category::SeverelyMalnourished);
            }
        }
    }
}

#[test]
fn test_score_bands() {
    let base = healthy_measurement();

    // muac 12.0 -> 2 points
    let borderline = Measurement { muac: 12.0, ..base };
    assert_eq!(classify(&borderline), Category::Borderline);

    // muac 2 + meals 1 + diet 1 -> 4 points
    let at_risk = Measurement {
        muac: 12.0,
        meals_per_day: 3.0,
        diet_groups: 4.0,
        ..base
    };
    assert_eq!(score(&at_risk).total(), 4);
    assert_eq!(classify(&at_risk), Category::AtRisk);

    // muac 3 + meals 2 + illness 1 -> 6 points
    let severe = Measurement {
        muac: 11.0,
        meals_per_day: 2.0,
        illness: true,
        ..base
    };
    assert_eq!(score(&severe).total(), 6);
    assert_eq!(classify(&severe), Category::SeverelyMalnourished);
}

#[test]
fn test_breakdown_reports_each_rule() {
    let m = Measurement {
        muac: 12.9,
        meals_per_day: 3.0,
        diet_groups: 2.0,
        illness: false,
        immunized: false,
        ..healthy_measurement()
    };
    let breakdown = score(&m);
    assert_eq!(breakdown.muac, 1);
    assert_eq!(breakdown.meals, 1);
    assert_eq!(breakdown.diet, 2);
    assert_eq!(breakdown.illness, 0);
    assert_eq!(breakdown.immunization, 1);
    assert_eq!(breakdown.total(), 5);
}

/// Worsening any single reading never lowers the category
#[test]
fn test_monotonic_in_each_input() {
    let muacs = [15.0, 13.5, 13.4, 12.5, 12.4, 11.5, 11.4, 9.0];
    let meals = [6.0, 4.0, 3.0, 2.0, 1.0, 0.0];
    let diets = [8.0, 5.0, 4.0, 3.0, 2.0, 0.0];

    let bases = [
        healthy_measurement(),
        worst_measurement(),
        Measurement {
            muac: 12.8,
            meals_per_day: 3.0,
            diet_groups: 3.0,
            ..healthy_measurement()
        },
    ];

    for base in bases {
        let by_muac: Vec<Category> = muacs
            .iter()
            .map(|&muac| classify(&Measurement { muac, ..base }))
            .collect();
        assert!(by_muac.windows(2).all(|w| w[0] <= w[1]), "muac: {by_muac:?}");

        let by_meals: Vec<Category> = meals
            .iter()
            .map(|&meals_per_day| classify(&Measurement { meals_per_day, ..base }))
            .collect();
        assert!(by_meals.windows(2).all(|w| w[0] <= w[1]), "meals: {by_meals:?}");

        let by_diet: Vec<Category> = diets
            .iter()
            .map(|&diet_groups| classify(&Measurement { diet_groups, ..base }))
            .collect();
        assert!(by_diet.windows(2).all(|w| w[0] <= w[1]), "diet: {by_diet:?}");

        let well = classify(&Measurement { illness: false, ..base });
        let ill = classify(&Measurement { illness: true, ..base });
        assert!(well <= ill);

        let immunized = classify(&Measurement { immunized: true, ..base });
        let not_immunized = classify(&Measurement { immunized: false, ..base });
        assert!(immunized <= not_immunized);
    }
}

#[test]
fn test_nan_falls_through_to_lowest_band() {
    let m = Measurement {
        muac: f64::NAN,
        meals_per_day: f64::NAN,
        diet_groups: f64::NAN,
        ..worst_measurement()
    };
    // only illness and immunization still count
    assert_eq!(score(&m).total(), 2);
    assert_eq!(classify(&m), Category::Borderline);
}

#[test]
fn test_default_scorer_matches_free_function() {
    let scorer = RuleBasedScorer::default();
    for m in [healthy_measurement(), worst_measurement()] {
        assert_eq!(scorer.classify(&m), classify(&m));
    }
    assert_eq!(scorer.name(), "rule-based");
}
