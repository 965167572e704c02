//! Synthetic survey data for demos and tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::SurveyForm;

/// Number of wards the synthetic forms are spread over
pub const DEMO_WARDS: u32 = 6;

/// Generate `count` plausible survey forms
///
/// The same `seed` always yields the same forms. Wards further down the
/// list get thinner arms and poorer diets so the hotspot table has a clear
/// ranking.
#[must_use]
pub fn generate_demo_forms(count: usize, seed: u64) -> Vec<SurveyForm> {
    let mut rng = StdRng::seed_from_u64(seed);

    (1..=count)
        .map(|n| {
            let ward = rng.random_range(1..=DEMO_WARDS);
            let deprivation = f64::from(ward - 1) / f64::from(DEMO_WARDS);

            let muac = rng.random_range(11.0..15.5) - deprivation * 1.5;
            let meals = rng.random_range(2..=5) - i32::from(rng.random_bool(deprivation * 0.5));
            let diet = rng.random_range(1..=7);
            let age_months: u32 = rng.random_range(6..=59);

            SurveyForm {
                ward_no: ward.to_string(),
                child_id: format!("DEMO-{n:03}"),
                age_months: age_months.to_string(),
                weight: format!("{:.1}", 6.0 + f64::from(age_months) * 0.18),
                height: format!("{:.1}", 65.0 + f64::from(age_months) * 0.6),
                muac: format!("{muac:.1}"),
                illness: yes_no(rng.random_bool(0.2 + deprivation * 0.3)),
                immunized: yes_no(rng.random_bool(0.9 - deprivation * 0.4)),
                meals_per_day: meals.to_string(),
                diet_groups: diet.to_string(),
            }
        })
        .collect()
}

fn yes_no(answer: bool) -> String {
    let answer = if answer { "yes" } else { "no" };
    answer.to_string()
}
