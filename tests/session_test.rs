//! Tests for the screening app, sessions and form loading

mod utils;

use std::io::Write;

use nutri_screen::demo::generate_demo_forms;
use nutri_screen::session::{DEFAULT_DEMO_PASSPHRASE, DemoPassphrase, Page};
use nutri_screen::{
    Category, InputPolicy, ScreeningApp, ScreeningConfig, ScreeningError, ScreeningSession,
    SurveyForm, load_forms,
};
use utils::{healthy_form, severe_form};

fn logged_in_app() -> ScreeningApp<DemoPassphrase> {
    let mut app = ScreeningApp::new(ScreeningConfig::default(), DemoPassphrase::default());
    app.login(DEFAULT_DEMO_PASSPHRASE).unwrap();
    app
}

#[test]
fn test_submit_requires_login() {
    let mut app = ScreeningApp::new(ScreeningConfig::default(), DemoPassphrase::default());
    assert_eq!(app.page(), Page::Login);

    assert!(matches!(
        app.submit_form(&healthy_form(1, "A")),
        Err(ScreeningError::NotLoggedIn)
    ));
    assert!(matches!(app.dashboard(), Err(ScreeningError::NotLoggedIn)));

    assert!(matches!(app.login("wrong"), Err(ScreeningError::AccessDenied)));
    assert_eq!(app.page(), Page::Login);
    assert!(app.session().is_none());
}

#[test]
fn test_full_screening_flow() {
    let mut app = logged_in_app();
    assert_eq!(app.page(), Page::Survey);

    let first = app.submit_form(&healthy_form(1, "A")).unwrap();
    assert_eq!(first.category(), Category::Nourished);
    assert_eq!(first.status.message, "Child A is classified as: Nourished");
    assert_eq!(first.status.style.css_class(), "good");

    app.submit_form(&severe_form(1, "B")).unwrap();
    let last = app.submit_form(&severe_form(2, "C")).unwrap();
    assert_eq!(last.category(), Category::SeverelyMalnourished);
    assert_eq!(last.recommendations.profile.follow_up_days, 7);
    assert_eq!(last.meal_plan.mid_morning, "Banana with peanut butter");

    let dashboard = app.dashboard().unwrap();
    assert_eq!(dashboard.chart.ward_labels, vec!["1", "2"]);
    assert_eq!(dashboard.chart.nourished, vec![1, 0]);
    assert_eq!(dashboard.chart.adverse, vec![1, 1]);
    assert_eq!(
        dashboard.chart.series_labels,
        ["Nourished", "At Risk / Malnourished"]
    );

    let rows: Vec<(&str, &str, &str)> = dashboard
        .hotspots
        .iter()
        .map(|row| (row.ward.as_str(), row.total.as_str(), row.percent.as_str()))
        .collect();
    assert_eq!(rows, vec![("2", "1", "100.0%"), ("1", "2", "50.0%")]);
}

#[test]
fn test_rejected_form_is_not_recorded() {
    let mut app = logged_in_app();
    let bad = SurveyForm {
        muac: "twelve".to_string(),
        ..healthy_form(3, "X")
    };

    assert!(matches!(
        app.submit_form(&bad),
        Err(ScreeningError::InvalidMeasurement { field: "muac", .. })
    ));
    assert!(app.session().unwrap().aggregator().is_empty());
}

#[test]
fn test_permissive_policy_accepts_blank_fields() {
    let config = ScreeningConfig {
        input_policy: InputPolicy::Permissive,
        ..Default::default()
    };
    let mut session = ScreeningSession::new(config);
    let blank = SurveyForm {
        muac: String::new(),
        meals_per_day: "n/a".to_string(),
        ..healthy_form(4, "Y")
    };

    let outcome = session.submit_form(&blank).unwrap();
    assert_eq!(outcome.category(), Category::Nourished);
    assert_eq!(session.aggregator().len(), 1);
}

#[test]
fn test_permissive_policy_reads_units_and_exact_flags() {
    let config = ScreeningConfig {
        input_policy: InputPolicy::Permissive,
        ..Default::default()
    };
    let mut session = ScreeningSession::new(config);

    let with_unit = SurveyForm {
        muac: "11.2cm".to_string(),
        ..healthy_form(2, "U")
    };
    let outcome = session.submit_form(&with_unit).unwrap();
    assert_eq!(outcome.category(), Category::Borderline);

    let shouted = SurveyForm {
        muac: "14".to_string(),
        illness: "YES".to_string(),
        immunized: "NO".to_string(),
        ..healthy_form(2, "V")
    };
    let outcome = session.submit_form(&shouted).unwrap();
    assert_eq!(outcome.category(), Category::Nourished);
}

#[test]
fn test_logout_discards_observations() {
    let mut app = logged_in_app();
    app.submit_form(&severe_form(9, "Z")).unwrap();
    assert_eq!(app.session().unwrap().aggregator().len(), 1);

    app.logout();
    assert_eq!(app.page(), Page::Login);
    assert!(app.session().is_none());

    app.login(DEFAULT_DEMO_PASSPHRASE).unwrap();
    assert!(app.session().unwrap().aggregator().is_empty());
}

#[test]
fn test_dashboard_is_idempotent() {
    let mut app = logged_in_app();
    for form in generate_demo_forms(30, 11) {
        app.submit_form(&form).unwrap();
    }

    let first = app.dashboard().unwrap();
    let second = app.dashboard().unwrap();
    assert_eq!(first.chart, second.chart);
    assert_eq!(first.hotspots, second.hotspots);
    assert_eq!(first.summaries, second.summaries);

    let percents: Vec<f64> = first.summaries.iter().map(|s| s.adverse_percent).collect();
    assert!(percents.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_load_forms_from_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"wardNo": "3", "childId": "K-1", "ageMonths": "20", "weight": "9.8",
              "height": "80", "muac": "11.2", "illness": "yes", "immunized": "no",
              "mealsPerDay": "2", "dietGroups": "2"}},
            {{"wardNo": "3", "childId": "K-2", "muac": "14"}}
        ]"#
    )
    .unwrap();

    let forms = load_forms(file.path()).unwrap();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].child_id, "K-1");
    assert_eq!(forms[0].meals_per_day, "2");
    assert_eq!(forms[1].weight, "");

    let mut session = ScreeningSession::new(ScreeningConfig::default());
    let outcome = session.submit_form(&forms[0]).unwrap();
    assert_eq!(outcome.category(), Category::SeverelyMalnourished);
    assert!(session.submit_form(&forms[1]).is_err());
}

#[test]
fn test_load_forms_rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    assert!(matches!(load_forms(file.path()), Err(ScreeningError::Json(_))));
}
