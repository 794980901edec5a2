use ajax_form::{Page, SubmitOutcome};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{FileFailurePersistence, TestCaseError, TestCaseResult};

const SUBMISSION_PROPTEST_REGRESSION_FILE: &str =
    "tests/proptest-regressions/submission_property_fuzz_test.txt";
const DEFAULT_SUBMISSION_PROPTEST_CASES: u32 = 128;

#[derive(Clone, Debug)]
struct FieldSpec {
    name: &'static str,
    value: String,
}

#[derive(Clone, Debug)]
enum SubmitAction {
    Enter,
    ClickTrigger(usize),
    ClickSubmit,
}

#[derive(Clone, Debug)]
struct FormCase {
    fields: Vec<FieldSpec>,
    triggers: usize,
    actions: Vec<SubmitAction>,
}

fn submission_proptest_cases() -> u32 {
    std::env::var("AJAX_FORM_PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SUBMISSION_PROPTEST_CASES)
}

fn value_strategy() -> BoxedStrategy<String> {
    vec(
        prop_oneof![
            Just('a'),
            Just('z'),
            Just('0'),
            Just(' '),
            Just('&'),
            Just('='),
            Just('%'),
            Just('é'),
        ],
        0..=8,
    )
    .prop_map(|chars| chars.into_iter().collect())
    .boxed()
}

fn field_strategy() -> BoxedStrategy<FieldSpec> {
    (
        prop_oneof![
            Just("title"),
            Just("body"),
            Just("tags"),
            Just("ajax"),
            Just("op"),
        ],
        value_strategy(),
    )
        .prop_map(|(name, value)| FieldSpec { name, value })
        .boxed()
}

fn action_strategy(triggers: usize) -> BoxedStrategy<SubmitAction> {
    if triggers == 0 {
        return prop_oneof![Just(SubmitAction::Enter), Just(SubmitAction::ClickSubmit)].boxed();
    }
    prop_oneof![
        2 => Just(SubmitAction::Enter),
        1 => Just(SubmitAction::ClickSubmit),
        3 => (0..triggers).prop_map(SubmitAction::ClickTrigger),
    ]
    .boxed()
}

fn form_case_strategy() -> BoxedStrategy<FormCase> {
    (vec(field_strategy(), 0..=6), 0usize..=3)
        .prop_flat_map(|(fields, triggers)| {
            vec(action_strategy(triggers), 1..=6).prop_map(move |actions| FormCase {
                fields: fields.clone(),
                triggers,
                actions,
            })
        })
        .boxed()
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

fn render_form(case: &FormCase) -> String {
    let mut html = String::from(r#"<form id="f" class="ajax-form" action="/save">"#);
    for field in &case.fields {
        html.push_str(&format!(
            r#"<input name="{}" value="{}">"#,
            field.name,
            escape_attr(&field.value)
        ));
    }
    for index in 0..case.triggers {
        html.push_str(&format!(
            r#"<button type="button" id="t{index}" class="ajax-trigger" name="trigger_{index}" value="v{index}">T</button>"#
        ));
    }
    html.push_str(r#"<input type="submit" id="edit-submit" name="op" value="Save"></form>"#);
    html
}

fn fail(err: ajax_form::Error) -> TestCaseError {
    TestCaseError::fail(format!("{err:?}"))
}

fn assert_payload_invariants(case: &FormCase) -> TestCaseResult {
    let mut page = Page::from_html(&render_form(case)).map_err(fail)?;
    page.set_response_mock("/save", r#"{"status": true}"#);

    let mut expected_trigger = ("op".to_string(), "Save".to_string());
    for (step, action) in case.actions.iter().enumerate() {
        let outcome = match action {
            SubmitAction::Enter => Some(page.submit("#f").map_err(fail)?),
            SubmitAction::ClickSubmit => page.click("#edit-submit").map_err(fail)?,
            SubmitAction::ClickTrigger(index) => {
                let clicked = page.click(&format!("#t{index}")).map_err(fail)?;
                prop_assert!(clicked.is_none(), "button trigger submitted at step {step}");
                expected_trigger = (format!("trigger_{index}"), format!("v{index}"));
                continue;
            }
        };
        prop_assert!(
            matches!(outcome, Some(SubmitOutcome::Sent(_))),
            "step {step} was not sent: {outcome:?}"
        );

        let pending = page.pending_requests();
        prop_assert_eq!(pending.len(), 1);
        let fields = &pending[0].fields;

        let markers = fields.iter().filter(|(name, _)| name == "ajax").count();
        prop_assert_eq!(markers, 1, "marker count at step {}: {:?}", step, fields);
        prop_assert_eq!(
            fields.last(),
            Some(&("ajax".to_string(), "1".to_string()))
        );

        let trigger_pairs = fields
            .iter()
            .filter(|pair| **pair == expected_trigger)
            .count();
        let shadowed = case
            .fields
            .iter()
            .filter(|field| field.name == expected_trigger.0 && field.value == expected_trigger.1)
            .count();
        prop_assert_eq!(trigger_pairs, 1 + shadowed, "trigger pairs at step {}: {:?}", step, fields);
        prop_assert_eq!(fields.get(fields.len() - 2), Some(&expected_trigger));

        page.settle_requests().map_err(fail)?;
        prop_assert!(!page.is_submitting("#f").map_err(fail)?);
        prop_assert!(page.assert_value("#edit-submit", "Save").is_ok());
        expected_trigger = ("op".to_string(), "Save".to_string());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: submission_proptest_cases(),
        failure_persistence: Some(Box::new(
            FileFailurePersistence::Direct(SUBMISSION_PROPTEST_REGRESSION_FILE),
        )),
        .. ProptestConfig::default()
    })]

    #[test]
    fn every_payload_carries_one_marker_and_the_resolved_trigger(case in form_case_strategy()) {
        assert_payload_invariants(&case)?;
    }
}
