use super::*;

#[test]
fn failed_status_selects_failure_even_with_other_keys() -> Result<()> {
    let response = ServerResponse::from_json(
        r##"{
            "status": false,
            "preview": "%3Cp%3Eignored%3C%2Fp%3E",
            "redirect": "/elsewhere",
            "messages_error": [
                {"id": "edit-title", "value": "Title is required.", "required": true},
                {"id": "", "value": "General problem."}
            ],
            "updaters": [{"selector": "#token", "type": "field", "value": "abc"}]
        }"##,
    )?;

    assert_eq!(
        response,
        ServerResponse::Failure {
            updates: vec![UpdateInstruction::new(
                "#token",
                UpdateKind::SetValue("abc".into())
            )],
            errors: vec![
                Message::for_field("edit-title", "Title is required.").required(),
                Message::new("General problem."),
            ],
        }
    );
    Ok(())
}

#[test]
fn preview_wins_over_redirect_and_is_percent_decoded() -> Result<()> {
    let response = ServerResponse::from_json(
        r#"{"status": true, "preview": "%3Cdiv%20class%3D%22node%22%3EHi%20%26%20bye%3C%2Fdiv%3E", "redirect": "/next"}"#,
    )?;
    assert_eq!(
        response,
        ServerResponse::Preview {
            updates: Vec::new(),
            fragment: r#"<div class="node">Hi & bye</div>"#.into(),
        }
    );
    Ok(())
}

#[test]
fn redirect_wins_over_messages() -> Result<()> {
    let response = ServerResponse::from_json(
        r#"{"status": true, "redirect": "http://example.com/node/7",
            "messages_status": [{"value": "Saved."}]}"#,
    )?;
    assert_eq!(
        response,
        ServerResponse::Redirect {
            url: "http://example.com/node/7".into()
        }
    );
    assert_eq!(response.branch_name(), "redirect");
    Ok(())
}

#[test]
fn message_lists_select_messages_branch() -> Result<()> {
    let response = ServerResponse::from_json(
        r#"{"status": true, "preview": null,
            "messages_status": [{"id": 12, "value": "Saved <em>draft</em>.", "required": 0}],
            "messages_warning": [{"value": "Check the date.", "required": 1}]}"#,
    )?;
    assert_eq!(
        response,
        ServerResponse::Messages {
            status: vec![Message::for_field("12", "Saved <em>draft</em>.")],
            warning: vec![Message {
                field_id: None,
                text: "Check the date.".into(),
                required: true,
            }],
        }
    );
    Ok(())
}

#[test]
fn empty_success_is_complete() -> Result<()> {
    for body in [
        r#"{"status": true}"#,
        r#"{"status": true, "messages_status": [], "messages_warning": []}"#,
        r#"{"status": true, "redirect": null, "updaters": []}"#,
    ] {
        assert_eq!(ServerResponse::from_json(body)?, ServerResponse::Complete, "{body}");
    }
    Ok(())
}

#[test]
fn updater_values_are_coerced_to_text() -> Result<()> {
    let response = ServerResponse::from_json(
        r##"{"status": false, "updaters": [
            {"selector": "#count", "type": "field", "value": 42},
            {"selector": "#flag", "type": "field", "value": true},
            {"selector": "#stale", "type": "remove"},
            {"selector": "#box", "type": "html_out", "value": "<p>x</p>"}
        ]}"##,
    )?;
    let ServerResponse::Failure { updates, errors } = response else {
        panic!("expected failure branch");
    };
    assert!(errors.is_empty());
    assert_eq!(
        updates,
        vec![
            UpdateInstruction::new("#count", UpdateKind::SetValue("42".into())),
            UpdateInstruction::new("#flag", UpdateKind::SetValue("true".into())),
            UpdateInstruction::new("#stale", UpdateKind::Remove),
            UpdateInstruction::new("#box", UpdateKind::ReplaceOuter("<p>x</p>".into())),
        ]
    );
    Ok(())
}

#[test]
fn malformed_bodies_are_rejected() {
    let cases = [
        ("not json", "<html>Fatal error</html>"),
        ("missing status", r#"{"preview": "x"}"#),
        ("status not bool", r#"{"status": "yes"}"#),
        (
            "unknown updater",
            r##"{"status": true, "updaters": [{"selector": "#a", "type": "append", "value": "x"}]}"##,
        ),
        (
            "updater without value",
            r##"{"status": true, "updaters": [{"selector": "#a", "type": "html_in"}]}"##,
        ),
        (
            "updater object value",
            r##"{"status": true, "updaters": [{"selector": "#a", "type": "field", "value": {"v": 1}}]}"##,
        ),
        (
            "message without value",
            r#"{"status": false, "messages_error": [{"id": "a"}]}"#,
        ),
        (
            "message id list",
            r#"{"status": false, "messages_error": [{"id": ["a"], "value": "x"}]}"#,
        ),
        (
            "required text",
            r#"{"status": true, "messages_status": [{"value": "x", "required": "yes"}]}"#,
        ),
    ];

    for (label, body) in cases {
        let result = ServerResponse::from_json(body);
        assert!(
            matches!(result, Err(Error::Response(_))),
            "{label}: expected a response error, got {result:?}"
        );
    }
}
