use super::*;

#[test]
fn catalog_passes_unknown_strings_through() -> Result<()> {
    let catalog = Catalog::new()?;
    assert_eq!(catalog.translate("Loading...", &[]), "Loading...");
    Ok(())
}

#[test]
fn catalog_uses_entries_and_substitutes_placeholders() -> Result<()> {
    let catalog = Catalog::with_entries([
        ("Loading...", "Chargement..."),
        ("Saved @title by %user. !link", "Enregistré @title par %user. !link"),
    ])?;

    assert_eq!(catalog.translate("Loading...", &[]), "Chargement...");
    assert_eq!(
        catalog.translate(
            "Saved @title by %user. !link",
            &[
                ("@title", "<Fish & chips>"),
                ("%user", "ana"),
                ("!link", r#"<a href="/n/1">view</a>"#),
            ],
        ),
        r#"Enregistré &lt;Fish &amp; chips&gt; par <em class="placeholder">ana</em>. <a href="/n/1">view</a>"#
    );
    Ok(())
}

#[test]
fn placeholders_need_a_matching_argument_and_a_word_boundary() -> Result<()> {
    let catalog = Catalog::new()?;
    assert_eq!(
        catalog.translate("Mail admin@site.org about @count and @other", &[("@count", "3")]),
        "Mail admin@site.org about 3 and @other"
    );
    Ok(())
}

#[test]
fn config_defaults_follow_the_conventional_markup() {
    let config = AjaxConfig::default();
    assert_eq!(config.form_selector(), r#"[class~="ajax-form"]"#);
    assert_eq!(config.trigger_selector(), r#"[class~="ajax-trigger"]"#);
    assert_eq!(config.default_submit_selector(), r#"[id="edit-submit"]"#);
    assert_eq!(
        config.cleanup_selector(),
        r#"[class~="messages"], [class~="ajax-preview"]"#
    );
    assert_eq!(config.modal_id, "TB_window");
    assert_eq!(config.marker_field, "ajax");
    assert!(config.single_flight);
    assert!(config.validate().is_ok());
}

#[test]
fn config_names_with_selector_punctuation_match_literally() -> Result<()> {
    let config = AjaxConfig::from_json(
        r#"{"form_class": "js.ajax", "default_submit_id": "1edit:submit"}"#,
    )?;
    let dom = Dom::parse(
        r#"<form id="a" class="js.ajax"><input type="submit" id="1edit:submit"></form>
           <form id="b" class="js"><input id="edit"></form>"#,
    )?;
    let forms = dom.query_selector_all(&config.form_selector())?;
    assert_eq!(forms, dom.by_id("a").into_iter().collect::<Vec<_>>());
    let submit = dom.query_selector_all(&config.default_submit_selector())?;
    assert_eq!(submit, dom.by_id("1edit:submit").into_iter().collect::<Vec<_>>());
    Ok(())
}

#[test]
fn config_from_json_overrides_only_given_keys() -> Result<()> {
    let config = AjaxConfig::from_json(
        r#"{"form_class": "js-ajax", "scroll_step": 40, "single_flight": false}"#,
    )?;
    assert_eq!(config.form_class, "js-ajax");
    assert_eq!(config.scroll_step, 40);
    assert!(!config.single_flight);
    assert_eq!(config.trigger_class, "ajax-trigger");
    assert_eq!(config.scroll_interval_ms, 100);
    Ok(())
}

#[test]
fn config_rejects_bad_values() {
    for json in [
        r#"{"form_clas": "typo"}"#,
        r#"{"form_class": ""}"#,
        r#"{"trigger_class": "two words"}"#,
        r#"{"scroll_step": 0}"#,
        r#"{"scroll_interval_ms": -5}"#,
        r#"{"timer_step_limit": 0}"#,
        r#"{"modal_id": 7}"#,
    ] {
        let result = AjaxConfig::from_json(json);
        assert!(
            matches!(result, Err(Error::Config(_))),
            "{json}: expected config error, got {result:?}"
        );
    }
}

#[test]
fn page_refuses_invalid_config() {
    let config = AjaxConfig {
        default_submit_id: " ".into(),
        ..AjaxConfig::default()
    };
    assert!(matches!(
        Page::with_config("<form></form>", config),
        Err(Error::Config(_))
    ));
}
