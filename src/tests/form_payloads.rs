use super::*;
use crate::core_impl::{build_payload, owning_form, serialize_form};

fn node(dom: &Dom, id: &str) -> Result<NodeId> {
    dom.by_id(id)
        .ok_or_else(|| Error::SelectorNotFound(format!("#{id}")))
}

const FORM_HTML: &str = r#"
<form id="f" class="ajax-form" action="/node/add">
  <input type="hidden" name="form_token" value="tok-1">
  <input id="title" name="title" value="Hello world">
  <input name="" value="nameless">
  <input name="locked" value="x" disabled>
  <input type="checkbox" name="promote" checked>
  <input type="checkbox" name="sticky" value="yes">
  <input type="radio" name="status" value="0">
  <input type="radio" name="status" value="1" checked>
  <input type="file" name="upload">
  <textarea name="body">Line one</textarea>
  <select name="tags" multiple>
    <option value="a" selected>A</option>
    <option value="b">B</option>
    <option value="c" selected>C</option>
  </select>
  <button name="plain">Plain</button>
  <input type="submit" id="edit-preview" name="op" value="Preview" class="ajax-trigger">
  <input type="submit" id="edit-submit" name="op" value="Save">
</form>
<input id="outside" name="outside" value="1">
"#;

#[test]
fn serialization_keeps_only_successful_controls_in_order() -> Result<()> {
    let dom = Dom::parse(FORM_HTML)?;
    let form = node(&dom, "f")?;
    let pairs = serialize_form(&dom, form, None)?;
    let expected = [
        ("form_token", "tok-1"),
        ("title", "Hello world"),
        ("promote", "on"),
        ("status", "1"),
        ("body", "Line one"),
        ("tags", "a"),
        ("tags", "c"),
    ];
    assert_eq!(
        pairs,
        expected
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn payload_appends_trigger_then_marker() -> Result<()> {
    let dom = Dom::parse(FORM_HTML)?;
    let form = node(&dom, "f")?;
    let trigger = node(&dom, "edit-preview")?;
    let fields = build_payload(&dom, form, trigger, "Preview", "ajax")?;

    let tail = &fields[fields.len() - 2..];
    assert_eq!(
        tail,
        &[
            ("op".to_string(), "Preview".to_string()),
            ("ajax".to_string(), "1".to_string()),
        ]
    );
    assert_eq!(fields.iter().filter(|(name, _)| name == "op").count(), 1);
    Ok(())
}

#[test]
fn payload_drops_form_fields_shadowing_the_marker() -> Result<()> {
    let dom = Dom::parse(
        r#"
        <form id="f">
          <input type="hidden" name="ajax" value="0">
          <input id="q" name="q" value="term" class="ajax-trigger">
        </form>
        "#,
    )?;
    let form = node(&dom, "f")?;
    let trigger = node(&dom, "q")?;
    let fields = build_payload(&dom, form, trigger, "term", "ajax")?;
    assert_eq!(
        fields,
        vec![
            ("q".to_string(), "term".to_string()),
            ("ajax".to_string(), "1".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn request_body_is_urlencoded_in_payload_order() {
    let request = SubmitRequest {
        id: RequestId(1),
        form: NodeId(1),
        trigger: NodeId(2),
        original_value: "Save".into(),
        url: "/save".into(),
        fields: vec![
            ("title".into(), "Fish & chips".into()),
            ("op".into(), "Save".into()),
            ("ajax".into(), "1".into()),
        ],
    };
    assert_eq!(request.body(), "title=Fish%20%26%20chips&op=Save&ajax=1");
    assert_eq!(request.field("op"), Some("Save"));
    assert_eq!(request.field("missing"), None);
    assert_eq!(request.accept(), "application/json");
    assert_eq!(
        SubmitRequest::CONTENT_TYPE,
        "application/x-www-form-urlencoded"
    );
}

#[test]
fn owning_form_follows_form_attribute_and_ancestors() -> Result<()> {
    let dom = Dom::parse(
        r#"
        <form id="a"><fieldset><input id="inside"></fieldset></form>
        <form id="b"></form>
        <button id="linked" form="b">Go</button>
        <button id="dangling" form="nope">Go</button>
        <button id="loose">Go</button>
        "#,
    )?;
    assert_eq!(owning_form(&dom, node(&dom, "inside")?), Some(node(&dom, "a")?));
    assert_eq!(owning_form(&dom, node(&dom, "linked")?), Some(node(&dom, "b")?));
    assert_eq!(owning_form(&dom, node(&dom, "a")?), Some(node(&dom, "a")?));
    assert_eq!(owning_form(&dom, node(&dom, "dangling")?), None);
    assert_eq!(owning_form(&dom, node(&dom, "loose")?), None);
    Ok(())
}
