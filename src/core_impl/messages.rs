use super::*;

const FIELD_SELECTOR: &str = "input, textarea, select";
const FIELD_STATE_CLASSES: [&str; 4] = ["error", "status", "warning", "required"];

/// Removes message and preview blocks inside `form` and strips the
/// per-field state classes from its fields.
pub fn clear_messages<D: DomAccess + ?Sized>(
    dom: &mut D,
    form: NodeId,
    config: &AjaxConfig,
) -> Result<()> {
    for block in dom.find_within(form, &config.cleanup_selector())? {
        dom.mutate(block, DomOp::Remove)?;
    }
    for field in dom.find_within(form, FIELD_SELECTOR)? {
        for class_name in FIELD_STATE_CLASSES {
            dom.mutate(field, DomOp::RemoveClass(class_name.to_string()))?;
        }
    }
    Ok(())
}

/// Prepends one message block per group to `form`, keeping group order, and
/// marks each referenced field with the group's kind.
///
/// Call [`clear_messages`] first; this only adds.
pub fn render_messages<D: DomAccess + ?Sized>(
    dom: &mut D,
    form: NodeId,
    groups: &[(MessageKind, &[Message])],
    config: &AjaxConfig,
) -> Result<()> {
    let mut markup = String::new();
    for (kind, messages) in groups {
        if *kind == MessageKind::Preview {
            return Err(Error::Runtime(
                "preview fragments are rendered with render_preview".into(),
            ));
        }
        for message in messages.iter() {
            mark_field(dom, form, message, *kind)?;
        }
        markup.push_str(&message_block_html(*kind, messages, config));
    }
    if !markup.is_empty() {
        dom.mutate(form, DomOp::PrependHtml(markup))?;
    }
    Ok(())
}

/// Prepends a preview block holding `fragment` to `form`.
pub fn render_preview<D: DomAccess + ?Sized>(
    dom: &mut D,
    form: NodeId,
    fragment: &str,
    config: &AjaxConfig,
) -> Result<()> {
    let markup = format!(
        "<div class=\"{}\">{fragment}</div>",
        escape_html_attr_for_serialization(&config.preview_class)
    );
    dom.mutate(form, DomOp::PrependHtml(markup))
}

fn mark_field<D: DomAccess + ?Sized>(
    dom: &mut D,
    form: NodeId,
    message: &Message,
    kind: MessageKind,
) -> Result<()> {
    let Some(field_id) = message.field_id.as_deref() else {
        return Ok(());
    };
    let Some(field) = dom
        .find_within(form, &id_attr_selector(field_id))?
        .into_iter()
        .next()
    else {
        return Ok(());
    };
    dom.mutate(field, DomOp::AddClass(kind.as_class().to_string()))?;
    if message.required {
        dom.mutate(field, DomOp::AddClass("required".to_string()))?;
    }
    Ok(())
}

fn message_block_html(kind: MessageKind, messages: &[Message], config: &AjaxConfig) -> String {
    let mut out = format!(
        "<div class=\"{} {}\"><ul>",
        escape_html_attr_for_serialization(&config.messages_class),
        kind.as_class()
    );
    for message in messages {
        out.push_str("<li>");
        out.push_str(&message.text);
        out.push_str("</li>");
    }
    out.push_str("</ul></div>");
    out
}
