use super::*;

pub(crate) fn is_form_control(dom: &Dom, node_id: NodeId) -> bool {
    let Some(element) = dom.element(node_id) else {
        return false;
    };

    element.tag_name.eq_ignore_ascii_case("input")
        || element.tag_name.eq_ignore_ascii_case("select")
        || element.tag_name.eq_ignore_ascii_case("textarea")
        || element.tag_name.eq_ignore_ascii_case("button")
}

fn input_type(dom: &Dom, node_id: NodeId) -> String {
    dom.attr(node_id, "type")
        .unwrap_or_else(|| "text".to_string())
        .to_ascii_lowercase()
}

pub(crate) fn is_submit_control(dom: &Dom, node_id: NodeId) -> bool {
    let Some(element) = dom.element(node_id) else {
        return false;
    };

    if element.tag_name.eq_ignore_ascii_case("button") {
        return element
            .attrs
            .get("type")
            .map(|kind| kind.eq_ignore_ascii_case("submit"))
            .unwrap_or(true);
    }

    if element.tag_name.eq_ignore_ascii_case("input") {
        return matches!(input_type(dom, node_id).as_str(), "submit" | "image");
    }

    false
}

pub(crate) fn is_form_element(dom: &Dom, node_id: NodeId) -> bool {
    dom.tag_name(node_id)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("form"))
}

/// The form `node_id` belongs to: itself, the form named by its `form`
/// attribute, or its nearest form ancestor.
pub(crate) fn owning_form(dom: &Dom, node_id: NodeId) -> Option<NodeId> {
    if is_form_element(dom, node_id) {
        return Some(node_id);
    }
    if let Some(form_id) = dom.attr(node_id, "form") {
        return dom
            .by_id(&form_id)
            .filter(|owner| is_form_element(dom, *owner));
    }
    dom.find_ancestor_by_tag(node_id, "form")
}

pub(crate) fn form_elements(dom: &Dom, form: NodeId) -> Result<Vec<NodeId>> {
    if !is_form_element(dom, form) {
        return Err(Error::Runtime("elements target is not a form".into()));
    }
    let mut descendants = Vec::new();
    dom.collect_elements_descendants_dfs(form, &mut descendants);
    descendants.retain(|node| is_form_control(dom, *node));
    Ok(descendants)
}

fn is_successful_control(dom: &Dom, control: NodeId) -> Result<bool> {
    if dom.disabled(control) {
        return Ok(false);
    }
    if dom.attr(control, "name").unwrap_or_default().is_empty() {
        return Ok(false);
    }

    let tag = dom
        .tag_name(control)
        .ok_or_else(|| Error::Runtime("form control is not an element".into()))?;
    if tag.eq_ignore_ascii_case("button") {
        return Ok(false);
    }

    if tag.eq_ignore_ascii_case("input") {
        let kind = input_type(dom, control);
        if matches!(
            kind.as_str(),
            "button" | "submit" | "reset" | "file" | "image"
        ) {
            return Ok(false);
        }
        if kind == "checkbox" || kind == "radio" {
            return dom.checked(control);
        }
    }

    Ok(true)
}

/// Name/value pairs of the form's successful controls in document order.
///
/// Buttons never contribute. `skip` leaves out the trigger control, whose
/// pair the submission routine appends itself.
pub(crate) fn serialize_form(
    dom: &Dom,
    form: NodeId,
    skip: Option<NodeId>,
) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for control in form_elements(dom, form)? {
        if Some(control) == skip || !is_successful_control(dom, control)? {
            continue;
        }
        let name = dom.attr(control, "name").unwrap_or_default();

        if dom
            .tag_name(control)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("select"))
            && dom.attr(control, "multiple").is_some()
        {
            for option in selected_options(dom, control) {
                out.push((name.clone(), option));
            }
            continue;
        }

        out.push((name, dom.value(control)?));
    }
    Ok(out)
}

fn selected_options(dom: &Dom, select: NodeId) -> Vec<String> {
    let mut descendants = Vec::new();
    dom.collect_elements_descendants_dfs(select, &mut descendants);
    descendants
        .into_iter()
        .filter(|node| {
            dom.tag_name(*node)
                .is_some_and(|tag| tag.eq_ignore_ascii_case("option"))
                && dom.attr(*node, "selected").is_some()
                && !dom.disabled(*node)
        })
        .map(|option| {
            dom.attr(option, "value")
                .unwrap_or_else(|| dom.text_content(option).trim().to_string())
        })
        .collect()
}
