use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub(crate) u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a submit action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was queued.
    Sent(RequestId),
    /// The form's gate was closed; nothing was queued and native submission
    /// stayed suppressed.
    Suppressed,
    /// The form is not registered, so the browser would submit it natively.
    Native,
}

/// One queued POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub id: RequestId,
    pub form: NodeId,
    pub trigger: NodeId,
    /// The trigger's value before it was replaced by the loading text.
    pub original_value: String,
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl SubmitRequest {
    pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

    pub fn accept(&self) -> &'static str {
        "application/json"
    }

    /// Urlencoded request body, pairs in payload order.
    pub fn body(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Builds the payload: successful controls, then the trigger pair, then the
/// marker pair. A form field named like the marker is dropped so the marker
/// appears once.
pub(crate) fn build_payload(
    dom: &Dom,
    form: NodeId,
    trigger: NodeId,
    trigger_value: &str,
    marker_field: &str,
) -> Result<Vec<(String, String)>> {
    let mut fields = serialize_form(dom, form, Some(trigger))?;
    fields.retain(|(name, _)| name != marker_field);
    let trigger_name = dom.attr(trigger, "name").unwrap_or_default();
    fields.push((trigger_name, trigger_value.to_string()));
    fields.push((marker_field.to_string(), "1".to_string()));
    Ok(fields)
}
