use super::*;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Styling and placement of a rendered message block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Error,
    Status,
    Warning,
    Preview,
}

impl MessageKind {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Status => "status",
            Self::Warning => "warning",
            Self::Preview => "preview",
        }
    }
}

/// A server message. `text` is markup and is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub field_id: Option<String>,
    pub text: String,
    pub required: bool,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            field_id: None,
            text: text.into(),
            required: false,
        }
    }

    pub fn for_field(field_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field_id: Some(field_id.into()),
            text: text.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    ReplaceInner(String),
    ReplaceOuter(String),
    SetValue(String),
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInstruction {
    pub selector: String,
    pub kind: UpdateKind,
}

impl UpdateInstruction {
    pub fn new(selector: impl Into<String>, kind: UpdateKind) -> Self {
        Self {
            selector: selector.into(),
            kind,
        }
    }
}

/// A validated server reply. Exactly one branch is handled per response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerResponse {
    Failure {
        updates: Vec<UpdateInstruction>,
        errors: Vec<Message>,
    },
    Preview {
        updates: Vec<UpdateInstruction>,
        /// Already percent-decoded markup.
        fragment: String,
    },
    Messages {
        status: Vec<Message>,
        warning: Vec<Message>,
    },
    Complete,
    Redirect {
        url: String,
    },
}

impl ServerResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        let wire: WireResponse =
            serde_json::from_str(body).map_err(|err| Error::Response(err.to_string()))?;
        Self::from_wire(wire)
    }

    pub fn branch_name(&self) -> &'static str {
        match self {
            Self::Failure { .. } => "failure",
            Self::Preview { .. } => "preview",
            Self::Messages { .. } => "messages",
            Self::Complete => "complete",
            Self::Redirect { .. } => "redirect",
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    status: bool,
    #[serde(default)]
    preview: Option<String>,
    #[serde(default)]
    redirect: Option<String>,
    #[serde(default)]
    messages_status: Option<Vec<WireMessage>>,
    #[serde(default)]
    messages_warning: Option<Vec<WireMessage>>,
    #[serde(default)]
    messages_error: Option<Vec<WireMessage>>,
    #[serde(default)]
    updaters: Option<Vec<WireUpdater>>,
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    #[serde(default)]
    id: Option<JsonValue>,
    value: String,
    #[serde(default)]
    required: Option<JsonValue>,
}

#[derive(Debug, Deserialize)]
struct WireUpdater {
    selector: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Option<JsonValue>,
}

impl ServerResponse {
    fn from_wire(wire: WireResponse) -> Result<Self> {
        let updates = wire
            .updaters
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, updater)| parse_updater(index, updater))
            .collect::<Result<Vec<_>>>()?;

        if !wire.status {
            return Ok(Self::Failure {
                updates,
                errors: parse_messages("messages_error", wire.messages_error)?,
            });
        }

        if let Some(preview) = wire.preview {
            let fragment = urlencoding::decode(&preview)
                .map_err(|err| Error::Response(format!("preview is not decodable: {err}")))?
                .into_owned();
            return Ok(Self::Preview { updates, fragment });
        }

        if let Some(url) = wire.redirect {
            return Ok(Self::Redirect { url });
        }

        let status = parse_messages("messages_status", wire.messages_status)?;
        let warning = parse_messages("messages_warning", wire.messages_warning)?;
        if status.is_empty() && warning.is_empty() {
            return Ok(Self::Complete);
        }
        Ok(Self::Messages { status, warning })
    }
}

fn parse_updater(index: usize, updater: WireUpdater) -> Result<UpdateInstruction> {
    let value = match updater.value {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(value)) => Some(value),
        Some(JsonValue::Number(value)) => Some(value.to_string()),
        Some(JsonValue::Bool(value)) => Some(value.to_string()),
        Some(other) => {
            return Err(Error::Response(format!(
                "updaters[{index}].value must be a string, got {other}"
            )));
        }
    };
    let require_value = |kind: &str| {
        value.clone().ok_or_else(|| {
            Error::Response(format!("updaters[{index}] of type {kind} requires a value"))
        })
    };

    let kind = match updater.kind.as_str() {
        "html_in" => UpdateKind::ReplaceInner(require_value("html_in")?),
        "html_out" => UpdateKind::ReplaceOuter(require_value("html_out")?),
        "field" => UpdateKind::SetValue(require_value("field")?),
        "remove" => UpdateKind::Remove,
        other => {
            return Err(Error::Response(format!(
                "updaters[{index}] has unknown type {other:?}"
            )));
        }
    };
    Ok(UpdateInstruction {
        selector: updater.selector,
        kind,
    })
}

fn parse_messages(list: &str, messages: Option<Vec<WireMessage>>) -> Result<Vec<Message>> {
    messages
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, message)| {
            let field_id = match message.id {
                None | Some(JsonValue::Null) => None,
                Some(JsonValue::String(id)) => Some(id),
                Some(JsonValue::Number(id)) => Some(id.to_string()),
                Some(other) => {
                    return Err(Error::Response(format!(
                        "{list}[{index}].id must be a string or number, got {other}"
                    )));
                }
            }
            .filter(|id| !id.is_empty());

            let required = match message.required {
                None | Some(JsonValue::Null) => false,
                Some(JsonValue::Bool(flag)) => flag,
                Some(JsonValue::Number(flag)) => flag.as_f64().is_some_and(|n| n != 0.0),
                Some(other) => {
                    return Err(Error::Response(format!(
                        "{list}[{index}].required must be a boolean, got {other}"
                    )));
                }
            };

            Ok(Message {
                field_id,
                text: message.value,
                required,
            })
        })
        .collect()
}
