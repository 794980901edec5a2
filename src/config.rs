use super::*;
use serde::Deserialize;

/// Markup contract and timing knobs for [`Page`].
///
/// Every field has a default matching the conventional markup
/// (`ajax-form`, `ajax-trigger`, `#edit-submit`, `#TB_window`), so a JSON
/// settings blob only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AjaxConfig {
    pub form_class: String,
    pub trigger_class: String,
    pub default_submit_id: String,
    pub modal_id: String,
    pub preview_class: String,
    pub messages_class: String,
    pub marker_field: String,
    pub scroll_step: i64,
    pub scroll_interval_ms: i64,
    /// When false the per-form gate never closes, so overlapping submissions
    /// of the same form are all sent.
    pub single_flight: bool,
    pub timer_step_limit: usize,
}

impl Default for AjaxConfig {
    fn default() -> Self {
        Self {
            form_class: "ajax-form".to_string(),
            trigger_class: "ajax-trigger".to_string(),
            default_submit_id: "edit-submit".to_string(),
            modal_id: "TB_window".to_string(),
            preview_class: "ajax-preview".to_string(),
            messages_class: "messages".to_string(),
            marker_field: "ajax".to_string(),
            scroll_step: 100,
            scroll_interval_ms: 100,
            single_flight: true,
            timer_step_limit: 10_000,
        }
    }
}

impl AjaxConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let names = [
            ("form_class", &self.form_class),
            ("trigger_class", &self.trigger_class),
            ("default_submit_id", &self.default_submit_id),
            ("modal_id", &self.modal_id),
            ("preview_class", &self.preview_class),
            ("messages_class", &self.messages_class),
            ("marker_field", &self.marker_field),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{key} must not be empty")));
            }
            if key != "marker_field" && value.chars().any(|ch| ch.is_whitespace()) {
                return Err(Error::Config(format!(
                    "{key} must be a single token: {value:?}"
                )));
            }
        }
        if self.scroll_step <= 0 {
            return Err(Error::Config("scroll_step must be positive".into()));
        }
        if self.scroll_interval_ms <= 0 {
            return Err(Error::Config("scroll_interval_ms must be positive".into()));
        }
        if self.timer_step_limit == 0 {
            return Err(Error::Config(
                "timer_step_limit requires at least 1 step".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn form_selector(&self) -> String {
        class_attr_selector(&self.form_class)
    }

    pub(crate) fn trigger_selector(&self) -> String {
        class_attr_selector(&self.trigger_class)
    }

    pub(crate) fn default_submit_selector(&self) -> String {
        id_attr_selector(&self.default_submit_id)
    }

    pub(crate) fn cleanup_selector(&self) -> String {
        format!(
            "{}, {}",
            class_attr_selector(&self.messages_class),
            class_attr_selector(&self.preview_class)
        )
    }
}
