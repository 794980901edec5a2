use super::*;
use fancy_regex::{Captures, Regex};

/// Supplies the user-facing strings ("Loading...", "Submission Complete").
pub trait Translator {
    /// Translates `text` and substitutes `args` into its placeholders.
    fn translate(&self, text: &str, args: &[(&str, &str)]) -> String;
}

/// String table with Drupal-style placeholders.
///
/// `@name` is inserted HTML-escaped, `%name` is escaped and wrapped in
/// `<em class="placeholder">`, and `!name` is inserted verbatim. Unknown
/// placeholders are left as written.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
    placeholder: Regex,
}

impl Catalog {
    pub fn new() -> Result<Self> {
        let placeholder = Regex::new(r"(?<![\w@%!])([@%!])([A-Za-z_][A-Za-z0-9_]*)")
            .map_err(|err| Error::Runtime(format!("invalid placeholder pattern: {err}")))?;
        Ok(Self {
            entries: HashMap::new(),
            placeholder,
        })
    }

    pub fn with_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut catalog = Self::new()?;
        for (source, translated) in entries {
            catalog.insert(source, translated);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, source: impl Into<String>, translated: impl Into<String>) {
        self.entries.insert(source.into(), translated.into());
    }

    fn format(&self, template: &str, args: &[(&str, &str)]) -> String {
        if args.is_empty() {
            return template.to_string();
        }
        self.placeholder
            .replace_all(template, |caps: &Captures<'_>| {
                let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                let sigil = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                let name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
                let Some((_, value)) = args
                    .iter()
                    .find(|(key, _)| key.strip_prefix(sigil) == Some(name))
                else {
                    return whole.to_string();
                };
                match sigil {
                    "@" => escape_html_attr_for_serialization(value),
                    "%" => format!(
                        "<em class=\"placeholder\">{}</em>",
                        escape_html_attr_for_serialization(value)
                    ),
                    _ => (*value).to_string(),
                }
            })
            .into_owned()
    }
}

impl Translator for Catalog {
    fn translate(&self, text: &str, args: &[(&str, &str)]) -> String {
        let template = self.entries.get(text).map(String::as_str).unwrap_or(text);
        self.format(template, args)
    }
}
