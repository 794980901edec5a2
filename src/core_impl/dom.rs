use super::html::{is_void_tag, parse_html};
use super::*;

fn is_checkbox_or_radio_input_element(element: &Element) -> bool {
    if !element.tag_name.eq_ignore_ascii_case("input") {
        return false;
    }
    matches!(
        element
            .attrs
            .get("type")
            .map(|kind| kind.to_ascii_lowercase())
            .as_deref(),
        Some("checkbox") | Some("radio")
    )
}

include!("dom_modules/nodes_and_identity.rs");
include!("dom_modules/tree_mutation.rs");
include!("dom_modules/text_and_fragments.rs");
include!("dom_modules/form_values.rs");
include!("dom_modules/class_and_query.rs");
include!("dom_modules/selector_matching.rs");
include!("dom_modules/scroll_offsets.rs");
include!("dom_modules/dump.rs");
