impl Dom {
    /// Markup for `node_id` and its subtree. Attributes are written in name
    /// order so dumps compare stably.
    pub(crate) fn serialize_node(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node_id, &mut out);
        out
    }

    pub(crate) fn serialize_children(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        for child in &self.nodes[node_id.0].children {
            self.write_node(*child, &mut out);
        }
        out
    }

    fn write_node(&self, node_id: NodeId, out: &mut String) {
        let element = match &self.nodes[node_id.0].node_type {
            NodeType::Document => {
                for child in &self.nodes[node_id.0].children {
                    self.write_node(*child, out);
                }
                return;
            }
            NodeType::Text(text) => {
                out.push_str(&escape_html_text_for_serialization(text));
                return;
            }
            NodeType::Element(element) => element,
        };

        let tag = element.tag_name.as_str();
        out.push('<');
        out.push_str(tag);
        let mut names = element.attrs.keys().collect::<Vec<_>>();
        names.sort();
        for name in names {
            let value = &element.attrs[name];
            out.push_str(&format!(
                " {name}=\"{}\"",
                escape_html_attr_for_serialization(value)
            ));
        }
        out.push('>');
        if is_void_tag(tag) {
            return;
        }

        let keeps_raw_text = matches!(tag.to_ascii_lowercase().as_str(), "script" | "style");
        for child in &self.nodes[node_id.0].children {
            match &self.nodes[child.0].node_type {
                NodeType::Text(text) if keeps_raw_text => out.push_str(text),
                _ => self.write_node(*child, out),
            }
        }
        out.push_str(&format!("</{tag}>"));
    }

    pub(crate) fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.serialize_node(node_id), DEFAULT_SNIPPET_CHARS)
    }
}
