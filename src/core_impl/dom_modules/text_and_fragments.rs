impl Dom {
    pub(crate) fn text_content(&self, node_id: NodeId) -> String {
        match &self.nodes[node_id.0].node_type {
            NodeType::Document | NodeType::Element(_) => {
                let mut out = String::new();
                for child in &self.nodes[node_id.0].children {
                    out.push_str(&self.text_content(*child));
                }
                out
            }
            NodeType::Text(text) => text.clone(),
        }
    }

    pub(crate) fn inner_html(&self, node_id: NodeId) -> Result<String> {
        if self.element(node_id).is_none() {
            return Err(Error::Runtime("innerHTML target is not an element".into()));
        }
        Ok(self.serialize_children(node_id))
    }

    pub(crate) fn outer_html(&self, node_id: NodeId) -> Result<String> {
        if self.element(node_id).is_none() {
            return Err(Error::Runtime("outerHTML target is not an element".into()));
        }
        Ok(self.serialize_node(node_id))
    }

    pub(crate) fn set_inner_html(&mut self, node_id: NodeId, html: &str) -> Result<()> {
        if self.element(node_id).is_none() {
            return Err(Error::Runtime("innerHTML target is not an element".into()));
        }
        let fragment = parse_html(html)?;

        let old_children = std::mem::take(&mut self.nodes[node_id.0].children);
        for child in old_children {
            self.nodes[child.0].parent = None;
        }

        let children = fragment.nodes[fragment.root.0].children.clone();
        for child in children {
            self.clone_subtree_from_dom(&fragment, child, Some(node_id))?;
        }

        if self
            .tag_name(node_id)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("textarea"))
        {
            let text = self.text_content(node_id);
            if let Some(element) = self.element_mut(node_id) {
                element.value = text;
            }
        }
        self.rebuild_id_index();
        Ok(())
    }

    /// Replaces `node_id` with the parsed fragment and returns the inserted
    /// top-level nodes.
    pub(crate) fn set_outer_html(&mut self, node_id: NodeId, html: &str) -> Result<Vec<NodeId>> {
        if self.element(node_id).is_none() {
            return Err(Error::Runtime("outerHTML target is not an element".into()));
        }
        let Some(parent) = self.parent(node_id) else {
            return Err(Error::Runtime("outerHTML target is detached".into()));
        };
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|id| *id == node_id)
            .ok_or_else(|| Error::Runtime("outerHTML target is detached".into()))?;

        let fragment = parse_html(html)?;

        self.nodes[parent.0].children.remove(index);
        self.nodes[node_id.0].parent = None;

        let inserted = self.insert_fragment(&fragment, parent, index)?;
        self.rebuild_id_index();
        Ok(inserted)
    }

    /// Inserts the parsed fragment before the first child of `parent`,
    /// keeping the fragment's own order.
    pub(crate) fn prepend_html(&mut self, parent: NodeId, html: &str) -> Result<Vec<NodeId>> {
        if !self.can_have_children(parent) {
            return Err(Error::Runtime("prepend target cannot have children".into()));
        }
        let fragment = parse_html(html)?;
        let inserted = self.insert_fragment(&fragment, parent, 0)?;
        self.rebuild_id_index();
        Ok(inserted)
    }

    fn insert_fragment(
        &mut self,
        fragment: &Dom,
        parent: NodeId,
        mut insert_at: usize,
    ) -> Result<Vec<NodeId>> {
        let mut inserted = Vec::new();
        let children = fragment.nodes[fragment.root.0].children.clone();
        for child in children {
            if let Some(cloned) = self.clone_subtree_from_dom(fragment, child, None)? {
                self.nodes[cloned.0].parent = Some(parent);
                self.nodes[parent.0].children.insert(insert_at, cloned);
                insert_at += 1;
                inserted.push(cloned);
            }
        }
        Ok(inserted)
    }

    pub(crate) fn clone_subtree_from_dom(
        &mut self,
        source: &Dom,
        source_node: NodeId,
        parent: Option<NodeId>,
    ) -> Result<Option<NodeId>> {
        let node_type = match &source.nodes[source_node.0].node_type {
            NodeType::Document => {
                return Err(Error::Runtime(
                    "cannot clone a document node into a fragment target".into(),
                ));
            }
            NodeType::Element(element) => {
                if should_strip_fragment_element(&element.tag_name) {
                    return Ok(None);
                }
                let mut clone = element.clone();
                sanitize_fragment_element_attrs(&mut clone);
                NodeType::Element(clone)
            }
            NodeType::Text(text) => NodeType::Text(text.clone()),
        };

        let node = self.create_node(parent, node_type);
        for child in &source.nodes[source_node.0].children {
            self.clone_subtree_from_dom(source, *child, Some(node))?;
        }
        Ok(Some(node))
    }
}
