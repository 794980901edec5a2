impl Dom {
    pub(crate) fn can_have_children(&self, node_id: NodeId) -> bool {
        match self.nodes.get(node_id.0).map(|node| &node.node_type) {
            Some(NodeType::Document) => true,
            Some(NodeType::Element(element)) => !is_void_tag(&element.tag_name),
            Some(NodeType::Text(_)) | None => false,
        }
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = None;
    }

    /// Detaches `node` from its parent. Detached nodes are a no-op.
    pub(crate) fn remove_node(&mut self, node: NodeId) -> Result<()> {
        if node == self.root {
            return Err(Error::Runtime("cannot remove document root".into()));
        }
        if self.parent(node).is_none() {
            return Ok(());
        }
        self.detach(node);
        self.rebuild_id_index();
        Ok(())
    }
}
