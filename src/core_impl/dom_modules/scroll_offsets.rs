impl Dom {
    /// Vertical scroll offset of an element, or of the viewport for the
    /// document root.
    pub(crate) fn scroll_top(&self, node_id: NodeId) -> i64 {
        if node_id == self.root {
            return self.viewport_scroll_y;
        }
        self.element(node_id)
            .map(|element| element.scroll_top)
            .unwrap_or(0)
    }

    pub(crate) fn set_scroll_top(&mut self, node_id: NodeId, offset: i64) -> Result<()> {
        let offset = offset.max(0);
        if node_id == self.root {
            self.viewport_scroll_y = offset;
            return Ok(());
        }
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::Runtime("scrollTop target is not an element".into()))?;
        element.scroll_top = offset;
        Ok(())
    }
}
