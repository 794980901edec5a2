use super::*;

/// One mutation applied to a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOp {
    SetInnerHtml(String),
    ReplaceOuterHtml(String),
    SetValue(String),
    Remove,
    AddClass(String),
    RemoveClass(String),
    /// Parse the markup and insert it before the element's first child.
    PrependHtml(String),
}

/// The document capability the patcher and message renderer work through.
///
/// [`Dom`] is the production implementation; tests substitute recording
/// doubles.
pub trait DomAccess {
    /// Connected elements matching `selector`, in document order.
    fn find(&self, selector: &str) -> Result<Vec<NodeId>>;

    /// Descendants of `scope` matching `selector`, in document order.
    fn find_within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>>;

    fn mutate(&mut self, node: NodeId, op: DomOp) -> Result<()>;
}

impl DomAccess for Dom {
    fn find(&self, selector: &str) -> Result<Vec<NodeId>> {
        self.query_selector_all(selector)
    }

    fn find_within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        self.query_selector_all_from(scope, selector)
    }

    fn mutate(&mut self, node: NodeId, op: DomOp) -> Result<()> {
        match op {
            DomOp::SetInnerHtml(html) => self.set_inner_html(node, &html),
            // A target already detached by an earlier replacement stays out.
            DomOp::ReplaceOuterHtml(_) if !self.is_connected(node) => Ok(()),
            DomOp::ReplaceOuterHtml(html) => self.set_outer_html(node, &html).map(|_| ()),
            DomOp::SetValue(value) => self.set_value(node, &value),
            DomOp::Remove => self.remove_node(node),
            DomOp::AddClass(class_name) => self.class_add(node, &class_name),
            DomOp::RemoveClass(class_name) => self.class_remove(node, &class_name),
            DomOp::PrependHtml(html) => self.prepend_html(node, &html).map(|_| ()),
        }
    }
}
