use std::collections::{HashMap, HashSet, VecDeque};
use std::error::Error as StdError;
use std::fmt;

mod config;
mod core_dom_utils;
mod core_impl;
mod runtime_state;
mod selector;

pub use config::AjaxConfig;
pub use core_impl::{
    Catalog, DomAccess, DomOp, Message, MessageKind, MockTransport, Page, RequestId,
    RichTextEditor, ScrollHandle, ServerResponse, SubmitOutcome, SubmitRequest, Translator,
    Transport, TransportError, UpdateInstruction, UpdateKind, apply_updates, clear_messages,
    render_messages, render_preview,
};
pub use runtime_state::{Navigation, PendingTimer};

pub(crate) use core_dom_utils::*;
pub(crate) use runtime_state::*;
pub(crate) use selector::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    SelectorNotFound(String),
    UnsupportedSelector(String),
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
    Runtime(String),
    Transport(TransportError),
    Response(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::SelectorNotFound(selector) => write!(f, "selector not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::TypeMismatch {
                selector,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for {selector}: expected {expected}, actual {actual}"
            ),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
            Self::Runtime(msg) => write!(f, "runtime error: {msg}"),
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::Response(msg) => write!(f, "malformed response: {msg}"),
            Self::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl StdError for Error {}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

/// Handle to a node in a [`Dom`] arena. Handles stay valid after the node is
/// detached; a detached node simply no longer matches document queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: HashMap<String, String>,
    pub(crate) value: String,
    pub(crate) checked: bool,
    pub(crate) disabled: bool,
    pub(crate) scroll_top: i64,
}

/// In-memory document tree the submission helper reads and patches.
#[derive(Debug, Clone)]
pub struct Dom {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) id_index: HashMap<String, Vec<NodeId>>,
    pub(crate) viewport_scroll_y: i64,
}


#[cfg(test)]
mod tests;
