use super::*;

mod dom;
mod dom_access;
mod form_controls;
mod html;
mod i18n;
mod messages;
mod page;
mod patcher;
mod response;
mod submission;
mod transport;

pub use dom_access::{DomAccess, DomOp};
pub use i18n::{Catalog, Translator};
pub use messages::{clear_messages, render_messages, render_preview};
pub use page::{Page, RichTextEditor, ScrollHandle};
pub use patcher::apply_updates;
pub use response::{Message, MessageKind, ServerResponse, UpdateInstruction, UpdateKind};
pub use submission::{RequestId, SubmitOutcome, SubmitRequest};
pub use transport::{MockTransport, Transport, TransportError};

pub(crate) use form_controls::{is_submit_control, owning_form, serialize_form};
pub(crate) use submission::build_payload;
