use super::*;

/// Flushes a rich-text editor's pending content into its backing field
/// before the form is serialized.
pub trait RichTextEditor {
    fn trigger_save(&mut self, dom: &mut Dom) -> Result<()>;
}

/// Handle to a running scroll-to-top animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScrollHandle(u64);

/// A page with ajax form behaviors attached.
///
/// `Page` owns the document, the per-form registrations, the request queue
/// and a virtual clock. Nothing runs on its own: requests complete when the
/// caller settles them and timers fire when the clock is advanced.
///
/// Behaviors are attached to the whole document on load, the way a host
/// page runs its ready handler.
///
/// ```
/// use ajax_form::{Page, SubmitOutcome};
///
/// # fn main() -> ajax_form::Result<()> {
/// let mut page = Page::from_html(
///     r#"<form class="ajax-form" action="/save">
///          <input name="title" value="Hi">
///          <input type="submit" id="edit-submit" name="op" value="Save">
///        </form>"#,
/// )?;
/// page.set_response_mock("/save", r#"{"status":true}"#);
///
/// assert!(matches!(page.submit("form")?, SubmitOutcome::Sent(_)));
/// page.settle_requests()?;
/// page.assert_text(".messages.status li", "Submission Complete")?;
/// # Ok(())
/// # }
/// ```
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) config: AjaxConfig,
    pub(crate) registry: FormRegistry,
    pub(crate) scheduler: SchedulerState,
    pub(crate) scroll: ScrollState,
    pub(crate) requests: RequestQueue,
    pub(crate) mock_transport: MockTransport,
    pub(crate) transport: Option<Box<dyn Transport>>,
    pub(crate) translator: Box<dyn Translator>,
    pub(crate) editor: Option<Box<dyn RichTextEditor>>,
    pub(crate) trace: TraceState,
    pub(crate) url: String,
    pub(crate) navigations: Vec<Navigation>,
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url)
            .field("forms", &self.registry.forms.len())
            .field("pending_requests", &self.requests.pending.len())
            .field("now_ms", &self.scheduler.now_ms)
            .finish_non_exhaustive()
    }
}

include!("page_modules/lifecycle_and_mocks.rs");
include!("page_modules/interceptor.rs");
include!("page_modules/submission_cycle.rs");
include!("page_modules/response_dispatch.rs");
include!("page_modules/auto_scroll.rs");
include!("page_modules/timer_controls.rs");
include!("page_modules/assertions.rs");
include!("page_modules/trace.rs");
