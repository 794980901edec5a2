use super::*;

/// Why a POST produced no usable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No route to the endpoint.
    Network(String),
    /// The endpoint answered outside the 2xx range.
    Status { code: u16, url: String },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network failure: {msg}"),
            Self::Status { code, url } => write!(f, "POST {url} answered with status {code}"),
        }
    }
}

impl StdError for TransportError {}

pub trait Transport {
    /// Sends `request` and returns the raw response body.
    fn post(&mut self, request: &SubmitRequest) -> std::result::Result<String, TransportError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MockReply {
    Body(String),
    Fail(TransportError),
}

/// Canned replies keyed by URL. Every call is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: HashMap<String, MockReply>,
    calls: Vec<SubmitRequest>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&mut self, url: &str, body: &str) {
        self.replies
            .insert(url.to_string(), MockReply::Body(body.to_string()));
    }

    pub fn set_failure(&mut self, url: &str, error: TransportError) {
        self.replies.insert(url.to_string(), MockReply::Fail(error));
    }

    pub fn clear(&mut self) {
        self.replies.clear();
    }

    pub fn take_calls(&mut self) -> Vec<SubmitRequest> {
        std::mem::take(&mut self.calls)
    }
}

impl Transport for MockTransport {
    fn post(&mut self, request: &SubmitRequest) -> std::result::Result<String, TransportError> {
        self.calls.push(request.clone());
        match self.replies.get(&request.url) {
            Some(MockReply::Body(body)) => Ok(body.clone()),
            Some(MockReply::Fail(error)) => Err(error.clone()),
            None => Err(TransportError::Network(format!(
                "no mock response for {}",
                request.url
            ))),
        }
    }
}
