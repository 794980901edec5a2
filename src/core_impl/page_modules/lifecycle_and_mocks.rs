impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::with_config(html, AjaxConfig::default())
    }

    pub fn with_config(html: &str, config: AjaxConfig) -> Result<Self> {
        config.validate()?;
        let dom = Dom::parse(html)?;
        let mut page = Self {
            dom,
            scheduler: SchedulerState::with_step_limit(config.timer_step_limit),
            config,
            registry: FormRegistry::default(),
            scroll: ScrollState::default(),
            requests: RequestQueue::default(),
            mock_transport: MockTransport::new(),
            transport: None,
            translator: Box::new(Catalog::new()?),
            editor: None,
            trace: TraceState::default(),
            url: "http://localhost/".to_string(),
            navigations: Vec::new(),
        };
        let root = page.dom.root;
        page.attach_behaviors_within(root)?;
        Ok(page)
    }

    pub fn config(&self) -> &AjaxConfig {
        &self.config
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sets the page URL, used as the POST target for forms without an
    /// `action` and as the origin of recorded navigations.
    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    pub fn set_translator(&mut self, translator: Box<dyn Translator>) {
        self.translator = translator;
    }

    pub fn set_rich_text_editor(&mut self, editor: Box<dyn RichTextEditor>) {
        self.editor = Some(editor);
    }

    /// Routes requests through `transport` instead of the built-in mocks.
    pub fn set_transport(&mut self, transport: Box<dyn Transport>) {
        self.transport = Some(transport);
    }

    pub fn set_response_mock(&mut self, url: &str, body: &str) {
        self.mock_transport.set_response(url, body);
    }

    pub fn set_transport_failure(&mut self, url: &str, error: TransportError) {
        self.mock_transport.set_failure(url, error);
    }

    pub fn clear_response_mocks(&mut self) {
        self.mock_transport.clear();
    }

    /// Requests the built-in mock transport has sent so far.
    pub fn take_sent_requests(&mut self) -> Vec<SubmitRequest> {
        self.mock_transport.take_calls()
    }

    pub fn take_navigations(&mut self) -> Vec<Navigation> {
        std::mem::take(&mut self.navigations)
    }

    /// Replaces the children of the first match with `html`, as a host page
    /// does when it loads content into a container. Call
    /// [`Page::attach_behaviors`] afterwards to bind forms in the new content.
    pub fn set_inner_html(&mut self, selector: &str, html: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dom.set_inner_html(target, html)
    }

    fn post(&mut self, request: &SubmitRequest) -> std::result::Result<String, TransportError> {
        match self.transport.as_mut() {
            Some(transport) => transport.post(request),
            None => self.mock_transport.post(request),
        }
    }
}
