impl Page {
    pub(crate) fn submit_form(&mut self, form: NodeId) -> Result<SubmitOutcome> {
        let Some(registration) = self.registry.get(form) else {
            self.trace_submit_line(format!(
                "[submit] form={} native=true",
                self.node_label(form)
            ));
            return Ok(SubmitOutcome::Native);
        };
        if registration.in_flight && self.config.single_flight {
            self.trace_submit_line(format!(
                "[submit] form={} suppressed=in_flight",
                self.node_label(form)
            ));
            return Ok(SubmitOutcome::Suppressed);
        }

        let trigger = self.resolve_trigger(form)?;
        if let Some(editor) = self.editor.as_mut() {
            editor.trigger_save(&mut self.dom)?;
        }

        let original_value = self.dom.value(trigger)?;
        let fields = build_payload(
            &self.dom,
            form,
            trigger,
            &original_value,
            &self.config.marker_field,
        )?;
        let loading = self.translator.translate("Loading...", &[]);
        self.dom.set_value(trigger, &loading)?;

        let url = self
            .dom
            .attr(form, "action")
            .filter(|action| !action.is_empty())
            .unwrap_or_else(|| self.url.clone());

        if let Some(registration) = self.registry.get_mut(form) {
            registration.trigger = None;
            registration.in_flight = self.config.single_flight;
        }

        let id = self.requests.allocate_id();
        self.trace_submit_line(format!(
            "[submit] id={id} form={} trigger={} url={url} fields={}",
            self.node_label(form),
            self.node_label(trigger),
            fields.len()
        ));
        self.requests.pending.push_back(SubmitRequest {
            id,
            form,
            trigger,
            original_value,
            url,
            fields,
        });
        Ok(SubmitOutcome::Sent(id))
    }

    /// Requests queued and not yet completed, oldest first.
    pub fn pending_requests(&self) -> Vec<SubmitRequest> {
        self.requests.pending.iter().cloned().collect()
    }

    /// Sends every queued request through the transport, oldest first, and
    /// handles each reply. Stops at the first failed request, leaving later
    /// ones queued. Returns how many requests were completed.
    pub fn settle_requests(&mut self) -> Result<usize> {
        let mut settled = 0usize;
        while let Some(request) = self.requests.pending.pop_front() {
            let reply = self.post(&request);
            settled += 1;
            stacker::grow(32 * 1024 * 1024, || self.finish_request(request, reply))?;
        }
        Ok(settled)
    }

    /// Completes a queued request with `body`, regardless of queue order.
    pub fn complete_request(&mut self, id: RequestId, body: &str) -> Result<()> {
        let request = self
            .requests
            .take(id)
            .ok_or_else(|| Error::Runtime(format!("no pending request {id}")))?;
        stacker::grow(32 * 1024 * 1024, || {
            self.finish_request(request, Ok(body.to_string()))
        })
    }

    /// Completes a queued request with a transport failure.
    pub fn fail_request(&mut self, id: RequestId, error: TransportError) -> Result<()> {
        let request = self
            .requests
            .take(id)
            .ok_or_else(|| Error::Runtime(format!("no pending request {id}")))?;
        self.finish_request(request, Err(error))
    }

    fn finish_request(
        &mut self,
        request: SubmitRequest,
        reply: std::result::Result<String, TransportError>,
    ) -> Result<()> {
        self.dom
            .set_value(request.trigger, &request.original_value)?;
        if let Some(registration) = self.registry.get_mut(request.form) {
            registration.in_flight = false;
        }

        let body = match reply {
            Ok(body) => body,
            Err(err) => {
                log::warn!(target: "ajax_form", "request {} to {} failed: {err}", request.id, request.url);
                self.trace_response_line(format!(
                    "[response] id={} transport_error={err}",
                    request.id
                ));
                return Err(Error::Transport(err));
            }
        };

        let response = match ServerResponse::from_json(&body) {
            Ok(response) => response,
            Err(err) => {
                log::warn!(target: "ajax_form", "request {} to {} returned an unusable body: {err}", request.id, request.url);
                self.trace_response_line(format!(
                    "[response] id={} rejected={err}",
                    request.id
                ));
                return Err(err);
            }
        };

        self.trace_response_line(format!(
            "[response] id={} branch={}",
            request.id,
            response.branch_name()
        ));
        self.dispatch_response(request.form, request.trigger, response)
    }
}
