impl Page {
    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace.logs.drain(..).collect()
    }

    pub fn set_trace(&mut self, enabled: bool) {
        self.trace.enabled = enabled;
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace.to_stderr = enabled;
    }

    pub fn set_trace_submits(&mut self, enabled: bool) {
        self.trace.submits = enabled;
    }

    pub fn set_trace_responses(&mut self, enabled: bool) {
        self.trace.responses = enabled;
    }

    pub fn set_trace_timers(&mut self, enabled: bool) {
        self.trace.timers = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::Runtime(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace.log_limit = max_entries;
        while self.trace.logs.len() > self.trace.log_limit {
            self.trace.logs.pop_front();
        }
        Ok(())
    }

    pub(crate) fn trace_submit_line(&mut self, line: String) {
        if self.trace.submits {
            self.trace.push(line);
        }
    }

    pub(crate) fn trace_response_line(&mut self, line: String) {
        if self.trace.responses {
            self.trace.push(line);
        }
    }

    pub(crate) fn trace_timer_line(&mut self, line: String) {
        if self.trace.timers {
            self.trace.push(line);
        }
    }

    pub(crate) fn node_label(&self, node: NodeId) -> String {
        if node == self.dom.root {
            return "#document".to_string();
        }
        let Some(tag) = self.dom.tag_name(node) else {
            return "#text".to_string();
        };
        match self.dom.attr(node, "id").filter(|id| !id.is_empty()) {
            Some(id) => format!("{tag}#{id}"),
            None => tag.to_string(),
        }
    }
}
