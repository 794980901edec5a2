impl Page {
    /// Binds every ajax form inside each element matching `context`.
    ///
    /// Safe to repeat over overlapping content: a form already bound keeps
    /// its gate state and only has its remembered trigger reset. Returns the
    /// number of forms found.
    pub fn attach_behaviors(&mut self, context: &str) -> Result<usize> {
        let contexts = self.dom.query_selector_all(context)?;
        if contexts.is_empty() {
            return Err(Error::SelectorNotFound(context.to_string()));
        }
        let mut found = 0usize;
        for context in contexts {
            found += self.attach_behaviors_within(context)?;
        }
        Ok(found)
    }

    pub(crate) fn attach_behaviors_within(&mut self, context: NodeId) -> Result<usize> {
        self.registry
            .forms
            .retain(|form, registration| self.dom.is_connected(*form) || registration.in_flight);

        let candidates = self
            .dom
            .query_selector_all_from(context, &self.config.form_selector())?;
        let mut found = 0usize;
        for form in candidates {
            if !self
                .dom
                .tag_name(form)
                .is_some_and(|tag| tag.eq_ignore_ascii_case("form"))
            {
                continue;
            }
            let registration = self.registry.forms.entry(form).or_default();
            registration.trigger = None;
            found += 1;
        }
        self.trace_submit_line(format!(
            "[attach] context={} forms={found} registered={}",
            self.node_label(context),
            self.registry.forms.len()
        ));
        Ok(found)
    }

    pub fn is_registered(&self, form_selector: &str) -> Result<bool> {
        let form = self.select_one(form_selector)?;
        Ok(self.registry.contains(form))
    }

    /// Whether the form's gate is closed by an unfinished request.
    pub fn is_submitting(&self, form_selector: &str) -> Result<bool> {
        let form = self.select_one(form_selector)?;
        Ok(self
            .registry
            .get(form)
            .is_some_and(|registration| registration.in_flight))
    }

    /// Clicks an element. An ajax trigger inside a bound form records itself
    /// as that form's trigger; a submit control then submits its form.
    pub fn click(&mut self, selector: &str) -> Result<Option<SubmitOutcome>> {
        let target = self.select_one(selector)?;
        stacker::grow(32 * 1024 * 1024, || self.click_node(target))
    }

    fn click_node(&mut self, target: NodeId) -> Result<Option<SubmitOutcome>> {
        if self.dom.disabled(target) {
            self.trace_submit_line(format!(
                "[click] target={} ignored=disabled",
                self.node_label(target)
            ));
            return Ok(None);
        }

        let form = owning_form(&self.dom, target);
        if let Some(form) = form {
            if self.registry.contains(form)
                && self.dom.matches_selector(target, &self.config.trigger_selector())?
            {
                if let Some(registration) = self.registry.get_mut(form) {
                    registration.trigger = Some(target);
                }
                self.trace_submit_line(format!(
                    "[click] trigger={} form={}",
                    self.node_label(target),
                    self.node_label(form)
                ));
            }
        }

        match form {
            Some(form) if is_submit_control(&self.dom, target) => {
                self.submit_form(form).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Submits the form matched by `selector`, or the form owning the
    /// matched control, as pressing Enter in it would.
    pub fn submit(&mut self, selector: &str) -> Result<SubmitOutcome> {
        let target = self.select_one(selector)?;
        let form = owning_form(&self.dom, target).ok_or_else(|| {
            Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "form or form control".into(),
                actual: self.node_label(target),
            }
        })?;
        stacker::grow(32 * 1024 * 1024, || self.submit_form(form))
    }

    /// The remembered trigger, or the form's default submit control.
    pub(crate) fn resolve_trigger(&self, form: NodeId) -> Result<NodeId> {
        let remembered = self
            .registry
            .get(form)
            .and_then(|registration| registration.trigger)
            .filter(|trigger| owning_form(&self.dom, *trigger) == Some(form));
        if let Some(trigger) = remembered {
            return Ok(trigger);
        }
        let fallback = self.config.default_submit_selector();
        self.dom
            .query_selector_all_from(form, &fallback)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::SelectorNotFound(format!("{fallback} in {}", self.node_label(form))))
    }
}
