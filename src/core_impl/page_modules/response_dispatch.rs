impl Page {
    /// Runs the single branch `response` selects, then starts the scroll on
    /// `trigger` for every branch that rendered something.
    pub(crate) fn dispatch_response(
        &mut self,
        form: NodeId,
        trigger: NodeId,
        response: ServerResponse,
    ) -> Result<()> {
        match response {
            ServerResponse::Failure { updates, errors } => {
                self.apply_update_list(&updates)?;
                clear_messages(&mut self.dom, form, &self.config)?;
                render_messages(
                    &mut self.dom,
                    form,
                    &[(MessageKind::Error, errors.as_slice())],
                    &self.config,
                )?;
            }
            ServerResponse::Preview { updates, fragment } => {
                self.apply_update_list(&updates)?;
                clear_messages(&mut self.dom, form, &self.config)?;
                render_preview(&mut self.dom, form, &fragment, &self.config)?;
            }
            ServerResponse::Messages { status, warning } => {
                // Each group is its own render, so a warning replaces the status.
                for (kind, messages) in [
                    (MessageKind::Status, status.as_slice()),
                    (MessageKind::Warning, warning.as_slice()),
                ] {
                    if messages.is_empty() {
                        continue;
                    }
                    clear_messages(&mut self.dom, form, &self.config)?;
                    render_messages(&mut self.dom, form, &[(kind, messages)], &self.config)?;
                }
            }
            ServerResponse::Complete => {
                let complete = [Message::new(
                    self.translator.translate("Submission Complete", &[]),
                )];
                clear_messages(&mut self.dom, form, &self.config)?;
                render_messages(
                    &mut self.dom,
                    form,
                    &[(MessageKind::Status, complete.as_slice())],
                    &self.config,
                )?;
            }
            ServerResponse::Redirect { url } => {
                self.trace_response_line(format!("[response] navigate from={} to={url}", self.url));
                self.navigations.push(Navigation {
                    from: std::mem::replace(&mut self.url, url.clone()),
                    to: url,
                });
                return Ok(());
            }
        }

        self.start_scroll_for(trigger, Some(form))?;
        Ok(())
    }

    fn apply_update_list(&mut self, updates: &[UpdateInstruction]) -> Result<()> {
        let applied = apply_updates(&mut self.dom, updates)?;
        self.trace_response_line(format!(
            "[response] updates={} mutations={applied}",
            updates.len()
        ));
        Ok(())
    }
}
