impl Page {
    /// Starts a scroll-to-top animation from the first element matching
    /// `selector`.
    pub fn start_scroll(&mut self, selector: &str) -> Result<ScrollHandle> {
        let target = self.select_one(selector)?;
        let form = owning_form(&self.dom, target);
        self.start_scroll_for(target, form)
    }

    /// Stops an animation. Returns false when it had already finished.
    pub fn cancel_scroll(&mut self, handle: ScrollHandle) -> bool {
        let Some(animation) = self.scroll.animations.remove(&handle) else {
            return false;
        };
        self.scheduler.clear(animation.timer_id);
        self.trace_timer_line(format!(
            "[scroll] cancel handle={} timer={}",
            handle.0, animation.timer_id
        ));
        true
    }

    pub fn is_scrolling(&self, handle: ScrollHandle) -> bool {
        self.scroll.animations.contains_key(&handle)
    }

    pub fn scroll_top(&self, selector: &str) -> Result<i64> {
        let target = self.select_one(selector)?;
        Ok(self.dom.scroll_top(target))
    }

    pub fn set_scroll_top(&mut self, selector: &str, offset: i64) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dom.set_scroll_top(target, offset)
    }

    pub fn viewport_scroll_y(&self) -> i64 {
        self.dom.viewport_scroll_y
    }

    pub fn set_viewport_scroll_y(&mut self, offset: i64) {
        self.dom.viewport_scroll_y = offset.max(0);
    }

    /// A newer animation for the same form replaces the older one.
    pub(crate) fn start_scroll_for(
        &mut self,
        target: NodeId,
        form: Option<NodeId>,
    ) -> Result<ScrollHandle> {
        if let Some(form) = form {
            let superseded = self
                .scroll
                .animations
                .iter()
                .filter(|(_, animation)| animation.form == Some(form))
                .map(|(handle, _)| *handle)
                .collect::<Vec<_>>();
            for handle in superseded {
                self.cancel_scroll(handle);
            }
        }

        self.scroll.next_handle += 1;
        let handle = ScrollHandle(self.scroll.next_handle);
        let timer_id = self
            .scheduler
            .schedule_interval(self.config.scroll_interval_ms, TimerTask::ScrollStep(handle));
        self.scroll.animations.insert(
            handle,
            ScrollAnimation {
                target,
                form,
                timer_id,
            },
        );
        self.trace_timer_line(format!(
            "[scroll] start handle={} target={} timer={timer_id}",
            handle.0,
            self.node_label(target)
        ));
        Ok(handle)
    }

    /// One animation frame. Returns whether the animation keeps running.
    pub(crate) fn scroll_step(&mut self, handle: ScrollHandle) -> Result<bool> {
        let Some(target) = self
            .scroll
            .animations
            .get(&handle)
            .map(|animation| animation.target)
        else {
            return Ok(false);
        };

        let step = self.config.scroll_step;
        let mut scrolled = 0usize;
        let mut cursor = target;
        while !self.is_modal_container(cursor) {
            let Some(parent) = self.dom.parent(cursor) else {
                break;
            };
            cursor = parent;
            let offset = self.dom.scroll_top(cursor);
            if offset > 0 {
                self.dom.set_scroll_top(cursor, offset - step)?;
                scrolled += 1;
            }
        }

        if scrolled == 0 {
            if let Some(animation) = self.scroll.animations.remove(&handle) {
                self.scheduler.clear(animation.timer_id);
            }
            self.trace_timer_line(format!("[scroll] done handle={}", handle.0));
            return Ok(false);
        }
        self.trace_timer_line(format!(
            "[scroll] step handle={} containers={scrolled}",
            handle.0
        ));
        Ok(true)
    }

    fn is_modal_container(&self, node: NodeId) -> bool {
        self.dom
            .attr(node, "id")
            .is_some_and(|id| id == self.config.modal_id)
    }
}
