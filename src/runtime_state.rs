use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FormRegistration {
    pub(crate) trigger: Option<NodeId>,
    pub(crate) in_flight: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FormRegistry {
    pub(crate) forms: HashMap<NodeId, FormRegistration>,
}

impl FormRegistry {
    pub(crate) fn get(&self, form: NodeId) -> Option<&FormRegistration> {
        self.forms.get(&form)
    }

    pub(crate) fn get_mut(&mut self, form: NodeId) -> Option<&mut FormRegistration> {
        self.forms.get_mut(&form)
    }

    pub(crate) fn contains(&self, form: NodeId) -> bool {
        self.forms.contains_key(&form)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerTask {
    ScrollStep(ScrollHandle),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScheduledTask {
    pub(crate) id: i64,
    pub(crate) due_at: i64,
    pub(crate) order: i64,
    pub(crate) interval_ms: Option<i64>,
    pub(crate) task: TimerTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: i64,
    pub due_at: i64,
    pub order: i64,
    pub interval_ms: Option<i64>,
}

#[derive(Debug)]
pub(crate) struct SchedulerState {
    pub(crate) task_queue: Vec<ScheduledTask>,
    pub(crate) now_ms: i64,
    pub(crate) timer_step_limit: usize,
    pub(crate) next_timer_id: i64,
    pub(crate) next_task_order: i64,
}

impl SchedulerState {
    pub(crate) fn with_step_limit(timer_step_limit: usize) -> Self {
        Self {
            task_queue: Vec::new(),
            now_ms: 0,
            timer_step_limit,
            next_timer_id: 1,
            next_task_order: 0,
        }
    }

    pub(crate) fn schedule_interval(&mut self, interval_ms: i64, task: TimerTask) -> i64 {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        let order = self.next_task_order;
        self.next_task_order += 1;
        self.task_queue.push(ScheduledTask {
            id,
            due_at: self.now_ms.saturating_add(interval_ms),
            order,
            interval_ms: Some(interval_ms),
            task,
        });
        id
    }

    pub(crate) fn reschedule(&mut self, mut task: ScheduledTask) {
        let Some(interval_ms) = task.interval_ms else {
            return;
        };
        task.due_at = task.due_at.saturating_add(interval_ms.max(1));
        task.order = self.next_task_order;
        self.next_task_order += 1;
        self.task_queue.push(task);
    }

    pub(crate) fn clear(&mut self, timer_id: i64) -> bool {
        let before = self.task_queue.len();
        self.task_queue.retain(|task| task.id != timer_id);
        before != self.task_queue.len()
    }

    pub(crate) fn next_task_index(&self, due_limit: Option<i64>) -> Option<usize> {
        self.task_queue
            .iter()
            .enumerate()
            .filter(|(_, task)| due_limit.is_none_or(|limit| task.due_at <= limit))
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScrollAnimation {
    pub(crate) target: NodeId,
    pub(crate) form: Option<NodeId>,
    pub(crate) timer_id: i64,
}

#[derive(Debug, Default)]
pub(crate) struct ScrollState {
    pub(crate) animations: HashMap<ScrollHandle, ScrollAnimation>,
    pub(crate) next_handle: u64,
}

#[derive(Debug, Default)]
pub(crate) struct RequestQueue {
    pub(crate) pending: VecDeque<SubmitRequest>,
    pub(crate) next_id: u64,
}

impl RequestQueue {
    pub(crate) fn allocate_id(&mut self) -> RequestId {
        self.next_id += 1;
        RequestId(self.next_id)
    }

    pub(crate) fn take(&mut self, id: RequestId) -> Option<SubmitRequest> {
        let index = self.pending.iter().position(|request| request.id == id)?;
        self.pending.remove(index)
    }
}

/// A full-page navigation requested by a redirect response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub from: String,
    pub to: String,
}

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) submits: bool,
    pub(crate) responses: bool,
    pub(crate) timers: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
    pub(crate) to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: true,
            submits: true,
            responses: true,
            timers: false,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: false,
        }
    }
}

impl TraceState {
    pub(crate) fn push(&mut self, line: String) {
        log::debug!(target: "ajax_form", "{line}");
        if !self.enabled {
            return;
        }
        if self.to_stderr {
            eprintln!("{line}");
        }
        self.logs.push_back(line);
        while self.logs.len() > self.log_limit {
            self.logs.pop_front();
        }
    }
}
