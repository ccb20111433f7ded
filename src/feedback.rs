//! Transient feedback shown after a submission.
//! Messages are queued and shown one at a time, like a snackbar.

use crate::models::Outcome;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackAction {
    Restart,
}

impl FeedbackAction {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackAction::Restart => "Restart",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub action: Option<FeedbackAction>,
}

impl Feedback {
    /// Message for a submission. Blank input shows nothing.
    pub fn for_outcome(outcome: &Outcome) -> Option<Self> {
        let message = match outcome {
            Outcome::Correct => "Correct!".to_string(),
            Outcome::IncorrectRetry { .. } => "Wrong! Try again.".to_string(),
            Outcome::IncorrectFinal { correct_answer } => {
                format!("Wrong! The answer is {}", correct_answer)
            }
            Outcome::Ignored => return None,
        };
        Some(Self {
            message,
            action: None,
        })
    }

    pub fn quiz_complete() -> Self {
        Self {
            message: "Quiz Complete! Do you want to restart?".to_string(),
            action: Some(FeedbackAction::Restart),
        }
    }

    /// Feedback with an action stays until the action is taken.
    pub fn is_sticky(&self) -> bool {
        self.action.is_some()
    }
}

struct Shown {
    feedback: Feedback,
    since: Instant,
}

/// FIFO of feedback messages. Only the front one is visible.
pub struct Snackbar {
    duration: Duration,
    current: Option<Shown>,
    queue: VecDeque<Feedback>,
}

impl Snackbar {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
            queue: VecDeque::new(),
        }
    }

    pub fn show(&mut self, feedback: Feedback, now: Instant) {
        self.queue.push_back(feedback);
        if self.current.is_none() {
            self.promote(now);
        }
    }

    /// Expires the visible message once its time is up and shows the next one.
    pub fn tick(&mut self, now: Instant) {
        let expired = self.current.as_ref().is_some_and(|shown| {
            !shown.feedback.is_sticky() && now.duration_since(shown.since) >= self.duration
        });
        if expired {
            self.current = None;
            self.promote(now);
        }
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref().map(|shown| &shown.feedback)
    }

    /// While busy, the presenter must not accept another submission.
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Time until the visible message expires. `None` when idle or sticky.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .filter(|shown| !shown.feedback.is_sticky())
            .map(|shown| self.duration.saturating_sub(now.duration_since(shown.since)))
    }

    /// Takes the visible message's action, dismissing it.
    pub fn take_action(&mut self, now: Instant) -> Option<FeedbackAction> {
        let action = self.current.as_ref()?.feedback.action?;
        self.current = None;
        self.promote(now);
        Some(action)
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.queue.clear();
    }

    fn promote(&mut self, now: Instant) {
        self.current = self
            .queue
            .pop_front()
            .map(|feedback| Shown { feedback, since: now });
    }
}
