// ABOUTME: Transient success and error notifications shown on the destination page.
// ABOUTME: A Dismissal removes its own notice after a delay on the tokio timer.

use std::fmt;
use std::time::Duration;

use reelcopy_scout::formats::escape_html;
use tokio::time::Instant;

use crate::page::{attr_selector, Page};

pub const NOTIFICATION_CLASS: &str = "movie-mapping-notification";

/// How long a notice stays visible by default.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shows notices, one at a time.
#[derive(Debug, Clone)]
pub struct Notifier {
    duration: Duration,
    next_id: u64,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            next_id: 1,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Replaces any visible notice with a new one and returns the handle that
    /// will take it down.
    pub fn show(&mut self, page: &mut Page, text: &str, severity: Severity) -> Dismissal {
        let notice_id = self.next_id.to_string();
        self.next_id += 1;

        page.remove_matching(&format!(".{}", NOTIFICATION_CLASS));
        page.append_to_body(&format!(
            r#"<div class="{} {}" data-notice="{}">{}</div>"#,
            NOTIFICATION_CLASS,
            severity,
            notice_id,
            escape_html(text)
        ));
        tracing::debug!(notice = %notice_id, %severity, "showing notification");

        Dismissal {
            notice_id,
            deadline: Instant::now() + self.duration,
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

/// Pending removal of one notice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a notice stays on the page until its dismissal runs"]
pub struct Dismissal {
    notice_id: String,
    deadline: Instant,
}

impl Dismissal {
    pub fn notice_id(&self) -> &str {
        &self.notice_id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Waits until the deadline, then removes the notice.
    pub async fn run(self, page: &mut Page) {
        tokio::time::sleep_until(self.deadline).await;
        self.fire(page);
    }

    /// Removes the notice now. A notice that is already gone is left alone.
    pub fn fire(self, page: &mut Page) {
        page.remove_matching(&attr_selector("data-notice", &self.notice_id));
    }
}
