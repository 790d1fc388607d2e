// ABOUTME: Configuration options for the mapping controller and the ControllerBuilder fluent API.
// ABOUTME: Covers admin page patterns, notification duration and storage scope.

use std::time::Duration;

use reelcopy_scout::PageRecognizer;

use crate::controller::MappingController;
use crate::notify::DEFAULT_NOTICE_DURATION;
use crate::store::{MappingStore, StorageScope};

/// Configuration options for the mapping controller.
#[derive(Debug, Clone)]
pub struct Options {
    pub admin: PageRecognizer,
    pub notice_duration: Duration,
    pub scope: StorageScope,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            admin: PageRecognizer::admin_defaults(),
            notice_duration: DEFAULT_NOTICE_DURATION,
            scope: StorageScope::default(),
        }
    }
}

/// Builder for constructing MappingController instances.
#[derive(Debug, Clone, Default)]
pub struct ControllerBuilder {
    opts: Options,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the URL patterns that identify an admin page.
    pub fn admin_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.admin = PageRecognizer::new(patterns);
        self
    }

    /// How long notifications stay on the page.
    pub fn notice_duration(mut self, duration: Duration) -> Self {
        self.opts.notice_duration = duration;
        self
    }

    pub fn scope(mut self, scope: StorageScope) -> Self {
        self.opts.scope = scope;
        self
    }

    /// Build the controller on top of `store`.
    pub fn build<S: MappingStore>(self, store: S) -> MappingController<S> {
        MappingController::new(store, self.opts)
    }
}
