//! Formatter configuration (`ConfigOptions`).

use crate::matcher::Matcher;
use std::rc::Rc;

/// Recognized configuration fields driving the context/unified emitters.
#[derive(Clone, Default)]
pub struct ConfigOptions {
    pub context_lines: u32,
    pub ignore_blank_lines: bool,
    pub ignore_regex: Option<Rc<dyn Matcher>>,
    pub function_regex: Option<Rc<dyn Matcher>>,
    pub initial_tab: bool,
    pub suppress_blank_empty: bool,
    pub tabsize: u32,
    pub expand_tabs: bool,
    pub time_format: Option<String>,
    pub file_labels: [Option<String>; 2],
}

impl ConfigOptions {
    #[must_use]
    pub fn new(context_lines: u32) -> Self {
        Self {
            context_lines,
            tabsize: 8,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ignore_blank_lines(mut self, yes: bool) -> Self {
        self.ignore_blank_lines = yes;
        self
    }

    #[must_use]
    pub fn with_ignore_regex(mut self, m: Rc<dyn Matcher>) -> Self {
        self.ignore_regex = Some(m);
        self
    }

    #[must_use]
    pub fn with_function_regex(mut self, m: Rc<dyn Matcher>) -> Self {
        self.function_regex = Some(m);
        self
    }

    #[must_use]
    pub fn with_initial_tab(mut self, yes: bool) -> Self {
        self.initial_tab = yes;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, label0: Option<String>, label1: Option<String>) -> Self {
        self.file_labels = [label0, label1];
        self
    }

    /// Whether script preparation needs to do any
    /// content-based classification at all.
    #[must_use]
    pub fn ignore_policy_active(&self) -> bool {
        self.ignore_blank_lines || self.ignore_regex.is_some()
    }
}

impl std::fmt::Debug for ConfigOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigOptions")
            .field("context_lines", &self.context_lines)
            .field("ignore_blank_lines", &self.ignore_blank_lines)
            .field("ignore_regex", &self.ignore_regex.is_some())
            .field("function_regex", &self.function_regex.is_some())
            .field("initial_tab", &self.initial_tab)
            .field("suppress_blank_empty", &self.suppress_blank_empty)
            .field("tabsize", &self.tabsize)
            .field("expand_tabs", &self.expand_tabs)
            .field("time_format", &self.time_format)
            .field("file_labels", &self.file_labels)
            .finish()
    }
}
