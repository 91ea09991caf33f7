//! The record handed to the renderer. Producers build it once; rendering only reads it.

use crate::level::Level;
use chrono::{DateTime, FixedOffset, Local};
use serde_json::Value;
use std::collections::HashMap;

/// Carries everything a pattern can reference, so nothing passes a dozen loose parameters.
///
/// Empty strings mean "absent" for the optional identity attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub level: Level,
    pub app_name: String,
    pub instance_name: String,
    pub request_id: String,
    pub principal: String,
    /// Kept in the offset it was captured in; UTC is derived at render time.
    pub time: DateTime<FixedOffset>,
    pub file: String,
    pub line: u32,
    pub message: String,
    pub fields: HashMap<String, Value>,
}

impl Entry {
    /// Captures the current local time; everything else starts empty.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            app_name: String::new(),
            instance_name: String::new(),
            request_id: String::new(),
            principal: String::new(),
            time: Local::now().fixed_offset(),
            file: String::new(),
            line: 0,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    #[must_use]
    pub fn instance_name(mut self, name: impl Into<String>) -> Self {
        self.instance_name = name.into();
        self
    }

    /// Usually lifted from an inbound request header by the producer.
    #[must_use]
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = id.into();
        self
    }

    /// Primary principal of the authenticated subject, if any.
    #[must_use]
    pub fn principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = principal.into();
        self
    }

    /// Replaces the capture time, e.g. when replaying records or in tests.
    #[must_use]
    pub const fn time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = time;
        self
    }

    /// Source location of the log call.
    #[must_use]
    pub fn location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    /// Inserting an existing key overwrites its value.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Strings render as their raw text; everything else in compact JSON form.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
