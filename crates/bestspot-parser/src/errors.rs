use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct LayoutAttempt {
    pub layout: &'static str,
    pub message: String,
}

impl LayoutAttempt {
    pub fn new(layout: &'static str, message: impl Into<String>) -> Self {
        Self {
            layout,
            message: message.into(),
        }
    }
}

impl fmt::Display for LayoutAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.layout, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("{layout} layout mismatch: {reason}")]
    LayoutMismatch {
        layout: &'static str,
        reason: String,
    },

    #[error("{layout} header invalid: {message}")]
    InvalidHeader {
        layout: &'static str,
        message: String,
    },

    #[error("{layout} CSV error: {source}")]
    Csv {
        layout: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{layout} file did not contain any usable data rows")]
    EmptyData { layout: &'static str },

    #[error("no layout recognized this file; attempts: {attempts:?}")]
    NoMatchingLayout { attempts: Vec<LayoutAttempt> },
}
