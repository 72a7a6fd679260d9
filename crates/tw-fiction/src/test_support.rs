//! Deterministic completion clients for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::narrator::{CompletionError, CompletionRequest, TextCompletion};

/// A completion client that always answers with the same text, or always
/// fails, recording every request it sees.
pub(crate) struct FakeCompletion {
    reply: Option<String>,
    /// Number of completion attempts, shared with the test.
    pub(crate) calls: Rc<Cell<usize>>,
    /// Every request received, shared with the test.
    pub(crate) requests: Rc<RefCell<Vec<CompletionRequest>>>,
}

impl FakeCompletion {
    /// A client whose every completion succeeds with `text`.
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: Rc::default(),
            requests: Rc::default(),
        }
    }

    /// A client whose every completion fails.
    pub(crate) fn failing() -> Self {
        Self {
            reply: None,
            calls: Rc::default(),
            requests: Rc::default(),
        }
    }
}

impl TextCompletion for FakeCompletion {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push(request.clone());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(CompletionError::Status(503)),
        }
    }
}
