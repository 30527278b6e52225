use std::collections::VecDeque;

use littlelemon::profiles::{CancelledError, MediaPicker, PickerOptions};
use littlelemon::session::AuthSession;

/// Media picker that replays queued answers; an empty queue behaves like the
/// user closing the picker.
#[derive(Default)]
pub struct QueuedPicker {
    replies: VecDeque<Result<Option<String>, CancelledError>>,
    pub requests: Vec<PickerOptions>,
}

impl QueuedPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(mut self, uri: &str) -> Self {
        self.replies.push_back(Ok(Some(uri.to_string())));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.replies.push_back(Err(CancelledError));
        self
    }
}

impl MediaPicker for QueuedPicker {
    fn pick_image(&mut self, options: &PickerOptions) -> Result<Option<String>, CancelledError> {
        self.requests.push(options.clone());
        self.replies.pop_front().unwrap_or(Err(CancelledError))
    }
}

#[derive(Default)]
pub struct RecordingAuth {
    pub logouts: usize,
}

impl AuthSession for RecordingAuth {
    fn logout(&mut self) {
        self.logouts += 1;
    }
}
