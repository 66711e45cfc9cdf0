use reg_sheets::RowAppender;

use std::sync::Arc;

/// Shared application state: the row sink submissions are appended to.
///
/// Requests are handled independently; the appender is the only shared
/// resource and performs no cross-request locking.
#[derive(Clone)]
pub struct AppState {
    pub appender: Arc<dyn RowAppender>,
}

impl AppState {
    pub fn new(appender: Arc<dyn RowAppender>) -> Self {
        Self { appender }
    }
}
