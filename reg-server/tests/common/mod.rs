#![allow(dead_code)]

//! Test infrastructure for reg-server API tests

use reg_server::AppState;
use reg_sheets::{Result as SheetsResult, RowAppender, SheetRow, SheetsError};

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Records every appended batch instead of writing anywhere
#[derive(Default)]
pub struct RecordingAppender {
    batches: Mutex<Vec<Vec<SheetRow>>>,
}

impl RecordingAppender {
    pub fn batches(&self) -> Vec<Vec<SheetRow>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl RowAppender for RecordingAppender {
    async fn append(&self, rows: Vec<SheetRow>) -> SheetsResult<()> {
        self.batches.lock().unwrap().push(rows);
        Ok(())
    }
}

/// Fails every append, as an unreachable store would
pub struct FailingAppender;

#[async_trait]
impl RowAppender for FailingAppender {
    async fn append(&self, _rows: Vec<SheetRow>) -> SheetsResult<()> {
        Err(SheetsError::Append {
            status: 503,
            message: "store unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// AppState around an injected appender
pub fn create_test_state(appender: Arc<dyn RowAppender>) -> AppState {
    AppState::new(appender)
}
