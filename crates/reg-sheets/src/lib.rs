pub mod client;
pub mod error;
pub mod row;

#[cfg(test)]
mod tests;

pub use client::{RowAppender, SheetsClient};
pub use error::{Result, SheetsError};
pub use row::{ROW_COLUMNS, SheetRow, flatten_rows};
