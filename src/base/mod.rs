//! Foundation types for the NuKiTa core.
//!
//! This module provides the small value types everything else builds on:
//! - [`FileId`] - Handles for indexed source files
//! - [`TextRange`], [`TextSize`] - Byte offsets into editor text
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other nukita modules.

mod file_id;
mod span;

pub use file_id::FileId;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
