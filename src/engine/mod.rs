//! Rich-text engine seam
//!
//! The table subsystem does not own the text document. Everything it
//! needs from the engine (cursor, embeds, formatting) goes through the
//! `TextEngine` trait so the core stays host-agnostic; the `wasm32`
//! implementation delegates to a JS engine object.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::models::{TableError, TableId};

#[cfg(target_arch = "wasm32")]
pub mod js;

/// A linear selection range in the engine document
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineRange {
    pub index: usize,
    pub length: usize,
}

/// Origin tag passed with every engine mutation
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EditSource {
    User = 0,
    Api = 1,
    Silent = 2,
}

impl EditSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditSource::User => "user",
            EditSource::Api => "api",
            EditSource::Silent => "silent",
        }
    }
}

/// Capabilities the table subsystem consumes from the rich-text engine
pub trait TextEngine {
    /// Current selection range, if the engine has one
    fn selection(&self) -> Option<EngineRange>;

    /// Insert an embedded object at a document index
    fn insert_embed(&mut self, index: usize, embed_type: &str, value: serde_json::Value, source: EditSource);

    /// Insert plain text at a document index
    fn insert_text(&mut self, index: usize, text: &str, source: EditSource);

    /// Delete a span of the document
    fn delete_text(&mut self, index: usize, length: usize, source: EditSource);

    /// Apply a named format to a span of the document
    fn format_text(
        &mut self,
        index: usize,
        length: usize,
        format: &str,
        value: serde_json::Value,
        source: EditSource,
    );

    /// Move the engine selection
    fn set_selection(&mut self, index: usize, length: usize);

    /// Document index of a previously inserted embed, if it still exists
    fn embed_index(&self, embed_type: &str, embed_id: u32) -> Option<usize>;
}

/// Embed type name used for tables in the engine document
pub const TABLE_EMBED_TYPE: &str = "table";

/// Dependency-injected wrapper around the engine handle
///
/// Owned by the editor instance; all document mutations the table
/// subsystem performs are funneled through here.
pub struct CommandExecutor {
    engine: Box<dyn TextEngine>,
}

impl CommandExecutor {
    pub fn new(engine: Box<dyn TextEngine>) -> Self {
        Self { engine }
    }

    /// Insert a table embed at the current cursor, returning the index used
    pub fn insert_table_embed(&mut self, table: TableId, rows: usize, cols: usize) -> usize {
        let index = self.engine.selection().map(|r| r.index).unwrap_or(0);
        let value = serde_json::json!({
            "tableId": table.0,
            "rows": rows,
            "cols": cols,
        });
        self.engine.insert_embed(index, TABLE_EMBED_TYPE, value, EditSource::Api);
        self.engine.set_selection(index + 1, 0);
        index
    }

    /// Remove a table embed from the document, if the engine still has it
    pub fn remove_table_embed(&mut self, table: TableId) -> bool {
        match self.engine.embed_index(TABLE_EMBED_TYPE, table.0) {
            Some(index) => {
                self.engine.delete_text(index, 1, EditSource::Api);
                true
            }
            None => {
                log::warn!("table embed {} not found in engine document", table);
                false
            }
        }
    }

    /// Apply a format to the current engine selection
    pub fn format_selection(&mut self, format: &str, value: serde_json::Value) -> Result<(), TableError> {
        let range = self
            .engine
            .selection()
            .ok_or(TableError::NoActiveSelection { needed: 1, have: 0 })?;
        self.engine
            .format_text(range.index, range.length, format, value, EditSource::User);
        Ok(())
    }

    /// Insert text at the current engine cursor
    pub fn insert_text_at_cursor(&mut self, text: &str) -> Result<usize, TableError> {
        let range = self
            .engine
            .selection()
            .ok_or(TableError::NoActiveSelection { needed: 1, have: 0 })?;
        if range.length > 0 {
            self.engine.delete_text(range.index, range.length, EditSource::User);
        }
        self.engine.insert_text(range.index, text, EditSource::User);
        let after = range.index + text.chars().count();
        self.engine.set_selection(after, 0);
        Ok(after)
    }
}
