use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::span::{FileId, GroupId, Span, SpanId};

/// Raw span descriptor as produced by the comparison backend, before group
/// ordinals are assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord {
    pub id: usize,
    pub file_id: usize,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub is_ignored: bool,
}

/// One similarity-analysis method and the groups of mutually similar spans
/// it produced. Different passes are mutually exclusive snapshots: switching
/// pass fully replaces the span set and highlight state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pass {
    pub name: String,
    #[serde(default)]
    pub docs: String,
    pub groups: Vec<Vec<SpanRecord>>,
}

impl Pass {
    /// Parse a pass from the backend's JSON representation.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse pass data: {}", e))
    }

    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    /// Flatten the group lists into one span list, assigning each span the
    /// ordinal of its group.
    ///
    /// Rejects duplicate span ids: the highlight state is keyed on span id,
    /// so a duplicate would make state lookups ambiguous. That is a
    /// data-integrity violation by the pass producer, not a runtime input
    /// to tolerate.
    pub fn flatten_spans(&self) -> Result<Vec<Span>, String> {
        let mut spans = Vec::new();
        let mut seen = HashSet::new();

        for (group_id, group) in self.groups.iter().enumerate() {
            for record in group {
                if !seen.insert(record.id) {
                    return Err(format!(
                        "Duplicate span id {} in pass '{}'",
                        record.id, self.name
                    ));
                }
                spans.push(Span::new(
                    SpanId(record.id),
                    FileId(record.file_id),
                    GroupId(group_id),
                    record.start,
                    record.end,
                    record.is_ignored,
                ));
            }
        }

        Ok(spans)
    }
}

/// One file of a submission as the backend describes it. The core never
/// owns the raw text content; the renderer keeps that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub id: usize,
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// The full comparison payload for one match: the files of both submissions
/// and every available analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    pub files_a: Vec<FileEntry>,
    pub files_b: Vec<FileEntry>,
    pub passes: Vec<Pass>,
}

impl MatchData {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse match data: {}", e))
    }

    /// Look up a pass by name.
    pub fn pass(&self, name: &str) -> Option<&Pass> {
        self.passes.iter().find(|pass| pass.name == name)
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name.as_str()).collect()
    }
}
