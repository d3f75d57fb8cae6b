use serde::{Deserialize, Serialize};

/// Unique identifier for a file within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub usize);

/// Unique identifier for a span within one pass's span set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpanId(pub usize);

/// Ordinal index of a group in its pass's group list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub usize);

/// Highlight state of a single span.
///
/// Selection outranks hover: a SELECTED span stays selected while other
/// groups are hovered, and only another `select` clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanState {
    #[default]
    Inactive,
    Active,
    Selected,
}

/// One contiguous matched code region.
///
/// `start`/`end` are closed character offsets into the owning file's
/// content. Spans are immutable after construction; `id` is unique across
/// the full span set of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub id: SpanId,
    pub file_id: FileId,
    pub group_id: GroupId,
    pub start: usize,
    pub end: usize,
    /// Matched code the comparison was told to disregard (boilerplate,
    /// distributed starter code). Still resolvable, rendered dimmed.
    pub is_ignored: bool,
}

impl Span {
    pub fn new(
        id: SpanId,
        file_id: FileId,
        group_id: GroupId,
        start: usize,
        end: usize,
        is_ignored: bool,
    ) -> Self {
        Self {
            id,
            file_id,
            group_id,
            start,
            end,
            is_ignored,
        }
    }

    /// Number of characters covered; the resolution tie-break prefers the
    /// span with the largest extent.
    pub fn extent(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
