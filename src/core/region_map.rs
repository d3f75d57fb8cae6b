use super::span::{FileId, GroupId, Span};

/// An ad hoc query describing what a pointer interaction currently targets:
/// the on-screen bounds of a rendered token or line, as closed character
/// offsets into one file. Produced by the renderer, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub file_id: FileId,
    pub start: usize,
    pub end: usize,
}

impl Region {
    pub fn new(file_id: FileId, start: usize, end: usize) -> Self {
        Self {
            file_id,
            start,
            end,
        }
    }
}

/// Immutable map from a region in a file to the span/group enclosing it.
///
/// Built once per pass from the flattened span list and shared read-only;
/// rebuilt only when the active pass changes.
#[derive(Debug, Clone)]
pub struct RegionMap {
    spans: Vec<Span>,
}

impl RegionMap {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// The full span set, in original pass order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Resolve a region to the enclosing span with the largest extent.
    ///
    /// A candidate must be in the same file and fully contain the region.
    /// Among candidates the largest `end - start` wins — group identity is
    /// preferred over per-token granularity, so a coarse region inside
    /// nested spans resolves to the outermost one. Exact-extent ties keep
    /// the earliest span in pass order (strict `<` below), which makes the
    /// result deterministic.
    // Linear scan; callers query per rendered token/line, not per pixel.
    pub fn get_span(&self, region: &Region) -> Option<&Span> {
        let mut largest: Option<&Span> = None;

        for span in &self.spans {
            let contains = span.file_id == region.file_id
                && span.start <= region.start
                && span.end >= region.end;

            let is_largest = match largest {
                None => true,
                Some(current) => current.extent() < span.extent(),
            };

            if contains && is_largest {
                largest = Some(span);
            }
        }

        largest
    }

    /// Resolve a region to the id of the group owning its enclosing span.
    pub fn get_group_id(&self, region: &Region) -> Option<GroupId> {
        self.get_span(region).map(|span| span.group_id)
    }
}
