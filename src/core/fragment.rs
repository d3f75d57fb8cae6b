use std::collections::BTreeSet;

use super::span::{FileId, Span, SpanId};

/// One run of characters over which the set of covering spans is constant.
/// The renderer emits one styled run per fragment instead of deciding a
/// style per character.
///
/// `start..end` is a half-open character range; consecutive fragments tile
/// the file's `0..content_len` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub start: usize,
    pub end: usize,
    /// Ids of the spans covering this run, in span-list order.
    pub span_ids: Vec<SpanId>,
}

/// Split one file's character range at every span boundary and attach to
/// each resulting fragment the spans covering it. Spans belonging to other
/// files are ignored; empty content yields no fragments.
pub fn fragmentize(file_id: FileId, content_len: usize, spans: &[Span]) -> Vec<Fragment> {
    if content_len == 0 {
        return Vec::new();
    }

    // Cut points: file start/end plus every span edge. Span offsets are
    // closed, so coverage runs through `end` and the cut lands after it.
    let mut cuts = BTreeSet::new();
    cuts.insert(0);
    cuts.insert(content_len);
    for span in spans.iter().filter(|s| s.file_id == file_id) {
        if span.start < content_len {
            cuts.insert(span.start);
        }
        cuts.insert(span.end.saturating_add(1).min(content_len));
    }

    let cuts: Vec<usize> = cuts.into_iter().collect();
    let mut fragments = Vec::with_capacity(cuts.len() - 1);

    for pair in cuts.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let span_ids = spans
            .iter()
            .filter(|s| s.file_id == file_id && s.start <= start && s.end >= end - 1)
            .map(|s| s.id)
            .collect();
        fragments.push(Fragment {
            start,
            end,
            span_ids,
        });
    }

    fragments
}
