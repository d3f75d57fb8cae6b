pub mod core;

pub use crate::core::dominant::DominantItemTracker;
pub use crate::core::fragment::{fragmentize, Fragment};
pub use crate::core::pass::{FileEntry, MatchData, Pass, SpanRecord};
pub use crate::core::region_map::{Region, RegionMap};
pub use crate::core::settings::ViewerSettings;
pub use crate::core::span::{FileId, GroupId, Span, SpanId, SpanState};
pub use crate::core::span_manager::{SpanManager, SpanStates};
pub use crate::core::viewer::MatchViewer;
