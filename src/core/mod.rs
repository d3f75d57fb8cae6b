pub mod dominant;
pub mod fragment;
pub mod pass;
pub mod region_map;
pub mod settings;
pub mod span;
pub mod span_manager;
pub mod viewer;

pub use dominant::DominantItemTracker;
pub use region_map::{Region, RegionMap};
pub use span::{FileId, GroupId, Span, SpanId, SpanState};
pub use span_manager::SpanManager;
pub use viewer::MatchViewer;
