use std::collections::HashMap;

use super::pass::Pass;
use super::region_map::{Region, RegionMap};
use super::span::{GroupId, Span, SpanId, SpanState};

/// Snapshot of the highlight state for every span in the current pass.
///
/// Total coverage invariant: after construction and after every transition,
/// every span id in the span set has an explicit entry.
pub type SpanStates = HashMap<SpanId, SpanState>;

/// Owns the live highlight state for one pass and the transitions driven by
/// pane interactions (hover = `activate`, click = `select`).
///
/// Every transition recomputes the whole mapping as a fresh snapshot
/// (copy-on-write; a reader holding the old map never sees a half-updated
/// state) and bumps `generation`, which stands in for the original
/// publish-to-renderer callback. The recompute is O(n) per interaction,
/// which is fine at human pointer-event rate.
#[derive(Debug, Clone)]
pub struct SpanManager {
    region_map: RegionMap,
    states: SpanStates,
    selected_group: Option<GroupId>,
    n_groups: usize,
    generation: u64,
}

impl SpanManager {
    /// Build a manager over a fixed span set. Every span starts INACTIVE.
    pub fn new(spans: Vec<Span>, n_groups: usize) -> Self {
        let states = spans
            .iter()
            .map(|span| (span.id, SpanState::Inactive))
            .collect();

        Self {
            region_map: RegionMap::new(spans),
            states,
            selected_group: None,
            n_groups,
            generation: 0,
        }
    }

    /// Build a manager from a pass, flattening its groups into the span
    /// set. Fails on duplicate span ids.
    pub fn from_pass(pass: &Pass) -> Result<Self, String> {
        Ok(Self::new(pass.flatten_spans()?, pass.n_groups()))
    }

    pub fn spans(&self) -> &[Span] {
        self.region_map.spans()
    }

    pub fn region_map(&self) -> &RegionMap {
        &self.region_map
    }

    /// Current state snapshot.
    pub fn states(&self) -> &SpanStates {
        &self.states
    }

    /// Number of published state snapshots since construction. A no-op
    /// interaction (region resolving to no group) does not bump this.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn n_groups(&self) -> usize {
        self.n_groups
    }

    /// The group currently SELECTED, if any. At most one group is selected
    /// at a time.
    pub fn selected_group(&self) -> Option<GroupId> {
        self.selected_group
    }

    /// Hover transition: spans of the resolved group become ACTIVE, spans
    /// already SELECTED stay SELECTED, everything else INACTIVE. A region
    /// outside every group leaves the mapping untouched.
    pub fn activate(&mut self, region: &Region) {
        let group_id = match self.region_map.get_group_id(region) {
            Some(id) => id,
            None => return,
        };

        let states = self
            .spans()
            .iter()
            .map(|span| {
                let state = if self.state_of_span(span.id) == SpanState::Selected {
                    // Don't overwrite a selected span.
                    SpanState::Selected
                } else if span.group_id == group_id {
                    SpanState::Active
                } else {
                    SpanState::Inactive
                };
                (span.id, state)
            })
            .collect();

        self.publish(states);
    }

    /// Click transition: spans of the resolved group become SELECTED and
    /// everything else INACTIVE, clearing any prior selection. A region
    /// outside every group leaves the mapping untouched.
    pub fn select(&mut self, region: &Region) {
        let group_id = match self.region_map.get_group_id(region) {
            Some(id) => id,
            None => return,
        };

        self.select_group(group_id);
    }

    /// Select a group directly by ordinal. Out-of-range ids are a no-op.
    pub fn select_group(&mut self, group_id: GroupId) {
        if group_id.0 >= self.n_groups {
            return;
        }

        let states = self
            .spans()
            .iter()
            .map(|span| {
                let state = if span.group_id == group_id {
                    SpanState::Selected
                } else {
                    SpanState::Inactive
                };
                (span.id, state)
            })
            .collect();

        self.selected_group = Some(group_id);
        self.publish(states);
    }

    /// Select the group after the current one, wrapping past the last.
    /// With no current selection the first group is selected; with no
    /// groups at all this is a no-op.
    pub fn select_next_group(&mut self) {
        if self.n_groups == 0 {
            return;
        }
        let next = match self.selected_group {
            Some(GroupId(current)) => (current + 1) % self.n_groups,
            None => 0,
        };
        self.select_group(GroupId(next));
    }

    /// Select the group before the current one, wrapping past the first.
    /// With no current selection the last group is selected.
    pub fn select_previous_group(&mut self) {
        if self.n_groups == 0 {
            return;
        }
        let prev = match self.selected_group {
            Some(GroupId(current)) => (current + self.n_groups - 1) % self.n_groups,
            None => self.n_groups - 1,
        };
        self.select_group(GroupId(prev));
    }

    /// Whether the region resolves to a span currently ACTIVE.
    pub fn is_active(&self, region: &Region) -> bool {
        self.state_of(region) == SpanState::Active
    }

    /// Whether the region resolves to a span currently SELECTED.
    pub fn is_selected(&self, region: &Region) -> bool {
        self.state_of(region) == SpanState::Selected
    }

    /// Whether the region belongs to any group at all; decides if a region
    /// gets a hover affordance.
    pub fn is_grouped(&self, region: &Region) -> bool {
        self.region_map.get_group_id(region).is_some()
    }

    /// Whether the region resolves to a span the comparison was told to
    /// disregard.
    pub fn is_ignored(&self, region: &Region) -> bool {
        self.region_map
            .get_span(region)
            .map(|span| span.is_ignored)
            .unwrap_or(false)
    }

    fn state_of(&self, region: &Region) -> SpanState {
        match self.region_map.get_span(region) {
            Some(span) => self.state_of_span(span.id),
            None => SpanState::Inactive,
        }
    }

    fn state_of_span(&self, id: SpanId) -> SpanState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    fn publish(&mut self, states: SpanStates) {
        self.states = states;
        self.generation += 1;
    }
}
