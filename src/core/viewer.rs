use super::pass::{MatchData, Pass};
use super::span_manager::SpanManager;

/// Top-level state for one match comparison: the loaded match data, the
/// active pass, and the highlight engine built from it.
///
/// Switching pass fully replaces the span set, the region map and the
/// highlight state; switching to the already-active pass keeps the current
/// state (rebuilds are keyed on pass identity).
#[derive(Debug, Clone)]
pub struct MatchViewer {
    data: MatchData,
    current_pass: usize,
    manager: SpanManager,
}

impl MatchViewer {
    /// Build a viewer over the match data, activating its first pass.
    pub fn new(data: MatchData) -> Result<Self, String> {
        let first = data
            .passes
            .first()
            .ok_or_else(|| "Match data contains no passes".to_string())?;
        let manager = SpanManager::from_pass(first)?;

        Ok(Self {
            data,
            current_pass: 0,
            manager,
        })
    }

    pub fn data(&self) -> &MatchData {
        &self.data
    }

    pub fn current_pass(&self) -> &Pass {
        &self.data.passes[self.current_pass]
    }

    /// The highlight engine for the active pass.
    pub fn manager(&self) -> &SpanManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut SpanManager {
        &mut self.manager
    }

    /// Switch to the named pass, rebuilding spans and highlight state from
    /// its groups (everything back to INACTIVE). Switching to the pass that
    /// is already active is a no-op that preserves the current state.
    pub fn set_pass(&mut self, name: &str) -> Result<(), String> {
        if self.current_pass().name == name {
            return Ok(());
        }

        let index = self
            .data
            .passes
            .iter()
            .position(|pass| pass.name == name)
            .ok_or_else(|| format!("Unknown pass '{}'", name))?;

        self.manager = SpanManager::from_pass(&self.data.passes[index])?;
        self.current_pass = index;
        Ok(())
    }

    /// "selected/total" group counter for the status display, e.g. "03/12".
    /// 0 as the numerator means no group is selected yet.
    pub fn group_fraction(&self) -> String {
        let current = self
            .manager
            .selected_group()
            .map(|group| group.0 + 1)
            .unwrap_or(0);
        format_fraction(current, self.manager.n_groups())
    }
}

/// Format `numerator/denominator` with both sides zero-padded to the same
/// width, so the status display doesn't jitter while navigating.
pub fn format_fraction(numerator: usize, denominator: usize) -> String {
    let width = numerator
        .to_string()
        .len()
        .max(denominator.to_string().len());
    format!("{:0width$}/{:0width$}", numerator, denominator, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::region_map::Region;
    use crate::core::span::{FileId, GroupId, SpanState};

    fn match_data() -> MatchData {
        MatchData::from_json(
            r#"{
                "filesA": [{"id": 0, "name": "submission_a/helpers.py"}],
                "filesB": [{"id": 1, "name": "submission_b/helpers.py"}],
                "passes": [
                    {
                        "name": "structure",
                        "docs": "Compares code structure",
                        "groups": [
                            [
                                {"id": 1, "fileId": 0, "start": 0, "end": 20},
                                {"id": 2, "fileId": 1, "start": 10, "end": 30}
                            ],
                            [
                                {"id": 3, "fileId": 0, "start": 40, "end": 60},
                                {"id": 4, "fileId": 1, "start": 50, "end": 70}
                            ]
                        ]
                    },
                    {
                        "name": "exact",
                        "docs": "Compares code exactly",
                        "groups": [
                            [
                                {"id": 1, "fileId": 0, "start": 5, "end": 10},
                                {"id": 2, "fileId": 1, "start": 15, "end": 20}
                            ]
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_new_activates_first_pass() {
        let viewer = MatchViewer::new(match_data()).unwrap();
        assert_eq!(viewer.current_pass().name, "structure");
        assert_eq!(viewer.manager().n_groups(), 2);
        assert_eq!(viewer.manager().spans().len(), 4);
    }

    #[test]
    fn test_new_without_passes_fails() {
        let data = MatchData {
            files_a: Vec::new(),
            files_b: Vec::new(),
            passes: Vec::new(),
        };
        assert!(MatchViewer::new(data).is_err());
    }

    #[test]
    fn test_set_pass_resets_state() {
        let mut viewer = MatchViewer::new(match_data()).unwrap();
        viewer.manager_mut().select(&Region::new(FileId(0), 5, 10));
        assert_eq!(viewer.manager().selected_group(), Some(GroupId(0)));

        viewer.set_pass("exact").unwrap();
        assert_eq!(viewer.current_pass().name, "exact");
        assert_eq!(viewer.manager().n_groups(), 1);
        assert_eq!(viewer.manager().spans().len(), 2);
        assert_eq!(viewer.manager().selected_group(), None);
        assert!(viewer
            .manager()
            .states()
            .values()
            .all(|&state| state == SpanState::Inactive));
    }

    #[test]
    fn test_set_pass_to_current_keeps_state() {
        let mut viewer = MatchViewer::new(match_data()).unwrap();
        viewer.manager_mut().select(&Region::new(FileId(0), 5, 10));

        viewer.set_pass("structure").unwrap();
        assert_eq!(viewer.manager().selected_group(), Some(GroupId(0)));
    }

    #[test]
    fn test_set_pass_unknown_name() {
        let mut viewer = MatchViewer::new(match_data()).unwrap();
        let err = viewer.set_pass("misspelled").unwrap_err();
        assert!(err.contains("misspelled"));
        // Still on the original pass.
        assert_eq!(viewer.current_pass().name, "structure");
    }

    #[test]
    fn test_group_fraction() {
        let mut viewer = MatchViewer::new(match_data()).unwrap();
        insta::assert_snapshot!(viewer.group_fraction(), @"0/2");

        viewer.manager_mut().select_next_group();
        insta::assert_snapshot!(viewer.group_fraction(), @"1/2");
    }

    #[test]
    fn test_format_fraction_pads_to_equal_width() {
        insta::assert_snapshot!(format_fraction(3, 12), @"03/12");
        insta::assert_snapshot!(format_fraction(12, 100), @"012/100");
        assert_eq!(format_fraction(5, 6), "5/6");
    }
}
