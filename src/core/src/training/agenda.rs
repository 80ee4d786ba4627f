use crate::training::activity::ActivityCategory;
use crate::training::groups::{GroupAssignments, GroupFlags, PositionGroup};
use itertools::Itertools;
use log::warn;

pub const EMPTY_CELL_LABEL: &str = "-";
pub const ACTIVE_FLAG_LABEL: &str = "\u{2713}";

/// One rendered agenda table cell spanning `span` adjacent roster columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaCell {
    pub span: usize,
    pub label: String,
    pub groups: Vec<PositionGroup>,
}

impl AgendaCell {
    fn placeholder(group: PositionGroup) -> Self {
        AgendaCell {
            span: 1,
            label: EMPTY_CELL_LABEL.to_string(),
            groups: vec![group],
        }
    }
}

/// Reduces one activity to its row of agenda cells over the roster columns
/// (`PositionGroup::ORDER`). Emitted spans always sum to the roster width.
///
/// Shared categories produce a single full-width cell labeled with the
/// activity name. Group- and position-specific activities collapse adjacent
/// roster columns with an identical label into one spanning cell; columns
/// without a label each get their own dash cell. Without assignments, the
/// participation flags render as one checkmark-or-dash cell per column.
pub fn reduce_agenda_cells(
    category: ActivityCategory,
    activity_name: &str,
    assignments: Option<&GroupAssignments>,
    flags: Option<&GroupFlags>,
) -> Vec<AgendaCell> {
    match category {
        ActivityCategory::PrePractice
        | ActivityCategory::TeamWide
        | ActivityCategory::SpecialTeams => vec![AgendaCell {
            span: PositionGroup::ORDER.len(),
            label: activity_name.to_string(),
            groups: PositionGroup::ORDER.to_vec(),
        }],
        ActivityCategory::GroupSpecific | ActivityCategory::PositionSpecific => {
            match assignments.filter(|assignments| !assignments.is_empty()) {
                Some(assignments) => labeled_cells(assignments),
                None => flag_cells(activity_name, flags),
            }
        }
    }
}

fn labeled_cells(assignments: &GroupAssignments) -> Vec<AgendaCell> {
    let mut cells = Vec::new();

    for (label, run) in &PositionGroup::ORDER
        .iter()
        .chunk_by(|group| assignments.label_for(**group))
    {
        let groups: Vec<PositionGroup> = run.copied().collect();

        match label {
            Some(label) => cells.push(AgendaCell {
                span: groups.len(),
                label: label.to_string(),
                groups,
            }),
            // Unlabeled columns stay separate cells, one per group
            None => cells.extend(groups.into_iter().map(AgendaCell::placeholder)),
        }
    }

    cells
}

fn flag_cells(activity_name: &str, flags: Option<&GroupFlags>) -> Vec<AgendaCell> {
    let Some(flags) = flags else {
        warn!(
            "activity '{}' carries neither group assignments nor participation flags",
            activity_name
        );
        return PositionGroup::ORDER
            .iter()
            .map(|group| AgendaCell::placeholder(*group))
            .collect();
    };

    PositionGroup::ORDER
        .iter()
        .map(|group| AgendaCell {
            span: 1,
            label: if flags.is_active(*group) {
                ACTIVE_FLAG_LABEL.to_string()
            } else {
                EMPTY_CELL_LABEL.to_string()
            },
            groups: vec![*group],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_sum(cells: &[AgendaCell]) -> usize {
        cells.iter().map(|cell| cell.span).sum()
    }

    #[test]
    fn test_shared_categories_render_one_full_width_cell() {
        for category in [
            ActivityCategory::PrePractice,
            ActivityCategory::TeamWide,
            ActivityCategory::SpecialTeams,
        ] {
            let cells = reduce_agenda_cells(category, "Scrimmage", None, None);

            assert_eq!(cells.len(), 1);
            assert_eq!(cells[0].span, 8);
            assert_eq!(cells[0].label, "Scrimmage");
        }
    }

    #[test]
    fn test_identical_labels_merge_across_adjacent_columns() {
        let assignments = GroupAssignments::parse([
            ("OL,DL", "Line Work"),
            ("QB,WR,TE", "Skill"),
        ])
        .unwrap();

        let cells = reduce_agenda_cells(
            ActivityCategory::GroupSpecific,
            "Position Drills",
            Some(&assignments),
            None,
        );

        // Roster order: OL DL LB RB TE WR QB DB. TE/WR/QB are adjacent in
        // roster order even though the key lists them differently.
        assert_eq!(cells.len(), 5);
        assert_eq!(
            (cells[0].span, cells[0].label.as_str()),
            (2, "Line Work")
        );
        assert_eq!((cells[1].span, cells[1].label.as_str()), (1, "-"));
        assert_eq!((cells[2].span, cells[2].label.as_str()), (1, "-"));
        assert_eq!((cells[3].span, cells[3].label.as_str()), (3, "Skill"));
        assert_eq!((cells[4].span, cells[4].label.as_str()), (1, "-"));
        assert_eq!(
            cells[3].groups,
            vec![
                PositionGroup::TightEnd,
                PositionGroup::WideReceiver,
                PositionGroup::Quarterback
            ]
        );
        assert_eq!(span_sum(&cells), 8);
    }

    #[test]
    fn test_run_breaks_on_label_change() {
        let assignments = GroupAssignments::parse([
            ("OL", "Run Blocking"),
            ("DL", "Pass Rush"),
        ])
        .unwrap();

        let cells = reduce_agenda_cells(
            ActivityCategory::PositionSpecific,
            "Trenches",
            Some(&assignments),
            None,
        );

        assert_eq!((cells[0].span, cells[0].label.as_str()), (1, "Run Blocking"));
        assert_eq!((cells[1].span, cells[1].label.as_str()), (1, "Pass Rush"));
        assert_eq!(span_sum(&cells), 8);
    }

    #[test]
    fn test_same_label_non_adjacent_does_not_merge() {
        let assignments = GroupAssignments::parse([
            ("OL", "Technique"),
            ("LB", "Technique"),
        ])
        .unwrap();

        let cells = reduce_agenda_cells(
            ActivityCategory::PositionSpecific,
            "Technique Work",
            Some(&assignments),
            None,
        );

        // OL and LB are separated by DL, which has no label
        let technique_cells: Vec<&AgendaCell> = cells
            .iter()
            .filter(|cell| cell.label == "Technique")
            .collect();

        assert_eq!(technique_cells.len(), 2);
        assert!(technique_cells.iter().all(|cell| cell.span == 1));
        assert_eq!(span_sum(&cells), 8);
    }

    #[test]
    fn test_flag_fallback_renders_checkmarks_and_dashes() {
        let flags = GroupFlags::from_active(&[
            PositionGroup::OffensiveLine,
            PositionGroup::Quarterback,
        ]);

        let cells = reduce_agenda_cells(
            ActivityCategory::GroupSpecific,
            "Install",
            None,
            Some(&flags),
        );

        assert_eq!(cells.len(), 8);
        assert!(cells.iter().all(|cell| cell.span == 1));
        assert_eq!(cells[0].label, ACTIVE_FLAG_LABEL);
        assert_eq!(cells[1].label, EMPTY_CELL_LABEL);
        assert_eq!(cells[6].label, ACTIVE_FLAG_LABEL);
        assert_eq!(span_sum(&cells), 8);
    }

    #[test]
    fn test_empty_assignments_fall_back_to_flags() {
        let assignments = GroupAssignments::default();
        let flags = GroupFlags::from_active(&[PositionGroup::DefensiveBack]);

        let cells = reduce_agenda_cells(
            ActivityCategory::GroupSpecific,
            "Coverage",
            Some(&assignments),
            Some(&flags),
        );

        assert_eq!(cells.len(), 8);
        assert_eq!(cells[7].label, ACTIVE_FLAG_LABEL);
    }

    #[test]
    fn test_missing_everything_renders_placeholder_row() {
        let cells =
            reduce_agenda_cells(ActivityCategory::PositionSpecific, "Orphan", None, None);

        assert_eq!(cells.len(), 8);
        assert!(cells.iter().all(|cell| cell.label == EMPTY_CELL_LABEL));
        assert_eq!(span_sum(&cells), 8);
    }
}
