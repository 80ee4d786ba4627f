use crate::training::activity::TrainingActivity;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A compiled time-of-day interval. Zero-width slots are valid and come from
/// zero-minute activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledActivity {
    pub activity_id: u32,
    pub slot: TimeSlot,
}

/// Widens a time-of-day onto an arbitrary anchor date so cursor arithmetic
/// can walk across midnight without wrapping inside a single step.
fn widen(time: NaiveTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 2).unwrap().and_time(time)
}

pub struct ScheduleCompiler;

impl ScheduleCompiler {
    /// Assigns a concrete time slot to every activity of a plan.
    ///
    /// Activities are taken in ascending `order`; the sort is stable, so
    /// equal `order` values keep their input sequence position. Regular
    /// activities run forward from `start_time`, back to back. Pre-practice
    /// activities chain backwards so the last of them ends exactly at
    /// `start_time`.
    ///
    /// All cursor arithmetic happens on widened date-times and is narrowed
    /// back to time-of-day at the end. A chain that crosses midnight
    /// therefore wraps to the previous (or next) day's clock time: a
    /// 10-minute pre-practice before an 00:05 start compiles to 23:55-00:05.
    ///
    /// Returned rows are in agenda order: the pre-practice block first
    /// (earliest slot first), then the regular block.
    pub fn compile(start_time: NaiveTime, activities: &[TrainingActivity]) -> Vec<CompiledActivity> {
        let mut ordered: Vec<&TrainingActivity> = activities.iter().collect();
        ordered.sort_by_key(|activity| activity.order);

        let (pre_practice, regular): (Vec<&TrainingActivity>, Vec<&TrainingActivity>) = ordered
            .into_iter()
            .partition(|activity| activity.category.is_pre_practice());

        let mut compiled = Vec::with_capacity(activities.len());

        let mut cursor = widen(start_time);
        for activity in pre_practice.iter().rev() {
            let duration = Duration::minutes(i64::from(activity.duration_minutes));
            cursor -= duration;

            compiled.push(CompiledActivity {
                activity_id: activity.id,
                slot: TimeSlot {
                    from: cursor.time(),
                    to: (cursor + duration).time(),
                },
            });
        }

        // The backward pass emitted latest-first
        compiled.reverse();

        let mut cursor = widen(start_time);
        for activity in &regular {
            let duration = Duration::minutes(i64::from(activity.duration_minutes));
            let from = cursor.time();
            cursor += duration;

            compiled.push(CompiledActivity {
                activity_id: activity.id,
                slot: TimeSlot {
                    from,
                    to: cursor.time(),
                },
            });
        }

        compiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::activity::ActivityCategory;

    fn activity(
        id: u32,
        name: &str,
        category: ActivityCategory,
        duration_minutes: u16,
        order: u32,
    ) -> TrainingActivity {
        TrainingActivity {
            id,
            plan_id: 1,
            name: name.to_string(),
            category,
            duration_minutes,
            groups: None,
            group_assignments: None,
            notes: None,
            order,
        }
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn slot_of(compiled: &[CompiledActivity], activity_id: u32) -> TimeSlot {
        compiled
            .iter()
            .find(|row| row.activity_id == activity_id)
            .unwrap()
            .slot
    }

    #[test]
    fn test_regular_activities_run_forward_from_start() {
        let activities = vec![
            activity(1, "Warmup", ActivityCategory::TeamWide, 10, 1),
            activity(2, "Drills", ActivityCategory::GroupSpecific, 20, 2),
        ];

        let compiled = ScheduleCompiler::compile(time(18, 0), &activities);

        assert_eq!(slot_of(&compiled, 1), TimeSlot { from: time(18, 0), to: time(18, 10) });
        assert_eq!(slot_of(&compiled, 2), TimeSlot { from: time(18, 10), to: time(18, 30) });
    }

    #[test]
    fn test_pre_practice_chains_backward_to_start() {
        let activities = vec![
            activity(1, "Tape", ActivityCategory::PrePractice, 15, 1),
            activity(2, "Walkthrough", ActivityCategory::PrePractice, 10, 2),
        ];

        let compiled = ScheduleCompiler::compile(time(18, 0), &activities);

        assert_eq!(slot_of(&compiled, 2), TimeSlot { from: time(17, 50), to: time(18, 0) });
        assert_eq!(slot_of(&compiled, 1), TimeSlot { from: time(17, 35), to: time(17, 50) });
    }

    #[test]
    fn test_first_regular_starts_at_plan_start_and_last_pre_practice_ends_there() {
        let activities = vec![
            activity(1, "Tape", ActivityCategory::PrePractice, 15, 1),
            activity(2, "Warmup", ActivityCategory::TeamWide, 10, 2),
            activity(3, "Special Teams", ActivityCategory::SpecialTeams, 25, 3),
        ];

        let compiled = ScheduleCompiler::compile(time(19, 30), &activities);

        assert_eq!(slot_of(&compiled, 1).to, time(19, 30));
        assert_eq!(slot_of(&compiled, 2).from, time(19, 30));
    }

    #[test]
    fn test_adjacent_slots_touch_within_each_block() {
        let activities = vec![
            activity(1, "Tape", ActivityCategory::PrePractice, 5, 1),
            activity(2, "Stretch", ActivityCategory::PrePractice, 10, 2),
            activity(3, "Warmup", ActivityCategory::TeamWide, 10, 3),
            activity(4, "Drills", ActivityCategory::GroupSpecific, 20, 4),
            activity(5, "Scrimmage", ActivityCategory::TeamWide, 30, 5),
        ];

        let compiled = ScheduleCompiler::compile(time(18, 0), &activities);

        // Agenda order: pre-practice block then regular block
        for pair in compiled.windows(2) {
            assert_eq!(pair[0].slot.to, pair[1].slot.from);
        }
    }

    #[test]
    fn test_empty_activity_list_compiles_to_empty() {
        assert!(ScheduleCompiler::compile(time(18, 0), &[]).is_empty());
    }

    #[test]
    fn test_zero_duration_produces_zero_width_slot() {
        let activities = vec![
            activity(1, "Water Break", ActivityCategory::TeamWide, 0, 1),
            activity(2, "Drills", ActivityCategory::GroupSpecific, 20, 2),
        ];

        let compiled = ScheduleCompiler::compile(time(18, 0), &activities);

        assert_eq!(slot_of(&compiled, 1), TimeSlot { from: time(18, 0), to: time(18, 0) });
        assert_eq!(slot_of(&compiled, 2), TimeSlot { from: time(18, 0), to: time(18, 20) });
    }

    #[test]
    fn test_equal_order_keeps_input_sequence() {
        let activities = vec![
            activity(1, "First", ActivityCategory::TeamWide, 10, 5),
            activity(2, "Second", ActivityCategory::TeamWide, 10, 5),
        ];

        let compiled = ScheduleCompiler::compile(time(18, 0), &activities);

        assert_eq!(slot_of(&compiled, 1).from, time(18, 0));
        assert_eq!(slot_of(&compiled, 2).from, time(18, 10));
    }

    #[test]
    fn test_pre_practice_across_midnight_wraps_to_previous_day_time() {
        let activities = vec![activity(1, "Tape", ActivityCategory::PrePractice, 10, 1)];

        let compiled = ScheduleCompiler::compile(time(0, 5), &activities);

        assert_eq!(slot_of(&compiled, 1), TimeSlot { from: time(23, 55), to: time(0, 5) });
    }

    #[test]
    fn test_regular_past_midnight_wraps_forward() {
        let activities = vec![activity(1, "Night Session", ActivityCategory::TeamWide, 90, 1)];

        let compiled = ScheduleCompiler::compile(time(23, 0), &activities);

        assert_eq!(slot_of(&compiled, 1), TimeSlot { from: time(23, 0), to: time(0, 30) });
    }

    #[test]
    fn test_recompile_is_idempotent() {
        let activities = vec![
            activity(1, "Tape", ActivityCategory::PrePractice, 15, 1),
            activity(2, "Warmup", ActivityCategory::TeamWide, 10, 2),
            activity(3, "Drills", ActivityCategory::GroupSpecific, 20, 3),
        ];

        let first = ScheduleCompiler::compile(time(18, 0), &activities);
        let second = ScheduleCompiler::compile(time(18, 0), &activities);

        assert_eq!(first, second);
    }
}
