use crate::training::plan::TrainingPlan;
use crate::training::schedule::TimeSlot;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// Minutes before its start time that an activity is flagged as starting soon.
pub const STARTING_SOON_LOOKAHEAD_MINUTES: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiveStatus {
    #[serde(rename = "now")]
    Running,
    #[serde(rename = "soon")]
    StartingSoon,
    #[serde(rename = "inactive")]
    Inactive,
}

impl LiveStatus {
    /// Inactive rows are omitted from the status map on the wire.
    pub fn is_live(self) -> bool {
        !matches!(self, LiveStatus::Inactive)
    }
}

pub struct LiveStatusClassifier;

impl LiveStatusClassifier {
    /// Classifies one compiled activity against the given wall-clock
    /// instant. Always `Inactive` unless the plan runs on `now`'s date.
    ///
    /// Both the running interval and the lookahead window are half-open:
    /// the instant at `to` is no longer running, and the instant at `from`
    /// is running rather than starting soon.
    pub fn classify(plan: &TrainingPlan, slot: TimeSlot, now: NaiveDateTime) -> LiveStatus {
        if !plan.is_active_on(now.date()) {
            return LiveStatus::Inactive;
        }

        let from = now.date().and_time(slot.from);
        let to = now.date().and_time(slot.to);

        if from <= now && now < to {
            return LiveStatus::Running;
        }

        if from - Duration::minutes(STARTING_SOON_LOOKAHEAD_MINUTES) <= now && now < from {
            return LiveStatus::StartingSoon;
        }

        LiveStatus::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Weekday};

    fn plan() -> TrainingPlan {
        TrainingPlan {
            id: 1,
            title: "Monday Practice".to_string(),
            team_name: "U19".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            weekday: Weekday::Mon,
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            dresscode: None,
            focus: None,
            goals: None,
        }
    }

    fn slot() -> TimeSlot {
        TimeSlot {
            from: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            to: NaiveTime::from_hms_opt(18, 10, 0).unwrap(),
        }
    }

    // 2024-03-04 is a Monday inside the plan's range
    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_running_inside_interval() {
        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), at(18, 9, 30)),
            LiveStatus::Running
        );
    }

    #[test]
    fn test_starting_soon_inside_lookahead_window() {
        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), at(17, 58, 30)),
            LiveStatus::StartingSoon
        );
    }

    #[test]
    fn test_inactive_before_lookahead_window() {
        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), at(17, 50, 0)),
            LiveStatus::Inactive
        );
    }

    #[test]
    fn test_interval_start_is_running_not_starting_soon() {
        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), at(18, 0, 0)),
            LiveStatus::Running
        );
    }

    #[test]
    fn test_interval_end_is_exclusive() {
        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), at(18, 10, 0)),
            LiveStatus::Inactive
        );
    }

    #[test]
    fn test_lookahead_window_start_is_inclusive() {
        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), at(17, 58, 0)),
            LiveStatus::StartingSoon
        );
    }

    #[test]
    fn test_inactive_on_non_plan_weekday() {
        // 2024-03-05 is a Tuesday; the interval itself would be running
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(18, 5, 0)
            .unwrap();

        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), now),
            LiveStatus::Inactive
        );
    }

    #[test]
    fn test_inactive_outside_date_range() {
        // 2024-07-01 is a Monday, but past the plan's end date
        let now = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(18, 5, 0)
            .unwrap();

        assert_eq!(
            LiveStatusClassifier::classify(&plan(), slot(), now),
            LiveStatus::Inactive
        );
    }

    #[test]
    fn test_wire_literals() {
        assert_eq!(serde_json::to_string(&LiveStatus::Running).unwrap(), "\"now\"");
        assert_eq!(serde_json::to_string(&LiveStatus::StartingSoon).unwrap(), "\"soon\"");
    }
}
