use chrono::{NaiveDate, NaiveTime, Weekday};
use core::{ScheduleCompiler, TimeSlot, TrainingActivity, TrainingPlan};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// An activity together with its persisted derived times. The times are
/// outputs of the schedule compiler and are rewritten for the whole plan on
/// every mutation of its activity set, never patched per item.
#[derive(Debug, Clone)]
pub struct StoredActivity {
    pub activity: TrainingActivity,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
}

impl StoredActivity {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            from: self.time_from,
            to: self.time_to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    PlanNotFound(u32),
    ActivityNotFound(u32),
    WrongPlan { activity_id: u32, plan_id: u32 },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::PlanNotFound(id) => write!(f, "training plan {} not found", id),
            StoreError::ActivityNotFound(id) => write!(f, "activity {} not found", id),
            StoreError::WrongPlan { activity_id, plan_id } => {
                write!(f, "activity {} does not belong to plan {}", activity_id, plan_id)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Field overrides applied when copying a plan. Unset fields keep the
/// original plan's values; the copy's title defaults to "<title> (Copy)".
#[derive(Debug, Clone, Default)]
pub struct PlanOverrides {
    pub title: Option<String>,
    pub team_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub weekday: Option<Weekday>,
    pub start_time: Option<NaiveTime>,
}

/// In-memory plan persistence. Every mutating operation recompiles the
/// owning plan's derived times before it returns, so a reader holding the
/// surrounding lock never observes stale or partially recomputed slots.
pub struct PlanStore {
    plans: Vec<TrainingPlan>,
    activities: Vec<StoredActivity>,
    next_plan_id: u32,
    next_activity_id: u32,
}

impl PlanStore {
    pub fn new(seed: Vec<(TrainingPlan, Vec<TrainingActivity>)>) -> Self {
        let mut store = PlanStore {
            plans: Vec::new(),
            activities: Vec::new(),
            next_plan_id: 1,
            next_activity_id: 1,
        };

        for (plan, activities) in seed {
            store.next_plan_id = store.next_plan_id.max(plan.id + 1);
            let start_time = plan.start_time;
            store.plans.push(plan);

            for activity in activities {
                store.next_activity_id = store.next_activity_id.max(activity.id + 1);
                store.activities.push(StoredActivity {
                    activity,
                    time_from: start_time,
                    time_to: start_time,
                });
            }
        }

        let plan_ids: Vec<u32> = store.plans.iter().map(|plan| plan.id).collect();
        for plan_id in plan_ids {
            store.recompile(plan_id);
        }

        store
    }

    pub fn plans(&self) -> &[TrainingPlan] {
        &self.plans
    }

    pub fn plan(&self, id: u32) -> Option<&TrainingPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    /// Activities of a plan in ascending `order`.
    pub fn plan_activities(&self, plan_id: u32) -> Vec<&StoredActivity> {
        let mut items: Vec<&StoredActivity> = self
            .activities
            .iter()
            .filter(|stored| stored.activity.plan_id == plan_id)
            .collect();

        items.sort_by_key(|stored| stored.activity.order);
        items
    }

    pub fn activity(&self, plan_id: u32, activity_id: u32) -> Result<&StoredActivity, StoreError> {
        let stored = self
            .activities
            .iter()
            .find(|stored| stored.activity.id == activity_id)
            .ok_or(StoreError::ActivityNotFound(activity_id))?;

        if stored.activity.plan_id != plan_id {
            return Err(StoreError::WrongPlan { activity_id, plan_id });
        }

        Ok(stored)
    }

    /// Order value a newly appended activity gets.
    pub fn next_order(&self, plan_id: u32) -> u32 {
        self.activities
            .iter()
            .filter(|stored| stored.activity.plan_id == plan_id)
            .map(|stored| stored.activity.order)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Start time a newly appended regular activity would get: the last
    /// regular activity's end, or the plan start when the agenda is empty.
    pub fn next_start_time(&self, plan_id: u32) -> Option<NaiveTime> {
        let plan = self.plan(plan_id)?;

        let last_regular = self
            .plan_activities(plan_id)
            .into_iter()
            .filter(|stored| !stored.activity.category.is_pre_practice())
            .next_back();

        Some(last_regular.map_or(plan.start_time, |stored| stored.time_to))
    }

    pub fn create_plan(&mut self, mut plan: TrainingPlan) -> u32 {
        plan.id = self.next_plan_id;
        self.next_plan_id += 1;

        let id = plan.id;
        self.plans.push(plan);
        id
    }

    /// Replaces the plan's fields. A changed `start_time` shifts every
    /// activity, so the plan is recompiled.
    pub fn update_plan(&mut self, plan: TrainingPlan) -> Result<(), StoreError> {
        let slot = self
            .plans
            .iter_mut()
            .find(|existing| existing.id == plan.id)
            .ok_or(StoreError::PlanNotFound(plan.id))?;

        let id = plan.id;
        *slot = plan;
        self.recompile(id);
        Ok(())
    }

    pub fn delete_plan(&mut self, id: u32) -> Result<(), StoreError> {
        if self.plan(id).is_none() {
            return Err(StoreError::PlanNotFound(id));
        }

        self.plans.retain(|plan| plan.id != id);
        self.activities.retain(|stored| stored.activity.plan_id != id);
        Ok(())
    }

    /// Duplicates a plan and all its activities under fresh ids, applying
    /// the given overrides, and compiles the copy's times.
    pub fn copy_plan(&mut self, id: u32, overrides: PlanOverrides) -> Result<u32, StoreError> {
        let original = self.plan(id).ok_or(StoreError::PlanNotFound(id))?.clone();

        let copy = TrainingPlan {
            id: 0,
            title: overrides
                .title
                .unwrap_or_else(|| format!("{} (Copy)", original.title)),
            team_name: overrides.team_name.unwrap_or_else(|| original.team_name.clone()),
            start_date: overrides.start_date.unwrap_or(original.start_date),
            end_date: overrides.end_date.unwrap_or(original.end_date),
            weekday: overrides.weekday.unwrap_or(original.weekday),
            start_time: overrides.start_time.unwrap_or(original.start_time),
            dresscode: original.dresscode.clone(),
            focus: original.focus.clone(),
            goals: original.goals.clone(),
        };

        let copy_start = copy.start_time;
        let copy_id = self.create_plan(copy);

        let originals: Vec<TrainingActivity> = self
            .plan_activities(id)
            .into_iter()
            .map(|stored| stored.activity.clone())
            .collect();

        for mut activity in originals {
            activity.id = self.next_activity_id;
            self.next_activity_id += 1;
            activity.plan_id = copy_id;

            self.activities.push(StoredActivity {
                activity,
                time_from: copy_start,
                time_to: copy_start,
            });
        }

        self.recompile(copy_id);
        Ok(copy_id)
    }

    /// Inserts an activity and recompiles the whole plan: any insertion
    /// shifts the placement of every other item in its block.
    pub fn create_activity(&mut self, mut activity: TrainingActivity) -> Result<u32, StoreError> {
        let plan = self
            .plan(activity.plan_id)
            .ok_or(StoreError::PlanNotFound(activity.plan_id))?;
        let start_time = plan.start_time;

        activity.id = self.next_activity_id;
        self.next_activity_id += 1;

        let id = activity.id;
        let plan_id = activity.plan_id;

        self.activities.push(StoredActivity {
            activity,
            time_from: start_time,
            time_to: start_time,
        });

        self.recompile(plan_id);
        Ok(id)
    }

    pub fn update_activity(&mut self, activity: TrainingActivity) -> Result<(), StoreError> {
        let stored = self
            .activities
            .iter_mut()
            .find(|stored| stored.activity.id == activity.id)
            .ok_or(StoreError::ActivityNotFound(activity.id))?;

        if stored.activity.plan_id != activity.plan_id {
            return Err(StoreError::WrongPlan {
                activity_id: activity.id,
                plan_id: activity.plan_id,
            });
        }

        let plan_id = activity.plan_id;
        stored.activity = activity;
        self.recompile(plan_id);
        Ok(())
    }

    pub fn delete_activity(&mut self, plan_id: u32, activity_id: u32) -> Result<(), StoreError> {
        self.activity(plan_id, activity_id)?;

        self.activities
            .retain(|stored| stored.activity.id != activity_id);
        self.recompile(plan_id);
        Ok(())
    }

    /// Applies a bulk id-to-order mapping, then recompiles. Ids not in the
    /// mapping keep their order; ids of other plans are rejected.
    pub fn reorder_activities(
        &mut self,
        plan_id: u32,
        order: &HashMap<u32, u32>,
    ) -> Result<(), StoreError> {
        if self.plan(plan_id).is_none() {
            return Err(StoreError::PlanNotFound(plan_id));
        }

        for activity_id in order.keys() {
            self.activity(plan_id, *activity_id)?;
        }

        for stored in &mut self.activities {
            if let Some(new_order) = order.get(&stored.activity.id) {
                stored.activity.order = *new_order;
            }
        }

        self.recompile(plan_id);
        Ok(())
    }

    fn recompile(&mut self, plan_id: u32) {
        let Some(plan) = self.plan(plan_id) else {
            return;
        };
        let start_time = plan.start_time;

        let inputs: Vec<TrainingActivity> = self
            .plan_activities(plan_id)
            .into_iter()
            .map(|stored| stored.activity.clone())
            .collect();

        let compiled = ScheduleCompiler::compile(start_time, &inputs);
        let slots: HashMap<u32, TimeSlot> = compiled
            .into_iter()
            .map(|row| (row.activity_id, row.slot))
            .collect();

        for stored in self
            .activities
            .iter_mut()
            .filter(|stored| stored.activity.plan_id == plan_id)
        {
            if let Some(slot) = slots.get(&stored.activity.id) {
                stored.time_from = slot.from;
                stored.time_to = slot.to;
            }
        }

        debug!("plan {} recompiled: {} activities", plan_id, inputs.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ActivityCategory;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn plan(id: u32, start_time: NaiveTime) -> TrainingPlan {
        TrainingPlan {
            id,
            title: "Practice".to_string(),
            team_name: "U19".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 10, 27).unwrap(),
            weekday: Weekday::Tue,
            start_time,
            dresscode: None,
            focus: None,
            goals: None,
        }
    }

    fn activity(
        id: u32,
        plan_id: u32,
        category: ActivityCategory,
        duration_minutes: u16,
        order: u32,
    ) -> TrainingActivity {
        TrainingActivity {
            id,
            plan_id,
            name: format!("Activity {}", id),
            category,
            duration_minutes,
            groups: None,
            group_assignments: None,
            notes: None,
            order,
        }
    }

    fn seeded_store() -> PlanStore {
        PlanStore::new(vec![(
            plan(1, time(18, 0)),
            vec![
                activity(1, 1, ActivityCategory::PrePractice, 15, 1),
                activity(2, 1, ActivityCategory::TeamWide, 10, 2),
                activity(3, 1, ActivityCategory::GroupSpecific, 20, 3),
            ],
        )])
    }

    #[test]
    fn test_seed_times_are_compiled_on_construction() {
        let store = seeded_store();

        let stored = store.activity(1, 2).unwrap();
        assert_eq!(stored.time_from, time(18, 0));
        assert_eq!(stored.time_to, time(18, 10));

        let pre = store.activity(1, 1).unwrap();
        assert_eq!(pre.time_to, time(18, 0));
        assert_eq!(pre.time_from, time(17, 45));
    }

    #[test]
    fn test_create_activity_shifts_existing_rows() {
        let mut store = seeded_store();

        // New warmup between the existing regular activities
        let mut inserted = activity(0, 1, ActivityCategory::TeamWide, 5, 2);
        inserted.order = 2;
        let id = store.create_activity(inserted).unwrap();

        // Ties keep input sequence: the existing order-2 activity compiled
        // first, the new one follows it, and the order-3 row shifted by 5.
        assert!(id >= 4);
        let shifted = store.activity(1, 3).unwrap();
        assert_eq!(shifted.time_from, time(18, 15));
    }

    #[test]
    fn test_delete_activity_recompiles_remaining_rows() {
        let mut store = seeded_store();

        store.delete_activity(1, 2).unwrap();

        let drills = store.activity(1, 3).unwrap();
        assert_eq!(drills.time_from, time(18, 0));
    }

    #[test]
    fn test_reorder_recompiles_all_rows() {
        let mut store = seeded_store();

        let order = HashMap::from([(2, 3), (3, 2)]);
        store.reorder_activities(1, &order).unwrap();

        let drills = store.activity(1, 3).unwrap();
        assert_eq!(drills.time_from, time(18, 0));
        let warmup = store.activity(1, 2).unwrap();
        assert_eq!(warmup.time_from, time(18, 20));
    }

    #[test]
    fn test_reorder_rejects_foreign_activity() {
        let mut store = PlanStore::new(vec![
            (
                plan(1, time(18, 0)),
                vec![activity(1, 1, ActivityCategory::TeamWide, 10, 1)],
            ),
            (
                plan(2, time(19, 0)),
                vec![activity(2, 2, ActivityCategory::TeamWide, 10, 1)],
            ),
        ]);

        let order = HashMap::from([(2, 1)]);
        let err = store.reorder_activities(1, &order).unwrap_err();

        assert_eq!(err, StoreError::WrongPlan { activity_id: 2, plan_id: 1 });
    }

    #[test]
    fn test_start_time_change_recompiles() {
        let mut store = seeded_store();

        let mut updated = store.plan(1).unwrap().clone();
        updated.start_time = time(19, 0);
        store.update_plan(updated).unwrap();

        let warmup = store.activity(1, 2).unwrap();
        assert_eq!(warmup.time_from, time(19, 0));
        let pre = store.activity(1, 1).unwrap();
        assert_eq!(pre.time_to, time(19, 0));
    }

    #[test]
    fn test_copy_plan_clones_activities_under_fresh_ids() {
        let mut store = seeded_store();

        let copy_id = store
            .copy_plan(
                1,
                PlanOverrides {
                    start_time: Some(time(20, 0)),
                    ..PlanOverrides::default()
                },
            )
            .unwrap();

        let copy = store.plan(copy_id).unwrap();
        assert_eq!(copy.title, "Practice (Copy)");
        assert_eq!(copy.start_time, time(20, 0));

        let copied = store.plan_activities(copy_id);
        assert_eq!(copied.len(), 3);
        assert!(copied.iter().all(|stored| stored.activity.plan_id == copy_id));
        // Copied regular block starts at the overridden start time
        assert_eq!(copied[1].time_from, time(20, 0));

        // Original rows untouched
        assert_eq!(store.activity(1, 2).unwrap().time_from, time(18, 0));
    }

    #[test]
    fn test_delete_plan_drops_its_activities() {
        let mut store = seeded_store();

        store.delete_plan(1).unwrap();

        assert!(store.plan(1).is_none());
        assert!(store.plan_activities(1).is_empty());
    }

    #[test]
    fn test_next_start_time_is_last_regular_end() {
        let store = seeded_store();

        assert_eq!(store.next_start_time(1), Some(time(18, 30)));
    }

    #[test]
    fn test_next_start_time_of_empty_plan_is_plan_start() {
        let store = PlanStore::new(vec![(plan(1, time(18, 0)), vec![])]);

        assert_eq!(store.next_start_time(1), Some(time(18, 0)));
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut store = seeded_store();

        assert_eq!(store.delete_plan(99), Err(StoreError::PlanNotFound(99)));
        assert_eq!(
            store.delete_activity(1, 99),
            Err(StoreError::ActivityNotFound(99))
        );
    }
}
