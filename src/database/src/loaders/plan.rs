use chrono::{NaiveDate, NaiveTime, Weekday};
use core::{GroupAssignments, GroupFlags, TrainingActivity, TrainingPlan};
use serde::Deserialize;
use std::collections::BTreeMap;

const STATIC_PLANS_JSON: &str = include_str!("../../data/plans.json");

#[derive(Deserialize)]
pub struct PlanEntity {
    pub id: u32,
    pub title: String,
    pub team_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    pub start_time: String,
    #[serde(default)]
    pub dresscode: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub activities: Vec<ActivityEntity>,
}

#[derive(Deserialize)]
pub struct ActivityEntity {
    pub id: u32,
    pub name: String,
    pub activity_type: String,
    pub duration_minutes: u16,
    #[serde(default)]
    pub groups: Option<BTreeMap<String, bool>>,
    #[serde(default)]
    pub group_activities: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub notes: Option<String>,
    pub order: u32,
}

pub struct PlanLoader;

impl PlanLoader {
    /// Seed data is embedded at build time; malformed entries are a build
    /// artifact defect and abort startup.
    pub fn load() -> Vec<(TrainingPlan, Vec<TrainingActivity>)> {
        let entities: Vec<PlanEntity> = serde_json::from_str(STATIC_PLANS_JSON).unwrap();
        entities.into_iter().map(Self::convert).collect()
    }

    fn convert(entity: PlanEntity) -> (TrainingPlan, Vec<TrainingActivity>) {
        let plan_id = entity.id;

        let activities = entity
            .activities
            .into_iter()
            .map(|activity| TrainingActivity {
                id: activity.id,
                plan_id,
                name: activity.name,
                category: activity.activity_type.parse().unwrap(),
                duration_minutes: activity.duration_minutes,
                groups: activity.groups.map(|raw| {
                    GroupFlags::parse(raw.iter().map(|(tag, active)| (tag.as_str(), *active)))
                        .unwrap()
                }),
                group_assignments: activity.group_activities.map(|raw| {
                    GroupAssignments::parse(
                        raw.iter().map(|(key, label)| (key.as_str(), label.as_str())),
                    )
                    .unwrap()
                }),
                notes: activity.notes,
                order: activity.order,
            })
            .collect();

        let plan = TrainingPlan {
            id: plan_id,
            title: entity.title,
            team_name: entity.team_name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            weekday: Weekday::try_from(entity.weekday).unwrap(),
            start_time: NaiveTime::parse_from_str(&entity.start_time, "%H:%M").unwrap(),
            dresscode: entity.dresscode,
            focus: entity.focus,
            goals: entity.goals,
        };

        (plan, activities)
    }
}
