use crate::training::groups::{GroupAssignments, GroupFlags};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    PrePractice,
    TeamWide,
    GroupSpecific,
    PositionSpecific,
    SpecialTeams,
}

impl ActivityCategory {
    pub fn is_pre_practice(&self) -> bool {
        matches!(self, ActivityCategory::PrePractice)
    }

    /// True when the category renders as one row shared by the whole roster
    /// rather than per-group cells.
    pub fn is_shared_row(&self) -> bool {
        matches!(
            self,
            ActivityCategory::PrePractice | ActivityCategory::TeamWide | ActivityCategory::SpecialTeams
        )
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ActivityCategory::PrePractice => "prepractice",
            ActivityCategory::TeamWide => "team_wide",
            ActivityCategory::GroupSpecific => "group_specific",
            ActivityCategory::PositionSpecific => "position_specific",
            ActivityCategory::SpecialTeams => "special_teams",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ActivityCategory::PrePractice => "amber",
            ActivityCategory::TeamWide => "purple",
            ActivityCategory::GroupSpecific => "blue",
            ActivityCategory::PositionSpecific => "gray",
            ActivityCategory::SpecialTeams => "green",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError(pub String);

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activity category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategoryError {}

impl FromStr for ActivityCategory {
    type Err = UnknownCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "prepractice" => Ok(ActivityCategory::PrePractice),
            "team_wide" => Ok(ActivityCategory::TeamWide),
            "group_specific" => Ok(ActivityCategory::GroupSpecific),
            "position_specific" => Ok(ActivityCategory::PositionSpecific),
            "special_teams" => Ok(ActivityCategory::SpecialTeams),
            other => Err(UnknownCategoryError(other.to_string())),
        }
    }
}

/// One agenda item of a training plan. Concrete times are not stored here:
/// they are derived by the schedule compiler from `duration_minutes` and
/// `order` whenever the plan's activity set changes.
#[derive(Debug, Clone)]
pub struct TrainingActivity {
    pub id: u32,
    pub plan_id: u32,
    pub name: String,
    pub category: ActivityCategory,
    pub duration_minutes: u16,
    pub groups: Option<GroupFlags>,
    pub group_assignments: Option<GroupAssignments>,
    pub notes: Option<String>,
    /// Manual sequence index within the plan. Ascending `order` defines the
    /// chronological placement inside each category block.
    pub order: u32,
}
