use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Fixed roster of position groups. The declaration order is the display
/// order of the agenda table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PositionGroup {
    OffensiveLine,
    DefensiveLine,
    Linebacker,
    RunningBack,
    TightEnd,
    WideReceiver,
    Quarterback,
    DefensiveBack,
}

impl PositionGroup {
    pub const ORDER: [PositionGroup; 8] = [
        PositionGroup::OffensiveLine,
        PositionGroup::DefensiveLine,
        PositionGroup::Linebacker,
        PositionGroup::RunningBack,
        PositionGroup::TightEnd,
        PositionGroup::WideReceiver,
        PositionGroup::Quarterback,
        PositionGroup::DefensiveBack,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            PositionGroup::OffensiveLine => "OL",
            PositionGroup::DefensiveLine => "DL",
            PositionGroup::Linebacker => "LB",
            PositionGroup::RunningBack => "RB",
            PositionGroup::TightEnd => "TE",
            PositionGroup::WideReceiver => "WR",
            PositionGroup::Quarterback => "QB",
            PositionGroup::DefensiveBack => "DB",
        }
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGroupError(pub String);

impl fmt::Display for UnknownGroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown position group '{}'", self.0)
    }
}

impl std::error::Error for UnknownGroupError {}

impl FromStr for PositionGroup {
    type Err = UnknownGroupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "OL" => Ok(PositionGroup::OffensiveLine),
            "DL" => Ok(PositionGroup::DefensiveLine),
            "LB" => Ok(PositionGroup::Linebacker),
            "RB" => Ok(PositionGroup::RunningBack),
            "TE" => Ok(PositionGroup::TightEnd),
            "WR" => Ok(PositionGroup::WideReceiver),
            "QB" => Ok(PositionGroup::Quarterback),
            "DB" => Ok(PositionGroup::DefensiveBack),
            other => Err(UnknownGroupError(other.to_string())),
        }
    }
}

/// One or more position groups addressed by a single agenda label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    Single(PositionGroup),
    Set(Vec<PositionGroup>),
}

impl GroupSelector {
    /// Parses a raw selector key: a single tag or a comma-joined tag list.
    /// Tags are trimmed, de-duplicated and brought into roster order, so
    /// "WR, QB,TE" and "TE,QB,WR" produce the same selector. Unknown tags
    /// and empty keys are rejected here, before any rendering happens.
    pub fn parse(key: &str) -> Result<Self, UnknownGroupError> {
        let mut groups = key
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<PositionGroup>, _>>()?;

        if groups.is_empty() {
            return Err(UnknownGroupError(key.to_string()));
        }

        groups.sort();
        groups.dedup();

        if groups.len() == 1 {
            Ok(GroupSelector::Single(groups[0]))
        } else {
            Ok(GroupSelector::Set(groups))
        }
    }

    pub fn contains(&self, group: PositionGroup) -> bool {
        match self {
            GroupSelector::Single(single) => *single == group,
            GroupSelector::Set(groups) => groups.contains(&group),
        }
    }

    /// Canonical persistence key: member tags sorted alphabetically and
    /// joined with commas, matching how keys are stored.
    pub fn key(&self) -> String {
        match self {
            GroupSelector::Single(group) => group.tag().to_string(),
            GroupSelector::Set(groups) => {
                let mut tags: Vec<&str> = groups.iter().map(PositionGroup::tag).collect();
                tags.sort_unstable();
                tags.join(",")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAssignment {
    pub selector: GroupSelector,
    pub label: String,
}

/// Parsed selector-to-label mapping of a group- or position-specific
/// activity. Built once at the input boundary from the raw string-keyed
/// form so that render paths never see malformed keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupAssignments {
    entries: Vec<GroupAssignment>,
}

impl GroupAssignments {
    pub fn parse<'a, I>(raw: I) -> Result<Self, UnknownGroupError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries = Vec::new();

        for (key, label) in raw {
            let label = label.trim();
            if label.is_empty() {
                continue;
            }

            entries.push(GroupAssignment {
                selector: GroupSelector::parse(key)?,
                label: label.to_string(),
            });
        }

        Ok(GroupAssignments { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GroupAssignment] {
        &self.entries
    }

    /// Label assigned to one roster group, expanding set selectors across
    /// their members. Later entries win when selectors overlap.
    pub fn label_for(&self, group: PositionGroup) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.selector.contains(group))
            .map(|entry| entry.label.as_str())
    }

    /// Canonical key-to-label pairs for persistence and wire output.
    pub fn to_raw(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.selector.key(), entry.label.clone()))
            .collect()
    }
}

/// Per-group participation flags, the plain form every activity carries
/// regardless of category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupFlags {
    flags: HashMap<PositionGroup, bool>,
}

impl GroupFlags {
    pub fn parse<'a, I>(raw: I) -> Result<Self, UnknownGroupError>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut flags = HashMap::new();

        for (tag, active) in raw {
            flags.insert(tag.parse()?, active);
        }

        Ok(GroupFlags { flags })
    }

    pub fn from_active(groups: &[PositionGroup]) -> Self {
        GroupFlags {
            flags: groups.iter().map(|group| (*group, true)).collect(),
        }
    }

    pub fn is_active(&self, group: PositionGroup) -> bool {
        self.flags.get(&group).copied().unwrap_or(false)
    }

    /// Active groups in roster order.
    pub fn active_groups(&self) -> Vec<PositionGroup> {
        PositionGroup::ORDER
            .iter()
            .copied()
            .filter(|group| self.is_active(*group))
            .collect()
    }

    pub fn to_raw(&self) -> Vec<(String, bool)> {
        PositionGroup::ORDER
            .iter()
            .filter_map(|group| {
                self.flags
                    .get(group)
                    .map(|active| (group.tag().to_string(), *active))
            })
            .collect()
    }
}
