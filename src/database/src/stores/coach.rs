use core::Coach;

/// Read-side coach directory, ordered by full name.
pub struct CoachStore {
    coaches: Vec<Coach>,
}

impl CoachStore {
    pub fn new(mut coaches: Vec<Coach>) -> Self {
        coaches.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        CoachStore { coaches }
    }

    pub fn coaches(&self) -> &[Coach] {
        &self.coaches
    }

    pub fn coach(&self, id: u32) -> Option<&Coach> {
        self.coaches.iter().find(|coach| coach.id == id)
    }

    /// Case-insensitive substring match on full name or email.
    pub fn search(&self, query: &str) -> Vec<&Coach> {
        let query = query.to_lowercase();

        self.coaches
            .iter()
            .filter(|coach| {
                coach.full_name.to_lowercase().contains(&query)
                    || coach.email.to_lowercase().contains(&query)
            })
            .collect()
    }
}
