use crate::staff::certificate::Certificate;
use crate::staff::experience::Experience;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Coach {
    pub id: u32,
    pub email: String,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license_number: Option<String>,
    pub mobile_phone: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub team: Option<String>,
    pub is_admin: bool,
    pub certificates: Vec<Certificate>,
    pub experiences: Vec<Experience>,
}

impl Coach {
    /// All personal fields the staff directory requires are present and
    /// non-empty.
    pub fn is_profile_complete(&self) -> bool {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.address,
            &self.zip_code,
            &self.city,
            &self.mobile_phone,
            &self.team,
        ];

        self.birth_date.is_some()
            && required
                .iter()
                .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }

    /// Total coaching experience across all recorded spans, rounded to whole
    /// years. Spans run from January 1st of their start year to December 31st
    /// of their end year; open-ended spans run to `today`.
    pub fn total_experience_years(&self, today: NaiveDate) -> u32 {
        if self.experiences.is_empty() {
            return 0;
        }

        let total_days: i64 = self
            .experiences
            .iter()
            .map(|experience| {
                let start = NaiveDate::from_ymd_opt(experience.start_year, 1, 1).unwrap();
                let end = match experience.end_year {
                    Some(year) => NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
                    None => today,
                };
                (end - start).num_days()
            })
            .sum();

        (total_days as f64 / 365.25).round() as u32
    }
}
