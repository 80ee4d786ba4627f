use chrono::{Duration, NaiveDate};

pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct Certificate {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub acquisition_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub file_url: Option<String>,
}

impl Certificate {
    /// Certificates without an expiry date never expire.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_until.is_some_and(|valid_until| valid_until < today)
    }

    pub fn expires_soon(&self, today: NaiveDate, days: i64) -> bool {
        self.valid_until.is_some_and(|valid_until| {
            today <= valid_until && valid_until <= today + Duration::days(days)
        })
    }
}
