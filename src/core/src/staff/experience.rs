/// One span of coaching history. An open end year means the engagement is
/// still running.
#[derive(Debug, Clone)]
pub struct Experience {
    pub id: u32,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub team: String,
    pub position: String,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_year.is_none()
    }
}
