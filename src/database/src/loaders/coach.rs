use chrono::NaiveDate;
use core::{Certificate, Coach, Experience};
use serde::Deserialize;

const STATIC_COACHES_JSON: &str = include_str!("../../data/coaches.json");

#[derive(Deserialize)]
pub struct CoachEntity {
    pub id: u32,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub certificates: Vec<CertificateEntity>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntity>,
}

#[derive(Deserialize)]
pub struct CertificateEntity {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub acquisition_date: NaiveDate,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Deserialize)]
pub struct ExperienceEntity {
    pub id: u32,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    pub team: String,
    pub position: String,
}

pub struct CoachLoader;

impl CoachLoader {
    pub fn load() -> Vec<Coach> {
        let entities: Vec<CoachEntity> = serde_json::from_str(STATIC_COACHES_JSON).unwrap();
        entities.into_iter().map(Self::convert).collect()
    }

    fn convert(entity: CoachEntity) -> Coach {
        Coach {
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            first_name: entity.first_name,
            last_name: entity.last_name,
            license_number: entity.license_number,
            mobile_phone: entity.mobile_phone,
            address: entity.address,
            zip_code: entity.zip_code,
            city: entity.city,
            birth_date: entity.birth_date,
            team: entity.team,
            is_admin: entity.is_admin,
            certificates: entity
                .certificates
                .into_iter()
                .map(|certificate| Certificate {
                    id: certificate.id,
                    title: certificate.title,
                    organization: certificate.organization,
                    acquisition_date: certificate.acquisition_date,
                    valid_until: certificate.valid_until,
                    file_url: certificate.file_url,
                })
                .collect(),
            experiences: entity
                .experiences
                .into_iter()
                .map(|experience| Experience {
                    id: experience.id,
                    start_year: experience.start_year,
                    end_year: experience.end_year,
                    team: experience.team,
                    position: experience.position,
                })
                .collect(),
        }
    }
}
