use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured resume as returned by the parsing service and stored in the
/// `resumes` table. Every field defaults when absent so that partial parser
/// output never fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedResume {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// Short free-text profile summary written by the parser.
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub employment_history: Vec<EmploymentEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub derived: DerivedFacts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    #[serde(default)]
    pub location_city: String,
    #[serde(default)]
    pub location_country: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmploymentEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, rename = "startDate")]
    pub start_date: String,
    #[serde(default, rename = "endDate")]
    pub end_date: String,
    /// Bullet lines describing the role; may be empty.
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default, rename = "graduationDate")]
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Certificate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub issuer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DerivedFacts {
    #[serde(default)]
    pub years_of_experience: i32,
    #[serde(default)]
    pub approximate_age: Option<i32>,
}

impl ParsedResume {
    /// Fill `derived.years_of_experience` from the employment history when the
    /// parser left it at zero. Uses the earliest start year; any employment at
    /// all counts for at least one year.
    pub fn ensure_derived(&mut self) {
        if self.derived.years_of_experience <= 0 {
            self.derived.years_of_experience = years_from_history(&self.employment_history);
        }
    }
}

/// Total experience in whole years based on the earliest employment start
/// date. Returns 0 for an empty history.
pub fn years_from_history(history: &[EmploymentEntry]) -> i32 {
    let earliest = history
        .iter()
        .filter_map(|job| start_year(&job.start_date))
        .min();
    match earliest {
        Some(year) => (Utc::now().year() - year).max(1),
        None => {
            if history.is_empty() {
                0
            } else {
                // Entries exist but none carry a parseable start date.
                1
            }
        }
    }
}

fn start_year(date: &str) -> Option<i32> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed.year());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d") {
        return Some(parsed.year());
    }
    if date.len() == 4 {
        if let Ok(year) = date.parse::<i32>() {
            return Some(year);
        }
    }
    None
}
