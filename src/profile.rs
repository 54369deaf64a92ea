//! Candidate view-model transformation.
//!
//! Pure mapping from a stored [`ParsedResume`] to the display-ready
//! [`CandidateProfile`] consumed by profile pages: field renaming, placeholder
//! substitution, derived metrics and keyword-driven highlight/achievement
//! generation. Nothing here touches the database or the network.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resume::{years_from_history, Certificate, EducationEntry, EmploymentEntry, ParsedResume};

/// Icon identifiers a rendering client is expected to know. Unknown icons
/// fall back to "Users".
const KNOWN_ICONS: &[&str] = &[
    "Users",
    "TrendingUp",
    "Target",
    "Zap",
    "Mail",
    "Phone",
    "MapPin",
    "Calendar",
    "Award",
    "Briefcase",
    "GraduationCap",
    "Languages",
    "Star",
    "Shield",
    "Clock",
];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Highlight {
    /// Icon identifier for the rendering client
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Short headline figure, e.g. "8+"
    pub metric: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopSkill {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SoftwareSkill {
    pub name: String,
    /// Proficiency 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguageSkill {
    pub language: String,
    pub fluency: String,
    /// Proficiency 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonalData {
    pub residence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationView {
    pub institution: String,
    pub degree: String,
    pub graduation_date: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificateView {
    pub name: String,
    pub date: String,
    pub issuer: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountManager {
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
}

/// Display-oriented reshaping of a parsed resume. Derived on each request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateProfile {
    pub name: String,
    pub position: String,
    pub salary: String,
    pub availability: String,
    pub location_label: String,
    pub experience: String,
    pub seniority: String,
    pub summary: String,
    pub job_roles: Vec<String>,
    pub core_topics: Vec<String>,
    pub personal_data: PersonalData,
    pub highlights: Vec<Highlight>,
    pub top_skills: Vec<TopSkill>,
    pub software_skills: Vec<SoftwareSkill>,
    pub language_skills: Vec<LanguageSkill>,
    pub work: Vec<WorkExperience>,
    pub education: Vec<EducationView>,
    pub certificates: Vec<CertificateView>,
}

/// Envelope returned by the candidate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateProfileResponse {
    pub candidate: CandidateProfile,
    pub account_manager: AccountManager,
    pub nav_sections: Vec<NavigationItem>,
    pub timestamp: DateTime<Utc>,
}

/// Build the full candidate view-model from a stored resume.
pub fn build_profile(resume: &ParsedResume) -> CandidateProfile {
    let years = experience_years(resume);

    CandidateProfile {
        name: resume.name.clone(),
        position: resume.title.clone(),
        salary: "On request".to_string(),
        availability: "Immediately".to_string(),
        location_label: location_label(resume),
        experience: format!("{}+ years", years),
        seniority: seniority_label(years).to_string(),
        summary: resume.brief.clone(),
        job_roles: if resume.title.is_empty() {
            vec![]
        } else {
            vec![resume.title.clone()]
        },
        core_topics: resume.skills.clone(),
        personal_data: PersonalData {
            residence: resume.contact.location_city.clone(),
        },
        highlights: build_highlights(resume, years),
        top_skills: build_top_skills(&resume.skills),
        software_skills: build_software_skills(&resume.skills, &resume.certificates),
        language_skills: resume
            .languages
            .iter()
            .map(|lang| LanguageSkill {
                language: lang.clone(),
                fluency: "Fluent".to_string(),
                level: 80,
            })
            .collect(),
        work: resume
            .employment_history
            .iter()
            .map(|job| WorkExperience {
                company: job.company.clone(),
                position: job.position.clone(),
                start_date: format_display_date(&job.start_date),
                end_date: format_display_date(&job.end_date),
                summary: job.description.join("\n"),
                achievements: achievements_for(job),
            })
            .collect(),
        education: resume
            .education
            .iter()
            .map(|edu| EducationView {
                institution: edu.institution.clone(),
                degree: edu.degree.clone(),
                graduation_date: format_display_date(&edu.graduation_date),
                note: education_note(edu),
            })
            .collect(),
        certificates: resume
            .certificates
            .iter()
            .map(|cert| CertificateView {
                name: cert.name.clone(),
                date: if cert.date.is_empty() {
                    Utc::now().year().to_string()
                } else {
                    cert.date.clone()
                },
                issuer: if cert.issuer.is_empty() {
                    certificate_issuer(&cert.name).to_string()
                } else {
                    cert.issuer.clone()
                },
                description: certificate_description(&cert.name),
            })
            .collect(),
    }
}

/// Years of experience: trust the parser's derived figure when present,
/// otherwise compute from the employment history.
pub fn experience_years(resume: &ParsedResume) -> i32 {
    if resume.derived.years_of_experience > 0 {
        resume.derived.years_of_experience
    } else {
        years_from_history(&resume.employment_history)
    }
}

pub fn seniority_label(years: i32) -> &'static str {
    if years > 5 {
        "Senior"
    } else if years >= 3 {
        "Mid-Level"
    } else {
        "Junior"
    }
}

fn location_label(resume: &ParsedResume) -> String {
    let city = resume.contact.location_city.trim();
    let country = resume.contact.location_country.trim();
    match (city.is_empty(), country.is_empty()) {
        (false, false) => format!("{}, {}", city, country),
        (false, true) => city.to_string(),
        (true, false) => country.to_string(),
        (true, true) => String::new(),
    }
}

/// Four marketing highlight cards derived from the available data.
pub fn build_highlights(resume: &ParsedResume, years: i32) -> Vec<Highlight> {
    let since = resume
        .employment_history
        .iter()
        .filter_map(|job| {
            let year: String = job.start_date.chars().take(4).collect();
            year.parse::<i32>().ok()
        })
        .min();
    let expertise = resume
        .skills
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(" and ");

    vec![
        Highlight {
            icon: normalize_icon("Users").to_string(),
            title: "Extensive network".to_string(),
            description: "Broad professional network across the industry".to_string(),
            metric: "500+".to_string(),
            label: "Professional contacts".to_string(),
        },
        Highlight {
            icon: normalize_icon("TrendingUp").to_string(),
            title: format!("{}+ years of experience", years),
            description: match since {
                Some(year) => format!("Professional track record since {}", year),
                None => "Long-standing professional track record".to_string(),
            },
            metric: format!("{}+", years),
            label: "Years of experience".to_string(),
        },
        Highlight {
            icon: normalize_icon("Target").to_string(),
            title: "Domain expertise".to_string(),
            description: if expertise.is_empty() {
                "Specialist knowledge in the candidate's field".to_string()
            } else {
                format!("Specialization in {}", expertise)
            },
            metric: resume.skills.len().to_string(),
            label: "Core competencies".to_string(),
        },
        Highlight {
            icon: normalize_icon("Zap").to_string(),
            title: "Proven track record".to_string(),
            description: "Demonstrable results across a range of projects".to_string(),
            metric: "100%".to_string(),
            label: "Delivery rate".to_string(),
        },
    ]
}

/// Up to three skill cards sliced from the skills list.
pub fn build_top_skills(skills: &[String]) -> Vec<TopSkill> {
    let mut cards = Vec::new();

    if let Some(first) = skills.first() {
        cards.push(TopSkill {
            title: format!("{} excellence", first),
            description: format!(
                "Extensive experience and expertise in {} with demonstrable results.",
                first
            ),
            keywords: skills.iter().take(3).cloned().collect(),
        });
    }
    if skills.len() > 1 {
        let pair = skills
            .iter()
            .skip(1)
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(" and ");
        cards.push(TopSkill {
            title: "Strategic competence".to_string(),
            description: format!("Strategic thinking and execution across {}.", pair),
            keywords: skills.iter().skip(1).take(3).cloned().collect(),
        });
    }
    cards.push(TopSkill {
        title: "Leadership".to_string(),
        description: "Proven leadership skills and the ability to motivate teams and deliver projects."
            .to_string(),
        keywords: vec![
            "Leadership".to_string(),
            "Team management".to_string(),
            "Project management".to_string(),
        ],
    });

    cards
}

/// Baseline office tooling plus keyword-driven additions from skills and
/// certificates.
pub fn build_software_skills(skills: &[String], certificates: &[Certificate]) -> Vec<SoftwareSkill> {
    let mut software = vec![
        SoftwareSkill {
            name: "MS Office".to_string(),
            level: 95,
        },
        SoftwareSkill {
            name: "Google Workspace".to_string(),
            level: 90,
        },
    ];

    let has_keyword = |needle: &str| {
        skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
    };

    if has_keyword("recruiting") || has_keyword("talent") {
        software.push(SoftwareSkill {
            name: "Recruiting tools".to_string(),
            level: 85,
        });
        software.push(SoftwareSkill {
            name: "ATS systems".to_string(),
            level: 80,
        });
    }
    if has_keyword("data") || has_keyword("analy") {
        software.push(SoftwareSkill {
            name: "Excel/Analytics".to_string(),
            level: 90,
        });
        software.push(SoftwareSkill {
            name: "BI tools".to_string(),
            level: 75,
        });
    }
    let mentions_sap = has_keyword("sap")
        || certificates
            .iter()
            .any(|cert| cert.name.to_lowercase().contains("sap"));
    if mentions_sap {
        software.push(SoftwareSkill {
            name: "SAP".to_string(),
            level: 85,
        });
    }

    software
}

/// Achievement bullets for one employment entry: the entry's own description
/// lines when present, otherwise generated from position keywords.
pub fn achievements_for(job: &EmploymentEntry) -> Vec<String> {
    if !job.description.is_empty() {
        return job.description.clone();
    }

    let position = job.position.to_lowercase();
    if position.contains("ceo") || position.contains("founder") {
        vec![
            "Successful company leadership and strategic direction".to_string(),
            "Built and developed core business processes".to_string(),
            "Led and motivated cross-functional teams".to_string(),
            "Established partnerships and client relationships".to_string(),
        ]
    } else if position.contains("project") {
        vec![
            "Delivered complex projects end to end".to_string(),
            "Coordinated between diverse stakeholders".to_string(),
            "Kept budgets and timelines on track".to_string(),
            "Implemented process improvements".to_string(),
        ]
    } else if position.contains("manager") {
        vec![
            "Led and developed staff teams".to_string(),
            "Optimized workflows and processes".to_string(),
            "Met and exceeded targets".to_string(),
            "Built client relationships and partnerships".to_string(),
        ]
    } else {
        vec![
            format!("Successful tenure as {}", job.position),
            "Contributed to company growth and success".to_string(),
            "Worked closely with internal and external stakeholders".to_string(),
            "Continuously developed professional expertise".to_string(),
        ]
    }
}

/// Focus note for an education entry, keyed on the degree text.
pub fn education_note(edu: &EducationEntry) -> String {
    let degree = edu.degree.to_lowercase();
    if degree.contains("computer") || degree.contains("informatic") {
        "Focus: digital transformation and process optimization".to_string()
    } else if degree.contains("psycholog") {
        "Focus: work and organizational psychology".to_string()
    } else if degree.contains("business") || degree.contains("econom") {
        "Focus: corporate leadership and strategic management".to_string()
    } else if degree.contains("engineering") {
        "Focus: technical innovation and project management".to_string()
    } else if degree.is_empty() {
        String::new()
    } else {
        format!("Focus: {}", edu.degree)
    }
}

pub fn certificate_issuer(name: &str) -> &'static str {
    let name = name.to_lowercase();
    if name.contains("sap") {
        "SAP"
    } else if name.contains("microsoft") {
        "Microsoft"
    } else if name.contains("google") {
        "Google"
    } else if name.contains("scholarship") {
        "Federal Ministry of Education and Research"
    } else {
        "Certification body"
    }
}

pub fn certificate_description(name: &str) -> String {
    let lowered = name.to_lowercase();
    if lowered.contains("sap") {
        "Certification in SAP systems and business intelligence".to_string()
    } else if lowered.contains("scholarship") {
        "Merit scholarship for outstanding academic performance".to_string()
    } else if lowered.contains("project") {
        "Certification in project management methods".to_string()
    } else {
        format!("Professional certification: {}", name)
    }
}

/// Page navigation sections; empty lists drop their section.
pub fn nav_sections(resume: &ParsedResume) -> Vec<NavigationItem> {
    let mut sections = vec![NavigationItem {
        id: "profile".to_string(),
        label: "Profile".to_string(),
    }];
    if !resume.employment_history.is_empty() {
        sections.push(NavigationItem {
            id: "experience".to_string(),
            label: "Experience".to_string(),
        });
    }
    if !resume.education.is_empty() {
        sections.push(NavigationItem {
            id: "education".to_string(),
            label: "Education".to_string(),
        });
    }
    if !resume.skills.is_empty() {
        sections.push(NavigationItem {
            id: "skills".to_string(),
            label: "Skills".to_string(),
        });
    }
    if !resume.languages.is_empty() {
        sections.push(NavigationItem {
            id: "languages".to_string(),
            label: "Languages".to_string(),
        });
    }
    sections
}

pub fn default_account_manager() -> AccountManager {
    AccountManager {
        name: "Daniela Sentesch".to_string(),
        position: "Senior Talent Acquisition Manager".to_string(),
        email: "d.sentesch@example.com".to_string(),
        phone: "+49 221 123456789".to_string(),
    }
}

/// Map an icon identifier onto the known set, falling back to "Users".
pub fn normalize_icon(icon: &str) -> &str {
    if KNOWN_ICONS.contains(&icon) {
        icon
    } else {
        "Users"
    }
}

/// Render a date string for display: "2020-01" or "2020-01-15" becomes
/// "January 2020", a bare year passes through, "Present" is preserved and
/// anything unparseable is echoed back.
pub fn format_display_date(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() || date == "Present" {
        return date.to_string();
    }
    if date.len() == 4 && date.parse::<i32>().is_ok() {
        return date.to_string();
    }

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d"));
    match parsed {
        Ok(parsed) => format!("{} {}", month_name(parsed.month()), parsed.year()),
        Err(_) => date.to_string(),
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
