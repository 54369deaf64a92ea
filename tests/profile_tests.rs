use cvfolio::parser::sample_resume;
use cvfolio::profile::{
    achievements_for, build_profile, build_software_skills, build_top_skills, certificate_issuer,
    education_note, format_display_date, nav_sections, normalize_icon, seniority_label,
    SoftwareSkill,
};
use cvfolio::resume::{
    Certificate, DerivedFacts, EducationEntry, EmploymentEntry, ParsedResume,
};

fn job(position: &str, description: Vec<&str>) -> EmploymentEntry {
    EmploymentEntry {
        company: "Acme GmbH".to_string(),
        position: position.to_string(),
        start_date: "2019-03-01".to_string(),
        end_date: "Present".to_string(),
        description: description.into_iter().map(String::from).collect(),
    }
}

#[test]
fn seniority_tiers() {
    assert_eq!(seniority_label(1), "Junior");
    assert_eq!(seniority_label(3), "Mid-Level");
    assert_eq!(seniority_label(5), "Mid-Level");
    assert_eq!(seniority_label(6), "Senior");
}

#[test]
fn achievements_prefer_own_description_lines() {
    let entry = job("Senior Engineer", vec!["Shipped the billing system"]);
    assert_eq!(achievements_for(&entry), vec!["Shipped the billing system"]);
}

#[test]
fn achievements_generated_from_position_keywords() {
    let founder = achievements_for(&job("Founder & CEO", vec![]));
    assert!(founder[0].contains("leadership"));

    let pm = achievements_for(&job("Project Lead", vec![]));
    assert!(pm[0].contains("projects"));

    let manager = achievements_for(&job("Account Manager", vec![]));
    assert!(manager[0].contains("teams"));

    // Generic fallback names the position itself
    let other = achievements_for(&job("Data Analyst", vec![]));
    assert!(other[0].contains("Data Analyst"));
    assert_eq!(other.len(), 4);
}

#[test]
fn top_skills_slice_the_skill_list() {
    let skills: Vec<String> = ["Recruiting", "Talent Acquisition", "Process Design", "Analytics"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let cards = build_top_skills(&skills);
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].title, "Recruiting excellence");
    assert_eq!(cards[0].keywords, &skills[..3]);
    assert_eq!(cards[1].keywords, &skills[1..4]);
    assert_eq!(cards[2].title, "Leadership");

    // The leadership card is always present, even with no skills at all.
    let empty = build_top_skills(&[]);
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].title, "Leadership");
}

#[test]
fn software_skills_follow_keywords() {
    let baseline = build_software_skills(&[], &[]);
    assert_eq!(
        baseline,
        vec![
            SoftwareSkill {
                name: "MS Office".to_string(),
                level: 95
            },
            SoftwareSkill {
                name: "Google Workspace".to_string(),
                level: 90
            },
        ]
    );

    let skills = vec!["Recruiting".to_string(), "Data Analysis".to_string()];
    let names: Vec<String> = build_software_skills(&skills, &[])
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert!(names.contains(&"ATS systems".to_string()));
    assert!(names.contains(&"BI tools".to_string()));

    let certs = vec![Certificate {
        name: "SAP Certified Application Associate".to_string(),
        date: String::new(),
        issuer: String::new(),
    }];
    let names: Vec<String> = build_software_skills(&[], &certs)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert!(names.contains(&"SAP".to_string()));
}

#[test]
fn education_notes_by_degree_keyword() {
    let note = |degree: &str| {
        education_note(&EducationEntry {
            degree: degree.to_string(),
            institution: "University".to_string(),
            graduation_date: "2019".to_string(),
        })
    };
    assert!(note("BSc Computer Science").contains("digital transformation"));
    assert!(note("Psychology").contains("organizational psychology"));
    assert!(note("Business Administration").contains("strategic management"));
    assert!(note("Mechanical Engineering").contains("technical innovation"));
    assert_eq!(note("Fine Arts"), "Focus: Fine Arts");
    assert_eq!(note(""), "");
}

#[test]
fn certificate_issuer_heuristics() {
    assert_eq!(certificate_issuer("SAP Certified"), "SAP");
    assert_eq!(certificate_issuer("Microsoft Azure Fundamentals"), "Microsoft");
    assert_eq!(certificate_issuer("Google Analytics"), "Google");
    assert_eq!(certificate_issuer("Something else"), "Certification body");
}

#[test]
fn display_dates() {
    assert_eq!(format_display_date("2020-01"), "January 2020");
    assert_eq!(format_display_date("2017-02-01"), "February 2017");
    assert_eq!(format_display_date("2019"), "2019");
    assert_eq!(format_display_date("Present"), "Present");
    assert_eq!(format_display_date(""), "");
    assert_eq!(format_display_date("sometime"), "sometime");
}

#[test]
fn icon_fallback() {
    assert_eq!(normalize_icon("TrendingUp"), "TrendingUp");
    assert_eq!(normalize_icon("NoSuchIcon"), "Users");
}

#[test]
fn nav_sections_skip_empty_lists() {
    let resume = ParsedResume::default();
    let ids: Vec<String> = nav_sections(&resume).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["profile"]);

    let mut resume = ParsedResume::default();
    resume.employment_history.push(job("Engineer", vec![]));
    resume.skills.push("Rust".to_string());
    let ids: Vec<String> = nav_sections(&resume).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["profile", "experience", "skills"]);
}

#[test]
fn profile_from_sample_resume() {
    let mut resume = sample_resume();
    resume.ensure_derived();
    let profile = build_profile(&resume);

    assert_eq!(profile.name, "Max Mustermann");
    assert_eq!(profile.position, "Software Engineer");
    assert_eq!(profile.salary, "On request");
    assert_eq!(profile.availability, "Immediately");
    assert_eq!(profile.location_label, "Berlin, DE");
    assert!(profile.experience.ends_with("+ years"));
    assert_eq!(profile.job_roles, vec!["Software Engineer"]);
    assert_eq!(profile.core_topics.len(), 4);

    // Highlight metrics line up with the resume content
    assert_eq!(profile.highlights.len(), 4);
    assert_eq!(profile.highlights[2].metric, "4");
    assert!(profile.highlights[1].description.contains("2020"));

    // Work entries carry display dates and achievements
    assert_eq!(profile.work[0].start_date, "January 2020");
    assert_eq!(profile.work[0].end_date, "Present");
    assert_eq!(
        profile.work[0].achievements,
        resume.employment_history[0].description
    );

    assert_eq!(profile.language_skills.len(), 2);
    assert_eq!(profile.language_skills[0].fluency, "Fluent");
}

#[test]
fn profile_tolerates_empty_resume() {
    let resume = ParsedResume {
        derived: DerivedFacts::default(),
        ..Default::default()
    };
    let profile = build_profile(&resume);

    assert_eq!(profile.name, "");
    assert_eq!(profile.location_label, "");
    assert_eq!(profile.experience, "0+ years");
    assert_eq!(profile.seniority, "Junior");
    assert!(profile.job_roles.is_empty());
    assert!(profile.work.is_empty());
    assert_eq!(profile.highlights.len(), 4);
    assert_eq!(profile.top_skills.len(), 1);
}
