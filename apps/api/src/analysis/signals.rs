//! Resume Signal Extractor: pulls experience, company, project, education and
//! certification signals out of raw resume text.
//!
//! Every signal is a keyword or regex presence test. A non-match is an absent
//! signal, never an error, so any input (including empty text) yields a
//! well-formed `ResumeSignals`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::skills::extract_skills;
use crate::analysis::tables::{EducationKeywords, HeuristicTables};

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\+?\s*years?\s*(of\s*)?(experience|exp)")
        .expect("experience pattern is a valid regex")
});

const PROJECT_KEYWORD: &str = "project";
const PROJECT_EVIDENCE: &[&str] = &["project", "built", "developed"];

/// Highest degree detected in a resume. Ordered so `max` picks the top tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[default]
    None,
    Bachelors,
    Masters,
    PhD,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::None => "Not specified",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Masters => "Master's",
            EducationLevel::PhD => "PhD",
        }
    }
}

/// Facts extracted from one resume text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSignals {
    pub years_of_experience: u32,
    /// Company-list order, first letter capitalized.
    pub companies: Vec<String>,
    pub project_count: u32,
    pub has_projects: bool,
    pub education_level: EducationLevel,
    pub has_certifications: bool,
    /// Vocabulary order.
    pub extracted_skills: Vec<String>,
}

/// Extracts all resume signals from `text` using the given tables.
pub fn extract_signals(text: &str, tables: &HeuristicTables) -> ResumeSignals {
    let text_lower = text.to_lowercase();

    ResumeSignals {
        years_of_experience: extract_years_of_experience(text),
        companies: extract_companies(&text_lower, &tables.companies),
        project_count: text_lower.matches(PROJECT_KEYWORD).count() as u32,
        has_projects: PROJECT_EVIDENCE.iter().any(|kw| text_lower.contains(kw)),
        education_level: detect_education(&text_lower, &tables.education),
        has_certifications: tables
            .certification_keywords
            .iter()
            .any(|kw| text_lower.contains(kw.to_lowercase().as_str())),
        extracted_skills: extract_skills(text, &tables.skills),
    }
}

/// First "<n>+ years of experience" style mention; 0 when absent or unparseable.
fn extract_years_of_experience(text: &str) -> u32 {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

fn extract_companies(text_lower: &str, companies: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for company in companies {
        let company_lower = company.to_lowercase();
        if company_lower.is_empty() || !text_lower.contains(&company_lower) {
            continue;
        }
        let display = capitalize_first(&company_lower);
        if !found.contains(&display) {
            found.push(display);
        }
    }
    found
}

fn detect_education(text_lower: &str, keywords: &EducationKeywords) -> EducationLevel {
    let mentions = |list: &[String]| {
        list.iter()
            .any(|kw| text_lower.contains(kw.to_lowercase().as_str()))
    };

    if mentions(&keywords.phd) {
        EducationLevel::PhD
    } else if mentions(&keywords.masters) {
        EducationLevel::Masters
    } else if mentions(&keywords.bachelors) {
        EducationLevel::Bachelors
    } else {
        EducationLevel::None
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> HeuristicTables {
        HeuristicTables::embedded().unwrap()
    }

    #[test]
    fn test_years_of_experience_variants() {
        assert_eq!(extract_years_of_experience("5 years of experience"), 5);
        assert_eq!(extract_years_of_experience("7+ years experience in fintech"), 7);
        assert_eq!(extract_years_of_experience("1 year exp"), 1);
        assert_eq!(extract_years_of_experience("10 YEARS OF EXPERIENCE"), 10);
        assert_eq!(extract_years_of_experience("4yrs experience"), 0);
        assert_eq!(extract_years_of_experience(""), 0);
    }

    #[test]
    fn test_first_experience_match_wins() {
        assert_eq!(
            extract_years_of_experience("2 years of experience in Java, 6 years experience overall"),
            2
        );
    }

    #[test]
    fn test_overflowing_year_count_is_absent() {
        assert_eq!(
            extract_years_of_experience("99999999999999 years of experience"),
            0
        );
    }

    #[test]
    fn test_companies_capitalized_in_list_order() {
        let signals = extract_signals("Interned at IBM, then Microsoft and google", &tables());
        assert_eq!(signals.companies, vec!["Google", "Microsoft", "Ibm"]);
    }

    #[test]
    fn test_project_count_counts_every_occurrence() {
        let signals = extract_signals("Project A. PROJECTS: B, side-project C", &tables());
        assert_eq!(signals.project_count, 3);
        assert!(signals.has_projects);
    }

    #[test]
    fn test_has_projects_from_built_or_developed() {
        assert!(extract_signals("Developed a CLI", &tables()).has_projects);
        assert!(extract_signals("built a compiler", &tables()).has_projects);
        assert!(!extract_signals("maintained a service", &tables()).has_projects);
    }

    #[test]
    fn test_education_priority() {
        let t = tables();
        assert_eq!(
            extract_signals("B.Tech, M.Tech and PhD", &t).education_level,
            EducationLevel::PhD
        );
        assert_eq!(
            extract_signals("Bachelor of Science, Master of Engineering", &t).education_level,
            EducationLevel::Masters
        );
        assert_eq!(
            extract_signals("B.E. in Mechanical", &t).education_level,
            EducationLevel::Bachelors
        );
        assert_eq!(
            extract_signals("Doctorate in physics", &t).education_level,
            EducationLevel::PhD
        );
        assert_eq!(
            extract_signals("self taught", &t).education_level,
            EducationLevel::None
        );
    }

    #[test]
    fn test_education_keywords_matched_case_insensitively() {
        let mut t = tables();
        t.education = EducationKeywords {
            phd: vec!["PhD".to_string()],
            masters: vec!["M.Sc".to_string()],
            bachelors: vec!["B.Sc".to_string()],
        };
        assert_eq!(
            extract_signals("phd in chemistry", &t).education_level,
            EducationLevel::PhD
        );
        assert_eq!(
            extract_signals("M.SC. Statistics", &t).education_level,
            EducationLevel::Masters
        );
    }

    #[test]
    fn test_certifications_detected() {
        assert!(extract_signals("Azure Certified Developer", &tables()).has_certifications);
        assert!(extract_signals("CKA certificate", &tables()).has_certifications);
        assert!(!extract_signals("no credentials", &tables()).has_certifications);
    }

    #[test]
    fn test_empty_text_gives_default_signals() {
        assert_eq!(extract_signals("", &tables()), ResumeSignals::default());
    }

    #[test]
    fn test_unrecognized_text_has_no_signals() {
        let signals = extract_signals("lorem ipsum dolor sit amet", &tables());
        assert_eq!(signals.years_of_experience, 0);
        assert!(signals.companies.is_empty());
        assert_eq!(signals.project_count, 0);
        assert_eq!(signals.education_level, EducationLevel::None);
        assert!(!signals.has_certifications);
        assert!(signals.extracted_skills.is_empty());
    }

    #[test]
    fn test_education_level_ordering() {
        assert!(EducationLevel::PhD > EducationLevel::Masters);
        assert!(EducationLevel::Masters > EducationLevel::Bachelors);
        assert!(EducationLevel::Bachelors > EducationLevel::None);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("linkedin"), "Linkedin");
        assert_eq!(capitalize_first(""), "");
    }
}
