use serde::{Deserialize, Serialize};

use crate::analysis::signals::{extract_signals, EducationLevel, ResumeSignals};
use crate::analysis::tables::HeuristicTables;

/// Readiness scores never exceed this, whatever the weights say.
pub const READINESS_CEILING: u32 = 100;

/// Point values and thresholds of the readiness heuristic.
/// These are tunable constants, not validated domain knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub senior_years: u32,
    pub senior_experience: u32,
    pub junior_years: u32,
    pub junior_experience: u32,
    pub entry_experience: u32,
    pub company: u32,
    pub many_projects_count: u32,
    pub many_projects: u32,
    pub some_projects: u32,
    pub phd: u32,
    pub masters: u32,
    pub bachelors: u32,
    pub certifications: u32,
    pub per_skill: u32,
    pub skills_cap: u32,
    pub max_score: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            senior_years: 3,
            senior_experience: 25,
            junior_years: 1,
            junior_experience: 15,
            entry_experience: 5,
            company: 20,
            many_projects_count: 3,
            many_projects: 20,
            some_projects: 10,
            phd: 15,
            masters: 10,
            bachelors: 5,
            certifications: 10,
            per_skill: 2,
            skills_cap: 20,
            max_score: 100,
        }
    }
}

/// Points contributed by each signal, before the final clamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub experience: u32,
    pub companies: u32,
    pub projects: u32,
    pub education: u32,
    pub certifications: u32,
    pub skills: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.experience
            .saturating_add(self.companies)
            .saturating_add(self.projects)
            .saturating_add(self.education)
            .saturating_add(self.certifications)
            .saturating_add(self.skills)
    }
}

/// Signals plus the readiness score derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAssessment {
    pub signals: ResumeSignals,
    pub breakdown: ScoreBreakdown,
    /// 0 – 100
    pub score: u32,
}

pub fn score_breakdown(signals: &ResumeSignals, weights: &ScoringWeights) -> ScoreBreakdown {
    let years = signals.years_of_experience;
    let experience = if years >= weights.senior_years {
        weights.senior_experience
    } else if years >= weights.junior_years {
        weights.junior_experience
    } else {
        weights.entry_experience
    };

    let companies = if signals.companies.is_empty() {
        0
    } else {
        weights.company
    };

    let projects = if signals.project_count >= weights.many_projects_count {
        weights.many_projects
    } else if signals.project_count >= 1 {
        weights.some_projects
    } else {
        0
    };

    let education = match signals.education_level {
        EducationLevel::PhD => weights.phd,
        EducationLevel::Masters => weights.masters,
        EducationLevel::Bachelors => weights.bachelors,
        EducationLevel::None => 0,
    };

    let certifications = if signals.has_certifications {
        weights.certifications
    } else {
        0
    };

    let skill_count = u32::try_from(signals.extracted_skills.len()).unwrap_or(u32::MAX);
    let skills = skill_count
        .saturating_mul(weights.per_skill)
        .min(weights.skills_cap);

    ScoreBreakdown {
        experience,
        companies,
        projects,
        education,
        certifications,
        skills,
    }
}

/// Additive readiness score, clamped to `max_score` and never above 100.
pub fn compute_readiness_score(signals: &ResumeSignals, weights: &ScoringWeights) -> u32 {
    clamp_score(&score_breakdown(signals, weights), weights)
}

fn clamp_score(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u32 {
    breakdown
        .total()
        .min(weights.max_score)
        .min(READINESS_CEILING)
}

/// Extracts signals from `resume_text` and scores them.
pub fn assess_resume(resume_text: &str, tables: &HeuristicTables) -> ResumeAssessment {
    let signals = extract_signals(resume_text, tables);
    let breakdown = score_breakdown(&signals, &tables.weights);
    let score = clamp_score(&breakdown, &tables.weights);
    ResumeAssessment {
        signals,
        breakdown,
        score,
    }
}
