use serde::{Deserialize, Serialize};

/// Required skills partitioned by whether the candidate already covers them.
/// Both lists keep the required list's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillMatchResult {
    /// True when at least half of the required skills are matched.
    pub fn covers_half(&self) -> bool {
        let required = self.matched.len() + self.missing.len();
        self.matched.len() * 2 >= required
    }
}

/// A required skill is matched when some current skill contains it or is
/// contained by it, ignoring case. "ML" vs "Machine Learning" style variants
/// pass; so do short tokens like "R" against almost anything.
pub fn match_skills(current: &[String], required: &[String]) -> SkillMatchResult {
    let current_lower: Vec<String> = current.iter().map(|s| s.to_lowercase()).collect();
    let mut result = SkillMatchResult::default();

    for skill in required {
        let skill_lower = skill.to_lowercase();
        let covered = current_lower
            .iter()
            .any(|c| c.contains(&skill_lower) || skill_lower.contains(c.as_str()));

        if covered {
            result.matched.push(skill.clone());
        } else {
            result.missing.push(skill.clone());
        }
    }

    result
}
