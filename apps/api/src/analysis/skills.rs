//! Skill extraction against the known-skill vocabulary, and merging of
//! extracted skills into a caller's current skill list.

/// Returns every vocabulary entry whose lowercase form occurs in `text`.
///
/// Plain substring containment: "Go" is found inside "Google" and "Java"
/// inside "JavaScript". Output follows vocabulary order, each entry once.
pub fn extract_skills(text: &str, vocabulary: &[String]) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for skill in vocabulary {
        let skill_lower = skill.to_lowercase();
        if skill_lower.is_empty() || !text_lower.contains(&skill_lower) {
            continue;
        }
        if !found.contains(skill) {
            found.push(skill.clone());
        }
    }

    found
}

/// Appends each extracted skill not already present in `current`
/// (case-insensitive). Existing entries keep their position and spelling.
pub fn merge_skills(current: &[String], extracted: &[String]) -> Vec<String> {
    let mut combined = current.to_vec();
    for skill in extracted {
        let skill_lower = skill.to_lowercase();
        if !combined.iter().any(|s| s.to_lowercase() == skill_lower) {
            combined.push(skill.clone());
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::HeuristicTables;

    fn vocab(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_in_vocabulary_order() {
        let vocabulary = vocab(&["Python", "SQL", "Docker"]);
        let skills = extract_skills("Docker, sql and PYTHON", &vocabulary);
        assert_eq!(skills, vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_substring_false_positives_are_kept() {
        let tables = HeuristicTables::embedded().unwrap();
        let skills = extract_skills("Worked at Google writing JavaScript", &tables.skills);
        assert!(skills.contains(&"Go".to_string()));
        assert!(skills.contains(&"Java".to_string()));
        assert!(skills.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let tables = HeuristicTables::embedded().unwrap();
        assert!(extract_skills("", &tables.skills).is_empty());
    }

    #[test]
    fn test_duplicate_vocabulary_entries_reported_once() {
        let vocabulary = vocab(&["Rust", "Rust", ""]);
        assert_eq!(extract_skills("rust", &vocabulary), vec!["Rust"]);
    }

    #[test]
    fn test_symbol_skills_match() {
        let tables = HeuristicTables::embedded().unwrap();
        let skills = extract_skills("C++ and C# with CI/CD, A/B testing", &tables.skills);
        for expected in ["C++", "C#", "CI/CD", "A/B Testing"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_merge_skips_case_insensitive_duplicates() {
        let current = vocab(&["python", "React"]);
        let extracted = vocab(&["Python", "SQL", "react", "Docker"]);
        assert_eq!(
            merge_skills(&current, &extracted),
            vec!["python", "React", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_merge_into_empty() {
        let extracted = vocab(&["Go", "Rust"]);
        assert_eq!(merge_skills(&[], &extracted), extracted);
    }
}
