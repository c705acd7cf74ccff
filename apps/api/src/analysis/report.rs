//! Report builder: turns a resume assessment and skill match into the four
//! markdown sections shown on the dashboard.
//!
//! Only the computed values (score, signals, matched/missing skills) are
//! stable. Wording and layout of the sections may change freely.

use crate::analysis::matcher::SkillMatchResult;
use crate::analysis::readiness::ResumeAssessment;
use crate::analysis::signals::EducationLevel;
use crate::analysis::timeframe::Timeframe;
use crate::models::analysis::AnalysisSections;

const CONVERSATIONAL_INPUTS: &[&str] = &["hello", "hi", "hey", "test", "testing"];

/// Projects a competitive resume is expected to show.
const TARGET_PROJECTS: u32 = 3;

/// Inputs shared by every section renderer.
pub struct ReportContext<'a> {
    pub target_role: &'a str,
    pub timeframe: &'a Timeframe,
    pub assessment: &'a ResumeAssessment,
    pub skill_match: &'a SkillMatchResult,
    pub required_skills: &'a [String],
    pub big_tech: &'a [String],
}

/// True for greetings and smoke-test inputs that should not be analyzed.
pub fn is_conversational(target_role: &str) -> bool {
    let normalized = target_role.trim().to_lowercase();
    CONVERSATIONAL_INPUTS.contains(&normalized.as_str())
}

pub fn greeting_sections() -> AnalysisSections {
    AnalysisSections {
        final_recommendations: "Hello! I'm CareerPath, your career advisor.\n\n\
            I can help you with:\n\
            - Career path analysis\n\
            - Skills gap assessment\n\
            - Learning roadmaps\n\
            - Job market insights\n\n\
            To get started, tell me your target role (e.g. 'Data Analyst', 'Software Engineer') and your current skills."
            .to_string(),
        market_research: "I'm ready to analyze market trends for any role you're interested in."
            .to_string(),
        learning_plan: "Share your target role and current skills to get a personalized learning plan."
            .to_string(),
        application_strategy:
            "Let me know your career goals and I'll help you create an application strategy."
                .to_string(),
    }
}

pub fn render_sections(ctx: &ReportContext<'_>) -> AnalysisSections {
    AnalysisSections {
        final_recommendations: render_recommendations(ctx),
        market_research: render_market_research(ctx),
        learning_plan: render_learning_plan(ctx),
        application_strategy: render_application_strategy(ctx),
    }
}

fn render_recommendations(ctx: &ReportContext<'_>) -> String {
    let role = ctx.target_role;
    let s = &ctx.assessment.signals;
    let score = ctx.assessment.score;
    let missing = &ctx.skill_match.missing;
    let years = s.years_of_experience;

    let mut lines = vec![
        format!("## Resume analysis for {role}"),
        String::new(),
        "### What I found in your resume".to_string(),
        String::new(),
        "**Work experience:**".to_string(),
    ];
    lines.push(if years > 0 {
        format!("- {years}+ years of experience detected")
    } else {
        "- No clear years of experience mentioned".to_string()
    });
    lines.push(if s.companies.is_empty() {
        "- No recognizable company names found".to_string()
    } else {
        format!("- Companies: {}", s.companies.join(", "))
    });
    if s.companies.iter().any(|c| ctx.big_tech.contains(c)) {
        lines.push("- Big tech experience is a strong plus".to_string());
    }

    lines.push(String::new());
    lines.push("**Projects:**".to_string());
    lines.push(if s.project_count > 0 {
        format!("- Found ~{} project mentions", s.project_count)
    } else {
        "- No projects clearly mentioned".to_string()
    });
    if !s.has_projects {
        lines.push("- Add project descriptions to your resume".to_string());
    }

    lines.push(String::new());
    lines.push("**Education:**".to_string());
    lines.push(format!("- {} degree", s.education_level.label()));

    lines.push(String::new());
    lines.push("**Skills detected:**".to_string());
    if s.extracted_skills.is_empty() {
        lines.push("- No technical skills clearly mentioned".to_string());
    } else {
        lines.extend(s.extracted_skills.iter().take(10).map(|sk| format!("- {sk}")));
    }

    lines.push(String::new());
    lines.push(format!("### Resume-based readiness: {score}%"));
    lines.push(readiness_verdict(score, role));

    lines.push(String::new());
    lines.push("### Strengths".to_string());
    let strengths = strengths(ctx);
    if strengths.is_empty() {
        lines.push("- Very few strengths detected; the resume needs major work".to_string());
    } else {
        lines.extend(strengths);
    }

    lines.push(String::new());
    lines.push("### Weaknesses".to_string());
    lines.extend(weaknesses(ctx));

    lines.push(String::new());
    lines.push(format!("### Experience gap for {role}"));
    lines.push(if years < 1 {
        format!("Most {role} positions want 1-2+ years of experience. You appear to be entry-level.")
    } else if years < 3 {
        format!("You have {years}+ years, competitive for junior to mid-level {role} roles.")
    } else {
        format!("{years}+ years puts you in the mid to senior range for {role}.")
    });

    lines.push(String::new());
    lines.push("### Projects assessment".to_string());
    lines.push(projects_assessment(s.project_count, role));

    lines.push(String::new());
    lines.push(format!("### Is {} realistic?", ctx.timeframe));
    lines.push(if score >= 70 {
        format!("With your resume, {} is reasonable to start applying.", ctx.timeframe)
    } else if score >= 50 {
        format!("{} is tight. Focus on filling the gaps above.", ctx.timeframe)
    } else {
        format!(
            "{} may not be enough. Your resume needs significant improvement first.",
            ctx.timeframe
        )
    });

    lines.push(String::new());
    lines.push("### Priority actions".to_string());
    lines.push(match missing.first() {
        Some(skill) => format!("1. Add {skill} to your skillset and resume"),
        None => "1. Polish your existing skills section".to_string(),
    });
    lines.push(if s.project_count < TARGET_PROJECTS {
        format!(
            "2. Build {} more projects for {role}",
            TARGET_PROJECTS - s.project_count
        )
    } else {
        "2. Make sure projects show quantified impact".to_string()
    });
    lines.push(if years < 2 {
        "3. Get more hands-on experience (internships, freelance, or personal projects)".to_string()
    } else {
        "3. Quantify achievements with numbers (%, $, users)".to_string()
    });
    lines.push(if s.has_certifications {
        "4. Highlight your certifications more prominently".to_string()
    } else {
        format!("4. Get a relevant certification for {role}")
    });
    lines.push(if s.companies.is_empty() {
        "5. Consider internships at known companies for credibility".to_string()
    } else {
        "5. Leverage your company experience in interviews".to_string()
    });

    lines.push(String::new());
    lines.push("### Bottom line".to_string());
    lines.push(bottom_line(score, role, missing));

    lines.join("\n")
}

fn render_market_research(ctx: &ReportContext<'_>) -> String {
    let role = ctx.target_role;
    let s = &ctx.assessment.signals;
    let score = ctx.assessment.score;
    let years = s.years_of_experience;
    let matched = &ctx.skill_match.matched;
    let missing = &ctx.skill_match.missing;
    let has_degree = s.education_level != EducationLevel::None;

    let lines = vec![
        format!("## Market fit analysis for {role}"),
        String::new(),
        "| Requirement | Typical ask | Your resume | Status |".to_string(),
        "|-------------|-------------|-------------|--------|".to_string(),
        format!(
            "| Experience | 2-5 years | {years}+ years | {} |",
            status_mark(years >= 2)
        ),
        format!(
            "| Projects | 2-3 relevant | ~{} found | {} |",
            s.project_count,
            status_mark(s.project_count >= 2)
        ),
        format!(
            "| Education | Bachelor's+ | {} | {} |",
            s.education_level.label(),
            status_mark(has_degree)
        ),
        format!(
            "| Key skills | {} | {}/{} | {} |",
            first_n(ctx.required_skills, 3),
            matched.len(),
            ctx.required_skills.len(),
            status_mark(ctx.skill_match.covers_half())
        ),
        String::new(),
        "### Companies you could target".to_string(),
        format!(
            "- Big tech: {}",
            if score >= 75 && years >= 3 {
                "you could be competitive"
            } else {
                "not ready yet; needs stronger experience or projects"
            }
        ),
        format!(
            "- Mid-size tech: {}",
            if score >= 60 && years >= 2 {
                "worth applying"
            } else {
                "build more experience first"
            }
        ),
        format!(
            "- Startups: {}",
            if score >= 40 {
                "good fit, startups value potential"
            } else {
                "possible, but strengthen your resume"
            }
        ),
        format!(
            "- Traditional companies: {}",
            if has_degree {
                "usually less competitive"
            } else {
                "a degree might be required"
            }
        ),
        String::new(),
        "### Skills from your resume vs required".to_string(),
        format!(
            "**You have:** {}",
            if matched.is_empty() {
                "None of the core skills".to_string()
            } else {
                matched.join(", ")
            }
        ),
        format!(
            "**You need:** {}",
            if missing.is_empty() {
                "All core skills covered".to_string()
            } else {
                missing.join(", ")
            }
        ),
        String::new(),
        "### Salary expectations".to_string(),
        salary_band(years).to_string(),
        String::new(),
        "### Competitive position".to_string(),
        competitive_position(score).to_string(),
    ];
    lines.join("\n")
}

fn render_learning_plan(ctx: &ReportContext<'_>) -> String {
    let role = ctx.target_role;
    let s = &ctx.assessment.signals;
    let missing = &ctx.skill_match.missing;

    let found = if s.extracted_skills.is_empty() {
        "No clear skills detected".to_string()
    } else {
        first_n(&s.extracted_skills, 8)
    };

    let mut lines = vec![
        "## Personalized learning plan".to_string(),
        String::new(),
        format!("Skills found in your resume: {found}"),
        String::new(),
        "### Skills to add".to_string(),
    ];

    if missing.is_empty() {
        lines.push("All required skills covered. Focus on deepening expertise.".to_string());
    }
    for (i, skill) in missing.iter().enumerate() {
        let (time_to_learn, resource) = learning_estimate(skill);
        lines.push(String::new());
        lines.push(format!("#### {}. {skill}", i + 1));
        lines.push(format!("- Why: required for most {role} positions"));
        lines.push(format!("- Time to learn: {time_to_learn}"));
        lines.push(format!("- Best resource: {resource}"));
        lines.push(format!("- How to prove it: add a project using {skill} to your resume"));
    }

    lines.push(String::new());
    lines.push("### Projects to add".to_string());
    if s.project_count < TARGET_PROJECTS {
        lines.push(format!(
            "You need {} more projects:",
            TARGET_PROJECTS - s.project_count
        ));
        lines.push(format!(
            "1. Data/analysis project, demonstrating {}",
            first_n(ctx.required_skills, 2)
        ));
        let len = ctx.required_skills.len();
        let middle = &ctx.required_skills[len.min(2)..len.min(4)];
        lines.push(format!(
            "2. End-to-end project, demonstrating system thinking{}",
            if middle.is_empty() {
                String::new()
            } else {
                format!(", {}", middle.join(", "))
            }
        ));
        lines.push("3. Industry-relevant project solving a real business problem".to_string());
    } else {
        lines.push(
            "Good project count. Make sure each has quantified impact (numbers, %, users)."
                .to_string(),
        );
    }

    lines.push(String::new());
    lines.push("### Experience building".to_string());
    lines.push(if s.years_of_experience < 2 {
        "Your experience is limited. Consider freelance work, open source contributions, \
         part-time internships, or personal projects that simulate work experience."
            .to_string()
    } else {
        "Your experience level is good. Focus on quantifying achievements.".to_string()
    });

    lines.push(String::new());
    lines.push(format!("### Timeline for {}", ctx.timeframe));
    lines.push(if ctx.assessment.score >= 60 {
        "You can start applying now while improving. Dedicate 5-10 hours/week to filling gaps."
            .to_string()
    } else {
        format!(
            "Focus {} entirely on improvement before applying. Plan for 15-20 hours/week.",
            ctx.timeframe
        )
    });

    lines.join("\n")
}

fn render_application_strategy(ctx: &ReportContext<'_>) -> String {
    let s = &ctx.assessment.signals;
    let score = ctx.assessment.score;
    let missing = &ctx.skill_match.missing;
    let (callback_now, callback_after) = callback_estimates(score);

    let mut lines = vec![
        "## Application readiness".to_string(),
        String::new(),
        "### Should you apply now?".to_string(),
        if score >= 70 {
            "YES. Your resume is competitive. Start applying.".to_string()
        } else if score >= 50 {
            "SELECTIVELY. Apply to mid-tier companies and save top companies for later."
                .to_string()
        } else {
            "NOT YET. Your resume needs work first.".to_string()
        },
        String::new(),
        "### Resume fixes".to_string(),
        if s.project_count < 2 {
            "1. Add 2-3 relevant projects with quantified results".to_string()
        } else {
            "1. Project count is good".to_string()
        },
        if missing.len() > 2 {
            format!("2. Add missing skills: {}", first_n(missing, 3))
        } else {
            "2. Skills look reasonable".to_string()
        },
        if s.years_of_experience < 1 {
            "3. Get more experience (internships, freelance)".to_string()
        } else {
            "3. Experience is adequate".to_string()
        },
        "4. Add quantified achievements (X% improvement, $X saved, X users)".to_string(),
        "5. Tailor the resume for each application".to_string(),
        String::new(),
        "### Questions you'll handle well".to_string(),
    ];

    if s.extracted_skills.is_empty() {
        lines.push("- General background questions".to_string());
    } else {
        lines.extend(
            s.extracted_skills
                .iter()
                .take(3)
                .map(|sk| format!("- Tell me about your experience with {sk}")),
        );
    }

    lines.push(String::new());
    lines.push("### Questions you'll struggle with".to_string());
    if missing.is_empty() {
        lines.push("- Deep technical dives on advanced topics".to_string());
    } else {
        lines.extend(
            missing
                .iter()
                .take(3)
                .map(|sk| format!("- How would you use {sk}? (not on your resume)")),
        );
    }

    lines.push(String::new());
    lines.push("### Predicted callback rate".to_string());
    lines.push(format!("- Current resume: ~{callback_now}%"));
    lines.push(format!("- After improvements: ~{callback_after}%"));

    lines.push(String::new());
    lines.push("### Application tiers".to_string());
    lines.push(format!(
        "- Apply now: {}",
        if score >= 50 {
            "mid-size companies, startups"
        } else {
            "entry-level positions, smaller companies"
        }
    ));
    lines.push(format!(
        "- Wait 1-2 months: {}",
        if score >= 40 {
            "larger tech companies"
        } else {
            "most tech companies"
        }
    ));
    lines.push(format!(
        "- Wait 3+ months: {}",
        if score >= 60 {
            "FAANG if that's your goal"
        } else {
            "any competitive company"
        }
    ));

    lines.push(String::new());
    lines.push("### Priority actions".to_string());
    lines.push(if s.project_count < 2 {
        "1. Build 2 solid projects this month".to_string()
    } else {
        "1. Add metrics to existing projects".to_string()
    });
    lines.push(match missing.first() {
        Some(skill) => format!("2. Learn {skill} (most important gap)"),
        None => "2. Deepen expertise in your strongest skill".to_string(),
    });
    lines.push("3. Get your resume reviewed by someone in the industry".to_string());
    lines.push("4. Practice behavioral questions (STAR method)".to_string());
    lines.push(if s.years_of_experience < 2 {
        "5. Look for internships or junior roles".to_string()
    } else {
        "5. Network on LinkedIn with recruiters".to_string()
    });

    lines.join("\n")
}

fn strengths(ctx: &ReportContext<'_>) -> Vec<String> {
    let s = &ctx.assessment.signals;
    let mut out = Vec::new();
    if s.years_of_experience >= 2 {
        out.push(format!("- {}+ years of experience", s.years_of_experience));
    }
    if !s.companies.is_empty() {
        out.push(format!("- Experience at {}", s.companies.join(", ")));
    }
    if s.project_count >= 2 {
        out.push("- Multiple projects mentioned".to_string());
    }
    if s.has_certifications {
        out.push("- Has relevant certifications".to_string());
    }
    if s.extracted_skills.len() >= 5 {
        out.push(format!(
            "- Good skill coverage ({} skills found)",
            s.extracted_skills.len()
        ));
    }
    out
}

fn weaknesses(ctx: &ReportContext<'_>) -> Vec<String> {
    let s = &ctx.assessment.signals;
    let missing = &ctx.skill_match.missing;
    let mut out = Vec::new();
    if s.years_of_experience < 2 {
        out.push("- Limited professional experience".to_string());
    }
    if s.companies.is_empty() {
        out.push("- No recognizable company names".to_string());
    }
    if s.project_count < 2 {
        out.push("- Too few projects mentioned".to_string());
    }
    if !s.has_certifications {
        out.push("- No certifications mentioned".to_string());
    }
    if !missing.is_empty() {
        out.push(format!("- Missing key skills: {}", first_n(missing, 5)));
    }
    if out.is_empty() {
        out.push("- No major weaknesses detected".to_string());
    }
    out
}

fn readiness_verdict(score: u32, role: &str) -> String {
    if score < 40 {
        format!("Your resume needs significant improvement for {role}.")
    } else if score < 60 {
        format!("Your resume shows potential but has gaps for {role}.")
    } else if score < 80 {
        format!("Your resume is decent for {role} but could be stronger.")
    } else {
        format!("Your resume is strong for {role}.")
    }
}

fn projects_assessment(project_count: u32, role: &str) -> String {
    if project_count == 0 {
        format!("No projects visible in your resume. For {role} you need 2-3 solid projects.")
    } else if project_count < TARGET_PROJECTS {
        format!(
            "You have ~{project_count} project(s). Add {} more relevant projects for {role}.",
            TARGET_PROJECTS - project_count
        )
    } else {
        format!("Good project count. Make sure they're relevant to {role}.")
    }
}

fn bottom_line(score: u32, role: &str, missing: &[String]) -> String {
    if score < 40 {
        let focus = if missing.is_empty() {
            String::new()
        } else {
            let top: Vec<&str> = missing.iter().take(2).map(String::as_str).collect();
            format!(", learning {}", top.join(" and "))
        };
        format!(
            "Your resume is at {score}% readiness. You're not ready for {role} yet. \
             Focus on building projects{focus} and getting more experience before applying."
        )
    } else if score < 60 {
        format!(
            "At {score}%, you have a foundation but significant gaps. Smaller companies may call back; \
             top companies will likely pass."
        )
    } else if score < 80 {
        format!(
            "{score}% readiness. You're in a reasonable position. Start applying while addressing the weaknesses above."
        )
    } else {
        format!(
            "Strong resume at {score}%. You should be competitive for {role} positions. Focus on interview prep."
        )
    }
}

fn competitive_position(score: u32) -> &'static str {
    if score < 40 {
        "Bottom 25% of applicants"
    } else if score < 60 {
        "Average applicant pool"
    } else if score < 80 {
        "Top 50% of applicants"
    } else {
        "Top 25% of applicants"
    }
}

fn salary_band(years: u32) -> &'static str {
    if years < 2 {
        "Entry level: $60,000 - $85,000"
    } else if years < 5 {
        "Mid level: $85,000 - $130,000"
    } else {
        "Senior level: $130,000 - $200,000+"
    }
}

/// (current, after improvements) callback rate percentages.
fn callback_estimates(score: u32) -> (u32, u32) {
    let score = score as f64;
    let now = (score * 0.4).round() as u32;
    let after = (score * 0.6).min(50.0).round() as u32;
    (now, after)
}

fn learning_estimate(skill: &str) -> (&'static str, &'static str) {
    let lower = skill.to_lowercase();
    if lower.contains("sql") {
        ("2-3 weeks", "SQLZoo, Mode Analytics")
    } else if lower.contains("python") {
        ("4-6 weeks", "Python for Everybody (Coursera)")
    } else if lower.contains("machine") {
        ("8-12 weeks", "YouTube + hands-on projects")
    } else {
        ("3-4 weeks", "YouTube + hands-on projects")
    }
}

fn status_mark(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "GAP"
    }
}

fn first_n(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}
