//! Follow-up questions keyed by subject and level.

use crate::postprocessing::traits::Enhancer;
use crate::preprocessing::{Level, Subject};

const HEADER: &str = "🤔 You might also want to ask about:";
const MAX_SUGGESTIONS: usize = 3;

pub fn follow_ups(subject: Subject, level: Level) -> &'static [&'static str] {
    match (subject, level) {
        (Subject::Mathematics, Level::Beginner) => &[
            "How to solve quadratic equations",
            "Basic geometry formulas",
            "Introduction to fractions",
        ],
        (Subject::Mathematics, Level::Intermediate) => &[
            "Trigonometric identities",
            "Calculus derivatives",
            "Statistical analysis",
        ],
        (Subject::Mathematics, Level::Advanced) => &[
            "Differential equations",
            "Linear algebra concepts",
            "Advanced calculus topics",
        ],
        (Subject::Science, Level::Beginner) => {
            &["Basic physics laws", "Chemical bonding", "Cell structure"]
        }
        (Subject::Science, Level::Intermediate) => {
            &["Thermodynamics", "Organic chemistry", "Genetics"]
        }
        (Subject::Science, Level::Advanced) => &[
            "Quantum mechanics",
            "Biochemistry pathways",
            "Molecular biology",
        ],
        (Subject::ComputerScience, Level::Beginner) => &[
            "Basic syntax",
            "Variables and data types",
            "Control structures",
        ],
        (Subject::ComputerScience, Level::Intermediate) => &[
            "Object-oriented programming",
            "Data structures",
            "Algorithms",
        ],
        (Subject::ComputerScience, Level::Advanced) => &[
            "System design",
            "Machine learning",
            "Distributed systems",
        ],
        _ => &[],
    }
}

pub struct FollowUps;

impl Enhancer for FollowUps {
    fn apply(&self, text: &str, subject: Subject, level: Level) -> String {
        let suggestions = follow_ups(subject, level);
        if suggestions.is_empty() {
            return text.to_string();
        }

        let mut out = format!("{}\n\n{}", text, HEADER);
        for suggestion in suggestions.iter().take(MAX_SUGGESTIONS) {
            out.push_str("\n• ");
            out.push_str(suggestion);
        }
        out
    }
}
