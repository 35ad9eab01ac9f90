//! Static knowledge store consulted when remote generation is unavailable.
//!
//! Every subject owns a fixed list of topics; nothing here is mutated after
//! compilation.

mod data;

use crate::preprocessing::{Level, Subject};

#[derive(Debug)]
pub struct Topic {
    pub area: &'static str,
    pub name: &'static str,
    pub concepts: &'static [&'static str],
    pub formulas: &'static [(&'static str, &'static str)],
    pub examples: &'static [&'static str],
}

impl Topic {
    fn mentioned_in(&self, lower: &str) -> bool {
        lower.contains(self.name)
            || self
                .concepts
                .iter()
                .any(|concept| lower.contains(&concept.to_lowercase()))
    }
}

#[derive(Debug)]
pub struct KnowledgeBase {
    pub subject: Subject,
    pub topics: &'static [Topic],
}

impl KnowledgeBase {
    /// Topic the input mentions by name or concept, else the first topic.
    pub fn find_topic(&self, input: &str) -> &Topic {
        let lower = input.to_lowercase();
        self.topics
            .iter()
            .find(|topic| topic.mentioned_in(&lower))
            .unwrap_or(&self.topics[0])
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.topics.iter().map(|topic| topic.name)
    }
}

/// Total: unknown subjects resolve to the general study-skills base.
pub fn lookup(subject: Subject) -> &'static KnowledgeBase {
    match subject {
        Subject::Mathematics => &data::MATHEMATICS,
        Subject::Science => &data::SCIENCE,
        Subject::Engineering => &data::ENGINEERING,
        Subject::Literature => &data::LITERATURE,
        Subject::History => &data::HISTORY,
        Subject::Languages => &data::LANGUAGES,
        Subject::Arts => &data::ARTS,
        Subject::Business => &data::BUSINESS,
        Subject::ComputerScience => &data::COMPUTER_SCIENCE,
        Subject::General => &data::GENERAL,
    }
}

/// Ordered topics to study for a subject at a level, where one is defined.
pub fn learning_path(subject: Subject, level: Level) -> Option<&'static [&'static str]> {
    let paths = match subject {
        Subject::Mathematics => &data::MATHEMATICS_PATHS,
        Subject::Science => &data::SCIENCE_PATHS,
        Subject::ComputerScience => &data::PROGRAMMING_PATHS,
        _ => return None,
    };

    let index = match level {
        Level::Beginner => 0,
        Level::Intermediate => 1,
        Level::Advanced => 2,
    };
    Some(paths[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subject_has_topics() {
        for subject in Subject::ALL {
            let base = lookup(subject);
            assert_eq!(base.subject, subject);
            assert!(!base.topics.is_empty(), "{subject}");
        }
    }

    #[test]
    fn find_topic_matches_name_then_concept() {
        let math = lookup(Subject::Mathematics);
        assert_eq!(math.find_topic("tell me about geometry").name, "geometry");
        assert_eq!(math.find_topic("what are derivatives").name, "calculus");
        assert_eq!(math.find_topic("nothing relevant").name, "algebra");
    }

    #[test]
    fn concept_match_ignores_case() {
        let science = lookup(Subject::Science);
        assert_eq!(science.find_topic("how does dna replicate").name, "genetics");
    }

    #[test]
    fn learning_paths_cover_three_subjects() {
        let path = learning_path(Subject::Mathematics, Level::Advanced).unwrap();
        assert_eq!(path[0], "Calculus I and II");
        let path = learning_path(Subject::ComputerScience, Level::Beginner).unwrap();
        assert_eq!(path[0], "Programming fundamentals");
        assert!(learning_path(Subject::History, Level::Beginner).is_none());
    }
}
