use super::*;

#[test]
fn arithmetic_and_geometry_are_problem_solving() {
    for input in [
        "12 + 7",
        "what is 3*4",
        "Find the area of a triangle",
        "How to compute the volume of a sphere?",
        "hello, can you solve this equation",
    ] {
        assert_eq!(Strategy::classify(input), Strategy::ProblemSolving, "{input}");
    }
}

#[test]
fn math_pattern_outranks_question_word() {
    assert_eq!(
        Strategy::classify("What is the derivative of x^2?"),
        Strategy::ProblemSolving
    );
}

#[test]
fn learning_request_outranks_question_word() {
    assert_eq!(
        Strategy::classify("How do I learn chemistry?"),
        Strategy::LearningPath
    );
    assert_eq!(
        Strategy::classify("Teach me about the French revolution"),
        Strategy::LearningPath
    );
}

#[test]
fn question_words_select_knowledge_base() {
    assert_eq!(
        Strategy::classify("  Why did Rome fall?"),
        Strategy::KnowledgeBase
    );
    assert_eq!(
        Strategy::classify("Who wrote Hamlet"),
        Strategy::KnowledgeBase
    );
}

#[test]
fn creative_then_greeting_then_general() {
    assert_eq!(Strategy::classify("Write a poem about rain"), Strategy::Creative);
    assert_eq!(Strategy::classify("Good morning!"), Strategy::Conversational);
    assert_eq!(Strategy::classify("Photosynthesis"), Strategy::General);
}

#[test]
fn strategy_serializes_snake_case() {
    let json = serde_json::to_string(&Strategy::KnowledgeBase).unwrap();
    assert_eq!(json, "\"knowledge_base\"");
    assert_eq!(Strategy::ProblemSolving.to_string(), "problem_solving");
}

#[test]
fn subject_identification_is_total() {
    assert_eq!(Subject::identify("Intro to CALCULUS"), Subject::Mathematics);
    assert_eq!(Subject::identify("cell biology"), Subject::Science);
    assert_eq!(Subject::identify("merge sort algorithm"), Subject::ComputerScience);
    assert_eq!(Subject::identify(""), Subject::General);
    assert_eq!(Subject::identify("zzz"), Subject::General);
}

#[test]
fn subject_order_breaks_ties() {
    // "writing" is listed under both literature and languages.
    assert_eq!(Subject::identify("essay writing"), Subject::Literature);
}

#[test]
fn level_prefers_advanced_keywords() {
    assert_eq!(Level::assess("an advanced but basic question"), Level::Advanced);
    assert_eq!(Level::assess("a simple question"), Level::Beginner);
    assert_eq!(Level::assess("a question"), Level::Intermediate);
}

#[test]
fn problem_and_creative_kinds() {
    assert_eq!(ProblemKind::identify("2 + 2"), ProblemKind::Math);
    assert_eq!(ProblemKind::identify("calculate the force on a 2kg mass"), ProblemKind::Science);
    assert_eq!(ProblemKind::identify("debug this loop"), ProblemKind::Programming);
    assert_eq!(CreativeKind::identify("write a short story"), CreativeKind::Story);
    assert_eq!(CreativeKind::identify("create a haiku"), CreativeKind::Poem);
    assert_eq!(CreativeKind::identify("generate something"), CreativeKind::General);
}

#[test]
fn cleaner_rejects_blank_and_joins_lines() {
    assert_eq!(Cleaner::clean("  \n\t "), Err(CleanerError::EmptyInput));
    assert_eq!(Cleaner::clean(" a \n\n b ").unwrap(), "a b");
    let long = "x".repeat(10_001);
    assert_eq!(Cleaner::clean(&long), Err(CleanerError::TooLong(10_001)));
}

#[test]
fn truncation_respects_char_boundaries() {
    assert_eq!(Cleaner::truncate("héllo", 2), "hé");
    assert_eq!(Cleaner::truncate("abc", 10), "abc");
    assert_eq!(Cleaner::truncate_marked("abcdef", 3), "abc...");
    assert_eq!(Cleaner::truncate_marked("abc", 3), "abc");
    assert_eq!(Cleaner::normalize(" a\n\n  b\tc "), "a b c");
}

#[test]
fn key_points_keep_long_sentences_only() {
    let text = "Short one. This sentence is clearly long enough to count! Tiny? \
                Another sentence that passes the length filter.";
    let points = Tokenizer::key_points(text);
    assert_eq!(
        points,
        vec![
            "This sentence is clearly long enough to count",
            "Another sentence that passes the length filter"
        ]
    );
}

#[test]
fn key_points_cap_at_ten() {
    let text = "This is a sufficiently long sentence. ".repeat(15);
    assert_eq!(Tokenizer::key_points(&text).len(), 10);
}

#[test]
fn document_key_points_bound_word_count() {
    let long = vec!["word"; 31].join(" ");
    let text = format!("One two three four five. Too few words here. {}.", long);
    assert_eq!(Tokenizer::document_key_points(&text), vec!["One two three four five"]);
}

#[test]
fn tokenize_counts_words_and_sentences() {
    let info = Tokenizer::tokenize("Hello World. How are you?");
    assert_eq!(info.word_count, 5);
    assert_eq!(info.sentence_count, 2);
    assert_eq!(info.tokens[0], "hello");
}

#[test]
fn analysis_bundles_all_heuristics() {
    let analysis = Analysis::of("Explain basic algebra");
    assert_eq!(analysis.strategy, Strategy::LearningPath);
    assert_eq!(analysis.subject, Subject::Mathematics);
    assert_eq!(analysis.level, Level::Beginner);
}
