use super::*;
use crate::llm::testing::{FailingGenerator, ScriptedGenerator};
use crate::llm::GenerationError;
use std::time::Duration;

const DOCUMENT: &str = "Photosynthesis converts light energy into chemical energy inside chloroplasts. \
The light reactions take place in the thylakoid membranes of the plant cell. \
The Calvin cycle then fixes carbon dioxide into sugars using ATP and NADPH.";

const LESSONS: &str = "## Lesson Note 1: Light Reactions
### Key Concepts
- Chlorophyll absorbs light
### Explanation
Light energy splits water.

## Lesson Note 2: Calvin Cycle
### Key Concepts
- Carbon fixation
### Explanation
CO2 becomes glucose.

## Lesson Note 3: Stray heading without sections";

const TEST_REPLY: &str = "Q1. Solve the equation 2x + 4 = 10 for x.
A) 2
B) 3
C) 4
D) 5
Answer: B

Q2. Which force keeps planets in orbit around the sun?
A) Friction
B) Magnetism
C) Gravity
D) Tension
Answer: C";

fn generator(inner: impl TextGenerator + 'static) -> ContentGenerator {
    ContentGenerator::new(Arc::new(inner), GenerationSettings::default())
}

fn request(content_type: ContentType, count: usize) -> GenerationRequest {
    GenerationRequest {
        content_type,
        count,
        subject: "Biology".to_string(),
        ..GenerationRequest::default()
    }
}

#[tokio::test]
async fn lesson_notes_keep_only_marked_segments() {
    let content = generator(ScriptedGenerator::new().reply(LESSONS));
    let items = content
        .generate_from_document(DOCUMENT, &request(ContentType::LessonNotes, 5))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Light Reactions");
    assert_eq!(items[1].id, 2);
    assert_eq!(items[1].kind, ItemKind::LessonNote);
    assert!(items[1].content.contains("Carbon fixation"));
}

#[tokio::test]
async fn parsed_items_are_capped_at_requested_count() {
    let content = generator(ScriptedGenerator::new().reply(LESSONS));
    let items = content
        .generate_from_document(DOCUMENT, &request(ContentType::LessonNotes, 1))
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn failed_call_falls_back_to_key_points() {
    let content = generator(FailingGenerator::unavailable());
    let items = content
        .generate_from_document(DOCUMENT, &request(ContentType::Flashcards, 5))
        .await
        .unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "Generated flashcards 1");
    assert!(items[0].content.starts_with("**Front:** Photosynthesis converts"));
    assert_eq!(items[0].kind, ItemKind::Flashcard);
}

#[tokio::test]
async fn unparseable_reply_falls_back_to_key_points() {
    let content = generator(ScriptedGenerator::new().reply("I cannot help with that."));
    let items = content
        .generate_from_document(DOCUMENT, &request(ContentType::Quiz, 2))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[0].content.starts_with("**Question:** What is the main idea behind:"));
}

#[tokio::test]
async fn timeout_is_reported_not_masked() {
    let content = generator(FailingGenerator(GenerationError::Timeout {
        after: Duration::from_secs(30),
    }));
    let err = content
        .generate_from_document(DOCUMENT, &request(ContentType::Summary, 1))
        .await
        .unwrap_err();

    assert_eq!(err, ContentError::Timeout);
    assert!(err.to_string().starts_with("Request timeout"));
}

#[tokio::test]
async fn document_input_is_validated_before_any_call() {
    let scripted = Arc::new(ScriptedGenerator::new().reply(LESSONS));
    let content = ContentGenerator::new(scripted.clone(), GenerationSettings::default());

    let empty = content
        .generate_from_document("   ", &request(ContentType::Summary, 1))
        .await;
    assert_eq!(empty.unwrap_err(), ContentError::EmptyDocument);

    let too_many = content
        .generate_from_document(DOCUMENT, &request(ContentType::Quiz, 21))
        .await;
    assert_eq!(
        too_many.unwrap_err(),
        ContentError::CountOutOfRange { count: 21, max: 20 }
    );

    let zero = content
        .generate_from_document(DOCUMENT, &request(ContentType::Quiz, 0))
        .await;
    assert!(matches!(zero, Err(ContentError::CountOutOfRange { count: 0, .. })));
    assert!(scripted.prompts().is_empty());
}

#[tokio::test]
async fn prompt_carries_truncated_document() {
    let scripted = Arc::new(ScriptedGenerator::new().reply(LESSONS));
    let content = ContentGenerator::new(scripted.clone(), GenerationSettings::default());
    let long = "a".repeat(5000);
    content
        .generate_from_document(&long, &request(ContentType::LessonNotes, 2))
        .await
        .unwrap();

    let prompt = &scripted.prompts()[0];
    assert!(prompt.contains("## Lesson Note [Number]: [Topic]"));
    assert!(prompt.contains(&"a".repeat(2000)));
    assert!(!prompt.contains(&"a".repeat(2001)));
}

#[tokio::test]
async fn test_questions_are_parsed_and_padded() {
    let content = generator(ScriptedGenerator::new().reply(TEST_REPLY));
    let request = TestRequest {
        subject: "Mathematics".to_string(),
        topics: vec!["Algebra".to_string(), "Physics".to_string()],
        count: 3,
        ..TestRequest::default()
    };
    let questions = content.generate_test_questions(&request).await.unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].correct_answer, 1);
    assert_eq!(questions[0].topic, "Algebra");
    assert_eq!(questions[1].correct_answer, 2);
    assert_eq!(questions[1].topic, "Physics");
    assert_eq!(questions[2].id, "q3");
    assert!(questions[2].text.starts_with("Sample question about"));
}

#[tokio::test]
async fn test_generation_failure_uses_subject_bank() {
    let content = generator(FailingGenerator::unavailable());
    let request = TestRequest {
        subject: "Science".to_string(),
        count: 5,
        ..TestRequest::default()
    };
    let questions = content.generate_test_questions(&request).await.unwrap();

    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0].topic, "Chemistry");
    assert_eq!(questions[2].text, questions[0].text);
    assert_eq!(questions[4].id, "q5");
}

#[tokio::test]
async fn unknown_subject_bank_is_mathematics() {
    let content = generator(FailingGenerator::unavailable());
    let request = TestRequest {
        subject: "Astrology".to_string(),
        count: 1,
        ..TestRequest::default()
    };
    let questions = content.generate_test_questions(&request).await.unwrap();
    assert_eq!(questions[0].topic, "Algebra");
}

#[tokio::test]
async fn test_count_is_bounded() {
    let content = generator(ScriptedGenerator::new());
    let request = TestRequest {
        count: ContentGenerator::MAX_TEST_QUESTIONS + 1,
        ..TestRequest::default()
    };
    assert!(matches!(
        content.generate_test_questions(&request).await,
        Err(ContentError::CountOutOfRange { .. })
    ));
}

#[tokio::test]
async fn document_questions_extract_fields() {
    let reply = "Q1: What do chloroplasts contain?
Type: multiple-choice
A) Chlorophyll
B) Keratin
C) Myelin
D) Collagen
Answer: A
Explanation: Chlorophyll absorbs light.

Q2: Plants release oxygen.
Type: true-false
Answer: True
Explanation: Oxygen is a by-product of the light reactions.";
    let content = generator(ScriptedGenerator::new().reply(reply));
    let questions = content
        .generate_questions_from_document(DOCUMENT, &DocumentQuestionRequest::default())
        .await
        .unwrap();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question, "What do chloroplasts contain?");
    assert_eq!(questions[0].options.len(), 4);
    assert_eq!(questions[0].answer, "A");
    assert_eq!(questions[1].question_type, "true-false");
    assert!(questions[1].options.is_empty());
    assert_eq!(questions[1].explanation, "Oxygen is a by-product of the light reactions.");
}

#[tokio::test]
async fn document_questions_fall_back_per_key_point() {
    let content = generator(FailingGenerator::unavailable());
    let request = DocumentQuestionRequest {
        count: 2,
        ..DocumentQuestionRequest::default()
    };
    let questions = content
        .generate_questions_from_document(DOCUMENT, &request)
        .await
        .unwrap();

    assert_eq!(questions.len(), 2);
    assert!(questions[0]
        .question
        .starts_with("What is the main concept discussed in: \"Photosynthesis"));
    assert_eq!(questions[0].answer, "A");
}

#[tokio::test]
async fn study_material_falls_back_to_placeholder() {
    let content = generator(FailingGenerator::unavailable());
    let guide = content.generate_study_material("Fractions", "study guide").await;
    let overview = content.generate_study_material("Fractions", "overview").await;

    assert!(guide.starts_with("Study Material for Fractions: This is a placeholder."));
    assert!(overview.starts_with("Here's a basic overview of Fractions:"));
}

#[tokio::test]
async fn study_material_strips_prompt_echo() {
    let prompt = prompts::study_material_prompt("Fractions", "summary");
    let reply = format!("{} Fractions describe parts of a whole.", prompt);
    let content = generator(ScriptedGenerator::new().reply(reply));
    let text = content.generate_study_material("Fractions", "summary").await;
    assert_eq!(text, "Fractions describe parts of a whole.");
}

#[test]
fn question_block_maps_answer_letter_to_index() {
    for (letter, index) in [("A", 0), ("B", 1), ("C", 2), ("D", 3), ("d", 3)] {
        let block = format!(
            "What is 3 + 4?\nA) 5\nB) 6\nC) 7\nD) 8\nAnswer: {}",
            letter
        );
        let question = parser::parse_test_question_block(&block, 1, &[]).unwrap();
        assert_eq!(question.options, vec!["5", "6", "7", "8"]);
        assert_eq!(question.correct_answer, index);
        assert_eq!(question.topic, "General");
    }
}

#[test]
fn malformed_question_blocks_are_rejected() {
    let three_options = "Question?\nA) 1\nB) 2\nC) 3\nAnswer: A";
    let bad_letter = "Question?\nA) 1\nB) 2\nC) 3\nD) 4\nAnswer: E";
    let no_answer = "Question?\nA) 1\nB) 2\nC) 3\nD) 4";

    assert!(parser::parse_test_question_block(three_options, 1, &[]).is_none());
    assert!(parser::parse_test_question_block(bad_letter, 1, &[]).is_none());
    assert!(parser::parse_test_question_block(no_answer, 1, &[]).is_none());
}

#[test]
fn zero_position_is_treated_as_first() {
    let topics = vec!["Poetry".to_string(), "Drama".to_string()];
    let block = "Who wrote it?\nA) Me\nB) You\nC) Them\nD) Us\nAnswer: C";
    let question = parser::parse_test_question_block(block, 0, &topics).unwrap();
    assert_eq!(question.id, "q0");
    assert_eq!(question.topic, "Poetry");
    assert_eq!(fallback::placeholder_question(0, &topics).topic, "Poetry");
}

#[test]
fn unmatched_topics_rotate_by_position() {
    let topics = vec!["Poetry".to_string(), "Drama".to_string()];
    assert_eq!(taxonomy::assign_topic("Who wrote it?", &topics, 0), "Poetry");
    assert_eq!(taxonomy::assign_topic("Who wrote it?", &topics, 3), "Drama");
    assert_eq!(taxonomy::assign_topic("A drama in verse", &topics, 0), "Drama");
}

#[test]
fn difficulty_stays_in_range() {
    let hard = "Analyze and evaluate the derivation, then compare and contrast two methods to calculate the integral of a function over an unbounded interval.";
    assert_eq!(taxonomy::assess_difficulty(hard, QuestionType::Essay), 10);
    assert_eq!(taxonomy::assess_difficulty("Define x.", QuestionType::TrueFalse), 3);
    assert_eq!(
        taxonomy::assess_difficulty("Name the largest planet in the solar system.", QuestionType::MultipleChoice),
        4
    );
    for text in ["", "a", hard] {
        let d = taxonomy::assess_difficulty(text, QuestionType::ProblemSolving);
        assert!((1..=10).contains(&d));
    }
}

#[test]
fn topics_identified_by_keyword_order() {
    assert_eq!(taxonomy::identify_topic("Solve the quadratic"), "Algebra");
    assert_eq!(taxonomy::identify_topic("velocity of a car"), "Physics");
    assert_eq!(taxonomy::identify_topic("Who painted it?"), "General");
    assert_eq!(
        taxonomy::subject_topics("science").map(|t| t.len()),
        Some(4)
    );
}

#[test]
fn content_type_parses_from_cli_names() {
    assert_eq!("lesson-notes".parse::<ContentType>(), Ok(ContentType::LessonNotes));
    assert_eq!("Flashcards".parse::<ContentType>(), Ok(ContentType::Flashcards));
    assert!("poster".parse::<ContentType>().is_err());
}
