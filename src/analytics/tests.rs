use super::performance::{strength_label, weakness_label};
use super::types::{CurriculumRecommendationKind, StudentRecommendationKind};
use super::*;
use crate::content::QuestionType;
use crate::llm::testing::{FailingGenerator, ScriptedGenerator};
use tempfile::TempDir;

fn question(id: &str, text: &str, correct: u32, attempts: u32) -> QuestionRecord {
    QuestionRecord {
        id: id.to_string(),
        text: text.to_string(),
        question_type: QuestionType::MultipleChoice,
        correct_answers: correct,
        total_attempts: attempts,
        average_time: 30.0,
    }
}

fn student(id: &str, score: f64, correct: [bool; 3]) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: id.to_uppercase(),
        email: None,
        score,
        time_spent: 25.0,
        answers: ["q1", "q2", "q3"]
            .iter()
            .zip(correct)
            .map(|(q, is_correct)| AnswerRecord {
                question_id: q.to_string(),
                is_correct,
                time_spent: 10.0,
            })
            .collect(),
    }
}

/// Algebra: q1 (difficulty 5). Geometry: q2 (7) and q3 (4).
fn test(id: &str, students: Vec<StudentRecord>) -> TestData {
    TestData {
        id: id.to_string(),
        name: "Unit 3".to_string(),
        subject: "Mathematics".to_string(),
        date: "2024-03-01".to_string(),
        questions: vec![
            question("q1", "Solve the equation 3x = 12 for x.", 8, 10),
            question("q2", "Calculate the area of a triangle with base 4 and height 6.", 3, 10),
            question("q3", "What is the perimeter of a square with side 5?", 5, 10),
        ],
        students,
    }
}

fn class() -> Vec<StudentRecord> {
    vec![
        student("ana", 90.0, [true, true, true]),
        student("ben", 40.0, [false, false, true]),
    ]
}

#[tokio::test]
async fn topics_are_grouped_and_sorted_by_difficulty() {
    let mut analytics = TestAnalytics::new(Arc::new(FailingGenerator::unavailable()));
    let analysis = analytics.analyze_test(&test("t1", class())).await.unwrap();

    let names: Vec<_> = analysis.topics.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Geometry", "Algebra"]);

    let geometry = &analysis.topics[0];
    assert_eq!(geometry.questions.len(), 2);
    assert_eq!(geometry.average_difficulty, 5.5);
    assert_eq!(geometry.correct_answers, 8);
    assert_eq!(geometry.incorrect_answers, 12);
    assert_eq!(geometry.average_score, 40.0);
    assert_eq!(analysis.topics[1].average_score, 80.0);

    assert_eq!(analysis.difficulty.medium, 3);
    assert_eq!(analysis.difficulty.hardest_question.as_deref(), Some("q2"));
}

#[tokio::test]
async fn student_strengths_weaknesses_and_advice() {
    let generator = ScriptedGenerator::new().reply("Visual learner");
    let mut analytics = TestAnalytics::new(Arc::new(generator));
    let analysis = analytics.analyze_test(&test("t1", class())).await.unwrap();

    let ana = &analysis.student_performance[0];
    assert_eq!(ana.learning_style, LearningStyle::Visual);
    assert_eq!(ana.correct_answers, 3);
    assert_eq!(ana.strengths.len(), 2);
    assert_eq!(ana.strengths[0].label, "Excellent mastery");
    assert!(ana.weaknesses.is_empty());
    assert_eq!(ana.recommendations.len(), 1);
    assert_eq!(
        ana.recommendations[0].kind,
        StudentRecommendationKind::LearningStyle
    );

    let ben = &analysis.student_performance[1];
    assert_eq!(ben.learning_style, LearningStyle::Mixed);
    assert_eq!(ben.weaknesses[0].topic, "Algebra");
    assert_eq!(ben.weaknesses[0].label, "Needs significant support");
    assert_eq!(ben.weaknesses[1].score, 50.0);
    let kinds: Vec<_> = ben.recommendations.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        [
            StudentRecommendationKind::Study,
            StudentRecommendationKind::Study,
            StudentRecommendationKind::Practice
        ]
    );
    assert_eq!(ben.recommendations[0].action, "Focus on Algebra - current score: 0.0%");
    assert_eq!(ben.recommendations[0].resources[0], "Khan Academy Algebra");
}

#[tokio::test]
async fn insights_rank_difficult_topics_and_count_strugglers() {
    let mut analytics = TestAnalytics::new(Arc::new(FailingGenerator::unavailable()));
    let analysis = analytics.analyze_test(&test("t1", class())).await.unwrap();

    assert_eq!(analysis.insights.overall_performance, 65.0);
    let difficult = &analysis.insights.difficult_topics;
    assert_eq!(difficult[0].topic, "Geometry");
    assert_eq!(difficult[0].struggling_students, 1);
    assert_eq!(difficult[1].topic, "Algebra");

    let recs = &analysis.recommendations;
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0].kind, CurriculumRecommendationKind::TeachingMethod);
    assert_eq!(
        recs[0].recommendation,
        "Incorporate hands-on activities and geometric software"
    );
    assert_eq!(recs[2].topics, ["Geometry", "Algebra"]);
    assert_eq!(recs[3].frequency.as_deref(), Some("Weekly"));
}

#[tokio::test]
async fn profiles_accumulate_across_tests() {
    let mut analytics = TestAnalytics::new(Arc::new(FailingGenerator::unavailable()));
    analytics.analyze_test(&test("t1", class())).await.unwrap();
    analytics
        .analyze_test(&test("t2", vec![student("ben", 80.0, [true, false, true])]))
        .await
        .unwrap();

    let ben = analytics.student_profile("ben").unwrap();
    assert_eq!(ben.progress.len(), 2);
    assert_eq!(ben.overall_performance, 60.0);
    assert_eq!(ben.strengths[0].topic, "Algebra");
    assert_eq!(ben.weaknesses[0].topic, "Algebra");
    assert_eq!(ben.weaknesses[0].count, 1);
    assert_eq!(analytics.student_profiles().count(), 2);

    let algebra = analytics
        .topic_trends()
        .find(|t| t.topic == "Algebra")
        .unwrap();
    assert_eq!(algebra.tests, 2);
    assert_eq!(algebra.average_score, 80.0);
}

#[tokio::test]
async fn report_lookup_and_validation() {
    let mut analytics = TestAnalytics::new(Arc::new(FailingGenerator::unavailable()));
    analytics.analyze_test(&test("t1", class())).await.unwrap();

    let report = analytics.generate_report("t1").unwrap();
    assert_eq!(report.test_info.total_questions, 3);
    assert_eq!(report.test_info.total_students, 2);
    assert_eq!(
        analytics.generate_report("missing").unwrap_err(),
        AnalyticsError::UnknownTest("missing".to_string())
    );

    let mut empty = test("t0", class());
    empty.questions.clear();
    assert!(matches!(
        analytics.analyze_test(&empty).await,
        Err(AnalyticsError::EmptyTest(_))
    ));
}

#[tokio::test]
async fn answers_to_unknown_questions_are_ignored() {
    let mut stray = student("cy", 50.0, [true, true, true]);
    stray.answers[0].question_id = "q99".to_string();
    let mut analytics = TestAnalytics::new(Arc::new(FailingGenerator::unavailable()));
    let analysis = analytics.analyze_test(&test("t1", vec![stray])).await.unwrap();

    let topics = &analysis.student_performance[0].topics;
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].topic, "Geometry");
    assert_eq!(topics[0].total_questions, 2);
}

#[tokio::test]
async fn snapshot_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(dir.path());
    let mut analytics = TestAnalytics::new(Arc::new(FailingGenerator::unavailable()));
    analytics.analyze_test(&test("t1", class())).await.unwrap();
    analytics.save(&store).unwrap();

    let restored = TestAnalytics::load(Arc::new(FailingGenerator::unavailable()), &store);
    assert_eq!(restored.snapshot().tests.len(), 1);
    assert!(restored.student_profile("ana").is_some());
    assert!(restored.generate_report("t1").is_ok());
}

#[test]
fn test_data_reads_camel_case_json() {
    let raw = r#"{
        "id": "t9",
        "name": "Essay test",
        "questions": [
            {"id": "q1", "text": "Compare two revolutions.", "type": "essay", "correctAnswers": 2, "totalAttempts": 4}
        ],
        "students": [
            {"id": "s1", "name": "Dee", "score": 75, "answers": [{"questionId": "q1", "isCorrect": true}]}
        ]
    }"#;
    let data: TestData = serde_json::from_str(raw).unwrap();

    assert_eq!(data.questions[0].question_type, QuestionType::Essay);
    assert_eq!(data.questions[0].total_attempts, 4);
    assert!(data.students[0].answers[0].is_correct);
    assert_eq!(data.subject, "");
}

#[test]
fn score_labels_follow_thresholds() {
    assert_eq!(strength_label(95.0), "Excellent mastery");
    assert_eq!(strength_label(85.0), "Strong understanding");
    assert_eq!(strength_label(75.0), "Good grasp");
    assert_eq!(weakness_label(30.0), "Needs significant support");
    assert_eq!(weakness_label(50.0), "Requires additional practice");
    assert_eq!(weakness_label(65.0), "Needs reinforcement");
    assert_eq!(weakness_label(75.0), "Room for improvement");
}

#[test]
fn learning_style_detection() {
    assert_eq!(LearningStyle::detect(" Kinesthetic."), LearningStyle::Kinesthetic);
    assert_eq!(LearningStyle::detect("Reading/Writing"), LearningStyle::ReadingWriting);
    assert_eq!(LearningStyle::detect(""), LearningStyle::Mixed);
    assert_eq!(LearningStyle::Mixed.to_string(), "mixed");
}
