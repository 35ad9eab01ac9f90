//! Prompt templates. Each template fixes the markers the parser later splits on.

use super::types::{ContentType, DocumentQuestionRequest, GenerationRequest, TestRequest};
use crate::preprocessing::Cleaner;

pub fn document_prompt(text: &str, request: &GenerationRequest, text_limit: usize) -> String {
    let excerpt = Cleaner::truncate(text, text_limit);
    let GenerationRequest {
        subject,
        difficulty,
        count,
        ..
    } = request;

    match request.content_type {
        ContentType::LessonNotes => format!(
            "Based on the following document about {subject}, create {count} comprehensive lesson notes at {difficulty} level. Focus on key concepts and provide clear explanations.

Document content: {excerpt}

Format each lesson note as:
## Lesson Note [Number]: [Topic]
### Key Concepts
- [Concept 1]
- [Concept 2]
### Explanation
[Detailed explanation]
### Examples
[Practical examples]
### Summary
[Key takeaways]"
        ),
        ContentType::Quiz => format!(
            "Based on the following document about {subject}, create {count} {difficulty} level multiple choice questions. Each question should test understanding of the document content.

Document content: {excerpt}

Format each question as:
Q[Number]: [Question text]
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]
Answer: [Correct option]
Explanation: [Why this is correct]"
        ),
        ContentType::Flashcards => format!(
            "Based on the following document about {subject}, create {count} flashcards at {difficulty} level. Each flashcard should have a clear front and back.

Document content: {excerpt}

Format each flashcard as:
**Front:** [Question or term]
**Back:** [Answer or definition]
**Example:** [Practical example]
**Related:** [Related concepts]"
        ),
        ContentType::Summary => format!(
            "Based on the following document about {subject}, create a comprehensive summary highlighting the main points and key concepts.

Document content: {excerpt}

Format as:
# Summary: [Subject]
## Main Points
- [Point 1]
- [Point 2]
## Key Concepts
- [Concept 1]
- [Concept 2]
## Important Details
[Important information]
## Conclusion
[Summary conclusion]"
        ),
    }
}

pub fn test_prompt(request: &TestRequest) -> String {
    let topics = if request.topics.is_empty() {
        "general topics".to_string()
    } else {
        request.topics.join(", ")
    };
    let mix = request.difficulty;

    format!(
        "Generate {count} test questions for {grade} level {subject} covering {topics}.

Difficulty distribution: Easy: {easy}%, Medium: {medium}%, Hard: {hard}%

Format each question as:
Q[number]. [Question text]
A) [Option 1]
B) [Option 2]
C) [Option 3]
D) [Option 4]
Answer: [Correct option]

Include a mix of question types:
- Multiple choice questions
- Problem-solving questions
- Conceptual questions
- Application questions

Make questions appropriate for {grade} level and cover the topics: {topics}.

Questions:",
        count = request.count,
        grade = request.grade_level,
        subject = request.subject,
        topics = topics,
        easy = mix.easy,
        medium = mix.medium,
        hard = mix.hard,
    )
}

pub fn document_question_prompt(
    text: &str,
    request: &DocumentQuestionRequest,
    text_limit: usize,
) -> String {
    format!(
        "Based on the following document, create {} {} level test questions. Include different question types: {}.

Document content: {}

Format each question as:
Q[Number]: [Question text]
Type: [Question type]
Options: [If multiple choice: A) B) C) D)]
Answer: [Correct answer]
Explanation: [Why this is correct]",
        request.count,
        request.difficulty,
        request.question_types.join(", "),
        Cleaner::truncate(text, text_limit)
    )
}

pub fn study_material_prompt(topic: &str, kind: &str) -> String {
    format!(
        "Create a {} about {} for students. Make it clear and educational.",
        kind, topic
    )
}
