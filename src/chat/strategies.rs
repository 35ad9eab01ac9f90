//! One responder per strategy. Each tries remote generation where it helps
//! and always ends with deterministic text.

use crate::history::ConversationLog;
use crate::knowledge::{self, KnowledgeBase, Topic};
use crate::llm::{GenerationOptions, TextGenerator};
use crate::postprocessing::{apology, strip_echo};
use crate::preprocessing::{contains_any, CreativeKind, Level, ProblemKind, Subject};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static BINARY_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?)\s*([+\-*/])\s*(-?\d+(?:\.\d+)?)")
        .expect("expression pattern is valid")
});

/// Remote answers shorter than this fall back to the knowledge base.
const MIN_KNOWLEDGE_CHARS: usize = 50;

async fn remote(
    generator: &dyn TextGenerator,
    prompt: &str,
    options: GenerationOptions,
) -> Option<String> {
    match generator.generate(prompt, &options).await {
        Ok(raw) => {
            let text = strip_echo(&raw, prompt);
            (!text.is_empty()).then_some(text)
        }
        Err(e) => {
            warn!(error = %e, "Remote generation failed, using fallback");
            None
        }
    }
}

pub async fn knowledge_base(generator: &dyn TextGenerator, input: &str, subject: Subject) -> String {
    let base = knowledge::lookup(subject);
    let prompt = format!(
        "You are an expert in {}. Provide a comprehensive, educational response.\n\n{}",
        subject.label(),
        input
    );

    if let Some(text) = remote(generator, &prompt, GenerationOptions::chat(300, 0.7)).await {
        if text.chars().count() > MIN_KNOWLEDGE_CHARS {
            return format_knowledge_response(&text, base);
        }
        debug!(len = text.len(), "Remote answer too short, searching knowledge base");
    }

    search_knowledge_base(input, base)
}

pub fn format_knowledge_response(text: &str, base: &KnowledgeBase) -> String {
    let related: Vec<_> = base.topic_names().take(3).collect();
    format!(
        "{}\n\n📖 Related {} topics: {}",
        text.trim(),
        base.subject.label(),
        related.join(", ")
    )
}

pub fn search_knowledge_base(input: &str, base: &KnowledgeBase) -> String {
    describe_topic(base.subject, base.find_topic(input))
}

fn describe_topic(subject: Subject, topic: &Topic) -> String {
    let mut out = format!(
        "📘 {}: {} ({})\n\nKey concepts: {}",
        subject.label(),
        topic.name,
        topic.area,
        topic.concepts.join(", ")
    );

    if !topic.formulas.is_empty() {
        out.push_str("\n\nFormulas:");
        for (name, formula) in topic.formulas {
            out.push_str(&format!("\n• {}: {}", name, formula));
        }
    }
    if !topic.examples.is_empty() {
        out.push_str("\n\nExamples:");
        for example in topic.examples {
            out.push_str(&format!("\n• {}", example));
        }
    }
    out
}

pub fn learning_path(input: &str, subject: Subject, level: Level) -> String {
    let Some(path) = knowledge::learning_path(subject, level) else {
        return general_learning(input);
    };

    let mut out = format!("🎯 {} learning path ({} level):\n", subject.label(), level);
    for (index, step) in path.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", index + 1, step));
    }
    out.push_str(&format!(
        "\n\nStart with \"{}\" and move on once you can explain it in your own words.",
        path[0]
    ));
    out
}

fn general_learning(input: &str) -> String {
    format!(
        "📖 Here's a proven way to learn \"{}\":\n\n\
         1. Skim an overview to see the big picture\n\
         2. Break the topic into small, focused pieces\n\
         3. Practice active recall and spaced repetition\n\
         4. Apply what you learn to real problems\n\
         5. Teach the idea back in your own words",
        input.trim()
    )
}

/// A single binary operation found in free text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arithmetic {
    pub lhs: f64,
    pub op: char,
    pub rhs: f64,
}

impl Arithmetic {
    pub fn parse(input: &str) -> Option<Self> {
        let caps = BINARY_EXPRESSION.captures(input)?;
        Some(Self {
            lhs: caps[1].parse().ok()?,
            op: caps[2].chars().next()?,
            rhs: caps[3].parse().ok()?,
        })
    }

    /// `None` on division by zero.
    pub fn evaluate(&self) -> Option<f64> {
        let value = match self.op {
            '+' => self.lhs + self.rhs,
            '-' => self.lhs - self.rhs,
            '*' => self.lhs * self.rhs,
            '/' if self.rhs == 0.0 => return None,
            '/' => self.lhs / self.rhs,
            _ => return None,
        };
        Some((value * 1e10).round() / 1e10)
    }
}

pub async fn problem_solving(generator: &dyn TextGenerator, input: &str) -> String {
    let kind = ProblemKind::identify(input);

    if kind == ProblemKind::Math {
        if let Some(expr) = Arithmetic::parse(input) {
            return solve_arithmetic(expr);
        }
    }

    let prompt = format!(
        "Solve the following problem step by step and explain each step:\n\n{}",
        input
    );
    if let Some(text) = remote(generator, &prompt, GenerationOptions::chat(300, 0.7)).await {
        return text;
    }

    problem_steps(kind, input)
}

fn solve_arithmetic(expr: Arithmetic) -> String {
    match expr.evaluate() {
        Some(result) => format!(
            "🧮 Let's work it out:\n\n{} {} {} = {}\n\nCheck the answer by reversing the operation.",
            expr.lhs, expr.op, expr.rhs, result
        ),
        None => format!(
            "🧮 {} {} {} has no answer: division by zero is undefined.",
            expr.lhs, expr.op, expr.rhs
        ),
    }
}

fn problem_steps(kind: ProblemKind, input: &str) -> String {
    let (header, steps, subject): (&str, &[&str], Option<Subject>) = match kind {
        ProblemKind::Math => (
            "🧮 Approach for this math problem:",
            &[
                "Identify what is given and what is asked",
                "Write down the relevant formula",
                "Substitute the known values step by step",
                "Simplify and check that the answer is reasonable",
            ],
            Some(Subject::Mathematics),
        ),
        ProblemKind::Science => (
            "🔬 Scientific problem-solving steps:",
            &[
                "List the known quantities and their units",
                "Identify the governing law or principle",
                "Write the equation and solve for the unknown",
                "Check units and order of magnitude",
            ],
            Some(Subject::Science),
        ),
        ProblemKind::Programming => (
            "💻 Programming problem checklist:",
            &[
                "Restate the expected input and output",
                "Work through a small example by hand",
                "Write the simplest version that works",
                "Test edge cases such as empty input and large values",
            ],
            None,
        ),
        ProblemKind::Logic => (
            "🧩 Logical reasoning steps:",
            &[
                "Write down every premise explicitly",
                "Separate what is known from what is assumed",
                "Eliminate options that contradict a premise",
                "Verify the conclusion against all premises",
            ],
            None,
        ),
        ProblemKind::General => (
            "🔍 General problem-solving framework:",
            &[
                "Define the problem clearly",
                "Gather the relevant information",
                "Brainstorm possible solutions",
                "Choose one, try it and review the result",
            ],
            None,
        ),
    };

    let mut out = header.to_string();
    for (index, step) in steps.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", index + 1, step));
    }

    if let Some(subject) = subject {
        let topic = knowledge::lookup(subject).find_topic(input);
        if !topic.formulas.is_empty() {
            out.push_str(&format!("\n\nUseful {} formulas:", topic.name));
            for (name, formula) in topic.formulas {
                out.push_str(&format!("\n• {}: {}", name, formula));
            }
        }
    }
    out
}

pub async fn conversational(
    generator: &dyn TextGenerator,
    log: &ConversationLog,
    input: &str,
) -> String {
    let prompt = format!(
        "You are a friendly, knowledgeable educational assistant. {}\n\nUser: {}",
        log.context_window(),
        input
    );

    match remote(generator, &prompt, GenerationOptions::chat(200, 0.8)).await {
        Some(text) => text,
        None => default_conversational(input),
    }
}

fn default_conversational(input: &str) -> String {
    let lower = input.to_lowercase();
    if contains_any(&lower, &["thanks", "thank you"]) {
        "😊 You're welcome! Keep up the great work. What would you like to explore next?".to_string()
    } else if contains_any(&lower, &["hello", "hi", "hey", "good morning", "good afternoon"]) {
        "👋 Hello! I'm your EDU-MORPH learning assistant. Ask me about any subject, request a learning path, or give me a problem to solve!".to_string()
    } else {
        "I'm here to help you learn! What would you like to explore today?".to_string()
    }
}

pub async fn creative(generator: &dyn TextGenerator, input: &str) -> String {
    let kind = CreativeKind::identify(input);
    let prompt = format!(
        "Write a short, educational {} for students based on this request: {}",
        kind.as_str(),
        input
    );

    match remote(generator, &prompt, GenerationOptions::chat(400, 0.9)).await {
        Some(text) => text,
        None => creative_template(kind, input.trim()),
    }
}

fn creative_template(kind: CreativeKind, request: &str) -> String {
    match kind {
        CreativeKind::Story => format!(
            "📖 A short learning story:\n\n\
             A curious student once asked about \"{}\". Instead of memorizing an answer, \
             they broke the question into small pieces, tested each idea and wrote down what they found. \
             By the end of the week they could explain it to a friend, and that is when they knew they truly understood it.",
            request
        ),
        CreativeKind::Poem => "✍️ A short poem about learning:\n\n\
             A question sparks like morning light,\n\
             Each answer makes the path more bright;\n\
             Step by step the mind will grow,\n\
             Till what was hard is what we know."
            .to_string(),
        CreativeKind::Essay => format!(
            "📝 Essay outline for \"{}\":\n\n\
             1. Introduction: hook the reader and state your thesis\n\
             2. Body paragraph one: your strongest argument with evidence\n\
             3. Body paragraph two: a supporting argument or example\n\
             4. Body paragraph three: address a counterargument\n\
             5. Conclusion: restate the thesis and leave a final thought",
            request
        ),
        CreativeKind::Explanation => format!(
            "💡 Creative explanation:\n\n\
             Picture \"{}\" as a city. The main idea is the town square, every detail is a street leading to it, \
             and examples are the buildings that make the city worth visiting. \
             Walk one street at a time and the whole map soon makes sense.",
            request
        ),
        CreativeKind::General => format!(
            "🎨 Let's get creative with \"{}\"! Try describing it as a story, a poem or a comic strip. \
             Tell me which format you prefer and I'll help you build it.",
            request
        ),
    }
}

pub async fn general(generator: &dyn TextGenerator, input: &str, subject: Subject) -> String {
    let prompt = format!(
        "You are an educational AI assistant. Help the student with their question: \"{}\". Provide a helpful, educational response.",
        input
    );

    if let Some(text) = remote(generator, &prompt, GenerationOptions::chat(300, 0.7)).await {
        return text;
    }

    if subject == Subject::General {
        apology().to_string()
    } else {
        search_knowledge_base(input, knowledge::lookup(subject))
    }
}
