//! Canned replies used when no response could be produced at all.

use rand::seq::SliceRandom;

pub const APOLOGIES: [&str; 5] = [
    "I understand you're looking for help with that topic. While I'm processing your request, could you provide more specific details about what you'd like to learn?",
    "That's an interesting question! I'd be happy to help you understand this better. Could you tell me more about your current level of knowledge on this topic?",
    "I'm here to help you learn! To give you the best possible response, could you clarify what specific aspect of this topic you'd like to explore?",
    "Great question! I want to make sure I provide you with the most helpful information. What's your main goal with this topic?",
    "I'd love to help you with that! To tailor my response to your needs, could you let me know what you already know about this subject?",
];

/// Uniform pick from [`APOLOGIES`].
pub fn apology() -> &'static str {
    APOLOGIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(APOLOGIES[0])
}
