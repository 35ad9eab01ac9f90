use super::*;

#[test]
fn clean_works() {
    let raw = "```\nhello\n```";
    assert_eq!(clean(raw), "hello");
}

#[test]
fn strip_echo_removes_prompt_prefix() {
    assert_eq!(strip_echo("Prompt: body text ", "Prompt:"), "body text");
    assert_eq!(strip_echo("unrelated", "Prompt:"), "unrelated");
}

#[test]
fn enhancements_follow_fixed_order() {
    let out = PostProcessor::new().enhance("Answer.", "basic algebra please");
    let tip = out.find("💡 Math Tip").unwrap();
    let level = out.find("🌱 Beginner Friendly").unwrap();
    let follow = out.find("🤔 You might also want to ask about:").unwrap();
    assert!(out.starts_with("Answer."));
    assert!(tip < level && level < follow);
    assert!(out.ends_with("• Introduction to fractions"));
}

#[test]
fn intermediate_level_adds_no_note() {
    let out = PostProcessor::new().enhance("Answer.", "algebra");
    assert!(!out.contains("Beginner Friendly"));
    assert!(!out.contains("Advanced Level"));
    assert!(out.contains("• Trigonometric identities"));
}

#[test]
fn general_subject_is_left_alone() {
    let out = PostProcessor::new().enhance("Answer.", "tell me something");
    assert_eq!(out, "Answer.");
}

#[test]
fn follow_ups_never_exceed_three() {
    for subject in Subject::ALL {
        for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
            let out = FollowUps.apply("", subject, level);
            assert!(out.matches("\n• ").count() <= 3);
        }
    }
}

#[test]
fn computer_science_gets_coding_tip() {
    let out = PostProcessor::new().enhance_with("x", Subject::ComputerScience, Level::Advanced);
    assert!(out.contains("💻 Coding Tip"));
    assert!(out.contains("🚀 Advanced Level"));
    assert!(out.contains("• System design"));
}

#[test]
fn apology_comes_from_fixed_list() {
    for _ in 0..20 {
        assert!(fallback::APOLOGIES.contains(&apology()));
    }
}
