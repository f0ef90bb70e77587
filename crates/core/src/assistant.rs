//! Help desk assistant: a keyword rule table and FAQ search.
//!
//! Rules are checked in order with plain substring matching on the
//! lower-cased message, so short keywords also match inside longer words
//! ("hi" in "this").

use rand::Rng;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Swapping,
    Coins,
    Safety,
    Photos,
    Account,
    Deletion,
    Support,
    Default,
}

/// Keyword table, checked top to bottom.
const RULES: &[(Topic, &[&str])] = &[
    (Topic::Greeting, &["hello", "hi", "hey"]),
    (Topic::Swapping, &["swap", "trade", "exchange"]),
    (Topic::Coins, &["coin", "wear coin"]),
    (Topic::Safety, &["safe", "security", "meet"]),
    (Topic::Photos, &["photo", "picture", "image"]),
    (Topic::Account, &["account", "profile", "sign up"]),
    (Topic::Deletion, &["delete", "remove", "cancel"]),
    (Topic::Support, &["help", "support", "problem"]),
];

pub const GREETINGS: &[&str] = &[
    "Hello! I'm ReWear AI, your sustainable fashion assistant. How can I help you today?",
    "Hi there! I'm here to help you with all things ReWear. What would you like to know?",
    "Welcome to ReWear! I'm your AI helper. Feel free to ask me anything about swapping, safety, or using the platform.",
];

pub const DEFAULT_REPLIES: &[&str] = &[
    "I understand you're asking about that. Let me help you find the right information.",
    "That's a great question! Here's what I can tell you about that topic.",
    "I'd be happy to help with that. Let me provide you with some useful information.",
];

pub const FALLBACK_REPLIES: &[&str] = &[
    "I'm not sure I understood that completely. Could you rephrase your question?",
    "I want to make sure I help you correctly. Can you ask that in a different way?",
    "I'm still learning! Could you try asking your question differently?",
];

const SWAPPING_REPLY: &str = "To start swapping, first list an item by uploading photos and adding a description. Then browse other users' items and use Wear Coins to request swaps. You'll earn 10 coins for each item you list!";
const COINS_REPLY: &str = "Wear Coins are our platform currency. You earn 10 coins for each item you list and spend 5 coins to request a swap. They help keep our community fair and active!";
const SAFETY_REPLY: &str = "Safety is our top priority! Always meet in public places, bring a friend, and trust your instincts. Check user profiles and ratings before meeting. Report any suspicious activity immediately.";
const PHOTOS_REPLY: &str = "For great item photos, use good lighting, take multiple angles, show any flaws honestly, and include size labels. Clear photos increase your swap success rate!";
const ACCOUNT_REPLY: &str = "Creating an account is easy! Just provide your email, create a password, and add some basic info. You can then start listing items and browsing the community.";
const DELETION_REPLY: &str = "You can delete your account anytime through your profile settings. This will permanently remove all your data, listings, and messages from ReWear.";
const SUPPORT_REPLY: &str = "I'm here to help! You can also check our FAQ section, browse help categories, or contact our support team directly. What specific issue are you facing?";

/// Classify a message by the first matching rule.
pub fn classify(message: &str) -> Topic {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::Default)
}

/// Reply to `message`, using `variant` to pick among topics with several
/// canned answers. The index wraps around.
pub fn reply_with(message: &str, variant: usize) -> &'static str {
    match classify(message) {
        Topic::Greeting => GREETINGS[variant % GREETINGS.len()],
        Topic::Swapping => SWAPPING_REPLY,
        Topic::Coins => COINS_REPLY,
        Topic::Safety => SAFETY_REPLY,
        Topic::Photos => PHOTOS_REPLY,
        Topic::Account => ACCOUNT_REPLY,
        Topic::Deletion => DELETION_REPLY,
        Topic::Support => SUPPORT_REPLY,
        Topic::Default => DEFAULT_REPLIES[variant % DEFAULT_REPLIES.len()],
    }
}

/// Reply to `message` with a randomly chosen variant.
pub fn reply(message: &str) -> &'static str {
    reply_with(message, rand::rng().random::<u32>() as usize)
}

/// Reply for input the assistant could not use (e.g. a blank message).
pub fn fallback_reply(variant: usize) -> &'static str {
    FALLBACK_REPLIES[variant % FALLBACK_REPLIES.len()]
}

// ---------------------------------------------------------------------------
// FAQ
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I start swapping on ReWear?",
        answer: "Getting started is easy! Simply create an account, upload photos of items you want to swap, browse available items from other users, and start connecting. You can earn Wear Coins by listing items and use them to request swaps.",
        category: "getting-started",
        tags: &["beginner", "account", "listing"],
    },
    FaqEntry {
        question: "Is ReWear safe to use?",
        answer: "Yes! We prioritize safety with verified user profiles, secure messaging, and community guidelines. Always meet in public places, bring a friend, and trust your instincts. Report any suspicious activity immediately.",
        category: "safety",
        tags: &["safety", "security", "meeting"],
    },
    FaqEntry {
        question: "What are Wear Coins and how do they work?",
        answer: "Wear Coins are our platform currency. You earn them by listing items (10 coins per item) and can spend them to request swaps from other users (5 coins per request). They help maintain a fair exchange system.",
        category: "getting-started",
        tags: &["currency", "coins", "economy"],
    },
    FaqEntry {
        question: "How do I take good photos of my items?",
        answer: "Use good lighting, take photos from multiple angles, show any flaws honestly, and include size labels when possible. Clear, well-lit photos increase your chances of successful swaps.",
        category: "technical",
        tags: &["photos", "listing", "quality"],
    },
    FaqEntry {
        question: "What should I do if a swap goes wrong?",
        answer: "First, try to resolve the issue directly with the other user. If that doesn't work, use our reporting system. We have a dedicated team to help mediate disputes and ensure fair outcomes.",
        category: "community",
        tags: &["disputes", "resolution", "support"],
    },
    FaqEntry {
        question: "Can I delete my account?",
        answer: "Yes, you can delete your account at any time through your profile settings. This will permanently remove all your data, listings, and messages from our platform.",
        category: "technical",
        tags: &["account", "deletion", "privacy"],
    },
];

/// Case-insensitive substring search over question, answer and tags.
/// An empty query returns every entry.
pub fn search_faq(query: &str) -> Vec<&'static FaqEntry> {
    let needle = query.to_lowercase();
    FAQ.iter()
        .filter(|faq| {
            faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
                || faq.tags.iter().any(|t| t.contains(&needle))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
