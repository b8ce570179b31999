// ABOUTME: Scoring baselines, penalties, and phrase lexicons for conversation analysis
// ABOUTME: Central home for every tunable number and keyword list used by the scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Constants Module
//!
//! Scoring constants organized by metric. Lexicon entries are lowercase and
//! matched by plain substring containment against lowercased message text.

/// Bounds shared by every bounded sub-score
pub mod bounds {
    /// Lowest value a bounded score may take
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest value a bounded score may take
    pub const MAX_SCORE: f64 = 100.0;
}

/// Clarity metric (AI message length and questioning)
pub mod clarity {
    /// Starting score before penalties
    pub const BASE_SCORE: f64 = 85.0;
    /// Messages shorter than this many characters are penalized
    pub const SHORT_MESSAGE_CHARS: usize = 20;
    /// Penalty for a message shorter than `SHORT_MESSAGE_CHARS`
    pub const SHORT_MESSAGE_PENALTY: f64 = 5.0;
    /// Messages longer than this many characters are penalized
    pub const LONG_MESSAGE_CHARS: usize = 1000;
    /// Penalty for a message longer than `LONG_MESSAGE_CHARS`
    pub const LONG_MESSAGE_PENALTY: f64 = 3.0;
    /// Messages longer than this with no question mark are penalized
    pub const UNQUESTIONED_MESSAGE_CHARS: usize = 100;
    /// Penalty for a long message that never asks anything
    pub const NO_QUESTION_PENALTY: f64 = 5.0;
}

/// Relevance metric (word overlap between a user turn and the AI reply)
pub mod relevance {
    /// Starting score before penalties
    pub const BASE_SCORE: f64 = 90.0;
    /// Penalty per off-topic AI reply
    pub const OFF_TOPIC_PENALTY: f64 = 15.0;
    /// Shared words must be strictly longer than this many characters
    pub const MIN_SHARED_WORD_CHARS: usize = 3;
}

/// Accuracy metric (hedging language in AI messages)
pub mod accuracy {
    /// Starting score before penalties
    pub const BASE_SCORE: f64 = 80.0;
    /// Penalty per hedge phrase found in a message
    pub const HEDGE_PENALTY: f64 = 5.0;
    /// Phrases that signal an uncertain answer
    pub const HEDGE_PHRASES: &[&str] = &["i think", "probably", "maybe", "not sure", "possibly"];
}

/// Completeness metric (trailing questions, ellipses, terse replies)
pub mod completeness {
    /// Starting score before penalties
    pub const BASE_SCORE: f64 = 85.0;
    /// Penalty per incomplete AI reply
    pub const INCOMPLETE_PENALTY: f64 = 10.0;
    /// Replies shorter than this without a question mark are penalized
    pub const TERSE_MESSAGE_CHARS: usize = 30;
    /// Penalty for a terse reply
    pub const TERSE_PENALTY: f64 = 5.0;
    /// Marker of a trailing-off reply
    pub const ELLIPSIS: &str = "...";
}

/// Sentiment classification over user messages
pub mod sentiment {
    /// Keywords counted as positive
    pub const POSITIVE_KEYWORDS: &[&str] = &[
        "great",
        "excellent",
        "thank",
        "happy",
        "love",
        "awesome",
        "perfect",
        "wonderful",
    ];
    /// Keywords counted as negative
    pub const NEGATIVE_KEYWORDS: &[&str] = &[
        "bad",
        "terrible",
        "awful",
        "angry",
        "frustrated",
        "disappointed",
        "hate",
        "worst",
    ];
}

/// Empathy metric (acknowledging language in AI messages)
pub mod empathy {
    /// Starting score, also the floor
    pub const BASE_SCORE: f64 = 50.0;
    /// Bonus per empathy phrase found
    pub const PHRASE_BONUS: f64 = 15.0;
    /// Cap on the accumulated bonus
    pub const MAX_BONUS: f64 = 50.0;
    /// Phrases that acknowledge the user
    pub const EMPATHY_PHRASES: &[&str] = &[
        "i understand",
        "i appreciate",
        "sorry",
        "unfortunately",
        "thank you",
        "glad to help",
        "happy to",
    ];
}

/// Response-time placeholder metric
pub mod response_time {
    /// Conversations with fewer messages than this score `SINGLE_TURN_SCORE`
    pub const MIN_MESSAGES_FOR_ESTIMATE: usize = 2;
    /// Score for a conversation without a reply to time
    pub const SINGLE_TURN_SCORE: f64 = 100.0;
    /// Fixed estimate for every multi-message conversation
    pub const ESTIMATED_SCORE: f64 = 85.0;
}

/// Resolution detection
pub mod resolution {
    /// Phrases indicating the issue was handled
    pub const RESOLUTION_PHRASES: &[&str] = &[
        "resolved",
        "fixed",
        "solved",
        "completed",
        "done",
        "shipped",
        "processed",
    ];
}

/// Escalation detection
pub mod escalation {
    /// Phrases indicating a hand-off to a human or higher tier
    pub const ESCALATION_PHRASES: &[&str] = &[
        "escalate",
        "manager",
        "supervisor",
        "specialist",
        "level 2",
        "transfer",
    ];
}

/// Fallback detection
pub mod fallback {
    /// Phrases indicating the assistant could not answer
    pub const FALLBACK_PHRASES: &[&str] = &[
        "i don't know",
        "not sure",
        "cannot help",
        "unable to",
        "i'm not aware",
    ];
}

/// Overall satisfaction adjustments
pub mod overall {
    /// Bonus when the conversation reached a resolution
    pub const RESOLUTION_BONUS: f64 = 5.0;
    /// Penalty when the conversation needed escalation
    pub const ESCALATION_PENALTY: f64 = 10.0;
}

/// Report banding thresholds
pub mod bands {
    /// Scores at or above this are rated good
    pub const GOOD_THRESHOLD: f64 = 80.0;
    /// Scores at or above this (and below good) are rated fair
    pub const FAIR_THRESHOLD: f64 = 60.0;
}
