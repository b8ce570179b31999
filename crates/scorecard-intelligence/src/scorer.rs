// ABOUTME: Conversation scorer computing ten heuristic sub-scores and an overall score
// ABOUTME: Each metric is an independent pure reducer over the ordered transcript
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Heuristic conversation scoring
//!
//! Message length is measured in characters (Unicode scalar values). Phrase
//! matching is substring containment on lowercased text, see [`crate::lexicon`].

use crate::lexicon::NormalizedText;
use scorecard_core::constants::{
    accuracy, bounds, clarity, completeness, empathy, escalation, fallback, overall, relevance,
    resolution, response_time, sentiment,
};
use scorecard_core::errors::{AppError, AppResult};
use scorecard_core::models::{AnalysisResult, Message, Sentiment};
use std::collections::HashSet;
use tracing::debug;

/// Clamp a score into `[0, 100]`
#[inline]
fn clamp_score(score: f64) -> f64 {
    score.clamp(bounds::MIN_SCORE, bounds::MAX_SCORE)
}

#[inline]
fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn ai_messages(messages: &[Message]) -> impl Iterator<Item = &Message> {
    messages.iter().filter(|m| m.is_ai())
}

/// Stateless scorer for uploaded transcripts
pub struct ConversationScorer;

impl ConversationScorer {
    /// Score a transcript
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `messages` is empty; there is nothing to score.
    pub fn score(messages: &[Message]) -> AppResult<AnalysisResult> {
        if messages.is_empty() {
            return Err(AppError::no_messages());
        }

        let clarity_score = Self::clarity(messages);
        let relevance_score = Self::relevance(messages);
        let accuracy_score = Self::accuracy(messages);
        let completeness_score = Self::completeness(messages);
        let sentiment = Self::sentiment(messages);
        let empathy_score = Self::empathy(messages);
        let response_time_avg = Self::response_time(messages);
        let resolution_rate = Self::resolution(messages);
        let escalation_needed = Self::escalation(messages);
        let fallback_frequency = Self::fallback_frequency(messages);

        let mut result = AnalysisResult {
            clarity_score,
            relevance_score,
            accuracy_score,
            completeness_score,
            sentiment,
            empathy_score,
            response_time_avg,
            resolution_rate,
            escalation_needed,
            fallback_frequency,
            overall_satisfaction_score: 0.0,
        };
        result.overall_satisfaction_score = Self::overall(&result);

        debug!(
            messages = messages.len(),
            overall = result.overall_satisfaction_score,
            sentiment = %result.sentiment,
            resolved = result.resolution_rate,
            escalated = result.escalation_needed,
            "Scored conversation"
        );

        Ok(result)
    }

    /// Penalize AI replies that are very short, very long, or long without a question
    #[must_use]
    pub fn clarity(messages: &[Message]) -> f64 {
        let penalty: f64 = ai_messages(messages)
            .map(|msg| {
                let len = char_len(&msg.content);
                let mut penalty = 0.0;
                if len < clarity::SHORT_MESSAGE_CHARS {
                    penalty += clarity::SHORT_MESSAGE_PENALTY;
                }
                if len > clarity::LONG_MESSAGE_CHARS {
                    penalty += clarity::LONG_MESSAGE_PENALTY;
                }
                if len > clarity::UNQUESTIONED_MESSAGE_CHARS && !msg.content.contains('?') {
                    penalty += clarity::NO_QUESTION_PENALTY;
                }
                penalty
            })
            .sum();

        clamp_score(clarity::BASE_SCORE - penalty)
    }

    /// Penalize AI replies sharing no substantial word with the message before them
    ///
    /// Every AI message after the first position is compared with its
    /// predecessor, whichever side sent it.
    #[must_use]
    pub fn relevance(messages: &[Message]) -> f64 {
        let off_topic = messages
            .windows(2)
            .filter(|pair| pair[1].is_ai())
            .filter(|pair| Self::shared_word_count(&pair[0].content, &pair[1].content) == 0)
            .count();
        let off_topic = u32::try_from(off_topic).unwrap_or(u32::MAX);

        clamp_score(relevance::BASE_SCORE - f64::from(off_topic) * relevance::OFF_TOPIC_PENALTY)
    }

    /// Lowercased whitespace-separated words; punctuation stays attached
    fn word_set(lowered: &str) -> HashSet<&str> {
        lowered.split_whitespace().collect()
    }

    /// Count distinct words longer than three characters found in both texts
    fn shared_word_count(previous: &str, reply: &str) -> usize {
        let previous_lower = previous.to_lowercase();
        let reply_lower = reply.to_lowercase();

        let previous_words = Self::word_set(&previous_lower);
        let reply_words = Self::word_set(&reply_lower);

        previous_words
            .intersection(&reply_words)
            .filter(|word| char_len(word) > relevance::MIN_SHARED_WORD_CHARS)
            .count()
    }

    /// Penalize hedging phrases in AI replies
    #[must_use]
    pub fn accuracy(messages: &[Message]) -> f64 {
        let hedges: u32 = ai_messages(messages)
            .map(|msg| NormalizedText::new(&msg.content).count_matches(accuracy::HEDGE_PHRASES))
            .sum();

        clamp_score(accuracy::BASE_SCORE - f64::from(hedges) * accuracy::HEDGE_PENALTY)
    }

    /// Penalize AI replies that trail off, end on a question, or are terse
    #[must_use]
    pub fn completeness(messages: &[Message]) -> f64 {
        let mut score = completeness::BASE_SCORE;
        let mut incomplete = 0_u32;

        for msg in ai_messages(messages) {
            let content = &msg.content;
            if content.contains(completeness::ELLIPSIS) || content.ends_with('?') {
                incomplete += 1;
            }
            if char_len(content) < completeness::TERSE_MESSAGE_CHARS && !content.contains('?') {
                score -= completeness::TERSE_PENALTY;
            }
        }

        score -= f64::from(incomplete) * completeness::INCOMPLETE_PENALTY;
        clamp_score(score)
    }

    /// Classify the user's tone by positive versus negative keyword counts
    #[must_use]
    pub fn sentiment(messages: &[Message]) -> Sentiment {
        let (positive, negative) = messages
            .iter()
            .filter(|m| m.is_user())
            .map(|msg| {
                let text = NormalizedText::new(&msg.content);
                (
                    text.count_matches(sentiment::POSITIVE_KEYWORDS),
                    text.count_matches(sentiment::NEGATIVE_KEYWORDS),
                )
            })
            .fold((0_u32, 0_u32), |(pos, neg), (p, n)| (pos + p, neg + n));

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    /// Reward acknowledging language in AI replies, capped at +50
    #[must_use]
    pub fn empathy(messages: &[Message]) -> f64 {
        let phrases: u32 = ai_messages(messages)
            .map(|msg| NormalizedText::new(&msg.content).count_matches(empathy::EMPATHY_PHRASES))
            .sum();

        let bonus = (f64::from(phrases) * empathy::PHRASE_BONUS).min(empathy::MAX_BONUS);
        (empathy::BASE_SCORE + bonus).min(bounds::MAX_SCORE)
    }

    /// Placeholder responsiveness estimate
    ///
    /// Transcripts carry no timestamps, so this is not a latency measurement:
    /// single-message conversations score 100 and everything else a fixed 85.
    #[must_use]
    pub const fn response_time(messages: &[Message]) -> f64 {
        if messages.len() < response_time::MIN_MESSAGES_FOR_ESTIMATE {
            response_time::SINGLE_TURN_SCORE
        } else {
            response_time::ESTIMATED_SCORE
        }
    }

    /// Whether any AI reply reports the issue as handled
    #[must_use]
    pub fn resolution(messages: &[Message]) -> bool {
        ai_messages(messages)
            .any(|msg| NormalizedText::new(&msg.content).contains_any(resolution::RESOLUTION_PHRASES))
    }

    /// Whether any AI reply hands off to a human or higher tier
    #[must_use]
    pub fn escalation(messages: &[Message]) -> bool {
        ai_messages(messages)
            .any(|msg| NormalizedText::new(&msg.content).contains_any(escalation::ESCALATION_PHRASES))
    }

    /// Total fallback phrases across AI replies, uncapped
    #[must_use]
    pub fn fallback_frequency(messages: &[Message]) -> u32 {
        ai_messages(messages)
            .map(|msg| NormalizedText::new(&msg.content).count_matches(fallback::FALLBACK_PHRASES))
            .sum()
    }

    /// Mean of the six numeric sub-scores, adjusted for resolution and escalation
    #[must_use]
    pub fn overall(result: &AnalysisResult) -> f64 {
        let scores = [
            result.clarity_score,
            result.relevance_score,
            result.accuracy_score,
            result.completeness_score,
            result.empathy_score,
            result.response_time_avg,
        ];

        #[allow(clippy::cast_precision_loss)]
        let mut average = scores.iter().sum::<f64>() / scores.len() as f64;

        if result.resolution_rate {
            average += overall::RESOLUTION_BONUS;
        }
        if result.escalation_needed {
            average -= overall::ESCALATION_PENALTY;
        }

        clamp_score(average)
    }
}
