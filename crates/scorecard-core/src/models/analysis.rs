// ABOUTME: Analysis result types produced by the scorer and persisted per conversation
// ABOUTME: Includes sentiment classification and the good/fair/poor report banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::bands::{FAIR_THRESHOLD, GOOD_THRESHOLD};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall tone of the user's side of the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative keywords
    Positive,
    /// Balanced or no sentiment keywords
    #[default]
    Neutral,
    /// More negative than positive keywords
    Negative,
}

impl Sentiment {
    /// Storage and wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(AppError::invalid_input(format!(
                "Unknown sentiment '{other}'"
            ))),
        }
    }
}

/// Heuristic quality scorecard for one conversation
///
/// Bounded scores lie in `[0, 100]`. `overall_satisfaction_score` is derived
/// from the other fields and is only ever computed by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Length and questioning quality of AI replies
    pub clarity_score: f64,
    /// Word overlap between user turns and AI replies
    pub relevance_score: f64,
    /// Absence of hedging language in AI replies
    pub accuracy_score: f64,
    /// Absence of trailing-off or terse AI replies
    pub completeness_score: f64,
    /// Tone of the user's messages
    pub sentiment: Sentiment,
    /// Acknowledging language in AI replies
    pub empathy_score: f64,
    /// Placeholder responsiveness estimate, not a measured latency
    pub response_time_avg: f64,
    /// Whether an AI reply reported the issue as handled
    pub resolution_rate: bool,
    /// Whether an AI reply handed off to a human or higher tier
    pub escalation_needed: bool,
    /// Count of fallback phrases across AI replies
    pub fallback_frequency: u32,
    /// Weighted headline score
    pub overall_satisfaction_score: f64,
}

/// Band a score falls into on the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above
    Good,
    /// 60 up to 80
    Fair,
    /// Below 60
    Poor,
}

impl ScoreBand {
    /// Classify a score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Persisted analysis for a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Unique analysis ID, stable across re-analysis
    pub id: String,
    /// Conversation this analysis belongs to
    pub conversation_id: String,
    /// The scorecard itself
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// When the conversation was first analyzed (ISO 8601)
    pub created_at: String,
    /// When the analysis was last replaced (ISO 8601)
    pub updated_at: String,
}
