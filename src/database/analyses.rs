// ABOUTME: Database operations for per-conversation analysis results
// ABOUTME: Re-analysis replaces the stored scores in place, keeping one row per conversation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use scorecard_core::errors::{AppError, AppResult};
use scorecard_core::models::{AnalysisRecord, AnalysisResult, Sentiment};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Analysis database operations manager
pub struct AnalysisManager {
    pool: SqlitePool,
}

impl AnalysisManager {
    /// Create a new analysis manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace the analysis for `conversation_id`
    ///
    /// The row ID and `created_at` survive a replacement; every score and
    /// `updated_at` are overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn upsert_analysis(
        &self,
        conversation_id: &str,
        result: &AnalysisResult,
    ) -> AppResult<AnalysisRecord> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO conversation_analyses (
                id, conversation_id, clarity_score, relevance_score, accuracy_score,
                completeness_score, sentiment, empathy_score, response_time_avg,
                resolution_rate, escalation_needed, fallback_frequency,
                overall_satisfaction_score, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)
            ON CONFLICT(conversation_id) DO UPDATE SET
                clarity_score = excluded.clarity_score,
                relevance_score = excluded.relevance_score,
                accuracy_score = excluded.accuracy_score,
                completeness_score = excluded.completeness_score,
                sentiment = excluded.sentiment,
                empathy_score = excluded.empathy_score,
                response_time_avg = excluded.response_time_avg,
                resolution_rate = excluded.resolution_rate,
                escalation_needed = excluded.escalation_needed,
                fallback_frequency = excluded.fallback_frequency,
                overall_satisfaction_score = excluded.overall_satisfaction_score,
                updated_at = excluded.updated_at
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(conversation_id)
        .bind(result.clarity_score)
        .bind(result.relevance_score)
        .bind(result.accuracy_score)
        .bind(result.completeness_score)
        .bind(result.sentiment.as_str())
        .bind(result.empathy_score)
        .bind(result.response_time_avg)
        .bind(result.resolution_rate)
        .bind(result.escalation_needed)
        .bind(i64::from(result.fallback_frequency))
        .bind(result.overall_satisfaction_score)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store analysis: {e}")))?;

        self.get_analysis(conversation_id).await?.ok_or_else(|| {
            AppError::internal("Analysis row missing immediately after upsert")
                .with_resource_id(conversation_id)
        })
    }

    /// Get the stored analysis for a conversation
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or a stored value is out of range
    pub async fn get_analysis(&self, conversation_id: &str) -> AppResult<Option<AnalysisRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, conversation_id, clarity_score, relevance_score, accuracy_score,
                   completeness_score, sentiment, empathy_score, response_time_avg,
                   resolution_rate, escalation_needed, fallback_frequency,
                   overall_satisfaction_score, created_at, updated_at
            FROM conversation_analyses
            WHERE conversation_id = $1
            ",
        )
        .bind(conversation_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get analysis: {e}")))?;

        row.as_ref().map(row_to_analysis).transpose()
    }
}

fn row_to_analysis(r: &SqliteRow) -> AppResult<AnalysisRecord> {
    let sentiment: String = r.get("sentiment");
    let fallback_frequency: i64 = r.get("fallback_frequency");

    Ok(AnalysisRecord {
        id: r.get("id"),
        conversation_id: r.get("conversation_id"),
        result: AnalysisResult {
            clarity_score: r.get("clarity_score"),
            relevance_score: r.get("relevance_score"),
            accuracy_score: r.get("accuracy_score"),
            completeness_score: r.get("completeness_score"),
            sentiment: sentiment.parse::<Sentiment>()?,
            empathy_score: r.get("empathy_score"),
            response_time_avg: r.get("response_time_avg"),
            resolution_rate: r.get("resolution_rate"),
            escalation_needed: r.get("escalation_needed"),
            fallback_frequency: u32::try_from(fallback_frequency).map_err(|_| {
                AppError::database(format!(
                    "Stored fallback_frequency {fallback_frequency} is out of range"
                ))
            })?,
            overall_satisfaction_score: r.get("overall_satisfaction_score"),
        },
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    })
}
