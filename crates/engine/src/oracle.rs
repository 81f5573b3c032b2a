//! External move-suggestion oracle.
//!
//! An LLM messages endpoint is asked for a move given the position and the
//! exhaustive legal-move list. The reply is free text; it is validated
//! against the legal-move set before use, and every failure mode (timeout,
//! transport error, unparseable or illegal suggestion) collapses to None so
//! the caller falls back to the search engine. An oracle problem is never
//! an error the end caller sees.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::types::{Difficulty, LegalMove, Side};

/// Hard ceiling on one oracle round trip.
pub const DEFAULT_TIMEOUT_MS: u64 = 8_000;

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

#[derive(Clone, Debug)]
pub struct OracleConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl OracleConfig {
    /// Build from environment variables. Returns None without a credential
    /// (`AI_PROVIDER_API_KEY`, falling back to `ANTHROPIC_API_KEY`), which
    /// disables the adapter entirely.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("AI_PROVIDER_API_KEY")
            .or_else(|_| env::var("ANTHROPIC_API_KEY"))
            .ok()?;
        Some(Self {
            api_url: env::var("ORACLE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key,
            model: env::var("ORACLE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_ms: env::var("ORACLE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        })
    }
}

pub struct OracleClient {
    client: Client,
    config: OracleConfig,
}

impl OracleClient {
    pub fn new(config: OracleConfig) -> Self {
        let client = Client::builder()
            .user_agent("Gambit/0.1")
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap();
        Self { client, config }
    }

    /// Ask the oracle for a move. Returns the SAN of a validated legal
    /// move, or None on any failure.
    pub async fn request_move(
        &self,
        fen: &str,
        side: Side,
        difficulty: Difficulty,
        legal: &[LegalMove],
    ) -> Option<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": 1024,
            "messages": [{
                "role": "user",
                "content": build_prompt(fen, side, difficulty, legal),
            }],
        });

        let send = self
            .client
            .post(&self.config.api_url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send();

        let timeout = Duration::from_millis(self.config.timeout_ms);
        let response = match tokio::time::timeout(timeout, send).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                warn!("Oracle request error: {e}");
                return None;
            }
            Err(_) => {
                warn!("Oracle timed out after {}ms", self.config.timeout_ms);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Oracle HTTP {}", response.status());
            return None;
        }

        let data: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Oracle JSON parse error: {e}");
                return None;
            }
        };

        let suggestion = data["content"][0]["text"].as_str()?.trim();
        debug!(suggestion, "Oracle replied");

        match match_legal(suggestion, legal) {
            Some(san) => Some(san),
            None => {
                warn!(suggestion, "Oracle suggestion is not a legal move");
                None
            }
        }
    }
}

/// Validate a suggested token against the legal-move set, accepting SAN
/// (with or without check suffix), UCI, or bare from+to concatenation.
/// An invalid suggestion is treated identically to no suggestion.
fn match_legal(token: &str, legal: &[LegalMove]) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    let bare = token.trim_end_matches(['+', '#']);
    legal
        .iter()
        .find(|m| {
            let san_bare = m.san.trim_end_matches(['+', '#']);
            let from_to = m
                .from
                .map(|from| format!("{from}{}", m.to))
                .unwrap_or_default();
            m.san == token || san_bare == bare || m.uci == token || from_to == token
        })
        .map(|m| m.san.clone())
}

fn build_prompt(fen: &str, side: Side, difficulty: Difficulty, legal: &[LegalMove]) -> String {
    let moves = legal
        .iter()
        .map(|m| m.san.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let instructions = match difficulty {
        Difficulty::Hard => {
            "Play like a 2500+ rated grandmaster: calculate forcing lines, \
             never miss hanging material, and look for mating patterns."
        }
        Difficulty::Medium => {
            "Play like an 1800 rated club player: look for simple tactics, \
             develop pieces, control the center."
        }
        Difficulty::Easy => {
            "Play like a casual player: prefer safe, natural developing moves."
        }
    };

    format!(
        "You are an expert chess engine playing at {difficulty} level.\n\n\
         Position (FEN): {fen}\n\
         You are playing as: {side}\n\n\
         Legal moves available (SAN notation): {moves}\n\n\
         {instructions}\n\n\
         Respond with ONLY the move in SAN notation (e.g. \"Nf3\", \"e4\", \
         \"Qxf7+\", \"O-O\"). No explanation, just the move."
    )
}
