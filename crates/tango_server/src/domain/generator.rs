//! Study material generation through the Gemini API.
//!
//! One invocation is one outbound request: no retries, no backoff.
//! Whatever comes back is parsed against the declared schema and
//! validated; anything short of a fully conforming study set is an
//! error, never a partial result.

use eyre::{bail, eyre, WrapErr};
use serde::Deserialize;
use serde_json::{json, Value};
use tango_core::{Flashcard, Language, OPTION_COUNT, QUIZ_COUNT};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct Generator {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl Generator {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Generates a study set for a keyword with a single service round trip.
    ///
    /// The caller is responsible for the keyword being non-empty after
    /// trimming. On success the returned flashcard is guaranteed to have
    /// passed [`Flashcard::validate`].
    pub async fn generate(&self, keyword: &str, language: Language) -> eyre::Result<Flashcard> {
        tracing::info!("Generating study material for {keyword} in {language}");

        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(keyword, language))
            .send()
            .await
            .wrap_err("Failed to reach the generation service")?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Generation service returned HTTP {status}: {body}");
        }
        let payload: GenerateContentResponse = response
            .json()
            .await
            .wrap_err("Failed to read the generation service response")?;

        let flashcard = flashcard_from_response(payload)?;
        tracing::info!("Generated study material for {keyword}");
        Ok(flashcard)
    }
}

fn prompt(keyword: &str, language: Language) -> String {
    format!(
        r#"Generate a comprehensive Japanese language study set for the keyword: "{keyword}".
The language preference for explanations and questions is "{}".

Requirement:
1. Detailed flashcard info including term, reading (furigana), meaning, a deep explanation, and a sample sentence.
2. Exactly {QUIZ_COUNT} multiple-choice quiz questions ({OPTION_COUNT} options each) based on the keyword's usage, nuances, and context.

Output MUST be in JSON format matching the schema provided."#,
        language.natural_name()
    )
}

/// The strict output schema declared to the service, mirroring [`Flashcard`].
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "term": { "type": "STRING" },
            "reading": { "type": "STRING" },
            "meaning": { "type": "STRING" },
            "explanation": { "type": "STRING" },
            "exampleSentence": { "type": "STRING" },
            "exampleMeaning": { "type": "STRING" },
            "quizzes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "correctAnswerIndex": { "type": "INTEGER" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswerIndex", "explanation"]
                }
            }
        },
        "required": [
            "term",
            "reading",
            "meaning",
            "explanation",
            "exampleSentence",
            "exampleMeaning",
            "quizzes"
        ]
    })
}

fn request_body(keyword: &str, language: Language) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt(keyword, language) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extracts and validates the flashcard from a service response.
fn flashcard_from_response(response: GenerateContentResponse) -> eyre::Result<Flashcard> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| eyre!("The service returned no candidates"))?;
    let text = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect::<String>();
    if text.is_empty() {
        bail!("The service returned an empty response");
    }
    let flashcard: Flashcard = serde_json::from_str(&text)
        .wrap_err("The service response did not match the declared schema")?;
    flashcard
        .validate()
        .wrap_err("The service response violated the study set contract")?;
    Ok(flashcard)
}

#[cfg(test)]
mod test {
    use super::*;

    fn payload_with_text(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                },
            }],
        }
    }

    fn valid_flashcard_json() -> String {
        let quizzes = (0..10)
            .map(|i| {
                format!(
                    r#"{{
                        "question": "question {i}",
                        "options": ["a", "b", "c", "d"],
                        "correctAnswerIndex": {},
                        "explanation": "explanation {i}"
                    }}"#,
                    i % 4
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        format!(
            r#"{{
                "term": "絆",
                "reading": "きずな",
                "meaning": "bond",
                "explanation": "a deep connection",
                "exampleSentence": "家族の絆",
                "exampleMeaning": "family bonds",
                "quizzes": [{quizzes}]
            }}"#
        )
    }

    #[test]
    fn prompt_mentions_keyword_and_language() {
        let p = prompt("絆", Language::En);
        assert!(p.contains("\"絆\""));
        assert!(p.contains("\"English\""));
        assert!(p.contains("Exactly 10 multiple-choice quiz questions (4 options each)"));

        let p = prompt("木漏れ日", Language::Ja);
        assert!(p.contains("\"木漏れ日\""));
        assert!(p.contains("\"Japanese\""));
    }

    #[test]
    fn schema_requires_every_field() {
        let schema = response_schema();
        let required = schema["required"].as_array().unwrap();
        for field in [
            "term",
            "reading",
            "meaning",
            "explanation",
            "exampleSentence",
            "exampleMeaning",
            "quizzes",
        ] {
            assert!(required.iter().any(|v| v == field), "{field}");
        }
        let quiz_required = schema["properties"]["quizzes"]["items"]["required"]
            .as_array()
            .unwrap();
        assert!(quiz_required.iter().any(|v| v == "correctAnswerIndex"));
    }

    #[test]
    fn request_body_asks_for_structured_output() {
        let body = request_body("絆", Language::Ja);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("絆"));
    }

    #[test]
    fn parses_a_valid_response() {
        let payload = payload_with_text(&valid_flashcard_json());
        let flashcard = flashcard_from_response(payload).unwrap();
        assert_eq!(flashcard.term, "絆");
        assert_eq!(flashcard.quizzes.len(), 10);
        for quiz in &flashcard.quizzes {
            assert_eq!(quiz.options.len(), 4);
        }
    }

    #[test]
    fn rejects_missing_candidates() {
        let payload = GenerateContentResponse { candidates: vec![] };
        assert!(flashcard_from_response(payload).is_err());
    }

    #[test]
    fn rejects_empty_text() {
        let payload = payload_with_text("");
        assert!(flashcard_from_response(payload).is_err());
    }

    #[test]
    fn rejects_free_text() {
        let payload = payload_with_text("Here is your study set! ...");
        assert!(flashcard_from_response(payload).is_err());
    }

    #[test]
    fn rejects_schema_violations() {
        // 3 options on one question
        let broken = valid_flashcard_json().replacen(r#"["a", "b", "c", "d"]"#, r#"["a", "b", "c"]"#, 1);
        assert!(flashcard_from_response(payload_with_text(&broken)).is_err());

        // answer index out of range
        let broken = valid_flashcard_json().replacen(r#""correctAnswerIndex": 0"#, r#""correctAnswerIndex": 9"#, 1);
        assert!(flashcard_from_response(payload_with_text(&broken)).is_err());
    }
}
