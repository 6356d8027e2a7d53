//! Generation result types.
//!
//! Mirrors the `generateContent` response shape. The provider does not
//! guarantee any of these fields, so every one of them is optional and
//! unknown fields are ignored.

use serde::Deserialize;

/// Raw result of a single text-generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Convenience text field. Some client layers flatten the first
    /// candidate's text into this; the REST API itself leaves it out.
    #[serde(default)]
    pub text: Option<String>,
    /// Alternative generations, in provider order.
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// One alternative generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Content of a candidate, split into parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
    /// Role of the content (e.g. "model").
    #[serde(default)]
    pub role: Option<String>,
}

/// A fragment of candidate output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerationResult {
    /// Result carrying only the convenience text field.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            candidates: None,
        }
    }

    /// Result with a single candidate made of the given text parts.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts = parts
            .into_iter()
            .map(|text| Part {
                text: Some(text.into()),
            })
            .collect();
        Self {
            text: None,
            candidates: Some(vec![Candidate {
                content: Some(Content {
                    parts: Some(parts),
                    role: Some("model".to_string()),
                }),
            }]),
        }
    }

    /// Text of `candidates[0].content.parts[0]`, if every level is present.
    pub fn first_part_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()?
            .text
            .as_deref()
    }
}
