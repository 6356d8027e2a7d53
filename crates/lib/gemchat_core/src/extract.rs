//! Response extraction.
//!
//! Turns a [`GenerationResult`] of any shape into a display string. The order
//! is fixed: convenience text first, then `candidates[0].content.parts[0]`,
//! then [`NO_RESPONSE_SENTINEL`].

use tracing::debug;

use crate::generation::GenerationResult;

/// Reply used when the provider result carries no usable text.
pub const NO_RESPONSE_SENTINEL: &str = "⚠️ No response from Gemini.";

/// Extract the reply text from a generation result. Never fails.
///
/// A present but empty convenience field is returned as the empty string;
/// the sentinel only covers results where no text field exists at all.
pub fn extract(result: &GenerationResult) -> String {
    if let Some(text) = result.text.as_deref() {
        debug!(source = "text", "extracted reply");
        return text.trim().to_string();
    }

    if let Some(text) = result.first_part_text() {
        debug!(source = "candidates", "extracted reply");
        return text.trim().to_string();
    }

    debug!(source = "sentinel", "no reply text in generation result");
    NO_RESPONSE_SENTINEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{Candidate, Content, Part};

    fn with_candidates(candidates: Vec<Candidate>) -> GenerationResult {
        GenerationResult {
            text: None,
            candidates: Some(candidates),
        }
    }

    #[test]
    fn convenience_text_wins_over_candidates() {
        let mut result = GenerationResult::from_parts(["from candidates"]);
        result.text = Some("  from text \n".into());
        assert_eq!(extract(&result), "from text");
    }

    #[test]
    fn empty_convenience_text_is_returned_as_is() {
        let mut result = GenerationResult::from_parts(["ignored"]);
        result.text = Some(String::new());
        assert_eq!(extract(&result), "");
    }

    #[test]
    fn whitespace_convenience_text_is_returned_empty() {
        let result = GenerationResult {
            text: Some("   \n\t".into()),
            candidates: GenerationResult::from_parts(["from candidates"]).candidates,
        };
        assert_eq!(extract(&result), "");
        assert_eq!(extract(&GenerationResult::from_text("   ")), "");
    }

    #[test]
    fn falls_back_to_first_part_trimmed() {
        let result = GenerationResult::from_parts(["  42  ", "second"]);
        assert_eq!(extract(&result), "42");
    }

    #[test]
    fn only_first_candidate_is_consulted() {
        let result = with_candidates(vec![
            Candidate { content: None },
            Candidate {
                content: Some(Content {
                    parts: Some(vec![Part {
                        text: Some("second candidate".into()),
                    }]),
                    role: None,
                }),
            },
        ]);
        assert_eq!(extract(&result), NO_RESPONSE_SENTINEL);
    }

    #[test]
    fn empty_candidates_yield_sentinel() {
        assert_eq!(extract(&with_candidates(vec![])), NO_RESPONSE_SENTINEL);
    }

    #[test]
    fn empty_parts_yield_sentinel() {
        let result = with_candidates(vec![Candidate {
            content: Some(Content {
                parts: Some(vec![]),
                role: Some("model".into()),
            }),
        }]);
        assert_eq!(extract(&result), NO_RESPONSE_SENTINEL);
    }

    #[test]
    fn part_without_text_yields_sentinel() {
        let result = with_candidates(vec![Candidate {
            content: Some(Content {
                parts: Some(vec![Part { text: None }]),
                role: None,
            }),
        }]);
        assert_eq!(extract(&result), NO_RESPONSE_SENTINEL);
    }

    #[test]
    fn bare_result_yields_sentinel() {
        assert_eq!(extract(&GenerationResult::default()), NO_RESPONSE_SENTINEL);
    }

    #[test]
    fn sentinel_text_is_stable() {
        assert_eq!(NO_RESPONSE_SENTINEL, "\u{26a0}\u{fe0f} No response from Gemini.");
    }
}
