//! /generate

use super::prelude::*;

// handlers

#[instrument(skip(state))]
pub async fn generate(
    State(state): State<TangoState>,
    Json(request): Json<req::Generate<'static>>,
) -> ServerResult<Json<res::Flashcard>> {
    // the UI disables submission of an empty keyword, so this only
    // guards against misbehaving clients
    let Some(keyword) = normalized_keyword(&request.keyword) else {
        return Err(ServerError::bad_request("Keyword must not be empty"));
    };

    let flashcard = state
        .generator
        .generate(keyword, request.language)
        .await
        .map_err(ServerError::generation_failure)?;
    Ok(Json(flashcard))
}

/// Trims the keyword, rejecting ones that are empty afterwards.
fn normalized_keyword(keyword: &str) -> Option<&str> {
    let keyword = keyword.trim();
    (!keyword.is_empty()).then_some(keyword)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalized_keyword("  絆\n"), Some("絆"));
        assert_eq!(normalized_keyword("木漏れ日"), Some("木漏れ日"));
    }

    #[test]
    fn rejects_blank_keywords() {
        assert_eq!(normalized_keyword(""), None);
        assert_eq!(normalized_keyword("   "), None);
        // ideographic space
        assert_eq!(normalized_keyword("\u{3000}"), None);
    }
}
