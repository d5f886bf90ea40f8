//! Prompt text sent to the text-generation service.
//!
//! Both prompts ask for a short answer in the user's current language, so
//! the rendered suggestion can be shown as-is.

use crate::i18n::Language;
use crate::types::ListingType;

/// Prompt asking for three kinds of businesses related to a search query.
///
/// ```rust
/// use mylisting_core::prompt::suggestion_prompt;
/// use mylisting_core::Language;
///
/// let prompt = suggestion_prompt("pizza", Language::EnUs);
/// assert!(prompt.contains("\"pizza\""));
/// ```
pub fn suggestion_prompt(query: &str, language: Language) -> String {
    match language {
        Language::PtBr => format!(
            "Com base na busca: \"{}\", sugira 3 tipos de negócios ou locais interessantes. \
             Responda em Português do Brasil com um tom amigável e conciso.",
            query
        ),
        Language::EnUs => format!(
            "Based on the directory search query: \"{}\", suggest 3 types of businesses or \
             locations a user might be interested in. Return a short friendly paragraph in English.",
            query
        ),
    }
}

/// Prompt asking for a two-sentence marketing description of a new listing.
pub fn description_prompt(title: &str, listing_type: ListingType, language: Language) -> String {
    let kind = listing_type.label(language);
    match language {
        Language::PtBr => format!(
            "Gere uma descrição de marketing profissional de 2 frases para um {} chamado \"{}\" \
             em Português do Brasil.",
            kind, title
        ),
        Language::EnUs => format!(
            "Generate a professional 2-sentence marketing description for a {} called \"{}\" \
             in English.",
            kind, title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_prompt_per_language() {
        let pt = suggestion_prompt("pizza", Language::PtBr);
        assert!(pt.starts_with("Com base na busca: \"pizza\""));
        assert!(pt.contains("Português do Brasil"));

        let en = suggestion_prompt("pizza", Language::EnUs);
        assert!(en.starts_with("Based on the directory search query: \"pizza\""));
        assert!(en.ends_with("in English."));
    }

    #[test]
    fn test_description_prompt_uses_localized_type() {
        let pt = description_prompt("Blue Ocean Bistro", ListingType::Restaurant, Language::PtBr);
        assert!(pt.contains("para um Restaurante chamado \"Blue Ocean Bistro\""));

        let en = description_prompt("Blue Ocean Bistro", ListingType::Restaurant, Language::EnUs);
        assert_eq!(
            en,
            "Generate a professional 2-sentence marketing description for a Restaurant \
             called \"Blue Ocean Bistro\" in English."
        );
    }
}
