// crates/aemet-core/src/text.rs

//! Text folding used as the comparison key everywhere in the crate.

use unicode_normalization::UnicodeNormalization;

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Trim leading/trailing whitespace
/// 2\) Compatibility decomposition (NFKD), splitting base letters from
///     their combining accents
/// 3\) Drop every non-ASCII code point (the accents and anything that has
///     no ASCII base)
/// 4\) Lowercase
///
/// The result is idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use aemet_core::text::normalize;
///
/// assert_eq!(normalize("  Cádiz "), "cadiz");
/// assert_eq!(normalize("A Coruña"), "a coruna");
/// assert_eq!(normalize("ÁVILA"), "avila");
/// ```
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .trim()
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    // A stripped mark next to a space can expose new outer whitespace.
    folded.trim().to_owned()
}

/// Compares two strings for equality after folding with [`normalize`].
///
/// ```
/// use aemet_core::text::equals_folded;
///
/// assert!(equals_folded("Málaga", "malaga"));
/// assert!(!equals_folded("Málaga", "Malagón"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Split a free-text term list on whitespace and commas, folding each term.
///
/// Terms that fold to nothing are dropped.
pub fn split_terms(terms: &str) -> Vec<String> {
    terms
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(normalize)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spanish_diacritics() {
        assert_eq!(normalize("Logroño"), "logrono");
        assert_eq!(normalize("Castellón/Castelló"), "castellon/castello");
        assert_eq!(normalize("Ourense "), "ourense");
        assert_eq!(normalize("Güímar"), "guimar");
    }

    #[test]
    fn drops_characters_without_ascii_base() {
        assert_eq!(normalize("Ελλάδα"), "");
        assert_eq!(normalize("Sant Adrià de Besòs"), "sant adria de besos");
    }

    #[test]
    fn normalization_is_idempotent() {
        for s in ["", "  ", "Cádiz", "  L'Hospitalet ", "ÑANDÚ", "\u{301} a", "ﬁ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn empty_input_folds_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n"), "");
    }

    #[test]
    fn split_terms_handles_commas_and_spaces() {
        assert_eq!(split_terms("madrid, valencia"), vec!["madrid", "valencia"]);
        assert_eq!(split_terms("  Cádiz,,Huelva  Sevilla "), vec!["cadiz", "huelva", "sevilla"]);
        assert!(split_terms(" , ").is_empty());
    }
}
