// crates/aemet-core/src/matcher.rs

//! Substring-or-similar matching over gazetteer tables.

use crate::similarity::is_similar;
use crate::text::normalize;

/// `true` if the normalized `query` is contained in the normalized `field`
/// or is similar enough to it.
///
/// Both arguments must already be folded with [`normalize`].
#[inline]
pub fn field_matches(query: &str, field: &str) -> bool {
    field.contains(query) || is_similar(query, field)
}

/// Every record for which any selected field matches `query`.
///
/// `query` must already be normalized; `fields` returns the raw field values
/// of a record, which are normalized here. Results keep table order and are
/// neither ranked nor deduplicated.
///
/// An empty `query` is a substring of everything and therefore matches the
/// whole table. Callers reject blank input before getting here.
///
/// ```
/// use aemet_core::matcher::match_records;
///
/// let towns = ["Sevilla", "Soria", "Teruel"];
/// let hits = match_records("sevila", &towns, |t| vec![*t]);
/// assert_eq!(hits, vec![&"Sevilla"]);
/// ```
pub fn match_records<'a, T, F>(query: &str, records: &'a [T], fields: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> Vec<&'a str>,
{
    records
        .iter()
        .filter(|r| {
            fields(*r)
                .into_iter()
                .any(|f| field_matches(query, &normalize(f)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_or_similarity() {
        assert!(field_matches("coru", "a coruna"));
        assert!(field_matches("a corunya", "a coruna"));
        assert!(!field_matches("lugo", "a coruna"));
    }

    #[test]
    fn any_field_may_match() {
        let rows = [("Getafe", "Madrid"), ("Vigo", "Pontevedra"), ("Alcalá", "Madrid")];
        let hits = match_records("madrid", &rows, |r| vec![r.0, r.1]);
        assert_eq!(hits, vec![&rows[0], &rows[2]]);
    }

    #[test]
    fn no_hits_is_empty_not_error() {
        let rows = ["Getafe", "Vigo"];
        assert!(match_records("zzzz", &rows, |r| vec![*r]).is_empty());
        let none: [&str; 0] = [];
        assert!(match_records("vigo", &none, |r| vec![*r]).is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let rows = ["Getafe", "Vigo"];
        assert_eq!(match_records("", &rows, |r| vec![*r]).len(), 2);
    }
}
