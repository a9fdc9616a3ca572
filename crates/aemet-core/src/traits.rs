// crates/aemet-core/src/traits.rs
use crate::model::{Beach, Municipality, Province, StationRecord};
use crate::text::normalize;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive
/// comparisons based on [`normalize`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::name_key`]: the folded name
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use aemet_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Logroño").is_named("logrono"));
/// assert!(Place("Sanlúcar de Barrameda").name_contains("sanluc"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// The name folded with [`normalize`].
    #[inline]
    fn name_key(&self) -> String {
        normalize(self.name_str())
    }

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_key() == normalize(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    ///
    /// Returns `true` if the folded canonical name contains the folded `q`.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_key().contains(&normalize(q))
    }
}

impl NameMatch for Municipality {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Province {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Beach {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for StationRecord {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}
