//! Slug derivation and uniqueness resolution.
//!
//! Slugs become permanent public URL segments (article pages, tusker pages,
//! the sitemap), so derivation has to be deterministic and collision handling
//! explicit. Everything here is pure: callers supply the set of slugs already
//! taken in their domain, nothing in this module touches storage.

use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;
use std::fmt;

/// Hard cap on slug length, part of the public URL contract.
pub const MAX_SLUG_LEN: usize = 100;

/// Canonical slug for one entity. Always non-empty, lowercase ASCII
/// alphanumeric segments joined by single hyphens, at most 100 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid(&value) {
            return Err(DomainError::Validation("invalid slug format".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Collapse arbitrary text into a slug candidate.
///
/// Lowercases, trims, replaces every maximal run of whitespace or
/// non-alphanumeric characters with a single hyphen, truncates to
/// [`MAX_SLUG_LEN`] and strips boundary hyphens, including one the cut
/// itself may leave dangling. Truncation can still end mid-word; only the
/// hyphen is repaired so non-empty output always satisfies [`is_valid`].
/// Returns `""` when the input collapses to nothing, which callers must
/// treat as "no slug derivable".
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    // Output is all ASCII at this point, so byte truncation is safe.
    out.truncate(MAX_SLUG_LEN);
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// True iff `slug` is in canonical form: lowercase alphanumeric segments
/// joined by single hyphens, no empty segments, length within the cap.
pub fn is_valid(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    slug.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

/// Pick the first of `base`, `base-1`, `base-2`, ... absent from `existing`.
///
/// The suffix search is strictly increasing, so for any finite set this
/// terminates. `existing` is a snapshot: two concurrent writers can still
/// race between read and commit, which the storage layer's unique index
/// catches (callers re-resolve on that conflict).
pub fn make_unique(base: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(base) {
        return base.to_owned();
    }
    let mut counter = 1u64;
    loop {
        let candidate = format!("{base}-{counter}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Derive a collision-free slug from display text (title, name).
///
/// Fails with a validation error when the text normalizes to nothing;
/// an empty identifier must never be persisted.
pub fn derive_unique(source: &str, existing: &HashSet<String>) -> DomainResult<Slug> {
    let base = normalize(source);
    if base.is_empty() {
        return Err(DomainError::Validation(
            "cannot derive a slug from the given text".into(),
        ));
    }
    Slug::new(make_unique(&base, existing))
}

/// Admit an explicitly supplied slug.
///
/// Format violations are validation errors. An exact match against the
/// domain's slug set is a hard conflict: user-chosen slugs are never
/// silently suffixed, that treatment is reserved for derived ones.
pub fn claim_explicit(raw: &str, existing: &HashSet<String>) -> DomainResult<Slug> {
    if !is_valid(raw) {
        return Err(DomainError::Validation("invalid slug format".into()));
    }
    if existing.contains(raw) {
        return Err(DomainError::Conflict("slug already in use".into()));
    }
    Slug::new(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn normalize_collapses_punctuation_and_whitespace() {
        assert_eq!(normalize("  Sri Lankan Tusker!!  "), "sri-lankan-tusker");
        assert_eq!(normalize("Hello,   World"), "hello-world");
        assert_eq!(normalize("a_b"), "a-b");
    }

    #[test]
    fn normalize_empty_and_unproducible_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("###"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_is_deterministic() {
        let input = "Some -- Mixed // Input 42";
        assert_eq!(normalize(input), normalize(input));
    }

    #[test]
    fn normalize_truncates_to_cap() {
        let long = "a".repeat(250);
        assert_eq!(normalize(&long).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn truncation_never_leaves_a_trailing_hyphen() {
        // "word-" repeats land the 100-byte cut exactly on a hyphen.
        let input = "word ".repeat(30);
        let out = normalize(&input);
        assert_eq!(out.len(), 99);
        assert!(out.ends_with("word"));
        assert!(is_valid(&out));
    }

    #[test]
    fn normalize_output_is_always_valid_when_non_empty() {
        let long = "word ".repeat(30);
        for input in [
            "Asha!",
            "  9 to 5  ",
            "élan vital",
            "--x--",
            "Raja & Asha",
            long.as_str(),
        ] {
            let out = normalize(input);
            if !out.is_empty() {
                assert!(is_valid(&out), "normalize({input:?}) produced {out:?}");
            }
        }
    }

    #[test]
    fn make_unique_appends_smallest_free_suffix() {
        assert_eq!(make_unique("asha", &set(&[])), "asha");
        assert_eq!(make_unique("asha", &set(&["asha"])), "asha-1");
        assert_eq!(make_unique("asha", &set(&["asha", "asha-1"])), "asha-2");
        assert_eq!(make_unique("asha", &set(&["asha", "asha-2"])), "asha-1");
    }

    #[test]
    fn make_unique_leaves_free_slug_unchanged() {
        let existing = set(&["raja", "raja-1"]);
        assert_eq!(make_unique("asha", &existing), "asha");
    }

    #[test]
    fn is_valid_accepts_canonical_form() {
        assert!(is_valid("valid-slug-1"));
        assert!(is_valid("a"));
        assert!(is_valid("42"));
    }

    #[test]
    fn is_valid_rejects_malformed_slugs() {
        assert!(!is_valid("Invalid_Slug"));
        assert!(!is_valid("-leading"));
        assert!(!is_valid("trailing-"));
        assert!(!is_valid("double--hyphen"));
        assert!(!is_valid(""));
        assert!(!is_valid(&"a".repeat(101)));
    }

    #[test]
    fn derive_unique_fails_on_unproducible_text() {
        let err = derive_unique("!!!", &set(&[])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn derive_unique_resolves_collisions() {
        let slug = derive_unique("Asha", &set(&["asha"])).unwrap();
        assert_eq!(slug.as_str(), "asha-1");
    }

    #[test]
    fn claim_explicit_rejects_bad_format_before_collision_check() {
        let err = claim_explicit("Not A Slug", &set(&["not-a-slug"])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn claim_explicit_treats_duplicate_as_conflict() {
        let err = claim_explicit("asha", &set(&["asha"])).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn claim_explicit_admits_free_slug() {
        let slug = claim_explicit("asha", &set(&["raja"])).unwrap();
        assert_eq!(slug.as_str(), "asha");
    }
}
