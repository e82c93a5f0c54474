//! Textual type-name heuristics.
//!
//! Rules never resolve symbols. "Is this a Bloc?" is answered by looking at
//! rendered type or expression text. Aliased imports or renamed types
//! produce false negatives; unrelated types sharing a suffix produce false
//! positives.

/// Splits rendered source text into identifier tokens.
///
/// ```
/// use cma_lint_core::utils::names::identifiers;
///
/// let ids: Vec<_> = identifiers("Future<Either<Failure, UserModel>>").collect();
/// assert_eq!(ids, ["Future", "Either", "Failure", "UserModel"]);
/// ```
pub fn identifiers(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|token| token.chars().next().is_some_and(|c| !c.is_ascii_digit()))
}

/// Returns true if any identifier in `text` is a type name ending in `suffix`.
///
/// A type name starts with an uppercase letter (after leading underscores
/// for private types). The bare suffix itself counts as a match.
#[must_use]
pub fn mentions_type_with_suffix(text: &str, suffix: &str) -> bool {
    !suffix.is_empty() && identifiers(text).any(|id| is_type_name(id) && id.ends_with(suffix))
}

/// Returns true if any identifier in `text` ends with one of `suffixes`.
#[must_use]
pub fn mentions_any_suffix(text: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| mentions_type_with_suffix(text, s))
}

/// Returns true if `name` starts with an uppercase letter, ignoring leading `_`.
#[must_use]
pub fn is_type_name(name: &str) -> bool {
    name.trim_start_matches('_')
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}
