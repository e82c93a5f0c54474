//! Path normalization and pattern matching.
//!
//! All layer predicates operate on a normalized form: lowercase,
//! forward slashes, and a guaranteed leading `/` so that fragment checks
//! like `contains("/domain/")` also hit paths that start with `domain/`.

use glob::{MatchOptions, Pattern};
use std::path::Path;

/// Normalizes a path for fragment matching.
///
/// # Example
///
/// ```
/// use cma_lint_core::utils::paths::normalize;
/// use std::path::Path;
///
/// assert_eq!(
///     normalize(Path::new(r"Lib\Features\Auth\Domain\user.dart")),
///     "/lib/features/auth/domain/user.dart"
/// );
/// ```
#[must_use]
pub fn normalize(path: &Path) -> String {
    normalize_str(&path.to_string_lossy())
}

/// [`normalize`] for string input.
#[must_use]
pub fn normalize_str(path: &str) -> String {
    let lowered = path.replace('\\', "/").to_lowercase();
    if lowered.starts_with('/') {
        lowered
    } else {
        format!("/{lowered}")
    }
}

/// Checks whether a normalized path contains a directory fragment.
///
/// The fragment is matched on segment boundaries: `domain/entities`
/// matches `/lib/domain/entities/user.dart` but not `/lib/subdomain/entitiesx/`.
#[must_use]
pub fn contains_fragment(normalized: &str, fragment: &str) -> bool {
    let trimmed = fragment.trim_matches('/');
    if trimmed.is_empty() {
        return false;
    }
    normalized.contains(&format!("/{trimmed}/"))
}

/// Matches a normalized path against a configured pattern.
///
/// Patterns containing glob metacharacters (`*`, `?`, `[`) are matched
/// with [`glob::Pattern`], case-insensitively; anything else is treated as
/// a directory fragment (see [`contains_fragment`]). An invalid glob never
/// matches.
#[must_use]
pub fn matches_pattern(normalized: &str, pattern: &str) -> bool {
    let pattern = normalize_pattern(pattern);
    if is_glob(&pattern) {
        let options = MatchOptions {
            case_sensitive: false,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };
        let relative = normalized.trim_start_matches('/');
        let pattern = pattern.trim_start_matches('/');
        let candidates = [pattern.to_string(), format!("**/{pattern}")];
        return candidates
            .iter()
            .any(|p| Pattern::new(p).is_ok_and(|glob| glob.matches_with(relative, options)));
    }
    contains_fragment(normalized, &pattern)
}

fn normalize_pattern(pattern: &str) -> String {
    pattern.trim().replace('\\', "/").to_lowercase()
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Returns the file name component of a normalized path.
#[must_use]
pub fn file_name(normalized: &str) -> &str {
    normalized.rsplit('/').next().unwrap_or(normalized)
}
