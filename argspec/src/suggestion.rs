/// Provides a suggestion for a mistyped alias.
///
/// # Implementing SuggestionProvider:
/// Return the closest entry of `source` to `value`, or `None` if nothing is close enough.
pub trait SuggestionProvider {
    /// Returns the suggested value for the given `value`, or `None` if not suggestion is found.
    fn suggestion_for(&self, value: &str, source: &[&str]) -> Option<String>;
}

/// A default implementation of `SuggestionProvider` that returns a single suggestion
/// using the `Levenshtein distance` algorithm.
///
/// A candidate is only suggested when at most `max(2, len / 3)` edits away.
///
/// # Example
/// ```rust
/// use argspec::suggestion::{SingleSuggestionProvider, SuggestionProvider};
///
/// let source = ["--files", "--mode", "--size"];
/// let provider = SingleSuggestionProvider;
///
/// assert_eq!(provider.suggestion_for("--fils", &source), Some("--files".to_owned()));
/// assert_eq!(provider.suggestion_for("--colour", &source), None);
/// ```
///
/// # See
/// https://en.wikipedia.org/wiki/Levenshtein_distance
#[derive(Debug, Default, Copy, Clone)]
pub struct SingleSuggestionProvider;
impl SuggestionProvider for SingleSuggestionProvider {
    fn suggestion_for(&self, value: &str, source: &[&str]) -> Option<String> {
        let max_cost = std::cmp::max(2, value.chars().count() / 3);

        source
            .iter()
            .map(|s| (s, levenshtein_distance_ignore_case(value, s)))
            .filter(|(_, cost)| *cost <= max_cost)
            .min_by_key(|(_, cost)| *cost)
            .map(|(s, _)| s.to_string())
    }
}

/// Compute the `Levenshtein distance` between 2 `str` ignoring ASCII case.
///
/// # See
/// https://en.wikipedia.org/wiki/Levenshtein_distance
#[doc(hidden)]
pub fn levenshtein_distance_ignore_case(a: &str, b: &str) -> usize {
    let a = a.chars().map(|c| c.to_ascii_lowercase()).collect::<Vec<char>>();
    let b = b.chars().map(|c| c.to_ascii_lowercase()).collect::<Vec<char>>();

    if a.is_empty() {
        return b.len();
    }

    if b.is_empty() {
        return a.len();
    }

    // Distances of the previous row, starting with the empty prefix of `a`
    let mut previous = (0..=b.len()).collect::<Vec<usize>>();
    let mut current = vec![0; b.len() + 1];

    for (i, char_a) in a.iter().enumerate() {
        current[0] = i + 1;

        for (j, char_b) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(char_a != char_b);
            let insertion = current[j] + 1;
            let deletion = previous[j + 1] + 1;
            current[j + 1] = substitution.min(insertion).min(deletion);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_distance_test() {
        assert_eq!(levenshtein_distance_ignore_case("pop", "pop"), 0);
        assert_eq!(levenshtein_distance_ignore_case("casa", "calle"), 3);
        assert_eq!(levenshtein_distance_ignore_case("shot", "spot"), 1);
        assert_eq!(levenshtein_distance_ignore_case("dad", "mom"), 3);
        assert_eq!(levenshtein_distance_ignore_case("blueberry", "berry"), 4);
        assert_eq!(levenshtein_distance_ignore_case("MODE", "mode"), 0);
        assert_eq!(levenshtein_distance_ignore_case("", "abc"), 3);
    }

    #[test]
    fn single_suggestion_test() {
        let source = ["-v", "--verbose", "--required-files", "--files"];
        let provider = SingleSuggestionProvider;

        assert_eq!(
            provider.suggestion_for("--verbos", &source),
            Some("--verbose".to_owned())
        );
        assert_eq!(
            provider.suggestion_for("--required-file", &source),
            Some("--required-files".to_owned())
        );
        assert_eq!(provider.suggestion_for("--output", &source), None);
        assert_eq!(provider.suggestion_for("--x", &[]), None);
    }
}
