//! Edit-distance similarity helpers.
//!
//! Scores are normalized Levenshtein similarities in `[0.0, 1.0]`
//! (`1.0` = identical). Ties are broken lexicographically so the result
//! never depends on the order candidates were advertised in.

/// Similarity cutoff used when matching capability names against tool names.
pub const TOOL_NAME_CUTOFF: f64 = 0.6;

/// Similarity cutoff used when matching an application hint against names.
pub const APPLICATION_NAME_CUTOFF: f64 = 0.4;

/// Similarity between two strings (case-sensitive).
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Return the candidate most similar to `target`, if it scores above `cutoff`.
pub fn closest_match<'a, I>(target: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        let score = similarity(target, candidate);
        if score <= cutoff {
            continue;
        }
        best = match best {
            Some((current, current_score))
                if current_score > score || (current_score == score && current <= candidate) =>
            {
                Some((current, current_score))
            }
            _ => Some((candidate, score)),
        };
    }

    best.map(|(name, _)| name)
}
