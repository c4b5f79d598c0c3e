/// Filtering of the candidate list against the current query text.
///
/// Returns, in original relative order, every candidate containing `query`
/// as a case-insensitive substring. An empty query returns the full list
/// unchanged. The result is always recomputed from scratch; callers never
/// mutate it in place.
pub fn filter_candidates(candidates: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return candidates.to_vec();
    }

    let query_lower = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}
