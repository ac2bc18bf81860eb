//! Turns the header row and the count row of the form sheet into candidate tallies.
//!
//! Headers look like `Vote for your candidate [Alice] لائحة ٢٠٤٠`: the bracketed part is the
//! candidate, the list is recognised by substring. Count cells are whatever the sheet
//! formula produced and are parsed leniently.

use std::sync::LazyLock;

use regex::Regex;

use super::{candidate_list::classify_list, candidate_vote::CandidateVote};

static CANDIDATE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("candidate name pattern should compile"));

/// Text inside the first pair of brackets, or the whole header when there is none.
pub fn candidate_name(header: &str) -> &str {
    match CANDIDATE_NAME.captures(header).and_then(|captures| captures.get(1)) {
        Some(name) => name.as_str().trim(),
        None => header,
    }
}

/// Leading integer of the cell, `0` for blank, non-numeric, negative or oversized cells.
pub fn parse_vote_count(raw: &str) -> u64 {
    let trimmed = raw.trim();
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    leading_integer(trimmed).unwrap_or(0)
}

fn leading_integer(text: &str) -> Option<u64> {
    if text.starts_with('-') {
        return None;
    }
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse::<u64>().ok()
}

/// Pairs each header with the count in the same column.
///
/// Columns past the end of `counts` are dropped rather than counted as zero, and headers
/// that yield an empty candidate name are skipped.
pub fn extract_candidate_votes<H, C>(headers: &[H], counts: &[C]) -> Vec<CandidateVote>
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    headers
        .iter()
        .zip(counts)
        .filter_map(|(header, count)| {
            let header: &str = header.as_ref();
            let header = header.trim();
            let name = candidate_name(header);
            if name.is_empty() {
                return None;
            }

            Some(CandidateVote {
                name: name.to_string(),
                votes: parse_vote_count(count.as_ref()),
                list: classify_list(header).to_string(),
            })
        })
        .collect()
}
