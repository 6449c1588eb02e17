//! Responsive image candidate lists
//!
//! A `srcset` attribute looks like `"a.jpg 1280w, b.jpg 1920w"`. Only width
//! descriptors are understood; density descriptors (`2x`) and malformed
//! entries are dropped.

/// Parses every well-formed `url width` candidate, in attribute order
pub fn candidates(srcset: &str) -> Vec<(String, u32)> {
    srcset
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(parse_candidate)
        .collect()
}

/// Picks the candidate with the largest width
///
/// On equal widths the earlier candidate wins.
///
/// # Example
///
/// ```
/// use spotlight_harvest::parser::srcset::best_candidate;
///
/// let best = best_candidate("a.jpg 1280w, b.jpg 1920w, c.jpg 640w");
/// assert_eq!(best, Some(("b.jpg".to_string(), 1920)));
/// ```
pub fn best_candidate(srcset: &str) -> Option<(String, u32)> {
    candidates(srcset)
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
}

/// Splits an entry on its last whitespace run into url and width descriptor
fn parse_candidate(entry: &str) -> Option<(String, u32)> {
    let (url, descriptor) = entry.rsplit_once(char::is_whitespace)?;
    let url = url.trim_end();
    if url.is_empty() {
        return None;
    }

    match descriptor.trim_end_matches('w').parse::<u32>() {
        Ok(width) => Some((url.to_string(), width)),
        Err(_) => {
            tracing::trace!("Dropping srcset entry with bad width: {}", entry);
            None
        }
    }
}
