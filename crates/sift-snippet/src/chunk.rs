//! Context windows around match groups.
//!
//! Each group is shown with some surrounding text. The amount shrinks as the
//! number of groups grows, from `max` for a single group towards `min`:
//!
//! ```text
//! context(n) = min + (max - min) / n
//! ```
//!
//! Windows never cut a word in half: an edge that falls inside a word is pushed
//! outwards to the word boundary. Groups whose windows end up within
//! `merge_interval` characters of each other are merged. Merging lowers the
//! group count, which raises the context, which can bring more windows close
//! enough to merge, so sizing and merging repeat until the context stops
//! changing.

use sift_config::ContextSettings;
use tracing::{debug, warn};
use unicode_normalization::char::is_combining_mark;

use crate::group::MatchGroup;

/// Upper bound on sizing/merging passes.
///
/// Every pass that does not stop the loop merges at least one pair of groups,
/// so the bound is only reached with more than this many groups.
pub const MAX_MERGE_PASSES: usize = 32;

/// A window of text, in character coordinates. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// First character of the window.
    pub start: usize,
    /// One past the last character of the window.
    pub end: usize,
}

/// Characters of context shown around each group when there are `group_count`
/// groups.
pub fn context_length(group_count: usize, settings: &ContextSettings) -> usize {
    let spread = settings.max.saturating_sub(settings.min);
    settings.min + spread / group_count.max(1)
}

/// Returns true if the character at `index` is part of a word or number.
/// Combining marks belong to the word of their base letter.
///
/// Indices outside the text are boundaries.
fn is_word_at(text: &[char], index: usize) -> bool {
    text.get(index)
        .is_some_and(|&c| c.is_alphanumeric() || c == '_' || is_combining_mark(c))
}

/// Moves `start` back to the beginning of the word it falls in.
fn word_start(text: &[char], mut start: usize) -> usize {
    if is_word_at(text, start) {
        while start > 0 && is_word_at(text, start - 1) {
            start -= 1;
        }
    }
    start
}

/// Moves the exclusive `end` forward to the end of the word it falls in.
fn word_end(text: &[char], mut end: usize) -> usize {
    if end > 0 && is_word_at(text, end - 1) {
        while is_word_at(text, end) {
            end += 1;
        }
    }
    end
}

/// Window around `group` with `context` characters on each side, widened to
/// word boundaries.
pub fn chunk_with_context(group: &MatchGroup, text: &[char], context: usize) -> Chunk {
    let start = group.start().saturating_sub(context);
    let end = group.end().saturating_add(context).min(text.len());
    Chunk {
        start: word_start(text, start),
        end: word_end(text, end),
    }
}

/// Window around `group` when there are `group_count` groups.
pub fn chunk_for(
    group: &MatchGroup,
    text: &[char],
    group_count: usize,
    settings: &ContextSettings,
) -> Chunk {
    chunk_with_context(group, text, context_length(group_count, settings))
}

/// One pass over ordered groups, merging each group into the previous one when
/// its window starts within `merge_interval` of the previous window's end.
fn merge_close_groups(
    groups: Vec<MatchGroup>,
    text: &[char],
    context: usize,
    merge_interval: usize,
) -> Vec<MatchGroup> {
    let mut merged: Vec<(Chunk, MatchGroup)> = Vec::with_capacity(groups.len());
    for group in groups {
        let chunk = chunk_with_context(&group, text, context);
        match merged.last_mut() {
            Some((previous, last)) if chunk.start <= previous.end + merge_interval => {
                previous.end = previous.end.max(chunk.end);
                last.absorb(group);
            }
            _ => merged.push((chunk, group)),
        }
    }
    merged.into_iter().map(|(_, group)| group).collect()
}

/// Sizes windows for `groups` and merges groups whose windows are close.
///
/// Returns the final groups paired with their windows, in text order. The
/// windows do not overlap.
pub fn chunk_groups(
    groups: Vec<MatchGroup>,
    text: &[char],
    settings: &ContextSettings,
) -> Vec<(Chunk, MatchGroup)> {
    if groups.is_empty() {
        return Vec::new();
    }

    let initial = groups.len();
    let mut groups = groups;
    let mut context = context_length(groups.len(), settings);
    let mut passes = 1;

    loop {
        groups = merge_close_groups(groups, text, context, settings.merge_interval);
        let next = context_length(groups.len(), settings);
        if next == context {
            break;
        }
        if passes == MAX_MERGE_PASSES {
            // Keep the context the current groups were merged under, so their
            // windows stay apart.
            warn!(
                passes,
                groups = groups.len(),
                "snippet merging did not settle, keeping last pass"
            );
            break;
        }
        context = next;
        passes += 1;
    }

    debug!(
        initial,
        groups = groups.len(),
        context,
        passes,
        "sized snippet windows"
    );

    groups
        .into_iter()
        .map(|group| (chunk_with_context(&group, text, context), group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find::Match, group::merge};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn context(min: usize, max: usize, merge_interval: usize) -> ContextSettings {
        ContextSettings {
            min,
            max,
            merge_interval,
        }
    }

    fn group(position: usize, length: usize) -> MatchGroup {
        MatchGroup::new(Match::new(position, length))
    }

    #[test]
    fn context_for_one_group_is_max() {
        let settings = context(10, 100, 0);
        assert_eq!(context_length(1, &settings), 100);
        assert_eq!(context_length(0, &settings), 100);
    }

    #[test]
    fn context_decreases_towards_min() {
        let settings = context(10, 100, 0);
        let lengths: Vec<usize> = (1..=5).map(|n| context_length(n, &settings)).collect();
        assert_eq!(lengths, vec![100, 55, 40, 32, 28]);
        assert!(lengths.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(context_length(1_000, &settings), 10);
    }

    #[test]
    fn context_with_equal_bounds_is_constant() {
        let settings = context(15, 15, 0);
        assert_eq!(context_length(1, &settings), 15);
        assert_eq!(context_length(7, &settings), 15);
    }

    #[test]
    fn window_never_splits_a_word() {
        let text = chars("say international now");
        // "nation" inside "international" (positions 9..15).
        let chunk = chunk_with_context(&group(9, 6), &text, 2);
        assert_eq!((chunk.start, chunk.end), (4, 17));
        let window: String = text[chunk.start..chunk.end].iter().collect();
        assert_eq!(window, "international");
    }

    #[test]
    fn window_edges_on_spaces_stay_put() {
        let text = chars("aa bb cc dd ee");
        // "cc" at 6..8, context 1 lands on the spaces around it.
        let chunk = chunk_with_context(&group(6, 2), &text, 1);
        assert_eq!((chunk.start, chunk.end), (5, 9));
    }

    #[test]
    fn window_is_clamped_to_text() {
        let text = chars("short text");
        let chunk = chunk_with_context(&group(0, 5), &text, 100);
        assert_eq!((chunk.start, chunk.end), (0, 10));
    }

    #[test]
    fn numbers_are_words() {
        let text = chars("code 1234567 end");
        let chunk = chunk_with_context(&group(8, 1), &text, 1);
        assert_eq!((chunk.start, chunk.end), (5, 12));
    }

    #[test]
    fn window_keeps_combining_marks_with_their_letter() {
        let text = chars("ab\u{301}c x");
        let chunk = chunk_with_context(&group(0, 1), &text, 1);
        assert_eq!((chunk.start, chunk.end), (0, 4));
    }

    #[test]
    fn chunk_for_uses_group_count() {
        let text = chars(&"x ".repeat(100));
        let settings = context(2, 10, 0);
        let g = group(100, 1);
        assert_eq!(chunk_for(&g, &text, 1, &settings), Chunk { start: 90, end: 111 });
        assert_eq!(chunk_for(&g, &text, 8, &settings), Chunk { start: 97, end: 104 });
    }

    #[test]
    fn far_apart_groups_stay_separate() {
        let text = chars(&format!("{}{}", "a ".repeat(200), "b ".repeat(200)));
        let groups = vec![group(10, 1), group(390, 1)];
        let chunks = chunk_groups(groups, &text, &context(5, 20, 2));
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].0.end < chunks[1].0.start);
    }

    #[test]
    fn close_groups_merge() {
        let text = chars(&". ".repeat(100));
        let groups = vec![group(20, 1), group(40, 1), group(150, 1)];
        // Three groups: context = 5 + 30 / 3 = 15. Windows 5..36 and 25..56
        // overlap; merged, two groups give context 20 and 150 stays apart.
        let chunks = chunk_groups(groups, &text, &context(5, 35, 0));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].1.matches().len(), 2);
        assert_eq!(chunks[0].0, Chunk { start: 0, end: 61 });
        assert_eq!(chunks[1].0, Chunk { start: 130, end: 171 });
    }

    #[test]
    fn merging_cascades_as_context_grows() {
        let text = chars(&". ".repeat(100));
        // Gaps of 30: with three groups context is 10 (windows 10 apart, not
        // merged with interval 5); the loop must not merge anything here.
        let separate = chunk_groups(
            vec![group(20, 1), group(51, 1), group(82, 1)],
            &text,
            &context(1, 28, 5),
        );
        assert_eq!(separate.len(), 3);

        // Gaps of 20: context 10 makes the first two windows touch. Two groups
        // then give context 14, which pulls in the third.
        let merged = chunk_groups(
            vec![group(20, 1), group(41, 1), group(70, 1)],
            &text,
            &context(1, 28, 0),
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].1.matches().len(), 3);
    }

    #[test]
    fn many_dense_matches_terminate() {
        let text = chars(&"a.".repeat(2_000));
        let matches = (0..4_000).step_by(3).map(|p| (p, 1)).collect();
        let groups = merge(&matches);
        let chunks = chunk_groups(groups, &text, &context(1, 3, 1));
        assert!(!chunks.is_empty());
        assert!(chunks.windows(2).all(|pair| pair[0].0.end <= pair[1].0.start));
    }

    #[test]
    fn no_groups() {
        assert!(chunk_groups(Vec::new(), &chars("text"), &context(1, 2, 0)).is_empty());
    }
}
