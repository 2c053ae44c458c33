//! Snippet rendering.
//!
//! Plain text is rendered whole with every match wrapped in the match markup.
//! Markup-bearing text is rendered as windows around match groups, each window
//! wrapped in the snippet markup and joined by the separator. The separator also
//! marks cut text at either end.
//!
//! Windows come from markup-bearing text whose entities were decoded for
//! matching, so their text is HTML-escaped again on output. Plain text is
//! written as it is.

use sift_config::Markup;

use crate::{chunk::Chunk, find::Match, group::MatchGroup};

/// Appends `text`, replacing `<`, `>`, `&` and `"` with entities when `escape`
/// is set.
fn push_text(out: &mut String, text: &[char], escape: bool) {
    if !escape {
        out.extend(text);
        return;
    }
    for &c in text {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Appends `text[from..to]` with each match in `matches` wrapped in match markup.
///
/// Matches must be ordered by position and lie within `from..to`. A match that
/// starts inside an already rendered match is clipped to the rendered end, and
/// skipped if nothing is left. Markup strings are never escaped.
fn push_highlighted(
    out: &mut String,
    text: &[char],
    (from, to): (usize, usize),
    matches: &[Match],
    markup: &Markup,
    escape: bool,
) {
    let mut cursor = from;
    for m in matches {
        let start = m.position.max(cursor);
        let end = m.end().min(to);
        if end <= start {
            continue;
        }
        push_text(out, &text[cursor..start], escape);
        out.push_str(&markup.match_before);
        push_text(out, &text[start..end], escape);
        out.push_str(&markup.match_after);
        cursor = end;
    }
    push_text(out, &text[cursor..to], escape);
}

/// Renders the whole text with every match highlighted.
///
/// Returns `None` if there are no matches.
pub fn render_plain(text: &[char], matches: &[Match], markup: &Markup) -> Option<String> {
    if matches.is_empty() {
        return None;
    }
    let mut out = String::with_capacity(text.len() + matches.len() * 16);
    push_highlighted(&mut out, text, (0, text.len()), matches, markup, false);
    Some(out)
}

/// Renders only the windows around each group, HTML-escaping the text.
///
/// Returns `None` if there are no windows.
pub fn render_chunks(
    text: &[char],
    chunks: &[(Chunk, MatchGroup)],
    markup: &Markup,
) -> Option<String> {
    let (first, _) = chunks.first()?;
    let (last, _) = chunks.last()?;

    let mut out = String::new();
    if first.start > 0 {
        out.push_str(&markup.snippet_between);
    }
    for (index, (chunk, group)) in chunks.iter().enumerate() {
        if index > 0 {
            out.push_str(&markup.snippet_between);
        }
        out.push_str(&markup.snippet_before);
        push_highlighted(
            &mut out,
            text,
            (chunk.start, chunk.end),
            group.matches(),
            markup,
            true,
        );
        out.push_str(&markup.snippet_after);
    }
    if last.end < text.len() {
        out.push_str(&markup.snippet_between);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn markup() -> Markup {
        Markup {
            match_before: "[".into(),
            match_after: "]".into(),
            snippet_before: "<".into(),
            snippet_after: ">".into(),
            snippet_between: "...".into(),
        }
    }

    fn group(matches: &[(usize, usize)]) -> MatchGroup {
        let mut iter = matches.iter().map(|&m| Match::from(m));
        let mut group = MatchGroup::new(iter.next().unwrap());
        for m in iter {
            group.absorb(MatchGroup::new(m));
        }
        group
    }

    #[test]
    fn plain_wraps_every_match() {
        let text = chars("hello world, hello");
        let matches = [Match::new(0, 5), Match::new(13, 5)];
        assert_eq!(
            render_plain(&text, &matches, &markup()).as_deref(),
            Some("[hello] world, [hello]")
        );
    }

    #[test]
    fn plain_without_matches_is_none() {
        assert_eq!(render_plain(&chars("hello world"), &[], &markup()), None);
    }

    #[test]
    fn touching_matches_are_wrapped_separately() {
        let text = chars("foobar");
        let matches = [Match::new(0, 3), Match::new(3, 3)];
        assert_eq!(
            render_plain(&text, &matches, &markup()).as_deref(),
            Some("[foo][bar]")
        );
    }

    #[test]
    fn overlapping_matches_do_not_repeat_text() {
        let text = chars("abcdef");
        let matches = [Match::new(0, 3), Match::new(2, 2), Match::new(1, 1)];
        assert_eq!(
            render_plain(&text, &matches, &markup()).as_deref(),
            Some("[abc][d]ef")
        );
    }

    #[test]
    fn plain_keeps_multibyte_text() {
        let text = chars("crème brûlée");
        let matches = [Match::new(6, 6)];
        assert_eq!(
            render_plain(&text, &matches, &markup()).as_deref(),
            Some("crème [brûlée]")
        );
    }

    #[test]
    fn chunks_in_middle_get_separators_on_both_ends() {
        let text = chars("aaa bbb ccc ddd eee");
        let chunks = [(Chunk { start: 4, end: 11 }, group(&[(8, 3)]))];
        assert_eq!(
            render_chunks(&text, &chunks, &markup()).as_deref(),
            Some("...<bbb [ccc]>...")
        );
    }

    #[test]
    fn separators_omitted_at_text_edges() {
        let text = chars("aaa bbb ccc");
        let chunks = [(Chunk { start: 0, end: 11 }, group(&[(0, 3), (8, 3)]))];
        assert_eq!(
            render_chunks(&text, &chunks, &markup()).as_deref(),
            Some("<[aaa] bbb [ccc]>")
        );
    }

    #[test]
    fn multiple_chunks_are_joined() {
        let text = chars("aaa bbb ccc ddd eee fff");
        let chunks = [
            (Chunk { start: 0, end: 3 }, group(&[(0, 3)])),
            (Chunk { start: 12, end: 19 }, group(&[(12, 3)])),
        ];
        assert_eq!(
            render_chunks(&text, &chunks, &markup()).as_deref(),
            Some("<[aaa]>...<[ddd] eee>...")
        );
    }

    #[test]
    fn chunk_text_is_escaped() {
        let text = chars("a <img src=x> & \"b\" c");
        let chunks = [(Chunk { start: 0, end: 21 }, group(&[(16, 3)]))];
        assert_eq!(
            render_chunks(&text, &chunks, &markup()).as_deref(),
            Some("<a &lt;img src=x&gt; &amp; [&quot;b&quot;] c>")
        );
    }

    #[test]
    fn plain_text_is_not_escaped() {
        let text = chars("a<b");
        assert_eq!(
            render_plain(&text, &[Match::new(2, 1)], &markup()).as_deref(),
            Some("a<[b]")
        );
    }

    #[test]
    fn no_chunks_is_none() {
        assert_eq!(render_chunks(&chars("text"), &[], &markup()), None);
    }
}
