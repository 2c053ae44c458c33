//! Merging touching and overlapping matches into groups.

use crate::find::{Match, MatchMap};

/// Matches that touch or overlap, ordered by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    /// Matches in ascending position order. Never empty.
    matches: Vec<Match>,
    /// Furthest end of any match in the group.
    end: usize,
}

impl MatchGroup {
    /// Creates a group holding a single match.
    pub fn new(first: Match) -> Self {
        Self {
            end: first.end(),
            matches: vec![first],
        }
    }

    /// Position of the first match.
    pub fn start(&self) -> usize {
        self.matches[0].position
    }

    /// Furthest end of any match in the group.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matches in this group.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Returns true if `m` starts at or before the group's end.
    pub fn touches(&self, m: &Match) -> bool {
        m.position <= self.end
    }

    /// Adds a match that starts at or after every match already in the group.
    fn push(&mut self, m: Match) {
        self.end = self.end.max(m.end());
        self.matches.push(m);
    }

    /// Appends all matches of a group that follows this one.
    pub fn absorb(&mut self, other: Self) {
        self.end = self.end.max(other.end);
        self.matches.extend(other.matches);
    }
}

/// Groups matches by ascending position.
///
/// A match joins the current group when it starts at or before the group's
/// end; otherwise it starts a new group. The groups are disjoint and ordered.
pub fn merge(matches: &MatchMap) -> Vec<MatchGroup> {
    let mut groups: Vec<MatchGroup> = Vec::new();
    for m in matches.iter().map(|(&position, &length)| Match::new(position, length)) {
        match groups.last_mut() {
            Some(group) if group.touches(&m) => group.push(m),
            _ => groups.push(MatchGroup::new(m)),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(usize, usize)]) -> MatchMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn overlapping_and_separate_matches() {
        let groups = merge(&map(&[(0, 3), (2, 2), (10, 4)]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].matches(), &[Match::new(0, 3), Match::new(2, 2)]);
        assert_eq!((groups[0].start(), groups[0].end()), (0, 4));
        assert_eq!(groups[1].matches(), &[Match::new(10, 4)]);
        assert_eq!((groups[1].start(), groups[1].end()), (10, 14));
    }

    #[test]
    fn touching_matches_merge() {
        let groups = merge(&map(&[(0, 3), (3, 2)]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].end(), 5);
    }

    #[test]
    fn group_end_is_furthest_end() {
        // (1, 1) ends before (0, 5) does; (4, 3) still touches the group.
        let groups = merge(&map(&[(0, 5), (1, 1), (4, 3)]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].end(), 7);
    }

    #[test]
    fn gap_of_one_separates() {
        assert_eq!(merge(&map(&[(0, 3), (4, 1)])).len(), 2);
    }

    #[test]
    fn empty_matches() {
        assert!(merge(&MatchMap::new()).is_empty());
    }

    #[test]
    fn absorb_keeps_order() {
        let mut first = MatchGroup::new(Match::new(0, 2));
        first.absorb(MatchGroup::new(Match::new(8, 3)));
        assert_eq!(first.matches(), &[Match::new(0, 2), Match::new(8, 3)]);
        assert_eq!(first.end(), 11);
    }
}
