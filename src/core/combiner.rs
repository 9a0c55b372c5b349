/// One line from every source, all taken from the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
    lines: Vec<String>,
}

impl RowGroup {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Walks all sources in lockstep and yields one [`RowGroup`] per step.
///
/// The first source to run dry ends the whole iteration: shorter inputs
/// truncate the combination instead of being padded. Sources after the
/// exhausted one are not advanced on that final step.
pub struct RowGroups<I> {
    sources: Vec<I>,
    finished: bool,
}

impl<I> RowGroups<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(sources: Vec<I>) -> Self {
        // With nothing to zip there is nothing to yield.
        let finished = sources.is_empty();
        Self { sources, finished }
    }

    /// Hand the sources back once iteration is done.
    pub fn into_sources(self) -> Vec<I> {
        self.sources
    }
}

impl<I> Iterator for RowGroups<I>
where
    I: Iterator<Item = String>,
{
    type Item = RowGroup;

    fn next(&mut self) -> Option<RowGroup> {
        if self.finished {
            return None;
        }

        let mut lines = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.next() {
                Some(line) => lines.push(line),
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }

        Some(RowGroup::new(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(lines: &[&str]) -> std::vec::IntoIter<String> {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn groups(sources: Vec<std::vec::IntoIter<String>>) -> Vec<Vec<String>> {
        RowGroups::new(sources)
            .map(|group| group.lines().to_vec())
            .collect()
    }

    #[test]
    fn test_groups_follow_source_order() {
        let result = groups(vec![source(&["x", "y"]), source(&["1", "2"])]);
        assert_eq!(result, vec![vec!["x", "1"], vec!["y", "2"]]);
    }

    #[test]
    fn test_shortest_source_wins() {
        let result = groups(vec![source(&["x", "y", "z"]), source(&["1"])]);
        assert_eq!(result, vec![vec!["x", "1"]]);

        let result = groups(vec![
            source(&["a", "b", "c", "d"]),
            source(&["1", "2", "3"]),
            source(&["i", "ii"]),
        ]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_any_empty_source_yields_no_groups() {
        let result = groups(vec![source(&["x", "y"]), source(&[]), source(&["1"])]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_sources_yields_no_groups() {
        assert!(groups(Vec::new()).is_empty());
    }

    #[test]
    fn test_group_width_matches_source_count() {
        let mut combined = RowGroups::new(vec![source(&["a"]), source(&["b"]), source(&["a"])]);
        let group = combined.next().unwrap();
        assert_eq!(group.lines().len(), 3);
        assert_eq!(combined.next(), None);
    }

    #[test]
    fn test_stays_finished_after_exhaustion() {
        let mut combined = RowGroups::new(vec![source(&["a", "b"]), source(&["1"])]);
        assert!(combined.next().is_some());
        assert!(combined.next().is_none());
        assert!(combined.next().is_none());

        // The longer source gave up its second line on the final step
        // and nothing after that.
        let sources = combined.into_sources();
        assert_eq!(sources[0].len(), 0);
    }

    #[test]
    fn test_later_sources_not_advanced_on_final_step() {
        let mut combined = RowGroups::new(vec![source(&["a"]), source(&["1", "2", "3"])]);
        assert!(combined.next().is_some());
        assert!(combined.next().is_none());

        let sources = combined.into_sources();
        assert_eq!(sources[1].len(), 2);
    }
}
