use super::combiner::RowGroup;

pub const DEFAULT_LINE_SEPARATOR: &str = "\n";
pub const DEFAULT_GROUP_SEPARATOR: &str = "\n\n";

/// Renders row groups as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    line_separator: String,
    group_separator: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_SEPARATOR, DEFAULT_GROUP_SEPARATOR)
    }
}

impl Formatter {
    pub fn new(line_separator: impl Into<String>, group_separator: impl Into<String>) -> Self {
        Self {
            line_separator: line_separator.into(),
            group_separator: group_separator.into(),
        }
    }

    pub fn render_group(&self, group: &RowGroup) -> String {
        group.lines().join(&self.line_separator)
    }

    /// Join every rendered group with the group separator. No separator is
    /// emitted before the first or after the last group.
    pub fn format<G>(&self, groups: G) -> String
    where
        G: IntoIterator<Item = RowGroup>,
    {
        let mut output = String::new();
        for (index, group) in groups.into_iter().enumerate() {
            if index > 0 {
                output.push_str(&self.group_separator);
            }
            output.push_str(&self.render_group(&group));
        }
        output
    }
}
