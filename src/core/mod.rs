//! Core combining pipeline
//!
//! - `source`: per-file lazy line reading
//! - `combiner`: lockstep zipping of sources into row groups
//! - `formatter`: rendering row groups as text
//! - `writer`: persisting the rendered text

pub mod combiner;
pub mod formatter;
pub mod source;
pub mod writer;

use tracing::{debug, info};

pub use combiner::RowGroups;
pub use formatter::Formatter;
pub use source::LineSource;
pub use writer::save_to_file;

/// Result of running the pipeline over a list of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub text: String,
    pub groups: usize,
    /// Sources that logged an open or read error.
    pub failed_sources: usize,
}

/// Open every file, zip their lines and render the row groups.
pub fn combine_files<S: AsRef<str>>(filenames: &[S], formatter: &Formatter) -> Combination {
    let sources: Vec<LineSource> = filenames
        .iter()
        .map(|name| LineSource::open(name.as_ref()))
        .collect();
    debug!("Combining {} sources", sources.len());

    let mut groups = 0;
    let mut row_groups = RowGroups::new(sources);
    let text = formatter.format(row_groups.by_ref().inspect(|_| groups += 1));

    let failed_sources = row_groups
        .into_sources()
        .iter()
        .filter(|source| source.failed())
        .inspect(|source| debug!("Source {} did not read cleanly", source.path().display()))
        .count();

    info!("Combined {} files into {} groups", filenames.len(), groups);

    Combination {
        text,
        groups,
        failed_sources,
    }
}
