use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::error::FileSystemError;

/// Lazy sequence of trimmed lines read from one input file.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A source that cannot be
/// opened, or that hits a read error part way through, logs the failure and
/// then behaves as if the file had ended. Callers never see the error, only
/// [`LineSource::failed`].
pub struct LineSource<R = BufReader<File>> {
    path: PathBuf,
    reader: Option<R>,
    failed: bool,
}

impl LineSource {
    /// Open `filename` for reading. The file is opened immediately so that
    /// every unreadable input is reported, not only the ones the combiner
    /// happens to reach.
    pub fn open(filename: impl AsRef<Path>) -> Self {
        let path = filename.as_ref().to_path_buf();
        match File::open(&path) {
            Ok(file) => {
                debug!("Opened {}", path.display());
                Self::from_reader(path, BufReader::new(file))
            }
            Err(source) => {
                error!("{}", FileSystemError::Open { path: path.clone(), source });
                Self {
                    path,
                    reader: None,
                    failed: true,
                }
            }
        }
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn from_reader(name: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: name.into(),
            reader: Some(reader),
            failed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether opening or reading this source logged an error.
    pub fn failed(&self) -> bool {
        self.failed
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;
        match read_line(reader) {
            Ok(Some(line)) => Some(trim_line(&line).to_string()),
            Ok(None) => {
                self.reader = None;
                None
            }
            Err(source) => {
                error!(
                    "{}",
                    FileSystemError::Read {
                        path: self.path.clone(),
                        source,
                    }
                );
                self.failed = true;
                self.reader = None;
                None
            }
        }
    }
}

/// Strip surrounding whitespace, counting the ASCII information separators
/// `\x1c`..=`\x1f` as whitespace too.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Read one line terminated by `\n`, `\r\n` or `\r`, without the
/// terminator. `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    let mut consumed = 0;

    loop {
        let (terminator, used) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    buf.extend_from_slice(&available[..i]);
                    (Some(available[i]), i + 1)
                }
                None => {
                    buf.extend_from_slice(available);
                    (None, available.len())
                }
            }
        };
        reader.consume(used);
        consumed += used;

        match terminator {
            Some(b'\r') => {
                if reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                break;
            }
            Some(_) => break,
            None => {}
        }
    }

    if consumed == 0 {
        return Ok(None);
    }

    String::from_utf8(buf)
        .map(Some)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_lines_are_trimmed_in_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  first line \n\tsecond\r\n\nlast   ").unwrap();

        let source = LineSource::open(file.path());
        let lines: Vec<String> = source.collect();

        assert_eq!(lines, vec!["first line", "second", "", "last"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "x\ry\r").unwrap();

        let lines: Vec<String> = LineSource::open(file.path()).collect();

        assert_eq!(lines, vec!["x", "y"]);
    }

    #[test]
    fn test_mixed_line_endings() {
        let source = LineSource::from_reader("mixed", Cursor::new("a\r\nb\rc\nd\r\r\ne"));
        assert_eq!(source.collect::<Vec<_>>(), vec!["a", "b", "c", "d", "", "e"]);
    }

    #[test]
    fn test_carriage_return_split_across_buffer_refills() {
        let reader = BufReader::with_capacity(2, Cursor::new("ab\r\ncd\r"));
        let source = LineSource::from_reader("small-buffer", reader);
        assert_eq!(source.collect::<Vec<_>>(), vec!["ab", "cd"]);
    }

    #[test]
    fn test_information_separators_are_trimmed() {
        let source = LineSource::from_reader("separators", Cursor::new("\x1c\x1dword\x1e\x1f \n"));
        assert_eq!(source.collect::<Vec<_>>(), vec!["word"]);
    }

    #[test]
    fn test_empty_file_yields_nothing_and_is_not_a_failure() {
        let file = NamedTempFile::new().unwrap();

        let mut source = LineSource::open(file.path());

        assert_eq!(source.next(), None);
        assert!(!source.failed());
    }

    #[test]
    fn test_missing_file_degrades_to_empty_sequence() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let mut source = LineSource::open(&missing);

        assert!(source.failed());
        assert_eq!(source.path(), missing.as_path());
        assert_eq!(source.next(), None);
        assert_eq!(source.next(), None);
    }

    #[test]
    fn test_directory_cannot_be_read_as_lines() {
        let dir = tempdir().unwrap();

        let lines: Vec<String> = LineSource::open(dir.path()).collect();

        assert!(lines.is_empty());
    }

    #[test]
    fn test_invalid_utf8_ends_sequence_and_marks_failure() {
        let bytes: Vec<u8> = b"good\n\xff\xfe bad\nnever reached\n".to_vec();
        let mut source = LineSource::from_reader("broken.txt", Cursor::new(bytes));

        assert_eq!(source.next().as_deref(), Some("good"));
        assert_eq!(source.next(), None);
        assert!(source.failed());
        assert_eq!(source.next(), None);
    }

    #[test]
    fn test_from_reader_keeps_name() {
        let source = LineSource::from_reader("memory", Cursor::new("a\nb\n"));
        assert_eq!(source.path(), Path::new("memory"));
        assert_eq!(source.collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
