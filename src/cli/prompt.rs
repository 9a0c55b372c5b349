use std::io::{BufRead, Write};

use crate::error::{CombineError, Result};

pub const PROMPT: &str =
    "Enter the names of lyric files separated by commas (e.g., file1.txt, file2.txt):";

/// Split a comma-separated line into trimmed filenames.
///
/// Empty entries are kept: they name no file, fail to open and so empty the
/// combination just like any other missing input.
pub fn parse_filenames(line: &str) -> Vec<String> {
    line.split(',').map(|name| name.trim().to_string()).collect()
}

/// Print the prompt and read one line of filenames.
pub fn read_filenames<R, W>(mut input: R, mut output: W) -> Result<Vec<String>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CombineError::Validation(
            "No filenames provided on standard input".to_string(),
        ));
    }

    Ok(parse_filenames(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_trims_each_name() {
        assert_eq!(
            parse_filenames(" file1.txt ,file2.txt,  file 3.txt\n"),
            vec!["file1.txt", "file2.txt", "file 3.txt"]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        assert_eq!(parse_filenames("b.txt, a.txt, b.txt"), vec!["b.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_parse_blank_line_is_one_empty_name() {
        assert_eq!(parse_filenames("   \n"), vec![""]);
        assert_eq!(parse_filenames("a.txt,"), vec!["a.txt", ""]);
    }

    #[test]
    fn test_read_prints_prompt_and_reads_one_line() {
        let input = Cursor::new("a.txt, b.txt\nignored.txt\n");
        let mut output = Vec::new();

        let names = read_filenames(input, &mut output).unwrap();

        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", PROMPT));
    }

    #[test]
    fn test_read_without_trailing_newline() {
        let names = read_filenames(Cursor::new("only.txt"), Vec::new()).unwrap();
        assert_eq!(names, vec!["only.txt"]);
    }

    #[test]
    fn test_end_of_input_is_rejected() {
        let err = read_filenames(Cursor::new(""), Vec::new()).unwrap_err();
        assert!(matches!(err, CombineError::Validation(_)));
    }
}
