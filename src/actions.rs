//! Workflow-command output for the Actions runner: foldable log groups,
//! step outputs via `$GITHUB_OUTPUT`, and run-level failure annotations.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{AppError, Result};

pub fn group(title: &str) {
    println!("::group::{title}");
}

pub fn end_group() {
    println!("::endgroup::");
}

/// Emit an error annotation. The caller still exits non-zero to fail the run.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Publish a named step output.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    let path = env::var("GITHUB_OUTPUT")
        .map_err(|_| AppError::Output("GITHUB_OUTPUT is not set".to_string()))?;
    write_output(Path::new(&path), name, value)
}

// Appends one entry in the GITHUB_OUTPUT file format; multiline values use
// the heredoc form the runner expects.
fn write_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if value.contains('\n') {
        writeln!(file, "{name}<<GH_OUTPUT_EOF")?;
        writeln!(file, "{value}")?;
        writeln!(file, "GH_OUTPUT_EOF")?;
    } else {
        writeln!(file, "{name}={value}")?;
    }
    Ok(())
}

fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_output_appends_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("output");

        write_output(&path, "conclusion", "failure").unwrap();
        write_output(&path, "other", "value").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "conclusion=failure\nother=value\n");
    }

    #[test]
    fn test_write_output_multiline_uses_heredoc() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("output");

        write_output(&path, "report", "line one\nline two").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "report<<GH_OUTPUT_EOF\nline one\nline two\nGH_OUTPUT_EOF\n"
        );
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("50% done\r\nnext"), "50%25 done%0D%0Anext");
    }
}
