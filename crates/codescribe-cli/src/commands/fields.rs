//! Snippet field arguments shared by `add` and `update`

use clap::Args;
use codescribe_core::errors::ExError;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Snippet title
    #[arg(long)]
    pub title: String,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Tags, e.g. "sorting,algorithms"
    #[arg(long)]
    pub tags: Option<String>,

    /// Programming language label
    #[arg(long)]
    pub language: Option<String>,

    /// Snippet body given inline
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub code: Option<String>,

    /// Read the snippet body from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl FieldArgs {
    /// The snippet body, reading `--file` when given
    pub fn read_code(&self) -> Result<String, Box<dyn std::error::Error>> {
        match (&self.code, &self.file) {
            (Some(code), _) => Ok(code.clone()),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
                ExError::from(e)
                    .with_op("read_code_file")
                    .with_entity_id(path.display().to_string())
                    .into()
            }),
            (None, None) => Err("either --code or --file is required".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codescribe_core::errors::ExErrorKind;

    fn args(code: Option<&str>, file: Option<PathBuf>) -> FieldArgs {
        FieldArgs {
            title: "t".to_string(),
            description: None,
            tags: None,
            language: None,
            code: code.map(str::to_string),
            file,
        }
    }

    #[test]
    fn test_inline_code_wins() {
        assert_eq!(args(Some("x = 1"), None).read_code().unwrap(), "x = 1");
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.rs");

        let err = args(None, Some(missing.clone())).read_code().unwrap_err();
        let ex_err = err.downcast_ref::<ExError>().unwrap();

        assert_eq!(ex_err.kind(), ExErrorKind::Io);
        assert_eq!(ex_err.op(), Some("read_code_file"));
        assert_eq!(
            ex_err.entity_id(),
            Some(missing.display().to_string().as_str())
        );
    }
}
