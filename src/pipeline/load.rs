//! Data loading: parse the YAML source document into a [`Resume`].
//!
//! The check for existence happens before the read so a missing file
//! surfaces as [`ResumeError::MissingInput`] rather than a generic I/O
//! failure, and the caller can distinguish "create the file first" from
//! "fix the file". A malformed document never partially populates the
//! record — `serde_yaml` either yields the whole tree or an error.

use crate::error::ResumeError;
use crate::model::Resume;
use std::path::Path;
use tracing::debug;

/// Load and parse the resume source document.
///
/// No side effects beyond reading the file.
pub async fn load_resume(path: &Path) -> Result<Resume, ResumeError> {
    if !path.exists() {
        return Err(ResumeError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ResumeError::MissingInput {
                path: path.to_path_buf(),
            },
            _ => ResumeError::Io {
                context: format!("failed to read '{}'", path.display()),
                source: e,
            },
        })?;

    let resume: Resume = serde_yaml::from_str(&text).map_err(|e| ResumeError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        "Loaded resume for '{}' ({} skills, {} employers, {} awards, {} education, {} projects)",
        resume.name,
        resume.skills.len(),
        resume.experience.len(),
        resume.awards.len(),
        resume.education.len(),
        resume.projects.len()
    );

    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn missing_file_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resume(&dir.path().join("absent.yaml")).await.unwrap_err();
        assert!(matches!(err, ResumeError::MissingInput { .. }));
    }

    #[tokio::test]
    async fn malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "bad.yaml", "name: [unclosed");
        let err = load_resume(&path).await.unwrap_err();
        assert!(matches!(err, ResumeError::Parse { .. }));
    }

    #[tokio::test]
    async fn wrong_shape_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        // Valid YAML, wrong shape: skills must be a sequence.
        let path = write_fixture(
            &dir,
            "shape.yaml",
            "name: A\nlocation: B\nemail: C\nwebsite: D\nskills: 42\n",
        );
        let err = load_resume(&path).await.unwrap_err();
        assert!(matches!(err, ResumeError::Parse { .. }));
    }

    #[tokio::test]
    async fn unreadable_existing_path_is_io_error() {
        // A directory passes the existence check but cannot be read as text.
        let dir = tempfile::tempdir().unwrap();
        let err = load_resume(dir.path()).await.unwrap_err();
        assert!(matches!(err, ResumeError::Io { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn valid_document_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "ok.yaml",
            "name: A\nlocation: B\nemail: C\nwebsite: D\n",
        );
        let r = load_resume(&path).await.unwrap();
        assert_eq!(r.name, "A");
    }
}
