use crate::error::{DevstashError, Result};
use crate::input::decode;
use std::env;
use std::fs;
use std::process::Command;
use tempfile::NamedTempFile;

pub const DEFAULT_EDITOR: &str = "vim";

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to vim.
pub fn get_editor() -> String {
    resolve_editor(|name| env::var(name).ok())
}

fn resolve_editor<E>(env: E) -> String
where
    E: Fn(&str) -> Option<String>,
{
    ["EDITOR", "VISUAL"]
        .iter()
        .filter_map(|name| env(name))
        .find(|editor| !editor.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Opens a fresh temporary file in `editor`, waits for it to close and
/// returns what was saved.
///
/// The editor string may carry arguments (`code --wait`). The temporary file
/// is removed when this returns, whether or not the editor succeeded.
pub fn compose(editor: &str) -> Result<String> {
    let temp_file = tempfile::Builder::new()
        .prefix("devstash-")
        .suffix(".md")
        .tempfile()?;

    let result = run_editor(editor, &temp_file);

    let path = temp_file.path().to_path_buf();
    if let Err(e) = temp_file.close() {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove temporary file");
    }

    result
}

fn run_editor(editor: &str, temp_file: &NamedTempFile) -> Result<String> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(DevstashError::NoEditor)?;
    let path = temp_file.path();

    tracing::debug!(editor, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| DevstashError::EditorLaunch {
            editor: editor.to_string(),
            source: e,
        })?;

    if !status.success() {
        return Err(DevstashError::EditorExit {
            editor: editor.to_string(),
            status,
        });
    }

    let bytes = fs::read(path).map_err(|e| DevstashError::EditorRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_env_wins() {
        let editor = resolve_editor(|name| match name {
            "EDITOR" => Some("nano".to_string()),
            "VISUAL" => Some("code --wait".to_string()),
            _ => None,
        });
        assert_eq!(editor, "nano");
    }

    #[test]
    fn test_visual_used_when_editor_blank() {
        let editor = resolve_editor(|name| match name {
            "EDITOR" => Some("  ".to_string()),
            "VISUAL" => Some("code --wait".to_string()),
            _ => None,
        });
        assert_eq!(editor, "code --wait");
    }

    #[test]
    fn test_default_editor() {
        assert_eq!(resolve_editor(|_| None), DEFAULT_EDITOR);
    }

    #[test]
    fn test_blank_editor_is_an_error() {
        assert!(matches!(compose("   "), Err(DevstashError::NoEditor)));
    }

    #[test]
    fn test_missing_editor_binary_is_an_error() {
        let result = compose("devstash-no-such-editor-binary");
        match result {
            Err(DevstashError::EditorLaunch { editor, source }) => {
                assert_eq!(editor, "devstash-no-such-editor-binary");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::path::{Path, PathBuf};

        /// Writes an executable editor script that runs `body` with the temp
        /// file as `$1` and records that path next to the script.
        fn fake_editor(dir: &Path, body: &str) -> (PathBuf, PathBuf) {
            let script = dir.join("fake-editor.sh");
            let record = dir.join("edited-path");
            let contents = format!(
                "#!/bin/sh\nprintf '%s' \"$1\" > '{}'\n{}\n",
                record.display(),
                body
            );
            fs::write(&script, contents).unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
            (script, record)
        }

        #[test]
        fn test_compose_reads_saved_content_and_cleans_up() {
            let dir = tempfile::tempdir().unwrap();
            let (script, record) = fake_editor(dir.path(), "printf 'hello from editor' > \"$1\"");

            let content = compose(script.to_str().unwrap()).unwrap();
            assert_eq!(content, "hello from editor");

            let edited = fs::read_to_string(record).unwrap();
            assert!(edited.contains("devstash-"));
            assert!(edited.ends_with(".md"));
            assert!(!Path::new(&edited).exists());
        }

        #[test]
        fn test_compose_cleans_up_when_editor_fails() {
            let dir = tempfile::tempdir().unwrap();
            let (script, record) = fake_editor(dir.path(), "exit 3");

            let result = compose(script.to_str().unwrap());
            assert!(matches!(result, Err(DevstashError::EditorExit { .. })));

            let edited = fs::read_to_string(record).unwrap();
            assert!(!Path::new(&edited).exists());
        }
    }
}
