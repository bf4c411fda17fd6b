//! Local upload storage
//!
//! Files land in a single flat directory under a generated name of the form
//! `<unix-millis>-<sanitized original name>`. Names are claimed with
//! create-new semantics, so two uploads never share a file.

use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("file name regex is valid"));

const FALLBACK_NAME: &str = "upload";

/// Attempts before giving up on finding a free name
const MAX_NAME_ATTEMPTS: u32 = 64;

/// Reduce a client-supplied file name to a safe single path component
pub fn sanitize_file_name(original: &str) -> String {
    let last = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned = UNSAFE_CHARS.replace_all(last, "_");

    if cleaned.trim_start_matches('.').is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.into_owned()
    }
}

#[derive(Debug, Clone)]
pub struct UploadStorage {
    root: PathBuf,
}

impl UploadStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist `bytes` and return the generated stored name
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        fs::create_dir_all(&self.root).await?;

        let safe = sanitize_file_name(original_name);
        let mut stamp = chrono::Utc::now().timestamp_millis();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = format!("{stamp}-{safe}");
            let path = self.root.join(&name);

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    if let Err(e) = write_all(&mut file, bytes).await {
                        drop(file);
                        let _ = fs::remove_file(&path).await;
                        return Err(e);
                    }
                    tracing::info!(file = %name, size = bytes.len(), "Stored upload");
                    return Ok(name);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => stamp += 1,
                Err(e) => return Err(e),
            }
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            "no free upload name",
        ))
    }

    /// Delete a stored file; a missing file is not an error
    pub async fn remove(&self, name: &str) -> std::io::Result<()> {
        let Some(path) = self.path_of(name) else {
            return Ok(());
        };
        match fs::remove_file(path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Resolve a stored name, refusing anything that is not a plain file name
    fn path_of(&self, name: &str) -> Option<PathBuf> {
        (!name.is_empty() && sanitize_file_name(name) == name).then(|| self.root.join(name))
    }
}

async fn write_all(file: &mut fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}
