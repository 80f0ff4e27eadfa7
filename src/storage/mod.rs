use chrono::Utc;
use log::warn;
use std::io;
use std::path::{Path, PathBuf};

/// Base name used when sanitization leaves nothing of the original.
const FALLBACK_BASE: &str = "file";

/// On-disk location and public URL mapping for uploaded vehicle images.
#[derive(Clone)]
pub struct ImageStorage {
    upload_dir: PathBuf,
    public_prefix: String,
}

/// A file persisted by [`ImageStorage::save_image`].
#[derive(Debug)]
pub struct StoredAsset {
    pub file_name: String,
    pub disk_path: PathBuf,
    pub public_path: String,
}

impl ImageStorage {
    pub fn new(upload_dir: impl AsRef<Path>, public_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.as_ref().to_path_buf(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn ensure_upload_dir_exists(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)
    }

    /// Persists one uploaded image and returns where it landed.
    ///
    /// The content goes to disk in a single write call, so the file is fully
    /// present by the time this returns. The generated name embeds the
    /// current epoch milliseconds; existing files are never overwritten
    /// unless two uploads of the same sanitized name hit the same
    /// millisecond, a known limitation of the naming scheme.
    pub async fn save_image(
        &self,
        original_name: &str,
        content: &[u8],
    ) -> io::Result<StoredAsset> {
        // The directory usually exists from an earlier upload. A failure
        // here is logged and skipped so the write below reports the real
        // problem when the directory is genuinely unusable.
        if let Err(e) = self.ensure_upload_dir_exists() {
            warn!(
                "could not create upload directory {}: {}",
                self.upload_dir.display(),
                e
            );
        }

        let file_name = unique_file_name(original_name, Utc::now().timestamp_millis());
        let disk_path = self.upload_dir.join(&file_name);
        tokio::fs::write(&disk_path, content).await?;

        Ok(StoredAsset {
            public_path: format!("{}/{}", self.public_prefix, file_name),
            file_name,
            disk_path,
        })
    }

    pub fn delete_image(&self, file_name: &str) -> io::Result<()> {
        std::fs::remove_file(self.upload_dir.join(file_name))
    }
}

/// Derives the stored file name from an uploaded one: sanitized base, epoch
/// millisecond suffix, lower-cased extension. A name without an extension
/// keeps none.
pub fn unique_file_name(original_name: &str, epoch_ms: i64) -> String {
    let (base, ext) = split_extension(original_name);
    let base = sanitize_base(base);
    match ext {
        Some(ext) => format!("{}-{}.{}", base, epoch_ms, ext.to_lowercase()),
        None => format!("{}-{}", base, epoch_ms),
    }
}

/// Splits on the last dot. Dotfiles and trailing dots count as having no
/// extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() && !ext.is_empty() => (base, Some(ext)),
        _ => (name, None),
    }
}

/// Lower-cases the base name and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen.
fn sanitize_base(base: &str) -> String {
    let mut out = String::with_capacity(base.len());
    for c in base.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sanitizes_base_and_lowercases_extension() {
        assert_eq!(
            unique_file_name("My Car #1.PNG", 1_700_000_000_000),
            "my-car-1-1700000000000.png"
        );
    }

    #[test]
    fn name_without_extension_gets_no_dot() {
        assert_eq!(unique_file_name("README", 42), "readme-42");
    }

    #[test]
    fn dotfile_is_treated_as_extensionless() {
        assert_eq!(unique_file_name(".gitignore", 42), "gitignore-42");
    }

    #[test]
    fn all_symbol_base_falls_back_to_generic_name() {
        assert_eq!(unique_file_name("###.jpg", 42), "file-42.jpg");
    }

    #[test]
    fn distinct_timestamps_produce_distinct_names() {
        assert_ne!(unique_file_name("car.jpg", 1), unique_file_name("car.jpg", 2));
    }

    #[tokio::test]
    async fn save_image_writes_the_file_and_reports_its_public_path() {
        let tmp = tempdir().expect("tempdir");
        let storage = ImageStorage::new(tmp.path().join("autos"), "/images/autos");

        let asset = storage
            .save_image("photo.jpg", b"jpeg bytes")
            .await
            .expect("save");

        assert!(asset.disk_path.is_file());
        assert_eq!(
            asset.public_path,
            format!("/images/autos/{}", asset.file_name)
        );
        assert_eq!(
            std::fs::read(&asset.disk_path).expect("read back"),
            b"jpeg bytes"
        );
    }

    #[tokio::test]
    async fn saving_twice_with_the_directory_already_present_succeeds() {
        let tmp = tempdir().expect("tempdir");
        let storage = ImageStorage::new(tmp.path().join("autos"), "/images/autos");

        storage.save_image("a.jpg", b"1").await.expect("first save");
        storage.save_image("b.jpg", b"2").await.expect("second save");

        let entries = std::fs::read_dir(storage.upload_dir())
            .expect("read dir")
            .count();
        assert_eq!(entries, 2);
    }

    #[test]
    fn delete_image_removes_the_stored_file() {
        let tmp = tempdir().expect("tempdir");
        let storage = ImageStorage::new(tmp.path(), "/images/autos");
        std::fs::write(tmp.path().join("car-1.jpg"), b"x").expect("write");

        storage.delete_image("car-1.jpg").expect("delete");
        assert!(!tmp.path().join("car-1.jpg").exists());
    }
}
