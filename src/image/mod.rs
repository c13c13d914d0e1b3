//! Static image assets: content-hashed publishing and dimension lookup.
//!
//! Images referenced by posts (front-matter `thumbnail` or inline markdown
//! images) are published under `/static/<hash>/<file name>`, where `<hash>`
//! is a prefix of the blake3 digest of the file contents. Identical files
//! therefore share one published path, and a changed file gets a new one.
//!
//! Only the image header is read to obtain dimensions; nothing is resized or
//! re-encoded.

use std::{
    fs::{self, File},
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::seo::{ImageDescriptor, MetaError};

/// URL prefix for published assets.
pub const STATIC_PREFIX: &str = "static";

/// Number of hex chars of the content hash kept in the published path.
const HASH_LEN: usize = 16;

/// A source image and its content-addressed published location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticAsset {
    /// Absolute source file path.
    pub source: PathBuf,
    /// Site-root URL path (e.g., `/static/0123abcd.../hero.png`).
    pub url_path: String,
}

impl StaticAsset {
    /// Hash `source` and compute its published location.
    pub fn from_source(source: &Path) -> Result<Self> {
        let hash = hash_file(source)
            .with_context(|| format!("failed to hash image {}", source.display()))?;
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("image path has no file name: {}", source.display()))?;

        Ok(Self {
            source: source.to_path_buf(),
            url_path: format!("/{STATIC_PREFIX}/{hash}/{file_name}"),
        })
    }

    /// Output file path under `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.url_path.trim_start_matches('/'))
    }

    /// Read the image header and build a descriptor for the published path.
    pub fn describe(&self) -> Result<ImageDescriptor> {
        let (width, height) = ::image::image_dimensions(&self.source)
            .with_context(|| format!("failed to read image {}", self.source.display()))?;
        ImageDescriptor::new(self.url_path.clone(), width, height).map_err(|err| match err {
            MetaError::Image { reason, .. } => MetaError::Image {
                path: self.source.display().to_string(),
                reason,
            }
            .into(),
            other => other.into(),
        })
    }

    /// Copy the source into the output tree.
    ///
    /// Returns `false` when the published file already exists; the path is
    /// content-addressed so an existing file is always up to date.
    pub fn publish(&self, output_dir: &Path) -> Result<bool> {
        let dest = self.output_path(output_dir);
        if dest.exists() {
            return Ok(false);
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::copy(&self.source, &dest).with_context(|| {
            format!(
                "failed to copy {} to {}",
                self.source.display(),
                dest.display()
            )
        })?;
        Ok(true)
    }
}

/// Whether a markdown/front-matter image reference points at a local file.
///
/// Absolute URLs, protocol-relative URLs, data URIs and fragments stay as-is.
pub fn is_local_reference(reference: &str) -> bool {
    let reference = reference.trim();
    !(reference.is_empty()
        || reference.contains("://")
        || reference.starts_with("//")
        || reference.starts_with("data:")
        || reference.starts_with('#'))
}

/// Resolve a local image reference relative to the directory of the post.
///
/// A leading `/` is resolved against `root` (the site root); anything else
/// against `base_dir`.
pub fn resolve_reference(reference: &str, base_dir: &Path, root: &Path) -> PathBuf {
    let reference = reference.trim();
    match reference.strip_prefix('/') {
        Some(rest) => root.join(rest),
        None => base_dir.join(reference.trim_start_matches("./")),
    }
}

/// Hex prefix of the blake3 digest of a file.
fn hash_file(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    let mut hash = hex::encode(hasher.finalize().as_bytes());
    hash.truncate(HASH_LEN);
    Ok(hash)
}

#[cfg(test)]
pub(crate) fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = ::image::RgbImage::new(width, height);
    img.save(path).unwrap();
}
