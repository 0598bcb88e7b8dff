use crate::error::{DoodleError, DoodleResult};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Extensions accepted when opening a file (compared case-insensitively)
pub const OPEN_EXTENSIONS: [&str; 4] = ["jpg", "png", "gif", "bmp"];

/// Stem used for generated doodle names
const DOODLE_STEM: &str = "doodle";

/// The file a surface is saved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedFile {
    directory: PathBuf,
    file_name: String,
}

impl PersistedFile {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Split a full path into directory and file name
    pub fn from_path(path: &Path) -> Self {
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { directory, file_name }
    }

    /// First of `doodle.png`, `doodle (1).png`, `doodle (2).png`, ... not
    /// already present in `directory`
    pub fn generate(directory: &Path) -> Self {
        let mut candidate = Self::new(directory, format!("{DOODLE_STEM}.png"));
        let mut count = 1u32;
        while candidate.exists() {
            candidate = Self::new(directory, format!("{DOODLE_STEM} ({count}).png"));
            count += 1;
        }
        log::debug!("Generated doodle file name {}", candidate.path().display());
        candidate
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Same directory and stem, with a `.png` extension
    pub fn with_png_extension(&self) -> Self {
        let path = self.path().with_extension("png");
        Self::from_path(&path)
    }

    pub fn is_png(&self) -> bool {
        has_extension(&self.path(), "png")
    }
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// Check if a path names an image we can open, based on its extension
pub fn is_supported_image(path: &Path) -> bool {
    let has_name = path
        .file_stem()
        .map(|stem| !stem.is_empty())
        .unwrap_or(false);
    has_name && OPEN_EXTENSIONS.iter().any(|ext| has_extension(path, ext))
}

/// Decode an image file into an RGBA buffer
pub fn load_image(path: &Path) -> DoodleResult<RgbaImage> {
    if !is_supported_image(path) {
        log::warn!("Refusing to open unsupported file: {}", path.display());
        return Err(DoodleError::UnsupportedExtension(path.to_path_buf()));
    }

    log::info!("Loading image from {}", path.display());
    let decoded = image::open(path).map_err(|source| DoodleError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Decoded image: {}x{}", decoded.width(), decoded.height());
    Ok(decoded.to_rgba8())
}

/// Encode the buffer as PNG, whatever the extension of `path`
pub fn save_png(image: &RgbaImage, path: &Path) -> DoodleResult<()> {
    log::info!("Saving {}x{} image to {}", image.width(), image.height(), path.display());
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| DoodleError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
