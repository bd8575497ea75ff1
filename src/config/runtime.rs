use crate::detector::DetectorParams;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Summary of every processed frame.
    pub json_out: Option<PathBuf>,
    /// Color and edge masks per frame.
    pub mask_dir: Option<PathBuf>,
    /// Frames with the detected gate drawn on top.
    pub overlay_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// A single image or a directory of images.
    pub input: PathBuf,
    pub detector: DetectorParams,
    /// Center-crop non-square frames instead of rejecting them.
    #[serde(default = "default_crop_to_square")]
    pub crop_to_square: bool,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_crop_to_square() -> bool {
    true
}

impl RuntimeConfig {
    /// Image files named by `input`, sorted by path.
    pub fn input_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Ok(vec![self.input.clone()]);
        }
        let entries = fs::read_dir(&self.input).map_err(|source| Error::Io {
            path: self.input.display().to_string(),
            source,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| Error::Io {
                    path: self.input.display().to_string(),
                    source,
                })?
                .path();
            if is_image_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        if files.is_empty() {
            return Err(Error::Config(format!(
                "no png/jpg images in {}",
                self.input.display()
            )));
        }
        Ok(files)
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: RuntimeConfig = serde_json::from_str(&contents).map_err(|source| Error::Json {
        path: path.display().to_string(),
        source,
    })?;
    if config.detector.gate.kernel % 2 == 0 {
        return Err(Error::Config(format!(
            "gate.kernel must be odd, got {}",
            config.detector.gate.kernel
        )));
    }
    Ok(config)
}
