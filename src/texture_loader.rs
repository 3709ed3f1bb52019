use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};

fn asset_error(path: &Path, reason: impl ToString) -> Error {
    Error::Asset { path: path.to_path_buf(), reason: reason.to_string() }
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!(?path, error = %e, "no usable EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|source| Error::Io {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // Orientation tags are only reliable in JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| asset_error(image_path, e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise; flips are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(?image_path, orientation, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| asset_error(image_path, e))
}

/// Textures keyed by the asset reference used in page content. Failed loads are remembered
/// so the page falls back to a placeholder without retrying every frame.
pub struct TextureCache {
    root: PathBuf,
    textures: HashMap<String, Option<Texture2D>>,
}

impl TextureCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), textures: HashMap::new() }
    }

    pub fn load(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, asset: &str) {
        if self.textures.contains_key(asset) {
            return;
        }
        let path = self.root.join(asset);
        let texture = match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!(asset, error = %e, "image unavailable, using fallback");
                None
            }
        };
        self.textures.insert(asset.to_string(), texture);
    }

    pub fn get(&self, asset: &str) -> Option<&Texture2D> {
        self.textures.get(asset).and_then(Option::as_ref)
    }
}
