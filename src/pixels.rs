use super::*;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

/// Distinct colours of an image and how many pixels carry each.
///
/// Images larger than [`THUMBNAIL_WIDTH`] × [`THUMBNAIL_HEIGHT`] are shrunk
/// to fit before counting, keeping their aspect ratio. Alpha is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pixels(BTreeMap<[u8; 3], Weight>);

impl Pixels {
    /// Decodes and counts the image at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::debug!("{:<32}{:<32}", "decoding image", path.display());
        let image = image::open(path).with_context(|| format!("open {}", path.display()))?;
        Ok(Self::from(image))
    }
    /// Weighted points in ascending colour order, one per distinct colour.
    pub fn points(&self) -> Vec<Color> {
        self.0.iter().map(|(rgb, ct)| Color::from((*rgb, *ct))).collect()
    }
    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Number of pixels counted.
    pub fn total(&self) -> Weight {
        self.0.values().sum()
    }
}

impl From<image::DynamicImage> for Pixels {
    fn from(image: image::DynamicImage) -> Self {
        let image = match image.width() > THUMBNAIL_WIDTH || image.height() > THUMBNAIL_HEIGHT {
            true => image.thumbnail(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT),
            false => image,
        };
        log::debug!(
            "{:<32}{:<32}",
            "counting colours",
            format!("{}x{}", image.width(), image.height())
        );
        Self::from(&image.to_rgb8())
    }
}

impl From<&image::RgbImage> for Pixels {
    fn from(image: &image::RgbImage) -> Self {
        let mut counts = BTreeMap::new();
        image
            .pixels()
            .for_each(|px| *counts.entry(px.0).or_insert(0) += 1);
        Self(counts)
    }
}
