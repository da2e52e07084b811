//! Plot image export
//!
//! The plot is captured with a viewport screenshot: the request is sent one
//! frame, the image arrives as an `egui::Event::Screenshot` on a later frame
//! and is cropped to the plot rectangle before it is written out.

use std::borrow::Cow;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use egui::{ColorImage, Rect};

use crate::constants::export::{DPI, EXTENSION, FILE_STEM, PIXELS_PER_METER};
use crate::error::{PlotError, Result};

/// Where a captured plot goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    File(PathBuf),
    Clipboard,
}

/// Tightly packed RGBA pixels
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl CapturedImage {
    /// Crop a screenshot to `rect` (in points); the whole image when `rect` is `None`
    pub fn crop(image: &ColorImage, rect: Option<Rect>, pixels_per_point: f32) -> Self {
        let [full_w, full_h] = image.size;
        let (x0, y0, x1, y1) = match rect {
            Some(rect) => (
                ((rect.left() * pixels_per_point).max(0.0) as usize).min(full_w),
                ((rect.top() * pixels_per_point).max(0.0) as usize).min(full_h),
                ((rect.right() * pixels_per_point).ceil().max(0.0) as usize).min(full_w),
                ((rect.bottom() * pixels_per_point).ceil().max(0.0) as usize).min(full_h),
            ),
            None => (0, 0, full_w, full_h),
        };

        let (x1, y1) = (x1.max(x0), y1.max(y0));
        let width = x1 - x0;
        let height = y1 - y0;
        let mut rgba = Vec::with_capacity(width * height * 4);
        for row in y0..y1 {
            for c in &image.pixels[row * full_w + x0..row * full_w + x1] {
                rgba.extend_from_slice(&c.to_array());
            }
        }
        Self { width, height, rgba }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Suggested file name for the save dialog, e.g. `inverse_axis_20240101_120000.png`
pub fn default_file_name() -> String {
    format!(
        "{}_{}.{}",
        FILE_STEM,
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        EXTENSION
    )
}

/// Force a `.png` extension
pub fn png_path(path: PathBuf) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(EXTENSION));
    if is_png {
        path
    } else {
        path.with_extension(EXTENSION)
    }
}

/// Encode and write an RGBA PNG tagged with `DPI`
pub fn save_png(image: &CapturedImage, path: &Path) -> Result<()> {
    profiling::scope!("save_png");

    if image.rgba.len() != image.width * image.height * 4 {
        return Err(PlotError::Validation("Captured image has an unexpected size.".into()));
    }

    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(writer, image.width as u32, image.height as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: PIXELS_PER_METER,
        yppu: PIXELS_PER_METER,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.rgba)?;
    writer.finish()?;

    tracing::info!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        dpi = DPI,
        "exported plot"
    );
    Ok(())
}

/// Put the image on the system clipboard
pub fn copy_to_clipboard(image: &CapturedImage) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| PlotError::Clipboard(e.to_string()))?;
    clipboard
        .set_image(arboard::ImageData {
            width: image.width,
            height: image.height,
            bytes: Cow::Borrowed(&image.rgba),
        })
        .map_err(|e| PlotError::Clipboard(e.to_string()))?;
    tracing::info!("copied plot image to clipboard");
    Ok(())
}

/// Deliver a captured image to its target, returning a status line
pub fn deliver(target: &ExportTarget, image: &CapturedImage) -> Result<String> {
    if image.is_empty() {
        return Err(PlotError::Validation("Nothing to export: the plot area is empty.".into()));
    }
    match target {
        ExportTarget::File(path) => {
            save_png(image, path)?;
            Ok(format!("Saved plot to {}", path.display()))
        }
        ExportTarget::Clipboard => {
            copy_to_clipboard(image)?;
            Ok("Copied plot image to clipboard".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Color32};
    use std::io::BufReader;

    /// 4x2 image where pixel (x, y) has red = x and green = y
    fn gradient() -> ColorImage {
        let mut bytes = Vec::new();
        for y in 0..2u8 {
            for x in 0..4u8 {
                bytes.extend_from_slice(&[x, y, 0, 255]);
            }
        }
        ColorImage::from_rgba_unmultiplied([4, 2], &bytes)
    }

    #[test]
    fn test_crop_to_rect() {
        let rect = Rect::from_min_max(pos2(1.0, 1.0), pos2(3.0, 2.0));
        let cropped = CapturedImage::crop(&gradient(), Some(rect), 1.0);
        assert_eq!((cropped.width, cropped.height), (2, 1));
        assert_eq!(cropped.rgba, vec![1, 1, 0, 255, 2, 1, 0, 255]);
    }

    #[test]
    fn test_crop_scales_by_pixels_per_point_and_clamps() {
        let rect = Rect::from_min_max(pos2(1.0, 0.0), pos2(10.0, 10.0));
        let cropped = CapturedImage::crop(&gradient(), Some(rect), 2.0);
        assert_eq!((cropped.width, cropped.height), (2, 2));
        assert_eq!(&cropped.rgba[..4], &Color32::from_rgb(2, 0, 0).to_array());
    }

    #[test]
    fn test_whole_image_without_rect() {
        let cropped = CapturedImage::crop(&gradient(), None, 1.0);
        assert_eq!((cropped.width, cropped.height), (4, 2));
        assert_eq!(cropped.rgba.len(), 4 * 2 * 4);
    }

    #[test]
    fn test_png_extension_enforced() {
        assert_eq!(png_path(PathBuf::from("/tmp/plot.jpg")), PathBuf::from("/tmp/plot.png"));
        assert_eq!(png_path(PathBuf::from("/tmp/plot")), PathBuf::from("/tmp/plot.png"));
        assert_eq!(png_path(PathBuf::from("/tmp/plot.PNG")), PathBuf::from("/tmp/plot.PNG"));
        assert!(default_file_name().starts_with("inverse_axis_"));
        assert!(default_file_name().ends_with(".png"));
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let image = CapturedImage::crop(&gradient(), None, 1.0);

        let status = deliver(&ExportTarget::File(path.clone()), &image).unwrap();
        assert!(status.contains("plot.png"));

        let decoder = png::Decoder::new(BufReader::new(File::open(&path).unwrap()));
        let mut reader = decoder.read_info().unwrap();
        let mut pixels = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut pixels).unwrap();
        assert_eq!((frame.width, frame.height), (4, 2));
        assert_eq!(frame.color_type, png::ColorType::Rgba);
        // pixel (3, 1)
        assert_eq!(&pixels[(4 + 3) * 4..(4 + 3) * 4 + 4], &[3, 1, 0, 255]);
    }

    #[test]
    fn test_saved_png_records_300_dpi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dpi.png");
        save_png(&CapturedImage::crop(&gradient(), None, 1.0), &path).unwrap();

        let decoder = png::Decoder::new(BufReader::new(File::open(&path).unwrap()));
        let reader = decoder.read_info().unwrap();
        let dims = reader.info().pixel_dims.unwrap();
        assert_eq!(dims.unit, png::Unit::Meter);
        assert_eq!((dims.xppu, dims.yppu), (11_811, 11_811));
        // 11811 px/m is 300 dpi to the nearest pixel
        assert_eq!((dims.xppu as f64 * 0.0254).round() as u32, DPI);
    }

    #[test]
    fn test_empty_capture_rejected() {
        let rect = Rect::from_min_max(pos2(5.0, 5.0), pos2(6.0, 6.0));
        let image = CapturedImage::crop(&gradient(), Some(rect), 1.0);
        assert!(image.is_empty());
        assert!(deliver(&ExportTarget::Clipboard, &image).is_err());
    }
}
