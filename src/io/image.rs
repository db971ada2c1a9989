//! PNG export of partitioned leaves with cell borders and the curve overlay

use std::path::Path;

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::curve::{LeafCell, Partitioning};
use crate::io::configuration::{BACKGROUND_COLOR, BORDER_COLOR, CURVE_COLOR, MAX_RESOLUTION};
use crate::io::error::{PeanoError, Result, WithPath, invalid_parameter};
use crate::io::tikz::{palette_color, planar};
use crate::spatial::CellGeometry;

// Pixel-space rectangle, half-open in both axes, row 0 at the top
#[derive(Debug, Clone, Copy)]
struct PixelRect {
    col_start: usize,
    col_end: usize,
    row_start: usize,
    row_end: usize,
}

/// Maps 2-D domain coordinates onto a square pixel grid
#[derive(Debug, Clone, Copy)]
struct Viewport {
    origin: [f64; 2],
    extent: [f64; 2],
    resolution: usize,
}

impl Viewport {
    fn new(domain: &CellGeometry<f64>, resolution: u32) -> Result<Self> {
        if resolution == 0 || resolution > MAX_RESOLUTION {
            return Err(invalid_parameter(
                "resolution",
                &resolution,
                &format!("must be between 1 and {MAX_RESOLUTION} pixels"),
            ));
        }
        Ok(Self {
            origin: planar(domain.offset())?,
            extent: planar(domain.size())?,
            resolution: resolution as usize,
        })
    }

    // Continuous pixel coordinate along `axis`, growing rightwards / downwards
    const fn to_pixel(&self, axis: usize, value: f64) -> f64 {
        let scale = self.resolution as f64;
        if axis == 0 {
            (value - self.origin[0]) / self.extent[0] * scale
        } else {
            (1.0 - (value - self.origin[1]) / self.extent[1]) * scale
        }
    }

    fn clamp(&self, pixel: f64) -> usize {
        (pixel.round().max(0.0) as usize).min(self.resolution)
    }

    fn rect(&self, offset: [f64; 2], size: [f64; 2]) -> PixelRect {
        PixelRect {
            col_start: self.clamp(self.to_pixel(0, offset[0])),
            col_end: self.clamp(self.to_pixel(0, offset[0] + size[0])),
            row_start: self.clamp(self.to_pixel(1, offset[1] + size[1])),
            row_end: self.clamp(self.to_pixel(1, offset[1])),
        }
    }

    fn point(&self, point: [f64; 2]) -> (i64, i64) {
        (
            self.to_pixel(0, point[0]).floor() as i64,
            self.to_pixel(1, point[1]).floor() as i64,
        )
    }
}

/// Label every pixel with the partition of the leaf covering it
///
/// Pixels covered by no leaf are 0, pixels of partition `k` are `k + 1`.
/// Rows run top to bottom.
///
/// # Errors
///
/// Returns an error if:
/// - the resolution is zero or above [`MAX_RESOLUTION`]
/// - the domain or a leaf is not two-dimensional
/// - the partitioning does not cover exactly the given leaves
pub fn rasterise_partitions(
    domain: &CellGeometry<f64>,
    leaves: &[LeafCell<f64>],
    partitioning: &Partitioning,
    resolution: u32,
) -> Result<Array2<u32>> {
    if partitioning.len() != leaves.len() {
        return Err(invalid_parameter(
            "partitioning",
            &partitioning.len(),
            &format!("expected one entry per leaf ({})", leaves.len()),
        ));
    }

    let viewport = Viewport::new(domain, resolution)?;
    let mut labels = Array2::<u32>::zeros((viewport.resolution, viewport.resolution));

    for (index, leaf) in leaves.iter().enumerate() {
        let rect = viewport.rect(planar(&leaf.offset)?, planar(&leaf.size)?);
        let label = partitioning.partition_of(index) as u32 + 1;
        for row in rect.row_start..rect.row_end {
            for col in rect.col_start..rect.col_end {
                if let Some(cell) = labels.get_mut((row, col)) {
                    *cell = label;
                }
            }
        }
    }

    Ok(labels)
}

/// Render partitioned leaves to an RGBA image
///
/// # Errors
///
/// Returns an error under the same conditions as [`rasterise_partitions`]
pub fn render_image(
    domain: &CellGeometry<f64>,
    leaves: &[LeafCell<f64>],
    partitioning: &Partitioning,
    resolution: u32,
) -> Result<RgbaImage> {
    let labels = rasterise_partitions(domain, leaves, partitioning, resolution)?;
    let viewport = Viewport::new(domain, resolution)?;

    let mut img = RgbaImage::from_fn(resolution, resolution, |x, y| {
        match labels.get((y as usize, x as usize)).copied().unwrap_or(0) {
            0 => Rgba(BACKGROUND_COLOR),
            label => {
                let [r, g, b] = palette_color(label as usize - 1);
                Rgba([r, g, b, 255])
            }
        }
    });

    for leaf in leaves {
        let rect = viewport.rect(planar(&leaf.offset)?, planar(&leaf.size)?);
        draw_border(&mut img, rect);
    }

    let mut previous = None;
    for leaf in leaves {
        let current = viewport.point(planar(&leaf.centre)?);
        if let Some(start) = previous {
            draw_line(&mut img, start, current);
        }
        previous = Some(current);
    }

    Ok(img)
}

/// Render partitioned leaves and save them as PNG
///
/// # Errors
///
/// Returns an error if:
/// - rendering fails (see [`render_image`])
/// - the parent directory cannot be created
/// - the image cannot be encoded or saved
pub fn export_png(
    domain: &CellGeometry<f64>,
    leaves: &[LeafCell<f64>],
    partitioning: &Partitioning,
    resolution: u32,
    path: &Path,
) -> Result<()> {
    let img = render_image(domain, leaves, partitioning, resolution)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(path).map_err(|e| PeanoError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

fn draw_border(img: &mut RgbaImage, rect: PixelRect) {
    if rect.col_end <= rect.col_start || rect.row_end <= rect.row_start {
        return;
    }
    for col in rect.col_start..rect.col_end {
        set_pixel(img, col as i64, rect.row_start as i64, BORDER_COLOR);
        set_pixel(img, col as i64, rect.row_end as i64 - 1, BORDER_COLOR);
    }
    for row in rect.row_start..rect.row_end {
        set_pixel(img, rect.col_start as i64, row as i64, BORDER_COLOR);
        set_pixel(img, rect.col_end as i64 - 1, row as i64, BORDER_COLOR);
    }
}

// Bresenham between two pixel centres
fn draw_line(img: &mut RgbaImage, start: (i64, i64), end: (i64, i64)) {
    let (mut x, mut y) = start;
    let dx = (end.0 - x).abs();
    let dy = -(end.1 - y).abs();
    let step_x = if x < end.0 { 1 } else { -1 };
    let step_y = if y < end.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        set_pixel(img, x, y, CURVE_COLOR);
        if x == end.0 && y == end.1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }
}

fn set_pixel(img: &mut RgbaImage, x: i64, y: i64, color: [u8; 4]) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
        *pixel = Rgba(color);
    }
}
