//! TikZ export of partitioned leaves and the curve through their centres

use std::path::Path;

use crate::curve::{LeafCell, Partitioning};
use crate::io::configuration::PARTITION_PALETTE;
use crate::io::error::{PeanoError, Result, WithPath, invalid_parameter};

/// Render leaves as TikZ drawing commands
///
/// Emits one `\definecolor` per partition, one filled rectangle per leaf in
/// curve order, and a single polyline through the leaf centres.
///
/// # Errors
///
/// Returns an error if:
/// - the partitioning does not cover exactly the given leaves
/// - a leaf is not two-dimensional
pub fn render_tikz(leaves: &[LeafCell<f64>], partitioning: &Partitioning) -> Result<String> {
    if partitioning.len() != leaves.len() {
        return Err(invalid_parameter(
            "partitioning",
            &partitioning.len(),
            &format!("expected one entry per leaf ({})", leaves.len()),
        ));
    }

    let mut out = String::new();
    for part in 0..partitioning.parts() {
        let [r, g, b] = palette_color(part);
        out.push_str(&format!("\\definecolor{{c{part}}}{{RGB}}{{{r},{g},{b}}}\n"));
    }

    let mut centres = Vec::with_capacity(leaves.len());
    for (index, leaf) in leaves.iter().enumerate() {
        let ([x0, y0], [w, h], [cx, cy]) = (
            planar(&leaf.offset)?,
            planar(&leaf.size)?,
            planar(&leaf.centre)?,
        );
        out.push_str(&format!(
            "\\draw[fill=c{},draw=black] ({x0:.6}, {y0:.6}) rectangle ({:.6}, {:.6});\n",
            partitioning.partition_of(index),
            x0 + w,
            y0 + h,
        ));
        centres.push(format!("({cx:.3},{cy:.3})"));
    }

    if !centres.is_empty() {
        out.push_str(&format!("\\draw[] {} ;\n", centres.join(" -- ")));
    }
    Ok(out)
}

/// Render leaves as TikZ and write them to `path`
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written
pub fn export_tikz(
    leaves: &[LeafCell<f64>],
    partitioning: &Partitioning,
    path: &Path,
) -> Result<()> {
    let document = render_tikz(leaves, partitioning)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    std::fs::write(path, document).with_path(path, "write tikz")
}

/// Palette entry of partition `part`, cycling through the palette
pub fn palette_color(part: usize) -> [u8; 3] {
    PARTITION_PALETTE
        .get(part % PARTITION_PALETTE.len())
        .copied()
        .unwrap_or([128, 128, 128])
}

pub(crate) fn planar(values: &[f64]) -> Result<[f64; 2]> {
    match values {
        [x, y] => Ok([*x, *y]),
        _ => Err(PeanoError::GeometryMismatch {
            expected: 2,
            found: values.len(),
        }),
    }
}
