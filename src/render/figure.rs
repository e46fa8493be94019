//! A renderable decision-boundary figure: filled class regions plus labelled points.

use std::path::Path;

use num_traits::{AsPrimitive, Float, ToPrimitive};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::common_types::Dataset;
use crate::config::PlotConfig;
use crate::error::{PlotError, PlotResult};
use crate::mesh::GridSpec;

use super::classification::ClassificationMap;
use super::colormap::{NEGATIVE_REGION, POSITIVE_REGION, normalize, over_white, spectral};

/// Output pixels per typographic point (100 dpi).
const PIXELS_PER_POINT: f64 = 100.0 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub width: u32,
    pub height: u32,
    /// Marker area in points squared; the marker diameter is its square root.
    pub marker_size: f64,
    pub region_alpha: f64,
}

impl From<&PlotConfig> for FigureStyle {
    fn from(config: &PlotConfig) -> Self {
        FigureStyle {
            width: config.width,
            height: config.height,
            marker_size: config.marker_size,
            region_alpha: config.region_alpha,
        }
    }
}

/// Everything needed to draw the plot, detached from any backend.
/// The caller decides where it goes: a PNG or SVG file, or an RGB buffer.
#[derive(Debug, Clone)]
pub struct Figure {
    xs: Vec<f64>,
    ys: Vec<f64>,
    step: (f64, f64),
    map: ClassificationMap,
    points: Vec<(f64, f64)>,
    point_colors: Vec<RGBColor>,
    style: FigureStyle,
}

impl Figure {
    pub(crate) fn new<F, L>(
        grid: &GridSpec<F>,
        map: ClassificationMap,
        dataset: &Dataset<F, L>,
        style: FigureStyle,
    ) -> Self
    where
        F: Float + AsPrimitive<f64>,
        L: ToPrimitive,
    {
        let points = dataset
            .points()
            .iter()
            .map(|&[x, y]| (x.as_(), y.as_()))
            .collect();
        let point_colors = normalize(&dataset.labels_f64())
            .into_iter()
            .map(spectral)
            .collect();
        Figure {
            xs: grid.x().samples().map(|v| v.as_()).collect(),
            ys: grid.y().samples().map(|v| v.as_()).collect(),
            step: (grid.x().step.as_(), grid.y().step.as_()),
            map,
            points,
            point_colors,
            style,
        }
    }

    pub fn classification_map(&self) -> &ClassificationMap {
        &self.map
    }

    pub fn style(&self) -> FigureStyle {
        self.style
    }

    pub fn point_colors(&self) -> &[RGBColor] {
        &self.point_colors
    }

    /// X axis limits: the first and last x sample of the grid.
    pub fn x_limits(&self) -> (f64, f64) {
        axis_limits(&self.xs, self.step.0)
    }

    /// Y axis limits: the first and last y sample of the grid.
    pub fn y_limits(&self) -> (f64, f64) {
        axis_limits(&self.ys, self.step.1)
    }

    /// Marker radius in pixels.
    pub fn marker_radius(&self) -> i32 {
        let radius = self.style.marker_size.sqrt() / 2.0 * PIXELS_PER_POINT;
        radius.round().max(1.0) as i32
    }

    /// Draws onto any plotters drawing area.
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> PlotResult<()> {
        root.fill(&WHITE).map_err(render_error)?;

        let (x0, x1) = self.x_limits();
        let (y0, y1) = self.y_limits();
        let mut chart = ChartBuilder::on(root)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(render_error)?;

        // Each node owns one step-sized cell centered on it.
        let negative = over_white(NEGATIVE_REGION, self.style.region_alpha);
        let positive = over_white(POSITIVE_REGION, self.style.region_alpha);
        let (half_x, half_y) = (self.step.0 / 2.0, self.step.1 / 2.0);
        chart
            .draw_series(self.map.cells().map(|(row, col, is_positive)| {
                let (x, y) = (self.xs[col], self.ys[row]);
                let color = if is_positive { positive } else { negative };
                Rectangle::new(
                    [(x - half_x, y - half_y), (x + half_x, y + half_y)],
                    color.filled(),
                )
            }))
            .map_err(render_error)?;

        let radius = self.marker_radius();
        chart
            .draw_series(
                self.points
                    .iter()
                    .zip(self.point_colors.iter())
                    .map(|(&point, &color)| Circle::new(point, radius, color.filled())),
            )
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }

    /// Renders into a fresh RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(&self) -> PlotResult<Vec<u8>> {
        let (width, height) = (self.style.width, self.style.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(buffer)
    }

    /// Writes a bitmap; the format follows the file extension (`.png`, `.bmp`, ...).
    pub fn render_bitmap(&self, path: &Path) -> PlotResult<()> {
        let size = (self.style.width, self.style.height);
        let root = BitMapBackend::new(path, size).into_drawing_area();
        self.draw(&root)?;
        info!(path = %path.display(), width = size.0, height = size.1, "Rendered decision boundary bitmap");
        Ok(())
    }

    pub fn render_svg(&self, path: &Path) -> PlotResult<()> {
        let size = (self.style.width, self.style.height);
        let root = SVGBackend::new(path, size).into_drawing_area();
        self.draw(&root)?;
        info!(path = %path.display(), width = size.0, height = size.1, "Rendered decision boundary SVG");
        Ok(())
    }
}

/// A single-sample axis is widened by half a step on each side so the range is never empty.
fn axis_limits(samples: &[f64], step: f64) -> (f64, f64) {
    let first = samples.first().copied().unwrap_or(0.0);
    let last = samples.last().copied().unwrap_or(first);
    if last > first {
        (first, last)
    } else {
        (first - step / 2.0, first + step / 2.0)
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}
