use glam::{vec4, Vec4};

use crate::{Grid, GridMode, Result};

/// Describes what the heatmap draws and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatmapConfig {
    /// Number of rows the grid is split into.
    pub rows: u32,

    /// Number of columns the grid is split into.
    pub cols: u32,

    /// Whether the grid gets drawn as a lattice of points or as filled cells.
    pub mode: GridMode,

    /// Color every vertex has until heat values are provided.
    pub base_color: Vec4,

    /// Color the render target gets cleared to before drawing.
    pub clear_color: Vec4,
}

impl HeatmapConfig {
    /// Lattice of 200 rows and 100 columns of black points.
    pub fn points() -> Self {
        Self {
            rows: 200,
            cols: 100,
            mode: GridMode::Points,
            base_color: vec4(0.0, 0.0, 0.0, 1.0),
            ..Default::default()
        }
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.rows, self.cols)
    }

    pub fn validate(&self) -> Result<()> {
        self.grid().map(drop)
    }

    pub(crate) fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.clear_color.x as f64,
            g: self.clear_color.y as f64,
            b: self.clear_color.z as f64,
            a: self.clear_color.w as f64,
        }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 200,
            mode: GridMode::Triangles,
            base_color: vec4(0.5, 0.3, 0.5, 1.0),
            clear_color: vec4(1.0, 0.0, 0.0, 1.0),
        }
    }
}
