use glam::{vec2, Vec2, Vec4};

use crate::{heat, Error, Result, Vertex};

/// How a [`Grid`] gets turned into vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridMode {
    /// One vertex per lattice point, drawn as a point list; each heat value
    /// colors one point.
    Points,

    /// Two triangles per cell, drawn as a triangle list; each heat value colors
    /// one cell.
    #[default]
    Triangles,
}

/// Regular grid spanning the whole normalized-device-coordinates square.
///
/// Rows go top-to-bottom and columns go left-to-right, i.e. point `(0, 0)` is
/// at `(-1, 1)` and point `(rows, cols)` is at `(1, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
}

impl Grid {
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns width and height of a single cell.
    pub fn cell_size(&self) -> Vec2 {
        vec2(2.0 / self.cols as f32, 2.0 / self.rows as f32)
    }

    /// Returns position of given lattice point; `row` can go up to `rows` and
    /// `col` can go up to `cols` (both inclusive).
    pub fn point(&self, row: u32, col: u32) -> Vec2 {
        let size = self.cell_size();

        vec2(size.x * col as f32 - 1.0, 1.0 - size.y * row as f32)
    }

    pub fn vertex_count(&self, mode: GridMode) -> usize {
        match mode {
            GridMode::Points => self.value_count(mode),
            GridMode::Triangles => self.value_count(mode) * 6,
        }
    }

    /// Returns how many heat values given mode consumes.
    pub fn value_count(&self, mode: GridMode) -> usize {
        let (rows, cols) = (self.rows as usize, self.cols as usize);

        match mode {
            GridMode::Points => (rows + 1) * (cols + 1),
            GridMode::Triangles => rows * cols,
        }
    }

    /// Returns the position each heat value describes: lattice points for
    /// [`GridMode::Points`], cell centers for [`GridMode::Triangles`].
    ///
    /// Items come in the same order [`Self::build()`] asks for colors.
    pub fn samples(&self, mode: GridMode) -> impl Iterator<Item = Vec2> + '_ {
        let (rows, cols) = match mode {
            GridMode::Points => (self.rows + 1, self.cols + 1),
            GridMode::Triangles => (self.rows, self.cols),
        };

        let offset = match mode {
            GridMode::Points => Vec2::ZERO,
            GridMode::Triangles => self.cell_size() * vec2(0.5, -0.5),
        };

        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| self.point(row, col) + offset)
        })
    }

    /// Lattice of `(rows + 1) * (cols + 1)` points, all of the same color.
    pub fn lattice(&self, color: Vec4) -> Vec<Vertex> {
        self.build(GridMode::Points, |_| color)
    }

    /// `rows * cols` cells, each made of two triangles of the same color.
    pub fn cells(&self, color: Vec4) -> Vec<Vertex> {
        self.build(GridMode::Triangles, |_| color)
    }

    /// Generates vertices for given mode, asking `color` for the color of each
    /// point (or each cell) in row-major order.
    pub fn build(
        &self,
        mode: GridMode,
        mut color: impl FnMut(usize) -> Vec4,
    ) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.vertex_count(mode));

        match mode {
            GridMode::Points => {
                for row in 0..=self.rows {
                    for col in 0..=self.cols {
                        let idx = (row * (self.cols + 1) + col) as usize;

                        vertices.push(Vertex::new(
                            self.point(row, col),
                            color(idx),
                        ));
                    }
                }
            }

            GridMode::Triangles => {
                for row in 0..self.rows {
                    for col in 0..self.cols {
                        let cell_color =
                            color((row * self.cols + col) as usize);

                        let tl = self.point(row, col);
                        let tr = self.point(row, col + 1);
                        let bl = self.point(row + 1, col);
                        let br = self.point(row + 1, col + 1);

                        vertices.extend(
                            [tl, bl, tr, bl, tr, br]
                                .map(|pos| Vertex::new(pos, cell_color)),
                        );
                    }
                }
            }
        }

        vertices
    }

    /// Generates vertices colored after given heat values, one value per
    /// point or per cell (see [`Self::value_count()`]).
    ///
    /// Values don't have to be normalized, see [`normalize()`].
    pub fn heatmap(
        &self,
        mode: GridMode,
        values: &[f32],
    ) -> Result<Vec<Vertex>> {
        let expected = self.value_count(mode);

        if values.len() != expected {
            return Err(Error::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }

        let values = normalize(values);

        Ok(self.build(mode, |idx| heat(values[idx])))
    }
}

/// Maps values onto `0.0..=1.0`, so that the smallest one becomes `0.0` and
/// the largest one becomes `1.0`.
///
/// Non-finite values and fields without any spread map to `0.0`.
pub fn normalize(values: &[f32]) -> Vec<f32> {
    let (min, max) = values
        .iter()
        .filter(|value| value.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &value| {
            (min.min(value), max.max(value))
        });

    // f64, so that spreads wider than `f32::MAX` don't overflow
    let (min, max) = (min as f64, max as f64);
    let range = max - min;

    values
        .iter()
        .map(|&value| {
            if value.is_finite() && range > 0.0 {
                ((value as f64 - min) / range) as f32
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec4;

    use super::*;

    const EPSILON: f32 = 0.0001;

    fn assert_pos(expected: Vec2, actual: Vec2) {
        assert_relative_eq!(expected.x, actual.x, epsilon = EPSILON);
        assert_relative_eq!(expected.y, actual.y, epsilon = EPSILON);
    }

    #[test]
    fn empty() {
        assert_eq!(
            Err(Error::EmptyGrid { rows: 0, cols: 4 }),
            Grid::new(0, 4)
        );

        assert_eq!(
            Err(Error::EmptyGrid { rows: 4, cols: 0 }),
            Grid::new(4, 0)
        );
    }

    #[test]
    fn counts() {
        let target = Grid::new(200, 100).unwrap();

        assert_eq!(201 * 101, target.value_count(GridMode::Points));
        assert_eq!(201 * 101, target.vertex_count(GridMode::Points));
        assert_eq!(200 * 100, target.value_count(GridMode::Triangles));
        assert_eq!(200 * 100 * 6, target.vertex_count(GridMode::Triangles));
    }

    #[test]
    fn lattice() {
        let color = vec4(0.0, 0.0, 0.0, 1.0);
        let target = Grid::new(2, 4).unwrap().lattice(color);

        assert_eq!(15, target.len());
        assert!(target.iter().all(|vertex| vertex.color == color));

        assert_pos(vec2(-1.0, 1.0), target[0].pos);
        assert_pos(vec2(-0.5, 1.0), target[1].pos);
        assert_pos(vec2(1.0, 1.0), target[4].pos);
        assert_pos(vec2(-1.0, 0.0), target[5].pos);
        assert_pos(vec2(1.0, -1.0), target[14].pos);
    }

    #[test]
    fn cells() {
        let color = vec4(0.5, 0.3, 0.5, 1.0);
        let target = Grid::new(2, 2).unwrap().cells(color);

        assert_eq!(24, target.len());
        assert!(target.iter().all(|vertex| vertex.color == color));

        // Top-left cell
        assert_pos(vec2(-1.0, 1.0), target[0].pos);
        assert_pos(vec2(-1.0, 0.0), target[1].pos);
        assert_pos(vec2(0.0, 1.0), target[2].pos);
        assert_pos(vec2(-1.0, 0.0), target[3].pos);
        assert_pos(vec2(0.0, 1.0), target[4].pos);
        assert_pos(vec2(0.0, 0.0), target[5].pos);

        // Bottom-right cell
        assert_pos(vec2(0.0, 0.0), target[18].pos);
        assert_pos(vec2(1.0, -1.0), target[23].pos);
    }

    #[test]
    fn samples() {
        let target = Grid::new(2, 2).unwrap();

        let points: Vec<_> = target.samples(GridMode::Points).collect();

        assert_eq!(9, points.len());
        assert_pos(vec2(-1.0, 1.0), points[0]);
        assert_pos(vec2(1.0, -1.0), points[8]);

        let centers: Vec<_> = target.samples(GridMode::Triangles).collect();

        assert_eq!(4, centers.len());
        assert_pos(vec2(-0.5, 0.5), centers[0]);
        assert_pos(vec2(0.5, 0.5), centers[1]);
        assert_pos(vec2(-0.5, -0.5), centers[2]);
        assert_pos(vec2(0.5, -0.5), centers[3]);
    }

    #[test]
    fn heatmap() {
        let target = Grid::new(1, 2).unwrap();

        let vertices = target
            .heatmap(GridMode::Triangles, &[10.0, 20.0])
            .unwrap();

        assert_eq!(12, vertices.len());
        assert!(vertices[..6].iter().all(|v| v.color == heat(0.0)));
        assert!(vertices[6..].iter().all(|v| v.color == heat(1.0)));

        let vertices = target
            .heatmap(GridMode::Points, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();

        assert_eq!(6, vertices.len());
        assert_eq!(heat(0.0), vertices[0].color);
        assert_eq!(heat(1.0), vertices[5].color);
    }

    #[test]
    fn heatmap_value_count_mismatch() {
        let target = Grid::new(1, 2).unwrap();

        assert_eq!(
            Err(Error::ValueCountMismatch {
                expected: 2,
                actual: 3
            }),
            target.heatmap(GridMode::Triangles, &[1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn normalization() {
        assert_eq!(
            vec![0.0, 0.25, 1.0, 0.5],
            normalize(&[-1.0, 0.0, 3.0, 1.0])
        );

        assert_eq!(vec![0.0, 0.0], normalize(&[7.0, 7.0]));

        assert_eq!(
            vec![0.0, 0.0, 1.0, 0.0],
            normalize(&[1.0, f32::NAN, 2.0, f32::INFINITY])
        );

        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn normalization_of_extreme_spread() {
        assert_eq!(
            vec![0.0, 0.5, 1.0],
            normalize(&[-f32::MAX, 0.0, f32::MAX])
        );

        let vertices = Grid::new(1, 3)
            .unwrap()
            .heatmap(GridMode::Triangles, &[-3.0e38, 0.0, 3.0e38])
            .unwrap();

        assert_eq!(heat(0.0), vertices[0].color);
        assert_eq!(heat(0.5), vertices[6].color);
        assert_eq!(heat(1.0), vertices[12].color);
    }
}
