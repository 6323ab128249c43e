//! Spatial-subdivision motion histograms.
//!
//! Motion steps are binned by direction into 8 angular bins and accumulated
//! in the grid cell containing the step midpoint. Each nonempty cell
//! histogram is L1-normalized, which bounds the L2 distance between two
//! cell histograms by √2 and therefore the distance between two flattened
//! n×n vectors by √2·n².

use std::f32::consts::PI;

use crate::types::{FeatureVector, MotionPath};

/// Number of angular direction bins per grid cell.
pub const DIRECTION_BINS: usize = 8;

/// Per-cell and aggregate motion histograms for one shot.
#[derive(Debug, Clone, PartialEq)]
pub struct SubdivHist {
    /// Flattened n×n×8 per-cell histogram: row-major cell order, each
    /// cell's 8 bins contiguous.
    pub cells: FeatureVector,
    /// Global 8-bin direction histogram over all paths, independent of grid
    /// position.
    pub aggregate: FeatureVector,
}

/// Compute per-cell and aggregate direction histograms over motion paths.
///
/// Output dimensionality is fixed at `grid² · 8` and [`DIRECTION_BINS`]
/// regardless of input: with no usable motion (no paths, or no path with at
/// least two distinct consecutive points) both vectors are zero-filled.
pub fn subdiv_hist(grid: usize, paths: &[MotionPath]) -> SubdivHist {
    let grid = grid.max(1);
    let mut cells = vec![0.0f32; grid * grid * DIRECTION_BINS];
    let mut aggregate = vec![0.0f32; DIRECTION_BINS];

    for path in paths {
        for pair in path.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            let dx = x1 - x0;
            let dy = y1 - y0;
            if (dx == 0.0 && dy == 0.0) || !dx.is_finite() || !dy.is_finite() {
                // A stationary or degenerate sample carries no direction.
                continue;
            }
            let bin = direction_bin(dx, dy);
            let cell = cell_index(grid, (x0 + x1) * 0.5, (y0 + y1) * 0.5);
            cells[cell * DIRECTION_BINS + bin] += 1.0;
            aggregate[bin] += 1.0;
        }
    }

    for cell in cells.chunks_mut(DIRECTION_BINS) {
        normalize_l1(cell);
    }
    normalize_l1(&mut aggregate);

    SubdivHist { cells, aggregate }
}

/// Map a direction vector to one of the 8 angular bins.
#[inline]
fn direction_bin(dx: f32, dy: f32) -> usize {
    // atan2 yields (-π, π]; shift into [0, 2π] and scale onto the bins.
    let angle = dy.atan2(dx) + PI;
    let scaled = angle / (2.0 * PI) * DIRECTION_BINS as f32;
    (scaled as usize).min(DIRECTION_BINS - 1)
}

/// Clamp a normalized coordinate into the grid and return the flat
/// row-major cell index.
#[inline]
fn cell_index(grid: usize, x: f32, y: f32) -> usize {
    let col = ((x * grid as f32) as usize).min(grid - 1);
    let row = ((y * grid as f32) as usize).min(grid - 1);
    row * grid + col
}

#[inline]
fn normalize_l1(bins: &mut [f32]) {
    let sum: f32 = bins.iter().sum();
    if sum > 0.0 {
        for bin in bins {
            *bin /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(f32, f32)]) -> MotionPath {
        MotionPath::new(points.to_vec())
    }

    #[test]
    fn no_motion_yields_zero_filled_vectors_of_fixed_length() {
        let hist = subdiv_hist(5, &[]);
        assert_eq!(hist.cells.len(), 200);
        assert_eq!(hist.aggregate.len(), 8);
        assert!(hist.cells.iter().all(|&v| v == 0.0));
        assert!(hist.aggregate.iter().all(|&v| v == 0.0));

        // A single-point path carries no motion either.
        let hist = subdiv_hist(5, &[path(&[(0.5, 0.5)])]);
        assert!(hist.cells.iter().all(|&v| v == 0.0));
        assert!(hist.aggregate.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn dimensionality_is_independent_of_path_count() {
        let paths = vec![
            path(&[(0.1, 0.1), (0.2, 0.1)]),
            path(&[(0.8, 0.8), (0.8, 0.9), (0.7, 0.9)]),
        ];
        let hist = subdiv_hist(5, &paths);
        assert_eq!(hist.cells.len(), 200);
        assert_eq!(hist.aggregate.len(), 8);
    }

    #[test]
    fn one_step_fills_exactly_one_cell_bin() {
        let hist = subdiv_hist(5, &[path(&[(0.05, 0.05), (0.15, 0.05)])]);
        let nonzero: Vec<usize> = hist
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(nonzero.len(), 1);
        // Midpoint (0.1, 0.05) falls into the top-left cell.
        assert!(nonzero[0] < DIRECTION_BINS);
        assert_eq!(hist.cells[nonzero[0]], 1.0);
        assert_eq!(hist.aggregate.iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn nonempty_cells_are_l1_normalized() {
        let paths = vec![
            path(&[(0.1, 0.1), (0.2, 0.2), (0.1, 0.2), (0.1, 0.1)]),
            path(&[(0.9, 0.9), (0.85, 0.9)]),
        ];
        let hist = subdiv_hist(5, &paths);
        for cell in hist.cells.chunks(DIRECTION_BINS) {
            let sum: f32 = cell.iter().sum();
            assert!(sum == 0.0 || (sum - 1.0).abs() < 1e-6, "cell sum {sum}");
        }
        let total: f32 = hist.aggregate.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposite_directions_land_in_different_bins() {
        let right = subdiv_hist(1, &[path(&[(0.4, 0.5), (0.6, 0.5)])]);
        let left = subdiv_hist(1, &[path(&[(0.6, 0.5), (0.4, 0.5)])]);
        assert_ne!(right.cells, left.cells);
    }

    #[test]
    fn out_of_range_coordinates_clamp_into_the_grid() {
        let hist = subdiv_hist(5, &[path(&[(-0.3, 1.7), (-0.1, 1.9)])]);
        let total: f32 = hist.cells.iter().sum();
        assert_eq!(total, 1.0);
    }

    #[test]
    fn every_direction_maps_to_a_valid_bin() {
        for i in 0..64 {
            let angle = i as f32 / 64.0 * 2.0 * PI;
            let bin = direction_bin(angle.cos(), angle.sin());
            assert!(bin < DIRECTION_BINS);
        }
        assert!(direction_bin(-1.0, 0.0) < DIRECTION_BINS);
    }
}
