use glam::DVec2;

use super::constants::*;

/// Geometry and falloff parameters for the dotted grid background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub stride: f64,
    pub max_distance: f64,
    pub base_opacity: f64,
    pub base_radius: f64,
    pub opacity_gain: f64,
    pub radius_gain: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            stride: GRID_STRIDE,
            max_distance: GRID_MAX_DISTANCE,
            base_opacity: GRID_BASE_OPACITY,
            base_radius: GRID_BASE_RADIUS,
            opacity_gain: GRID_OPACITY_GAIN,
            radius_gain: GRID_RADIUS_GAIN,
        }
    }
}

/// One lattice point as it should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDot {
    pub pos: DVec2,
    pub opacity: f64,
    pub radius: f64,
    /// Pointer is within `max_distance`; links to the right/lower neighbours
    /// are drawn only for such points.
    pub near: bool,
    pub link_right: bool,
    pub link_down: bool,
}

impl GridDot {
    #[inline]
    pub fn link_opacity(&self) -> f64 {
        self.opacity * GRID_LINK_OPACITY_RATIO
    }
}

#[inline]
pub fn falloff(distance: f64, params: &GridParams) -> (f64, f64) {
    if distance < params.max_distance {
        let factor = 1.0 - distance / params.max_distance;
        (
            params.base_opacity + factor * params.opacity_gain,
            params.base_radius + factor * params.radius_gain,
        )
    } else {
        (params.base_opacity, params.base_radius)
    }
}

/// Evaluate a single lattice point against the pointer position.
pub fn dot_at(pos: DVec2, pointer: DVec2, size: DVec2, params: &GridParams) -> GridDot {
    let distance = pos.distance(pointer);
    let (opacity, radius) = falloff(distance, params);
    let near = distance < params.max_distance;
    GridDot {
        pos,
        opacity,
        radius,
        near,
        link_right: near && pos.x + params.stride < size.x,
        link_down: near && pos.y + params.stride < size.y,
    }
}

/// Lattice coordinates along one axis: `0, stride, 2*stride, ... < extent`.
pub fn axis(extent: f64, stride: f64) -> impl Iterator<Item = f64> {
    let count = if stride > 0.0 && extent > 0.0 {
        (extent / stride).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |i| i as f64 * stride)
}

/// All lattice points of a `size` surface, column-major like the draw loop.
pub fn lattice(size: DVec2, pointer: DVec2, params: GridParams) -> impl Iterator<Item = GridDot> {
    axis(size.x, params.stride).flat_map(move |x| {
        axis(size.y, params.stride).map(move |y| dot_at(DVec2::new(x, y), pointer, size, &params))
    })
}
