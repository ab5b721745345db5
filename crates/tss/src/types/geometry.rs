//! Scalar, spacing, and offset types.

/// Unit of a parsed [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Character cells (standard terminal units).
    #[default]
    Cells,
    /// Percentage of a reference dimension.
    Percent,
}

/// The dimension a percentage scalar resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Width,
    Height,
    #[default]
    None,
}

/// A dimension value: magnitude, unit, and reference axis.
///
/// Resolution against actual terminal dimensions happens elsewhere; this
/// is only the parsed representation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scalar {
    pub value: f64,
    pub unit: Unit,
    pub axis: Axis,
}

impl Scalar {
    pub fn cells(value: f64, axis: Axis) -> Self {
        Self {
            value,
            unit: Unit::Cells,
            axis,
        }
    }

    pub fn percent(value: f64, axis: Axis) -> Self {
        Self {
            value,
            unit: Unit::Percent,
            axis,
        }
    }
}

/// A widget's visual position adjustment after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarOffset {
    pub x: Scalar,
    pub y: Scalar,
}

impl Default for ScalarOffset {
    fn default() -> Self {
        Self {
            x: Scalar::cells(0.0, Axis::Width),
            y: Scalar::cells(0.0, Axis::Height),
        }
    }
}

/// Spacing (margin or padding) in whole cells, one value per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn vertical_horizontal(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}
