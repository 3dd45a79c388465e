//! Pixel-scale parameters shared by the packer and the timeline helpers.

/// Pixel scale of the day column.
///
/// `hour_height` is the vertical extent of one hour; `left_margin` is the
/// gutter reserved on the left for the time-axis labels. The defaults give a
/// 2400 px midnight-to-midnight column with a 50 px gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub hour_height: f64,
    pub left_margin: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            hour_height: 100.0,
            left_margin: 50.0,
        }
    }
}
