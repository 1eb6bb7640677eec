use crate::compositor::Point;

/// Size of one physical panel
///
/// Panels are chained in a fixed cascade order, top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub panel_width: usize,
    pub panel_height: usize,
}

impl PanelLayout {
    pub const fn new(panel_width: usize, panel_height: usize) -> Self {
        Self {
            panel_width,
            panel_height,
        }
    }

    /// Top-left pixel of a panel
    pub const fn panel_origin(self, panel_x: usize, panel_y: usize) -> Point {
        Point::new(panel_x * self.panel_width, panel_y * self.panel_height)
    }
}

/// Frame buffer size that cannot be split into whole panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    PanelSizeZero,
    PanelMismatch,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PanelSizeZero => f.write_str("panel size must not be zero"),
            Self::PanelMismatch => f.write_str("frame does not split into whole panels"),
        }
    }
}

/// How pixels within a panel are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOrder {
    /// Alternate column direction on odd rows
    pub serpentine: bool,
    /// Column direction of even rows
    pub left_to_right: bool,
}

impl ScanOrder {
    pub const PROGRESSIVE: Self = Self {
        serpentine: false,
        left_to_right: true,
    };

    pub const fn new(serpentine: bool, left_to_right: bool) -> Self {
        Self {
            serpentine,
            left_to_right,
        }
    }

    /// Column direction of a row within a panel
    pub const fn row_left_to_right(self, row: usize) -> bool {
        if self.serpentine && row % 2 == 1 {
            !self.left_to_right
        } else {
            self.left_to_right
        }
    }
}

impl Default for ScanOrder {
    fn default() -> Self {
        Self::PROGRESSIVE
    }
}
