//! [`Area`] conversions for `embedded-graphics` based renderers.
//!
//! `Rectangle` is exclusive-size, [`Area`] is inclusive-bounds; the
//! conversions carry that shift so renderers hand their dirty rectangle
//! straight to [`PanelDriver::flush`](crate::PanelDriver::flush).

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::bus::Area;

/// The rectangle does not fit the panel coordinate space: negative origin,
/// zero size, or bounds past `u16::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RectOutOfRange;

impl core::fmt::Display for RectOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "rectangle does not fit the panel coordinate space")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RectOutOfRange {}

impl From<Area> for Rectangle {
    fn from(area: Area) -> Self {
        Rectangle::new(
            Point::new(i32::from(area.x1), i32::from(area.y1)),
            Size::new(u32::from(area.width()), u32::from(area.height())),
        )
    }
}

impl TryFrom<Rectangle> for Area {
    type Error = RectOutOfRange;

    fn try_from(rect: Rectangle) -> Result<Self, Self::Error> {
        // None for zero-sized rectangles, which have no inclusive bounds.
        let bottom_right = rect.bottom_right().ok_or(RectOutOfRange)?;
        let x1 = u16::try_from(rect.top_left.x).map_err(|_| RectOutOfRange)?;
        let y1 = u16::try_from(rect.top_left.y).map_err(|_| RectOutOfRange)?;
        let x2 = u16::try_from(bottom_right.x).map_err(|_| RectOutOfRange)?;
        let y2 = u16::try_from(bottom_right.y).map_err(|_| RectOutOfRange)?;
        Ok(Area::new(x1, y1, x2, y2))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let area = Area::new(10, 20, 59, 79);
        let rect = Rectangle::from(area);
        assert_eq!(rect.top_left, Point::new(10, 20));
        assert_eq!(rect.size, Size::new(50, 60));
        assert_eq!(Area::try_from(rect), Ok(area));
    }

    #[test]
    fn test_negative_origin_rejected() {
        let rect = Rectangle::new(Point::new(-1, 0), Size::new(10, 10));
        assert_eq!(Area::try_from(rect), Err(RectOutOfRange));
    }

    #[test]
    fn test_zero_size_rejected() {
        let rect = Rectangle::new(Point::new(0, 0), Size::new(0, 10));
        assert_eq!(Area::try_from(rect), Err(RectOutOfRange));
    }

    #[test]
    fn test_overflowing_bounds_rejected() {
        let rect = Rectangle::new(Point::new(65_530, 0), Size::new(10, 10));
        assert_eq!(Area::try_from(rect), Err(RectOutOfRange));
    }
}
