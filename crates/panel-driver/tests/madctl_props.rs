//! Property-based tests for addressing-register and window math.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

#![allow(clippy::unwrap_used, clippy::expect_used)]
// Strategies index tables and build windows with raw math; allow at file level.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]

use panel_driver::orientation::madctl_value;
use panel_driver::{Area, ColorOrder, Orientation, MADCTL_ROTATIONS};

/// The four named rotations, for index-based strategies.
const NAMED: [Orientation; 4] = [
    Orientation::Portrait,
    Orientation::Landscape,
    Orientation::ReversePortrait,
    Orientation::ReverseLandscape,
];

proptest::proptest! {
    /// Raw orientations bypass the table for any value under both orders;
    /// the result is exactly the raw bits OR the color-order bit.
    #[test]
    fn raw_orientation_is_verbatim(value in 0u8..=255u8) {
        let rgb = madctl_value(ColorOrder::Rgb, Orientation::Raw(value), &MADCTL_ROTATIONS);
        assert_eq!(rgb, Ok(value));
        let bgr = madctl_value(ColorOrder::Bgr, Orientation::Raw(value), &MADCTL_ROTATIONS);
        assert_eq!(bgr, Ok(value | 0x08));
    }

    /// Every named rotation resolves against the standard table, and the
    /// color-order bit is the only difference between RGB and BGR.
    #[test]
    fn named_rotations_never_fail_standard_table(index in 0usize..4) {
        let orientation = NAMED[index];
        let rgb = madctl_value(ColorOrder::Rgb, orientation, &MADCTL_ROTATIONS)
            .expect("standard table covers all named rotations");
        let bgr = madctl_value(ColorOrder::Bgr, orientation, &MADCTL_ROTATIONS)
            .expect("standard table covers all named rotations");
        assert_eq!(rgb & 0x08, 0, "RGB must not set the order bit");
        assert_eq!(bgr, rgb | 0x08);
    }

    /// A named rotation either finds its table entry or errors; it never
    /// reads past the table. Tables of every length up to 4 are exercised.
    #[test]
    fn short_tables_error_instead_of_clamping(len in 0usize..=4, index in 0usize..4) {
        let orientation = NAMED[index];
        let result = madctl_value(ColorOrder::Rgb, orientation, &MADCTL_ROTATIONS[..len]);
        if index < len {
            assert_eq!(result, Ok(MADCTL_ROTATIONS[index]));
        } else {
            assert!(result.is_err(),
                "index {} must not resolve against a table of length {}", index, len);
        }
    }

    /// Area::full covers exactly width x height for any non-degenerate
    /// panel, with inclusive bounds.
    #[test]
    fn full_area_matches_geometry(width in 1u16..=4096, height in 1u16..=4096) {
        let area = Area::full(width, height);
        assert_eq!(area.x1, 0);
        assert_eq!(area.y1, 0);
        assert_eq!(area.width(), width);
        assert_eq!(area.height(), height);
    }

    /// Translation preserves the window's size whenever it stays inside the
    /// coordinate space.
    #[test]
    fn translation_preserves_size(
        x1 in 0u16..1000,
        y1 in 0u16..1000,
        w in 1u16..=500,
        h in 1u16..=500,
        dx in 0u16..1000,
        dy in 0u16..1000,
    ) {
        let area = Area::new(x1, y1, x1 + w - 1, y1 + h - 1);
        let moved = area.translated(dx, dy);
        assert_eq!(moved.width(), area.width());
        assert_eq!(moved.height(), area.height());
        assert_eq!(moved.x1, x1 + dx);
        assert_eq!(moved.y1, y1 + dy);
    }
}
