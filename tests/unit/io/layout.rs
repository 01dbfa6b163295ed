//! Tests for layout mode selection

#[cfg(test)]
mod tests {

    use clap::ValueEnum;
    use tilegrid::Grid;
    use tilegrid::io::layout::LayoutMode;

    // Tests each mode dispatches to the matching layout
    // Verified by swapping the match arms
    #[test]
    fn test_render_modes() {
        let mut grid: Grid = Grid::new(2, 2);
        grid.set_tile(0, 0, 1);
        grid.set_tile(1, 1, 4);

        assert_eq!(LayoutMode::Raw.render(&grid), "10\n04");
        assert_eq!(LayoutMode::Formatted.render(&grid), "# \n ?");
    }

    // Tests formatted is the default mode
    // Verified by moving the default attribute
    #[test]
    fn test_default_mode() {
        assert_eq!(LayoutMode::default(), LayoutMode::Formatted);
    }

    // Tests mode names accepted on the command line
    // Verified by renaming a variant
    #[test]
    fn test_value_enum_names() {
        assert_eq!(LayoutMode::from_str("raw", true), Ok(LayoutMode::Raw));
        assert_eq!(
            LayoutMode::from_str("formatted", true),
            Ok(LayoutMode::Formatted)
        );
        assert!(LayoutMode::from_str("pretty", true).is_err());
    }
}
