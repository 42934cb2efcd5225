use crate::models::MIN_FONT_SIZE;

/// Font size in pixels for an icon of the given edge length.
pub fn font_size_for(size: u32) -> u32 {
    (size / 2).max(MIN_FONT_SIZE)
}

/// Anchor position that centers a `text_width` x `text_height` box on a
/// square canvas. Rounds toward negative infinity, so text larger than the
/// canvas starts left of / above the edge.
pub fn centered_origin(canvas_size: u32, text_width: i32, text_height: i32) -> (i32, i32) {
    let size = canvas_size as i32;
    let x = (size - text_width).div_euclid(2);
    let y = (size - text_height).div_euclid(2);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_is_half_the_icon() {
        assert_eq!(font_size_for(32), 16);
        assert_eq!(font_size_for(90), 45);
        assert_eq!(font_size_for(81), 40);
    }

    #[test]
    fn font_size_has_a_floor() {
        assert_eq!(font_size_for(16), 8);
        assert_eq!(font_size_for(10), 8);
        assert_eq!(font_size_for(1), 8);
    }

    #[test]
    fn centering_uses_floor_division() {
        assert_eq!(centered_origin(16, 5, 7), (5, 4));
        assert_eq!(centered_origin(64, 20, 20), (22, 22));
        // Oversized text: -3 / 2 floors to -2
        assert_eq!(centered_origin(16, 19, 19), (-2, -2));
    }
}
