/// HSV to RGB with every channel in `[0, 1]`. Hue wraps, so `1.25` and
/// `-0.75` both land on `0.25`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let c = v * s;
    let h_prime = h * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(rgb: [f32; 3], expected: [f32; 3]) {
        for i in 0..3 {
            assert!((rgb[i] - expected[i]).abs() < 0.01, "{:?} vs {:?}", rgb, expected);
        }
    }

    #[test]
    fn test_hsv_to_rgb_red() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv_to_rgb_green_and_blue() {
        assert_rgb(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        assert_rgb(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsv_to_rgb_white() {
        assert_rgb(hsv_to_rgb(0.0, 0.0, 1.0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hsv_to_rgb_hue_wraps() {
        assert_rgb(hsv_to_rgb(1.25, 0.8, 0.6), hsv_to_rgb(0.25, 0.8, 0.6));
        assert_rgb(hsv_to_rgb(-0.75, 0.8, 0.6), hsv_to_rgb(0.25, 0.8, 0.6));
    }
}
