//! Assertion helpers for tests.

use palettegen::{Hcl, Lab, Srgb};
use pretty_assertions::assert_eq;

/// Assert the palette has `count` displayable colors
pub fn assert_palette(colors: &[Srgb], count: usize) {
    assert_eq!(colors.len(), count, "Wrong palette size: {colors:?}");
    for c in colors {
        assert!(c.is_in_gamut(), "Color {c:?} is out of gamut");
    }
}

/// Assert no two colors are the same
pub fn assert_distinct(colors: &[Srgb]) {
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert!(a != b, "Duplicate color {a} in {colors:?}");
        }
    }
}

/// Assert every color's HCL satisfies `check`, with conversion slack built
/// into the caller's bounds
pub fn assert_all_hcl(colors: &[Srgb], check: impl Fn(Hcl) -> bool) {
    for &c in colors {
        let hcl = Hcl::from(Lab::from(c));
        assert!(check(hcl), "Color {c} ({hcl:?}) violates the constraint");
    }
}

/// Assert text is one lowercase `#rrggbb` per line
pub fn assert_hex_lines(text: &str, count: usize) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), count, "Output was:\n{text}");
    for line in lines {
        assert!(
            line.len() == 7
                && line.starts_with('#')
                && line[1..].chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()),
            "Not a hex color line: {line:?}"
        );
    }
}
