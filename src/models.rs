use image::Rgba;

/// Fill color of every icon canvas.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 120, 212, 255]);

/// Color the glyph is drawn in.
pub const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The text rendered in the middle of each icon.
pub const GLYPH_TEXT: &str = "O";

/// Smallest font size (in pixels) used for any icon.
pub const MIN_FONT_SIZE: u32 = 8;

/// Font files tried in order. The first one is the preferred face; the rest
/// are common locations on other platforms.
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Arial.ttf",
    // macOS
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// One icon to generate: its edge length in pixels and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub path: &'static str,
}

/// Every icon the add-in manifest refers to.
pub const ICON_TARGETS: &[IconTarget] = &[
    IconTarget { size: 16, path: "assets/icon-16.png" },
    IconTarget { size: 32, path: "assets/icon-32.png" },
    IconTarget { size: 64, path: "assets/icon-64.png" },
    IconTarget { size: 80, path: "assets/icon-80.png" },
    IconTarget { size: 90, path: "assets/logo-filled.png" },
];

/// Ink bounding box of a piece of text, relative to its drawing anchor
/// (left edge, ascender line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
