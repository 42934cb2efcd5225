use std::collections::HashSet;

use addin_icons::models::{BACKGROUND, FOREGROUND};
use addin_icons::{Error, GlyphFont, ICON_TARGETS, create_icon, render_icon};
use tempfile::TempDir;

#[test]
fn targets_match_manifest_sizes() {
    let sizes: Vec<u32> = ICON_TARGETS.iter().map(|t| t.size).collect();
    assert_eq!(sizes, vec![16, 32, 64, 80, 90]);
    assert_eq!(ICON_TARGETS[4].path, "assets/logo-filled.png");

    let paths: HashSet<&str> = ICON_TARGETS.iter().map(|t| t.path).collect();
    assert_eq!(paths.len(), ICON_TARGETS.len());
}

#[test]
fn every_target_is_written_with_its_size_and_background() {
    let dir = TempDir::new().unwrap();

    for target in ICON_TARGETS {
        let path = dir.path().join(target.path);
        create_icon(target.size, &path).unwrap();
        assert!(path.exists(), "missing {:?}", path);

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (target.size, target.size));
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
        let edge = target.size - 1;
        assert_eq!(*image.get_pixel(edge, edge), BACKGROUND);
    }
}

#[test]
fn written_icon_contains_the_glyph() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("icon-64.png");
    create_icon(64, &path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert!(image.pixels().any(|p| *p == FOREGROUND));
}

#[test]
fn bitmap_fallback_renders_the_same_canvas_every_time() {
    let a = render_icon(32, &GlyphFont::Bitmap).unwrap();
    let b = render_icon(32, &GlyphFont::Bitmap).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
    assert!(a.pixels().any(|p| *p == FOREGROUND));
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let result = create_icon(16, blocker.join("icon-16.png"));
    assert!(matches!(result, Err(Error::Io(_))));
}
