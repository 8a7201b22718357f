//! Loading complete themes from disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use decor_theme::{
    Bevel, Button, ButtonState, ColorId, Dim, Element, Focus, Gradient, Justify, LoadOptions,
    MaskId, Relief, Rgb, SearchPaths, StyleId, Texture, ThemeLoader,
};
use tempfile::TempDir;

const THEMERC: &str = r#"! A small but complete theme.
#include "colors"

border.width: 2
padding.width: 4
window.handle.width: 5
menu.overlap: 200

window.active.title.bg: Raised Gradient Diagonal Bevel2
window.active.title.bg.color: #3465a4
window.active.title.bg.colorTo: #204a87
window.inactive.title.bg: Flat Solid Border
window.inactive.title.bg.color: #d3d7cf
window.inactive.title.bg.border.color: gray40

window.active.label.bg: ParentRelative
window.inactive.label.bg: parent-relative
window.label.text.justify: center
window.active.label.text.font: shadow=y:shadowoffset=1:shadowtint=-40

*.button.unpressed.bg: Flat Solid
window.active.button.pressed.bg: Sunken Solid
window.active.button.pressed.bg.color: rgb:0/0/0

menu.items.bg: Flat Solid Interlaced
menu.items.bg.color: #eeeeec
menu.title.bg: Raised Gradient SplitVertical
menu.title.text.justify: Right
menu.items.font: shadow=y
"#;

const COLORS: &str = "window.active.border.color: #2e3436\n\
window.active.label.text.color: white\n\
menu.items.active.text.color: rgb:f/8/0\n";

const MAX_XBM: &str = "#define max_width 4\n#define max_height 4\n\
static unsigned char max_bits[] = {\n   0x0f, 0x09, 0x09, 0x0f };\n";

fn install(root: &Path, name: &str) {
    let dir = root.join(name).join("openbox-3");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("themerc"), THEMERC).unwrap();
    fs::write(dir.join("colors"), COLORS).unwrap();
    fs::write(dir.join("max.xbm"), MAX_XBM).unwrap();
    fs::write(dir.join("close_hover.xbm"), "not a bitmap").unwrap();
}

fn load(name: &str) -> (TempDir, decor_theme::Theme) {
    let root = TempDir::new().unwrap();
    install(root.path(), name);
    let loader = ThemeLoader::new(
        LoadOptions::default()
            .search_paths(SearchPaths::new(None, vec![]).with_theme_dir(root.path()))
            .allow_fallback(false),
    );
    let theme = loader.load(Some(name)).unwrap();
    (root, theme)
}

// =============================================================================
// Dimensions and colors
// =============================================================================

#[test]
fn test_dimensions() {
    let (_root, theme) = load("Demo");
    assert_eq!(theme.dim(Dim::FrameBorderWidth), 2);
    assert_eq!(theme.dim(Dim::MenuBorderWidth), 2);
    assert_eq!(theme.dim(Dim::PaddingY), 4);
    assert_eq!(theme.dim(Dim::ClientPaddingY), 4);
    assert_eq!(theme.dim(Dim::HandleHeight), 5);
    assert_eq!(theme.dim(Dim::MenuOverlap), 0);
}

#[test]
fn test_included_colors() {
    let (_root, theme) = load("Demo");
    let border = theme.color(ColorId::FrameBorder(Focus::Focused));
    assert_eq!(**border, Rgb(0x2e, 0x34, 0x36));
    assert!(Arc::ptr_eq(border, theme.color(ColorId::MenuBorder)));
    assert_eq!(**theme.color(ColorId::Osd), Rgb::WHITE);
    assert_eq!(**theme.color(ColorId::MenuSelectedText), Rgb(0xff, 0x88, 0x00));
}

// =============================================================================
// Surfaces
// =============================================================================

#[test]
fn test_title_surfaces() {
    let (_root, theme) = load("Demo");

    let active = theme.style(StyleId::Title(Focus::Focused));
    assert_eq!(active.gradient, Gradient::Diagonal);
    assert_eq!(active.relief, Relief::Raised);
    assert_eq!(active.bevel, Bevel::Two);
    assert_eq!(active.secondary, Rgb(0x20, 0x4a, 0x87));

    let inactive = theme.style(StyleId::Title(Focus::Unfocused));
    assert!(inactive.border);
    assert_eq!(inactive.border_color, Some(Rgb(102, 102, 102)));
}

#[test]
fn test_parent_relative_labels() {
    let (_root, theme) = load("Demo");
    assert!(theme.style(StyleId::Label(Focus::Focused)).is_parent_relative());
    assert!(theme.style(StyleId::Label(Focus::Unfocused)).is_parent_relative());
    // OSD highlight skips the transparent label.
    assert!(Arc::ptr_eq(
        theme.style(StyleId::OsdHilite),
        theme.style(StyleId::Title(Focus::Focused))
    ));
}

#[test]
fn test_wildcard_button_style() {
    let (_root, theme) = load("Demo");
    for focus in Focus::ALL {
        let unpressed = theme.style(StyleId::Button(ButtonState::Unpressed, focus));
        assert_eq!(unpressed.relief, Relief::Flat);
        assert!(Arc::ptr_eq(
            unpressed,
            theme.style(StyleId::Button(ButtonState::Hover, focus))
        ));
    }
    let pressed = theme.style(StyleId::Button(ButtonState::Pressed, Focus::Focused));
    assert_eq!(pressed.relief, Relief::Sunken);
    assert!(Arc::ptr_eq(
        pressed,
        theme.style(StyleId::Button(ButtonState::ToggledHover, Focus::Focused))
    ));
}

#[test]
fn test_interlaced_menu() {
    let (_root, theme) = load("Demo");
    let items = theme.style(StyleId::MenuItems);
    assert!(items.interlaced);
    assert_eq!(items.interlace_color, Some(Rgb::BLACK));
}

// =============================================================================
// Masks and text
// =============================================================================

#[test]
fn test_authored_bitmaps() {
    let (_root, theme) = load("Demo");
    let max = theme.mask(MaskId::Button(Button::Max, ButtonState::Unpressed)).unwrap();
    assert_eq!((max.width, max.height), (4, 4));
    let toggled = theme.mask(MaskId::Button(Button::Max, ButtonState::Toggled)).unwrap();
    assert_eq!(**toggled, **max);
    assert!(!Arc::ptr_eq(toggled, max));

    // An undecodable override is ignored.
    let hover = theme.mask(MaskId::Button(Button::Close, ButtonState::Hover)).unwrap();
    assert_eq!((hover.width, hover.height), (6, 6));
}

#[test]
fn test_text_textures() {
    let (_root, theme) = load("Demo");

    let label = theme.element(Element::Label(Focus::Focused)).text().unwrap();
    assert_eq!(label.justify, Justify::Center);
    assert_eq!(label.shadow.offset_y, 1);
    assert_eq!(label.shadow.color, Rgb::WHITE);
    assert_eq!(label.shadow.alpha, 102);

    let osd = theme.element(Element::OsdLabel).text().unwrap();
    assert_eq!(osd.shadow, label.shadow);

    let title = theme.element(Element::MenuTextTitle).text().unwrap();
    assert_eq!(title.justify, Justify::Right);

    let item = theme.element(Element::MenuTextDisabled).text().unwrap();
    assert_eq!(item.shadow.offset_x, 1);
    assert_eq!(item.shadow.alpha, 50);
}

#[test]
fn test_geometry() {
    let (_root, theme) = load("Demo");
    let g = theme.geometry();
    // 12px font + 1px shadow, parent-relative labels add nothing: 13 -> 14.
    assert_eq!(g.win_font_height, 13);
    assert_eq!(g.label_height, 14);
    assert_eq!(g.title_height, 14 + 8);
    assert_eq!(g.button_size, 12);
    // Raised bevel-1 menu title: 12 + 2.
    assert_eq!(g.menu_title_label_height, 14);
    assert_eq!(g.menu_font_height, 13);
}

#[test]
fn test_serializes() {
    let (_root, theme) = load("Demo");
    let json = serde_json::to_value(&theme).unwrap();
    assert_eq!(json["name"], "Demo");
    assert_eq!(json["colors"]["menu_border"], "#2e3436");
    assert_eq!(json["masks"]["max.unpressed"]["rows"][1], "#..#");
    assert!(matches!(
        theme.element(Element::Icon).texture,
        Texture::Bitmap(_)
    ));
    let yaml = serde_yaml::to_string(&theme).unwrap();
    assert!(yaml.contains("label_height: 14"));
}
