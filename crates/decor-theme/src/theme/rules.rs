//! Declarative resolution tables.
//!
//! Each table lists its rules in evaluation order. A rule names the
//! configuration key(s) to try and what to use when none yields a valid
//! value: a constant, or a value resolved by an earlier rule. Copies of
//! earlier values share the same node; masks are the exception and are
//! deep-copied so state variants can diverge.

use crate::ids::{Button, ButtonState, ColorId, Dim, Focus, MaskId, StyleId};
use crate::mask::patterns::{self, Pattern};
use crate::style::Rgb;

// ============================================================================
// Dimensions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimDefault {
    Value(i32),
    From(Dim),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimSource {
    /// Read `key`; values outside `[min, max]` are discarded.
    Ranged {
        key: &'static str,
        min: i32,
        max: i32,
        default: DimDefault,
    },
    /// Always equal to another dimension, whatever the configuration says.
    Same(Dim),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimRule {
    pub id: Dim,
    pub source: DimSource,
}

fn ranged(id: Dim, key: &'static str, min: i32, max: i32, default: DimDefault) -> DimRule {
    DimRule {
        id,
        source: DimSource::Ranged {
            key,
            min,
            max,
            default,
        },
    }
}

pub fn dim_rules() -> Vec<DimRule> {
    vec![
        ranged(Dim::MenuOverlap, "menu.overlap", -100, 100, DimDefault::Value(0)),
        ranged(Dim::HandleHeight, "window.handle.width", 0, 100, DimDefault::Value(6)),
        ranged(Dim::PaddingX, "padding.width", 0, 100, DimDefault::Value(3)),
        DimRule {
            id: Dim::PaddingY,
            source: DimSource::Same(Dim::PaddingX),
        },
        ranged(Dim::FrameBorderWidth, "border.width", 0, 100, DimDefault::Value(1)),
        // menu.border.width is never read.
        DimRule {
            id: Dim::MenuBorderWidth,
            source: DimSource::Same(Dim::FrameBorderWidth),
        },
        ranged(
            Dim::ClientPaddingX,
            "window.client.padding.width",
            0,
            100,
            DimDefault::From(Dim::PaddingX),
        ),
        DimRule {
            id: Dim::ClientPaddingY,
            source: DimSource::Same(Dim::ClientPaddingX),
        },
    ]
}

// ============================================================================
// Colors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorFallback {
    /// Share an already resolved color.
    Alias(ColorId),
    Constant(Rgb),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRule {
    pub id: ColorId,
    /// Tried in order; the first present and valid value wins.
    pub keys: Vec<String>,
    pub fallback: ColorFallback,
}

fn color(id: ColorId, keys: &[&str], fallback: ColorFallback) -> ColorRule {
    ColorRule {
        id,
        keys: keys.iter().map(|k| k.to_string()).collect(),
        fallback,
    }
}

fn button_color_key(state: ButtonState, focus: Focus) -> String {
    format!("window.{}.button.{}.image.color", focus.key(), state.key())
}

pub fn color_rules() -> Vec<ColorRule> {
    use ColorFallback::{Alias, Constant};
    use Focus::{Focused, Unfocused};

    let mut rules = vec![
        color(
            ColorId::FrameBorder(Focused),
            &["window.active.border.color", "border.color"],
            Constant(Rgb::BLACK),
        ),
        color(
            ColorId::FrameBorder(Unfocused),
            &["window.inactive.border.color"],
            Alias(ColorId::FrameBorder(Focused)),
        ),
        color(
            ColorId::MenuBorder,
            &["menu.border.color"],
            Alias(ColorId::FrameBorder(Focused)),
        ),
        color(
            ColorId::Client(Focused),
            &["window.active.client.color"],
            Constant(Rgb::WHITE),
        ),
        color(
            ColorId::Client(Unfocused),
            &["window.inactive.client.color"],
            Constant(Rgb::WHITE),
        ),
        color(
            ColorId::Title(Focused),
            &["window.active.label.text.color"],
            Constant(Rgb::BLACK),
        ),
        color(
            ColorId::Osd,
            &["osd.label.text.color"],
            Alias(ColorId::Title(Focused)),
        ),
        color(
            ColorId::Title(Unfocused),
            &["window.inactive.label.text.color"],
            Constant(Rgb::WHITE),
        ),
    ];

    // (state, fallback by focus)
    let button_rules: [(ButtonState, fn(Focus) -> ColorFallback); 7] = [
        (ButtonState::Unpressed, |f| match f {
            Focused => Constant(Rgb::BLACK),
            Unfocused => Constant(Rgb::WHITE),
        }),
        (ButtonState::Pressed, |f| {
            Alias(ColorId::ButtonImage(ButtonState::Unpressed, f))
        }),
        (ButtonState::Disabled, |f| match f {
            Focused => Constant(Rgb::WHITE),
            Unfocused => Constant(Rgb::BLACK),
        }),
        (ButtonState::Hover, |f| {
            Alias(ColorId::ButtonImage(ButtonState::Unpressed, f))
        }),
        (ButtonState::Toggled, |f| {
            Alias(ColorId::ButtonImage(ButtonState::Pressed, f))
        }),
        (ButtonState::ToggledHover, |f| {
            Alias(ColorId::ButtonImage(ButtonState::Toggled, f))
        }),
        (ButtonState::ToggledPressed, |f| {
            Alias(ColorId::ButtonImage(ButtonState::Pressed, f))
        }),
    ];
    for (state, fallback) in button_rules {
        for focus in Focus::ALL {
            rules.push(ColorRule {
                id: ColorId::ButtonImage(state, focus),
                keys: vec![button_color_key(state, focus)],
                fallback: fallback(focus),
            });
        }
    }

    rules.extend([
        color(
            ColorId::MenuTitleText,
            &["menu.title.text.color"],
            Constant(Rgb::BLACK),
        ),
        color(
            ColorId::MenuItemText,
            &["menu.items.text.color"],
            Constant(Rgb::WHITE),
        ),
        color(
            ColorId::MenuDisabledText,
            &["menu.items.disabled.text.color"],
            Constant(Rgb::BLACK),
        ),
        color(
            ColorId::MenuDisabledSelectedText,
            &["menu.items.activedisabled.text.color"],
            Alias(ColorId::MenuDisabledText),
        ),
        color(
            ColorId::MenuSelectedText,
            &["menu.items.active.text.color"],
            Constant(Rgb::BLACK),
        ),
    ]);
    rules
}

// ============================================================================
// Surface styles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleFallback {
    /// Solid, flat, bevel 1, black on black.
    Default,
    /// Share an already resolved style.
    Copy(StyleId),
    /// Share the first listed style that is not parent-relative, or the
    /// last one if all are.
    FirstOpaque(Vec<StyleId>),
    /// The theme's single parent-relative surface.
    ParentRelative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub id: StyleId,
    /// Descriptor key; `None` for styles that are always derived.
    pub key: Option<String>,
    pub allow_transparent: bool,
    pub fallback: StyleFallback,
}

fn style(id: StyleId, key: &str, allow_transparent: bool, fallback: StyleFallback) -> StyleRule {
    StyleRule {
        id,
        key: Some(key.to_string()),
        allow_transparent,
        fallback,
    }
}

fn derived(id: StyleId, fallback: StyleFallback) -> StyleRule {
    StyleRule {
        id,
        key: None,
        allow_transparent: false,
        fallback,
    }
}

pub fn style_rules() -> Vec<StyleRule> {
    use Focus::{Focused, Unfocused};

    let mut rules = vec![derived(StyleId::ParentRelative, StyleFallback::ParentRelative)];

    let window: [(fn(Focus) -> StyleId, &str, bool); 4] = [
        (StyleId::Title, "title", false),
        (StyleId::Label, "label", true),
        (StyleId::Handle, "handle", false),
        (StyleId::Grip, "grip", true),
    ];
    for (make, part, allow) in window {
        for focus in Focus::ALL {
            let key = format!("window.{}.{}.bg", focus.key(), part);
            rules.push(style(make(focus), &key, allow, StyleFallback::Default));
        }
    }

    rules.extend([
        style(StyleId::MenuItems, "menu.items.bg", false, StyleFallback::Default),
        style(StyleId::MenuTitle, "menu.title.bg", true, StyleFallback::Default),
        style(StyleId::MenuSelected, "menu.items.active.bg", true, StyleFallback::Default),
        derived(StyleId::MenuDisabledSelected, StyleFallback::Copy(StyleId::MenuSelected)),
    ]);

    let buttons: [(ButtonState, fn(Focus) -> StyleFallback); 7] = [
        (ButtonState::Disabled, |_| StyleFallback::Default),
        (ButtonState::Pressed, |_| StyleFallback::Default),
        (ButtonState::Toggled, |f| {
            StyleFallback::Copy(StyleId::Button(ButtonState::Pressed, f))
        }),
        (ButtonState::Unpressed, |_| StyleFallback::Default),
        (ButtonState::Hover, |f| {
            StyleFallback::Copy(StyleId::Button(ButtonState::Unpressed, f))
        }),
        (ButtonState::ToggledHover, |f| {
            StyleFallback::Copy(StyleId::Button(ButtonState::Toggled, f))
        }),
        (ButtonState::ToggledPressed, |f| {
            StyleFallback::Copy(StyleId::Button(ButtonState::Pressed, f))
        }),
    ];
    for (state, fallback) in buttons {
        for focus in Focus::ALL {
            let key = format!("window.{}.button.{}.bg", focus.key(), state.key());
            rules.push(style(
                StyleId::Button(state, focus),
                &key,
                true,
                fallback(focus),
            ));
        }
    }

    rules.extend([
        style(StyleId::OsdBg, "osd.bg", false, StyleFallback::Copy(StyleId::Title(Focused))),
        style(StyleId::OsdLabel, "osd.label.bg", true, StyleFallback::Copy(StyleId::Label(Focused))),
        style(
            StyleId::OsdHilite,
            "osd.hilight.bg",
            true,
            StyleFallback::FirstOpaque(vec![StyleId::Label(Focused), StyleId::Title(Focused)]),
        ),
        style(
            StyleId::OsdUnhilite,
            "osd.unhilight.bg",
            true,
            StyleFallback::FirstOpaque(vec![StyleId::Label(Unfocused), StyleId::Title(Unfocused)]),
        ),
    ]);
    rules
}

// ============================================================================
// Masks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskFallback {
    Pattern(Pattern),
    /// Deep copy of an already resolved mask.
    Copy(MaskId),
    /// Deep copy of `base` when the base was authored; otherwise the
    /// compiled pattern, or a copy of `base` when there is none.
    Toggled {
        base: MaskId,
        pattern: Option<Pattern>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRule {
    pub id: MaskId,
    pub file: String,
    pub fallback: MaskFallback,
}

fn base_pattern(button: Button) -> Pattern {
    match button {
        Button::Max => patterns::MAX,
        Button::Close => patterns::CLOSE,
        Button::Desk => patterns::DESK,
        Button::Shade => patterns::SHADE,
        Button::Iconify => patterns::ICONIFY,
    }
}

fn toggled_pattern(button: Button) -> Option<Pattern> {
    match button {
        Button::Max => Some(patterns::MAX_TOGGLED),
        Button::Desk => Some(patterns::DESK_TOGGLED),
        _ => None,
    }
}

pub fn mask_rules() -> Vec<MaskRule> {
    const ORDER: [ButtonState; 7] = [
        ButtonState::Unpressed,
        ButtonState::Toggled,
        ButtonState::Pressed,
        ButtonState::Disabled,
        ButtonState::Hover,
        ButtonState::ToggledPressed,
        ButtonState::ToggledHover,
    ];

    let mut rules = Vec::new();
    for button in Button::ALL {
        let base = MaskId::Button(button, ButtonState::Unpressed);
        let toggled = MaskId::Button(button, ButtonState::Toggled);
        for state in ORDER {
            if state.is_toggled() && !button.toggles() {
                continue;
            }
            let fallback = match state {
                ButtonState::Unpressed => MaskFallback::Pattern(base_pattern(button)),
                ButtonState::Toggled => MaskFallback::Toggled {
                    base,
                    pattern: toggled_pattern(button),
                },
                ButtonState::Pressed | ButtonState::Disabled | ButtonState::Hover => {
                    MaskFallback::Copy(base)
                }
                ButtonState::ToggledPressed | ButtonState::ToggledHover => {
                    MaskFallback::Copy(toggled)
                }
            };
            let id = MaskId::Button(button, state);
            rules.push(MaskRule {
                id,
                file: id.file_name(),
                fallback,
            });
        }
    }
    rules.push(MaskRule {
        id: MaskId::Bullet,
        file: MaskId::Bullet.file_name(),
        fallback: MaskFallback::Pattern(patterns::BULLET),
    });
    rules
}
