//! Attribute identifiers.
//!
//! Every resolved attribute of a theme is addressed by a small `Copy` key.
//! Each key type implements [`Attr`], whose [`all`](Attr::all) lists every
//! valid key in resolution order. Completed tables are guaranteed to hold a
//! value for each of them.

use std::fmt;

use serde::Serialize;

/// A key type for a completed attribute table.
pub trait Attr: Copy + Ord + fmt::Debug + fmt::Display + 'static {
    /// Every valid key of this type.
    fn all() -> Vec<Self>;
}

/// Window focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Focused,
    Unfocused,
}

impl Focus {
    pub const ALL: [Focus; 2] = [Focus::Focused, Focus::Unfocused];

    /// The configuration path component (`active` / `inactive`).
    pub fn key(self) -> &'static str {
        match self {
            Focus::Focused => "active",
            Focus::Unfocused => "inactive",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Focus::Focused => "focused",
            Focus::Unfocused => "unfocused",
        })
    }
}

/// Titlebar control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Max,
    Close,
    Desk,
    Shade,
    Iconify,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Max,
        Button::Close,
        Button::Desk,
        Button::Shade,
        Button::Iconify,
    ];

    /// Bitmap file stem.
    pub fn stem(self) -> &'static str {
        match self {
            Button::Max => "max",
            Button::Close => "close",
            Button::Desk => "desk",
            Button::Shade => "shade",
            Button::Iconify => "iconify",
        }
    }

    /// Whether the button has toggled states (maximized, sticky, shaded).
    pub fn toggles(self) -> bool {
        matches!(self, Button::Max | Button::Desk | Button::Shade)
    }

    /// The states this button can be drawn in.
    pub fn states(self) -> impl Iterator<Item = ButtonState> {
        ButtonState::ALL
            .into_iter()
            .filter(move |s| self.toggles() || !s.is_toggled())
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Button states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    Unpressed,
    Pressed,
    Disabled,
    Hover,
    Toggled,
    ToggledPressed,
    ToggledHover,
}

impl ButtonState {
    pub const ALL: [ButtonState; 7] = [
        ButtonState::Unpressed,
        ButtonState::Pressed,
        ButtonState::Disabled,
        ButtonState::Hover,
        ButtonState::Toggled,
        ButtonState::ToggledPressed,
        ButtonState::ToggledHover,
    ];

    pub fn is_toggled(self) -> bool {
        matches!(
            self,
            ButtonState::Toggled | ButtonState::ToggledPressed | ButtonState::ToggledHover
        )
    }

    /// The configuration path fragment, e.g. `toggled.hover`.
    pub fn key(self) -> &'static str {
        match self {
            ButtonState::Unpressed => "unpressed",
            ButtonState::Pressed => "pressed",
            ButtonState::Disabled => "disabled",
            ButtonState::Hover => "hover",
            ButtonState::Toggled => "toggled",
            ButtonState::ToggledPressed => "toggled.pressed",
            ButtonState::ToggledHover => "toggled.hover",
        }
    }

    /// Bitmap file name suffix, e.g. `_toggled_hover`.
    pub fn file_suffix(self) -> &'static str {
        match self {
            ButtonState::Unpressed => "",
            ButtonState::Pressed => "_pressed",
            ButtonState::Disabled => "_disabled",
            ButtonState::Hover => "_hover",
            ButtonState::Toggled => "_toggled",
            ButtonState::ToggledPressed => "_toggled_pressed",
            ButtonState::ToggledHover => "_toggled_hover",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ButtonState::Unpressed => "unpressed",
            ButtonState::Pressed => "pressed",
            ButtonState::Disabled => "disabled",
            ButtonState::Hover => "hover",
            ButtonState::Toggled => "toggled",
            ButtonState::ToggledPressed => "toggled_pressed",
            ButtonState::ToggledHover => "toggled_hover",
        })
    }
}

/// Named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorId {
    FrameBorder(Focus),
    MenuBorder,
    Client(Focus),
    Title(Focus),
    Osd,
    ButtonImage(ButtonState, Focus),
    MenuTitleText,
    MenuItemText,
    MenuDisabledText,
    MenuDisabledSelectedText,
    MenuSelectedText,
}

impl Attr for ColorId {
    fn all() -> Vec<Self> {
        let mut ids = Vec::new();
        for focus in Focus::ALL {
            ids.push(ColorId::FrameBorder(focus));
        }
        ids.push(ColorId::MenuBorder);
        for focus in Focus::ALL {
            ids.push(ColorId::Client(focus));
        }
        for focus in Focus::ALL {
            ids.push(ColorId::Title(focus));
        }
        ids.push(ColorId::Osd);
        for state in ButtonState::ALL {
            for focus in Focus::ALL {
                ids.push(ColorId::ButtonImage(state, focus));
            }
        }
        ids.extend([
            ColorId::MenuTitleText,
            ColorId::MenuItemText,
            ColorId::MenuDisabledText,
            ColorId::MenuDisabledSelectedText,
            ColorId::MenuSelectedText,
        ]);
        ids
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorId::FrameBorder(focus) => write!(f, "frame_border.{focus}"),
            ColorId::MenuBorder => f.write_str("menu_border"),
            ColorId::Client(focus) => write!(f, "client.{focus}"),
            ColorId::Title(focus) => write!(f, "title.{focus}"),
            ColorId::Osd => f.write_str("osd"),
            ColorId::ButtonImage(state, focus) => write!(f, "button_image.{state}.{focus}"),
            ColorId::MenuTitleText => f.write_str("menu_title_text"),
            ColorId::MenuItemText => f.write_str("menu_item_text"),
            ColorId::MenuDisabledText => f.write_str("menu_disabled_text"),
            ColorId::MenuDisabledSelectedText => f.write_str("menu_disabled_selected_text"),
            ColorId::MenuSelectedText => f.write_str("menu_selected_text"),
        }
    }
}

/// Background surface styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleId {
    Title(Focus),
    Label(Focus),
    Handle(Focus),
    Grip(Focus),
    MenuItems,
    MenuTitle,
    MenuSelected,
    MenuDisabledSelected,
    Button(ButtonState, Focus),
    OsdBg,
    OsdLabel,
    OsdHilite,
    OsdUnhilite,
    ParentRelative,
}

impl Attr for StyleId {
    fn all() -> Vec<Self> {
        let mut ids = Vec::new();
        for make in [StyleId::Title, StyleId::Label, StyleId::Handle, StyleId::Grip] {
            for focus in Focus::ALL {
                ids.push(make(focus));
            }
        }
        ids.extend([
            StyleId::MenuItems,
            StyleId::MenuTitle,
            StyleId::MenuSelected,
            StyleId::MenuDisabledSelected,
        ]);
        for state in ButtonState::ALL {
            for focus in Focus::ALL {
                ids.push(StyleId::Button(state, focus));
            }
        }
        ids.extend([
            StyleId::OsdBg,
            StyleId::OsdLabel,
            StyleId::OsdHilite,
            StyleId::OsdUnhilite,
            StyleId::ParentRelative,
        ]);
        ids
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleId::Title(focus) => write!(f, "title.{focus}"),
            StyleId::Label(focus) => write!(f, "label.{focus}"),
            StyleId::Handle(focus) => write!(f, "handle.{focus}"),
            StyleId::Grip(focus) => write!(f, "grip.{focus}"),
            StyleId::MenuItems => f.write_str("menu_items"),
            StyleId::MenuTitle => f.write_str("menu_title"),
            StyleId::MenuSelected => f.write_str("menu_selected"),
            StyleId::MenuDisabledSelected => f.write_str("menu_disabled_selected"),
            StyleId::Button(state, focus) => write!(f, "button.{state}.{focus}"),
            StyleId::OsdBg => f.write_str("osd_bg"),
            StyleId::OsdLabel => f.write_str("osd_label"),
            StyleId::OsdHilite => f.write_str("osd_hilite"),
            StyleId::OsdUnhilite => f.write_str("osd_unhilite"),
            StyleId::ParentRelative => f.write_str("parent_relative"),
        }
    }
}

/// Stencil masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskId {
    Button(Button, ButtonState),
    Bullet,
}

impl MaskId {
    /// The bitmap file an author may provide to override this mask.
    pub fn file_name(self) -> String {
        match self {
            MaskId::Button(button, state) => {
                format!("{}{}.xbm", button.stem(), state.file_suffix())
            }
            MaskId::Bullet => "bullet.xbm".to_string(),
        }
    }
}

impl Attr for MaskId {
    fn all() -> Vec<Self> {
        let mut ids: Vec<MaskId> = Button::ALL
            .into_iter()
            .flat_map(|b| b.states().map(move |s| MaskId::Button(b, s)))
            .collect();
        ids.push(MaskId::Bullet);
        ids
    }
}

impl fmt::Display for MaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskId::Button(button, state) => write!(f, "{button}.{state}"),
            MaskId::Bullet => f.write_str("bullet"),
        }
    }
}

/// One button appearance: a control, in a state, under a focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ButtonKey {
    pub button: Button,
    pub state: ButtonState,
    pub focus: Focus,
}

impl ButtonKey {
    pub fn new(button: Button, state: ButtonState, focus: Focus) -> Self {
        Self {
            button,
            state,
            focus,
        }
    }
}

impl Attr for ButtonKey {
    fn all() -> Vec<Self> {
        let mut keys = Vec::new();
        for button in Button::ALL {
            for state in button.states() {
                for focus in Focus::ALL {
                    keys.push(ButtonKey::new(button, state, focus));
                }
            }
        }
        keys
    }
}

impl fmt::Display for ButtonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.button, self.state, self.focus)
    }
}

/// Non-button appearances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Title(Focus),
    Label(Focus),
    Handle(Focus),
    Grip(Focus),
    MenuItems,
    MenuTitle,
    MenuSelected,
    MenuDisabledSelected,
    MenuNormal,
    MenuDisabled,
    MenuTextTitle,
    MenuTextNormal,
    MenuTextSelected,
    MenuTextDisabled,
    MenuTextDisabledSelected,
    MenuBulletNormal,
    MenuBulletSelected,
    OsdBg,
    OsdLabel,
    OsdHilite,
    OsdUnhilite,
    Icon,
    Clear,
    ClearTex,
}

impl Attr for Element {
    fn all() -> Vec<Self> {
        let mut ids = Vec::new();
        for make in [Element::Title, Element::Label, Element::Handle, Element::Grip] {
            for focus in Focus::ALL {
                ids.push(make(focus));
            }
        }
        ids.extend([
            Element::MenuItems,
            Element::MenuTitle,
            Element::MenuSelected,
            Element::MenuDisabledSelected,
            Element::MenuNormal,
            Element::MenuDisabled,
            Element::MenuTextTitle,
            Element::MenuTextNormal,
            Element::MenuTextSelected,
            Element::MenuTextDisabled,
            Element::MenuTextDisabledSelected,
            Element::MenuBulletNormal,
            Element::MenuBulletSelected,
            Element::OsdBg,
            Element::OsdLabel,
            Element::OsdHilite,
            Element::OsdUnhilite,
            Element::Icon,
            Element::Clear,
            Element::ClearTex,
        ]);
        ids
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Title(focus) => write!(f, "title.{focus}"),
            Element::Label(focus) => write!(f, "label.{focus}"),
            Element::Handle(focus) => write!(f, "handle.{focus}"),
            Element::Grip(focus) => write!(f, "grip.{focus}"),
            other => {
                let name = match other {
                    Element::MenuItems => "menu_items",
                    Element::MenuTitle => "menu_title",
                    Element::MenuSelected => "menu_selected",
                    Element::MenuDisabledSelected => "menu_disabled_selected",
                    Element::MenuNormal => "menu_normal",
                    Element::MenuDisabled => "menu_disabled",
                    Element::MenuTextTitle => "menu_text_title",
                    Element::MenuTextNormal => "menu_text_normal",
                    Element::MenuTextSelected => "menu_text_selected",
                    Element::MenuTextDisabled => "menu_text_disabled",
                    Element::MenuTextDisabledSelected => "menu_text_disabled_selected",
                    Element::MenuBulletNormal => "menu_bullet_normal",
                    Element::MenuBulletSelected => "menu_bullet_selected",
                    Element::OsdBg => "osd_bg",
                    Element::OsdLabel => "osd_label",
                    Element::OsdHilite => "osd_hilite",
                    Element::OsdUnhilite => "osd_unhilite",
                    Element::Icon => "icon",
                    Element::Clear => "clear",
                    _ => "clear_tex",
                };
                f.write_str(name)
            }
        }
    }
}

/// Directly configured scalar dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dim {
    MenuOverlap,
    HandleHeight,
    PaddingX,
    PaddingY,
    FrameBorderWidth,
    MenuBorderWidth,
    ClientPaddingX,
    ClientPaddingY,
}

impl Attr for Dim {
    fn all() -> Vec<Self> {
        vec![
            Dim::MenuOverlap,
            Dim::HandleHeight,
            Dim::PaddingX,
            Dim::PaddingY,
            Dim::FrameBorderWidth,
            Dim::MenuBorderWidth,
            Dim::ClientPaddingX,
            Dim::ClientPaddingY,
        ]
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dim::MenuOverlap => "menu_overlap",
            Dim::HandleHeight => "handle_height",
            Dim::PaddingX => "padding_x",
            Dim::PaddingY => "padding_y",
            Dim::FrameBorderWidth => "frame_border_width",
            Dim::MenuBorderWidth => "menu_border_width",
            Dim::ClientPaddingX => "client_padding_x",
            Dim::ClientPaddingY => "client_padding_y",
        })
    }
}

/// The five font slots a caller may pre-empt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontSlot {
    ActiveWindow,
    InactiveWindow,
    MenuTitle,
    MenuItem,
    Osd,
}

impl FontSlot {
    /// The window label font for a focus state.
    pub fn window(focus: Focus) -> Self {
        match focus {
            Focus::Focused => FontSlot::ActiveWindow,
            Focus::Unfocused => FontSlot::InactiveWindow,
        }
    }
}

impl Attr for FontSlot {
    fn all() -> Vec<Self> {
        vec![
            FontSlot::ActiveWindow,
            FontSlot::InactiveWindow,
            FontSlot::MenuTitle,
            FontSlot::MenuItem,
            FontSlot::Osd,
        ]
    }
}

impl fmt::Display for FontSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontSlot::ActiveWindow => "active_window",
            FontSlot::InactiveWindow => "inactive_window",
            FontSlot::MenuTitle => "menu_title",
            FontSlot::MenuItem => "menu_item",
            FontSlot::Osd => "osd",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn assert_unique<K: Attr>() {
        let all = K::all();
        let set: BTreeSet<K> = all.iter().copied().collect();
        assert_eq!(set.len(), all.len(), "duplicate keys in {:?}", all);
        let names: BTreeSet<String> = all.iter().map(|k| k.to_string()).collect();
        assert_eq!(names.len(), all.len(), "duplicate display names");
    }

    #[test]
    fn test_keys_are_unique() {
        assert_unique::<ColorId>();
        assert_unique::<StyleId>();
        assert_unique::<MaskId>();
        assert_unique::<ButtonKey>();
        assert_unique::<Element>();
        assert_unique::<Dim>();
        assert_unique::<FontSlot>();
    }

    #[test]
    fn test_button_appearance_count() {
        // 5 buttons x 4 plain states + 3 toggling buttons x 3 toggled states,
        // each under two focus states.
        assert_eq!(ButtonKey::all().len(), 58);
    }

    #[test]
    fn test_mask_count() {
        assert_eq!(MaskId::all().len(), 30);
    }

    #[test]
    fn test_close_has_no_toggled_states() {
        assert!(Button::Close.states().all(|s| !s.is_toggled()));
        assert_eq!(Button::Max.states().count(), 7);
    }

    #[test]
    fn test_mask_file_names() {
        assert_eq!(
            MaskId::Button(Button::Max, ButtonState::Unpressed).file_name(),
            "max.xbm"
        );
        assert_eq!(
            MaskId::Button(Button::Shade, ButtonState::ToggledHover).file_name(),
            "shade_toggled_hover.xbm"
        );
        assert_eq!(MaskId::Bullet.file_name(), "bullet.xbm");
    }

    #[test]
    fn test_state_config_keys() {
        assert_eq!(ButtonState::ToggledHover.key(), "toggled.hover");
        assert_eq!(ButtonState::Disabled.key(), "disabled");
        assert_eq!(Focus::Unfocused.key(), "inactive");
    }
}
