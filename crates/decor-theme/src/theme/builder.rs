//! Theme construction.
//!
//! [`ThemeBuilder`] walks the resolution tables in order: fonts, dimensions,
//! colors, masks, surface styles, then the appearances that combine them.
//! Each rule either reads the configuration or falls back to a constant or
//! to a value resolved by an earlier rule. Finally the geometry is derived
//! from the finished appearances.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, trace};

use super::geometry::Geometry;
use super::rules::{
    color_rules, dim_rules, mask_rules, style_rules, ColorFallback, DimDefault, DimSource,
    MaskFallback, StyleFallback,
};
use super::theme::Theme;
use crate::attr::{AttrMap, Partial};
use crate::config::{read_int, read_string, ConfigSource};
use crate::error::{Result, ThemeError};
use crate::font::{DefaultFontProvider, Font, FontProvider};
use crate::icon::default_icon;
use crate::ids::{Attr, ButtonKey, ColorId, Dim, Element, Focus, FontSlot, MaskId, StyleId};
use crate::mask::{BitmapSource, Mask, MaskAssembler, NoBitmaps};
use crate::style::{
    Appearance, ColorResolver, Justify, MaskTexture, Rgb, SurfaceResolver, SurfaceStyle,
    TextShadow, TextTexture, Texture,
};

/// Reads a value an earlier rule must already have resolved.
fn earlier<K: Attr, V>(partial: &Partial<K, V>, key: K) -> Result<&V> {
    partial.get(key).ok_or_else(|| ThemeError::Incomplete {
        attribute: key.to_string(),
    })
}

/// Builds a [`Theme`] from a configuration source.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use decor_theme::{Dim, ThemeBuilder};
///
/// let mut config = HashMap::new();
/// config.insert("border.width".to_string(), "2".to_string());
///
/// let theme = ThemeBuilder::new("plain", &config).build().unwrap();
/// assert_eq!(theme.dim(Dim::FrameBorderWidth), 2);
/// assert_eq!(theme.dim(Dim::MenuBorderWidth), 2);
/// ```
pub struct ThemeBuilder<'a> {
    name: String,
    path: Option<PathBuf>,
    config: &'a dyn ConfigSource,
    bitmaps: &'a dyn BitmapSource,
    fonts: BTreeMap<FontSlot, Arc<Font>>,
    provider: Arc<dyn FontProvider>,
}

impl<'a> ThemeBuilder<'a> {
    pub fn new<C: ConfigSource>(name: impl Into<String>, config: &'a C) -> Self {
        Self {
            name: name.into(),
            path: None,
            config,
            bitmaps: &NoBitmaps,
            fonts: BTreeMap::new(),
            provider: Arc::new(DefaultFontProvider),
        }
    }

    /// Records the directory the theme was loaded from.
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.path = Some(dir.into());
        self
    }

    /// Sets where authored bitmaps are read from. Without one every mask
    /// uses its compiled pattern.
    pub fn bitmaps(mut self, source: &'a dyn BitmapSource) -> Self {
        self.bitmaps = source;
        self
    }

    /// Supplies the font for one slot. The theme shares the handle.
    pub fn font(mut self, slot: FontSlot, font: Arc<Font>) -> Self {
        self.fonts.insert(slot, font);
        self
    }

    pub fn fonts(mut self, fonts: &BTreeMap<FontSlot, Arc<Font>>) -> Self {
        for (slot, font) in fonts {
            self.fonts.insert(*slot, Arc::clone(font));
        }
        self
    }

    /// Sets the provider used for slots without a supplied font.
    pub fn font_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Resolves every attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Incomplete`] if a resolution table leaves an
    /// attribute unset. Configuration problems never fail a build; they
    /// fall back.
    pub fn build(self) -> Result<Theme> {
        let fonts = self.resolve_fonts()?;
        let dims = self.resolve_dims()?;
        let colors = self.resolve_colors()?;
        let masks = self.resolve_masks()?;
        let styles = self.resolve_styles()?;
        let elements = self.resolve_elements(&fonts, &colors, &masks, &styles)?;
        let buttons = self.resolve_buttons(&colors, &masks, &styles)?;
        let geometry = Geometry::derive(&fonts, &dims, &elements);

        debug!(
            theme = %self.name,
            label_height = geometry.label_height,
            title_height = geometry.title_height,
            "theme resolved"
        );

        Ok(Theme {
            name: self.name,
            path: self.path,
            fonts,
            dims,
            colors,
            masks,
            styles,
            elements,
            buttons,
            geometry,
        })
    }

    fn resolve_fonts(&self) -> Result<AttrMap<FontSlot, Arc<Font>>> {
        let mut fonts = Partial::new();
        for slot in FontSlot::all() {
            let font = match self.fonts.get(&slot) {
                Some(font) => Arc::clone(font),
                None => {
                    trace!(%slot, "opening default font");
                    self.provider.open_default()
                }
            };
            fonts.insert(slot, font);
        }
        fonts.finish()
    }

    fn resolve_dims(&self) -> Result<AttrMap<Dim, i32>> {
        let mut dims = Partial::new();
        for rule in dim_rules() {
            let value = match rule.source {
                DimSource::Ranged {
                    key,
                    min,
                    max,
                    default,
                } => match read_int(self.config, key).filter(|v| (min..=max).contains(v)) {
                    Some(v) => v,
                    None => {
                        trace!(dim = %rule.id, key, "dimension falls back");
                        match default {
                            DimDefault::Value(v) => v,
                            DimDefault::From(src) => *earlier(&dims, src)?,
                        }
                    }
                },
                DimSource::Same(src) => *earlier(&dims, src)?,
            };
            dims.insert(rule.id, value);
        }
        dims.finish()
    }

    fn resolve_colors(&self) -> Result<AttrMap<ColorId, Arc<Rgb>>> {
        let resolver = ColorResolver::new(self.config);
        let mut colors = Partial::new();
        for rule in color_rules() {
            let color = match resolver.resolve_first(&rule.keys) {
                Some(rgb) => Arc::new(rgb),
                None => {
                    trace!(color = %rule.id, "color falls back");
                    match rule.fallback {
                        ColorFallback::Alias(src) => Arc::clone(earlier(&colors, src)?),
                        ColorFallback::Constant(rgb) => Arc::new(rgb),
                    }
                }
            };
            colors.insert(rule.id, color);
        }
        colors.finish()
    }

    fn resolve_masks(&self) -> Result<AttrMap<MaskId, Arc<Mask>>> {
        let assembler = MaskAssembler::new(self.bitmaps);
        let mut masks: Partial<MaskId, Arc<Mask>> = Partial::new();
        let mut authored = BTreeSet::new();
        for rule in mask_rules() {
            let fallback = match &rule.fallback {
                MaskFallback::Pattern(pattern) => pattern.to_mask(),
                MaskFallback::Copy(src) => Mask::clone(earlier(&masks, *src)?),
                MaskFallback::Toggled { base, pattern } => match pattern {
                    Some(pattern) if !authored.contains(base) => pattern.to_mask(),
                    _ => Mask::clone(earlier(&masks, *base)?),
                },
            };
            let resolved = assembler.resolve(&rule.file, || fallback);
            if resolved.authored {
                authored.insert(rule.id);
            } else {
                trace!(mask = %rule.id, file = %rule.file, "mask falls back");
            }
            masks.insert(rule.id, Arc::new(resolved.mask));
        }
        masks.finish()
    }

    fn resolve_styles(&self) -> Result<AttrMap<StyleId, Arc<SurfaceStyle>>> {
        let resolver = SurfaceResolver::new(self.config);
        let mut styles: Partial<StyleId, Arc<SurfaceStyle>> = Partial::new();
        for rule in style_rules() {
            let resolved = rule
                .key
                .as_deref()
                .and_then(|key| resolver.resolve(key, rule.allow_transparent));
            let style = match resolved {
                Some(style) => Arc::new(style),
                None => {
                    trace!(style = %rule.id, "style falls back");
                    match &rule.fallback {
                        StyleFallback::Default => Arc::new(SurfaceStyle::fallback()),
                        StyleFallback::Copy(src) => Arc::clone(earlier(&styles, *src)?),
                        StyleFallback::FirstOpaque(sources) => {
                            let mut chosen = None;
                            for src in sources {
                                let style = earlier(&styles, *src)?;
                                chosen = Some(style);
                                if !style.is_parent_relative() {
                                    break;
                                }
                            }
                            let style = chosen.ok_or_else(|| ThemeError::Incomplete {
                                attribute: rule.id.to_string(),
                            })?;
                            Arc::clone(style)
                        }
                        StyleFallback::ParentRelative => Arc::new(SurfaceStyle::parent_relative()),
                    }
                }
            };
            styles.insert(rule.id, style);
        }
        styles.finish()
    }

    fn resolve_elements(
        &self,
        fonts: &AttrMap<FontSlot, Arc<Font>>,
        colors: &AttrMap<ColorId, Arc<Rgb>>,
        masks: &AttrMap<MaskId, Arc<Mask>>,
        styles: &AttrMap<StyleId, Arc<SurfaceStyle>>,
    ) -> Result<AttrMap<Element, Appearance>> {
        let shadow = |key: &str| TextShadow::parse(read_string(self.config, key));
        let justify = |key: &str| {
            read_string(self.config, key)
                .map(Justify::parse)
                .unwrap_or_default()
        };

        let label_shadow = |focus: Focus| {
            shadow(&format!("window.{}.label.text.font", focus.key()))
        };
        let menu_title_shadow = shadow("menu.title.text.font");
        let menu_item_shadow = shadow("menu.items.font");
        let win_justify = justify("window.label.text.justify");
        let menu_title_justify = justify("menu.title.text.justify");

        let text = |slot: FontSlot, justify: Justify, color: ColorId, shadow: TextShadow| {
            Texture::Text(TextTexture {
                font: Arc::clone(fonts.get(slot)),
                justify,
                color: Arc::clone(colors.get(color)),
                shadow,
            })
        };
        let bullet = |color: ColorId| {
            Texture::Mask(MaskTexture {
                mask: Arc::clone(masks.get(MaskId::Bullet)),
                color: Arc::clone(colors.get(color)),
            })
        };
        let style = |id: StyleId| Arc::clone(styles.get(id));
        let clear = || style(StyleId::ParentRelative);
        let icon = Arc::new(default_icon());

        let mut elements = Partial::new();
        for element in Element::all() {
            let appearance = match element {
                Element::Title(f) => Appearance::plain(style(StyleId::Title(f))),
                Element::Label(f) => Appearance::new(
                    style(StyleId::Label(f)),
                    text(FontSlot::window(f), win_justify, ColorId::Title(f), label_shadow(f)),
                ),
                Element::Handle(f) => Appearance::plain(style(StyleId::Handle(f))),
                Element::Grip(f) => Appearance::plain(style(StyleId::Grip(f))),
                Element::MenuItems => Appearance::plain(style(StyleId::MenuItems)),
                Element::MenuTitle => Appearance::plain(style(StyleId::MenuTitle)),
                Element::MenuSelected => Appearance::plain(style(StyleId::MenuSelected)),
                Element::MenuDisabledSelected => {
                    Appearance::plain(style(StyleId::MenuDisabledSelected))
                }
                Element::MenuNormal | Element::MenuDisabled | Element::Clear | Element::ClearTex => {
                    Appearance::plain(clear())
                }
                Element::MenuTextTitle => Appearance::new(
                    clear(),
                    text(
                        FontSlot::MenuTitle,
                        menu_title_justify,
                        ColorId::MenuTitleText,
                        menu_title_shadow,
                    ),
                ),
                Element::MenuTextNormal => Appearance::new(
                    clear(),
                    text(FontSlot::MenuItem, Justify::Left, ColorId::MenuItemText, menu_item_shadow),
                ),
                Element::MenuTextSelected => Appearance::new(
                    clear(),
                    text(
                        FontSlot::MenuItem,
                        Justify::Left,
                        ColorId::MenuSelectedText,
                        menu_item_shadow,
                    ),
                ),
                Element::MenuTextDisabled => Appearance::new(
                    clear(),
                    text(
                        FontSlot::MenuItem,
                        Justify::Left,
                        ColorId::MenuDisabledText,
                        menu_item_shadow,
                    ),
                ),
                Element::MenuTextDisabledSelected => Appearance::new(
                    clear(),
                    text(
                        FontSlot::MenuItem,
                        Justify::Left,
                        ColorId::MenuDisabledSelectedText,
                        menu_item_shadow,
                    ),
                ),
                Element::MenuBulletNormal => {
                    Appearance::new(clear(), bullet(ColorId::MenuItemText))
                }
                Element::MenuBulletSelected => {
                    Appearance::new(clear(), bullet(ColorId::MenuSelectedText))
                }
                Element::OsdBg => Appearance::plain(style(StyleId::OsdBg)),
                Element::OsdLabel => Appearance::new(
                    style(StyleId::OsdLabel),
                    text(
                        FontSlot::Osd,
                        Justify::Left,
                        ColorId::Osd,
                        label_shadow(Focus::Focused),
                    ),
                ),
                Element::OsdHilite => Appearance::plain(style(StyleId::OsdHilite)),
                Element::OsdUnhilite => Appearance::plain(style(StyleId::OsdUnhilite)),
                Element::Icon => Appearance::new(clear(), Texture::Bitmap(Arc::clone(&icon))),
            };
            elements.insert(element, appearance);
        }
        elements.finish()
    }

    fn resolve_buttons(
        &self,
        colors: &AttrMap<ColorId, Arc<Rgb>>,
        masks: &AttrMap<MaskId, Arc<Mask>>,
        styles: &AttrMap<StyleId, Arc<SurfaceStyle>>,
    ) -> Result<AttrMap<ButtonKey, Appearance>> {
        let mut buttons = Partial::new();
        for key in ButtonKey::all() {
            let mask = masks
                .try_get(MaskId::Button(key.button, key.state))
                .ok_or_else(|| ThemeError::Incomplete {
                    attribute: key.to_string(),
                })?;
            let appearance = Appearance::new(
                Arc::clone(styles.get(StyleId::Button(key.state, key.focus))),
                Texture::Mask(MaskTexture {
                    mask: Arc::clone(mask),
                    color: Arc::clone(colors.get(ColorId::ButtonImage(key.state, key.focus))),
                }),
            );
            buttons.insert(key, appearance);
        }
        buttons.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{Button, ButtonState};
    use crate::mask::patterns;
    use crate::style::{Bevel, Gradient, Relief};
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn build(pairs: &[(&str, &str)]) -> Theme {
        let c = config(pairs);
        ThemeBuilder::new("test", &c).build().unwrap()
    }

    const XBM_2X2: &str =
        "#define m_width 2\n#define m_height 2\nstatic char m_bits[] = { 0x01, 0x02 };\n";

    // ============================================================================
    // Colors
    // ============================================================================

    #[test]
    fn test_border_color_aliases() {
        let theme = build(&[("window.active.border.color", "#336699")]);
        let focused = theme.color(ColorId::FrameBorder(Focus::Focused));
        assert_eq!(**focused, Rgb(0x33, 0x66, 0x99));
        assert!(Arc::ptr_eq(
            focused,
            theme.color(ColorId::FrameBorder(Focus::Unfocused))
        ));
        assert!(Arc::ptr_eq(focused, theme.color(ColorId::MenuBorder)));
    }

    #[test]
    fn test_legacy_border_color_key() {
        let theme = build(&[("border.color", "red")]);
        assert_eq!(**theme.color(ColorId::FrameBorder(Focus::Focused)), Rgb(255, 0, 0));
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let theme = build(&[("window.active.client.color", "#12345")]);
        assert_eq!(**theme.color(ColorId::Client(Focus::Focused)), Rgb::WHITE);
    }

    #[test]
    fn test_button_color_chain() {
        let theme = build(&[("window.active.button.pressed.image.color", "#ff0000")]);
        let pressed = theme.color(ColorId::ButtonImage(ButtonState::Pressed, Focus::Focused));
        for state in [ButtonState::Toggled, ButtonState::ToggledHover, ButtonState::ToggledPressed] {
            assert!(Arc::ptr_eq(
                pressed,
                theme.color(ColorId::ButtonImage(state, Focus::Focused))
            ));
        }
        assert_eq!(
            **theme.color(ColorId::ButtonImage(ButtonState::Unpressed, Focus::Unfocused)),
            Rgb::WHITE
        );
        assert_eq!(
            **theme.color(ColorId::ButtonImage(ButtonState::Disabled, Focus::Focused)),
            Rgb::WHITE
        );
    }

    #[test]
    fn test_osd_color_follows_title() {
        let theme = build(&[("window.active.label.text.color", "#010203")]);
        assert!(Arc::ptr_eq(
            theme.color(ColorId::Osd),
            theme.color(ColorId::Title(Focus::Focused))
        ));
    }

    // ============================================================================
    // Dimensions
    // ============================================================================

    #[test]
    fn test_out_of_range_dims_use_defaults() {
        let theme = build(&[
            ("window.handle.width", "500"),
            ("padding.width", "-1"),
            ("menu.overlap", "-20"),
        ]);
        assert_eq!(theme.dim(Dim::HandleHeight), 6);
        assert_eq!(theme.dim(Dim::PaddingX), 3);
        assert_eq!(theme.dim(Dim::PaddingY), 3);
        assert_eq!(theme.dim(Dim::MenuOverlap), -20);
    }

    #[test]
    fn test_border_width_falls_back_to_one() {
        for value in [None, Some("101"), Some("-1"), Some("wide")] {
            let pairs: Vec<(&str, &str)> = value.map(|v| ("border.width", v)).into_iter().collect();
            let theme = build(&pairs);
            assert_eq!(theme.dim(Dim::FrameBorderWidth), 1, "border.width {value:?}");
            assert_eq!(theme.dim(Dim::MenuBorderWidth), 1, "border.width {value:?}");
        }
        let edge = build(&[("border.width", "100")]);
        assert_eq!(edge.dim(Dim::FrameBorderWidth), 100);
        assert_eq!(edge.dim(Dim::MenuBorderWidth), 100);
    }

    #[test]
    fn test_menu_border_width_is_forced() {
        let theme = build(&[("border.width", "4"), ("menu.border.width", "9")]);
        assert_eq!(theme.dim(Dim::MenuBorderWidth), 4);
    }

    #[test]
    fn test_client_padding_defaults_to_padding() {
        let theme = build(&[("padding.width", "5")]);
        assert_eq!(theme.dim(Dim::ClientPaddingX), 5);
        assert_eq!(theme.dim(Dim::ClientPaddingY), 5);
    }

    // ============================================================================
    // Masks
    // ============================================================================

    #[test]
    fn test_masks_fall_back_to_patterns() {
        let theme = build(&[]);
        let base = theme.mask(MaskId::Button(Button::Max, ButtonState::Unpressed)).unwrap();
        assert_eq!(**base, patterns::MAX.to_mask());
        for state in [ButtonState::Hover, ButtonState::Pressed, ButtonState::Disabled] {
            let variant = theme.mask(MaskId::Button(Button::Max, state)).unwrap();
            assert_eq!(**variant, **base, "{state:?}");
            assert!(!Arc::ptr_eq(base, variant), "{state:?}");
        }
        let toggled = theme.mask(MaskId::Button(Button::Max, ButtonState::Toggled)).unwrap();
        assert_eq!(**toggled, patterns::MAX_TOGGLED.to_mask());
        let shade_toggled = theme
            .mask(MaskId::Button(Button::Shade, ButtonState::Toggled))
            .unwrap();
        assert_eq!(**shade_toggled, patterns::SHADE.to_mask());
    }

    #[test]
    fn test_authored_base_mask_feeds_toggled() {
        let mut bitmaps = HashMap::new();
        bitmaps.insert("max.xbm".to_string(), decor_parse::Xbm::parse(XBM_2X2).unwrap());
        let c = config(&[]);
        let theme = ThemeBuilder::new("t", &c).bitmaps(&bitmaps).build().unwrap();

        let toggled = theme.mask(MaskId::Button(Button::Max, ButtonState::Toggled)).unwrap();
        assert_eq!((toggled.width, toggled.height), (2, 2));
        let toggled_hover = theme
            .mask(MaskId::Button(Button::Max, ButtonState::ToggledHover))
            .unwrap();
        assert_eq!(toggled_hover.bits, vec![0x01, 0x02]);
        let desk = theme.mask(MaskId::Button(Button::Desk, ButtonState::Toggled)).unwrap();
        assert_eq!(**desk, patterns::DESK_TOGGLED.to_mask());
    }

    #[test]
    fn test_authored_variant_is_kept() {
        let mut bitmaps = HashMap::new();
        bitmaps.insert(
            "close_hover.xbm".to_string(),
            decor_parse::Xbm::parse(XBM_2X2).unwrap(),
        );
        let c = config(&[]);
        let theme = ThemeBuilder::new("t", &c).bitmaps(&bitmaps).build().unwrap();
        let hover = theme.mask(MaskId::Button(Button::Close, ButtonState::Hover)).unwrap();
        assert_eq!(hover.width, 2);
        let pressed = theme.mask(MaskId::Button(Button::Close, ButtonState::Pressed)).unwrap();
        assert_eq!(**pressed, patterns::CLOSE.to_mask());
    }

    // ============================================================================
    // Styles
    // ============================================================================

    #[test]
    fn test_absent_style_uses_default() {
        let theme = build(&[]);
        let title = theme.style(StyleId::Title(Focus::Focused));
        assert_eq!(**title, SurfaceStyle::fallback());
    }

    #[test]
    fn test_toggled_hover_follows_toggled() {
        let theme = build(&[
            ("window.active.button.toggled.bg", "raised gradient vertical"),
            ("window.active.button.toggled.bg.color", "#aabbcc"),
        ]);
        let toggled = theme.style(StyleId::Button(ButtonState::Toggled, Focus::Focused));
        assert_eq!(toggled.gradient, Gradient::Vertical);
        assert!(Arc::ptr_eq(
            toggled,
            theme.style(StyleId::Button(ButtonState::ToggledHover, Focus::Focused))
        ));
        assert!(!Arc::ptr_eq(
            toggled,
            theme.style(StyleId::Button(ButtonState::ToggledPressed, Focus::Focused))
        ));
    }

    #[test]
    fn test_hover_follows_unpressed() {
        let theme = build(&[("window.inactive.button.unpressed.bg", "flat solid border")]);
        let unpressed = theme.style(StyleId::Button(ButtonState::Unpressed, Focus::Unfocused));
        assert!(unpressed.border);
        assert!(Arc::ptr_eq(
            unpressed,
            theme.style(StyleId::Button(ButtonState::Hover, Focus::Unfocused))
        ));
    }

    #[test]
    fn test_label_may_be_parent_relative() {
        let theme = build(&[
            ("window.active.label.bg", "parentrelative"),
            ("window.active.title.bg", "parentrelative"),
        ]);
        assert!(theme.style(StyleId::Label(Focus::Focused)).is_parent_relative());
        let title = theme.style(StyleId::Title(Focus::Focused));
        assert!(!title.is_parent_relative());
        assert_eq!(title.relief, Relief::Raised);
        assert_eq!(title.bevel, Bevel::One);
    }

    #[test]
    fn test_osd_hilite_skips_parent_relative_label() {
        let theme = build(&[
            ("window.active.label.bg", "parentrelative"),
            ("window.active.title.bg", "raised gradient diagonal"),
        ]);
        assert!(Arc::ptr_eq(
            theme.style(StyleId::OsdHilite),
            theme.style(StyleId::Title(Focus::Focused))
        ));
        assert!(Arc::ptr_eq(
            theme.style(StyleId::OsdUnhilite),
            theme.style(StyleId::Label(Focus::Unfocused))
        ));
    }

    #[test]
    fn test_menu_disabled_selected_copies_selected() {
        let theme = build(&[("menu.items.active.bg", "sunken solid")]);
        assert!(Arc::ptr_eq(
            theme.style(StyleId::MenuDisabledSelected),
            theme.style(StyleId::MenuSelected)
        ));
    }

    // ============================================================================
    // Appearances
    // ============================================================================

    #[test]
    fn test_button_appearance_links() {
        let theme = build(&[]);
        let app = theme
            .button(Button::Iconify, ButtonState::Disabled, Focus::Unfocused)
            .unwrap();
        assert!(Arc::ptr_eq(
            &app.surface,
            theme.style(StyleId::Button(ButtonState::Disabled, Focus::Unfocused))
        ));
        let mask = app.mask().unwrap();
        assert!(Arc::ptr_eq(
            &mask.mask,
            theme.mask(MaskId::Button(Button::Iconify, ButtonState::Disabled)).unwrap()
        ));
        assert_eq!(*mask.color, Rgb::BLACK);
    }

    #[test]
    fn test_label_text() {
        let theme = build(&[
            ("window.label.text.justify", "Center"),
            ("window.inactive.label.text.font", "sans:shadow=y:shadowoffset=2"),
        ]);
        let text = theme.element(Element::Label(Focus::Unfocused)).text().unwrap();
        assert_eq!(text.justify, Justify::Center);
        assert_eq!(text.shadow.offset_y, 2);
        let focused = theme.element(Element::Label(Focus::Focused)).text().unwrap();
        assert_eq!(focused.shadow, TextShadow::NONE);
    }

    #[test]
    fn test_menu_text_shares_parent_relative() {
        let theme = build(&[]);
        let clear = theme.style(StyleId::ParentRelative);
        for element in [Element::MenuTextTitle, Element::MenuBulletSelected, Element::Icon] {
            assert!(Arc::ptr_eq(&theme.element(element).surface, clear));
        }
        assert!(matches!(theme.element(Element::Icon).texture, Texture::Bitmap(_)));
    }

    #[test]
    fn test_caller_fonts_are_shared() {
        let c = config(&[]);
        let font = Arc::new(Font::new("mono", 20));
        let theme = ThemeBuilder::new("t", &c)
            .font(FontSlot::MenuItem, Arc::clone(&font))
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(theme.font(FontSlot::MenuItem), &font));
        let text = theme.element(Element::MenuTextSelected).text().unwrap();
        assert!(Arc::ptr_eq(&text.font, &font));
        assert_eq!(theme.font(FontSlot::Osd).name, DefaultFontProvider::NAME);
        assert_eq!(theme.geometry().menu_font_height, 20);
    }

    // ============================================================================
    // Geometry
    // ============================================================================

    #[test]
    fn test_default_geometry() {
        let theme = build(&[]);
        let g = theme.geometry();
        // 12px font, flat unbordered label: 12, already even.
        assert_eq!(g.label_height, 12);
        assert_eq!(g.title_height, 12 + 2 * 3);
        assert_eq!(g.button_size, 10);
        assert_eq!(g.grip_width, 25);
    }

    #[test]
    fn test_label_height_rounds_up_to_even() {
        let theme = build(&[
            ("window.active.label.bg", "flat solid border"),
            ("window.active.label.text.font", "sans:shadow=y"),
        ]);
        // 12 + 1 shadow + 2 border = 15 -> 16
        assert_eq!(theme.geometry().win_font_height, 13);
        assert_eq!(theme.geometry().label_height, 16);
        assert_eq!(theme.geometry().label_height % 2, 0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let pairs = [
            ("window.active.title.bg", "raised gradient vertical"),
            ("window.active.title.bg.color", "#112233"),
            ("border.width", "2"),
        ];
        assert_eq!(build(&pairs), build(&pairs));
    }
}
