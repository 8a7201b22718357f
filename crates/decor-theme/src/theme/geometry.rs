//! Geometry derived from resolved fonts, shadows and surfaces.

use std::sync::Arc;

use serde::Serialize;

use crate::attr::AttrMap;
use crate::font::Font;
use crate::ids::{Dim, Element, Focus, FontSlot};
use crate::style::Appearance;

pub const GRIP_WIDTH: i32 = 25;

/// Scalars computed after every font, padding and surface is resolved.
/// None of them can be configured directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub win_font_height: i32,
    pub label_height: i32,
    pub title_height: i32,
    pub menu_title_font_height: i32,
    pub menu_title_label_height: i32,
    pub menu_title_height: i32,
    pub menu_font_height: i32,
    pub button_size: i32,
    pub grip_width: i32,
}

fn shadow_y(elements: &AttrMap<Element, Appearance>, element: Element) -> i32 {
    elements
        .get(element)
        .text()
        .map_or(0, |t| t.shadow.offset_y)
}

fn vertical_margins(elements: &AttrMap<Element, Appearance>, element: Element) -> i32 {
    elements.get(element).surface.margins().vertical()
}

impl Geometry {
    pub fn derive(
        fonts: &AttrMap<FontSlot, Arc<Font>>,
        dims: &AttrMap<Dim, i32>,
        elements: &AttrMap<Element, Appearance>,
    ) -> Self {
        let padding_y = *dims.get(Dim::PaddingY);

        let win_font_height = Focus::ALL
            .into_iter()
            .map(|f| fonts.get(FontSlot::window(f)).height(shadow_y(elements, Element::Label(f))))
            .max()
            .unwrap_or(0);

        let label_margins = Focus::ALL
            .into_iter()
            .map(|f| vertical_margins(elements, Element::Label(f)))
            .max()
            .unwrap_or(0);

        let mut label_height = win_font_height + label_margins;
        label_height += label_height.rem_euclid(2);

        let menu_title_font_height = fonts
            .get(FontSlot::MenuTitle)
            .height(shadow_y(elements, Element::MenuTextTitle));
        let menu_title_label_height =
            menu_title_font_height + vertical_margins(elements, Element::MenuTitle);

        let menu_font_height = fonts
            .get(FontSlot::MenuItem)
            .height(shadow_y(elements, Element::MenuTextNormal));

        Self {
            win_font_height,
            label_height,
            title_height: label_height + 2 * padding_y,
            menu_title_font_height,
            menu_title_label_height,
            menu_title_height: menu_title_label_height + 2 * padding_y,
            menu_font_height,
            button_size: label_height - 2,
            grip_width: GRIP_WIDTH,
        }
    }
}
