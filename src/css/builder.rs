//! Layout builder: property bag → scoped CSS for one component.
//!
//! Declarations are collected in a fixed order (display, flex/grid, advanced,
//! sizing, spacing, border, shadow, background, typography) into a
//! [`StyleSheet`], then rendered as one base block plus media blocks.

use crate::bag::{keys, PropertyBag};
use crate::breakpoint::Breakpoint;
use crate::config::CompileOptions;
use crate::css::generate::{push_responsive, push_responsive_declarations};
use crate::css::model::{ClassName, Declaration, StyleSheet};
use crate::theme::Theme;
use crate::value::{
    AlignItems, BackgroundImage, BackgroundRepeat, BorderRadiusValue, BorderValue, BoxModelValue,
    ColorToken, Dimension, Display, FlexDirection, FlexWrap, FontSize, FontWeight, GridColumns,
    JustifyContent, LetterSpacing, LineHeight, Opacity, Overflow, Position, ShadowValue,
    SizeProperty, TextAlign, ZIndex,
};

/// Compiles property bags against a theme and options.
#[derive(Debug, Clone, Copy)]
pub struct LayoutBuilder<'a> {
    theme: &'a Theme,
    options: &'a CompileOptions,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(theme: &'a Theme, options: &'a CompileOptions) -> Self {
        Self { theme, options }
    }

    /// Compile `props` to CSS text scoped to `.{class_name}`.
    pub fn build(&self, class_name: &ClassName, props: &PropertyBag) -> String {
        self.build_sheet(class_name, props).to_css()
    }

    /// Compile `props` to a [`StyleSheet`] without rendering it.
    pub fn build_sheet(&self, class_name: &ClassName, props: &PropertyBag) -> StyleSheet {
        let mut sheet = StyleSheet::new(class_name.clone());

        self.push_display(&mut sheet, props);
        let flex = props.has_flex_in_any_breakpoint();
        let grid = props.has_grid_in_any_breakpoint();
        if flex {
            self.push_flex(&mut sheet, props);
        }
        if grid {
            self.push_grid(&mut sheet, props);
        }
        self.push_advanced(&mut sheet, props);
        self.push_sizing(&mut sheet, props);
        self.push_spacing(&mut sheet, props);
        self.push_border(&mut sheet, props);
        self.push_shadow(&mut sheet, props);
        self.push_background(&mut sheet, props);
        self.push_typography(&mut sheet, props);

        tracing::debug!(
            class = %class_name,
            flex,
            grid,
            declarations = sheet.len(),
            "compiled component css"
        );
        sheet
    }

    fn push_display(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(display) = props.get::<Display>(keys::DISPLAY) {
            push_responsive(sheet, "display", &display, |d| d.as_str().to_string());
        }
    }

    fn push_flex(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(direction) = props.get::<FlexDirection>(keys::FLEX_DIRECTION) {
            push_responsive(sheet, "flex-direction", &direction, |d| d.as_str().to_string());
        }
        if let Some(justify) = props.get::<JustifyContent>(keys::JUSTIFY_CONTENT) {
            push_responsive(sheet, "justify-content", &justify, |j| j.css_value().to_string());
        }
        self.push_align_items(sheet, props);
        if let Some(wrap) = props.get::<FlexWrap>(keys::FLEX_WRAP) {
            push_responsive(sheet, "flex-wrap", &wrap, |w| w.as_str().to_string());
        }
        self.push_gap(sheet, props);
    }

    fn push_grid(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(columns) = props.get::<GridColumns>(keys::GRID_COLUMNS) {
            push_responsive(sheet, "grid-template-columns", &columns, |c| c.css_value());
        }
        self.push_gap(sheet, props);
        self.push_align_items(sheet, props);
    }

    fn push_align_items(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(align) = props.get::<AlignItems>(keys::ALIGN_ITEMS) {
            push_responsive(sheet, "align-items", &align, |a| a.css_value().to_string());
        }
    }

    fn push_gap(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(gap) = props.get::<Dimension>(keys::GAP) {
            push_responsive(sheet, "gap", &gap, Dimension::css_length);
        }
    }

    fn push_advanced(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(position) = props.get::<Position>(keys::POSITION) {
            push_responsive(sheet, "position", &position, |p| p.css_value().to_string());
        }
        if let Some(z_index) = props.get::<ZIndex>(keys::Z_INDEX) {
            push_responsive(sheet, "z-index", &z_index, |z| z.css_value());
        }
        if let Some(opacity) = props.get::<Opacity>(keys::OPACITY) {
            push_responsive(sheet, "opacity", &opacity, |o| o.css_value());
        }
        if let Some(overflow) = props.get::<Overflow>(keys::OVERFLOW) {
            push_responsive(sheet, "overflow", &overflow, |o| o.css_value().to_string());
        }
    }

    fn push_sizing(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        for property in SizeProperty::ALL {
            if let Some(size) = props.get::<Dimension>(property.key()) {
                push_responsive(sheet, property.css_name(), &size, |d| d.css_value_for(property));
            }
        }
    }

    fn push_spacing(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(padding) = props.get::<BoxModelValue>(keys::PADDING) {
            push_responsive(sheet, "padding", &padding, BoxModelValue::css_padding);
        }
        if let Some(margin) = props.get::<BoxModelValue>(keys::MARGIN) {
            push_responsive(sheet, "margin", &margin, BoxModelValue::css_margin);
        }
    }

    fn push_border(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        let fallback = self.options.color_fallback.as_str();
        if let Some(border) = props.get::<BorderValue>(keys::BORDER) {
            push_responsive_declarations(sheet, &border, |b| b.declarations(self.theme, fallback));
        }
        if let Some(radius) = props.get::<BorderRadiusValue>(keys::BORDER_RADIUS) {
            push_responsive_declarations(sheet, &radius, BorderRadiusValue::declarations);
        }
    }

    fn push_shadow(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(shadow) = props.get::<ShadowValue>(keys::SHADOW) {
            let presets = &self.options.shadow_presets;
            push_responsive(sheet, "box-shadow", &shadow, |s| s.css_value(presets));
        }
    }

    fn push_background(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(color) = props.get::<ColorToken>(keys::BACKGROUND_COLOR) {
            push_responsive(sheet, "background-color", &color, |c| self.color(c));
        }

        let Some(image) = props.get::<BackgroundImage>(keys::BACKGROUND_IMAGE) else {
            return;
        };
        if !image.any_effective(|i| !i.is_empty()) {
            return;
        }
        push_responsive(sheet, "background-image", &image, BackgroundImage::css_value);

        let defaults = &self.options.background;
        match props.get::<String>(keys::BACKGROUND_SIZE) {
            Some(size) => push_responsive(sheet, "background-size", &size, |s| s.trim().to_string()),
            None => {
                sheet.push(Breakpoint::Mobile, Declaration::new("background-size", &*defaults.size));
            }
        }
        match props.get::<String>(keys::BACKGROUND_POSITION) {
            Some(position) => {
                push_responsive(sheet, "background-position", &position, |p| p.trim().to_string())
            }
            None => {
                sheet.push(
                    Breakpoint::Mobile,
                    Declaration::new("background-position", &*defaults.position),
                );
            }
        }
        match props.get::<BackgroundRepeat>(keys::BACKGROUND_REPEAT) {
            Some(repeat) => {
                push_responsive(sheet, "background-repeat", &repeat, |r| r.as_str().to_string())
            }
            None => {
                sheet.push(
                    Breakpoint::Mobile,
                    Declaration::new("background-repeat", defaults.repeat.as_str()),
                );
            }
        }
    }

    fn push_typography(&self, sheet: &mut StyleSheet, props: &PropertyBag) {
        if let Some(size) = props.get::<FontSize>(keys::FONT_SIZE) {
            push_responsive(sheet, "font-size", &size, |s| s.css_value(self.theme));
        }
        if let Some(weight) = props.get::<FontWeight>(keys::FONT_WEIGHT) {
            push_responsive(sheet, "font-weight", &weight, |w| w.css_value(self.theme));
        }
        if let Some(line_height) = props.get::<LineHeight>(keys::LINE_HEIGHT) {
            push_responsive(sheet, "line-height", &line_height, LineHeight::css_value);
        }
        if let Some(spacing) = props.get::<LetterSpacing>(keys::LETTER_SPACING) {
            push_responsive(sheet, "letter-spacing", &spacing, LetterSpacing::css_value);
        }
        if let Some(color) = props.get::<ColorToken>(keys::COLOR) {
            push_responsive(sheet, "color", &color, |c| self.color(c));
        }
        if let Some(align) = props.get::<TextAlign>(keys::TEXT_ALIGN) {
            push_responsive(sheet, "text-align", &align, |a| a.as_str().to_string());
        }
    }

    fn color(&self, token: &ColorToken) -> String {
        token.resolve(self.theme, &self.options.color_fallback)
    }
}

/// Compile one component's properties with a throwaway [`LayoutBuilder`].
pub fn compile(
    class_name: &ClassName,
    props: &PropertyBag,
    theme: &Theme,
    options: &CompileOptions,
) -> String {
    LayoutBuilder::new(theme, options).build(class_name, props)
}
