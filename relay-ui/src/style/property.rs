use super::value::{self, StyleValue};
use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

/// Style properties a `setStyle` command may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Width,
    Height,
    Left,
    Top,
    Right,
    Bottom,
    Padding,
    Margin,
    BorderWidth,
    BorderRadius,
    FontSize,
    Gap,
    Color,
    BackgroundColor,
    BorderColor,
    Opacity,
    FlexGrow,
    ZIndex,
    Display,
    Position,
    BoxSizing,
    Overflow,
    FlexDirection,
    BorderStyle,
    FontWeight,
    TextAlign,
    WhiteSpace,
    Cursor,
    FontFamily,
}

/// What a property's value has to look like
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind {
    Length { negative: bool, auto: bool },
    Color,
    Number { min: f32, max: f32 },
    Integer,
    Keyword(&'static [&'static str]),
    FontWeight,
    Text,
}

const DISPLAY: &[&str] = &[
    "block",
    "inline",
    "inline-block",
    "flex",
    "inline-flex",
    "grid",
    "none",
    "contents",
];
const POSITION: &[&str] = &["static", "relative", "absolute", "fixed", "sticky"];
const BOX_SIZING: &[&str] = &["border-box", "content-box"];
const OVERFLOW: &[&str] = &["visible", "hidden", "scroll", "auto", "clip"];
const FLEX_DIRECTION: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
const BORDER_STYLE: &[&str] = &["none", "hidden", "solid", "dashed", "dotted", "double"];
const TEXT_ALIGN: &[&str] = &["left", "right", "center", "justify", "start", "end"];
const WHITE_SPACE: &[&str] = &["normal", "nowrap", "pre", "pre-wrap", "pre-line"];
const CURSOR: &[&str] = &[
    "auto",
    "default",
    "pointer",
    "text",
    "move",
    "grab",
    "not-allowed",
];

impl StyleProperty {
    pub const ALL: &'static [StyleProperty] = &[
        Self::Width,
        Self::Height,
        Self::Left,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Padding,
        Self::Margin,
        Self::BorderWidth,
        Self::BorderRadius,
        Self::FontSize,
        Self::Gap,
        Self::Color,
        Self::BackgroundColor,
        Self::BorderColor,
        Self::Opacity,
        Self::FlexGrow,
        Self::ZIndex,
        Self::Display,
        Self::Position,
        Self::BoxSizing,
        Self::Overflow,
        Self::FlexDirection,
        Self::BorderStyle,
        Self::FontWeight,
        Self::TextAlign,
        Self::WhiteSpace,
        Self::Cursor,
        Self::FontFamily,
    ];

    /// Name as used on `element.style` from JavaScript
    pub fn js_name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::BorderWidth => "borderWidth",
            Self::BorderRadius => "borderRadius",
            Self::FontSize => "fontSize",
            Self::Gap => "gap",
            Self::Color => "color",
            Self::BackgroundColor => "backgroundColor",
            Self::BorderColor => "borderColor",
            Self::Opacity => "opacity",
            Self::FlexGrow => "flexGrow",
            Self::ZIndex => "zIndex",
            Self::Display => "display",
            Self::Position => "position",
            Self::BoxSizing => "boxSizing",
            Self::Overflow => "overflow",
            Self::FlexDirection => "flexDirection",
            Self::BorderStyle => "borderStyle",
            Self::FontWeight => "fontWeight",
            Self::TextAlign => "textAlign",
            Self::WhiteSpace => "whiteSpace",
            Self::Cursor => "cursor",
            Self::FontFamily => "fontFamily",
        }
    }

    /// Name as written in a stylesheet
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BorderWidth => "border-width",
            Self::BorderRadius => "border-radius",
            Self::FontSize => "font-size",
            Self::BackgroundColor => "background-color",
            Self::BorderColor => "border-color",
            Self::FlexGrow => "flex-grow",
            Self::ZIndex => "z-index",
            Self::BoxSizing => "box-sizing",
            Self::FlexDirection => "flex-direction",
            Self::BorderStyle => "border-style",
            Self::FontWeight => "font-weight",
            Self::TextAlign => "text-align",
            Self::WhiteSpace => "white-space",
            Self::FontFamily => "font-family",
            other => other.js_name(),
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Self::Width | Self::Height | Self::Left | Self::Top | Self::Right | Self::Bottom => {
                ValueKind::Length {
                    negative: !matches!(self, Self::Width | Self::Height),
                    auto: true,
                }
            }
            Self::Margin => ValueKind::Length {
                negative: true,
                auto: true,
            },
            Self::Padding | Self::BorderWidth | Self::BorderRadius | Self::FontSize | Self::Gap => {
                ValueKind::Length {
                    negative: false,
                    auto: false,
                }
            }
            Self::Color | Self::BackgroundColor | Self::BorderColor => ValueKind::Color,
            Self::Opacity => ValueKind::Number { min: 0.0, max: 1.0 },
            Self::FlexGrow => ValueKind::Number {
                min: 0.0,
                max: f32::MAX,
            },
            Self::ZIndex => ValueKind::Integer,
            Self::Display => ValueKind::Keyword(DISPLAY),
            Self::Position => ValueKind::Keyword(POSITION),
            Self::BoxSizing => ValueKind::Keyword(BOX_SIZING),
            Self::Overflow => ValueKind::Keyword(OVERFLOW),
            Self::FlexDirection => ValueKind::Keyword(FLEX_DIRECTION),
            Self::BorderStyle => ValueKind::Keyword(BORDER_STYLE),
            Self::FontWeight => ValueKind::FontWeight,
            Self::TextAlign => ValueKind::Keyword(TEXT_ALIGN),
            Self::WhiteSpace => ValueKind::Keyword(WHITE_SPACE),
            Self::Cursor => ValueKind::Keyword(CURSOR),
            Self::FontFamily => ValueKind::Text,
        }
    }

    /// Validate a raw value string against this property
    pub fn parse_value(self, raw: &str) -> Result<StyleValue, CommandError> {
        value::parse(self, raw)
    }
}

impl FromStr for StyleProperty {
    type Err = CommandError;

    /// Accepts either the JavaScript (`backgroundColor`) or CSS (`background-color`) spelling
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.js_name() == name || p.css_name() == name)
            .ok_or_else(|| CommandError::UnsupportedStyle(name.to_string()))
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.js_name())
    }
}
