use super::property::{StyleProperty, ValueKind};
use crate::error::CommandError;
use std::fmt;

const GLOBAL_KEYWORDS: &[&str] = &["inherit", "initial", "unset"];

const NAMED_COLORS: &[&str] = &[
    "transparent",
    "black",
    "white",
    "red",
    "green",
    "blue",
    "yellow",
    "cyan",
    "magenta",
    "purple",
    "orange",
    "pink",
    "brown",
    "gray",
    "grey",
    "silver",
    "maroon",
    "olive",
    "lime",
    "teal",
    "navy",
    "aqua",
    "fuchsia",
];

const FONT_WEIGHTS: &[&str] = &["normal", "bold", "bolder", "lighter"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Auto,
    Px(f32),
    Percent(f32),
    Em(f32),
    Rem(f32),
    Vw(f32),
    Vh(f32),
}

impl Length {
    fn magnitude(self) -> f32 {
        match self {
            Self::Auto => 0.0,
            Self::Px(v)
            | Self::Percent(v)
            | Self::Em(v)
            | Self::Rem(v)
            | Self::Vw(v)
            | Self::Vh(v) => v,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Em(v) => write!(f, "{v}em"),
            Self::Rem(v) => write!(f, "{v}rem"),
            Self::Vw(v) => write!(f, "{v}vw"),
            Self::Vh(v) => write!(f, "{v}vh"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Named(&'static str),
    CurrentColor,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rgba { r, g, b, a } if a >= 1.0 => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Self::Named(name) => f.write_str(name),
            Self::CurrentColor => f.write_str("currentcolor"),
        }
    }
}

/// A validated style value, rendered back to CSS text by `Display`
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// `inherit`, `initial` or `unset`
    Global(&'static str),
    Length(Length),
    Color(Color),
    Number(f32),
    Integer(i32),
    Keyword(&'static str),
    Text(String),
}

impl StyleValue {
    pub fn px(value: f32) -> Self {
        Self::Length(Length::Px(value))
    }
}

impl From<Length> for StyleValue {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global(keyword) | Self::Keyword(keyword) => f.write_str(keyword),
            Self::Length(length) => fmt::Display::fmt(length, f),
            Self::Color(color) => fmt::Display::fmt(color, f),
            Self::Number(n) => write!(f, "{n}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

pub(crate) fn parse(property: StyleProperty, raw: &str) -> Result<StyleValue, CommandError> {
    let invalid = || CommandError::InvalidStyleValue {
        property: property.js_name(),
        value: raw.to_string(),
    };

    let value = raw.trim();
    if let Some(keyword) = match_keyword(GLOBAL_KEYWORDS, value) {
        return Ok(StyleValue::Global(keyword));
    }

    let parsed = match property.kind() {
        ValueKind::Length { negative, auto } => parse_length(value)
            .filter(|length| auto || *length != Length::Auto)
            .filter(|length| negative || length.magnitude() >= 0.0)
            .map(StyleValue::Length),
        ValueKind::Color => parse_color(value).map(StyleValue::Color),
        ValueKind::Number { min, max } => parse_number(value)
            .filter(|n| (min..=max).contains(n))
            .map(StyleValue::Number),
        ValueKind::Integer => value.parse::<i32>().ok().map(StyleValue::Integer),
        ValueKind::Keyword(allowed) => match_keyword(allowed, value).map(StyleValue::Keyword),
        ValueKind::FontWeight => match_keyword(FONT_WEIGHTS, value)
            .map(StyleValue::Keyword)
            .or_else(|| {
                value
                    .parse::<i32>()
                    .ok()
                    .filter(|w| (100..=900).contains(w) && w % 100 == 0)
                    .map(StyleValue::Integer)
            }),
        ValueKind::Text => (!value.is_empty()).then(|| StyleValue::Text(value.to_string())),
    };

    parsed.ok_or_else(invalid)
}

fn match_keyword(allowed: &'static [&'static str], value: &str) -> Option<&'static str> {
    allowed
        .iter()
        .copied()
        .find(|keyword| keyword.eq_ignore_ascii_case(value))
}

fn parse_number(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|n| n.is_finite())
}

fn parse_length(value: &str) -> Option<Length> {
    if value.eq_ignore_ascii_case("auto") {
        return Some(Length::Auto);
    }

    let split = value
        .find(|c: char| c.is_ascii_alphabetic() || c == '%')
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number = parse_number(number)?;

    match unit.to_ascii_lowercase().as_str() {
        "" if number == 0.0 => Some(Length::Px(0.0)),
        "px" => Some(Length::Px(number)),
        "%" => Some(Length::Percent(number)),
        "em" => Some(Length::Em(number)),
        "rem" => Some(Length::Rem(number)),
        "vw" => Some(Length::Vw(number)),
        "vh" => Some(Length::Vh(number)),
        _ => None,
    }
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    if lower == "currentcolor" {
        return Some(Color::CurrentColor);
    }
    if let Some(name) = match_keyword(NAMED_COLORS, &lower) {
        return Some(Color::Named(name));
    }

    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();

    let channel = |s: &str| s.parse::<u8>().ok();
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
        [r, g, b, a] => {
            let a = parse_number(*a).filter(|a| (0.0..=1.0).contains(a))?;
            Some(Color::rgba(channel(*r)?, channel(*g)?, channel(*b)?, a))
        }
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (r, g, b, a) = match hex.len() {
        3 => (digit(0)?, digit(1)?, digit(2)?, 255),
        4 => (digit(0)?, digit(1)?, digit(2)?, digit(3)?),
        6 => (pair(0)?, pair(2)?, pair(4)?, 255),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return None,
    };

    Some(Color::rgba(r, g, b, a as f32 / 255.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(property: StyleProperty, raw: &str) -> StyleValue {
        property.parse_value(raw).unwrap()
    }

    #[test]
    fn test_lengths() {
        assert_eq!(
            parse_ok(StyleProperty::Width, "120px"),
            StyleValue::Length(Length::Px(120.0))
        );
        assert_eq!(
            parse_ok(StyleProperty::Height, "50%"),
            StyleValue::Length(Length::Percent(50.0))
        );
        assert_eq!(
            parse_ok(StyleProperty::FontSize, "1.5rem"),
            StyleValue::Length(Length::Rem(1.5))
        );
        assert_eq!(
            parse_ok(StyleProperty::Padding, "0"),
            StyleValue::Length(Length::Px(0.0))
        );
        assert_eq!(
            parse_ok(StyleProperty::Left, "-4px"),
            StyleValue::Length(Length::Px(-4.0))
        );
        assert_eq!(
            parse_ok(StyleProperty::Margin, "AUTO"),
            StyleValue::Length(Length::Auto)
        );
    }

    #[test]
    fn test_invalid_lengths() {
        assert!(StyleProperty::Width.parse_value("12").is_err());
        assert!(StyleProperty::Width.parse_value("-3px").is_err());
        assert!(StyleProperty::Width.parse_value("12pt").is_err());
        assert!(StyleProperty::Padding.parse_value("auto").is_err());
        assert!(StyleProperty::Top.parse_value("px").is_err());
        assert!(StyleProperty::Top.parse_value("").is_err());
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            parse_ok(StyleProperty::Color, "red"),
            StyleValue::Color(Color::Named("red"))
        );
        assert_eq!(
            parse_ok(StyleProperty::Color, "#fff"),
            StyleValue::Color(Color::rgb(255, 255, 255))
        );
        assert_eq!(
            parse_ok(StyleProperty::BackgroundColor, "#1a2B3c"),
            StyleValue::Color(Color::rgb(0x1a, 0x2b, 0x3c))
        );
        assert_eq!(
            parse_ok(StyleProperty::BorderColor, "rgba(10, 20, 30, 0.5)"),
            StyleValue::Color(Color::rgba(10, 20, 30, 0.5))
        );
        assert_eq!(
            parse_ok(StyleProperty::Color, "rgb(1,2,3)"),
            StyleValue::Color(Color::rgb(1, 2, 3))
        );
        assert_eq!(
            parse_ok(StyleProperty::Color, "CurrentColor"),
            StyleValue::Color(Color::CurrentColor)
        );
    }

    #[test]
    fn test_invalid_colors() {
        for bad in ["#ff", "#ggg", "rgb(300, 0, 0)", "rgba(0,0,0,2)", "rgb(1,2)", "blurple"] {
            assert!(
                StyleProperty::Color.parse_value(bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_keywords_and_numbers() {
        assert_eq!(
            parse_ok(StyleProperty::Display, "Flex"),
            StyleValue::Keyword("flex")
        );
        assert_eq!(parse_ok(StyleProperty::Opacity, "0.25"), StyleValue::Number(0.25));
        assert_eq!(parse_ok(StyleProperty::ZIndex, "-2"), StyleValue::Integer(-2));
        assert_eq!(parse_ok(StyleProperty::FontWeight, "700"), StyleValue::Integer(700));
        assert_eq!(
            parse_ok(StyleProperty::FontWeight, "bold"),
            StyleValue::Keyword("bold")
        );
        assert_eq!(
            parse_ok(StyleProperty::FontFamily, " Inter, sans-serif "),
            StyleValue::Text("Inter, sans-serif".into())
        );

        assert!(StyleProperty::Display.parse_value("table").is_err());
        assert!(StyleProperty::Opacity.parse_value("1.5").is_err());
        assert!(StyleProperty::FontWeight.parse_value("750").is_err());
        assert!(StyleProperty::ZIndex.parse_value("1.5").is_err());
        assert!(StyleProperty::FontFamily.parse_value("  ").is_err());
    }

    #[test]
    fn test_global_keywords_apply_to_every_property() {
        for &property in StyleProperty::ALL {
            assert_eq!(
                property.parse_value("inherit"),
                Ok(StyleValue::Global("inherit"))
            );
        }
    }

    #[test]
    fn test_invalid_value_error_names_property() {
        assert_eq!(
            StyleProperty::BackgroundColor.parse_value("nope"),
            Err(CommandError::InvalidStyleValue {
                property: "backgroundColor",
                value: "nope".into(),
            })
        );
    }

    #[test]
    fn test_display_renders_css_text() {
        assert_eq!(StyleValue::px(12.0).to_string(), "12px");
        assert_eq!(StyleValue::px(0.5).to_string(), "0.5px");
        assert_eq!(StyleValue::Color(Color::rgb(255, 0, 16)).to_string(), "#ff0010");
        assert_eq!(
            StyleValue::Color(Color::rgba(1, 2, 3, 0.5)).to_string(),
            "rgba(1, 2, 3, 0.5)"
        );
        assert_eq!(StyleValue::Keyword("border-box").to_string(), "border-box");
        assert_eq!(StyleValue::Integer(3).to_string(), "3");
    }
}
