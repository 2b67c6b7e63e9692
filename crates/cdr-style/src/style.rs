//! Style attribute records.
//!
//! Every attribute is optional. `Some` means the style sets it explicitly
//! and overrides whatever an ancestor set; `None` inherits.

use crate::Inherit;
use cdr_core::CdrColor;

/// Character set and font name. Always overridden together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Character set code.
    pub char_set: u16,
    /// Font family name.
    pub name: String,
}

impl FontSpec {
    /// Creates a font spec.
    pub fn new(char_set: u16, name: impl Into<String>) -> Self {
        Self {
            char_set,
            name: name.into(),
        }
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Align {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Justified, last line flush left.
    Justify,
    /// Justified including the last line.
    ForceJustify,
}

impl Align {
    /// Decodes a stored alignment code. `0` means "no alignment".
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Left),
            2 => Some(Self::Center),
            3 => Some(Self::Right),
            4 => Some(Self::Justify),
            5 => Some(Self::ForceJustify),
            _ => None,
        }
    }
}

/// Outline attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LineStyle {
    /// Line type flags (none, solid, dashed...).
    pub line_type: u16,
    /// Cap style code.
    pub caps_type: u16,
    /// Join style code.
    pub join_type: u16,
    /// Width in document units.
    pub width: f64,
    /// Nib stretch.
    pub stretch: f64,
    /// Nib angle in radians.
    pub angle: f64,
    /// Outline color.
    pub color: CdrColor,
    /// Dash pattern, alternating dash and gap lengths.
    pub dash_array: Vec<u32>,
}

/// A color stop along a gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Stop color.
    pub color: CdrColor,
    /// Position along the gradient, `0.0..=1.0`.
    pub offset: f64,
}

/// Fountain fill geometry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Gradient {
    /// Gradient type (linear, radial, conical, square).
    pub kind: u8,
    /// Color blend mode.
    pub mode: u8,
    /// Angle in radians.
    pub angle: f64,
    /// Mid-point bias.
    pub mid_point: f64,
    /// Edge pad, percent.
    pub edge_offset: i32,
    /// Horizontal center offset, percent.
    pub center_x_offset: i32,
    /// Vertical center offset, percent.
    pub center_y_offset: i32,
    /// Color stops in order.
    pub stops: Vec<GradientStop>,
}

/// Fill attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FillStyle {
    /// Fill type code (none, solid, gradient...).
    pub fill_type: u16,
    /// Primary color.
    pub color1: CdrColor,
    /// Secondary color, used by two-color patterns.
    pub color2: CdrColor,
    /// Gradient, for fountain fills.
    pub gradient: Gradient,
}

/// A style record: sparse attribute overrides on top of an optional parent.
///
/// # Example
///
/// ```rust
/// use cdr_style::{Inherit, Style};
///
/// let heading = Style {
///     parent_id: 1,
///     font_size: Some(18.0),
///     ..Style::default()
/// };
/// assert_eq!(heading.parent(), Some(1));
/// assert_eq!(Style::default().parent(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Parent style id; `0` is a root.
    pub parent_id: u32,
    /// Character set and font name.
    pub font: Option<FontSpec>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Paragraph alignment.
    pub align: Option<Align>,
    /// Left paragraph indent.
    pub left_indent: Option<f64>,
    /// First-line indent.
    pub first_indent: Option<f64>,
    /// Right paragraph indent.
    pub right_indent: Option<f64>,
    /// Outline.
    pub line_style: Option<LineStyle>,
    /// Fill.
    pub fill_style: Option<FillStyle>,
}

impl Style {
    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.font_size.is_none()
            && self.align.is_none()
            && self.left_indent.is_none()
            && self.first_indent.is_none()
            && self.right_indent.is_none()
            && self.line_style.is_none()
            && self.fill_style.is_none()
    }
}

fn set_if_some<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
    if src.is_some() {
        dst.clone_from(src);
    }
}

impl Inherit for Style {
    fn parent(&self) -> Option<u32> {
        (self.parent_id != 0).then_some(self.parent_id)
    }

    fn apply_override(&mut self, other: &Self) {
        set_if_some(&mut self.font, &other.font);
        set_if_some(&mut self.font_size, &other.font_size);
        set_if_some(&mut self.align, &other.align);
        set_if_some(&mut self.left_indent, &other.left_indent);
        set_if_some(&mut self.first_indent, &other.first_indent);
        set_if_some(&mut self.right_indent, &other.right_indent);
        set_if_some(&mut self.line_style, &other.line_style);
        set_if_some(&mut self.fill_style, &other.fill_style);
    }

    fn clear_parent(&mut self) {
        self.parent_id = 0;
    }
}
