//! Alignment of a shape against a reference position.
//!
//! Alignment tokens are written `"{vertical}-{horizontal}"` (for example
//! `"top-left"` or `"bot-center"`). `-`, `_` and spaces all separate the two
//! words. A single center synonym (`"center"`, `"middle"`, `"mid"`) centers
//! both axes.

use std::fmt;
use std::str::FromStr;

use crate::{Point, Size};

const CENTER_WORDS: &[&str] = &["center", "middle", "mid"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignmentError {
    #[error("alignment '{0}' must be a center word or two words '{{vertical}}-{{horizontal}}'")]
    InvalidAlignmentFormat(String),
    #[error("'{value}' is not a valid {axis} alignment")]
    InvalidAlignmentValue { axis: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

impl FromStr for HAlign {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "lft" => Ok(HAlign::Left),
            "center" | "middle" | "mid" => Ok(HAlign::Center),
            "right" | "rgt" => Ok(HAlign::Right),
            other => Err(AlignmentError::InvalidAlignmentValue {
                axis: "horizontal",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for VAlign {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VAlign::Top),
            "center" | "middle" | "mid" => Ok(VAlign::Center),
            "bottom" | "bot" => Ok(VAlign::Bottom),
            other => Err(AlignmentError::InvalidAlignmentValue {
                axis: "vertical",
                value: other.to_string(),
            }),
        }
    }
}

/// A horizontal and vertical alignment pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment::new(HAlign::Left, VAlign::Top);
    pub const CENTER: Alignment = Alignment::new(HAlign::Center, VAlign::Center);

    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn parse(token: &str) -> Result<Self, AlignmentError> {
        let words: Vec<&str> = token.split(['-', '_', ' ']).collect();
        match words.as_slice() {
            [single] => {
                if CENTER_WORDS.contains(single) {
                    Ok(Alignment::CENTER)
                } else {
                    Err(AlignmentError::InvalidAlignmentValue {
                        axis: "center",
                        value: (*single).to_string(),
                    })
                }
            }
            [vertical, horizontal] => Ok(Alignment {
                horizontal: horizontal.parse()?,
                vertical: vertical.parse()?,
            }),
            _ => Err(AlignmentError::InvalidAlignmentFormat(token.to_string())),
        }
    }
}

impl FromStr for Alignment {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alignment::parse(s)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            VAlign::Top => "top",
            VAlign::Center => "center",
            VAlign::Bottom => "bottom",
        };
        let horizontal = match self.horizontal {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        };
        write!(f, "{vertical}-{horizontal}")
    }
}

/// Top-left corner of a box of `size` aligned on `ref_pos`.
pub fn anchor_to_top_left(ref_pos: Point, size: Size, alignment: Alignment) -> Point {
    let dx = match alignment.horizontal {
        HAlign::Left => 0,
        HAlign::Center => -size.width.div_euclid(2),
        HAlign::Right => -size.width,
    };
    let dy = match alignment.vertical {
        VAlign::Top => 0,
        VAlign::Center => -size.height.div_euclid(2),
        VAlign::Bottom => -size.height,
    };
    ref_pos.offset(dx, dy)
}

/// Center of a box of `size` aligned on `ref_pos`.
pub fn anchor_to_center(ref_pos: Point, size: Size, alignment: Alignment) -> Point {
    let half_w = size.width.div_euclid(2);
    let half_h = size.height.div_euclid(2);
    let dx = match alignment.horizontal {
        HAlign::Left => half_w,
        HAlign::Center => 0,
        HAlign::Right => -half_w,
    };
    let dy = match alignment.vertical {
        VAlign::Top => half_h,
        VAlign::Center => 0,
        VAlign::Bottom => -half_h,
    };
    ref_pos.offset(dx, dy)
}

/// A reference position together with how a shape aligns on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub position: Point,
    pub alignment: Alignment,
}

impl Anchor {
    pub fn new(position: impl Into<Point>, alignment: Alignment) -> Self {
        Self {
            position: position.into(),
            alignment,
        }
    }

    pub fn top_left(&self, size: Size) -> Point {
        anchor_to_top_left(self.position, size, self.alignment)
    }

    pub fn center(&self, size: Size) -> Point {
        anchor_to_center(self.position, size, self.alignment)
    }
}
