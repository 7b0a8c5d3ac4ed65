//! The default template set: sixteen digitized unistroke shapes.
//!
//! The coordinates are screen samples (y grows downwards) captured from a
//! single pointer-down-to-up motion each. [`DefaultTemplate::ALL`] lists them in
//! the order a [`Recognizer`](crate::Recognizer) registers them, which is also
//! the tie-breaking order.

mod data;

use crate::float_types::Real;
use crate::geometry::Point;
use std::fmt;

/// One of the built-in reference shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultTemplate {
    Triangle,
    X,
    Rectangle,
    Circle,
    Check,
    Caret,
    Zigzag,
    Arrow,
    LeftSquareBracket,
    RightSquareBracket,
    V,
    Delete,
    LeftCurlyBrace,
    RightCurlyBrace,
    Star,
    Pigtail,
}

impl DefaultTemplate {
    /// Every default shape, in registration order.
    pub const ALL: [DefaultTemplate; 16] = [
        DefaultTemplate::Triangle,
        DefaultTemplate::X,
        DefaultTemplate::Rectangle,
        DefaultTemplate::Circle,
        DefaultTemplate::Check,
        DefaultTemplate::Caret,
        DefaultTemplate::Zigzag,
        DefaultTemplate::Arrow,
        DefaultTemplate::LeftSquareBracket,
        DefaultTemplate::RightSquareBracket,
        DefaultTemplate::V,
        DefaultTemplate::Delete,
        DefaultTemplate::LeftCurlyBrace,
        DefaultTemplate::RightCurlyBrace,
        DefaultTemplate::Star,
        DefaultTemplate::Pigtail,
    ];

    /// The name recognition results report for this shape.
    pub const fn name(&self) -> &'static str {
        match self {
            DefaultTemplate::Triangle => "TRIANGLE",
            DefaultTemplate::X => "X",
            DefaultTemplate::Rectangle => "RECTANGLE",
            DefaultTemplate::Circle => "CIRCLE",
            DefaultTemplate::Check => "CHECK",
            DefaultTemplate::Caret => "CARET",
            DefaultTemplate::Zigzag => "ZIGZAG",
            DefaultTemplate::Arrow => "ARROW",
            DefaultTemplate::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            DefaultTemplate::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            DefaultTemplate::V => "V",
            DefaultTemplate::Delete => "DELETE",
            DefaultTemplate::LeftCurlyBrace => "LEFT_CURLY_BRACE",
            DefaultTemplate::RightCurlyBrace => "RIGHT_CURLY_BRACE",
            DefaultTemplate::Star => "STAR",
            DefaultTemplate::Pigtail => "PIGTAIL",
        }
    }

    /// Look a shape up by its reported name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    const fn samples(&self) -> &'static [[Real; 2]] {
        match self {
            DefaultTemplate::Triangle => data::TRIANGLE,
            DefaultTemplate::X => data::X,
            DefaultTemplate::Rectangle => data::RECTANGLE,
            DefaultTemplate::Circle => data::CIRCLE,
            DefaultTemplate::Check => data::CHECK,
            DefaultTemplate::Caret => data::CARET,
            DefaultTemplate::Zigzag => data::ZIGZAG,
            DefaultTemplate::Arrow => data::ARROW,
            DefaultTemplate::LeftSquareBracket => data::LEFT_SQUARE_BRACKET,
            DefaultTemplate::RightSquareBracket => data::RIGHT_SQUARE_BRACKET,
            DefaultTemplate::V => data::V,
            DefaultTemplate::Delete => data::DELETE,
            DefaultTemplate::LeftCurlyBrace => data::LEFT_CURLY_BRACE,
            DefaultTemplate::RightCurlyBrace => data::RIGHT_CURLY_BRACE,
            DefaultTemplate::Star => data::STAR,
            DefaultTemplate::Pigtail => data::PIGTAIL,
        }
    }

    /// The raw stroke, in capture order.
    pub fn points(&self) -> Vec<Point> {
        self.samples().iter().map(|&[x, y]| Point::new(x, y)).collect()
    }
}

impl fmt::Display for DefaultTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for template in DefaultTemplate::ALL {
            assert_eq!(DefaultTemplate::from_name(template.name()), Some(template));
            assert_eq!(template.to_string(), template.name());
        }
        assert_eq!(DefaultTemplate::from_name("HEXAGON"), None);
    }

    #[test]
    fn every_shape_is_a_usable_stroke() {
        for template in DefaultTemplate::ALL {
            let points = template.points();
            assert!(points.len() >= 2, "{template} has {} points", points.len());
            assert!(crate::geometry::path_length(&points) > 0.0);
        }
    }

    #[test]
    fn zigzag_is_the_short_one() {
        assert_eq!(DefaultTemplate::Zigzag.points().len(), 6);
        assert_eq!(DefaultTemplate::Circle.points()[0], Point::new(127.0, 141.0));
    }
}
