use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use crate::quiz::QuizError;

/// Integer 3D vector. `x` points right, `y` up, `z` out of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Vector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Mul<i32> for Vector3 {
    type Output = Vector3;

    fn mul(self, k: i32) -> Vector3 {
        Vector3::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self * -1
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Every direction either quiz can ask about.
///
/// The first seven are straight-line directions on the page. The last six
/// name a circular field line (or current loop) by the plane it lies in and
/// the way it points on the side facing the reader, e.g. `yz-y` is a loop in
/// the yz plane pointing down where it passes in front of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Zero,
    Right,
    Left,
    Up,
    Down,
    OutOfPage,
    IntoPage,
    YzMinusY,
    YzPlusY,
    XzPlusX,
    XzMinusX,
    Ccw,
    Cw,
}

const ALL: [Direction; 13] = [
    Direction::Zero,
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
    Direction::OutOfPage,
    Direction::IntoPage,
    Direction::YzMinusY,
    Direction::YzPlusY,
    Direction::XzPlusX,
    Direction::XzMinusX,
    Direction::Ccw,
    Direction::Cw,
];

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Zero => "None",
            Direction::Right => "Right",
            Direction::Left => "Left",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::OutOfPage => "Out of Page",
            Direction::IntoPage => "Into Page",
            Direction::YzMinusY => "yz-y",
            Direction::YzPlusY => "yz+y",
            Direction::XzPlusX => "xz+x",
            Direction::XzMinusX => "xz-x",
            Direction::Ccw => "CCW",
            Direction::Cw => "CW",
        }
    }

    pub fn from_label(label: &str) -> Option<Direction> {
        ALL.iter().copied().find(|d| d.label() == label)
    }

    /// Canonical vector. Loop directions map to their right-hand axis, which
    /// is the straight current producing that field loop.
    pub fn vector(self) -> Vector3 {
        match self {
            Direction::Zero => Vector3::ZERO,
            Direction::Right | Direction::YzMinusY => Vector3::new(1, 0, 0),
            Direction::Left | Direction::YzPlusY => Vector3::new(-1, 0, 0),
            Direction::Up | Direction::XzPlusX => Vector3::new(0, 1, 0),
            Direction::Down | Direction::XzMinusX => Vector3::new(0, -1, 0),
            Direction::OutOfPage | Direction::Ccw => Vector3::new(0, 0, 1),
            Direction::IntoPage | Direction::Cw => Vector3::new(0, 0, -1),
        }
    }

    pub fn is_loop(self) -> bool {
        matches!(
            self,
            Direction::YzMinusY
                | Direction::YzPlusY
                | Direction::XzPlusX
                | Direction::XzMinusX
                | Direction::Ccw
                | Direction::Cw
        )
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Direction::Zero => Glyph::None,
            Direction::OutOfPage | Direction::Ccw => Glyph::OutOfPage,
            Direction::IntoPage | Direction::Cw => Glyph::IntoPage,
            Direction::Right
            | Direction::Left
            | Direction::Up
            | Direction::Down
            | Direction::YzMinusY
            | Direction::YzPlusY
            | Direction::XzPlusX
            | Direction::XzMinusX => Glyph::InPlaneArrow,
        }
    }

    /// Unicode stand-in for the drawn symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Zero => "∅",
            Direction::Right | Direction::XzPlusX => "→",
            Direction::Left | Direction::XzMinusX => "←",
            Direction::Up | Direction::YzPlusY => "↑",
            Direction::Down | Direction::YzMinusY => "↓",
            Direction::OutOfPage => "⊙",
            Direction::IntoPage => "⊗",
            Direction::Ccw => "↺",
            Direction::Cw => "↻",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_label(s.trim()).ok_or_else(|| QuizError::UnknownDirection(s.to_string()))
    }
}

/// How a direction is drawn on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    InPlaneArrow,
    IntoPage,
    OutOfPage,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Vocabulary {
    /// Straight directions plus "None"; shared by every role of the force quiz.
    Force,
    Linear,
    Loop,
}

pub const FORCE_CHOICES: [Direction; 7] = [
    Direction::Zero,
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
    Direction::OutOfPage,
    Direction::IntoPage,
];

// Index i of LINEAR_CHOICES and index i of LOOP_CHOICES describe the same
// current/field pair. The field quiz relies on this ordering.
pub const LINEAR_CHOICES: [Direction; 6] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
    Direction::OutOfPage,
    Direction::IntoPage,
];

pub const LOOP_CHOICES: [Direction; 6] = [
    Direction::YzMinusY,
    Direction::YzPlusY,
    Direction::XzPlusX,
    Direction::XzMinusX,
    Direction::Ccw,
    Direction::Cw,
];

impl Vocabulary {
    pub fn from_tag(tag: &str) -> Result<Vocabulary, QuizError> {
        match tag {
            "force" => Ok(Vocabulary::Force),
            "linear" => Ok(Vocabulary::Linear),
            "loop" => Ok(Vocabulary::Loop),
            other => Err(QuizError::InvalidVariant(other.to_string())),
        }
    }

    pub fn choices(self) -> &'static [Direction] {
        match self {
            Vocabulary::Force => &FORCE_CHOICES,
            Vocabulary::Linear => &LINEAR_CHOICES,
            Vocabulary::Loop => &LOOP_CHOICES,
        }
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.choices().contains(&direction)
    }

    pub fn vector_of(self, direction: Direction) -> Vector3 {
        direction.vector()
    }

    pub fn label_of(self, vector: Vector3) -> Option<Direction> {
        self.choices().iter().copied().find(|d| d.vector() == vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const VOCABULARIES: [Vocabulary; 3] = [Vocabulary::Force, Vocabulary::Linear, Vocabulary::Loop];

    #[test]
    fn vocabularies_are_bijections() {
        for vocab in VOCABULARIES {
            let vectors: HashSet<_> = vocab.choices().iter().map(|d| d.vector()).collect();
            assert_eq!(vectors.len(), vocab.choices().len(), "{:?}", vocab);

            for &d in vocab.choices() {
                assert_eq!(vocab.label_of(vocab.vector_of(d)), Some(d));
            }
            for v in vectors {
                let d = vocab.label_of(v).unwrap();
                assert_eq!(vocab.vector_of(d), v);
            }
        }
    }

    #[test]
    fn choices_order_is_stable() {
        assert_eq!(Vocabulary::Force.choices()[0], Direction::Zero);
        assert_eq!(Vocabulary::Force.choices(), Vocabulary::Force.choices());
        assert_eq!(
            Vocabulary::Loop
                .choices()
                .iter()
                .map(|d| d.label())
                .collect::<Vec<_>>(),
            vec!["yz-y", "yz+y", "xz+x", "xz-x", "CCW", "CW"]
        );
    }

    #[test]
    fn label_of_rejects_vectors_outside_the_set() {
        assert_eq!(Vocabulary::Force.label_of(Vector3::new(1, 1, 0)), None);
        assert_eq!(Vocabulary::Linear.label_of(Vector3::ZERO), None);
        assert_eq!(Vocabulary::Force.label_of(Vector3::ZERO), Some(Direction::Zero));
    }

    #[test]
    fn cross_product_follows_right_hand() {
        let x = Direction::Right.vector();
        let y = Direction::Up.vector();
        let z = Direction::OutOfPage.vector();
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
        assert!(x.cross(x).is_zero());
        assert_eq!(x.cross(z), Direction::Down.vector());
    }

    #[test]
    fn loop_axes_match_the_field_of_a_straight_current() {
        // On the reader's side (+z) of a current along `axis` the field
        // points along axis × z; CCW/CW loops have their axis out of/into
        // the page.
        let front = Vector3::new(0, 0, 1);
        assert_eq!(Direction::YzMinusY.vector().cross(front), Direction::Down.vector());
        assert_eq!(Direction::YzPlusY.vector().cross(front), Direction::Up.vector());
        assert_eq!(Direction::XzPlusX.vector().cross(front), Direction::Right.vector());
        assert_eq!(Direction::XzMinusX.vector().cross(front), Direction::Left.vector());
        for (linear, looped) in LINEAR_CHOICES.iter().zip(LOOP_CHOICES.iter()) {
            assert_eq!(linear.vector(), looped.vector(), "{} / {}", linear, looped);
        }
    }

    #[test]
    fn labels_parse_back() {
        for d in ALL {
            assert_eq!(d.label().parse::<Direction>(), Ok(d));
        }
        assert_eq!(
            "Sideways".parse::<Direction>(),
            Err(QuizError::UnknownDirection("Sideways".to_string()))
        );
    }

    #[test]
    fn glyphs_cover_every_direction() {
        assert_eq!(Direction::Zero.glyph(), Glyph::None);
        assert_eq!(Direction::IntoPage.glyph(), Glyph::IntoPage);
        assert_eq!(Direction::OutOfPage.glyph(), Glyph::OutOfPage);
        assert_eq!(Direction::Left.glyph(), Glyph::InPlaneArrow);
        assert_eq!(Direction::Cw.glyph(), Glyph::IntoPage);
        assert_eq!(Direction::XzMinusX.glyph(), Glyph::InPlaneArrow);
        for d in ALL {
            assert_eq!(d.is_loop(), Vocabulary::Loop.contains(d));
        }
    }

    #[test]
    fn unknown_vocabulary_tag_is_rejected() {
        assert_eq!(Vocabulary::from_tag("loop"), Ok(Vocabulary::Loop));
        assert_eq!(
            Vocabulary::from_tag("spiral"),
            Err(QuizError::InvalidVariant("spiral".to_string()))
        );
    }
}
