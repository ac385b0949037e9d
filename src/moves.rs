//! Move notation.
//!
//! A move names a layer (`U D L R F B` for outer faces, `M E S` for middle
//! slices, `x y z` for whole-cube reorientations) and a direction: plain for a
//! clockwise quarter turn, `'` for counter-clockwise, and `2` for a half turn.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error produced when a token is not a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("invalid move {0:?}")]
    InvalidMove(String),
}

/// A layer that can be turned, or the whole cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    U,
    D,
    L,
    R,
    F,
    B,
    /// Middle slice, between L and R
    M,
    /// Equatorial slice, between U and D
    E,
    /// Standing slice, between F and B
    S,
    /// Whole cube, `F S B'`
    X,
    /// Whole cube, `R M' L'`
    Y,
    /// Whole cube, `U E' D'`
    Z,
}

/// Axis through a pair of opposite faces. Layers on the same axis commute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Through U and D.
    UD,
    /// Through L and R.
    LR,
    /// Through F and B.
    FB,
}

impl Layer {
    pub const ALL: [Layer; 12] = [
        Layer::U,
        Layer::D,
        Layer::L,
        Layer::R,
        Layer::F,
        Layer::B,
        Layer::M,
        Layer::E,
        Layer::S,
        Layer::X,
        Layer::Y,
        Layer::Z,
    ];

    /// Layers that turn part of the cube against the rest: the six faces and
    /// the three slices.
    pub const TURNS: [Layer; 9] = [
        Layer::U,
        Layer::D,
        Layer::L,
        Layer::R,
        Layer::F,
        Layer::B,
        Layer::M,
        Layer::E,
        Layer::S,
    ];

    /// Notation symbol for this layer.
    pub const fn symbol(self) -> char {
        match self {
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::L => 'L',
            Layer::R => 'R',
            Layer::F => 'F',
            Layer::B => 'B',
            Layer::M => 'M',
            Layer::E => 'E',
            Layer::S => 'S',
            Layer::X => 'x',
            Layer::Y => 'y',
            Layer::Z => 'z',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Layer> {
        Layer::ALL.into_iter().find(|layer| layer.symbol() == symbol)
    }

    /// Axis this layer turns around.
    ///
    /// Each reorientation shares the axis of the layers it is composed of.
    pub const fn axis(self) -> Axis {
        match self {
            Layer::U | Layer::D | Layer::E | Layer::Z => Axis::UD,
            Layer::L | Layer::R | Layer::M | Layer::Y => Axis::LR,
            Layer::F | Layer::B | Layer::S | Layer::X => Axis::FB,
        }
    }

    /// Returns whether this layer reorients the whole cube.
    pub const fn is_rotation(self) -> bool {
        matches!(self, Layer::X | Layer::Y | Layer::Z)
    }
}

/// Direction and magnitude of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// 90 degrees clockwise, looking at the named face.
    Clockwise,
    /// 90 degrees counter-clockwise.
    CounterClockwise,
    /// 180 degrees.
    Double,
}

impl Direction {
    pub const ALL: [Direction; 3] = [
        Direction::Clockwise,
        Direction::CounterClockwise,
        Direction::Double,
    ];

    pub const fn suffix(self) -> &'static str {
        match self {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
            Direction::Double => "2",
        }
    }

    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Double => Direction::Double,
        }
    }
}

/// A single move, such as `R`, `U'`, `M2`, or `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub layer: Layer,
    pub direction: Direction,
}

impl Move {
    pub const fn new(layer: Layer, direction: Direction) -> Self {
        Self { layer, direction }
    }

    /// Clockwise quarter turn of `layer`.
    pub const fn cw(layer: Layer) -> Self {
        Self::new(layer, Direction::Clockwise)
    }

    /// Counter-clockwise quarter turn of `layer`.
    pub const fn ccw(layer: Layer) -> Self {
        Self::new(layer, Direction::CounterClockwise)
    }

    /// Half turn of `layer`.
    pub const fn double(layer: Layer) -> Self {
        Self::new(layer, Direction::Double)
    }

    /// Returns the move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.layer, self.direction.inverse())
    }

    /// Iterates over all 36 moves.
    pub fn all() -> impl Iterator<Item = Move> {
        Layer::ALL
            .into_iter()
            .flat_map(|layer| Direction::ALL.map(|direction| Move::new(layer, direction)))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.layer.symbol(), self.direction.suffix())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoveError::InvalidMove(s.to_owned());

        let mut chars = s.chars();
        let layer = chars
            .next()
            .and_then(Layer::from_symbol)
            .ok_or_else(invalid)?;
        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            "2" => Direction::Double,
            _ => return Err(invalid()),
        };
        Ok(Move::new(layer, direction))
    }
}

/// Parses a whitespace-separated formula such as `R U R' U'`.
///
/// Tokens that are not moves are skipped, so free-form notes can sit next to
/// the moves in the same field.
pub fn parse_formula(formula: &str) -> Vec<Move> {
    formula
        .split_whitespace()
        .filter_map(|token| match token.parse() {
            Ok(mv) => Some(mv),
            Err(e) => {
                log::debug!("skipping token: {e}");
                None
            }
        })
        .collect()
}

/// Formats a move sequence as space-separated notation.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the sequence that undoes `moves`.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}
