//! Sticker-level model of a 3x3x3 cube.
//!
//! The cube is stored face by face in net order (U, L, F, R, B, D), each face
//! as a row-major 3x3 grid. Sticker ids are positional: a move relocates the
//! color and glyph rotation of a sticker, never its id.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// Number of stickers on each face.
pub const STICKERS_PER_FACE: usize = 9;

/// Total number of stickers on the cube.
pub const STICKER_COUNT: usize = FACE_COUNT * STICKERS_PER_FACE;

/// One of the six faces, named by the direction it points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Up
    U,
    /// Left
    L,
    /// Front
    F,
    /// Right
    R,
    /// Back
    B,
    /// Down
    D,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; FACE_COUNT] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

    /// Position of this face in storage order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Face::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..6`.
    pub const fn from_index(index: usize) -> Face {
        assert!(index < FACE_COUNT, "face index out of range");
        Face::ALL[index]
    }

    /// Color this face carries when the cube is solved.
    pub const fn solved_color(self) -> Color {
        match self {
            Face::U => Color::Yellow,
            Face::D => Color::White,
            Face::L => Color::Blue,
            Face::R => Color::Green,
            Face::F => Color::Red,
            Face::B => Color::Orange,
        }
    }

    /// Single-letter name of the face.
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }

    /// Parses a single-letter face name.
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Sticker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    White,
}

impl Color {
    /// All colors, in the order used by [`CubeState::color_counts`].
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::White,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter abbreviation used by the text views.
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::White => 'W',
        }
    }

    /// Display color as an SVG hex string.
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#ef4444",
            Color::Green => "#22c55e",
            Color::Blue => "#3b82f6",
            Color::Yellow => "#facc15",
            Color::Orange => "#f97316",
            Color::White => "#ffffff",
        }
    }

    /// Display color as linear RGB in `0.0..=1.0`.
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            Color::Red => [0.94, 0.27, 0.27],
            Color::Green => [0.13, 0.77, 0.37],
            Color::Blue => [0.23, 0.51, 0.96],
            Color::Yellow => [0.98, 0.80, 0.08],
            Color::Orange => [0.98, 0.45, 0.09],
            Color::White => [1.0, 1.0, 1.0],
        }
    }
}

/// Computes the flat storage index of a sticker.
///
/// Index order is face-major: `idx = face * 9 + row * 3 + col`.
#[inline(always)]
pub const fn slot_index(face: Face, row: usize, col: usize) -> usize {
    face.index() * STICKERS_PER_FACE + row * 3 + col
}

/// Error returned when parsing a [`StickerId`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StickerIdError {
    /// Not of the form `F_row_col`
    #[error("malformed sticker id {0:?}")]
    Malformed(String),
    /// Row or column outside `0..=2`
    #[error("sticker coordinate out of range in {0:?}")]
    OutOfRange(String),
}

/// Stable identifier of a sticker slot: face, row, and column.
///
/// Row 0 is the edge of the face nearest the U pole in the face's canonical
/// orientation (for U itself, the edge nearest B; for D, nearest F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StickerId {
    face: Face,
    row: u8,
    col: u8,
}

impl StickerId {
    /// Constructs a sticker id.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        assert!(row < 3 && col < 3, "sticker coordinate out of range");
        Self {
            face,
            row: row as u8,
            col: col as u8,
        }
    }

    /// Constructs the sticker id for a flat storage index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..54`.
    pub const fn from_index(index: usize) -> Self {
        assert!(index < STICKER_COUNT, "sticker index out of range");
        let within_face = index % STICKERS_PER_FACE;
        Self::new(
            Face::from_index(index / STICKERS_PER_FACE),
            within_face / 3,
            within_face % 3,
        )
    }

    /// Flat storage index of this sticker.
    #[inline]
    pub const fn index(self) -> usize {
        slot_index(self.face, self.row as usize, self.col as usize)
    }

    #[inline]
    pub const fn face(self) -> Face {
        self.face
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Returns whether this is the center sticker of its face.
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    /// Iterates over all 54 sticker ids in storage order.
    pub fn all() -> impl Iterator<Item = StickerId> {
        (0..STICKER_COUNT).map(StickerId::from_index)
    }
}

impl fmt::Display for StickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.face, self.row, self.col)
    }
}

impl FromStr for StickerId {
    type Err = StickerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || StickerIdError::Malformed(s.to_owned());

        let mut parts = s.split('_');
        let (Some(face), Some(row), Some(col), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let mut face_chars = face.chars();
        let face = match (face_chars.next(), face_chars.next()) {
            (Some(letter), None) => Face::from_letter(letter).ok_or_else(malformed)?,
            _ => return Err(malformed()),
        };
        let row: usize = row.parse().map_err(|_| malformed())?;
        let col: usize = col.parse().map_err(|_| malformed())?;
        if row >= 3 || col >= 3 {
            return Err(StickerIdError::OutOfRange(s.to_owned()));
        }

        Ok(StickerId::new(face, row, col))
    }
}

/// A single sticker: its slot, its color, and the orientation of the arrow
/// glyph printed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sticker {
    pub id: StickerId,
    pub color: Color,
    /// Glyph orientation in degrees; one of 0, 90, 180, 270.
    pub rotation: u16,
}

impl Sticker {
    /// Returns this sticker's color and glyph, spun by `quarter_turns`
    /// clockwise quarter turns and placed in slot `id`.
    #[inline]
    pub fn moved_to(self, id: StickerId, quarter_turns: i8) -> Self {
        let rotation = (i32::from(self.rotation) + 90 * i32::from(quarter_turns)).rem_euclid(360);
        Self {
            id,
            color: self.color,
            rotation: rotation as u16,
        }
    }
}

/// Complete sticker configuration of the cube.
///
/// `CubeState` is a plain value: every move produces a new, independent
/// snapshot and leaves its input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [[Sticker; STICKERS_PER_FACE]; FACE_COUNT],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// Returns the solved cube with every glyph upright.
    pub fn solved() -> Self {
        Self::from_fn(|id| Sticker {
            id,
            color: id.face().solved_color(),
            rotation: 0,
        })
    }

    /// Builds a state by computing the sticker for each slot.
    ///
    /// The returned sticker's `id` is overwritten with the slot's id.
    pub fn from_fn(mut f: impl FnMut(StickerId) -> Sticker) -> Self {
        let faces = std::array::from_fn(|face| {
            std::array::from_fn(|i| {
                let id = StickerId::from_index(face * STICKERS_PER_FACE + i);
                Sticker { id, ..f(id) }
            })
        });
        Self { faces }
    }

    /// Returns the nine stickers of a face in row-major order.
    #[inline]
    pub fn face(&self, face: Face) -> &[Sticker; STICKERS_PER_FACE] {
        &self.faces[face.index()]
    }

    #[inline]
    pub fn sticker(&self, id: StickerId) -> &Sticker {
        &self.faces[id.face().index()][id.row() * 3 + id.col()]
    }

    #[inline]
    pub fn get(&self, face: Face, row: usize, col: usize) -> &Sticker {
        &self.face(face)[row * 3 + col]
    }

    /// Iterates over all stickers in storage order.
    pub fn stickers(&self) -> impl Iterator<Item = &Sticker> {
        self.faces.iter().flatten()
    }

    /// Number of stickers of each color, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for sticker in self.stickers() {
            counts[sticker.color.index()] += 1;
        }
        counts
    }

    /// Returns whether every face shows a single color.
    ///
    /// Glyph rotations are ignored, and so is the orientation of the whole
    /// cube: a solved cube after `x` is still solved.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|face| face.iter().all(|sticker| sticker.color == face[4].color))
    }

    /// Returns whether both states show the same color in every slot,
    /// regardless of glyph rotations.
    pub fn same_colors(&self, other: &CubeState) -> bool {
        self.stickers()
            .zip(other.stickers())
            .all(|(a, b)| a.color == b.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_index_roundtrip() {
        for idx in 0..STICKER_COUNT {
            let id = StickerId::from_index(idx);
            assert_eq!(id.index(), idx, "Roundtrip failed for index {idx}");
        }
    }

    #[test]
    #[should_panic(expected = "sticker index out of range")]
    fn test_sticker_index_past_the_end_panics() {
        StickerId::from_index(STICKER_COUNT);
    }

    #[test]
    #[should_panic(expected = "face index out of range")]
    fn test_face_index_past_the_end_panics() {
        Face::from_index(FACE_COUNT);
    }

    #[test]
    fn test_sticker_id_display_and_parse() {
        let id = StickerId::new(Face::F, 0, 2);
        assert_eq!(id.to_string(), "F_0_2");
        assert_eq!("F_0_2".parse::<StickerId>(), Ok(id));

        for id in StickerId::all() {
            assert_eq!(id.to_string().parse::<StickerId>(), Ok(id));
        }
    }

    #[test]
    fn test_sticker_id_rejects_garbage() {
        for bad in ["", "F", "F_0", "F_0_2_1", "Q_0_0", "FF_0_0", "F_a_0", "F_-1_0"] {
            assert!(
                matches!(bad.parse::<StickerId>(), Err(StickerIdError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
        assert_eq!(
            "U_3_0".parse::<StickerId>(),
            Err(StickerIdError::OutOfRange("U_3_0".to_owned()))
        );
    }

    #[test]
    fn test_solved_state() {
        let state = CubeState::solved();
        assert!(state.is_solved());
        assert_eq!(state.color_counts(), [9; 6]);
        for face in Face::ALL {
            for sticker in state.face(face) {
                assert_eq!(sticker.id.face(), face);
                assert_eq!(sticker.color, face.solved_color());
                assert_eq!(sticker.rotation, 0);
            }
        }
        assert_eq!(state.get(Face::F, 0, 2).id.to_string(), "F_0_2");
    }

    #[test]
    fn test_moved_to_wraps_rotation() {
        let sticker = Sticker {
            id: StickerId::new(Face::U, 0, 0),
            color: Color::Yellow,
            rotation: 0,
        };
        let target = StickerId::new(Face::R, 1, 2);
        let moved = sticker.moved_to(target, -1);
        assert_eq!(moved.id, target);
        assert_eq!(moved.color, Color::Yellow);
        assert_eq!(moved.rotation, 270);
        assert_eq!(moved.moved_to(target, 1).rotation, 0);
        assert_eq!(moved.moved_to(target, 2).rotation, 90);
    }

    #[test]
    fn test_from_fn_assigns_slot_ids() {
        let imposter = StickerId::new(Face::D, 2, 2);
        let state = CubeState::from_fn(|_| Sticker {
            id: imposter,
            color: Color::Red,
            rotation: 0,
        });
        for (idx, sticker) in state.stickers().enumerate() {
            assert_eq!(sticker.id.index(), idx);
        }
        assert!(state.is_solved());
        assert_eq!(state.color_counts()[Color::Red.index()], STICKER_COUNT);
    }
}
