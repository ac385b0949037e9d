//! Piece index: which stickers move together as one rigid piece.
//!
//! The partition of the 54 stickers into 6 centers, 12 edges, and 8 corners
//! depends only on the cube's shape, so it is derived once from the sticker
//! geometry and shared for the life of the process.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::cube::{Color, CubeState, StickerId, STICKER_COUNT};
use crate::geometry::{cubie_position, Coord};

/// Number of visible pieces on the cube.
pub const PIECE_COUNT: usize = 26;

/// Kind of piece, determined by how many stickers it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// One sticker.
    Center,
    /// Two stickers.
    Edge,
    /// Three stickers.
    Corner,
}

/// A rigid group of stickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    /// Cubie the piece occupies.
    pub position: Coord,
    /// Sticker slots of the piece, in storage order.
    pub stickers: Vec<StickerId>,
}

impl Piece {
    pub fn contains(&self, id: StickerId) -> bool {
        self.stickers.contains(&id)
    }
}

lazy_static! {
    static ref PIECES: Vec<Piece> = build_pieces();
    static ref PIECE_BY_STICKER: FxHashMap<StickerId, usize> = PIECES
        .iter()
        .enumerate()
        .flat_map(|(i, piece)| piece.stickers.iter().map(move |&id| (id, i)))
        .collect();
}

/// Groups stickers by the cubie they sit on.
///
/// Pieces are ordered by their first sticker in storage order.
fn build_pieces() -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::with_capacity(PIECE_COUNT);
    let mut index_by_position: FxHashMap<Coord, usize> = FxHashMap::default();

    for id in StickerId::all() {
        let position = cubie_position(id);
        let index = *index_by_position.entry(position).or_insert_with(|| {
            pieces.push(Piece {
                kind: PieceKind::Center,
                position,
                stickers: Vec::with_capacity(3),
            });
            pieces.len() - 1
        });
        pieces[index].stickers.push(id);
    }

    for piece in &mut pieces {
        piece.kind = match piece.stickers.len() {
            1 => PieceKind::Center,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        };
    }

    log::debug!("indexed {} stickers into {} pieces", STICKER_COUNT, pieces.len());
    pieces
}

/// Returns all 26 pieces.
pub fn pieces() -> &'static [Piece] {
    &PIECES
}

/// Returns the index into [`pieces()`] of the piece carrying `id`.
pub fn piece_containing(id: StickerId) -> usize {
    // every valid sticker id is in the map
    PIECE_BY_STICKER[&id]
}

/// Finds the piece carrying `id` by scanning the piece list.
///
/// Equivalent to [`piece_containing`] without the reverse map.
pub fn find_piece_index(id: StickerId) -> Option<usize> {
    PIECES.iter().position(|piece| piece.contains(id))
}

/// Returns the stickers that share a piece with `id`, including `id` itself.
pub fn piece_mates(id: StickerId) -> &'static [StickerId] {
    &PIECES[piece_containing(id)].stickers
}

/// Colors currently shown by a piece's stickers, in the piece's sticker order.
pub fn piece_colors(state: &CubeState, piece: &Piece) -> Vec<Color> {
    piece
        .stickers
        .iter()
        .map(|&id| state.sticker(id).color)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::cube::Face;
    use crate::engine::{apply_formula, apply_move};
    use crate::moves::{Direction, Layer, Move};

    #[test]
    fn test_piece_counts() {
        let pieces = pieces();
        assert_eq!(pieces.len(), PIECE_COUNT);
        let count = |kind| pieces.iter().filter(|p| p.kind == kind).count();
        assert_eq!(count(PieceKind::Center), 6);
        assert_eq!(count(PieceKind::Edge), 12);
        assert_eq!(count(PieceKind::Corner), 8);
    }

    #[test]
    fn test_pieces_partition_stickers() {
        let mut seen = [false; STICKER_COUNT];
        for piece in pieces() {
            for id in &piece.stickers {
                assert!(!seen[id.index()], "{id} is in two pieces");
                seen[id.index()] = true;
            }
            // no piece has two stickers on the same face
            let mut faces: Vec<Face> = piece.stickers.iter().map(|id| id.face()).collect();
            faces.dedup();
            assert_eq!(faces.len(), piece.stickers.len());
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_lookup_agrees_with_scan() {
        for id in StickerId::all() {
            let index = piece_containing(id);
            assert_eq!(find_piece_index(id), Some(index));
            assert!(pieces()[index].contains(id));
        }
    }

    #[test]
    fn test_known_pieces() {
        let id = |s: &str| s.parse::<StickerId>().unwrap();

        let corner = &pieces()[piece_containing(id("U_2_2"))];
        assert_eq!(corner.kind, PieceKind::Corner);
        assert_eq!(corner.stickers, vec![id("U_2_2"), id("F_0_2"), id("R_0_0")]);

        let edge = piece_mates(id("B_1_2"));
        assert_eq!(edge, [id("L_1_0"), id("B_1_2")]);

        let center = &pieces()[piece_containing(id("D_1_1"))];
        assert_eq!(center.kind, PieceKind::Center);
        assert_eq!(center.position, (0, -1, 0));
    }

    #[test]
    fn test_solved_piece_colors() {
        let state = CubeState::solved();
        for piece in pieces() {
            let colors = piece_colors(&state, piece);
            let expected: Vec<Color> = piece
                .stickers
                .iter()
                .map(|id| id.face().solved_color())
                .collect();
            assert_eq!(colors, expected);
        }
    }

    /// Sorted colors of every piece, used to compare piece sets.
    fn color_sets(state: &CubeState) -> Vec<Vec<Color>> {
        let mut sets: Vec<Vec<Color>> = pieces()
            .iter()
            .map(|piece| {
                let mut colors = piece_colors(state, piece);
                colors.sort();
                colors
            })
            .collect();
        sets.sort();
        sets
    }

    #[test]
    fn test_every_move_keeps_pieces_rigid() {
        let state = apply_formula(&CubeState::solved(), "R U F' L2 M E S' B D'");
        let before = color_sets(&state);
        for layer in Layer::ALL {
            for direction in Direction::ALL {
                let after = apply_move(&state, Move::new(layer, direction));
                assert_eq!(color_sets(&after), before, "{layer:?} {direction:?}");
            }
        }
    }

    proptest! {
        #[test]
        fn proptest_pieces_stay_rigid(indices in prop::collection::vec(0..36usize, 0..30)) {
            let moves: Vec<Move> = indices
                .into_iter()
                .map(|i| Move::new(Layer::ALL[i / 3], Direction::ALL[i % 3]))
                .collect();
            let state = crate::engine::apply_moves(&CubeState::solved(), &moves);
            prop_assert_eq!(color_sets(&state), color_sets(&CubeState::solved()));
        }
    }
}
