//! Move engine: pure functions from one [`CubeState`] to the next.
//!
//! Every quarter turn is a permutation of the 54 sticker slots plus a glyph
//! spin for each moved sticker. Each of the nine turnable layers is described
//! once, as a face plate (for outer layers) and a 4-cycle of three-sticker
//! strips; a `const fn` compiles the description into a lookup table at
//! compile time, and the counter-clockwise table is computed as its inverse.
//! Half turns apply the quarter-turn table twice, and the whole-cube
//! reorientations are compositions of three parallel layer turns.

use crate::cube::{slot_index, CubeState, Face, StickerId, STICKER_COUNT};
use crate::moves::{invert_sequence, parse_formula, Direction, Layer, Move};

/// Where a sticker slot takes its contents from during one quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Source {
    /// Flat index of the slot the sticker comes from.
    slot: u8,
    /// Clockwise quarter turns added to the sticker's glyph.
    quarter_turns: i8,
}

/// Source of every slot after one quarter turn, indexed by destination slot.
type TurnTable = [Source; STICKER_COUNT];

#[derive(Clone, Copy)]
enum Line {
    Row(usize),
    Col(usize),
}

/// Three stickers in a line on one face, in the order they travel in.
#[derive(Clone, Copy)]
struct Strip {
    face: Face,
    line: Line,
    reversed: bool,
}

impl Strip {
    const fn row(face: Face, row: usize) -> Self {
        Self {
            face,
            line: Line::Row(row),
            reversed: false,
        }
    }

    const fn col(face: Face, col: usize) -> Self {
        Self {
            face,
            line: Line::Col(col),
            reversed: false,
        }
    }

    const fn rev(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }

    /// Flat index of the `i`th sticker of the strip.
    const fn slot(self, i: usize) -> usize {
        let j = if self.reversed { 2 - i } else { i };
        match self.line {
            Line::Row(row) => slot_index(self.face, row, j),
            Line::Col(col) => slot_index(self.face, j, col),
        }
    }
}

/// One clockwise quarter turn of a layer.
struct TurnDef {
    /// Face whose nine stickers spin with the layer.
    plate: Option<Face>,
    /// Contents of `cycle[k]` move to `cycle[k + 1]`, and the last strip
    /// moves to the first.
    cycle: [Strip; 4],
    /// Glyph spin of every sticker moved along the cycle.
    quarter_turns: i8,
}

/// Clockwise quarter turns, in the order of [`Layer::TURNS`].
///
/// Strips exchanged between U/D and the side faces keep their glyphs; F, B,
/// and S carry stickers across faces whose local axes are a quarter turn
/// apart, so those glyphs spin along with the strip.
const TURN_DEFS: [TurnDef; 9] = {
    use Face::*;
    [
        // U
        TurnDef {
            plate: Some(U),
            cycle: [
                Strip::row(F, 0),
                Strip::row(L, 0),
                Strip::row(B, 0),
                Strip::row(R, 0),
            ],
            quarter_turns: 0,
        },
        // D
        TurnDef {
            plate: Some(D),
            cycle: [
                Strip::row(L, 2),
                Strip::row(F, 2),
                Strip::row(R, 2),
                Strip::row(B, 2),
            ],
            quarter_turns: 0,
        },
        // L
        TurnDef {
            plate: Some(L),
            cycle: [
                Strip::col(U, 0),
                Strip::col(F, 0),
                Strip::col(D, 0),
                Strip::col(B, 2).rev(),
            ],
            quarter_turns: 0,
        },
        // R
        TurnDef {
            plate: Some(R),
            cycle: [
                Strip::col(U, 2),
                Strip::col(B, 0).rev(),
                Strip::col(D, 2),
                Strip::col(F, 2),
            ],
            quarter_turns: 0,
        },
        // F
        TurnDef {
            plate: Some(F),
            cycle: [
                Strip::row(U, 2),
                Strip::col(R, 0),
                Strip::row(D, 0).rev(),
                Strip::col(L, 2).rev(),
            ],
            quarter_turns: 1,
        },
        // B
        TurnDef {
            plate: Some(B),
            cycle: [
                Strip::row(U, 0),
                Strip::col(L, 0).rev(),
                Strip::row(D, 2).rev(),
                Strip::col(R, 2),
            ],
            quarter_turns: -1,
        },
        // M follows L
        TurnDef {
            plate: None,
            cycle: [
                Strip::col(U, 1),
                Strip::col(F, 1),
                Strip::col(D, 1),
                Strip::col(B, 1).rev(),
            ],
            quarter_turns: 0,
        },
        // E follows D
        TurnDef {
            plate: None,
            cycle: [
                Strip::row(L, 1),
                Strip::row(F, 1),
                Strip::row(R, 1),
                Strip::row(B, 1),
            ],
            quarter_turns: 0,
        },
        // S follows F
        TurnDef {
            plate: None,
            cycle: [
                Strip::row(U, 1),
                Strip::col(R, 1),
                Strip::row(D, 1).rev(),
                Strip::col(L, 1).rev(),
            ],
            quarter_turns: 1,
        },
    ]
};

const fn identity_table() -> TurnTable {
    let mut table = [Source {
        slot: 0,
        quarter_turns: 0,
    }; STICKER_COUNT];
    let mut slot = 0;
    while slot < STICKER_COUNT {
        table[slot].slot = slot as u8;
        slot += 1;
    }
    table
}

/// Compiles a clockwise quarter turn into a lookup table.
const fn build_turn_table(def: &TurnDef) -> TurnTable {
    let mut table = identity_table();

    // spin the face plate clockwise: (row, col) takes from (2 - col, row)
    if let Some(face) = def.plate {
        let mut row = 0;
        while row < 3 {
            let mut col = 0;
            while col < 3 {
                table[slot_index(face, row, col)] = Source {
                    slot: slot_index(face, 2 - col, row) as u8,
                    quarter_turns: 1,
                };
                col += 1;
            }
            row += 1;
        }
    }

    let mut k = 0;
    while k < 4 {
        let from = def.cycle[k];
        let to = def.cycle[(k + 1) % 4];
        let mut i = 0;
        while i < 3 {
            table[to.slot(i)] = Source {
                slot: from.slot(i) as u8,
                quarter_turns: def.quarter_turns,
            };
            i += 1;
        }
        k += 1;
    }

    table
}

/// Computes the table that undoes `table`.
const fn invert_table(table: &TurnTable) -> TurnTable {
    let mut inverse = identity_table();
    let mut dest = 0;
    while dest < STICKER_COUNT {
        let source = table[dest];
        inverse[source.slot as usize] = Source {
            slot: dest as u8,
            quarter_turns: -source.quarter_turns,
        };
        dest += 1;
    }
    inverse
}

/// Clockwise and counter-clockwise tables for each layer in [`Layer::TURNS`].
const fn build_all_turn_tables() -> [[TurnTable; 2]; 9] {
    let mut tables = [[identity_table(); 2]; 9];
    let mut i = 0;
    while i < 9 {
        let clockwise = build_turn_table(&TURN_DEFS[i]);
        tables[i] = [clockwise, invert_table(&clockwise)];
        i += 1;
    }
    tables
}

static TURN_TABLES: [[TurnTable; 2]; 9] = build_all_turn_tables();

fn apply_table(state: &CubeState, table: &TurnTable) -> CubeState {
    CubeState::from_fn(|id| {
        let source = table[id.index()];
        state
            .sticker(StickerId::from_index(source.slot as usize))
            .moved_to(id, source.quarter_turns)
    })
}

/// Applies a single move, returning the new state.
///
/// `state` is left untouched.
pub fn apply_move(state: &CubeState, mv: Move) -> CubeState {
    log::trace!("applying {mv}");

    let prime = match mv.direction {
        Direction::Clockwise => false,
        Direction::CounterClockwise => true,
        Direction::Double => {
            let quarter = Move::cw(mv.layer);
            return apply_move(&apply_move(state, quarter), quarter);
        }
    };

    let table_index = match mv.layer {
        Layer::U => 0,
        Layer::D => 1,
        Layer::L => 2,
        Layer::R => 3,
        Layer::F => 4,
        Layer::B => 5,
        Layer::M => 6,
        Layer::E => 7,
        Layer::S => 8,
        Layer::X => return reorient(state, [Layer::F, Layer::S, Layer::B], prime),
        Layer::Y => return reorient(state, [Layer::R, Layer::M, Layer::L], prime),
        Layer::Z => return reorient(state, [Layer::U, Layer::E, Layer::D], prime),
    };

    apply_table(state, &TURN_TABLES[table_index][usize::from(prime)])
}

/// Turns the whole cube by turning `near` and `middle` with the move and the
/// opposite face `far` against it.
fn reorient(state: &CubeState, [near, middle, far]: [Layer; 3], prime: bool) -> CubeState {
    let middle_direction = if middle == Layer::S {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    };
    let parts = [
        Move::cw(near),
        Move::new(middle, middle_direction),
        Move::ccw(far),
    ];
    if prime {
        apply_moves(state, &invert_sequence(&parts))
    } else {
        apply_moves(state, &parts)
    }
}

/// Applies a sequence of moves in order.
pub fn apply_moves(state: &CubeState, moves: &[Move]) -> CubeState {
    moves
        .iter()
        .fold(state.clone(), |state, &mv| apply_move(&state, mv))
}

/// Parses a formula (skipping anything that is not a move) and applies it.
pub fn apply_formula(state: &CubeState, formula: &str) -> CubeState {
    apply_moves(state, &parse_formula(formula))
}

/// Upper bound on repetitions tried by [`sequence_order`].
pub const MAX_ORDER: usize = 10_000;

/// Returns how many times `moves` must be repeated from the solved cube
/// before every color is back where it started.
///
/// Glyph rotations are not considered. Returns `None` if the colors do not
/// return within [`MAX_ORDER`] repetitions.
pub fn sequence_order(moves: &[Move]) -> Option<usize> {
    let solved = CubeState::solved();
    let mut state = solved.clone();
    for repetitions in 1..=MAX_ORDER {
        state = apply_moves(&state, moves);
        if state.same_colors(&solved) {
            return Some(repetitions);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::cube::Color;

    fn formula(s: &str) -> Vec<Move> {
        parse_formula(s)
    }

    fn scrambled() -> CubeState {
        apply_formula(
            &CubeState::solved(),
            "R U2 F' L D' B M E' S2 x U R' y F2 z' D L2 S' E B2",
        )
    }

    #[test]
    fn test_turn_tables_are_permutations() {
        for (i, tables) in TURN_TABLES.iter().enumerate() {
            for table in tables {
                let mut seen = [false; STICKER_COUNT];
                for source in table {
                    let slot = source.slot as usize;
                    assert!(!seen[slot], "Layer {i} reads slot {slot} twice");
                    seen[slot] = true;
                }
            }
        }
    }

    #[test]
    fn test_inverse_tables_compose_to_identity() {
        for tables in &TURN_TABLES {
            let [clockwise, counter] = tables;
            for dest in 0..STICKER_COUNT {
                let via = counter[dest];
                let back = clockwise[via.slot as usize];
                assert_eq!(back.slot as usize, dest);
                assert_eq!(back.quarter_turns + via.quarter_turns, 0);
            }
        }
    }

    #[test]
    fn test_u_turn_scenario() {
        let before = scrambled();
        let after = apply_move(&before, Move::cw(Layer::U));

        // the U plate turns clockwise and its glyphs spin with it
        let old = before.get(Face::U, 0, 0);
        let new = after.get(Face::U, 0, 2);
        assert_eq!(new.color, old.color);
        assert_eq!(new.rotation, (old.rotation + 90) % 360);

        for col in 0..3 {
            let top = |state: &CubeState, face| state.get(face, 0, col).color;
            assert_eq!(top(&after, Face::F), top(&before, Face::R));
            assert_eq!(top(&after, Face::R), top(&before, Face::B));
            assert_eq!(top(&after, Face::B), top(&before, Face::L));
            assert_eq!(top(&after, Face::L), top(&before, Face::F));
        }
    }

    #[test]
    fn test_f_turn_spins_moved_glyphs() {
        let after = apply_move(&CubeState::solved(), Move::cw(Layer::F));
        for col in 0..3 {
            let sticker = after.get(Face::U, 2, col);
            assert_eq!(sticker.color, Color::Blue);
            assert_eq!(sticker.rotation, 90);
        }
        for row in 0..3 {
            assert_eq!(after.get(Face::R, row, 0).color, Color::Yellow);
            assert_eq!(after.get(Face::L, row, 2).color, Color::White);
        }
        // untouched stickers keep their glyphs
        assert_eq!(after.get(Face::U, 0, 0).rotation, 0);
        assert_eq!(after.get(Face::B, 1, 1).rotation, 0);
    }

    #[test]
    fn test_b_turn_spins_glyphs_backwards() {
        let after = apply_move(&CubeState::solved(), Move::cw(Layer::B));
        for col in 0..3 {
            let sticker = after.get(Face::U, 0, col);
            assert_eq!(sticker.color, Color::Green);
            assert_eq!(sticker.rotation, 270);
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let state = scrambled();
        for layer in Layer::ALL {
            let mv = Move::cw(layer);
            assert_eq!(apply_moves(&state, &[mv; 4]), state, "{mv}4");
            let mv = Move::ccw(layer);
            assert_eq!(apply_moves(&state, &[mv; 4]), state, "{mv}4");
        }
    }

    #[test]
    fn test_inverse_cancels() {
        let state = scrambled();
        for mv in Move::all() {
            assert_eq!(apply_moves(&state, &[mv, mv.inverse()]), state, "{mv}");
            assert_eq!(apply_moves(&state, &[mv.inverse(), mv]), state, "{mv}");
        }
    }

    #[test]
    fn test_double_is_two_quarters() {
        let state = scrambled();
        for layer in Layer::ALL {
            assert_eq!(
                apply_move(&state, Move::double(layer)),
                apply_moves(&state, &[Move::cw(layer); 2]),
                "{layer:?}"
            );
        }
        let solved = CubeState::solved();
        assert_eq!(apply_formula(&solved, "F2"), apply_formula(&solved, "F F"));
    }

    #[test]
    fn test_face_turns_keep_centers() {
        let state = scrambled();
        let centers = |state: &CubeState| Face::ALL.map(|face| state.get(face, 1, 1).color);
        for layer in [Layer::U, Layer::D, Layer::L, Layer::R, Layer::F, Layer::B] {
            for direction in Direction::ALL {
                let mv = Move::new(layer, direction);
                assert_eq!(centers(&apply_move(&state, mv)), centers(&state), "{mv}");
            }
        }
    }

    #[test]
    fn test_slices_carry_centers() {
        let after = apply_formula(&CubeState::solved(), "M");
        assert_eq!(after.get(Face::F, 1, 1).color, Color::Yellow);
        assert_eq!(after.get(Face::U, 1, 1).color, Color::Orange);
    }

    #[test]
    fn test_m_then_m_prime_restores_glyphs() {
        let before = scrambled();
        let after = apply_formula(&before, "M M'");
        assert_eq!(after, before);
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let moves = formula("R U R' U'");
        let solved = CubeState::solved();

        let mut state = solved.clone();
        for _ in 0..5 {
            state = apply_moves(&state, &moves);
            assert!(!state.same_colors(&solved));
        }
        state = apply_moves(&state, &moves);
        assert!(state.same_colors(&solved));

        assert_eq!(sequence_order(&moves), Some(6));
    }

    #[test]
    fn test_sequence_orders() {
        assert_eq!(sequence_order(&formula("R")), Some(4));
        assert_eq!(sequence_order(&formula("R2")), Some(2));
        assert_eq!(sequence_order(&formula("M2 E2 S2")), Some(2));
        assert_eq!(sequence_order(&formula("R U")), Some(105));
        assert_eq!(sequence_order(&formula("x")), Some(4));
        assert_eq!(sequence_order(&[]), Some(1));
    }

    #[test]
    fn test_reorientations_are_compositions() {
        let state = scrambled();
        let cases = [
            ("x", "F S B'"),
            ("x'", "F' S' B"),
            ("y", "R M' L'"),
            ("y'", "R' M L"),
            ("z", "U E' D'"),
            ("z'", "U' E D"),
        ];
        for (rotation, parts) in cases {
            assert_eq!(
                apply_formula(&state, rotation),
                apply_formula(&state, parts),
                "{rotation} = {parts}"
            );
        }
    }

    #[test]
    fn test_z_relabels_side_faces() {
        let solved = CubeState::solved();
        let turned = apply_formula(&solved, "z");
        assert!(turned.is_solved());
        let center = |face| turned.get(face, 1, 1).color;
        assert_eq!(center(Face::U), Color::Yellow);
        assert_eq!(center(Face::D), Color::White);
        assert_eq!(center(Face::F), Face::R.solved_color());
        assert_eq!(center(Face::L), Face::F.solved_color());
        assert_eq!(center(Face::B), Face::L.solved_color());
        assert_eq!(center(Face::R), Face::B.solved_color());

        assert_eq!(apply_formula(&turned, "z'"), solved);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let state = scrambled();
        let copy = state.clone();
        let _ = apply_move(&state, Move::cw(Layer::R));
        assert_eq!(state, copy);
    }

    fn arb_move() -> impl Strategy<Value = Move> {
        (0..Layer::ALL.len(), 0..Direction::ALL.len())
            .prop_map(|(l, d)| Move::new(Layer::ALL[l], Direction::ALL[d]))
    }

    proptest! {
        #[test]
        fn proptest_colors_are_conserved(moves in prop::collection::vec(arb_move(), 0..40)) {
            let state = apply_moves(&CubeState::solved(), &moves);
            prop_assert_eq!(state.color_counts(), [9; 6]);
            for sticker in state.stickers() {
                prop_assert!(sticker.rotation % 90 == 0 && sticker.rotation < 360);
            }
        }

        #[test]
        fn proptest_inverse_sequence_undoes(moves in prop::collection::vec(arb_move(), 0..40)) {
            let start = scrambled();
            let there = apply_moves(&start, &moves);
            let back = apply_moves(&there, &invert_sequence(&moves));
            prop_assert_eq!(back, start);
        }

        #[test]
        fn proptest_sequences_compose(
            a in prop::collection::vec(arb_move(), 0..20),
            b in prop::collection::vec(arb_move(), 0..20),
        ) {
            let start = scrambled();
            let joined: Vec<Move> = a.iter().chain(&b).copied().collect();
            prop_assert_eq!(
                apply_moves(&apply_moves(&start, &a), &b),
                apply_moves(&start, &joined)
            );
        }
    }
}
