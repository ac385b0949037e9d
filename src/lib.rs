//! Virtual 3x3x3 Twisty Puzzle Library
//!
//! Provides the cube model, the move engine, and the piece index behind the
//! interactive cube, plus the text and graph views built on top of them.

pub mod cube;
pub mod engine;
pub mod geometry;
pub mod graph;
pub mod moves;
pub mod net;
pub mod pieces;
pub mod scramble;
pub mod session;

pub use cube::{Color, CubeState, Face, Sticker, StickerId};
pub use engine::{apply_formula, apply_move, apply_moves, sequence_order};
pub use moves::{parse_formula, Direction, Layer, Move, ParseMoveError};
pub use pieces::{piece_containing, pieces, Piece, PieceKind};
pub use scramble::Scrambler;
pub use session::{Session, SessionError};
