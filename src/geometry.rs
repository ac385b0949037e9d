//! Placement of stickers in 3D space.
//!
//! The cube occupies the 3x3x3 grid of cubies centered on the origin, with
//! coordinates in `-1..=1` on each axis: +X points right, +Y up, and +Z toward
//! the viewer (the F face). Each sticker sits on one cubie and faces outward
//! along its face's normal.

use crate::cube::{Face, StickerId};

/// A 3D coordinate of a cubie, each component in `-1..=1`.
pub type Coord = (i32, i32, i32);

/// Outward unit normal of a face.
pub const fn face_normal(face: Face) -> Coord {
    match face {
        Face::U => (0, 1, 0),
        Face::D => (0, -1, 0),
        Face::L => (-1, 0, 0),
        Face::R => (1, 0, 0),
        Face::F => (0, 0, 1),
        Face::B => (0, 0, -1),
    }
}

/// Returns the cubie a sticker is attached to.
///
/// Row and column are read as the face is seen from outside the cube in the
/// usual cross layout: U with B above it, D with F above it, and the four side
/// faces upright.
pub const fn cubie_position(id: StickerId) -> Coord {
    let row = id.row() as i32;
    let col = id.col() as i32;
    match id.face() {
        Face::U => (col - 1, 1, row - 1),
        Face::D => (col - 1, -1, 1 - row),
        Face::F => (col - 1, 1 - row, 1),
        Face::B => (1 - col, 1 - row, -1),
        Face::L => (-1, 1 - row, col - 1),
        Face::R => (1, 1 - row, 1 - col),
    }
}

const fn offset(from: Coord, to: Coord) -> Coord {
    (to.0 - from.0, to.1 - from.1, to.2 - from.2)
}

/// Unit direction a sticker's glyph arrow points in on `face`.
///
/// Rotation 0 points toward row 0 of the face; each quarter turn spins the
/// arrow clockwise as seen from outside the cube.
pub const fn glyph_direction(face: Face, rotation: u16) -> Coord {
    let center = cubie_position(StickerId::new(face, 1, 1));
    let up = offset(center, cubie_position(StickerId::new(face, 0, 1)));
    let right = offset(center, cubie_position(StickerId::new(face, 1, 2)));
    match (rotation / 90) % 4 {
        0 => up,
        1 => right,
        2 => offset(up, (0, 0, 0)),
        _ => offset(right, (0, 0, 0)),
    }
}

/// Center of a sticker's visible square, in cubie units.
pub fn sticker_center(id: StickerId) -> [f32; 3] {
    let (x, y, z) = cubie_position(id);
    let (nx, ny, nz) = face_normal(id.face());
    [
        x as f32 + 0.5 * nx as f32,
        y as f32 + 0.5 * ny as f32,
        z as f32 + 0.5 * nz as f32,
    ]
}
