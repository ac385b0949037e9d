//! Text rendering of the cube as an unfolded cross.
//!
//! ```text
//!     YYY
//!     YYY
//!     YYY
//! BBB RRR GGG OOO
//! BBB RRR GGG OOO
//! BBB RRR GGG OOO
//!     WWW
//!     WWW
//!     WWW
//! ```

use crate::cube::{CubeState, Face, Sticker};

/// Faces shown in the middle band of the cross, left to right.
const BAND: [Face; 4] = [Face::L, Face::F, Face::R, Face::B];

/// Returns the arrow pointing the way a sticker's glyph points.
fn glyph(sticker: &Sticker) -> char {
    match sticker.rotation {
        0 => '↑',
        90 => '→',
        180 => '↓',
        _ => '←',
    }
}

fn format_row(state: &CubeState, face: Face, row: usize, glyphs: bool) -> String {
    let mut output = String::new();
    for col in 0..3 {
        let sticker = state.get(face, row, col);
        output.push(sticker.color.letter());
        if glyphs {
            output.push(glyph(sticker));
        }
    }
    output
}

fn format_cross(state: &CubeState, glyphs: bool) -> String {
    let face_width = if glyphs { 6 } else { 3 };
    let indent = " ".repeat(face_width + 1);

    let mut output = String::new();
    for row in 0..3 {
        output.push_str(&indent);
        output.push_str(&format_row(state, Face::U, row, glyphs));
        output.push('\n');
    }
    for row in 0..3 {
        let band: Vec<String> = BAND
            .iter()
            .map(|&face| format_row(state, face, row, glyphs))
            .collect();
        output.push_str(&band.join(" "));
        output.push('\n');
    }
    for row in 0..3 {
        output.push_str(&indent);
        output.push_str(&format_row(state, Face::D, row, glyphs));
        output.push('\n');
    }
    output
}

/// Formats the cube as a cross of color letters.
pub fn format_net(state: &CubeState) -> String {
    format_cross(state, false)
}

/// Formats the cube as a cross of color letters, each followed by an arrow
/// showing its glyph orientation.
pub fn format_net_with_glyphs(state: &CubeState) -> String {
    format_cross(state, true)
}
