//! Interactive 3D view of the cube using kiss3d.

use kiss3d::prelude::*;

use cubelab::cube::{self, CubeState, Sticker, StickerId, STICKER_COUNT};
use cubelab::geometry::{face_normal, glyph_direction, sticker_center, Coord};
use cubelab::moves::{format_sequence, Layer, Move};
use cubelab::{Scrambler, Session};

/// Frames between two moves of a queued formula (about 250 ms at 60 FPS).
const FRAMES_PER_MOVE: u32 = 15;

const TITLE: &str = "cubelab - [U D L R F B M E S X Y Z] turn, [Shift] reverse, \
                     [Space] shuffle, [Backspace] reset";

/// Converts a sticker color to a display color.
fn display_color(color: cube::Color) -> Color {
    let [r, g, b] = color.rgb();
    Color::new(r, g, b, 1.0)
}

fn to_vec3((x, y, z): Coord) -> Vec3 {
    Vec3::new(x as f32, y as f32, z as f32)
}

/// Position of the marker that shows which way a sticker's glyph points:
/// off the tile center toward the arrow head, just above the tile.
fn marker_position(sticker: &Sticker) -> Vec3 {
    const MARKER_OFFSET: f32 = 0.28;
    const MARKER_LIFT: f32 = 0.03;

    let face = sticker.id.face();
    let [x, y, z] = sticker_center(sticker.id);
    Vec3::new(x, y, z)
        + MARKER_OFFSET * to_vec3(glyph_direction(face, sticker.rotation))
        + MARKER_LIFT * to_vec3(face_normal(face))
}

/// Returns the layer turned by a key, if any.
fn key_layer(key: kiss3d::event::Key) -> Option<Layer> {
    use kiss3d::event::Key;
    match key {
        Key::U => Some(Layer::U),
        Key::D => Some(Layer::D),
        Key::L => Some(Layer::L),
        Key::R => Some(Layer::R),
        Key::F => Some(Layer::F),
        Key::B => Some(Layer::B),
        Key::M => Some(Layer::M),
        Key::E => Some(Layer::E),
        Key::S => Some(Layer::S),
        Key::X => Some(Layer::X),
        Key::Y => Some(Layer::Y),
        Key::Z => Some(Layer::Z),
        _ => None,
    }
}

/// Builds one thin tile per sticker, in storage order, plus a glyph marker
/// on each tile.
///
/// Coordinate conventions:
/// - Cubie coordinates run over -1..=1 and map 1:1 to world units.
/// - Each tile sits half a unit out from its cubie's center along the face
///   normal.
fn build_scene(
    scene: &mut SceneNode3d,
    state: &CubeState,
) -> (Vec<SceneNode3d>, Vec<SceneNode3d>) {
    /// Edge length of a sticker tile (slightly smaller than 1.0 for visible gaps).
    const TILE_SIZE: f32 = 0.9;
    /// Thickness of a sticker tile along its face normal.
    const TILE_DEPTH: f32 = 0.04;
    /// Edge length of the dark body behind the stickers.
    const BODY_SIZE: f32 = 2.96;
    /// Edge length of a glyph marker.
    const MARKER_SIZE: f32 = 0.16;

    scene
        .add_cube(BODY_SIZE, BODY_SIZE, BODY_SIZE)
        .set_color(Color::new(0.05, 0.05, 0.05, 1.0))
        .set_position(Vec3::ZERO);

    let mut tiles = Vec::with_capacity(STICKER_COUNT);
    let mut markers = Vec::with_capacity(STICKER_COUNT);
    for sticker in state.stickers() {
        let id: StickerId = sticker.id;
        let (nx, ny, nz) = face_normal(id.face());
        let extent = |n: i32, size: f32| if n == 0 { size } else { TILE_DEPTH };
        let [x, y, z] = sticker_center(id);
        let tile = scene
            .add_cube(extent(nx, TILE_SIZE), extent(ny, TILE_SIZE), extent(nz, TILE_SIZE))
            .set_color(display_color(sticker.color))
            .set_position(Vec3::new(x, y, z));
        tiles.push(tile);

        let marker = scene
            .add_cube(
                extent(nx, MARKER_SIZE),
                extent(ny, MARKER_SIZE),
                extent(nz, MARKER_SIZE),
            )
            .set_color(Color::new(0.1, 0.1, 0.1, 1.0))
            .set_position(marker_position(sticker));
        markers.push(marker);
    }
    (tiles, markers)
}

/// Opens the viewer and plays `formula`, if given, one move at a time.
pub fn display(formula: Option<&str>) {
    pollster::block_on(display_async(formula));
}

async fn display_async(formula: Option<&str>) {
    let mut session = Session::new();
    let mut scrambler = Scrambler::default();
    if let Some(formula) = formula {
        if let Err(e) = session.queue_formula(formula) {
            log::warn!("could not queue formula: {e}");
        }
    }

    let mut window = Window::new(TITLE).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let (mut tiles, mut markers) = build_scene(&mut scene, session.state());

    let mut frames_since_move = 0;
    // whether tile colors need to be refreshed from the session
    let mut needs_repaint = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, modifiers) = event.value {
                use kiss3d::event::{Action, Key, Modifiers};
                if action != Action::Press {
                    continue;
                }
                match key {
                    Key::Space => match session.shuffle(&mut scrambler) {
                        Ok(moves) => log::info!("scramble: {}", format_sequence(&moves)),
                        Err(e) => log::debug!("ignored shuffle: {e}"),
                    },
                    Key::Back => session.reset(),
                    _ => {
                        let Some(layer) = key_layer(key) else {
                            continue;
                        };
                        let mv = if modifiers.contains(Modifiers::Shift) {
                            Move::ccw(layer)
                        } else {
                            Move::cw(layer)
                        };
                        if let Err(e) = session.apply(mv) {
                            log::debug!("ignored {mv}: {e}");
                        }
                    }
                }
                needs_repaint = true;
            }
        }

        if session.is_running() {
            frames_since_move += 1;
            if frames_since_move >= FRAMES_PER_MOVE {
                frames_since_move = 0;
                if let Some(mv) = session.step() {
                    log::trace!("played {mv}");
                }
                needs_repaint = true;
            }
        }

        if needs_repaint {
            let stickers = session.state().stickers();
            for ((tile, marker), sticker) in tiles.iter_mut().zip(&mut markers).zip(stickers) {
                tile.set_color(display_color(sticker.color));
                marker.set_position(marker_position(sticker));
            }
            needs_repaint = false;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
