//! Layout of the 2D circle-graph view.
//!
//! Each outer layer of the U, F, and R axes is drawn as a circle around that
//! face's center; the 54 stickers are the intersection points of circles from
//! two different axes. Turning a layer moves stickers along its circle.
//!
//! The layout depends only on the sticker indexing, so it is computed once
//! and shared. [`render_svg`] draws a cube state on it.

use lazy_static::lazy_static;

use crate::cube::{CubeState, Face, StickerId, STICKER_COUNT};

/// A point in view coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_sq(self, other: Point) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// A layer circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphCircle {
    pub center: Point,
    pub radius: f64,
    /// Face whose axis the circle's layer turns around.
    pub face: Face,
}

/// A sticker's position in the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphNode {
    pub sticker: StickerId,
    pub center: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphLayout {
    /// One node per sticker, in storage order.
    pub nodes: Vec<GraphNode>,
    pub circles: Vec<GraphCircle>,
}

/// Centers of the U, F, and R circle families. These are tuned by hand.
const CENTERS: [(Face, Point); 3] = [
    (Face::U, Point::new(200.0, 145.0)),
    (Face::F, Point::new(145.0, 255.0)),
    (Face::R, Point::new(255.0, 255.0)),
];

/// Radii of the three layers of each family, innermost first.
const RADII: [f64; 3] = [100.0, 120.0, 140.0];

lazy_static! {
    static ref LAYOUT: GraphLayout = build_layout();
}

/// Returns the graph layout.
pub fn layout() -> &'static GraphLayout {
    &LAYOUT
}

/// Side of the square SVG view box.
const VIEW_SIZE: u32 = 400;

/// Radius of a sticker node.
const NODE_RADIUS: f64 = 8.0;

/// Arrow glyph pointing up, centered on the origin.
const GLYPH_PATH: &str = "M -3 -1 L 0 -4 L 3 -1 L 1 0 L 1 4 L -1 4 L -1 0 Z";

/// Renders `state` on the graph layout as an SVG document.
///
/// Node `i` shows sticker `i`: it is filled with the sticker's color and
/// carries the arrow glyph turned by the sticker's rotation.
pub fn render_svg(state: &CubeState) -> String {
    let layout = layout();
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {VIEW_SIZE} {VIEW_SIZE}\">\n"
    ));
    svg.push_str("  <defs>\n");
    svg.push_str(&format!(
        "    <path id=\"glyph\" d=\"{GLYPH_PATH}\" fill=\"rgba(0,0,0,0.5)\" stroke=\"none\"/>\n"
    ));
    svg.push_str("  </defs>\n");

    svg.push_str("  <g fill=\"none\" stroke=\"rgba(156,163,175,0.5)\" stroke-width=\"1\">\n");
    for circle in &layout.circles {
        svg.push_str(&format!(
            "    <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"/>\n",
            circle.center.x, circle.center.y, circle.radius
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g stroke=\"#111827\" stroke-width=\"1.5\">\n");
    for (node, sticker) in layout.nodes.iter().zip(state.stickers()) {
        svg.push_str(&format!(
            "    <g id=\"{}\" transform=\"translate({:.1} {:.1})\">\n",
            node.sticker, node.center.x, node.center.y
        ));
        svg.push_str(&format!(
            "      <circle r=\"{NODE_RADIUS}\" fill=\"{}\"/>\n",
            sticker.color.hex()
        ));
        svg.push_str(&format!(
            "      <use href=\"#glyph\" transform=\"rotate({})\"/>\n",
            sticker.rotation
        ));
        svg.push_str("    </g>\n");
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

/// Returns both intersection points of two circles, or `None` if they do not
/// cross.
fn circle_intersections(p1: Point, r1: f64, p2: Point, r2: f64) -> Option<[Point; 2]> {
    let d_sq = p1.distance_sq(p2);
    if d_sq == 0.0 {
        return None;
    }
    let d = d_sq.sqrt();
    if d > r1 + r2 || d < (r1 - r2).abs() {
        return None;
    }

    let a = (r1 * r1 - r2 * r2 + d_sq) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let mid = Point::new(p1.x + a * (p2.x - p1.x) / d, p1.y + a * (p2.y - p1.y) / d);
    let (dx, dy) = ((p2.x - p1.x) / d, (p2.y - p1.y) / d);

    Some([
        Point::new(mid.x + h * dy, mid.y - h * dx),
        Point::new(mid.x - h * dy, mid.y + h * dx),
    ])
}

/// Intersection point tagged with the layer index of each family.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    point: Point,
    /// Layer index per family, `[U, F, R]`; the family not involved is unused.
    layers: [usize; 3],
}

fn build_layout() -> GraphLayout {
    let [(_, u_center), (_, f_center), (_, r_center)] = CENTERS;

    let circles: Vec<GraphCircle> = CENTERS
        .iter()
        .flat_map(|&(face, center)| {
            RADII.map(|radius| GraphCircle {
                center,
                radius,
                face,
            })
        })
        .collect();

    let mut groups: [Vec<Crossing>; 6] = Default::default();

    // (family a, family b, face nearest to the near point, face of the far point)
    let pairs = [
        (0, 2, u_center, r_center, Face::F, Face::B, f_center),
        (0, 1, u_center, f_center, Face::R, Face::L, r_center),
        (1, 2, f_center, r_center, Face::U, Face::D, u_center),
    ];
    for (a, b, a_center, b_center, near, far, near_center) in pairs {
        for (i, &ra) in RADII.iter().enumerate() {
            for (j, &rb) in RADII.iter().enumerate() {
                let Some([p, q]) = circle_intersections(a_center, ra, b_center, rb) else {
                    continue;
                };
                let mut layers = [0; 3];
                layers[a] = i;
                layers[b] = j;
                let (near_point, far_point) =
                    if p.distance_sq(near_center) < q.distance_sq(near_center) {
                        (p, q)
                    } else {
                        (q, p)
                    };
                groups[near.index()].push(Crossing {
                    point: near_point,
                    layers,
                });
                groups[far.index()].push(Crossing {
                    point: far_point,
                    layers,
                });
            }
        }
    }

    let mut nodes = Vec::with_capacity(STICKER_COUNT);
    for face in Face::ALL {
        let group = &mut groups[face.index()];
        // row-major order in each face's own orientation
        group.sort_by_key(|c| {
            let [u, f, r] = c.layers;
            match face {
                Face::U => (f, r),
                Face::D => (2 - f, r),
                Face::F => (u, r),
                Face::B => (u, 2 - r),
                Face::R => (u, 2 - f),
                Face::L => (u, f),
            }
        });
        if group.len() != 9 {
            log::warn!("graph layout has {} nodes on face {face}", group.len());
        }
        for (i, crossing) in group.iter().take(9).enumerate() {
            nodes.push(GraphNode {
                sticker: StickerId::new(face, i / 3, i % 3),
                center: crossing.point,
            });
        }
    }

    GraphLayout { nodes, circles }
}
