//! Virtual Rubik's Cube
//!
//! Applies move formulas to a 3x3x3 cube and shows the result as a text net,
//! or opens an interactive 3D view where the cube can be turned from the
//! keyboard. Formulas use standard notation (`R U R' U'`, `M2`, `x'`); tokens
//! that are not moves are skipped.

mod visualization;

use clap::{Parser, Subcommand};

use cubelab::moves::format_sequence;
use cubelab::net::{format_net, format_net_with_glyphs};
use cubelab::pieces::pieces;
use cubelab::scramble::DEFAULT_SCRAMBLE_LENGTH;
use cubelab::{apply_moves, graph, parse_formula, sequence_order, CubeState, Scrambler};

/// Turns a virtual 3x3x3 cube.
#[derive(Parser)]
#[command(name = "cubelab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a formula to the solved cube and print the net.
    Show {
        /// Moves to apply, such as "R U R' U'".
        #[arg(default_value = "")]
        formula: String,
        /// Also print each sticker's glyph direction.
        #[arg(long)]
        glyphs: bool,
    },
    /// Generate a scramble and print the scrambled net.
    Scramble {
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of moves.
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
    },
    /// Print how many repetitions of a formula return the cube to solved.
    Order {
        formula: String,
    },
    /// List every piece and its stickers.
    Pieces,
    /// Apply a formula to the solved cube and print the 2D graph view as SVG.
    Graph {
        /// Moves to apply, such as "R U R' U'".
        #[arg(default_value = "")]
        formula: String,
        /// Print the node positions instead.
        #[arg(long)]
        nodes: bool,
    },
    /// Open the interactive 3D viewer.
    Display {
        /// Formula to play back after opening.
        formula: Option<String>,
    },
}

fn main() -> eyre::Result<()> {
    env_logger::builder().init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Show { formula, glyphs }) => print!("{}", render_show(&formula, glyphs)),
        Some(Command::Scramble { seed, length }) => run_scramble(seed, length),
        Some(Command::Order { formula }) => run_order(&formula)?,
        Some(Command::Pieces) => print!("{}", render_pieces()),
        Some(Command::Graph { formula, nodes }) => print!("{}", render_graph(&formula, nodes)),
        Some(Command::Display { formula }) => visualization::display(formula.as_deref()),
        None => {
            // default: interactive viewer on a solved cube
            println!("Keys: U D L R F B M E S X Y Z turn, Shift reverses");
            println!("      Space shuffles, Backspace resets");
            visualization::display(None);
        }
    }

    Ok(())
}

/// Applies a formula to the solved cube and renders the moves and the net.
fn render_show(formula: &str, glyphs: bool) -> String {
    let moves = parse_formula(formula);
    let state = apply_moves(&CubeState::solved(), &moves);
    let net = if glyphs {
        format_net_with_glyphs(&state)
    } else {
        format_net(&state)
    };
    format!("Moves: {}\n\n{net}", format_sequence(&moves))
}

/// Prints a scramble and the resulting net.
fn run_scramble(seed: Option<u64>, length: usize) {
    let mut scrambler = match seed {
        Some(seed) => Scrambler::from_seed(seed, length),
        None => Scrambler::new(length),
    };
    let moves = scrambler.next_scramble();
    let state = apply_moves(&CubeState::solved(), &moves);
    println!("Seed: {}", scrambler.seed());
    println!("Scramble: {}\n", format_sequence(&moves));
    print!("{}", format_net(&state));
}

/// Prints the order of a formula.
fn run_order(formula: &str) -> eyre::Result<()> {
    let moves = parse_formula(formula);
    if moves.is_empty() {
        eyre::bail!("no moves in {formula:?}");
    }
    match sequence_order(&moves) {
        Some(order) => println!("{} has order {order}", format_sequence(&moves)),
        None => println!(
            "{} does not return to solved within {} repetitions",
            format_sequence(&moves),
            cubelab::engine::MAX_ORDER
        ),
    }
    Ok(())
}

/// Lists every piece as `index kind sticker-ids`, one per line.
fn render_pieces() -> String {
    let mut output = String::new();
    for (i, piece) in pieces().iter().enumerate() {
        let stickers: Vec<String> = piece.stickers.iter().map(|id| id.to_string()).collect();
        output.push_str(&format!(
            "{i:02} {:<6} {}\n",
            format!("{:?}", piece.kind),
            stickers.join(" ")
        ));
    }
    output
}

/// Renders the graph view of a formula applied to the solved cube, or lists
/// each graph node as `sticker x y`.
fn render_graph(formula: &str, nodes: bool) -> String {
    if nodes {
        let mut output = String::new();
        for node in &graph::layout().nodes {
            let (x, y) = (node.center.x, node.center.y);
            output.push_str(&format!("{} {x:.2} {y:.2}\n", node.sticker));
        }
        return output;
    }
    let state = apply_moves(&CubeState::solved(), &parse_formula(formula));
    graph::render_svg(&state)
}
