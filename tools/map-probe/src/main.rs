//! map-probe: inspect the temple level model from the command line.
//!
//! Usage:
//!   map-probe heights --step 2
//!   map-probe probe 0 30
//!   map-probe walls

use std::process;

use glam::Vec2;
use sanctum_core::constants::PLAYER_SPAWN;
use sanctum_terrain::{floor_at, region_at, CollisionModel, GateZone};

/// Charted area, ground-plane bounds.
const X_RANGE: (f32, f32) = (-40.0, 40.0);
const Z_RANGE: (f32, f32) = (-50.0, 130.0);

/// Glyphs by ascending elevation band.
const BANDS: [(f32, char); 5] = [(0.5, '.'), (3.0, '-'), (6.0, '='), (9.0, '+'), (f32::INFINITY, '^')];

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "heights" => cmd_heights(&args[2..]),
        "probe" => cmd_probe(&args[2..]),
        "walls" => cmd_walls(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "map-probe: SANCTUM level inspection tool\n\
         \n\
         Commands:\n\
         \n\
         heights   Print an ASCII elevation chart (rows are Z, columns are X)\n\
         \n\
           --step <N>         Grid spacing in world units (default: 2)\n\
         \n\
         probe     Report region, floor height and collision at a point\n\
         \n\
           <x> <z>            Ground-plane coordinates\n\
         \n\
         walls     List wall rectangles and gate zones\n\
         \n\
         Legend: . <0.5  - <3  = <6  + <9  ^ higher  # wall  @ player spawn\n"
    );
}

fn parse_step(args: &[String]) -> Option<f32> {
    for i in 0..args.len() {
        if args[i] == "--step" && i + 1 < args.len() {
            return args[i + 1].parse().ok().filter(|s: &f32| *s > 0.0);
        }
    }
    None
}

fn glyph(height: f32) -> char {
    BANDS
        .iter()
        .find(|(limit, _)| height < *limit)
        .map(|(_, c)| *c)
        .unwrap_or('^')
}

fn cmd_heights(args: &[String]) {
    let step = if args.iter().any(|a| a == "--step") {
        match parse_step(args) {
            Some(s) => s,
            None => {
                eprintln!("Error: --step must be a positive number");
                process::exit(1);
            }
        }
    } else {
        2.0
    };

    let collision = CollisionModel::temple();
    let spawn = Vec2::new(PLAYER_SPAWN[0], PLAYER_SPAWN[2]);
    let cols = ((X_RANGE.1 - X_RANGE.0) / step) as usize + 1;
    let rows = ((Z_RANGE.1 - Z_RANGE.0) / step) as usize + 1;

    println!("x {:.0}..{:.0}, z {:.0}..{:.0}, step {step}", X_RANGE.0, X_RANGE.1, Z_RANGE.0, Z_RANGE.1);
    for row in 0..rows {
        let z = Z_RANGE.0 + row as f32 * step;
        let line: String = (0..cols)
            .map(|col| {
                let p = Vec2::new(X_RANGE.0 + col as f32 * step, z);
                if p.distance(spawn) < step * 0.5 {
                    '@'
                } else if collision.is_blocked(p) {
                    '#'
                } else {
                    glyph(floor_at(p))
                }
            })
            .collect();
        println!("{z:>7.1} {line}");
    }
}

fn cmd_probe(args: &[String]) {
    let coords: Option<Vec<f32>> = args.iter().take(2).map(|a| a.parse().ok()).collect();
    let (x, z) = match coords.as_deref() {
        Some([x, z]) => (*x, *z),
        _ => {
            eprintln!("Error: probe requires <x> <z>");
            process::exit(1);
        }
    };

    let collision = CollisionModel::temple();
    let p = Vec2::new(x, z);
    println!("Position: ({x:.2}, {z:.2})");
    println!("  Region:  {:?}", region_at(x, z));
    println!("  Floor:   {:.3}", floor_at(p));
    println!("  In gate: {}", collision.is_in_gate(p));
    println!("  Blocked: {}", collision.is_blocked(p));
}

fn cmd_walls() {
    let collision = CollisionModel::temple();

    println!("Walls ({}):", collision.walls().len());
    for wall in collision.walls() {
        println!(
            "  x {:>6.1}..{:>6.1}  z {:>6.1}..{:>6.1}",
            wall.min.x, wall.max.x, wall.min.y, wall.max.y
        );
    }

    println!("Gates ({}):", collision.gates().len());
    for gate in collision.gates() {
        match gate {
            GateZone::Rect(r) => println!(
                "  rect   x {:>6.1}..{:>6.1}  z {:>6.1}..{:>6.1}",
                r.min.x, r.max.x, r.min.y, r.max.y
            ),
            GateZone::Radial { center, radius } => println!(
                "  radial center ({:.1}, {:.1}) r {:.1}",
                center.x, center.y, radius
            ),
        }
    }
}
