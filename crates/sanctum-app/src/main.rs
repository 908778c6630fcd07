//! sanctum: headless runner for the arena simulation.
//!
//! Starts a session with the rifle and lets a simple autopilot play it:
//! aim at the nearest enemy, hold the trigger, strafe back and forth.
//!
//! Usage:
//!   sanctum [--config sim.json] [--seconds 30] [--seed 42]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use glam::Vec2;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use sanctum_app::{AppError, SimulationHandle};
use sanctum_core::commands::PlayerCommand;
use sanctum_core::constants::ENEMY_CHEST_HEIGHT;
use sanctum_core::enums::GamePhase;
use sanctum_core::input::InputState;
use sanctum_core::state::GameStateSnapshot;
use sanctum_core::types::{ground, yaw_towards};
use sanctum_sim::SimConfig;

const DEFAULT_SECONDS: f64 = 30.0;
const POLL_INTERVAL: Duration = Duration::from_millis(16);
const STRAFE_PERIOD_SECS: f64 = 2.0;
/// Fraction of the aim error corrected per poll. Polls and ticks are not
/// in lockstep, so a full correction can be applied twice.
const AIM_GAIN: f32 = 0.5;

struct Options {
    config: Option<PathBuf>,
    seconds: f64,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("sanctum: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!(
        "sanctum: headless arena simulation runner\n\
         \n\
         Options:\n\
         \n\
           --config <path>   JSON tuning file (missing fields use defaults)\n\
           --seconds <N>     How long to run the autopilot (default: 30)\n\
           --seed <N>        Override the RNG seed\n\
         \n\
         Set RUST_LOG to adjust logging, e.g. RUST_LOG=sanctum_sim=debug\n"
    );
}

fn parse_options(args: &[String]) -> Result<Options, AppError> {
    let mut options = Options {
        config: None,
        seconds: DEFAULT_SECONDS,
        seed: None,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| AppError::Usage(format!("{flag} requires a value")))
        };
        match flag {
            "--config" => options.config = Some(PathBuf::from(value()?)),
            "--seconds" => {
                options.seconds = value()?
                    .parse()
                    .ok()
                    .filter(|s: &f64| s.is_finite() && *s > 0.0)
                    .ok_or_else(|| AppError::Usage("--seconds must be a positive number".into()))?;
            }
            "--seed" => {
                options.seed = Some(
                    value()?
                        .parse()
                        .map_err(|_| AppError::Usage("--seed must be an integer".into()))?,
                );
            }
            other => return Err(AppError::Usage(format!("Unknown argument: {other}"))),
        }
        i += 2;
    }
    Ok(options)
}

fn load_config(options: &Options) -> Result<SimConfig, AppError> {
    let mut config = match &options.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
                path: path.clone(),
                source,
            })?;
            SimConfig::from_json(&json)?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn init_tracing() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("sanctum=info".parse()?))
        .init();
    Ok(())
}

fn run(args: &[String]) -> Result<(), AppError> {
    let options = parse_options(args)?;
    init_tracing()?;
    let config = load_config(&options)?;
    let sensitivity = config.look_sensitivity;

    info!(seed = config.seed, seconds = options.seconds, "starting sanctum");

    let handle = SimulationHandle::new();
    handle.start(config, |_| {})?;
    handle.send_command(PlayerCommand::StartGame)?;
    handle.send_command(PlayerCommand::SelectSlot { slot: 2 })?;

    let started = Instant::now();
    let mut next_report = 1.0;
    let mut last: Option<GameStateSnapshot> = None;

    while started.elapsed().as_secs_f64() < options.seconds {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snapshot) = handle.snapshot()? else {
            continue;
        };

        let elapsed = started.elapsed().as_secs_f64();
        handle.send_input(autopilot(&snapshot, elapsed, sensitivity))?;

        if elapsed >= next_report {
            next_report += 1.0;
            info!(
                score = snapshot.score,
                wave = snapshot.wave,
                health = snapshot.health,
                enemies = snapshot.enemies.len(),
                ammo = snapshot.weapon.ammo,
                "status"
            );
        }

        let over = snapshot.phase == GamePhase::GameOver;
        last = Some(snapshot);
        if over {
            warn!("player died");
            break;
        }
    }

    handle.shutdown()?;

    match last {
        Some(s) => println!(
            "final: phase={:?} score={} wave={} health={} ticks={} sim_secs={:.1}",
            s.phase, s.score, s.wave, s.health, s.time.tick, s.time.elapsed_secs
        ),
        None => println!("final: no snapshot received"),
    }
    Ok(())
}

/// Input that turns toward the nearest enemy's chest and fires while
/// strafing.
fn autopilot(snapshot: &GameStateSnapshot, elapsed: f64, sensitivity: f32) -> InputState {
    let strafe_left = (elapsed / STRAFE_PERIOD_SECS) as u64 % 2 == 0;
    let mut input = InputState {
        left: strafe_left,
        right: !strafe_left,
        ..Default::default()
    };

    let player = snapshot.player;
    let eye = ground(player.position);
    let nearest = snapshot.enemies.iter().min_by(|a, b| {
        eye.distance_squared(a.ground)
            .total_cmp(&eye.distance_squared(b.ground))
    });
    let Some(target) = nearest else {
        return input;
    };

    let yaw_error = wrap_angle(yaw_towards(eye, target.ground) - player.yaw);
    let rise = target.position.y + ENEMY_CHEST_HEIGHT - player.position.y;
    let desired_pitch = rise.atan2(eye.distance(target.ground));
    let pitch_error = desired_pitch - player.pitch;

    // Look deltas are subtracted from yaw and pitch.
    input.look_delta = Vec2::new(-yaw_error, -pitch_error) * (AIM_GAIN / sensitivity);
    input.fire_held = true;
    input
}

/// Wrap an angle into [-PI, PI].
fn wrap_angle(a: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (a + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use sanctum_core::enums::Archetype;
    use sanctum_core::state::{EnemyView, PlayerView};
    use sanctum_core::types::EnemyId;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_options(&[]).unwrap();
        assert!(options.config.is_none());
        assert_eq!(options.seconds, DEFAULT_SECONDS);
        assert!(options.seed.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let options =
            parse_options(&args(&["--seconds", "5", "--seed", "7", "--config", "a.json"])).unwrap();
        assert_eq!(options.seconds, 5.0);
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.config, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_options(&args(&["--seed"])), Err(AppError::Usage(_))));
        assert!(matches!(
            parse_options(&args(&["--seconds", "-1"])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(parse_options(&args(&["--bogus"])), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let options = parse_options(&args(&["--config", "/nonexistent/sanctum.json"])).unwrap();
        assert!(matches!(load_config(&options), Err(AppError::ConfigIo { .. })));
    }

    #[test]
    fn test_wrap_angle() {
        use std::f32::consts::PI;
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-5);
        assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((wrap_angle(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_autopilot_turns_toward_enemy() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.player = PlayerView {
            position: Vec3::new(0.0, 1.8, 0.0),
            ..Default::default()
        };
        // Yaw 0 faces -Z; an enemy on +X needs a negative yaw turn.
        snapshot.enemies.push(EnemyView {
            id: EnemyId(0),
            archetype: Archetype::Soldier,
            ground: Vec2::new(10.0, 0.0),
            position: Vec3::new(10.0, 0.0, 0.0),
            facing: 0.0,
            health: 100,
            max_health: 100,
        });

        let input = autopilot(&snapshot, 0.0, 0.002);
        assert!(input.fire_held);
        assert!(input.look_delta.x > 0.0);

        snapshot.enemies.clear();
        let idle = autopilot(&snapshot, 0.0, 0.002);
        assert!(!idle.fire_held);
        assert_eq!(idle.look_delta, Vec2::ZERO);
        assert!(idle.left ^ idle.right);
    }
}
