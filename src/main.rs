//! Star Strike headless runner
//!
//! Drives the simulation without a window: an autopilot steers under the
//! lowest enemy and fires, then the final frame is printed as JSON.
//!
//! Usage: star-strike [--seed N] [--ticks N] [--tuning FILE]

use std::error::Error;

use star_strike::Tuning;
use star_strike::sim::{GameEvent, GamePhase, Key, KeyEvent, Surface, World, handle_key, tick};

/// Display size the runner pretends to have
const SURFACE: Surface = Surface {
    width: 800.0,
    height: 700.0,
};
/// Ticks between autopilot shots
const FIRE_EVERY: u64 = 8;

struct CliArgs {
    seed: u64,
    max_ticks: u64,
    tuning_path: Option<String>,
}

fn parse_args() -> Result<CliArgs, Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        seed: 0x5eed,
        max_ticks: 20_000,
        tuning_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--seed", Some(v)) => cli.seed = v.parse()?,
            ("--ticks", Some(v)) => cli.max_ticks = v.parse()?,
            ("--tuning", Some(v)) => cli.tuning_path = Some(v.clone()),
            ("--seed" | "--ticks" | "--tuning", None) => {
                return Err(format!("missing value for {}", args[i]).into());
            }
            (other, _) => return Err(format!("unexpected argument: {other}").into()),
        }
        i += 2;
    }
    Ok(cli)
}

/// Key presses that make the craft chase the lowest visible enemy
struct Autopilot {
    left: bool,
    right: bool,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            left: false,
            right: false,
        }
    }

    fn plan(&mut self, world: &World) -> Vec<KeyEvent> {
        let craft_mid = world.craft.pos.x + world.craft.size.x / 2.0;
        let target = world
            .enemies
            .iter()
            .filter(|e| e.pos.y + e.size.y > 0.0)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|e| e.pos.x + e.size.x / 2.0);

        let (want_left, want_right) = match target {
            Some(x) if x < craft_mid - world.craft_speed => (true, false),
            Some(x) if x > craft_mid + world.craft_speed => (false, true),
            _ => (false, false),
        };

        let mut events = Vec::new();
        if want_left != self.left {
            events.push(if want_left {
                KeyEvent::Down(Key::Left)
            } else {
                KeyEvent::Up(Key::Left)
            });
            self.left = want_left;
        }
        if want_right != self.right {
            events.push(if want_right {
                KeyEvent::Down(Key::Right)
            } else {
                KeyEvent::Up(Key::Right)
            });
            self.right = want_right;
        }
        if target.is_some() && world.time_ticks % FIRE_EVERY == 0 {
            events.push(KeyEvent::Down(Key::Space));
        }
        events
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = parse_args()?;

    let tuning = match &cli.tuning_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            log::info!("Loaded tuning from {}", path);
            Tuning::from_json(&json)?
        }
        None => Tuning::default(),
    };

    log::info!("Star Strike (headless) starting, seed {}", cli.seed);
    let mut world = World::with_tuning(SURFACE, tuning, cli.seed)?;
    let mut autopilot = Autopilot::new();

    while world.time_ticks < cli.max_ticks {
        for event in autopilot.plan(&world) {
            handle_key(&mut world, event);
        }
        let phase = tick(&mut world);

        for event in world.drain_events() {
            if let GameEvent::CraftHit { lives_left } = event {
                log::info!("Tick {}: craft hit, {} lives left", world.time_ticks, lives_left);
            }
        }
        if phase == GamePhase::GameOver {
            break;
        }
        if world.time_ticks % 1000 == 0 {
            log::info!(
                "Tick {}: score {}, lives {}, {} enemies",
                world.time_ticks,
                world.score,
                world.lives,
                world.enemies.len()
            );
        }
    }

    log::info!(
        "Finished after {} ticks ({:?}), score {}",
        world.time_ticks,
        world.phase,
        world.score
    );
    println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    Ok(())
}
