//! Pong entry point
//!
//! Native headless host: no window is opened, so no keys are ever held.
//! The loop still runs the full poll -> tick -> scene cycle at the fixed
//! cadence and logs every point.

use std::time::{Duration, Instant};

use pong::Settings;
use pong::consts::{SIM_DT, TICKS_PER_SECOND};
use pong::platform::{FrameClock, KeyState, read_input};
use pong::renderer::Scene;
use pong::sim::{GameState, RandomSampler, tick};

/// How long the headless session runs
const SESSION_SECONDS: u32 = 30;

/// Game instance holding all host-side state
struct Game {
    state: GameState,
    sampler: RandomSampler,
    settings: Settings,
    keys: KeyState,
    clock: FrameClock,
    ticks: u64,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let mut sampler = RandomSampler::from_entropy();
        Self {
            state: GameState::new(&mut sampler),
            sampler,
            settings,
            keys: KeyState::new(),
            clock: FrameClock::new(),
            ticks: 0,
        }
    }

    /// Run however many ticks `dt` seconds of real time call for
    fn update(&mut self, dt: f32) {
        for _ in 0..self.clock.advance(dt) {
            let input = read_input(&self.keys, &self.settings.keys);
            if let Some(side) = tick(&mut self.state, &input, &mut self.sampler) {
                log::debug!(
                    "{} scores at tick {} (now {})",
                    side.as_str(),
                    self.ticks,
                    self.state.score.get(side)
                );
            }
            self.ticks += 1;
        }
    }

    fn render(&self) -> Scene {
        Scene::build(&self.state, &self.settings)
    }
}

fn main() {
    env_logger::init();
    log::info!("Pong (headless) starting...");

    let mut game = Game::new(Settings::default());
    let frame = Duration::from_secs_f32(SIM_DT);
    let total_ticks = u64::from(SESSION_SECONDS * TICKS_PER_SECOND);

    let mut last = Instant::now();
    while game.ticks < total_ticks {
        let now = Instant::now();
        game.update((now - last).as_secs_f32());
        last = now;

        let scene = game.render();
        log::trace!("frame: {} triangles", scene.mesh.triangle_count());

        let elapsed = now.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }

    log::info!(
        "Session over after {} ticks: {} - {}",
        game.ticks,
        game.state.score.left,
        game.state.score.right
    );
}
