//! Line-walk example for the UCT engine
//!
//! Every episode draws a random target in [-1, 1]. The walker starts at 0,
//! steps left or right by 0.05, and may stop at any time; after 100 moves it
//! stops anyway. The outcome is `1 - (cos(10 * target) - position)^2`, so the
//! engine has to learn, per target, where on the line to stop.
//!
//! Run with `cargo run --release --example line_walk -- [episodes]`.

use rand::Rng;

use tabular_uct::{DecisionState, UctConfig, UctEngine, UctError};

const STEP: f64 = 0.05;
const MOVE_LIMIT: usize = 100;
const REPORT_EVERY: u64 = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Move {
    Left,
    Right,
    Stop,
}

#[derive(Clone, Debug)]
struct LineWalk {
    /// Exact target, used for the outcome
    target: f64,
    /// Target rounded to hundredths, in hundredths
    rounded_target: i64,
    /// Position in steps of `STEP`
    position: i32,
    stopped: bool,
    moves: usize,
}

impl LineWalk {
    fn new(target: f64) -> Self {
        LineWalk {
            target,
            rounded_target: (target * 100.0).round() as i64,
            position: 0,
            stopped: false,
            moves: 0,
        }
    }

    fn apply(&mut self, action: Move) {
        match action {
            Move::Left => self.position -= 1,
            Move::Right => self.position += 1,
            Move::Stop => self.stopped = true,
        }

        self.moves += 1;
        self.stopped = self.stopped || self.moves >= MOVE_LIMIT;
    }

    fn is_terminal(&self) -> bool {
        self.stopped
    }

    fn outcome(&self) -> f64 {
        let miss = (10.0 * self.target).cos() - self.position as f64 * STEP;
        1.0 - miss * miss
    }
}

impl DecisionState for LineWalk {
    type Action = Move;
    // The exact target and the move count do not take part in decisions
    type Key = (i64, i32);

    fn key(&self) -> Self::Key {
        (self.rounded_target, self.position)
    }

    fn actions(&self) -> Vec<Move> {
        vec![Move::Left, Move::Right, Move::Stop]
    }

    fn is_feasible(&self, _action: &Move) -> bool {
        true
    }
}

fn run_episode(engine: &mut UctEngine<LineWalk>, mut walk: LineWalk) -> f64 {
    while !walk.is_terminal() {
        match engine.choose(&walk) {
            Some(action) => walk.apply(action),
            None => break,
        }
    }

    let outcome = walk.outcome();
    engine.finish(outcome);
    outcome
}

fn main() -> Result<(), UctError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let episodes: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1 << 20);

    let config = UctConfig::default()
        .with_exploration_constant(1.0)
        .with_decay_rate(0.00001)
        .with_initial_capacity(1 << 20);
    let decay_rate = config.decay_rate;

    let mut engine = UctEngine::new(config)?;
    let mut rng = rand::thread_rng();
    let mut recent_reward = 0.0;

    log::info!("running {} line-walk episodes", episodes);

    for episode in 1..=episodes {
        let walk = LineWalk::new(rng.gen_range(-1.0..1.0));
        let outcome = run_episode(&mut engine, walk);
        recent_reward = (1.0 - decay_rate) * recent_reward + decay_rate * outcome;

        if episode % REPORT_EVERY == 0 {
            log::info!(
                "at episode {}: recent average reward {:.6}\n{}",
                episode,
                recent_reward,
                engine.statistics().summary()
            );
        }
    }

    Ok(())
}
