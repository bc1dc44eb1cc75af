//! Game session - the per-frame update loop and run state machine
//!
//! Everything the game simulates lives here, extracted from the event
//! loop so it can be driven with synthetic delta times in tests. A
//! session owns the player, the live obstacles, the spawn timer, the
//! difficulty ramp and the score, plus its own RNG for lane placement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::difficulty::Difficulty;
use crate::obstacle::Obstacle;
use crate::player::Player;
use crate::spawner::Spawner;
use crate::tuning::Tuning;

/// Whether the current run is live or has ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// A running game: one live run plus the best score so far
///
/// After a collision the world keeps moving (steering stays live,
/// obstacles keep spawning and falling) but the score, the difficulty
/// ramp and further collision checks freeze until [`restart`].
///
/// [`restart`]: GameSession::restart
pub struct GameSession {
    tuning: Tuning,
    /// The player square
    pub player: Player,
    /// Live obstacles in spawn order; pruned once past the despawn line
    pub obstacles: Vec<Obstacle>,
    spawner: Spawner,
    difficulty: Difficulty,
    score: f32,
    best_score: f32,
    phase: Phase,
    rng: StdRng,
}

impl GameSession {
    /// Start a fresh session
    pub fn new(tuning: Tuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    /// Start a session with a seeded RNG for deterministic lane placement
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tuning: Tuning, rng: StdRng) -> Self {
        Self {
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            spawner: Spawner::new(),
            difficulty: Difficulty::new(&tuning),
            score: 0.0,
            best_score: 0.0,
            phase: Phase::Playing,
            tuning,
            rng,
        }
    }

    /// Run one frame of simulation
    ///
    /// `steer_axis` is the steering input in -1.0..=1.0 (negative = left).
    pub fn update(&mut self, dt: f32, steer_axis: f32) {
        // 1. Steer the player (stays live after a hit, arcade style)
        self.player.steer(steer_axis, dt);

        // 2. Spawn an obstacle when the timer fires
        if self.spawner.tick(dt, self.difficulty.spawn_interval) {
            let limit = self.tuning.spawn_x_limit;
            let lane = self.rng.gen_range(-limit..=limit);
            self.obstacles.push(Obstacle::new(
                lane,
                self.tuning.spawn_y,
                self.difficulty.obstacle_speed,
            ));
        }

        // 3. Move all obstacles down, including this frame's spawn
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt);
        }

        // 4. Score, ramp and collision only while the run is live
        if self.phase == Phase::Playing {
            self.score += dt;
            self.difficulty.advance(dt, &self.tuning);

            let player_box = self.player.collider();
            let hit = self.obstacles.iter().any(|o| {
                o.collider(
                    self.tuning.obstacle_half_width,
                    self.tuning.obstacle_half_height,
                )
                .overlaps(&player_box)
            });
            if hit {
                self.phase = Phase::GameOver;
                self.best_score = self.best_score.max(self.score);
                log::info!(
                    "Game over: survived {:.1}s (best {:.1}s)",
                    self.score,
                    self.best_score
                );
            }
        }

        // 5. Drop obstacles that fell past the despawn line
        let despawn_y = self.tuning.despawn_y;
        self.obstacles.retain(|o| !o.is_below(despawn_y));
    }

    /// Begin a new run
    ///
    /// Valid in any phase; mid-run it resets the board. The best score
    /// is kept for the lifetime of the session.
    pub fn restart(&mut self) {
        self.player.reset();
        self.obstacles.clear();
        self.spawner.reset();
        self.difficulty.reset(&self.tuning);
        self.score = 0.0;
        self.phase = Phase::Playing;
        log::info!("New run started (best {:.1}s)", self.best_score);
    }

    /// Survival time of the current run in seconds
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Longest survival time across all runs of this session
    pub fn best_score(&self) -> f32 {
        self.best_score
    }

    /// Current run phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the current run has ended
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    /// Tuning whose obstacles spawn far above the playfield, so timed
    /// simulations never collide with the player by accident.
    fn distant_spawn_tuning() -> Tuning {
        Tuning {
            spawn_y: 100.0,
            despawn_y: -100.0,
            ..Tuning::default()
        }
    }

    /// Drive the session until the run ends, using a manually placed
    /// obstacle straight above the player.
    fn run_into_obstacle(session: &mut GameSession) {
        session
            .obstacles
            .push(Obstacle::new(session.player.x, -0.6, 0.45));
        for _ in 0..100 {
            session.update(0.05, 0.0);
            if session.is_game_over() {
                return;
            }
        }
        panic!("session never reached game over");
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::with_seed(Tuning::default(), 1);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score(), 0.0);
        assert_eq!(session.best_score(), 0.0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player.x, 0.0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut session = GameSession::with_seed(distant_spawn_tuning(), 7);
        session.update(1.2, 0.0);
        assert_eq!(session.obstacles.len(), 1);
        session.update(1.2, 0.0);
        assert_eq!(session.obstacles.len(), 2);
        // Half an interval: no new spawn
        session.update(0.6, 0.0);
        assert_eq!(session.obstacles.len(), 2);
    }

    #[test]
    fn test_spawns_stay_within_lane_limits() {
        let mut session = GameSession::with_seed(distant_spawn_tuning(), 42);
        for _ in 0..20 {
            session.update(1.2, 0.0);
            for obstacle in &session.obstacles {
                assert!(obstacle.x.abs() <= session.tuning.spawn_x_limit + EPSILON);
            }
        }
    }

    #[test]
    fn test_same_seed_same_lanes() {
        let mut a = GameSession::with_seed(distant_spawn_tuning(), 99);
        let mut b = GameSession::with_seed(distant_spawn_tuning(), 99);
        for _ in 0..5 {
            a.update(1.2, 0.0);
            b.update(1.2, 0.0);
        }
        let lanes_a: Vec<f32> = a.obstacles.iter().map(|o| o.x).collect();
        let lanes_b: Vec<f32> = b.obstacles.iter().map(|o| o.x).collect();
        assert_eq!(lanes_a, lanes_b);
    }

    #[test]
    fn test_score_is_survival_time() {
        let mut session = GameSession::with_seed(Tuning::default(), 1);
        session.update(0.5, 0.0);
        session.update(0.25, 0.0);
        assert!((session.score() - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_zero_dt_is_a_noop_frame() {
        let mut session = GameSession::with_seed(Tuning::default(), 1);
        session.obstacles.push(Obstacle::new(0.5, 0.5, 0.45));
        session.update(0.0, 1.0);
        assert_eq!(session.score(), 0.0);
        assert_eq!(session.player.x, 0.0);
        assert_eq!(session.obstacles[0].y, 0.5);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_collision_ends_run_and_folds_best() {
        let mut session = GameSession::with_seed(Tuning::default(), 1);
        run_into_obstacle(&mut session);
        assert!(session.is_game_over());
        assert!(session.score() > 0.0);
        assert!((session.best_score() - session.score()).abs() < EPSILON);
    }

    #[test]
    fn test_score_frozen_after_game_over() {
        let mut session = GameSession::with_seed(Tuning::default(), 1);
        run_into_obstacle(&mut session);
        let frozen = session.score();
        session.update(1.0, 0.0);
        assert_eq!(session.score(), frozen);
    }

    #[test]
    fn test_world_keeps_moving_after_game_over() {
        let mut session = GameSession::with_seed(distant_spawn_tuning(), 3);
        run_into_obstacle(&mut session);
        let count_before = session.obstacles.len();
        let y_before = session.obstacles[0].y;
        // Steering stays live and obstacles keep falling and spawning
        session.update(1.2, 1.0);
        assert!(session.player.x > 0.0);
        assert!(session.obstacles[0].y < y_before);
        assert!(session.obstacles.len() > count_before);
    }

    #[test]
    fn test_difficulty_frozen_after_game_over() {
        let mut session = GameSession::with_seed(distant_spawn_tuning(), 3);
        run_into_obstacle(&mut session);
        let interval = session.difficulty.spawn_interval;
        session.update(10.0, 0.0);
        assert_eq!(session.difficulty.spawn_interval, interval);
    }

    #[test]
    fn test_difficulty_ramps_during_play() {
        let tuning = distant_spawn_tuning();
        let mut session = GameSession::with_seed(tuning, 5);
        session.update(tuning.ramp_interval, 0.0);
        assert!(session.difficulty.spawn_interval < tuning.spawn_interval);
        assert!(session.difficulty.obstacle_speed > tuning.obstacle_speed);
    }

    #[test]
    fn test_ramped_speed_applies_to_new_spawns() {
        let tuning = distant_spawn_tuning();
        let mut session = GameSession::with_seed(tuning, 5);
        // One ramp step, then wait for the next spawn
        session.update(tuning.ramp_interval, 0.0);
        let ramped = session.difficulty.obstacle_speed;
        session.obstacles.clear();
        session.update(session.difficulty.spawn_interval, 0.0);
        assert_eq!(session.obstacles.len(), 1);
        assert!((session.obstacles[0].speed - ramped).abs() < EPSILON);
    }

    #[test]
    fn test_prune_below_despawn_line() {
        let mut session = GameSession::with_seed(Tuning::default(), 1);
        session.obstacles.push(Obstacle::new(0.7, -1.15, 1.0));
        session.update(0.1, 0.0);
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_no_obstacle_ends_below_despawn_line() {
        let mut session = GameSession::with_seed(Tuning::default(), 11);
        for _ in 0..200 {
            session.update(0.1, 0.0);
            for obstacle in &session.obstacles {
                assert!(obstacle.y >= session.tuning.despawn_y);
            }
        }
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = GameSession::with_seed(Tuning::default(), 1);
        session.update(0.5, 1.0);
        run_into_obstacle(&mut session);
        let best = session.best_score();
        assert!(best > 0.0);

        session.restart();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score(), 0.0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player.x, 0.0);
        // Best survives the restart
        assert_eq!(session.best_score(), best);
        // Difficulty is back at base
        assert_eq!(
            session.difficulty.spawn_interval,
            session.tuning.spawn_interval
        );
    }

    #[test]
    fn test_restart_mid_run_resets_board() {
        let mut session = GameSession::with_seed(distant_spawn_tuning(), 2);
        session.update(1.2, 1.0);
        assert!(!session.obstacles.is_empty());
        session.restart();
        assert!(session.obstacles.is_empty());
        assert_eq!(session.score(), 0.0);
        assert_eq!(session.best_score(), 0.0);
    }

    #[test]
    fn test_best_keeps_the_higher_run() {
        let mut session = GameSession::with_seed(Tuning::default(), 1);
        // First run: survive a while before dying
        session.update(0.5, 0.0);
        session.update(0.5, 0.0);
        run_into_obstacle(&mut session);
        let best = session.best_score();

        // Second run: die almost immediately
        session.restart();
        run_into_obstacle(&mut session);
        assert!(session.score() < best);
        assert_eq!(session.best_score(), best);

        // Third run: survive longer than the first
        session.restart();
        for _ in 0..4 {
            session.update(0.5, 0.0);
        }
        run_into_obstacle(&mut session);
        assert!(session.best_score() > best);
    }
}
