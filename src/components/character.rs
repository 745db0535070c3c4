use crate::fsm::StateMachine;

/// Marker + tunables for the player entity.
pub struct Player {
    /// Horizontal displacement per tick while an axis is held.
    pub speed: f32,
}

/// Discrete patrol states for an enemy.
///
/// Transition logic lives in `impl PatrolState` in `src/systems/enemy.rs`
/// (where it has access to the body and patrol bounds) rather than here so
/// that this file stays pure data.
#[derive(Clone, Copy)]
pub enum PatrolState {
    /// Pacing in `dir` (-1.0 or +1.0) at the enemy's patrol speed.
    Walking { dir: f32 },
    /// Paused at a patrol bound. `dir` is the already-flipped direction to
    /// resume with once `remaining` ticks have elapsed.
    Resting { remaining: u32, dir: f32 },
}

/// FSM component driving an enemy's patrol.
pub type PatrolFsm = StateMachine<PatrolState>;

/// Autonomous patrolling enemy. Speed and initial direction are drawn once
/// at spawn; the patrol range is fixed for the enemy's lifetime.
pub struct Enemy {
    pub fsm: PatrolFsm,
    /// Horizontal displacement per tick while walking.
    pub speed: f32,
    pub min_x: f32,
    pub max_x: f32,
}

impl Enemy {
    pub fn new(speed: f32, dir: f32, min_x: f32, max_x: f32) -> Self {
        Self {
            fsm: StateMachine::new(PatrolState::Walking { dir }),
            speed,
            min_x,
            max_x,
        }
    }

    pub fn is_resting(&self) -> bool {
        matches!(self.fsm.state, PatrolState::Resting { .. })
    }
}
