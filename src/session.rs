use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::{Body, Enemy};
use crate::engine::input::Intent;
use crate::scene::{
    spawn_enemy, spawn_player, Level, ENEMY_SPAWN_MAX_X, ENEMY_SPAWN_MIN_X,
};
use crate::systems::{animation_system, enemy_patrol_system, player_system, PhysicsParams};

pub const ENEMY_COUNT: usize = 3;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player reached the goal region.
    Won,
    /// An enemy touched the player.
    Caught,
}

/// What one simulation tick produced, for the app layer to react to
/// (audio cues, phase transitions).
#[derive(Clone, Copy, Debug, Default)]
pub struct TickEvents {
    pub jumped: bool,
    pub outcome: Option<Outcome>,
}

/// One run of the game: the entity world plus everything that was global
/// state in scripting-engine platformers. Owns the level geometry, the
/// physics tunables and the RNG; [`Session::tick`] advances the whole
/// simulation by one fixed step in a deterministic order.
pub struct Session {
    pub world: World,
    pub level: Level,
    pub params: PhysicsParams,
    rng: StdRng,
    player: Entity,
    outcome: Option<Outcome>,
}

impl Session {
    /// `seed` pins the enemy spawn draws for reproducible runs; `None`
    /// seeds from entropy.
    pub fn new(level: Level, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let params = PhysicsParams {
            ground_top: level.ground_top,
            ..PhysicsParams::default()
        };
        let mut world = World::new();
        let player = Self::populate(&mut world, &level, &mut rng);
        Self {
            world,
            level,
            params,
            rng,
            player,
            outcome: None,
        }
    }

    fn populate(world: &mut World, level: &Level, rng: &mut StdRng) -> Entity {
        let player = spawn_player(world, level);
        for _ in 0..ENEMY_COUNT {
            let x = rng.gen_range(ENEMY_SPAWN_MIN_X..=ENEMY_SPAWN_MAX_X);
            spawn_enemy(world, level, x, rng);
        }
        player
    }

    /// Throw away the current run and build a fresh world. Level geometry
    /// and tunables persist; entities and the outcome do not.
    pub fn reset(&mut self) {
        self.world = World::new();
        self.player = Self::populate(&mut self.world, &self.level, &mut self.rng);
        self.outcome = None;
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Advance the simulation one tick: player control, then every enemy,
    /// then animation selection, then the win/loss check. Once an outcome
    /// is set the session is inert until [`Session::reset`].
    pub fn tick(&mut self, intent: Intent) -> TickEvents {
        if self.outcome.is_some() {
            return TickEvents {
                jumped: false,
                outcome: self.outcome,
            };
        }

        let jumped = player_system(
            &mut self.world,
            intent,
            &self.level.platforms,
            &self.params,
        );
        enemy_patrol_system(&mut self.world, &self.level.platforms, &self.params);
        animation_system(&mut self.world);

        self.outcome = self.evaluate_outcome();
        if let Some(outcome) = self.outcome {
            log::info!("run ended: {outcome:?}");
        }
        TickEvents {
            jumped,
            outcome: self.outcome,
        }
    }

    /// Goal first, so touching the goal and an enemy on the same tick is
    /// still a win.
    fn evaluate_outcome(&self) -> Option<Outcome> {
        let player_rect = match self.world.get::<&Body>(self.player) {
            Ok(body) => body.rect,
            Err(_) => return None,
        };
        if player_rect.intersects(&self.level.goal) {
            return Some(Outcome::Won);
        }
        for (_e, (body, _enemy)) in self.world.query::<(&Body, &Enemy)>().iter() {
            if player_rect.intersects(&body.rect) {
                return Some(Outcome::Caught);
            }
        }
        None
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }
}
