use rand::Rng;

use crate::error::{Result, SimError};
use crate::{
    Bounds, Creature, CreatureId, Holder, Mover, SharedMovementValues, SpawnConfig, Spawner,
    SummonReport,
};

/// Configuration for bird movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    pub bounds: Bounds,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::MOVEMENT,
        }
    }
}

/// Per-frame totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    pub frame: u64,
    pub moved: usize,
    pub mirrored: usize,
}

#[derive(Debug, Default)]
pub struct WorldBuilder {
    spawn_config: SpawnConfig,
    movement_config: MovementConfig,
    movement_values: Option<SharedMovementValues>,
}

impl WorldBuilder {
    pub fn spawn_config(mut self, config: SpawnConfig) -> Self {
        self.spawn_config = config;
        self
    }

    pub fn movement_config(mut self, config: MovementConfig) -> Self {
        self.movement_config = config;
        self
    }

    pub fn movement_values(mut self, values: SharedMovementValues) -> Self {
        self.movement_values = Some(values);
        self
    }

    /// Validate the configuration. Fails when no movement values were
    /// provided so that a world never starts ticking without a base speed.
    pub fn build(self) -> Result<World> {
        let values = self.movement_values.ok_or(SimError::MissingMovementValues)?;
        values.validate()?;
        self.spawn_config.bounds.validate()?;
        self.movement_config.bounds.validate()?;

        let spawner = Spawner::new(self.spawn_config)
            .with_mover(Mover::new(self.movement_config.bounds));

        Ok(World {
            spawner,
            values,
            holder: Holder::new(),
            frame: 0,
        })
    }
}

/// Owns the holder, the spawner and the shared movement values, and drives
/// every mover once per frame.
#[derive(Debug)]
pub struct World {
    spawner: Spawner,
    values: SharedMovementValues,
    holder: Holder,
    frame: u64,
}

impl World {
    pub fn builder() -> WorldBuilder {
        WorldBuilder::default()
    }

    pub fn summon<R: Rng>(&mut self, rng: &mut R) -> Result<SummonReport> {
        self.spawner.summon(&mut self.holder, rng)
    }

    /// Advance one frame, ticking every bird in holder order
    pub fn tick(&mut self) -> TickSummary {
        let mut summary = TickSummary::default();
        for creature in self.holder.iter_mut() {
            if let Some(outcome) = tick_creature(creature, &self.values) {
                summary.moved += 1;
                if outcome.wrapped() {
                    summary.mirrored += 1;
                }
            }
        }
        self.frame += 1;
        summary.frame = self.frame;
        log::debug!(
            "Frame {}: {} moved, {} mirrored",
            summary.frame,
            summary.moved,
            summary.mirrored
        );
        summary
    }

    /// Advance one frame, ticking creatures in the given order. Every id must
    /// be known and appear at most once; nothing moves if either check fails.
    pub fn tick_in_order(&mut self, order: &[CreatureId]) -> Result<TickSummary> {
        let mut queued = vec![false; self.holder.len()];
        for &id in order {
            self.holder.get(id)?;
            if std::mem::replace(&mut queued[id.0], true) {
                return Err(SimError::DuplicateCreature(id));
            }
        }

        let mut summary = TickSummary::default();
        for &id in order {
            let creature = self.holder.get_mut(id)?;
            if let Some(outcome) = tick_creature(creature, &self.values) {
                summary.moved += 1;
                if outcome.wrapped() {
                    summary.mirrored += 1;
                }
            }
        }
        self.frame += 1;
        summary.frame = self.frame;
        log::debug!(
            "Frame {} (ordered): {} moved, {} mirrored",
            summary.frame,
            summary.moved,
            summary.mirrored
        );
        Ok(summary)
    }

    pub fn run(&mut self, frames: u64) -> Vec<TickSummary> {
        (0..frames).map(|_| self.tick()).collect()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn holder(&self) -> &Holder {
        &self.holder
    }

    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.holder.iter()
    }

    pub fn movement_values(&self) -> &SharedMovementValues {
        &self.values
    }

    pub fn spawn_config(&self) -> &SpawnConfig {
        &self.spawner.config
    }
}

fn tick_creature(
    creature: &mut Creature,
    values: &SharedMovementValues,
) -> Option<crate::TickOutcome> {
    let mover = creature.mover?;
    Some(mover.tick(&mut creature.transform, values))
}
