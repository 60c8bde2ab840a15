use rand::Rng;

use crate::error::{Result, SimError};
use crate::{Bounds, Colour, CreatureId, CreatureTag, Holder, Mover, Prefab, Transform, Vector2D};

pub const BIRD_A_SLOT: usize = 0;
pub const BIRD_B_SLOT: usize = 1;
pub const FISH_A_SLOT: usize = 2;
pub const FISH_B_SLOT: usize = 3;

/// Inclusive channel ranges used when recolouring a creature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRanges {
    pub red: (f32, f32),
    pub green: (f32, f32),
    pub blue: (f32, f32),
}

pub const BIRD_CHANNELS: ChannelRanges = ChannelRanges {
    red: (0.0, 230.0),
    green: (200.0, 255.0),
    blue: (200.0, 255.0),
};

pub const FISH_CHANNELS: ChannelRanges = ChannelRanges {
    red: (190.0, 255.0),
    green: (175.0, 255.0),
    blue: (245.0, 255.0),
};

impl ChannelRanges {
    pub fn for_tag(tag: CreatureTag) -> Self {
        if tag.is_bird() {
            BIRD_CHANNELS
        } else {
            FISH_CHANNELS
        }
    }
}

/// Configuration for a single summon
#[derive(Debug, Clone)]
pub struct SpawnConfig {
    pub total_amount: i64,
    pub fish_percent: f32,
    pub bounds: Bounds,
    pub prefabs: [Prefab; 4],
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            total_amount: 0,
            fish_percent: 50.0,
            bounds: Bounds::SPAWN,
            prefabs: Prefab::default_slots(),
        }
    }
}

/// How a total is divided between fish and birds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub fish: usize,
    pub birds: usize,
}

/// Divide `total_amount` into fish and birds.
///
/// `fish = round(total * percent / 100)` with ties going to the even
/// neighbour, birds take the remainder.
pub fn split(total_amount: i64, fish_percent: f32) -> Result<Split> {
    if total_amount < 0 {
        return Err(SimError::NegativeTotal(total_amount));
    }
    if !(0.0..=100.0).contains(&fish_percent) {
        return Err(SimError::FishPercentOutOfRange(fish_percent));
    }

    // Multiply before dividing so exact halves stay exact.
    let fish = ((total_amount as f64 * fish_percent as f64) / 100.0).round_ties_even() as i64;
    Ok(Split {
        fish: fish as usize,
        birds: (total_amount - fish) as usize,
    })
}

/// Prefab slot for the `index`-th fish: even indices use fish-B, odd fish-A
pub fn fish_slot(index: usize) -> usize {
    if index % 2 == 0 {
        FISH_B_SLOT
    } else {
        FISH_A_SLOT
    }
}

/// Prefab slot for the `index`-th bird: even indices use bird-A, odd bird-B
pub fn bird_slot(index: usize) -> usize {
    if index % 2 == 0 {
        BIRD_A_SLOT
    } else {
        BIRD_B_SLOT
    }
}

pub fn random_position<R: Rng>(bounds: &Bounds, rng: &mut R) -> Vector2D {
    let x = rng.gen_range(-bounds.x_bound..=bounds.x_bound);
    let y = rng.gen_range(-bounds.y_bound..=bounds.y_bound);
    Vector2D::new(x, y)
}

/// Heading in `[0, 360)` degrees
pub fn random_rotation<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..360.0)
}

fn channel<R: Rng>(range: (f32, f32), rng: &mut R) -> u8 {
    rng.gen_range(range.0..=range.1).round_ties_even() as u8
}

pub fn colour_variation_for<R: Rng>(tag: CreatureTag, rng: &mut R) -> Colour {
    let ranges = ChannelRanges::for_tag(tag);
    let red = channel(ranges.red, rng);
    let green = channel(ranges.green, rng);
    let blue = channel(ranges.blue, rng);
    Colour::new(red, green, blue)
}

/// Result of one summon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummonReport {
    pub split: Split,
    /// Spawned creatures in spawn order: all fish first, then all birds
    pub spawned: Vec<CreatureId>,
    /// Number of creatures recoloured, including ones already in the holder
    pub recoloured: usize,
}

/// Populates a holder with a randomized mix of creatures
#[derive(Debug, Clone)]
pub struct Spawner {
    pub config: SpawnConfig,
    pub bird_mover: Mover,
}

impl Spawner {
    pub fn new(config: SpawnConfig) -> Self {
        Self {
            config,
            bird_mover: Mover::default(),
        }
    }

    pub fn with_mover(mut self, mover: Mover) -> Self {
        self.bird_mover = mover;
        self
    }

    pub fn summon<R: Rng>(&self, holder: &mut Holder, rng: &mut R) -> Result<SummonReport> {
        let split = split(self.config.total_amount, self.config.fish_percent)?;
        log::info!(
            "Summoning {} creatures: {} fish, {} birds",
            self.config.total_amount,
            split.fish,
            split.birds
        );

        let mut spawned = Vec::with_capacity(split.fish + split.birds);
        for i in 0..split.fish {
            spawned.push(self.spawn(fish_slot(i), holder, rng));
        }
        for i in 0..split.birds {
            spawned.push(self.spawn(bird_slot(i), holder, rng));
        }

        let mut recoloured = 0;
        for creature in holder.iter_mut() {
            creature.colour = colour_variation_for(creature.tag, rng);
            recoloured += 1;
        }
        log::debug!("Recoloured {} creatures", recoloured);

        Ok(SummonReport {
            split,
            spawned,
            recoloured,
        })
    }

    fn spawn<R: Rng>(&self, slot: usize, holder: &mut Holder, rng: &mut R) -> CreatureId {
        let prefab = &self.config.prefabs[slot];
        let transform = Transform::new(
            random_position(&self.config.bounds, rng),
            random_rotation(rng),
        );
        let id = holder.instantiate(prefab, transform, self.bird_mover);
        log::debug!(
            "Spawned {} {} at ({:.2}, {:.2}) facing {:.1}",
            prefab.name,
            id,
            transform.position.x,
            transform.position.y,
            transform.rotation
        );
        id
    }
}
