use anyhow::{anyhow, Context, Result};
use birdsim_core::{
    Bounds, ColourScale, CreatureTag, MovementConfig, Prefab, SharedMovementValues, SpawnConfig,
    World,
};
use birdsim_shared::{
    BoundsSettings, CreatureSnapshot, PrefabSettings, SimulationSettings, WorldSnapshot,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Read settings from a JSON file
pub fn load_settings(path: &Path) -> Result<SimulationSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    SimulationSettings::from_json(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))
}

fn bounds(settings: &BoundsSettings) -> Bounds {
    Bounds::new(settings.x_bound, settings.y_bound)
}

fn prefab(settings: &PrefabSettings) -> Result<Prefab> {
    let tag: CreatureTag = settings
        .tag
        .parse()
        .map_err(|e: String| anyhow!(e))
        .with_context(|| format!("Invalid tag for prefab '{}'", settings.name))?;
    Ok(Prefab::new(settings.name.as_str(), tag))
}

pub fn colour_scale(settings: &SimulationSettings) -> Result<ColourScale> {
    settings
        .colour_scale
        .parse()
        .map_err(|e: String| anyhow!(e))
}

/// Build a world from settings. Fails when the movement section is missing.
pub fn build_world(settings: &SimulationSettings) -> Result<World> {
    let spawn = &settings.spawn;
    let [a, b, c, d] = &spawn.prefabs;
    let spawn_config = SpawnConfig {
        total_amount: spawn.creature_amount,
        fish_percent: spawn.fish_percent,
        bounds: bounds(&spawn.bounds),
        prefabs: [prefab(a)?, prefab(b)?, prefab(c)?, prefab(d)?],
    };

    let mut builder = World::builder().spawn_config(spawn_config);
    if let Some(movement) = &settings.movement {
        builder = builder
            .movement_config(MovementConfig {
                bounds: bounds(&movement.bounds),
            })
            .movement_values(SharedMovementValues::new(movement.base_speed));
    }

    builder.build().context("Invalid simulation settings")
}

pub fn snapshot(world: &World, scale: ColourScale) -> WorldSnapshot {
    let creatures: Vec<CreatureSnapshot> = world
        .creatures()
        .map(|creature| CreatureSnapshot {
            id: creature.id.0,
            prefab: creature.prefab.clone(),
            tag: creature.tag.to_string(),
            x: creature.transform.position.x,
            y: creature.transform.position.y,
            rotation: creature.transform.rotation,
            colour: creature.colour.to_hex(),
            rgb: creature.colour.to_rgb_f32(scale),
            moving: creature.is_moving(),
        })
        .collect();

    let bird_count = world.holder().count_tag(CreatureTag::Bird);
    WorldSnapshot {
        frame: world.frame(),
        fish_count: creatures.len() - bird_count,
        bird_count,
        creatures,
    }
}

/// Summon, run `frames` frames and return the final snapshot
pub fn run(settings: &SimulationSettings, frames: u64) -> Result<WorldSnapshot> {
    let scale = colour_scale(settings)?;
    let mut world = build_world(settings)?;

    let mut rng = match settings.seed {
        Some(seed) => {
            log::info!("Seeding RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Base speed {}, colours {}",
        world.movement_values().base_speed,
        scale.as_str()
    );

    let report = world.summon(&mut rng).context("Failed to summon creatures")?;
    log::info!(
        "Summoned {} fish and {} birds",
        report.split.fish,
        report.split.birds
    );

    let mut mirrored = 0;
    for summary in world.run(frames) {
        mirrored += summary.mirrored;
    }
    log::info!(
        "Ran {} frames, {} out-of-bounds mirrors",
        world.frame(),
        mirrored
    );

    Ok(snapshot(&world, scale))
}
