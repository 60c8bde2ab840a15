use serde::{Deserialize, Serialize};

/// Half-extents of an origin-centred rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundsSettings {
    pub x_bound: f32,
    pub y_bound: f32,
}

impl BoundsSettings {
    pub fn new(x_bound: f32, y_bound: f32) -> Self {
        Self { x_bound, y_bound }
    }
}

/// One creature variant slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrefabSettings {
    pub name: String,
    /// One of "bird", "fish-a", "fish-b"
    pub tag: String,
}

impl PrefabSettings {
    pub fn new(name: &str, tag: &str) -> Self {
        Self {
            name: name.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Spawner configuration surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpawnSettings {
    pub creature_amount: i64,
    pub fish_percent: f32,
    pub bounds: BoundsSettings,
    /// Slots in order: bird-A, bird-B, fish-A, fish-B
    pub prefabs: [PrefabSettings; 4],
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            creature_amount: 100,
            fish_percent: 50.0,
            bounds: BoundsSettings::new(55.0, 20.0),
            prefabs: [
                PrefabSettings::new("bird-a", "bird"),
                PrefabSettings::new("bird-b", "bird"),
                PrefabSettings::new("fish-a", "fish-a"),
                PrefabSettings::new("fish-b", "fish-b"),
            ],
        }
    }
}

/// Shared movement values plus the bounds birds are mirrored at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementSettings {
    pub base_speed: f32,
    pub bounds: BoundsSettings,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            base_speed: 0.05,
            bounds: BoundsSettings::new(60.0, 24.0),
        }
    }
}

/// Whole simulation settings file.
///
/// `movement` is optional in the file so that a missing section can be
/// reported at setup instead of silently defaulting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationSettings {
    #[serde(default)]
    pub spawn: SpawnSettings,
    #[serde(default)]
    pub movement: Option<MovementSettings>,
    /// "normalized" or "unscaled"
    #[serde(default = "default_colour_scale")]
    pub colour_scale: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_colour_scale() -> String {
    "normalized".to_string()
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            spawn: SpawnSettings::default(),
            movement: Some(MovementSettings::default()),
            colour_scale: default_colour_scale(),
            seed: None,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A creature as seen from outside the simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatureSnapshot {
    pub id: usize,
    pub prefab: String,
    pub tag: String,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    /// Hex colour, e.g. "#80e0ff"
    pub colour: String,
    /// Colour as `0..=1` floats after the configured scale
    pub rgb: [f32; 3],
    pub moving: bool,
}

/// State of the scene after a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub fish_count: usize,
    pub bird_count: usize,
    pub creatures: Vec<CreatureSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_serialize() {
        let settings = SimulationSettings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(SimulationSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings =
            SimulationSettings::from_json(r#"{ "spawn": { "creature_amount": 12 } }"#).unwrap();
        assert_eq!(settings.spawn.creature_amount, 12);
        assert_eq!(settings.spawn.fish_percent, 50.0);
        assert_eq!(settings.spawn.bounds, BoundsSettings::new(55.0, 20.0));
        assert_eq!(settings.colour_scale, "normalized");
        assert!(settings.movement.is_none());
    }

    #[test]
    fn test_movement_section_defaults() {
        let settings =
            SimulationSettings::from_json(r#"{ "movement": { "base_speed": 0.2 } }"#).unwrap();
        let movement = settings.movement.unwrap();
        assert_eq!(movement.base_speed, 0.2);
        assert_eq!(movement.bounds, BoundsSettings::new(60.0, 24.0));
    }
}
