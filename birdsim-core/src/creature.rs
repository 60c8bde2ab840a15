use crate::error::{Result, SimError};
use crate::{Colour, Mover, Vector2D};

/// Category tag carried by every creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatureTag {
    Bird,
    FishA,
    FishB,
}

impl CreatureTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureTag::Bird => "bird",
            CreatureTag::FishA => "fish-a",
            CreatureTag::FishB => "fish-b",
        }
    }

    pub fn is_bird(&self) -> bool {
        matches!(self, CreatureTag::Bird)
    }
}

impl core::str::FromStr for CreatureTag {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "bird" => Ok(CreatureTag::Bird),
            "fish-a" => Ok(CreatureTag::FishA),
            "fish-b" => Ok(CreatureTag::FishB),
            other => Err(format!("unknown creature tag '{}'", other)),
        }
    }
}

impl core::fmt::Display for CreatureTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template a creature is instantiated from
#[derive(Debug, Clone, PartialEq)]
pub struct Prefab {
    pub name: String,
    pub tag: CreatureTag,
}

impl Prefab {
    pub fn new(name: impl Into<String>, tag: CreatureTag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }

    /// The four variant slots in order: bird-A, bird-B, fish-A, fish-B
    pub fn default_slots() -> [Prefab; 4] {
        [
            Prefab::new("bird-a", CreatureTag::Bird),
            Prefab::new("bird-b", CreatureTag::Bird),
            Prefab::new("fish-a", CreatureTag::FishA),
            Prefab::new("fish-b", CreatureTag::FishB),
        ]
    }
}

/// Position on the z = 0 plane plus a heading in degrees about the forward axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector2D,
    pub rotation: f32,
}

impl Transform {
    pub fn new(position: Vector2D, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Move along the local up axis
    pub fn translate_up(&mut self, distance: f32) {
        self.position += Vector2D::UP.rotated(self.rotation) * distance;
    }
}

/// Stable handle to a creature inside a [`Holder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatureId(pub usize);

impl core::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A spawned bird or fish
#[derive(Debug, Clone)]
pub struct Creature {
    pub id: CreatureId,
    pub prefab: String,
    pub tag: CreatureTag,
    pub transform: Transform,
    pub colour: Colour,
    pub mover: Option<Mover>,
}

impl Creature {
    pub fn is_moving(&self) -> bool {
        self.mover.is_some()
    }
}

/// Owned container every creature is placed under
#[derive(Debug, Clone, Default)]
pub struct Holder {
    creatures: Vec<Creature>,
}

impl Holder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate `prefab` at `transform`. Birds get `mover` attached,
    /// fish never move.
    pub fn instantiate(&mut self, prefab: &Prefab, transform: Transform, mover: Mover) -> CreatureId {
        let id = CreatureId(self.creatures.len());
        self.creatures.push(Creature {
            id,
            prefab: prefab.name.clone(),
            tag: prefab.tag,
            transform,
            colour: Colour::WHITE,
            mover: prefab.tag.is_bird().then_some(mover),
        });
        id
    }

    pub fn get(&self, id: CreatureId) -> Result<&Creature> {
        self.creatures
            .get(id.0)
            .ok_or(SimError::UnknownCreature(id))
    }

    pub fn get_mut(&mut self, id: CreatureId) -> Result<&mut Creature> {
        self.creatures
            .get_mut(id.0)
            .ok_or(SimError::UnknownCreature(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.creatures.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = CreatureId> + '_ {
        self.creatures.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn count_tag(&self, tag: CreatureTag) -> usize {
        self.creatures.iter().filter(|c| c.tag == tag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bounds;

    #[test]
    fn test_tag_round_trip_names() {
        for tag in [CreatureTag::Bird, CreatureTag::FishA, CreatureTag::FishB] {
            assert_eq!(tag.as_str().parse::<CreatureTag>(), Ok(tag));
        }
        assert!("shark".parse::<CreatureTag>().is_err());
    }

    #[test]
    fn test_only_birds_get_movers() {
        let mut holder = Holder::new();
        let mover = Mover::new(Bounds::MOVEMENT);
        let slots = Prefab::default_slots();
        for prefab in &slots {
            holder.instantiate(prefab, Transform::new(Vector2D::zero(), 0.0), mover);
        }

        let moving: Vec<_> = holder.iter().map(|c| c.is_moving()).collect();
        assert_eq!(moving, vec![true, true, false, false]);
    }

    #[test]
    fn test_unknown_creature() {
        let holder = Holder::new();
        assert_eq!(
            holder.get(CreatureId(3)).unwrap_err(),
            SimError::UnknownCreature(CreatureId(3))
        );
    }

    #[test]
    fn test_translate_up_follows_rotation() {
        let mut transform = Transform::new(Vector2D::zero(), 90.0);
        transform.translate_up(2.0);
        assert!((transform.position.x + 2.0).abs() < 1e-5);
        assert!(transform.position.y.abs() < 1e-5);
    }
}
