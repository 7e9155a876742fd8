//! Generational keys for scene objects.
//!
//! A slot index is reused after its object is reclaimed, but the generation
//! is bumped first, so keys handed out earlier stop resolving instead of
//! aliasing the new occupant.

use std::fmt;

/// Reuse counter of one slot.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u32);

impl Generation {
    /// Generation after this one, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen{}", self.0)
    }
}

/// Weak key of a scene object: slot index plus the generation it was
/// issued under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    slot: u32,
    generation: Generation,
}

impl Entity {
    #[must_use]
    pub const fn new(slot: u32, generation: Generation) -> Self {
        Self { slot, generation }
    }

    /// Slot index.
    #[must_use]
    pub const fn slot(self) -> u32 {
        self.slot
    }

    /// Generation the key was issued under.
    #[must_use]
    pub const fn generation(self) -> Generation {
        self.generation
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.slot, self.generation.0)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.slot, self.generation.0)
    }
}

/// Hands out slots and tracks which generation of each is current.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    generations: Vec<Generation>,
    free: Vec<u32>,
    alive: u32,
}

impl EntityAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generations: Vec::new(),
            free: Vec::new(),
            alive: 0,
        }
    }

    /// Allocate a key, reusing a free slot first.
    pub fn allocate(&mut self) -> Entity {
        self.alive += 1;

        if let Some(slot) = self.free.pop() {
            return Entity::new(slot, self.generations[slot as usize]);
        }

        let slot = self.generations.len() as u32;
        self.generations.push(Generation::default());
        Entity::new(slot, Generation::default())
    }

    /// Free the slot and bump its generation.
    ///
    /// Returns `false` for a key that is already stale.
    pub fn deallocate(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        let slot = entity.slot() as usize;
        self.generations[slot] = self.generations[slot].next();
        self.free.push(entity.slot());
        self.alive -= 1;
        true
    }

    /// True if `entity` is the current generation of its slot.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.slot() as usize)
            .is_some_and(|current| *current == entity.generation())
    }

    /// Number of allocated keys.
    #[must_use]
    pub const fn alive_count(&self) -> u32 {
        self.alive
    }
}
