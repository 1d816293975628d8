//! Button driven effect selection
//!
//! Each click advances to the next catalog entry and loads it into the
//! source slot that is not currently shown, which then becomes the ramp
//! target of the crossfade.

use heapless::Vec;

use crate::crossfade::Slot;
use crate::effect::EffectId;

/// Maximum number of effects in a catalog, each known effect at most once
pub const MAX_CATALOG_LEN: usize = EffectId::COUNT;

/// Error returned when a catalog cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no entries
    Empty,
    /// The catalog has more than [`MAX_CATALOG_LEN`] entries
    TooLarge,
    /// The effect appears more than once
    Duplicate(EffectId),
}

/// Ordered list of effects the button cycles through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectCatalog {
    effects: Vec<EffectId, MAX_CATALOG_LEN>,
}

impl EffectCatalog {
    /// Build a catalog from an ordered list of distinct effects
    pub fn new(effects: &[EffectId]) -> Result<Self, CatalogError> {
        if effects.is_empty() {
            return Err(CatalogError::Empty);
        }
        if effects.len() > MAX_CATALOG_LEN {
            return Err(CatalogError::TooLarge);
        }
        let mut catalog = Vec::new();
        for &effect in effects {
            if catalog.contains(&effect) {
                return Err(CatalogError::Duplicate(effect));
            }
            catalog.push(effect).map_err(|_| CatalogError::TooLarge)?;
        }
        Ok(Self { effects: catalog })
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Always `false`, a catalog holds at least one effect
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Effect at `index`, wrapping around the end of the catalog
    pub fn get(&self, index: usize) -> EffectId {
        self.effects
            .get(index % self.len().max(1))
            .copied()
            .unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[EffectId] {
        &self.effects
    }
}

impl Default for EffectCatalog {
    fn default() -> Self {
        // ALL fits the catalog capacity exactly
        Self {
            effects: EffectId::ALL.into_iter().collect(),
        }
    }
}

/// Result of a selection change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Newly active effect
    pub effect: EffectId,
    /// Slot the effect was loaded into, now the ramp target
    pub slot: Slot,
}

/// Tracks the active effect and which effect sits in each source slot
#[derive(Debug, Clone)]
pub struct EffectSelector {
    catalog: EffectCatalog,
    active: usize,
    slots: [EffectId; 2],
    target: Slot,
}

impl EffectSelector {
    /// Start at the first catalog entry
    ///
    /// The first slot holds `catalog[0]` and is the ramp target, the second
    /// slot is preloaded with the following entry.
    pub fn new(catalog: EffectCatalog) -> Self {
        let slots = [catalog.get(0), catalog.get(1)];
        Self {
            catalog,
            active: 0,
            slots,
            target: Slot::First,
        }
    }

    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    /// Catalog index of the active effect
    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_effect(&self) -> EffectId {
        self.catalog.get(self.active)
    }

    /// Effect loaded into `slot`
    pub const fn effect_in(&self, slot: Slot) -> EffectId {
        self.slots[slot.index()]
    }

    /// Slot the crossfade ramps toward
    pub const fn target(&self) -> Slot {
        self.target
    }

    /// Advance to the next catalog entry
    pub fn select_next(&mut self) -> Selection {
        self.active = (self.active + 1) % self.catalog.len();
        let effect = self.catalog.get(self.active);
        let slot = self.target.other();
        self.slots[slot.index()] = effect;
        self.target = slot;
        Selection { effect, slot }
    }
}

impl Default for EffectSelector {
    fn default() -> Self {
        Self::new(EffectCatalog::default())
    }
}
