//! Game context: the single owner of board and faction state.
//!
//! `GameContext` is the only mutation surface in the engine. Cards read it
//! through shared references and change it only through the named
//! operations below, each of which clamps its result:
//!
//! | operation                  | clamping                                     |
//! |----------------------------|----------------------------------------------|
//! | `modify_resource`          | floor 0                                      |
//! | `modify_attribute`         | attribute bounds                             |
//! | `modify_attribute_floored` | `max(floor, old + delta)`, then bounds       |
//! | `damage_runner`            | tokens/influence floor 0, deck floor 0       |
//! | `tag_runner`               | runners only                                 |
//! | `damage_installations`     | magnitudes halve toward ±1, never 0          |
//!
//! Operations on unknown factions or territories are silent no-ops.
//!
//! Uses `im` persistent maps, so `snapshot()` is O(1) and iteration order is
//! deterministic.

use im::{OrdMap, Vector};
use tracing::{debug, trace};

use super::event::ContextEvent;
use super::faction::{resources, Camp, Faction, FactionId};
use super::territory::{Attribute, Attributes, Territory, TerritoryId};
use crate::effects::{Installation, InstallationId};

/// Shared game state for card resolution.
#[derive(Clone, Debug, Default)]
pub struct GameContext {
    /// Faction whose turn it is, if the caller tracks it.
    pub active_faction: Option<FactionId>,

    territories: OrdMap<TerritoryId, Territory>,

    factions: OrdMap<FactionId, Faction>,

    /// Last allocated installation ID.
    next_installation: u64,

    /// Change journal.
    events: Vector<ContextEvent>,
}

impl GameContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Setup ===

    /// Add a territory (builder pattern).
    #[must_use]
    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.insert_territory(territory);
        self
    }

    /// Add a faction (builder pattern).
    #[must_use]
    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.insert_faction(faction);
        self
    }

    /// Set the active faction (builder pattern).
    #[must_use]
    pub fn with_active_faction(mut self, faction: FactionId) -> Self {
        self.active_faction = Some(faction);
        self
    }

    /// Insert or replace a territory. Returns the replaced one.
    pub fn insert_territory(&mut self, territory: Territory) -> Option<Territory> {
        self.territories.insert(territory.id.clone(), territory)
    }

    /// Insert or replace a faction. Returns the replaced one.
    pub fn insert_faction(&mut self, faction: Faction) -> Option<Faction> {
        self.factions.insert(faction.id, faction)
    }

    // === Reads ===

    /// Look up a territory.
    #[must_use]
    pub fn territory(&self, id: &TerritoryId) -> Option<&Territory> {
        self.territories.get(id)
    }

    /// Look up a faction.
    #[must_use]
    pub fn faction(&self, id: FactionId) -> Option<&Faction> {
        self.factions.get(&id)
    }

    /// Resource amount for a faction, `None` if the faction is unknown.
    #[must_use]
    pub fn resource(&self, faction: FactionId, key: &str) -> Option<i64> {
        self.faction(faction).map(|f| f.resource(key))
    }

    /// Iterate over territories in ID order.
    pub fn territories(&self) -> impl Iterator<Item = &Territory> {
        self.territories.values()
    }

    /// Iterate over factions in ID order.
    pub fn factions(&self) -> impl Iterator<Item = &Faction> {
        self.factions.values()
    }

    /// Iterate over the factions playing for `camp`.
    pub fn factions_in_camp(&self, camp: Camp) -> impl Iterator<Item = &Faction> {
        self.factions.values().filter(move |f| f.camp() == camp)
    }

    /// Number of territories.
    #[must_use]
    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    /// Is `b` listed as a neighbour of `a`?
    ///
    /// Only `a`'s adjacency list is checked; adjacency need not be symmetric.
    #[must_use]
    pub fn is_adjacent(&self, a: &TerritoryId, b: &TerritoryId) -> bool {
        self.territory(a).is_some_and(|t| t.is_adjacent_to(b))
    }

    /// Existing territories listed as neighbours of `id`.
    ///
    /// Dangling neighbour IDs are skipped.
    pub fn adjacent_territories<'a>(
        &'a self,
        id: &TerritoryId,
    ) -> impl Iterator<Item = &'a Territory> + 'a {
        self.territories
            .get(id)
            .into_iter()
            .flat_map(move |t| t.adjacent.iter().filter_map(move |n| self.territories.get(n)))
    }

    /// Does any runner faction hold at least one tag?
    #[must_use]
    pub fn any_tagged_runner(&self) -> bool {
        self.factions_in_camp(Camp::Runner).any(Faction::is_tagged)
    }

    // === Mutation ===

    /// Add `delta` to a faction resource, flooring at 0.
    ///
    /// No-op if the faction is unknown.
    pub fn modify_resource(&mut self, faction: FactionId, key: &str, delta: i64) {
        let Some(f) = self.factions.get_mut(&faction) else {
            trace!(%faction, key, delta, "resource change on unknown faction ignored");
            return;
        };

        let old = f.resource(key);
        let new = f.adjust_resource(key, delta);
        trace!(%faction, key, old, new, "resource modified");

        if old != new {
            self.record(ContextEvent::ResourceChanged {
                faction,
                key: key.to_string(),
                old,
                new,
            });
        }
    }

    /// Append an installation to a territory.
    ///
    /// No dedup and no cap. Returns false (and drops the installation) if
    /// the territory is unknown.
    pub fn install_on_territory(&mut self, territory: &TerritoryId, installation: Installation) -> bool {
        let Some(t) = self.territories.get_mut(territory) else {
            debug!(%territory, installation = %installation.id, "install on unknown territory ignored");
            return false;
        };

        let event = ContextEvent::Installed {
            territory: territory.clone(),
            installation: installation.id,
            faction: installation.faction,
            kind: installation.kind,
        };
        debug!(%territory, installation = %installation.id, faction = %installation.faction, "installed");
        t.installations.push_back(installation);

        self.record(event);
        true
    }

    /// Damage a runner faction.
    ///
    /// Data tokens and influence each drop by exactly 1 regardless of
    /// `amount`; deck size drops by `amount`. All floor at 0. Non-runner
    /// and unknown factions are unaffected.
    pub fn damage_runner(&mut self, faction: FactionId, amount: u32) {
        let Some(f) = self.factions.get_mut(&faction) else {
            return;
        };
        if !f.is_runner() {
            trace!(%faction, "damage on non-runner ignored");
            return;
        }

        let mut events = Vec::with_capacity(3);
        for key in [resources::DATA_TOKENS, resources::INFLUENCE] {
            let old = f.resource(key);
            let new = f.adjust_resource(key, -1);
            if old != new {
                events.push(ContextEvent::ResourceChanged {
                    faction,
                    key: key.to_string(),
                    old,
                    new,
                });
            }
        }

        f.deck.size = f.deck.size.saturating_sub(amount);
        let deck_size = f.deck.size;
        debug!(%faction, amount, deck_size, "runner damaged");

        events.push(ContextEvent::RunnerDamaged {
            faction,
            amount,
            deck_size,
        });
        self.events.extend(events);
    }

    /// Tag a runner faction. Returns whether the tags were applied.
    pub fn tag_runner(&mut self, faction: FactionId, amount: u32) -> bool {
        let Some(f) = self.factions.get_mut(&faction) else {
            return false;
        };
        if !f.is_runner() {
            return false;
        }

        f.tags = f.tags.saturating_add(amount);
        let tags = f.tags;
        debug!(%faction, amount, tags, "runner tagged");

        self.record(ContextEvent::RunnerTagged {
            faction,
            amount,
            tags,
        });
        true
    }

    /// Add `delta` to a territory attribute, clamped to its bounds.
    ///
    /// Returns the new value, or `None` if the territory is unknown.
    pub fn modify_attribute(&mut self, territory: &TerritoryId, attribute: Attribute, delta: i64) -> Option<i64> {
        self.change_attribute(territory, attribute, |attrs| attrs.adjust(attribute, delta))
    }

    /// Add `delta` to a territory attribute with an extra lower floor.
    ///
    /// The result is `max(floor, old + delta)` clamped to the attribute's
    /// bounds; the floor applies even when it raises the value.
    pub fn modify_attribute_floored(
        &mut self,
        territory: &TerritoryId,
        attribute: Attribute,
        delta: i64,
        floor: i64,
    ) -> Option<i64> {
        self.change_attribute(territory, attribute, |attrs| {
            attrs.adjust_with_floor(attribute, delta, floor)
        })
    }

    fn change_attribute(
        &mut self,
        territory: &TerritoryId,
        attribute: Attribute,
        apply: impl FnOnce(&mut Attributes) -> i64,
    ) -> Option<i64> {
        let t = self.territories.get_mut(territory)?;
        let old = t.attributes.get(attribute);
        let new = apply(&mut t.attributes);
        trace!(%territory, ?attribute, old, new, "attribute modified");

        if old != new {
            self.record(ContextEvent::AttributeChanged {
                territory: territory.clone(),
                attribute,
                old,
                new,
            });
        }
        Some(new)
    }

    /// Damage every installation of `camp` in a territory.
    ///
    /// Each one is marked `Damaged` and its numeric effects are halved
    /// toward zero (never reaching it). Returns the number damaged.
    pub fn damage_installations(&mut self, territory: &TerritoryId, camp: Camp) -> usize {
        let Some(t) = self.territories.get_mut(territory) else {
            return 0;
        };

        let mut damaged = Vec::new();
        for inst in t.installations.iter_mut() {
            if inst.camp() == camp {
                inst.apply_damage();
                damaged.push(inst.id);
            }
        }
        debug!(%territory, %camp, count = damaged.len(), "installations damaged");

        let count = damaged.len();
        self.events.extend(damaged.into_iter().map(|installation| {
            ContextEvent::InstallationDamaged {
                territory: territory.clone(),
                installation,
            }
        }));
        count
    }

    /// Allocate a fresh installation ID.
    pub fn next_installation_id(&mut self) -> InstallationId {
        self.next_installation += 1;
        InstallationId::new(self.next_installation)
    }

    // === Maintenance hook ===

    /// Run `f` on every installation in a territory, in order.
    ///
    /// This is how turn logic ticks durations or toggles status. Returns
    /// false if the territory is unknown.
    pub fn update_installations(
        &mut self,
        territory: &TerritoryId,
        f: impl FnMut(&mut Installation),
    ) -> bool {
        let Some(t) = self.territories.get_mut(territory) else {
            return false;
        };
        t.installations.iter_mut().for_each(f);
        true
    }

    /// Keep only the installations for which `keep` returns true.
    ///
    /// Returns the number removed.
    pub fn retain_installations(
        &mut self,
        territory: &TerritoryId,
        mut keep: impl FnMut(&Installation) -> bool,
    ) -> usize {
        let Some(t) = self.territories.get_mut(territory) else {
            return 0;
        };

        let mut kept = Vector::new();
        let mut removed = Vec::new();
        for inst in t.installations.iter() {
            if keep(inst) {
                kept.push_back(inst.clone());
            } else {
                removed.push(inst.id);
            }
        }
        t.installations = kept;

        let count = removed.len();
        self.events.extend(removed.into_iter().map(|installation| {
            ContextEvent::Uninstalled {
                territory: territory.clone(),
                installation,
            }
        }));
        count
    }

    /// IDs of all territories, in order.
    ///
    /// Handy for maintenance loops that mutate while walking the board.
    #[must_use]
    pub fn territory_ids(&self) -> Vec<TerritoryId> {
        self.territories.keys().cloned().collect()
    }

    // === Journal ===

    fn record(&mut self, event: ContextEvent) {
        self.events.push_back(event);
    }

    /// All recorded events since the last `take_events`.
    ///
    /// Nothing drains the journal automatically; it is carried along by
    /// `snapshot()`. Turn logic should call `take_events` once per turn.
    #[must_use]
    pub fn events(&self) -> &Vector<ContextEvent> {
        &self.events
    }

    /// Events recorded after the first `mark` entries.
    #[must_use]
    pub fn events_since(&self, mark: usize) -> Vec<ContextEvent> {
        self.events.iter().skip(mark).cloned().collect()
    }

    /// Drain the journal.
    pub fn take_events(&mut self) -> Vector<ContextEvent> {
        std::mem::take(&mut self.events)
    }

    // === Cloning ===

    /// Cheap copy of the whole context (persistent maps share structure).
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
