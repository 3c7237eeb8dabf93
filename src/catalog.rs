//! # Event catalog
//!
//! Static description of each scoring event: which items score, how much,
//! which toggles switch items on or off, troop tables and special actions.
//! The catalog is configuration, loaded from TOML (see `data/events.toml`
//! for the bundled default) and validated once on load.
//!
//! Custom events are ordinary catalog entries flagged `custom = true`; only
//! those may be edited at runtime.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const BUILTIN: &str = include_str!("../data/events.toml");

/// Catalog load and edit errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse failed: {reason}")]
    Parse { reason: String },

    #[error("unknown event: {event}")]
    UnknownEvent { event: String },

    #[error("event already exists: {event}")]
    DuplicateEvent { event: String },

    #[error("duplicate item {item} in event {event}")]
    DuplicateItem { event: String, item: String },

    #[error("unknown item {item} in event {event}")]
    UnknownItem { event: String, item: String },

    #[error("{what} name cannot be empty")]
    EmptyName { what: &'static str },

    #[error("item {item} must be worth a positive number of points, got {points}")]
    InvalidPoints { item: String, points: i64 },

    #[error("event {event} is built in and cannot be edited")]
    NotCustom { event: String },
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Parse { reason: e.to_string() }
    }
}

fn yes() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: String,
    pub points: i64,
    /// Availability when the player has not set the item's toggle.
    #[serde(default = "yes")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<u64>,
}

impl ItemDef {
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
            available: true,
            toggle: None,
            min_amount: None,
        }
    }

    /// Minimum purchase unit; absent or zero means 1.
    pub fn unit(&self) -> u64 {
        self.min_amount.unwrap_or(1).max(1)
    }

    /// Availability after applying the player's toggle states.
    pub fn is_available(&self, toggles: &BTreeMap<String, bool>) -> bool {
        self.toggle
            .as_ref()
            .and_then(|t| toggles.get(t).copied())
            .unwrap_or(self.available)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub tooltip: String,
}

/// A scored action that is not an item (kills, rallies) with its stamina cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDef {
    pub id: String,
    pub label: String,
    pub points: i64,
    #[serde(default)]
    pub stamina: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDef {
    pub title: String,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    /// `troops[i]` scores one troop of level `i + 1`.
    #[serde(default)]
    pub troops: Vec<i64>,
    #[serde(default)]
    pub toggles: Vec<ToggleDef>,
    #[serde(default)]
    pub specials: Vec<SpecialDef>,
    #[serde(default)]
    pub custom: bool,
}

impl EventDef {
    pub fn item(&self, name: &str) -> Option<&ItemDef> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn special(&self, id: &str) -> Option<&SpecialDef> {
        self.specials.iter().find(|s| s.id == id)
    }

    /// Per-troop points at `level` (1-based).
    pub fn troop_points(&self, level: u32) -> Option<i64> {
        let idx = (level as usize).checked_sub(1)?;
        self.troops.get(idx).copied()
    }

    fn check(&self, event: &str) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateItem {
                    event: event.to_string(),
                    item: item.name.clone(),
                });
            }
            if item.points <= 0 {
                log::warn!("event {event}: item {} scores {} points and will never be suggested", item.name, item.points);
            }
            if item.min_amount == Some(0) {
                log::warn!("event {event}: item {} has min_amount 0, using 1", item.name);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    events: BTreeMap<String, EventDef>,
}

impl Catalog {
    /// The bundled default catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN)
    }

    pub fn from_toml(src: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(src)?;
        for (id, ev) in &catalog.events {
            ev.check(id)?;
        }
        log::debug!("catalog loaded: {} events", catalog.events.len());
        Ok(catalog)
    }

    pub fn event(&self, id: &str) -> Result<&EventDef, CatalogError> {
        self.events
            .get(id)
            .ok_or_else(|| CatalogError::UnknownEvent { event: id.to_string() })
    }

    pub fn event_ids(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    pub fn create_custom_event(&mut self, name: &str) -> Result<&mut EventDef, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName { what: "event" });
        }
        if self.events.contains_key(name) {
            return Err(CatalogError::DuplicateEvent { event: name.to_string() });
        }
        let ev = EventDef {
            title: name.to_string(),
            custom: true,
            ..EventDef::default()
        };
        Ok(self.events.entry(name.to_string()).or_insert(ev))
    }

    pub fn add_custom_item(&mut self, event: &str, name: &str, points: i64) -> Result<(), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName { what: "item" });
        }
        if points <= 0 {
            return Err(CatalogError::InvalidPoints { item: name.to_string(), points });
        }
        let ev = self.custom_mut(event)?;
        if ev.item(name).is_some() {
            return Err(CatalogError::DuplicateItem {
                event: event.to_string(),
                item: name.to_string(),
            });
        }
        ev.items.push(ItemDef::new(name, points));
        Ok(())
    }

    pub fn remove_custom_item(&mut self, event: &str, name: &str) -> Result<ItemDef, CatalogError> {
        let ev = self.custom_mut(event)?;
        match ev.items.iter().position(|i| i.name == name) {
            Some(idx) => Ok(ev.items.remove(idx)),
            None => Err(CatalogError::UnknownItem {
                event: event.to_string(),
                item: name.to_string(),
            }),
        }
    }

    pub fn remove_custom_event(&mut self, event: &str) -> Result<EventDef, CatalogError> {
        self.custom_mut(event)?;
        self.events
            .remove(event)
            .ok_or_else(|| CatalogError::UnknownEvent { event: event.to_string() })
    }

    fn custom_mut(&mut self, event: &str) -> Result<&mut EventDef, CatalogError> {
        let ev = self
            .events
            .get_mut(event)
            .ok_or_else(|| CatalogError::UnknownEvent { event: event.to_string() })?;
        if !ev.custom {
            return Err(CatalogError::NotCustom { event: event.to_string() });
        }
        Ok(ev)
    }
}
