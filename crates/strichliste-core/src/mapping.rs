//! Article mapping table.
//!
//! Compiles the configured `group -> [definition]` structure into a flat
//! lookup keyed by article name. The table is built once at startup and only
//! read afterwards, so it can be shared behind an `Arc` without locking.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// One configured metric: which article it matches and how it is labeled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricDefinition {
    /// Display name, rendered as the `name` label.
    pub name: String,
    /// Article name as stored in the database; the lookup key.
    pub article: String,
    pub category: String,
    /// Multiplier applied to the raw transaction count.
    pub factor: f64,
}

/// Group name -> ordered definitions. Ordered map so construction is repeatable.
pub type MetricGroups = BTreeMap<String, Vec<MetricDefinition>>;

/// A definition together with the group it was configured under.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedMetric {
    pub definition: MetricDefinition,
    pub group: String,
}

/// An article configured more than once. The later definition wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub article: String,
    pub replaced_group: String,
    pub winning_group: String,
}

#[derive(Debug, Default, Clone)]
pub struct MappingTable {
    entries: HashMap<String, MappedMetric>,
    collisions: Vec<Collision>,
}

impl MappingTable {
    /// Build the table, iterating groups in key order and definitions in list order.
    pub fn from_groups(groups: &MetricGroups) -> Self {
        let mut entries: HashMap<String, MappedMetric> = HashMap::new();
        let mut collisions = Vec::new();

        for (group, definitions) in groups {
            for def in definitions {
                let mapped = MappedMetric {
                    definition: def.clone(),
                    group: group.clone(),
                };
                if let Some(prev) = entries.insert(def.article.clone(), mapped) {
                    tracing::warn!(
                        article = %def.article,
                        replaced_group = %prev.group,
                        winning_group = %group,
                        "article configured more than once; later definition wins"
                    );
                    collisions.push(Collision {
                        article: def.article.clone(),
                        replaced_group: prev.group,
                        winning_group: group.clone(),
                    });
                }
            }
        }

        Self { entries, collisions }
    }

    pub fn get(&self, article: &str) -> Option<&MappedMetric> {
        self.entries.get(article)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwritten definitions, in the order they were encountered.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
