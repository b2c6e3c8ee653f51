use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A single accepted `label = id` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: u8,
    pub label: String,
}

/// Something an insertion overwrote or shadowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// The id used to carry `previous`, which is now gone from the output.
    IdReassigned { id: u8, previous: String },
    /// The label is also carried by `other`, the lowest such id. All ids stay
    /// in the output and the lowest one wins the reverse lookup.
    LabelShared { label: String, other: u8 },
}

/// Bidirectional label table built up while parsing.
///
/// The id side is authoritative: it is what gets rendered, always in
/// ascending id order. The label side tracks every id currently carrying a
/// label, so collisions can be reported.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    by_id: BTreeMap<u8, String>,
    by_label: HashMap<String, BTreeSet<u8>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, last write wins in both directions.
    pub fn insert(&mut self, entry: Entry) -> Vec<Conflict> {
        let Entry { id, label } = entry;
        let mut conflicts = Vec::new();

        if let Some(previous) = self.by_id.insert(id, label.clone()) {
            if previous != label {
                // The old label no longer reaches this id.
                if let Some(ids) = self.by_label.get_mut(&previous) {
                    ids.remove(&id);
                    if ids.is_empty() {
                        self.by_label.remove(&previous);
                    }
                }
                conflicts.push(Conflict::IdReassigned { id, previous });
            }
        }

        let ids = self.by_label.entry(label.clone()).or_default();
        if ids.insert(id) {
            if let Some(&other) = ids.iter().find(|&&other| other != id) {
                conflicts.push(Conflict::LabelShared { label, other });
            }
        }

        conflicts
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// All entries by ascending id.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.by_id.iter().map(|(&id, label)| (id, label.as_str()))
    }
}
