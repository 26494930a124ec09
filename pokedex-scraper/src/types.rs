use serde::Deserialize;

/// Response of `GET /pokemon?limit=N`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexResponse {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    /// Absent or `null` makes the index unusable.
    #[serde(default)]
    pub results: Option<Vec<IndexEntry>>,
}

/// One species reference in the index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    /// Detail record locator.
    pub url: String,
}

/// The parts of `GET /pokemon/{id}` the export uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesDetail {
    #[serde(default)]
    pub types: Option<Vec<TypeSlot>>,
    #[serde(default)]
    pub moves: Option<Vec<MoveSlot>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

/// PokeAPI `{name, url}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl SpeciesDetail {
    /// Key of the first listed type, lower-cased. `None` when the type list
    /// is absent or empty.
    pub fn primary_type(&self) -> Option<String> {
        self.types
            .as_ref()
            .and_then(|types| types.first())
            .map(|slot| slot.kind.name.to_lowercase())
    }

    /// Move names in listed order. An absent list yields nothing.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves
            .iter()
            .flatten()
            .map(|slot| slot.move_ref.name.as_str())
    }
}
