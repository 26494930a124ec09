/// Power written for every move until real move data is fetched.
pub const PLACEHOLDER_POWER: u32 = 50;

/// Category written for every move until real move data is fetched.
pub const PLACEHOLDER_CATEGORY: &str = "Normal";

/// One exported species (a row of `pokemon.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesRow {
    /// 1-based, in discovery order among classified species.
    pub id: u32,
    /// Name as supplied by the catalog index.
    pub name: String,
    /// Display label from the category mapper.
    pub category: String,
    /// Move ids in the order the detail record lists them. May repeat.
    pub move_ids: Vec<u32>,
}

/// One unique move (a row of `attacks.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// 1-based, in first-encounter order across the whole run.
    pub id: u32,
    /// Name as first encountered.
    pub name: String,
    pub power: u32,
    pub category: String,
}

impl MoveEntry {
    /// A freshly discovered move carrying the placeholder attributes.
    pub fn placeholder(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            power: PLACEHOLDER_POWER,
            category: PLACEHOLDER_CATEGORY.to_string(),
        }
    }
}
