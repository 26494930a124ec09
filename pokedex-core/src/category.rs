/// Species categories (elemental types) known to the remote catalog.
///
/// Each variant carries its remote key (e.g. `"fire"`) and the French
/// display label written to `pokemon.csv` (e.g. `"Feu"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Rock,
    Ground,
    Steel,
    Dragon,
    Flying,
    Fighting,
    Poison,
    Bug,
    Psychic,
    Ghost,
    Dark,
    Fairy,
}

const ALL_CATEGORIES: &[Category] = &[
    Category::Normal,
    Category::Fire,
    Category::Water,
    Category::Grass,
    Category::Electric,
    Category::Ice,
    Category::Rock,
    Category::Ground,
    Category::Steel,
    Category::Dragon,
    Category::Flying,
    Category::Fighting,
    Category::Poison,
    Category::Bug,
    Category::Psychic,
    Category::Ghost,
    Category::Dark,
    Category::Fairy,
];

impl Category {
    /// Category substituted for keys that have no translation.
    pub const FALLBACK: Category = Category::Normal;

    /// Key used by the remote API (always lowercase).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Electric => "electric",
            Self::Ice => "ice",
            Self::Rock => "rock",
            Self::Ground => "ground",
            Self::Steel => "steel",
            Self::Dragon => "dragon",
            Self::Flying => "flying",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Bug => "bug",
            Self::Psychic => "psychic",
            Self::Ghost => "ghost",
            Self::Dark => "dark",
            Self::Fairy => "fairy",
        }
    }

    /// Localized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fire => "Feu",
            Self::Water => "Eau",
            Self::Grass => "Plante",
            Self::Electric => "Electrik",
            Self::Ice => "Glace",
            Self::Rock => "Roche",
            Self::Ground => "Sol",
            Self::Steel => "Acier",
            Self::Dragon => "Dragon",
            Self::Flying => "Vol",
            Self::Fighting => "Combat",
            Self::Poison => "Poison",
            Self::Bug => "Insecte",
            Self::Psychic => "Psy",
            Self::Ghost => "Spectre",
            Self::Dark => "Tenebres",
            Self::Fairy => "Fee",
        }
    }

    /// Look up a category by remote key (case-insensitive).
    pub fn from_key(key: &str) -> Option<Category> {
        let lower = key.to_lowercase();
        ALL_CATEGORIES.iter().copied().find(|c| c.key() == lower)
    }

    /// All 18 categories in table order.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Translate a remote category key into its display label.
///
/// Unknown keys resolve to the "normal" label rather than failing.
pub fn resolve(raw_key: &str) -> &'static str {
    match Category::from_key(raw_key) {
        Some(category) => category.label(),
        None => {
            log::debug!("No label for category '{raw_key}', using {}", Category::FALLBACK);
            Category::FALLBACK.label()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_18_variants() {
        assert_eq!(Category::all().len(), 18);
    }

    #[test]
    fn keys_round_trip() {
        for &category in Category::all() {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(resolve("fire"), "Feu");
        assert_eq!(resolve("FIRE"), "Feu");
        assert_eq!(resolve("Psychic"), "Psy");
    }

    #[test]
    fn resolve_unknown_falls_back_to_normal() {
        assert_eq!(resolve("unknown-key"), "Normal");
        assert_eq!(resolve(""), "Normal");
        assert_eq!(resolve("shadow"), "Normal");
    }

    #[test]
    fn labels_match_table() {
        let cases = [
            ("normal", "Normal"),
            ("water", "Eau"),
            ("grass", "Plante"),
            ("electric", "Electrik"),
            ("ice", "Glace"),
            ("rock", "Roche"),
            ("ground", "Sol"),
            ("steel", "Acier"),
            ("dragon", "Dragon"),
            ("flying", "Vol"),
            ("fighting", "Combat"),
            ("poison", "Poison"),
            ("bug", "Insecte"),
            ("ghost", "Spectre"),
            ("dark", "Tenebres"),
            ("fairy", "Fee"),
        ];
        for (key, label) in cases {
            assert_eq!(resolve(key), label, "key '{}'", key);
        }
    }
}
