use std::collections::HashMap;
use std::sync::LazyLock;

use pantrymatch_shared::normalize;

const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    ("greek yogurt", &["sour cream", "heavy cream", "cream cheese"]),
    ("chicken thighs", &["chicken breast", "turkey"]),
    ("lemon", &["lime", "white wine vinegar"]),
    ("fresh herbs", &["dried herbs", "herb seasoning"]),
    ("bell peppers", &["any peppers", "zucchini"]),
    ("rice", &["quinoa", "couscous", "pasta"]),
    ("berries", &["any fresh fruit", "frozen berries"]),
    ("honey", &["maple syrup", "agave", "sugar"]),
    ("canned tomatoes", &["fresh tomatoes", "tomato sauce"]),
    ("fresh basil", &["dried basil", "oregano"]),
];

static BUILTIN: LazyLock<SubstitutionCatalog> =
    LazyLock::new(|| SubstitutionCatalog::from_entries(BUILTIN_ENTRIES.iter().copied()));

/// Ingredient name to ordered substitute candidates.
///
/// Keys and candidates are stored normalized, so lookups are case-insensitive
/// and ignore surrounding whitespace. Candidate order is the preference order
/// used when resolving a missing ingredient.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubstitutionCatalog {
    entries: HashMap<String, Vec<String>>,
}

impl SubstitutionCatalog {
    /// The catalog shipped with the engine.
    pub fn builtin() -> &'static SubstitutionCatalog {
        &BUILTIN
    }

    pub fn from_entries<I, K, S, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let mut catalog = Self::default();
        catalog.extend(entries);
        catalog
    }

    /// Sets the candidates for `ingredient`, replacing any previous entry.
    pub fn insert<S, V>(&mut self, ingredient: &str, substitutes: S)
    where
        S: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let substitutes = substitutes
            .into_iter()
            .map(|s| normalize(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        self.entries.insert(normalize(ingredient), substitutes);
    }

    pub fn extend<I, K, S, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        for (ingredient, substitutes) in entries {
            self.insert(ingredient.as_ref(), substitutes);
        }
    }

    /// Candidates for `ingredient` in preference order, empty when unknown.
    pub fn substitutes(&self, ingredient: &str) -> &[String] {
        self.entries
            .get(&normalize(ingredient))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
