use indexmap::IndexSet;

/// The built-in fruit list, in display order.
pub const FRUIT: &[&str] = &[
    "Apple", "Apricot", "Avocado 🥑", "Banana", "Bilberry", "Blackberry", "Blackcurrant",
    "Blueberry", "Boysenberry", "Currant", "Cherry", "Coconut", "Cranberry", "Cucumber",
    "Custard apple", "Damson", "Date", "Dragonfruit", "Durian", "Elderberry", "Feijoa", "Fig",
    "Gooseberry", "Grape", "Raisin", "Grapefruit", "Guava", "Honeyberry", "Huckleberry",
    "Jabuticaba", "Jackfruit", "Jambul", "Juniper berry", "Kiwifruit", "Kumquat", "Lemon", "Lime",
    "Loquat", "Longan", "Lychee", "Mango", "Mangosteen", "Marionberry", "Melon", "Cantaloupe",
    "Honeydew", "Watermelon", "Miracle fruit", "Mulberry", "Nectarine", "Nance", "Olive",
    "Orange", "Clementine", "Mandarine", "Tangerine", "Papaya", "Passionfruit", "Peach", "Pear",
    "Persimmon", "Plantain", "Plum", "Pineapple", "Pomegranate", "Pomelo", "Quince", "Raspberry",
    "Salmonberry", "Rambutan", "Redcurrant", "Salak", "Satsuma", "Soursop", "Star fruit",
    "Strawberry", "Tamarillo", "Tamarind", "Yuzu",
];

/// Ordered, duplicate-free list of suggestible terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    terms: IndexSet<String>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_terms(FRUIT.iter().copied())
    }

    /// Builds a catalog, trimming entries and dropping blanks and repeats.
    /// The first occurrence of a term keeps its position.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = IndexSet::new();
        let mut dropped = 0usize;
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() || !set.insert(term.to_string()) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(dropped, kept = set.len(), "dropped blank or repeated terms");
        }
        Self { terms: set }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
