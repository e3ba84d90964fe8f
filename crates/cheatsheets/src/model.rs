use std::collections::BTreeMap;

use crate::icons::CategoryIcon;

/// A code snippet attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExample {
    /// Fence language tag, e.g. "html", "bash"
    pub language: Option<String>,
    pub code: String,
}

/// A single reference item (an HTML tag, a Docker command, a WCAG criterion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Identifier shown on the card, e.g. "input" or "git add -p"
    pub name: String,
    /// One-paragraph description, searched together with `name`
    pub description: String,
    pub example: Option<CodeExample>,
    pub good_practice: Option<String>,
    pub avoid: Option<String>,
    /// Any other named fields, e.g. "level" or "security"
    pub details: BTreeMap<String, String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            example: None,
            good_practice: None,
            avoid: None,
            details: BTreeMap::new(),
        }
    }
}

/// A named, ordered group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display heading, also the filter key, e.g. "Formulários"
    pub key: String,
    pub icon: CategoryIcon,
    /// Entries in declared order
    pub entries: Vec<CatalogEntry>,
}

/// Categories in declared order, each key appearing once.
///
/// There is no way to change a catalog once built; filtering produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// First entry named `name` (case-insensitive) in catalog order, with its category.
    pub fn find_entry(&self, name: &str) -> Option<(&Category, &CatalogEntry)> {
        let wanted = name.to_lowercase();
        self.categories.iter().find_map(|category| {
            category
                .entries
                .iter()
                .find(|e| e.name.to_lowercase() == wanted)
                .map(|entry| (category, entry))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Category {
                key: "Comandos Básicos".to_string(),
                icon: CategoryIcon::Terminal,
                entries: vec![
                    CatalogEntry::new("git init", "Inicializa um repositório"),
                    CatalogEntry::new("git status", "Exibe o estado do diretório"),
                ],
            },
            Category {
                key: "Comandos Avançados".to_string(),
                icon: CategoryIcon::Terminal,
                entries: vec![CatalogEntry::new("git status", "Status resumido")],
            },
        ])
    }

    #[test]
    fn lookups_follow_declared_order() {
        let catalog = catalog();
        assert_eq!(
            catalog.keys().collect::<Vec<_>>(),
            ["Comandos Básicos", "Comandos Avançados"]
        );
        assert_eq!(catalog.entry_count(), 3);
        assert!(catalog.get("Comandos Avançados").is_some());
        assert!(catalog.get("comandos avançados").is_none());
    }

    #[test]
    fn find_entry_is_case_insensitive_and_returns_first_match() {
        let catalog = catalog();
        let (category, entry) = catalog.find_entry("GIT STATUS").unwrap();
        assert_eq!(category.key, "Comandos Básicos");
        assert_eq!(entry.description, "Exibe o estado do diretório");
        assert!(catalog.find_entry("git push").is_none());
    }
}
