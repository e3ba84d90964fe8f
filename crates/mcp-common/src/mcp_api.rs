use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoriesParams {
    /// Cheatsheet ID such as "html", "css" or "docker".
    pub cheatsheet: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FilterCatalogParams {
    /// Cheatsheet ID such as "html", "css" or "docker".
    pub cheatsheet: String,
    /// Case-insensitive text matched against entry names and descriptions. Empty matches everything.
    pub query: Option<String>,
    /// Exact category key to restrict results to, e.g. "Formulários". Empty means all categories.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetEntryParams {
    /// Cheatsheet ID such as "html", "css" or "docker".
    pub cheatsheet: String,
    /// Entry name, e.g. "input" or "docker run" (case-insensitive).
    pub name: String,
    /// Category key, to disambiguate entries with the same name in different categories.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheatsheetInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub category_count: usize,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheatsheetListResponse {
    pub cheatsheets: Vec<CheatsheetInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInfo {
    pub key: String,
    /// Icon name (lucide), e.g. "settings" or "code-2".
    pub icon: String,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub cheatsheet: String,
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EntrySummary {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilteredCategory {
    pub key: String,
    pub icon: String,
    pub entries: Vec<EntrySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterCatalogResponse {
    pub cheatsheet: String,
    pub query: String,
    pub category: Option<String>,
    /// Number of entries in the filtered view.
    pub match_count: usize,
    /// Number of entries in the whole cheatsheet.
    pub total_count: usize,
    /// Matching categories in catalog order. Empty when nothing matched.
    pub categories: Vec<FilteredCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CodeExample {
    pub language: Option<String>,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EntryDetailResponse {
    pub cheatsheet: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub example: Option<CodeExample>,
    pub good_practice: Option<String>,
    pub avoid: Option<String>,
    /// Extra fields such as WCAG "level" or Docker "security" notes.
    pub details: BTreeMap<String, String>,
}
