/// MCP server implementation for the cheatsheet library.
///
/// Exposes four tools:
/// - `list_cheatsheets`: All cheatsheets with their metadata
/// - `list_categories`: Category keys of one cheatsheet, in display order
/// - `filter_catalog`: Entries matching a text query and/or a category
/// - `get_entry`: Full content of one entry
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::catalog::{Library, Sheet};
use crate::filter::FilterState;
use crate::model::CatalogEntry;
use mcp_common::mcp_api::{
    CategoryInfo, CategoryListResponse, CheatsheetInfo, CheatsheetListResponse,
    CodeExample as ApiCodeExample, EntryDetailResponse, EntrySummary, FilterCatalogParams,
    FilterCatalogResponse, FilteredCategory, GetEntryParams, ListCategoriesParams,
};

#[derive(Clone)]
pub struct CheatsheetServer {
    library: Arc<Library>,
    tool_router: ToolRouter<CheatsheetServer>,
}

impl CheatsheetServer {
    pub fn new(library: Library) -> Self {
        Self {
            library: Arc::new(library),
            tool_router: Self::tool_router(),
        }
    }

    fn sheet(&self, id: &str) -> Result<&Sheet, String> {
        let id = id.trim();
        if id.is_empty() {
            return Err("cheatsheet must not be empty".to_string());
        }

        self.library.get(id).ok_or_else(|| {
            format!(
                "unknown cheatsheet: '{id}'. Available cheatsheets: {}",
                self.library.ids().join(", ")
            )
        })
    }
}

#[tool_router]
impl CheatsheetServer {
    #[tool(description = "List the available cheatsheets (HTML5, accessibility, CSS3, security, Web APIs, Docker, SQL, Node.js, Git) with their IDs and sizes.")]
    async fn list_cheatsheets(&self) -> Result<Json<CheatsheetListResponse>, String> {
        let cheatsheets = self
            .library
            .sheets()
            .iter()
            .map(|sheet| CheatsheetInfo {
                id: sheet.info.id.to_string(),
                title: sheet.info.title.to_string(),
                description: sheet.info.description.to_string(),
                features: sheet.info.features.iter().map(|f| f.to_string()).collect(),
                category_count: sheet.catalog.categories().len(),
                entry_count: sheet.catalog.entry_count(),
            })
            .collect();

        Ok(Json(CheatsheetListResponse { cheatsheets }))
    }

    #[tool(description = "List the categories of a cheatsheet in display order, with icon name and entry count.")]
    async fn list_categories(
        &self,
        Parameters(params): Parameters<ListCategoriesParams>,
    ) -> Result<Json<CategoryListResponse>, String> {
        let sheet = self.sheet(&params.cheatsheet)?;

        let categories = sheet
            .catalog
            .categories()
            .iter()
            .map(|c| CategoryInfo {
                key: c.key.clone(),
                icon: c.icon.to_string(),
                entry_count: c.entries.len(),
            })
            .collect();

        Ok(Json(CategoryListResponse {
            cheatsheet: sheet.info.id.to_string(),
            categories,
        }))
    }

    #[tool(description = "Filter a cheatsheet. Keeps entries whose name or description contains the query (case-insensitive), optionally restricted to one category key. Omitting both returns the whole cheatsheet.")]
    async fn filter_catalog(
        &self,
        Parameters(params): Parameters<FilterCatalogParams>,
    ) -> Result<Json<FilterCatalogResponse>, String> {
        let sheet = self.sheet(&params.cheatsheet)?;
        let state = FilterState::new(params.query.unwrap_or_default(), params.category);

        let filtered = state.apply(&sheet.catalog);
        let match_count = filtered.entry_count();
        debug!(
            sheet = sheet.info.id,
            query = %state.query,
            category = state.active_category.as_deref(),
            match_count,
            "catalog filtered"
        );

        let categories = filtered
            .categories()
            .iter()
            .map(|c| FilteredCategory {
                key: c.key.clone(),
                icon: c.icon.to_string(),
                entries: c
                    .entries
                    .iter()
                    .map(|e| EntrySummary {
                        name: e.name.clone(),
                        description: e.description.clone(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Json(FilterCatalogResponse {
            cheatsheet: sheet.info.id.to_string(),
            query: state.query,
            category: state.active_category,
            match_count,
            total_count: sheet.catalog.entry_count(),
            categories,
        }))
    }

    #[tool(description = "Get the full content of a cheatsheet entry by name (e.g. 'input', 'docker run', 'Contraste (Mínimo)'), including example code and good/bad practice notes.")]
    async fn get_entry(
        &self,
        Parameters(params): Parameters<GetEntryParams>,
    ) -> Result<Json<EntryDetailResponse>, String> {
        let sheet = self.sheet(&params.cheatsheet)?;

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }

        let category_key = params.category.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
        let found = match &category_key {
            Some(key) => {
                let category = sheet
                    .catalog
                    .get(key)
                    .ok_or_else(|| format!("unknown category: '{key}' in cheatsheet '{}'", sheet.info.id))?;
                let wanted = name.to_lowercase();
                category
                    .entries
                    .iter()
                    .find(|e| e.name.to_lowercase() == wanted)
                    .map(|entry| (category.key.as_str(), entry))
            }
            None => sheet
                .catalog
                .find_entry(&name)
                .map(|(category, entry)| (category.key.as_str(), entry)),
        };

        let (category, entry) =
            found.ok_or_else(|| format!("entry not found: '{name}' in cheatsheet '{}'", sheet.info.id))?;

        Ok(Json(to_api_entry(sheet.info.id, category, entry)))
    }
}

fn to_api_entry(cheatsheet: &str, category: &str, entry: &CatalogEntry) -> EntryDetailResponse {
    EntryDetailResponse {
        cheatsheet: cheatsheet.to_string(),
        category: category.to_string(),
        name: entry.name.clone(),
        description: entry.description.clone(),
        example: entry.example.as_ref().map(|e| ApiCodeExample {
            language: e.language.clone(),
            code: e.code.clone(),
        }),
        good_practice: entry.good_practice.clone(),
        avoid: entry.avoid.clone(),
        details: entry.details.clone(),
    }
}

#[tool_handler]
impl ServerHandler for CheatsheetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cheatsheets".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Web development cheatsheets MCP server. Use list_cheatsheets to discover \
                 cheatsheet IDs, list_categories to browse a cheatsheet, filter_catalog for \
                 case-insensitive text search within a cheatsheet (optionally restricted to one \
                 category), and get_entry for the example code and practice notes of an entry."
                    .to_string(),
            ),
        }
    }
}
