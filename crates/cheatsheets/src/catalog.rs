/// The cheatsheet library: built-in content compiled into the binary, optionally
/// overridden per sheet by markdown files from a content directory.
///
/// Every catalog is parsed once when the library is built and is read-only afterwards.
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::model::Catalog;
use crate::parser::parse_catalog;

/// Static metadata for one cheatsheet.
#[derive(Debug)]
pub struct SheetInfo {
    /// Stable ID, also the override file stem, e.g. "html"
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    source: &'static str,
}

impl SheetInfo {
    /// Parse the compiled-in content of this sheet.
    pub fn load(&self) -> Catalog {
        catalog_from_source(self.id, self.source)
    }
}

pub const HTML: SheetInfo = SheetInfo {
    id: "html",
    title: "HTML5",
    description: "Guia completo de tags HTML5, exemplos interativos e boas práticas",
    features: &["Tags HTML5", "Exemplos Interativos", "Elementos Semânticos", "Boas Práticas"],
    source: include_str!("../content/html.md"),
};

pub const BUILTIN_SHEETS: &[SheetInfo] = &[
    HTML,
    SheetInfo {
        id: "accessibility",
        title: "Acessibilidade Web",
        description: "Diretrizes WCAG 2.1 com exemplos práticos e implementações",
        features: &["WCAG 2.1", "Níveis A, AA, AAA", "ARIA Roles", "Testes de Acessibilidade"],
        source: include_str!("../content/accessibility.md"),
    },
    SheetInfo {
        id: "css",
        title: "CSS3 Completo",
        description: "Propriedades CSS3, layouts modernos, animações e o que evitar",
        features: &["Propriedades CSS3", "Flexbox & Grid", "Animações", "Anti-patterns"],
        source: include_str!("../content/css.md"),
    },
    SheetInfo {
        id: "security",
        title: "Web Application Security",
        description: "Guia de segurança para aplicações web, vulnerabilidades e proteções",
        features: &["OWASP Top 10", "Vulnerabilidades", "Proteções", "Exemplos Práticos"],
        source: include_str!("../content/security.md"),
    },
    SheetInfo {
        id: "webapi",
        title: "WebAPI & WebAssembly",
        description: "APIs modernas do navegador e WebAssembly com exemplos práticos",
        features: &["Web APIs Modernas", "WebAssembly", "Performance", "Exemplos Práticos"],
        source: include_str!("../content/webapi.md"),
    },
    SheetInfo {
        id: "docker",
        title: "Docker",
        description: "Comandos essenciais, Dockerfile, Docker Compose e boas práticas de segurança",
        features: &["Comandos Docker", "Dockerfile Avançado", "Docker Compose", "Segurança"],
        source: include_str!("../content/docker.md"),
    },
    SheetInfo {
        id: "sql",
        title: "SQL",
        description: "SQL com JOINs, funções, procedures e práticas de segurança",
        features: &["SQL Básico/Avançado", "JOINs", "Functions & Procedures", "Segurança"],
        source: include_str!("../content/sql.md"),
    },
    SheetInfo {
        id: "nodejs",
        title: "Node.js",
        description: "Node.js com fundamentos, web development, database e segurança",
        features: &["Event Loop & Async", "Express.js", "Database Integration", "Testes & Performance"],
        source: include_str!("../content/nodejs.md"),
    },
    SheetInfo {
        id: "git",
        title: "Git",
        description: "Comandos essenciais de Git, boas práticas e fluxo de trabalho",
        features: &["Configuração", "Branches & Merging", "Remotos", "Desfazendo Mudanças"],
        source: include_str!("../content/git.md"),
    },
];

/// The main catalog: HTML5 tags grouped by category.
pub fn load() -> Catalog {
    HTML.load()
}

fn catalog_from_source(sheet: &str, source: &str) -> Catalog {
    let parsed = parse_catalog(source);
    for issue in &parsed.issues {
        warn!(sheet, line = issue.line, issue = %issue.message, "content issue");
    }
    parsed.catalog
}

/// A cheatsheet with its parsed catalog.
#[derive(Debug)]
pub struct Sheet {
    pub info: &'static SheetInfo,
    pub catalog: Catalog,
}

#[derive(Debug)]
pub struct Library {
    sheets: Vec<Sheet>,
}

impl Library {
    /// All built-in sheets, in declared order.
    pub fn builtin() -> Self {
        let sheets = BUILTIN_SHEETS
            .iter()
            .map(|info| Sheet {
                info,
                catalog: info.load(),
            })
            .collect();
        Self { sheets }
    }

    /// Built-in sheets, with `<id>.md` files in `dir` replacing the compiled-in content.
    pub fn from_dir(dir: &Path) -> Result<Self, AppError> {
        let mut overrides = mcp_common::content::read_markdown_dir(dir)?;

        for source in &overrides {
            if !BUILTIN_SHEETS.iter().any(|info| info.id == source.stem) {
                warn!(path = %source.path.display(), "no cheatsheet named after this file, ignoring");
            }
        }

        let sheets = BUILTIN_SHEETS
            .iter()
            .map(|info| {
                let catalog = match overrides.iter().position(|s| s.stem == info.id) {
                    Some(pos) => {
                        let source = overrides.swap_remove(pos);
                        info!(sheet = info.id, path = %source.path.display(), "loading content override");
                        catalog_from_source(info.id, &source.content)
                    }
                    None => {
                        debug!(sheet = info.id, "no override, using built-in content");
                        info.load()
                    }
                };
                Sheet { info, catalog }
            })
            .collect();

        Ok(Self { sheets })
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Case-insensitive lookup by sheet ID.
    pub fn get(&self, id: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.info.id.eq_ignore_ascii_case(id))
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.sheets.iter().map(|s| s.info.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::icons::CategoryIcon;

    #[test]
    fn builtin_content_has_no_authoring_issues() {
        for info in BUILTIN_SHEETS {
            let parsed = parse_catalog(info.source);
            assert!(
                parsed.issues.is_empty(),
                "sheet {} has content issues: {:?}",
                info.id,
                parsed.issues
            );
        }
    }

    #[test]
    fn builtin_catalogs_are_well_formed() {
        let mut ids = HashSet::new();
        for info in BUILTIN_SHEETS {
            assert!(ids.insert(info.id), "duplicate sheet id {}", info.id);

            let catalog = info.load();
            assert!(catalog.categories().len() >= 2, "sheet {} is too small", info.id);

            let mut keys = HashSet::new();
            for category in catalog.categories() {
                assert!(keys.insert(&category.key), "{}: duplicate key {}", info.id, category.key);
                assert!(!category.entries.is_empty(), "{}: empty {}", info.id, category.key);

                let mut names = HashSet::new();
                for entry in &category.entries {
                    assert!(
                        names.insert(&entry.name),
                        "{}: duplicate entry {} in {}",
                        info.id,
                        entry.name,
                        category.key
                    );
                    assert!(!entry.description.trim().is_empty());
                }
            }
        }
    }

    #[test]
    fn section_sheets_keep_their_published_entries() {
        let pinned: &[(&str, &str, &[&str])] = &[
            ("accessibility", "Nível A", &["Conteúdo Não Textual", "Sem Armadilha de Teclado", "Análise"]),
            ("accessibility", "Nível AA", &["Contraste (Mínimo)", "Ignorar Blocos", "Nome, Função, Valor"]),
            ("accessibility", "Nível AAA", &["Contraste (Melhorado)", "Teclado (Sem Exceção)", "Palavras Incomuns"]),
            ("css", "Fundamentals", &["Box Model", "Display Property - Todos os Valores"]),
            ("security", "Injection Vulnerabilities", &["SQL injection", "Command injection"]),
            ("webapi", "Connectivity & Communication", &["Fetch API", "WebSocket API"]),
            ("webapi", "WebAssembly", &["O que é WebAssembly", "Compilação e Integração"]),
            ("docker", "Comandos Básicos", &["docker pull <image>", "docker inspect", "docker cp"]),
            ("docker", "Comandos Avançados", &["docker system", "docker scout"]),
            ("sql", "JOINs", &["INNER JOIN", "FULL OUTER JOIN"]),
            ("sql", "Comandos DDL (Data Definition Language)", &["ALTER TABLE"]),
            ("nodejs", "Arquitetura e Event Loop", &["Event Loop - Como Funciona", "Buffer e Manipulação de Dados Binários"]),
            ("nodejs", "Otimização de Performance", &["Clustering", "Caching com Redis"]),
            ("git", "Branches & Merging", &["git checkout -b <nome-da-branch>", "git branch -D <nome-da-branch>"]),
        ];

        let library = Library::builtin();
        for (sheet, key, names) in pinned {
            let catalog = &library.get(sheet).unwrap().catalog;
            let category = catalog
                .get(key)
                .unwrap_or_else(|| panic!("{sheet}: missing category {key}"));
            for name in *names {
                assert!(
                    category.entries.iter().any(|e| e.name == *name),
                    "{sheet}/{key}: missing entry {name}"
                );
            }
        }

        let wcag = &library.get("accessibility").unwrap().catalog;
        assert_eq!(wcag.keys().collect::<Vec<_>>(), ["Nível A", "Nível AA", "Nível AAA"]);
        assert_eq!(wcag.entry_count(), 20);

        let docker = &library.get("docker").unwrap().catalog;
        let commands: usize = [
            "Comandos Básicos",
            "Gerenciamento de Containers",
            "Gerenciamento de Imagens",
            "Redes e Volumes",
            "Comandos Avançados",
        ]
        .iter()
        .map(|key| docker.get(key).unwrap().entries.len())
        .sum();
        assert_eq!(commands, 29);
    }

    #[test]
    fn main_catalog_keeps_declared_category_order() {
        let catalog = load();
        assert_eq!(
            catalog.keys().collect::<Vec<_>>(),
            [
                "Estrutura do Documento",
                "Elementos Semânticos",
                "Texto e Formatação",
                "Listas",
                "Links e Navegação",
                "Formulários",
                "Tabelas",
                "Mídia",
                "Elementos Interativos",
            ]
        );
        assert_eq!(catalog.get("Formulários").unwrap().icon, CategoryIcon::Settings);
        assert_eq!(catalog.get("Mídia").unwrap().icon, CategoryIcon::Image);

        let structure = catalog.get("Estrutura do Documento").unwrap();
        assert_eq!(structure.entries[0].name, "!DOCTYPE");
    }

    #[test]
    fn library_lookup_is_case_insensitive() {
        let library = Library::builtin();
        assert_eq!(library.sheets().len(), BUILTIN_SHEETS.len());
        assert_eq!(library.ids()[0], "html");
        assert_eq!(library.get("Docker").unwrap().info.title, "Docker");
        assert!(library.get("kubernetes").is_none());
    }

    #[test]
    fn directory_overrides_replace_only_matching_sheets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("git.md"),
            "## Básico\n\n### git init\nCria um repositório\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("kubernetes.md"), "## Pods\n\n### kubectl get\nLista\n").unwrap();

        let library = Library::from_dir(dir.path()).unwrap();
        assert_eq!(library.sheets().len(), BUILTIN_SHEETS.len());

        let git = &library.get("git").unwrap().catalog;
        assert_eq!(git.keys().collect::<Vec<_>>(), ["Básico"]);
        assert_eq!(git.entry_count(), 1);

        let html = &library.get("html").unwrap().catalog;
        assert_eq!(*html, load());
    }

    #[test]
    fn missing_override_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Library::from_dir(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, AppError::Common(_)));
    }
}
