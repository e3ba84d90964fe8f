/// Parser for cheatsheet content documents.
///
/// The markdown has a deterministic structure:
/// - Category headers: `## Category Key`, optionally followed by `<!-- icon: name -->`
/// - Entry headers: `### Entry name`
/// - Plain lines under an entry form its description
/// - A fenced code block under an entry is its example
/// - Field lines: `- **good**: ...`, `- **avoid**: ...`, `- **other**: ...`
///
/// Parser approach: line-by-line state machine with regex for header detection.
/// Malformed pieces are skipped and reported as `ParseIssue`s; the parser never fails.
use std::collections::BTreeMap;

use regex::Regex;

use crate::icons::{icon_for_category, CategoryIcon};
use crate::model::{Catalog, CatalogEntry, Category, CodeExample};

/// An authoring problem found while parsing. The offending piece was skipped or repaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    pub issues: Vec<ParseIssue>,
}

struct CategoryDraft {
    key: String,
    line: usize,
    icon: Option<CategoryIcon>,
    entries: Vec<CatalogEntry>,
}

struct EntryDraft {
    name: String,
    line: usize,
    description: Vec<String>,
    example: Option<CodeExample>,
    good_practice: Option<String>,
    avoid: Option<String>,
    details: BTreeMap<String, String>,
}

impl EntryDraft {
    fn new(name: String, line: usize) -> Self {
        Self {
            name,
            line,
            description: Vec::new(),
            example: None,
            good_practice: None,
            avoid: None,
            details: BTreeMap::new(),
        }
    }
}

struct Fence {
    line: usize,
    language: Option<String>,
    lines: Vec<String>,
}

/// Parse one cheatsheet document into a `Catalog`, collecting issues along the way.
pub fn parse_catalog(content: &str) -> ParsedCatalog {
    let category_re = Regex::new(r"^##\s+(.+?)\s*$").expect("valid regex");
    let entry_re = Regex::new(r"^###\s+(.+?)\s*$").expect("valid regex");
    let icon_re = Regex::new(r"^<!--\s*icon:\s*(\S+)\s*-->\s*$").expect("valid regex");
    let field_re = Regex::new(r"^-\s+\*\*([A-Za-z][A-Za-z0-9_-]*)\*\*:\s*(.+?)\s*$").expect("valid regex");
    let fence_re = Regex::new(r"^```\s*([A-Za-z0-9_+-]*)\s*$").expect("valid regex");

    let mut issues: Vec<ParseIssue> = Vec::new();
    let mut categories: Vec<CategoryDraft> = Vec::new();
    let mut current_category: Option<usize> = None;
    let mut current_entry: Option<EntryDraft> = None;
    let mut fence: Option<Fence> = None;
    // Category that an icon annotation on the next non-blank line belongs to.
    let mut icon_slot: Option<usize> = None;

    for (line_idx, raw_line) in content.lines().enumerate() {
        let line_number = line_idx + 1;

        // Inside a fenced block everything is code until the closing fence.
        if fence.is_some() {
            if raw_line.trim_end() == "```" {
                if let Some(closed) = fence.take() {
                    attach_example(closed, current_entry.as_mut(), &mut issues);
                }
            } else if let Some(open) = fence.as_mut() {
                open.lines.push(raw_line.to_string());
            }
            continue;
        }

        let line = raw_line.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        let icon_target = icon_slot.take();

        if let Some(caps) = fence_re.captures(line) {
            let language = Some(caps[1].to_string()).filter(|l| !l.is_empty());
            fence = Some(Fence {
                line: line_number,
                language,
                lines: Vec::new(),
            });
            continue;
        }

        if let Some(caps) = entry_re.captures(line) {
            finish_entry(current_entry.take(), current_category, &mut categories, &mut issues);
            if current_category.is_none() {
                issues.push(ParseIssue {
                    line: line_number,
                    message: format!("entry '{}' appears before any category, skipping", &caps[1]),
                });
                continue;
            }
            current_entry = Some(EntryDraft::new(caps[1].to_string(), line_number));
            continue;
        }

        if let Some(caps) = category_re.captures(line) {
            finish_entry(current_entry.take(), current_category, &mut categories, &mut issues);
            let key = caps[1].to_string();
            if let Some(existing) = categories.iter().position(|c| c.key == key) {
                issues.push(ParseIssue {
                    line: line_number,
                    message: format!(
                        "duplicate category '{key}' (first declared at line {}), merging entries",
                        categories[existing].line
                    ),
                });
                current_category = Some(existing);
                icon_slot = Some(existing);
            } else {
                categories.push(CategoryDraft {
                    key,
                    line: line_number,
                    icon: None,
                    entries: Vec::new(),
                });
                current_category = Some(categories.len() - 1);
                icon_slot = current_category;
            }
            continue;
        }

        if let Some(caps) = icon_re.captures(line) {
            match icon_target {
                Some(idx) => match caps[1].parse::<CategoryIcon>() {
                    Ok(icon) => categories[idx].icon = Some(icon),
                    Err(e) => issues.push(ParseIssue {
                        line: line_number,
                        message: format!("{e} for category '{}'", categories[idx].key),
                    }),
                },
                None => issues.push(ParseIssue {
                    line: line_number,
                    message: "icon annotation must directly follow a category heading, ignoring".to_string(),
                }),
            }
            continue;
        }

        if line.starts_with("# ") {
            continue;
        }

        let Some(entry) = current_entry.as_mut() else {
            let message = if current_category.is_some() {
                "text outside of an entry, ignoring"
            } else {
                "text before any category, ignoring"
            };
            issues.push(ParseIssue {
                line: line_number,
                message: message.to_string(),
            });
            continue;
        };

        if let Some(caps) = field_re.captures(line) {
            let value = caps[2].to_string();
            match &caps[1] {
                "good" => entry.good_practice = Some(value),
                "avoid" => entry.avoid = Some(value),
                other => {
                    entry.details.insert(other.to_string(), value);
                }
            }
            continue;
        }

        entry.description.push(line.trim().to_string());
    }

    if let Some(open) = fence.take() {
        issues.push(ParseIssue {
            line: open.line,
            message: "unclosed code fence".to_string(),
        });
        attach_example(open, current_entry.as_mut(), &mut issues);
    }
    finish_entry(current_entry.take(), current_category, &mut categories, &mut issues);

    let mut built = Vec::with_capacity(categories.len());
    for draft in categories {
        if draft.entries.is_empty() {
            issues.push(ParseIssue {
                line: draft.line,
                message: format!("category '{}' has no entries, dropping", draft.key),
            });
            continue;
        }
        let icon = draft.icon.unwrap_or_else(|| icon_for_category(&draft.key));
        built.push(Category {
            key: draft.key,
            icon,
            entries: draft.entries,
        });
    }

    issues.sort_by_key(|issue| issue.line);
    ParsedCatalog {
        catalog: Catalog::new(built),
        issues,
    }
}

fn attach_example(fence: Fence, entry: Option<&mut EntryDraft>, issues: &mut Vec<ParseIssue>) {
    let Some(entry) = entry else {
        issues.push(ParseIssue {
            line: fence.line,
            message: "code block outside of an entry, ignoring".to_string(),
        });
        return;
    };

    if entry.example.is_some() {
        issues.push(ParseIssue {
            line: fence.line,
            message: format!("entry '{}' already has an example, ignoring extra block", entry.name),
        });
        return;
    }

    entry.example = Some(CodeExample {
        language: fence.language,
        code: fence.lines.join("\n"),
    });
}

fn finish_entry(
    draft: Option<EntryDraft>,
    category: Option<usize>,
    categories: &mut [CategoryDraft],
    issues: &mut Vec<ParseIssue>,
) {
    let (Some(draft), Some(idx)) = (draft, category) else {
        return;
    };
    let category = &mut categories[idx];

    if draft.description.is_empty() {
        issues.push(ParseIssue {
            line: draft.line,
            message: format!("entry '{}' has no description, skipping", draft.name),
        });
        return;
    }

    if category.entries.iter().any(|e| e.name == draft.name) {
        issues.push(ParseIssue {
            line: draft.line,
            message: format!(
                "duplicate entry '{}' in category '{}', skipping",
                draft.name, category.key
            ),
        });
        return;
    }

    category.entries.push(CatalogEntry {
        name: draft.name,
        description: draft.description.join(" "),
        example: draft.example,
        good_practice: draft.good_practice,
        avoid: draft.avoid,
        details: draft.details,
    });
}
