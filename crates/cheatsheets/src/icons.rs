/// Category iconography.
///
/// Icons are identified by their lucide name so any front end can render them. A category
/// either carries an explicit icon annotation in its content document or falls back to
/// `icon_for_category`, which knows the fixed table of the HTML5 tag catalog.
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryIcon {
    Code2,
    FileText,
    BookOpen,
    Type,
    List,
    Link,
    Settings,
    Table,
    Image,
    Play,
    Eye,
    Hand,
    Brain,
    Globe,
    Server,
    Bug,
    Key,
    Shield,
    Lock,
    Grid3x3,
    Layout,
    Palette,
    Zap,
    Sparkles,
    Terminal,
    Container,
    Network,
    Code,
    Database,
    GitBranch,
    Tag,
    Package,
    Monitor,
    Wifi,
    HardDrive,
    Activity,
    Smartphone,
    MousePointer,
    TestTube,
    AlertTriangle,
}

impl CategoryIcon {
    pub const ALL: &'static [CategoryIcon] = &[
        CategoryIcon::Code2,
        CategoryIcon::FileText,
        CategoryIcon::BookOpen,
        CategoryIcon::Type,
        CategoryIcon::List,
        CategoryIcon::Link,
        CategoryIcon::Settings,
        CategoryIcon::Table,
        CategoryIcon::Image,
        CategoryIcon::Play,
        CategoryIcon::Eye,
        CategoryIcon::Hand,
        CategoryIcon::Brain,
        CategoryIcon::Globe,
        CategoryIcon::Server,
        CategoryIcon::Bug,
        CategoryIcon::Key,
        CategoryIcon::Shield,
        CategoryIcon::Lock,
        CategoryIcon::Grid3x3,
        CategoryIcon::Layout,
        CategoryIcon::Palette,
        CategoryIcon::Zap,
        CategoryIcon::Sparkles,
        CategoryIcon::Terminal,
        CategoryIcon::Container,
        CategoryIcon::Network,
        CategoryIcon::Code,
        CategoryIcon::Database,
        CategoryIcon::GitBranch,
        CategoryIcon::Tag,
        CategoryIcon::Package,
        CategoryIcon::Monitor,
        CategoryIcon::Wifi,
        CategoryIcon::HardDrive,
        CategoryIcon::Activity,
        CategoryIcon::Smartphone,
        CategoryIcon::MousePointer,
        CategoryIcon::TestTube,
        CategoryIcon::AlertTriangle,
    ];

    /// Lucide icon name, e.g. "file-text".
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryIcon::Code2 => "code-2",
            CategoryIcon::FileText => "file-text",
            CategoryIcon::BookOpen => "book-open",
            CategoryIcon::Type => "type",
            CategoryIcon::List => "list",
            CategoryIcon::Link => "link",
            CategoryIcon::Settings => "settings",
            CategoryIcon::Table => "table",
            CategoryIcon::Image => "image",
            CategoryIcon::Play => "play",
            CategoryIcon::Eye => "eye",
            CategoryIcon::Hand => "hand",
            CategoryIcon::Brain => "brain",
            CategoryIcon::Globe => "globe",
            CategoryIcon::Server => "server",
            CategoryIcon::Bug => "bug",
            CategoryIcon::Key => "key",
            CategoryIcon::Shield => "shield",
            CategoryIcon::Lock => "lock",
            CategoryIcon::Grid3x3 => "grid-3x3",
            CategoryIcon::Layout => "layout",
            CategoryIcon::Palette => "palette",
            CategoryIcon::Zap => "zap",
            CategoryIcon::Sparkles => "sparkles",
            CategoryIcon::Terminal => "terminal",
            CategoryIcon::Container => "container",
            CategoryIcon::Network => "network",
            CategoryIcon::Code => "code",
            CategoryIcon::Database => "database",
            CategoryIcon::GitBranch => "git-branch",
            CategoryIcon::Tag => "tag",
            CategoryIcon::Package => "package",
            CategoryIcon::Monitor => "monitor",
            CategoryIcon::Wifi => "wifi",
            CategoryIcon::HardDrive => "hard-drive",
            CategoryIcon::Activity => "activity",
            CategoryIcon::Smartphone => "smartphone",
            CategoryIcon::MousePointer => "mouse-pointer",
            CategoryIcon::TestTube => "test-tube",
            CategoryIcon::AlertTriangle => "alert-triangle",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon: '{0}'")]
pub struct UnknownIcon(pub String);

impl FromStr for CategoryIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        CategoryIcon::ALL
            .iter()
            .copied()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownIcon(name.to_string()))
    }
}

/// Keys of the HTML5 tag catalog and their icons, in display order.
const HTML_CATEGORY_ICONS: &[(&str, CategoryIcon)] = &[
    ("Estrutura do Documento", CategoryIcon::FileText),
    ("Elementos Semânticos", CategoryIcon::BookOpen),
    ("Texto e Formatação", CategoryIcon::Type),
    ("Listas", CategoryIcon::List),
    ("Links e Navegação", CategoryIcon::Link),
    ("Formulários", CategoryIcon::Settings),
    ("Tabelas", CategoryIcon::Table),
    ("Mídia", CategoryIcon::Image),
    ("Elementos Interativos", CategoryIcon::Play),
];

/// Icon for a category key without an explicit annotation. Unknown keys get `code-2`.
pub fn icon_for_category(key: &str) -> CategoryIcon {
    HTML_CATEGORY_ICONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(CategoryIcon::Code2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_html_keys_map_to_their_icons() {
        assert_eq!(icon_for_category("Formulários"), CategoryIcon::Settings);
        assert_eq!(icon_for_category("Tabelas"), CategoryIcon::Table);
        assert_eq!(icon_for_category("Estrutura do Documento"), CategoryIcon::FileText);
    }

    #[test]
    fn unknown_keys_fall_back_to_code_icon() {
        assert_eq!(icon_for_category("Canvas"), CategoryIcon::Code2);
        // the table is keyed on exact text
        assert_eq!(icon_for_category("formulários"), CategoryIcon::Code2);
    }

    #[test]
    fn icon_names_parse_back() {
        for icon in CategoryIcon::ALL {
            assert_eq!(icon.as_str().parse::<CategoryIcon>(), Ok(*icon));
        }
        assert_eq!(" Git-Branch ".parse::<CategoryIcon>(), Ok(CategoryIcon::GitBranch));
        assert_eq!(
            "sparkle".parse::<CategoryIcon>(),
            Err(UnknownIcon("sparkle".to_string()))
        );
    }
}
