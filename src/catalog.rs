//! Catalog of launchable programs, read from Debian menu files and desktop entries.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;

/// What to run when an entry is chosen. Opaque to the ranking code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchSpec {
    pub command: String,
    /// Run inside a terminal emulator.
    pub terminal: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub identifier: String,
    pub display_name: String,
    pub launch: LaunchSpec,
}

/// Read-only set of programs, iterated in identifier order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Build from entries; the first entry seen for an identifier wins.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.entry(entry.identifier.clone()).or_insert(entry);
        }
        Self { entries: map }
    }

    /// Scan the configured menu and desktop directories. Bad files are skipped.
    pub fn load(config: &Config) -> Self {
        let menu = config
            .menu_dirs
            .iter()
            .flat_map(|dir| files_in(dir))
            .flat_map(|path| read_menu_file(&path));
        let desktop = config
            .desktop_dirs
            .iter()
            .flat_map(|dir| files_in(dir))
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("desktop"))
            .filter_map(|path| read_desktop_file(&path));

        let catalog = Self::from_entries(menu.chain(desktop));
        tracing::info!(programs = catalog.len(), "catalog loaded");
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

fn files_in(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "skipping missing catalog directory");
        return Vec::new();
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::warn!(%err, "unreadable catalog entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}

fn read_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to read catalog file");
            None
        }
    }
}

fn read_menu_file(path: &Path) -> Vec<CatalogEntry> {
    let Some(content) = read_file(path) else {
        return Vec::new();
    };
    let entries = parse_menu(&content);
    if entries.is_empty() {
        tracing::debug!(path = %path.display(), "no usable menu records");
    }
    entries
}

fn read_desktop_file(path: &Path) -> Option<CatalogEntry> {
    let content = read_file(path)?;
    let id = path.file_stem()?.to_str()?;
    parse_desktop_entry(id, &content)
}

/// Parse a Debian menu file. One file may hold several `?package(..)` records.
pub fn parse_menu(content: &str) -> Vec<CatalogEntry> {
    let joined = content.replace("\\\n", " ");
    joined
        .split("?package(")
        .skip(1)
        .filter_map(parse_menu_record)
        .collect()
}

fn parse_menu_record(record: &str) -> Option<CatalogEntry> {
    let (package, rest) = record.split_once(')')?;
    let package = package.trim();
    if package.is_empty() {
        return None;
    }
    let props = menu_properties(rest);

    let title = props.get("title")?;
    let command = props.get("command")?;
    Some(CatalogEntry {
        identifier: package.to_string(),
        display_name: title.clone(),
        launch: LaunchSpec {
            command: command.clone(),
            terminal: props.get("needs").map(|n| n.eq_ignore_ascii_case("text")).unwrap_or(false),
        },
    })
}

/// Collect `key="value"` pairs; keys are word characters immediately before `=`.
fn menu_properties(text: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    let mut rest = text;
    while let Some(eq) = rest.find("=\"") {
        let key_start = rest[..eq]
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
            .last()
            .map(|(i, _)| i)
            .unwrap_or(eq);
        let key = &rest[key_start..eq];
        let value_start = eq + 2;
        let Some(len) = rest[value_start..].find('"') else {
            break;
        };
        if !key.is_empty() {
            props.insert(key.to_string(), rest[value_start..value_start + len].to_string());
        }
        rest = &rest[value_start + len + 1..];
    }
    props
}

/// Parse the `[Desktop Entry]` group of a freedesktop `.desktop` file.
pub fn parse_desktop_entry(id: &str, content: &str) -> Option<CatalogEntry> {
    let mut in_main_group = false;
    let mut props: HashMap<&str, &str> = HashMap::new();
    for line in content.lines().map(str::trim) {
        if line.starts_with('[') {
            in_main_group = line == "[Desktop Entry]";
            continue;
        }
        if !in_main_group || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            props.entry(key.trim()).or_insert(value.trim());
        }
    }

    let flag = |key: &str| props.get(key).map(|v| *v == "true").unwrap_or(false);
    if flag("NoDisplay") || flag("Hidden") {
        return None;
    }
    if props.get("Type").is_some_and(|t| *t != "Application") {
        return None;
    }

    let name = props.get("Name")?;
    let command = strip_field_codes(props.get("Exec")?);
    if command.is_empty() {
        return None;
    }
    Some(CatalogEntry {
        identifier: id.to_string(),
        display_name: name.to_string(),
        launch: LaunchSpec {
            command,
            terminal: flag("Terminal"),
        },
    })
}

/// Drop `%f`, `%U`, ... field codes from a desktop `Exec` line and turn `%%`
/// into `%`. Everything else, quoting and spacing included, is kept.
fn strip_field_codes(exec: &str) -> String {
    let mut out = String::with_capacity(exec.len());
    let mut chars = exec.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                out.push('%');
                chars.next();
            }
            Some(code) if code.is_ascii_alphabetic() => {
                chars.next();
            }
            _ => out.push('%'),
        }
    }
    // Standalone codes leave a dangling separator behind.
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(catalog: &'a Catalog, id: &str) -> &'a CatalogEntry {
        catalog.iter().find(|e| e.identifier == id).unwrap()
    }

    fn entry(id: &str, name: &str) -> CatalogEntry {
        CatalogEntry {
            identifier: id.to_string(),
            display_name: name.to_string(),
            launch: LaunchSpec { command: id.to_string(), terminal: false },
        }
    }

    #[test]
    fn test_parse_menu_single_record() {
        let text = r#"?package(luakit):needs="X11" section="Applications/Network/Web Browsing" \
  title="Luakit" command="/usr/bin/luakit" icon="/usr/share/pixmaps/luakit.xpm"
"#;
        let entries = parse_menu(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].identifier, "luakit");
        assert_eq!(entries[0].display_name, "Luakit");
        assert_eq!(entries[0].launch.command, "/usr/bin/luakit");
        assert!(!entries[0].launch.terminal);
    }

    #[test]
    fn test_parse_menu_text_needs_terminal() {
        let text = r#"?package(htop):needs="text" section="Applications/System/Monitoring" title="Htop" command="/usr/bin/htop""#;
        let entries = parse_menu(text);
        assert!(entries[0].launch.terminal);
    }

    #[test]
    fn test_parse_menu_multiple_records_and_missing_fields() {
        let text = r#"
?package(vim):needs="text" title="Vim" command="/usr/bin/vim"
?package(vim):needs="X11" command="/usr/bin/gvim"
?package(gvim):needs="X11" title="GVim" command="/usr/bin/gvim -f"
"#;
        let entries = parse_menu(text);
        let ids: Vec<_> = entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, ["vim", "gvim"]);
        assert_eq!(entries[1].launch.command, "/usr/bin/gvim -f");
    }

    #[test]
    fn test_parse_menu_garbage() {
        assert!(parse_menu("not a menu file").is_empty());
        assert!(parse_menu("?package():title=\"x\" command=\"y\"").is_empty());
    }

    #[test]
    fn test_parse_desktop_entry() {
        let text = "[Desktop Entry]\nType=Application\nName=Firefox\nExec=firefox %u\nTerminal=false\n\n[Desktop Action new-window]\nName=New Window\nExec=firefox --new-window\n";
        let e = parse_desktop_entry("firefox", text).unwrap();
        assert_eq!(e.display_name, "Firefox");
        assert_eq!(e.launch.command, "firefox");
        assert!(!e.launch.terminal);
    }

    #[test]
    fn test_field_codes() {
        assert_eq!(strip_field_codes("gimp %U"), "gimp");
        assert_eq!(strip_field_codes("browser --url=%u --new"), "browser --url= --new");
        assert_eq!(strip_field_codes("printf 100%% %f"), "printf 100%");
        assert_eq!(strip_field_codes("sh -c \"echo  a\" %F"), "sh -c \"echo  a\"");
        assert_eq!(strip_field_codes("trail %"), "trail %");
    }

    #[test]
    fn test_parse_desktop_entry_skips_hidden() {
        let text = "[Desktop Entry]\nName=Hidden\nExec=hidden\nNoDisplay=true\n";
        assert!(parse_desktop_entry("hidden", text).is_none());
        let text = "[Desktop Entry]\nType=Link\nName=Docs\nURL=https://example.org\nExec=x\n";
        assert!(parse_desktop_entry("docs", text).is_none());
    }

    #[test]
    fn test_parse_desktop_entry_terminal() {
        let text = "[Desktop Entry]\nName=Htop\nExec=htop\nTerminal=true\n";
        assert!(parse_desktop_entry("htop", text).unwrap().launch.terminal);
    }

    #[test]
    fn test_from_entries_first_wins_and_sorted() {
        let catalog = Catalog::from_entries([
            entry("zsh", "Z Shell"),
            entry("abook", "Address Book"),
            entry("zsh", "Other"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(get(&catalog, "zsh").display_name, "Z Shell");
        let ids: Vec<_> = catalog.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, ["abook", "zsh"]);
    }

    #[test]
    fn test_load_from_directories() {
        let menu = tempfile::tempdir().unwrap();
        let desktop = tempfile::tempdir().unwrap();
        fs::write(
            menu.path().join("htop"),
            "?package(htop):needs=\"text\" title=\"Htop\" command=\"/usr/bin/htop\"\n",
        )
        .unwrap();
        fs::write(
            desktop.path().join("htop.desktop"),
            "[Desktop Entry]\nName=htop desktop\nExec=htop\n",
        )
        .unwrap();
        fs::write(
            desktop.path().join("gimp.desktop"),
            "[Desktop Entry]\nName=GIMP\nExec=gimp %U\n",
        )
        .unwrap();
        fs::write(desktop.path().join("README"), "ignored").unwrap();

        let config = Config {
            menu_dirs: vec![menu.path().to_path_buf(), PathBuf::from("/nonexistent/menu")],
            desktop_dirs: vec![desktop.path().to_path_buf()],
            ..Config::default()
        };
        let catalog = Catalog::load(&config);
        assert_eq!(catalog.len(), 2);
        assert_eq!(get(&catalog, "htop").display_name, "Htop");
        assert_eq!(get(&catalog, "gimp").launch.command, "gimp");
    }
}
