//! Localization
//!
//! Static translation tables keyed by language code. Lookups never fail:
//! the active language falls back to the default language, which falls
//! back to the key itself.

/// Language used when a key is missing from the active table
pub const DEFAULT_LANGUAGE: &str = "en";

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    ("title", "Stash Admin Panel"),
    ("listTab", "Stash List"),
    ("createTab", "Create Stash"),
    ("searchPlaceholder", "Search stashes..."),
    ("createTitle", "Create New Stash"),
    ("stashId", "Stash ID"),
    ("stashIdPlaceholder", "e.g. police_storage"),
    ("label", "Label"),
    ("labelPlaceholder", "e.g. Police Storage"),
    ("slots", "Slots"),
    ("weight", "Weight"),
    ("weightUnit", "kg"),
    ("code", "Code"),
    ("codePlaceholder", "Enter code"),
    ("rotation", "Rotation"),
    ("coordinates", "Coordinates"),
    ("myPosition", "My Position"),
    ("zoneSize", "Zone Size"),
    ("debugMode", "Debug Mode"),
    ("create", "Create Stash"),
    ("editTitle", "Edit Stash"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("close", "Close"),
    ("noStashes", "No stashes created"),
    ("id", "ID"),
    ("coords", "Coords"),
    ("view", "View"),
    ("edit", "Edit"),
    ("teleport", "Teleport"),
    ("delete", "Delete"),
    ("requestFailed", "Request failed"),
    ("requestRejected", "The server rejected the request"),
];

const TRANSLATIONS: &[(&str, Table)] = &[(DEFAULT_LANGUAGE, EN)];

fn table(lang: &str) -> Option<Table> {
    TRANSLATIONS
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, table)| *table)
}

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Whether `lang` has a registered table
pub fn is_registered(lang: &str) -> bool {
    table(lang).is_some()
}

/// Resolve `key` for `lang`: active table, then default table, then the key.
pub fn resolve<'a>(lang: &str, key: &'a str) -> &'a str {
    table(lang)
        .and_then(|t| lookup(t, key))
        .or_else(|| table(DEFAULT_LANGUAGE).and_then(|t| lookup(t, key)))
        .unwrap_or(key)
}

/// Shorthand used by the view layer
pub fn t<'a>(lang: &str, key: &'a str) -> &'a str {
    resolve(lang, key)
}
