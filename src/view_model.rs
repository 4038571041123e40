//! Stash List View Model
//!
//! Pure mapping from (snapshot, language) to what the list shows.
//! Components only bind these values; formatting and filtering live here.

use crate::i18n::t;
use crate::models::StashRecord;

/// One rendered row of the stash list
#[derive(Debug, Clone, PartialEq)]
pub struct StashEntryView {
    pub stash_id: String,
    pub title: String,
    /// "ID: x | Slots: n | Weight: nkg"
    pub summary: String,
    /// "Coords: x.xx, y.yy, z.zz"
    pub coords_line: String,
    pub view_title: String,
    pub edit_title: String,
    pub teleport_title: String,
    pub delete_title: String,
    /// Lower-cased visible text, matched by the search box
    pub search_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StashListView {
    Empty { message: String },
    Entries(Vec<StashEntryView>),
}

fn format_coords(x: f64, y: f64, z: f64, precision: usize) -> String {
    format!("{:.*}, {:.*}, {:.*}", precision, x, precision, y, precision, z)
}

fn render_entry(stash: &StashRecord, lang: &str) -> StashEntryView {
    let summary = format!(
        "{}: {} | {}: {} | {}: {}{}",
        t(lang, "id"),
        stash.stash_id,
        t(lang, "slots"),
        stash.slots,
        t(lang, "weight"),
        stash.weight,
        t(lang, "weightUnit"),
    );
    let coords_line = format!(
        "{}: {}",
        t(lang, "coords"),
        format_coords(stash.coords.x, stash.coords.y, stash.coords.z, 2)
    );
    let search_text = format!("{} {} {}", stash.label, summary, coords_line).to_lowercase();

    StashEntryView {
        stash_id: stash.stash_id.clone(),
        title: stash.label.clone(),
        summary,
        coords_line,
        view_title: t(lang, "view").to_string(),
        edit_title: t(lang, "edit").to_string(),
        teleport_title: t(lang, "teleport").to_string(),
        delete_title: t(lang, "delete").to_string(),
        search_text,
    }
}

/// Render the list. Same inputs, same output.
pub fn render(stashes: &[StashRecord], lang: &str) -> StashListView {
    if stashes.is_empty() {
        return StashListView::Empty {
            message: t(lang, "noStashes").to_string(),
        };
    }
    StashListView::Entries(stashes.iter().map(|s| render_entry(s, lang)).collect())
}

/// Case-insensitive substring match against the entry's rendered text
pub fn matches_filter(entry: &StashEntryView, term: &str) -> bool {
    entry.search_text.contains(&term.to_lowercase())
}

/// Coordinates written into a form by "My Position"
pub fn format_captured_component(value: f64) -> String {
    format!("{:.4}", value)
}

/// Every static label of the panel for one language
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLabels {
    pub title: String,
    pub close: String,
    pub list_tab: String,
    pub create_tab: String,
    pub search_placeholder: String,
    pub create_title: String,
    pub edit_title: String,
    pub stash_id: String,
    pub stash_id_placeholder: String,
    pub label: String,
    pub label_placeholder: String,
    pub slots: String,
    pub weight: String,
    pub code: String,
    pub code_placeholder: String,
    pub rotation: String,
    pub coordinates: String,
    pub my_position: String,
    pub zone_size: String,
    pub debug_mode: String,
    pub create: String,
    pub save: String,
    pub cancel: String,
}

impl PanelLabels {
    pub fn resolve(lang: &str) -> Self {
        let s = |key: &str| t(lang, key).to_string();
        Self {
            title: s("title"),
            close: s("close"),
            list_tab: s("listTab"),
            create_tab: s("createTab"),
            search_placeholder: s("searchPlaceholder"),
            create_title: s("createTitle"),
            edit_title: s("editTitle"),
            stash_id: s("stashId"),
            stash_id_placeholder: s("stashIdPlaceholder"),
            label: s("label"),
            label_placeholder: s("labelPlaceholder"),
            slots: s("slots"),
            weight: s("weight"),
            code: s("code"),
            code_placeholder: s("codePlaceholder"),
            rotation: s("rotation"),
            coordinates: s("coordinates"),
            my_position: s("myPosition"),
            zone_size: s("zoneSize"),
            debug_mode: s("debugMode"),
            create: s("create"),
            save: s("save"),
            cancel: s("cancel"),
        }
    }
}
