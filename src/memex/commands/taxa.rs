use crate::commands::helpers::load_taxonomy;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemexError, Result};
use crate::model::{Section, TaxaAction};
use crate::store::TaxonomyStore;

pub fn list<S: TaxonomyStore>(store: &S, section: Section) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let taxonomy = load_taxonomy(store, &mut result)?;
    let entries: Vec<(String, String)> = taxonomy
        .section(section)
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} in {}",
            section.short_name(),
            store.location()
        )));
    }
    Ok(result.with_taxa(entries))
}

pub fn update<S: TaxonomyStore>(
    store: &mut S,
    section: Section,
    action: TaxaAction,
    values: &[String],
) -> Result<CmdResult> {
    if values.is_empty() {
        return Err(MemexError::Api(format!(
            "No {} values given",
            section.short_name()
        )));
    }

    let mut result = CmdResult::default();
    let mut taxonomy = load_taxonomy(store, &mut result)?;
    let change = taxonomy.update(section, action, values);
    store.save(&taxonomy)?;
    log::debug!(
        "{:?} {}: changed {:?}, skipped {:?}",
        action,
        section.key(),
        change.changed,
        change.skipped
    );

    let name = section.short_name();
    for value in &change.changed {
        let line = match action {
            TaxaAction::Add => format!("Added {} to {}", value, name),
            TaxaAction::Remove => format!("Removed {} from {}", value, name),
        };
        result.add_message(CmdMessage::success(line));
    }
    if !change.skipped.is_empty() {
        let label = match action {
            TaxaAction::Add => "Already present",
            TaxaAction::Remove => "Not found",
        };
        result.add_message(CmdMessage::info(format!(
            "{} in {}: {}",
            label,
            name,
            change.skipped.join(", ")
        )));
    }

    result.changed = change.changed;
    result.skipped = change.skipped;
    Ok(result)
}
