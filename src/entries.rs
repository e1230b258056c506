//! List Entry Utilities
//!
//! Pure transformations over the per-session entry list. Every edit is keyed
//! by id and touches a single entry.

use crate::error::EditError;
use crate::models::{Catalog, CatalogItem, ListEntry};

/// One unselected entry per catalog item, in catalog order
pub fn init_entries(catalog: &Catalog) -> Vec<ListEntry> {
    let unit = catalog.default_unit().unwrap_or_default();
    catalog
        .items
        .iter()
        .map(|item| ListEntry {
            id: item.id,
            unit: unit.clone(),
            quantity: catalog.settings.default_quantity.clone(),
            selected: false,
        })
        .collect()
}

fn entry_mut(entries: &mut [ListEntry], id: u32) -> Result<&mut ListEntry, EditError> {
    entries
        .iter_mut()
        .find(|entry| entry.id == id)
        .ok_or(EditError::UnknownEntry(id))
}

/// Flip selection, returning the new value
pub fn toggle_selected(entries: &mut [ListEntry], id: u32) -> Result<bool, EditError> {
    let entry = entry_mut(entries, id)?;
    entry.selected = !entry.selected;
    Ok(entry.selected)
}

/// Change the unit; `choices` are the catalog's unit choices
pub fn set_unit(
    entries: &mut [ListEntry],
    id: u32,
    unit: &str,
    choices: &[String],
) -> Result<(), EditError> {
    if !choices.iter().any(|c| c == unit) {
        return Err(EditError::UnknownUnit(unit.to_string()));
    }
    entry_mut(entries, id)?.unit = unit.to_string();
    Ok(())
}

/// Free text, stored as typed
pub fn set_quantity(entries: &mut [ListEntry], id: u32, quantity: &str) -> Result<(), EditError> {
    entry_mut(entries, id)?.quantity = quantity.to_string();
    Ok(())
}

/// Set selection for all listed ids, ignoring unknown ones
pub fn set_selected_many(entries: &mut [ListEntry], ids: &[u32], selected: bool) {
    for entry in entries.iter_mut().filter(|e| ids.contains(&e.id)) {
        entry.selected = selected;
    }
}

pub fn selected_count(entries: &[ListEntry]) -> usize {
    entries.iter().filter(|e| e.selected).count()
}

/// Selected entries paired with their catalog item, in catalog order
pub fn selected_in_catalog_order<'a>(
    catalog: &'a Catalog,
    entries: &'a [ListEntry],
) -> Vec<(&'a CatalogItem, &'a ListEntry)> {
    catalog
        .items
        .iter()
        .filter_map(|item| {
            entries
                .iter()
                .find(|e| e.id == item.id && e.selected)
                .map(|entry| (item, entry))
        })
        .collect()
}

/// Case-insensitive subsequence test
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|wanted| rest.any(|c| c == wanted))
}

/// Catalog items whose name matches the filter (all items for an empty filter)
pub fn filter_items(items: &[CatalogItem], filter: &str) -> Vec<CatalogItem> {
    let filter = filter.trim();
    items
        .iter()
        .filter(|item| is_subsequence(filter, &item.name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Settings, UserProfile};

    fn make_catalog(names: &[(u32, &str)]) -> Catalog {
        Catalog {
            items: names
                .iter()
                .map(|(id, name)| CatalogItem { id: *id, name: name.to_string() })
                .collect(),
            units: vec!["Kg(s)".to_string(), "Packet(s)".to_string()],
            user: UserProfile::default(),
            settings: Settings::default(),
        }
    }

    #[test]
    fn test_init_entries_one_per_item_unselected() {
        let catalog = make_catalog(&[(1, "Milk"), (2, "Bread"), (3, "Eggs")]);
        let entries = init_entries(&catalog);

        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| !e.selected));
        assert!(entries.iter().all(|e| e.unit == "Kg(s)" && e.quantity == "1"));
        assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let catalog = make_catalog(&[(1, "Milk"), (2, "Bread")]);
        let mut entries = init_entries(&catalog);
        toggle_selected(&mut entries, 2).unwrap();
        let before = entries.clone();

        assert_eq!(toggle_selected(&mut entries, 1), Ok(true));
        assert_eq!(toggle_selected(&mut entries, 1), Ok(false));
        assert_eq!(entries, before);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut entries = init_entries(&make_catalog(&[(1, "Milk")]));
        assert_eq!(toggle_selected(&mut entries, 9), Err(EditError::UnknownEntry(9)));
    }

    #[test]
    fn test_set_unit_validates_choice() {
        let catalog = make_catalog(&[(1, "Milk"), (2, "Bread")]);
        let choices = catalog.unit_choices();
        let mut entries = init_entries(&catalog);

        set_unit(&mut entries, 1, "Packet(s)", &choices).unwrap();
        assert_eq!(entries[0].unit, "Packet(s)");
        assert_eq!(entries[1].unit, "Kg(s)");

        assert_eq!(
            set_unit(&mut entries, 1, "Dozen", &choices),
            Err(EditError::UnknownUnit("Dozen".to_string()))
        );
        assert_eq!(entries[0].unit, "Packet(s)");
    }

    #[test]
    fn test_other_unit_round_trip_keeps_quantity() {
        let catalog = make_catalog(&[(1, "Milk")]);
        let choices = catalog.unit_choices();
        let mut entries = init_entries(&catalog);

        set_quantity(&mut entries, 1, "Rs 50").unwrap();
        set_unit(&mut entries, 1, "Other", &choices).unwrap();
        set_unit(&mut entries, 1, "Kg(s)", &choices).unwrap();
        assert_eq!(entries[0].quantity, "Rs 50");
    }

    #[test]
    fn test_selected_in_catalog_order() {
        let catalog = make_catalog(&[(5, "Milk"), (2, "Bread"), (9, "Eggs")]);
        let mut entries = init_entries(&catalog);
        // Select out of order; catalog order must win
        toggle_selected(&mut entries, 9).unwrap();
        toggle_selected(&mut entries, 5).unwrap();
        entries.reverse();

        let picked: Vec<_> = selected_in_catalog_order(&catalog, &entries)
            .into_iter()
            .map(|(item, _)| item.name.as_str())
            .collect();
        assert_eq!(picked, vec!["Milk", "Eggs"]);
        assert_eq!(selected_count(&entries), 2);
    }

    #[test]
    fn test_set_selected_many() {
        let catalog = make_catalog(&[(1, "Milk"), (2, "Bread"), (3, "Eggs")]);
        let mut entries = init_entries(&catalog);
        set_selected_many(&mut entries, &[1, 3, 42], true);
        assert_eq!(selected_count(&entries), 2);
        set_selected_many(&mut entries, &[3], false);
        assert_eq!(selected_count(&entries), 1);
        assert!(entries[0].selected);
    }

    #[test]
    fn test_filter_items() {
        let catalog = make_catalog(&[(1, "Milk"), (2, "Bread"), (3, "Basmati Rice")]);
        let names = |f: &str| -> Vec<String> {
            filter_items(&catalog.items, f).into_iter().map(|i| i.name).collect()
        };
        assert_eq!(names("").len(), 3);
        assert_eq!(names("  "), vec!["Milk", "Bread", "Basmati Rice"]);
        assert_eq!(names("bmr"), vec!["Basmati Rice"]);
        assert_eq!(names("MI"), vec!["Milk", "Basmati Rice"]);
        assert!(names("xyz").is_empty());
    }
}
