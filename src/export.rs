//! Export Formatting
//!
//! Renders the selected entries as plain text and builds the file name and
//! messaging link handed to the exporters.

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::entries::selected_in_catalog_order;
use crate::models::{Catalog, CatalogItem, ListEntry};

const SEPARATOR: &str = "------------------------------";

/// Same set as JavaScript's encodeURIComponent
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `DD-Mon-YYYY`, e.g. `05-Mar-2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// One line body, without the number
fn format_line(catalog: &Catalog, item: &CatalogItem, entry: &ListEntry) -> String {
    let mut parts = Vec::with_capacity(3);
    let quantity = entry.quantity.trim();
    if !quantity.is_empty() {
        parts.push(quantity);
    }
    if !catalog.is_other_unit(&entry.unit) && !entry.unit.is_empty() {
        parts.push(entry.unit.as_str());
    }
    parts.push(item.name.as_str());
    parts.join(" ")
}

/// Full export text: header, numbered selection, total
pub fn format_export(catalog: &Catalog, entries: &[ListEntry], date: NaiveDate) -> String {
    let selected = selected_in_catalog_order(catalog, entries);
    let mut lines = vec![
        format!("Date: {}", format_date(date)),
        format!("Name: {}", catalog.user.name),
        format!("Mobile: {}", catalog.user.mobile),
        SEPARATOR.to_string(),
    ];
    lines.extend(
        selected
            .iter()
            .enumerate()
            .map(|(i, (item, entry))| format!("{}. {}", i + 1, format_line(catalog, item, entry))),
    );
    lines.push(SEPARATOR.to_string());
    lines.push(format!("{}: {}", catalog.settings.total_label, selected.len()));
    lines.join("\n")
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("grocery-list-{}.txt", format_date(date))
}

/// Messaging link with the recipient's digits and the encoded text
pub fn share_url(base: &str, recipient: &str, text: &str) -> String {
    let number: String = recipient.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{}/{}?text={}",
        base.trim_end_matches('/'),
        number,
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{
        filter_items, init_entries, set_quantity, set_selected_many, set_unit, toggle_selected,
    };
    use crate::models::{Settings, UserProfile};

    fn sample_catalog() -> Catalog {
        Catalog {
            items: vec![
                CatalogItem { id: 1, name: "Milk".to_string() },
                CatalogItem { id: 2, name: "Bread".to_string() },
                CatalogItem { id: 3, name: "Eggs".to_string() },
            ],
            units: vec!["Kg(s)".to_string()],
            user: UserProfile {
                name: "A".to_string(),
                mobile: "123".to_string(),
                shopkeeper_mobile: "456".to_string(),
            },
            settings: Settings::default(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date()), "05-Mar-2024");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()), "31-Dec-2026");
        assert_eq!(export_file_name(date()), "grocery-list-05-Mar-2024.txt");
    }

    #[test]
    fn test_milk_and_eggs_example() {
        let catalog = sample_catalog();
        let choices = catalog.unit_choices();
        let mut entries = init_entries(&catalog);
        for id in [1, 3] {
            toggle_selected(&mut entries, id).unwrap();
            set_quantity(&mut entries, id, "2").unwrap();
        }
        set_unit(&mut entries, 3, "Other", &choices).unwrap();

        let text = format_export(&catalog, &entries, date());
        let expected = [
            "Date: 05-Mar-2024",
            "Name: A",
            "Mobile: 123",
            SEPARATOR,
            "1. 2 Kg(s) Milk",
            "2. 2 Eggs",
            SEPARATOR,
            "Total Items: 2",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_selection_still_has_total() {
        let catalog = sample_catalog();
        let entries = init_entries(&catalog);
        let text = format_export(&catalog, &entries, date());
        assert!(text.ends_with(&format!("{}\n{}\nTotal Items: 0", SEPARATOR, SEPARATOR)));
    }

    #[test]
    fn test_blank_quantity_and_custom_label() {
        let mut catalog = sample_catalog();
        catalog.settings.total_label = "Items".to_string();
        let mut entries = init_entries(&catalog);
        toggle_selected(&mut entries, 2).unwrap();
        set_quantity(&mut entries, 2, "   ").unwrap();

        let text = format_export(&catalog, &entries, date());
        assert!(text.contains("\n1. Kg(s) Bread\n"));
        assert!(text.ends_with("Items: 1"));
    }

    #[test]
    fn test_other_is_plain_unit_when_sentinel_disabled() {
        let mut catalog = sample_catalog();
        catalog.units.push("Other".to_string());
        catalog.settings.other_unit = None;
        let choices = catalog.unit_choices();
        let mut entries = init_entries(&catalog);
        toggle_selected(&mut entries, 1).unwrap();
        set_unit(&mut entries, 1, "Other", &choices).unwrap();

        let text = format_export(&catalog, &entries, date());
        assert!(text.contains("1. 1 Other Milk"));
    }

    #[test]
    fn test_hidden_rows_stay_in_export() {
        let catalog = sample_catalog();
        let mut entries = init_entries(&catalog);
        toggle_selected(&mut entries, 1).unwrap();
        toggle_selected(&mut entries, 3).unwrap();
        let before = format_export(&catalog, &entries, date());

        // Filtering alone leaves entries untouched
        let visible = filter_items(&catalog.items, "br");
        assert_eq!(visible.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(format_export(&catalog, &entries, date()), before);

        // Select all on the filtered rows adds Bread; hidden Milk and Eggs stay
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        set_selected_many(&mut entries, &ids, true);
        let text = format_export(&catalog, &entries, date());
        assert!(text.contains("\n1. 1 Kg(s) Milk\n2. 1 Kg(s) Bread\n3. 1 Kg(s) Eggs\n"));
        assert!(text.ends_with("Total Items: 3"));
    }

    #[test]
    fn test_share_url_encodes_text() {
        let url = share_url("https://wa.me/", "+91 98765-43210", "1. 2 Kg(s) Milk\nTotal: 1 & more");
        assert_eq!(
            url,
            "https://wa.me/919876543210?text=1.%202%20Kg(s)%20Milk%0ATotal%3A%201%20%26%20more"
        );
    }
}
