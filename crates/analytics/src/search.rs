//! Binary search over name-sorted inventory.

use core::cmp::Ordering;

use stocklens_core::StockItem;

/// Sort items by case-normalized name, establishing the precondition for
/// [`find_by_name`].
pub fn sort_by_name(items: &mut [StockItem]) {
    items.sort_by_key(|item| item.name.to_lowercase());
}

/// Binary search by item name, case-insensitive.
///
/// Precondition (the caller's to uphold): `items` is sorted by lowercased
/// name, e.g. via [`sort_by_name`]. Searching an unsorted sequence yields
/// undefined results. Comparison is plain Unicode lowercasing, with no
/// locale awareness.
///
/// With duplicate names the probe returns whichever match the midpoint
/// sequence lands on, not necessarily the first occurrence. Returns `None`
/// when the name is absent — an expected outcome, not an error.
pub fn find_by_name<'a>(items: &'a [StockItem], target: &str) -> Option<&'a StockItem> {
    let target = target.to_lowercase();
    let mut low = 0usize;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].name.to_lowercase().cmp(&target) {
            Ordering::Equal => return Some(&items[mid]),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stocklens_core::StockItemId;

    fn item(name: &str, quantity: u32) -> StockItem {
        StockItem {
            id: StockItemId::new(),
            name: name.to_string(),
            quantity,
        }
    }

    fn sample_inventory() -> Vec<StockItem> {
        let mut items = vec![
            item("Mouse", 25),
            item("keyboard", 12),
            item("Webcam", 4),
            item("headset", 9),
            item("USB Hub", 31),
        ];
        sort_by_name(&mut items);
        items
    }

    #[test]
    fn finds_item_regardless_of_case() {
        let items = sample_inventory();
        for query in ["Mouse", "mouse", "MOUSE", "mOuSe"] {
            let found = find_by_name(&items, query);
            assert_eq!(found.map(|i| i.name.as_str()), Some("Mouse"), "{query}");
        }
    }

    #[test]
    fn missing_name_returns_none() {
        let items = sample_inventory();
        assert!(find_by_name(&items, "Nonexistent").is_none());
    }

    #[test]
    fn empty_inventory_returns_none() {
        assert!(find_by_name(&[], "Mouse").is_none());
    }

    #[test]
    fn single_item_inventory() {
        let items = vec![item("Cable", 3)];
        assert_eq!(find_by_name(&items, "cable").map(|i| i.quantity), Some(3));
        assert!(find_by_name(&items, "Mouse").is_none());
    }

    #[test]
    fn sort_by_name_orders_case_insensitively() {
        let mut items = vec![item("banana", 1), item("Apple", 2), item("cherry", 3)];
        sort_by_name(&mut items);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    proptest! {
        /// Property: every item in a name-sorted inventory can be found by
        /// its own name, in any case.
        #[test]
        fn every_present_name_is_found(
            names in prop::collection::hash_set("[a-zA-Z]{1,12}", 1..32)
        ) {
            let mut items: Vec<StockItem> = names
                .iter()
                .enumerate()
                .map(|(i, name)| item(name, i as u32))
                .collect();
            sort_by_name(&mut items);

            for name in &names {
                let found = find_by_name(&items, &name.to_uppercase());
                prop_assert!(found.is_some(), "missing {name}");
            }
        }
    }
}
