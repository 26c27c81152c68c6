//! Tests for collection module

use super::*;
use crate::types::PageNumber;
use serde_json::json;
use test_case::test_case;

#[derive(Debug, Clone, PartialEq)]
struct Post {
    id: u32,
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_rejects_page_zero() {
    let err = Collection::<Post>::new(0, 10, None).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("page"));
}

#[test]
fn test_new_rejects_zero_per_page() {
    let err = Collection::<Post>::new(1, 0, Some(10)).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("per_page"));
}

#[test]
fn test_item_type_name_defaults_to_type() {
    let collection = Collection::<Post>::new(1, 10, None).unwrap();
    assert_eq!(collection.item_type_name(), "Post");

    let collection = Collection::<serde_json::Value>::new(1, 10, None)
        .unwrap()
        .with_item_type("Article");
    assert_eq!(collection.item_type_name(), "Article");
}

// ============================================================================
// Page Arithmetic Tests
// ============================================================================

#[test_case(0, 10 => 1; "empty collection has one page")]
#[test_case(1, 10 => 1; "single entry")]
#[test_case(10, 10 => 1; "exactly one page")]
#[test_case(11, 10 => 2; "one over")]
#[test_case(23, 5 => 5; "partial last page")]
#[test_case(4, 1 => 4; "one per page")]
#[test_case(4, 3 => 2; "three per page")]
fn test_total_pages(total: u64, per_page: u64) -> u64 {
    Collection::<Post>::new(1, per_page, Some(total))
        .unwrap()
        .total_pages()
}

#[test_case(1, 10 => 0)]
#[test_case(2, 5 => 5)]
#[test_case(3, 10 => 20)]
fn test_offset(page: u64, per_page: u64) -> u64 {
    Collection::<Post>::new(page, per_page, Some(100))
        .unwrap()
        .offset()
}

#[test]
fn test_previous_and_next_page() {
    let first = Collection::<Post>::new(1, 5, Some(23)).unwrap();
    assert_eq!(first.previous_page(), None);
    assert_eq!(first.next_page(), Some(PageNumber::new(2).unwrap()));

    let middle = Collection::<Post>::new(3, 5, Some(23)).unwrap();
    assert_eq!(middle.previous_page().unwrap(), 2);
    assert_eq!(middle.next_page().unwrap(), 4);

    let last = Collection::<Post>::new(5, 5, Some(23)).unwrap();
    assert_eq!(last.previous_page().unwrap(), 4);
    assert_eq!(last.next_page(), None);
}

#[test]
fn test_out_of_bounds_is_not_an_error() {
    let collection = Collection::<Post>::new(9, 5, Some(23))
        .unwrap()
        .replace(vec![]);
    assert!(collection.out_of_bounds());
    assert!(collection.is_empty());
    assert_eq!(collection.next_page(), None);
    assert_eq!(collection.previous_page().unwrap(), 8);
}

// ============================================================================
// Replace Tests
// ============================================================================

#[test]
fn test_replace_infers_total_from_short_page() {
    let collection = Collection::new(3, 5, None)
        .unwrap()
        .replace(vec![Post { id: 11 }, Post { id: 12 }]);
    assert_eq!(collection.known_total_entries(), Some(12));
    assert_eq!(collection.total_pages(), 3);
}

#[test]
fn test_replace_infers_zero_total_on_empty_first_page() {
    let collection = Collection::<Post>::new(1, 5, None).unwrap().replace(vec![]);
    assert_eq!(collection.known_total_entries(), Some(0));
}

#[test]
fn test_replace_keeps_unknown_total_on_empty_later_page() {
    let collection = Collection::<Post>::new(4, 5, None).unwrap().replace(vec![]);
    assert_eq!(collection.known_total_entries(), None);
}

#[test]
fn test_replace_keeps_unknown_total_on_full_page() {
    let items = (1..=5).map(|id| Post { id }).collect();
    let collection = Collection::new(1, 5, None).unwrap().replace(items);
    assert_eq!(collection.known_total_entries(), None);
    assert_eq!(collection.len(), 5);
}

#[test]
fn test_replace_does_not_override_known_total() {
    let collection = Collection::new(1, 5, Some(40))
        .unwrap()
        .replace(vec![Post { id: 1 }]);
    assert_eq!(collection.known_total_entries(), Some(40));
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_map_keeps_metadata() {
    let collection = Collection::new(2, 2, Some(5))
        .unwrap()
        .replace(vec![Post { id: 3 }, Post { id: 4 }])
        .map(|p| p.id);
    assert_eq!(collection.items(), &[3, 4]);
    assert_eq!(collection.current_page(), 2);
    assert_eq!(collection.total_pages(), 3);
    assert_eq!(collection.item_type_name(), "Post");
}

#[test]
fn test_serialize() {
    let collection = Collection::new(2, 2, Some(5)).unwrap().replace(vec![3, 4]);
    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(
        value,
        json!({
            "items": [3, 4],
            "pagination": {
                "current_page": 2,
                "per_page": 2,
                "total_entries": 5,
                "total_pages": 3,
                "offset": 2,
                "previous_page": 1,
                "next_page": 3
            }
        })
    );
}
