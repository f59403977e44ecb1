//! Unit tests for the dynamic array
//!
//! Tests cover insertion, removal, lookup, copying and the
//! map/filter/reduce helpers.

use linear_collections::DynamicArray;

// ============================================================================
// Insertion Tests
// ============================================================================

mod insertion_tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
    }

    #[test]
    fn test_prepend() {
        let mut array = DynamicArray::new();
        array.prepend(2);
        array.prepend(1);
        assert_eq!(array.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_append() {
        let mut array = DynamicArray::new();
        array.append(1);
        array.append(2);
        assert_eq!(array.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_into_empty_array_is_ignored() {
        let mut array = DynamicArray::new();
        assert!(!array.insert_at_index(1, 0));
        assert!(array.is_empty());
    }

    #[test]
    fn test_insert_at_first_index() {
        let mut array = DynamicArray::from(vec![2, 3]);
        assert!(array.insert_at_index(1, 0));
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_insert_at_last_index() {
        let mut array = DynamicArray::from(vec![1, 3]);
        assert!(array.insert_at_index(2, 1));
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_insert_at_middle_index() {
        let mut array = DynamicArray::from(vec![1, 3, 4]);
        assert!(array.insert_at_index(2, 1));
        assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
    }
}

// ============================================================================
// Removal Tests
// ============================================================================

mod removal_tests {
    use super::*;

    #[test]
    fn test_remove_last() {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(array.remove_last(), None);
        array.append(1);
        assert_eq!(array.remove_last(), Some(1));
        assert!(array.is_empty());
    }

    #[test]
    fn test_remove_first() {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(array.remove_first(), None);
        array.append(1);
        array.append(2);
        assert_eq!(array.remove_first(), Some(1));
        assert_eq!(array.as_slice(), &[2]);
    }

    #[test]
    fn test_remove_at_index() {
        let mut array = DynamicArray::from(vec![1, 2, 3]);
        assert_eq!(array.remove_at_index(1), Some(2));
        assert_eq!(array.as_slice(), &[1, 3]);
        assert_eq!(array.remove_at_index(1), Some(3));
        assert_eq!(array.remove_at_index(0), Some(1));
        assert_eq!(array.remove_at_index(0), None);
    }
}

// ============================================================================
// Lookup Tests
// ============================================================================

mod lookup_tests {
    use super::*;

    #[test]
    fn test_value_at() {
        let array = DynamicArray::from(vec![1, 2]);
        assert_eq!(array.value_at(1), Some(&2));
        assert_eq!(array.value_at(3), None);
        assert_eq!(DynamicArray::<i32>::new().value_at(0), None);
    }

    #[test]
    fn test_contains() {
        let array = DynamicArray::from(vec![1, 2]);
        assert!(array.contains(&2));
        assert!(!array.contains(&3));
        assert!(!DynamicArray::<i32>::new().contains(&1));
    }

    #[test]
    fn test_index_of() {
        let array = DynamicArray::from(vec![1, 2, 2]);
        assert_eq!(array.index_of(&2), Some(1));
        assert_eq!(array.index_of(&3), None);
    }
}

// ============================================================================
// Copy and Merge Tests
// ============================================================================

mod copy_tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Swatch {
        name: String,
        color: String,
    }

    #[test]
    fn test_to_vec_is_independent() {
        let array = DynamicArray::from(vec![Swatch {
            name: "Brinley".to_string(),
            color: "red".to_string(),
        }]);
        let mut copy = array.to_vec();
        copy[0].color = "blue".to_string();
        assert_eq!(array.value_at(0).map(|s| s.color.as_str()), Some("red"));
        assert_eq!(copy[0].name, "Brinley");
    }

    #[test]
    fn test_merge() {
        let mut first = DynamicArray::from(vec![1, 2, 3]);
        let second = DynamicArray::from(vec![4, 5, 6]);
        first.merge(second.as_slice());
        assert_eq!(first.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(second.as_slice(), &[4, 5, 6]);
    }
}

// ============================================================================
// Transformation Tests
// ============================================================================

mod transformation_tests {
    use super::*;

    #[test]
    fn test_map() {
        let array = DynamicArray::from(vec![1, 2, 3]);
        let mapped = array.map(|value, index, all| value + index as i32 + all[0]);
        assert_eq!(mapped, vec![2, 4, 6]);
        assert!(DynamicArray::<i32>::new().map(|v, _, _| *v).is_empty());
    }

    #[test]
    fn test_filter() {
        let array = DynamicArray::from(vec![1, 2, 3]);
        let kept = array.filter(|value, index, all| value + index as i32 + all[0] >= 4);
        assert_eq!(kept, vec![2, 3]);
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_reduce_without_start_value() {
        let array = DynamicArray::from(vec![1, 2, 3]);
        let total = array.reduce(|acc, value, index, all| acc + value + index as i32 + all[0]);
        assert_eq!(total, Some(11));
        assert_eq!(DynamicArray::<i32>::new().reduce(|acc, _, _, _| acc), None);
    }

    #[test]
    fn test_fold_with_start_value() {
        let array = DynamicArray::from(vec![1, 2, 3]);
        let total = array.fold(0, |acc, value, index, all| acc + value + index as i32 + all[0]);
        assert_eq!(total, 12);
        assert_eq!(DynamicArray::<i32>::new().fold(0, |acc, _, _, _| acc + 1), 0);
    }

    #[test]
    fn test_sort_numbers() {
        let mut array = DynamicArray::from(vec![1.0, 9.0, 2.0, 0.4, -100.0, 99.0]);
        array.sort_by(|a: &f64, b: &f64| a.total_cmp(b));
        assert_eq!(array.as_slice(), &[-100.0, 0.4, 1.0, 2.0, 9.0, 99.0]);
    }

    #[test]
    fn test_sort_strings() {
        let mut array = DynamicArray::from(vec!["abc", "aaa", "aa", "ayz"]);
        array.sort();
        assert_eq!(array.as_slice(), &["aa", "aaa", "abc", "ayz"]);
    }

    #[test]
    fn test_replace_with_string_chars() {
        let mut array = DynamicArray::new();
        array.replace_with("hello".chars());
        assert_eq!(array.as_slice(), &['h', 'e', 'l', 'l', 'o']);
    }

    #[test]
    fn test_replace_with_set() {
        let mut array = DynamicArray::from(vec![1, 1, 2, 3]);
        let set: std::collections::BTreeSet<i32> = [1, 1, 2, 3].into_iter().collect();
        array.replace_with(set);
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_replace_with_map_entries() {
        let mut array = DynamicArray::new();
        let map: std::collections::BTreeMap<i32, &str> =
            [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
        array.replace_with(map);
        assert_eq!(array.as_slice(), &[(1, "a"), (2, "b"), (3, "c")]);
    }
}
