use dynarray::{DynamicArray, List, ListError};

/// Runs the list walkthrough against any `List<i32>` implementation.
fn walkthrough<L: List<i32>>(list: &mut L) {
    for i in 1..=4 {
        list.push(i);
    }
    list.insert(0, 0).unwrap();
    assert_eq!(list.remove(4), Ok(4));
    assert_eq!(list.get(1), Ok(&1));
    assert_eq!(list.len(), 4);
}

fn fill<L: List<i32>>(list: &mut L, values: &[i32]) {
    for &v in values {
        list.push(v);
    }
}

#[test]
fn walkthrough_through_trait() {
    let mut array = DynamicArray::new();
    walkthrough(&mut array);
    assert_eq!(array, [0, 1, 2, 3]);
    assert_eq!(array.to_string(), "[0, 1, 2, 3]");
}

#[test]
fn walkthrough_from_zero_capacity() {
    let mut array = DynamicArray::with_capacity(0);
    walkthrough(&mut array);
    assert_eq!(array, vec![0, 1, 2, 3]);
}

fn has<L: List<i32>>(list: &L, value: i32) -> bool {
    list.contains(&value)
}

#[test]
fn default_search_methods() {
    let mut array = DynamicArray::new();
    fill(&mut array, &[4, 8, 4]);
    assert!(has(&array, 8));
    assert!(!has(&array, 5));
    assert!(!List::is_empty(&array));
    assert_eq!(List::index_of(&array, &4), Some(0));
    assert_eq!(List::last_index_of(&array, &4), Some(2));
}

#[test]
fn trait_errors_match_inherent_errors() {
    let mut array: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(
        List::insert(&mut array, 1, 0),
        Err(ListError::IndexOutOfRange { index: 1, len: 0 })
    );
    assert_eq!(
        List::set(&mut array, 0, 0),
        Err(ListError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert!(!List::remove_item(&mut array, &0));
}

#[test]
fn clear_through_trait() {
    let mut array = DynamicArray::new();
    fill(&mut array, &[1, 2, 3]);
    List::clear(&mut array);
    assert!(List::is_empty(&array));
    List::push(&mut array, 9);
    assert_eq!(List::get(&array, 0), Ok(&9));
}

#[test]
fn negative_capacity_is_rejected() {
    assert_eq!(
        DynamicArray::<String>::try_with_capacity(-3).err(),
        Some(ListError::InvalidArgument { capacity: -3 })
    );
}

#[test]
fn shared_behind_a_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(DynamicArray::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..25 {
                    shared.lock().unwrap().push(t * 100 + i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let array = shared.lock().unwrap();
    assert_eq!(array.len(), 100);
    assert!(array.contains(&0));
    assert!(array.contains(&324));
    assert!(!array.contains(&325));
}
