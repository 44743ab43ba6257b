use adasort::prelude::*;
use rand::Rng;

#[test]
fn test_empty() {
    let mut data: Vec<i32> = vec![];
    sort(&mut data);
    assert!(data.is_empty());
}

#[test]
fn test_single_element() {
    let mut data = vec![42];
    sort(&mut data);
    assert_eq!(data, vec![42]);
}

#[test]
fn test_two_elements() {
    let mut data = vec![1, 2];
    sort(&mut data);
    assert_eq!(data, vec![1, 2]);

    let mut data = vec![2, 1];
    sort(&mut data);
    assert_eq!(data, vec![1, 2]);
}

#[test]
fn test_basic_sort() {
    let mut data = vec![5, 2, 8, 1, 9, 3];
    sort(&mut data);
    assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_already_sorted() {
    let mut data: Vec<i32> = (0..1000).collect();
    let expected = data.clone();
    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_reverse_sorted() {
    let mut data: Vec<i32> = (0..1000).rev().collect();
    sort(&mut data);
    let expected: Vec<i32> = (0..1000).collect();
    assert_eq!(data, expected);
}

#[test]
fn test_all_equal() {
    let mut data = vec![3; 5];
    let shape = detect_shape(&data, i32::cmp);
    assert!(shape.non_decreasing);
    assert!(shape.non_increasing);

    sort(&mut data);
    assert_eq!(data, vec![3; 5]);
}

#[test]
fn test_shape_detector() {
    let empty: [i32; 0] = [];
    let shape = detect_shape(&empty, i32::cmp);
    assert!(shape.non_decreasing && shape.non_increasing);

    let shape = detect_shape(&[7], i32::cmp);
    assert!(shape.non_decreasing && shape.non_increasing);

    let shape = detect_shape(&[1, 2, 2, 9], i32::cmp);
    assert!(shape.non_decreasing && !shape.non_increasing);

    let shape = detect_shape(&[9, 2, 2, 1], i32::cmp);
    assert!(!shape.non_decreasing && shape.non_increasing);

    let shape = detect_shape(&[1, 9, 2], i32::cmp);
    assert!(!shape.non_decreasing && !shape.non_increasing);
}

#[test]
fn test_many_duplicates() {
    let mut rng = rand::rng();
    let mut data: Vec<i32> = (0..10_000).map(|_| rng.random_range(0..10)).collect();
    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_all_duplicates_but_one() {
    let mut data = vec![5; 2000];
    data[1234] = 1;
    sort(&mut data);

    assert_eq!(data[0], 1);
    assert!(data[1..].iter().all(|&x| x == 5));
}

#[test]
fn test_strings() {
    let mut data = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];
    sort(&mut data);
    assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
}

#[test]
fn test_strings_with_duplicates() {
    let mut data = vec!["b", "a", "b", "a", "c", "a"];
    sort(&mut data);
    assert_eq!(data, vec!["a", "a", "a", "b", "b", "c"]);
}

#[test]
fn test_custom_comparator_descending() {
    let mut data = vec![5, 2, 8, 1, 9, 3];
    sort_by(&mut data, |a, b| b.cmp(a));
    assert_eq!(data, vec![9, 8, 5, 3, 2, 1]);
}

#[test]
fn test_custom_comparator_abs() {
    let mut data: Vec<i32> = vec![-5, 2, -8, 1, 9, -3];
    sort_by(&mut data, |a, b| a.abs().cmp(&b.abs()));
    assert_eq!(data, vec![1, 2, -3, -5, -8, 9]);
}

#[test]
fn test_negative_numbers() {
    let mut data = vec![-1, -100, 50, 0, -50, 100, 1];
    sort(&mut data);
    assert_eq!(data, vec![-100, -50, -1, 0, 1, 50, 100]);
}

#[test]
fn test_nearly_sorted() {
    let mut rng = rand::rng();
    let mut data: Vec<i32> = (0..10_000).collect();
    // A handful of random out-of-place swaps defeats the pre-scan.
    for _ in 0..100 {
        let a = rng.random_range(0..data.len());
        let b = rng.random_range(0..data.len());
        data.swap(a, b);
    }
    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_detection_disabled_sorted() {
    let mut data: Vec<i32> = (0..1000).collect();
    let expected = data.clone();
    sort_with(&mut data, i32::cmp, false);
    assert_eq!(data, expected);
}

#[test]
fn test_detection_disabled_reverse() {
    let mut data: Vec<i32> = (0..1000).rev().collect();
    sort_with(&mut data, i32::cmp, false);
    let expected: Vec<i32> = (0..1000).collect();
    assert_eq!(data, expected);
}

#[test]
fn test_sort_by_key() {
    let mut data = vec![(2, "b"), (3, "a"), (1, "c")];
    sort_by_key(&mut data, |item| item.0);
    assert_eq!(data, vec![(1, "c"), (2, "b"), (3, "a")]);
}

#[test]
fn test_sort_pairs_by_second() {
    let mut data = vec![("x", 30), ("y", 10), ("z", 20)];
    sort_by_key(&mut data, |item| item.1);
    assert_eq!(data, vec![("y", 10), ("z", 20), ("x", 30)]);
}

#[test]
fn test_sort_by_key_with_comparator() {
    let mut data = vec!["pear", "fig", "banana", "kiwi"];
    sort_by_key_with(&mut data, |w| w.len(), |a, b| b.cmp(a));
    assert_eq!(data, vec!["banana", "pear", "kiwi", "fig"]);
}

#[test]
fn test_sort_by_key_non_copy_elements() {
    let mut rng = rand::rng();
    let mut data: Vec<String> = (0..5000)
        .map(|_| {
            let len = rng.random_range(0..12);
            (0..len).map(|_| rng.random_range('a'..='z')).collect()
        })
        .collect();
    let mut expected = data.clone();
    expected.sort_by_key(|s| (s.len(), s.clone()));

    sort_by_key(&mut data, |s| (s.len(), s.clone()));
    assert_eq!(data, expected);
}

#[test]
fn test_fuzz_random_small() {
    let mut rng = rand::rng();

    for _ in 0..2000 {
        let count = rng.random_range(0..30);
        let mut data: Vec<i64> = (0..count).map(|_| rng.random_range(-50..50)).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_random_medium() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let count = rng.random_range(100..3000);
        let mut data: Vec<i64> = (0..count).map(|_| rng.random()).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_large_value_range() {
    let mut rng = rand::rng();
    let mut data: Vec<i64> = (0..10_000)
        .map(|_| rng.random_range(i64::MIN..i64::MAX))
        .collect();
    let mut expected = data.clone();
    expected.sort();

    sort(&mut data);
    assert_eq!(data, expected);
}
