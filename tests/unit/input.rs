//! Sequence view tests: the same engines over text, tokens and numbers.

use std::collections::VecDeque;

use seqsim::{edit_distance, input, jaro_winkler_similarity, CharView, SequenceView};

#[test]
fn test_factory_and_from_agree() {
    let a = input("tōkyō");
    let b = CharView::from("tōkyō");
    let c: CharView = "tōkyō".chars().collect();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.len(), 5);
}

#[test]
fn test_char_view_derefs_to_slice() {
    let view = input("abc");
    assert_eq!(view.as_slice(), &['a', 'b', 'c']);
    assert_eq!(view.iter().rev().collect::<String>(), "cba");
}

#[test]
fn test_views_are_interchangeable() {
    let text = input("kitten");
    let vec: Vec<char> = "sitting".chars().collect();
    let deque: VecDeque<char> = "sitting".chars().collect();

    assert_eq!(edit_distance(&text, &vec), 3);
    assert_eq!(edit_distance(&text, &deque), 3);
    assert_eq!(edit_distance(&vec[..], &deque), 0);
}

#[test]
fn test_token_views() {
    let a = ["GET", "/api/users", "HTTP/1.1"];
    let b = ["GET", "/api/user", "HTTP/1.1"];
    assert_eq!(edit_distance(&a, &b), 1);
    assert!(jaro_winkler_similarity(&a, &b) < 1.0);
}

#[test]
fn test_integer_views() {
    let a: Vec<u64> = vec![1, 2, 3, 4, 5];
    let b: Vec<u64> = vec![1, 2, 4, 5];
    assert_eq!(edit_distance(&a, &b), 1);
}

#[test]
fn test_same_elements() {
    assert!(input("same").same_elements(&input("same")));
    assert!(!input("same").same_elements(&input("sane")));
    assert!(![1, 2].same_elements(&[1, 2, 3]));
}
