use insta::assert_snapshot;
use proptest::prelude::*;
use ulist::{ulist, Error, UList, Wrap};

#[test]
fn test_slice_scenario() {
    let list = ulist![1, 2, 3, 5, 43, 42, 6, 88, 886, 864];
    let slice = list.slice(2, 5).unwrap();
    assert_snapshot!(slice.to_string(), @"[3, 5, 43]");
}

#[test]
fn test_drop_while_true_scenario() {
    let list = ulist![5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 4, 6];
    let no_fives = list.drop_while_true(|x| *x == 5).unwrap();
    assert_snapshot!(no_fives.to_string(), @"[6, 6, 6, 6, 6, 4, 6]");
}

#[test]
fn test_cursor_scenario() {
    let list = ulist![1, 2, 3];
    let mut cursor = list.cursor();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(*cursor.next(&list, Wrap::Yes).unwrap());
    }
    assert_eq!(seen, vec![1, 2, 3, 1]);
}

#[test]
fn test_empty_slice_scenario() {
    let list: UList<i32> = ulist![];
    assert_eq!(list.slice(0, 1), Err(Error::Empty));
}

#[test]
fn test_drop_right_scenario() {
    let list = ulist![1, 2, 3, 4, 5];
    assert_eq!(list.drop_right(2).unwrap(), [1, 2, 3]);
}

#[test]
fn test_error_messages() {
    assert_snapshot!(Error::Empty.to_string(), @"List cannot be empty");
    assert_snapshot!(
        Error::InvalidRange { start: 3, end: 1 }.to_string(),
        @"End index 1 cannot be less than start index 3"
    );
    assert_snapshot!(
        Error::OutOfBounds { index: 7, len: 3 }.to_string(),
        @"Index 7 is out of bounds for list of length 3"
    );
}

#[test]
fn test_serde_round_trip() {
    let list = ulist![1, 2, 3];
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");
    let back: UList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}

#[test]
fn test_serde_cursor() {
    let list = ulist!['x', 'y'];
    let mut cursor = list.cursor();
    cursor.next(&list, Wrap::Yes).unwrap();
    let json = serde_json::to_string(&cursor).unwrap();
    let mut back: ulist::Cursor = serde_json::from_str(&json).unwrap();
    assert_eq!(back.next(&list, Wrap::Yes), Ok(&'y'));
}

fn non_empty_list() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-20i32..20, 1..30)
}

// a non-empty list with a valid start and end index
fn list_and_range() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    non_empty_list().prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 0..=len)
            .prop_flat_map(move |(items, start)| (Just(items), Just(start), start..=len))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn slice_length_and_items((items, start, end) in list_and_range()) {
        let list = UList::from(items.clone());
        let slice = list.slice(start, end).unwrap();
        prop_assert_eq!(slice.len(), end - start);
        for i in 0..slice.len() {
            prop_assert_eq!(slice[i], items[start + i]);
        }
        // the source is untouched
        prop_assert_eq!(list, items);
    }

    #[test]
    fn drop_while_true_is_longest_suffix(items in non_empty_list(), pivot in -20i32..20) {
        let list = UList::from(items.clone());
        let predicate = |x: &i32| *x < pivot;
        let rest = list.drop_while_true(predicate).unwrap();
        let dropped = items.len() - rest.len();
        prop_assert!(items[..dropped].iter().all(predicate));
        if let Some(first) = rest.first() {
            prop_assert!(!predicate(first));
        }
        prop_assert_eq!(rest.as_slice(), &items[dropped..]);
    }

    #[test]
    fn drop_while_false_is_longest_suffix(items in non_empty_list(), pivot in -20i32..20) {
        let list = UList::from(items.clone());
        let predicate = |x: &i32| *x < pivot;
        let rest = list.drop_while_false(predicate).unwrap();
        let dropped = items.len() - rest.len();
        prop_assert!(items[..dropped].iter().all(|x| !predicate(x)));
        if let Some(first) = rest.first() {
            prop_assert!(predicate(first));
        }
    }

    #[test]
    fn drop_right_keeps_order(items in non_empty_list(), n in 0usize..30, pivot in -20i32..20) {
        let list = UList::from(items.clone());
        let n = n.min(items.len());
        let rest = list
            .drop_right(n)
            .unwrap()
            .drop_while_true(|x| *x < pivot);
        match rest {
            Ok(rest) => {
                let kept = rest.into_vec();
                let end = items.len() - n;
                prop_assert!(items[..end].ends_with(&kept));
            }
            // dropping everything from the right leaves nothing to trim
            Err(e) => {
                prop_assert_eq!(e, Error::Empty);
                prop_assert_eq!(n, items.len());
            }
        }
    }

    #[test]
    fn drop_removes_exactly_n(items in non_empty_list(), n in 0usize..30) {
        let list = UList::from(items.clone());
        let n = n.min(items.len());
        let rest = list.drop(n).unwrap();
        prop_assert_eq!(rest.as_slice(), &items[n..]);
    }

    #[test]
    fn cursor_wrap_revisits_first(items in non_empty_list()) {
        let list = UList::from(items.clone());
        let mut cursor = list.cursor();
        let mut first_visits = 0;
        for _ in 0..=items.len() {
            cursor.next(&list, Wrap::Yes).unwrap();
            if cursor.position() == Some(0) {
                first_visits += 1;
            }
        }
        prop_assert_eq!(first_visits, 2);
    }

    #[test]
    fn cursor_exhaustion_keeps_items(items in non_empty_list()) {
        let list = UList::from(items.clone());
        let mut cursor = list.cursor();
        let walked = cursor.iter(&list).copied().collect::<Vec<_>>();
        prop_assert_eq!(&walked, &items);
        let exhausted = cursor.next(&list, Wrap::No);
        prop_assert_eq!(
            exhausted,
            Err(Error::CursorExhausted { position: Some(items.len() - 1), len: items.len() })
        );
        prop_assert_eq!(list, items);
    }

    #[test]
    fn display_parse_round_trip(items in proptest::collection::vec(any::<i64>(), 0..30)) {
        let list = UList::from(items);
        let parsed: UList<i64> = list.to_string().parse().unwrap();
        prop_assert_eq!(parsed, list);
    }

    #[test]
    fn find_unique_keeps_first_occurrences(items in non_empty_list()) {
        let list = UList::from(items.clone());
        let unique = list.find_unique();
        let mut expected: Vec<i32> = Vec::new();
        for item in items {
            if !expected.contains(&item) {
                expected.push(item);
            }
        }
        prop_assert_eq!(unique, expected);
    }
}
