use expect_test::expect;
use relink::list::CycleList;
use relink::list::List;
use relink::list::SharedPair;

fn seq(list: &List) -> String {
  format!("{:?}", list)
}

#[test]
fn test_api() {
  let mut list = List::from_slice(&[3, 1, 2]);
  let _ = List::new();
  let _ = List::default();
  let _ = format!("{:?}", list);
  assert_eq!(list.len(), 3);
  assert!(! list.is_empty());
  list.sort_iterative();
  list.sort_recursive();
  list.reverse();
  list.reverse_recursive();
  list.dedup_sorted();
  list.dedup_sorted_recursive();
  list.remove_first(9);
  list.remove_all(9);
  let merged = List::from_slice(&[1]).merge(List::from_slice(&[2]));
  let _ = merged.merge_recursive(List::new());
  assert!(List::from_slice(&[1, 2, 1]).is_palindrome());
  let cycle = CycleList::new(&[1, 2, 3], Some(1));
  let _ = format!("{:?}", cycle);
  assert!(cycle.has_cycle());
  let pair = SharedPair::new(&[1], &[2], &[3]);
  let _ = format!("{:?}", pair);
  assert!(pair.intersection().is_some());
}

#[test]
fn test_dedup_sorted() {
  let cases: &[(&[i64], &[i64])] = &[
    (&[1, 1, 2], &[1, 2]),
    (&[1, 1, 2, 3, 3], &[1, 2, 3]),
    (&[1, 1, 1], &[1]),
    (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
    (&[], &[]),
    (&[1], &[1]),
  ];

  for &(input, expected) in cases {
    let mut list = List::from_slice(input);
    list.dedup_sorted();
    assert_eq!(list.to_vec(), expected);

    // idempotent
    list.dedup_sorted();
    assert_eq!(list.to_vec(), expected);

    // strictly increasing on sorted input
    let out = list.to_vec();
    assert!(out.windows(2).all(|w| w[0] < w[1]));

    let mut list = List::from_slice(input);
    list.dedup_sorted_recursive();
    assert_eq!(list.to_vec(), expected);
  }

  let mut list = List::from_slice(&[1, 1, 2, 3, 3]);
  list.dedup_sorted();
  expect!["[1, 2, 3]"].assert_eq(&seq(&list));
}

#[test]
fn test_remove_first() {
  let mut list = List::from_slice(&[4, 5, 1, 9]);
  list.remove_first(5);
  expect!["[4, 1, 9]"].assert_eq(&seq(&list));

  // head removal goes through the same sentinel splice
  list.remove_first(4);
  expect!["[1, 9]"].assert_eq(&seq(&list));

  // target not found: no-op
  list.remove_first(7);
  expect!["[1, 9]"].assert_eq(&seq(&list));

  // only the first match is removed
  let mut list = List::from_slice(&[1, 2, 2, 3]);
  list.remove_first(2);
  expect!["[1, 2, 3]"].assert_eq(&seq(&list));

  let mut list = List::new();
  list.remove_first(1);
  assert!(list.is_empty());
}

#[test]
fn test_remove_all() {
  let mut list = List::from_slice(&[1, 2, 6, 3, 4, 5, 6]);
  list.remove_all(6);
  expect!["[1, 2, 3, 4, 5]"].assert_eq(&seq(&list));

  let mut list = List::from_slice(&[7, 7, 7]);
  list.remove_all(7);
  expect!["[]"].assert_eq(&seq(&list));

  let mut list = List::from_slice(&[1, 2, 3]);
  list.remove_all(9);
  expect!["[1, 2, 3]"].assert_eq(&seq(&list));

  // adjacent matches after a removal are caught too
  let mut list = List::from_slice(&[2, 1, 2, 2, 3, 2]);
  list.remove_all(2);
  assert_eq!(list.to_vec(), [1, 3]);

  let mut list = List::new();
  list.remove_all(0);
  assert!(list.is_empty());
}

#[test]
fn test_reverse() {
  let mut list = List::from_slice(&[1, 2, 3, 4, 5]);
  list.reverse();
  expect!["[5, 4, 3, 2, 1]"].assert_eq(&seq(&list));

  // involution
  list.reverse();
  expect!["[1, 2, 3, 4, 5]"].assert_eq(&seq(&list));

  let mut list = List::from_slice(&[1, 2, 3, 4, 5]);
  list.reverse_recursive();
  expect!["[5, 4, 3, 2, 1]"].assert_eq(&seq(&list));
  list.reverse_recursive();
  expect!["[1, 2, 3, 4, 5]"].assert_eq(&seq(&list));

  let mut empty = List::new();
  empty.reverse();
  assert!(empty.is_empty());

  let mut single = List::from_slice(&[7]);
  single.reverse_recursive();
  assert_eq!(single.to_vec(), [7]);
}

#[test]
fn test_merge() {
  let merged = List::from_slice(&[1, 3, 5]).merge(List::from_slice(&[2, 4, 6]));
  expect!["[1, 2, 3, 4, 5, 6]"].assert_eq(&seq(&merged));

  let merged = List::from_slice(&[1, 2, 4]).merge_recursive(List::from_slice(&[1, 3, 4]));
  expect!["[1, 1, 2, 3, 4, 4]"].assert_eq(&seq(&merged));

  let merged = List::new().merge(List::from_slice(&[1, 2]));
  assert_eq!(merged.to_vec(), [1, 2]);

  let merged = List::from_slice(&[1, 2]).merge(List::new());
  assert_eq!(merged.to_vec(), [1, 2]);

  let merged = List::new().merge_recursive(List::new());
  assert!(merged.is_empty());
}

#[test]
fn test_merge_tie_break() {
  // Ties are invisible at the value level, so observe node identity: on
  // equal values the first list's node must be attached first, in both
  // merge variants.
  unsafe {
    let a = List::from_slice(&[1, 2]).into_head();
    let b = List::from_slice(&[1, 2]).into_head();

    let a0 = a.unwrap();
    let a1 = (*a0.as_ptr()).next.unwrap();
    let b0 = b.unwrap();
    let b1 = (*b0.as_ptr()).next.unwrap();

    let merged = relink::merge(a, b);

    let mut order = Vec::new();
    let mut p = merged;
    while let Some(q) = p {
      order.push(q);
      p = (*q.as_ptr()).next;
    }

    assert_eq!(order, [a0, b0, a1, b1]);
    drop(List::from_head(merged));

    let a = List::from_slice(&[5, 5]).into_head();
    let b = List::from_slice(&[5, 5]).into_head();

    let a0 = a.unwrap();
    let a1 = (*a0.as_ptr()).next.unwrap();
    let b0 = b.unwrap();
    let b1 = (*b0.as_ptr()).next.unwrap();

    let merged = relink::merge_recursive(a, b);

    let mut order = Vec::new();
    let mut p = merged;
    while let Some(q) = p {
      order.push(q);
      p = (*q.as_ptr()).next;
    }

    assert_eq!(order, [a0, a1, b0, b1]);
    drop(List::from_head(merged));
  }
}

#[test]
fn test_sort() {
  let cases: &[(&[i64], &[i64])] = &[
    (&[4, 2, 1, 3], &[1, 2, 3, 4]),
    (&[-1, 5, 3, 4, 0], &[-1, 0, 3, 4, 5]),
    (&[], &[]),
    (&[1], &[1]),
    (&[2, 1], &[1, 2]),
    (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
    (&[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5]),
    (&[3, 1, 2, 3, 1], &[1, 1, 2, 3, 3]),
    (&[4, -1, 2, -3, 0], &[-3, -1, 0, 2, 4]),
  ];

  for &(input, expected) in cases {
    let mut recursive = List::from_slice(input);
    recursive.sort_recursive();
    assert_eq!(recursive.to_vec(), expected);

    let mut iterative = List::from_slice(input);
    iterative.sort_iterative();
    assert_eq!(iterative.to_vec(), expected);

    assert_eq!(recursive.to_vec(), iterative.to_vec());
  }

  let mut list = List::from_slice(&[4, 2, 1, 3]);
  list.sort_iterative();
  expect!["[1, 2, 3, 4]"].assert_eq(&seq(&list));
}

#[test]
fn test_sort_long() {
  // fixed pseudo-random sequence, length not a power of two
  let mut values = Vec::new();
  let mut x: i64 = 7;
  for _ in 0 .. 137 {
    x = (x * 1103515245 + 12345) % 1000;
    values.push(x - 500);
  }

  let mut expected = values.clone();
  expected.sort();

  let mut recursive = List::from_slice(&values);
  recursive.sort_recursive();
  assert_eq!(recursive.to_vec(), expected);

  let mut iterative = List::from_slice(&values);
  iterative.sort_iterative();
  assert_eq!(iterative.to_vec(), expected);
}

#[test]
fn test_cycle() {
  let cases: &[(&[i64], Option<usize>, bool)] = &[
    (&[3, 2, 0, -4], Some(1), true),
    (&[1, 2], Some(0), true),
    (&[1], None, false),
    (&[1, 2, 3, 4, 5], None, false),
    (&[], None, false),
    (&[1, 2, 3, 4, 5], Some(2), true),
  ];

  for &(values, entry, expected) in cases {
    let list = CycleList::new(values, entry);
    assert_eq!(list.has_cycle(), expected);
    assert_eq!(list.cycle_entry().is_some(), expected);
  }
}

#[test]
fn test_cycle_entry_identity() {
  let list = CycleList::new(&[3, 2, 0, -4], Some(1));
  assert_eq!(list.cycle_entry(), list.node(1));

  let list = CycleList::new(&[1, 2], Some(0));
  assert_eq!(list.cycle_entry(), list.node(0));

  // self-loop on the last node
  let list = CycleList::new(&[1, 2, 3], Some(2));
  assert_eq!(list.cycle_entry(), list.node(2));

  let list = CycleList::new(&[1, 2, 3], None);
  assert_eq!(list.cycle_entry(), None);
}

#[test]
fn test_intersection() {
  let pair = SharedPair::new(&[4, 1], &[5, 6, 1], &[8, 4, 5]);
  let hit = pair.intersection();
  assert_eq!(hit, pair.junction());
  unsafe {
    assert_eq!((*hit.unwrap().as_ptr()).val, 8);
  }

  // equal values in disjoint nodes are not an intersection
  let pair = SharedPair::new(&[2, 6, 4], &[1, 5], &[]);
  assert_eq!(pair.intersection(), None);
  assert_eq!(pair.junction(), None);

  // one list is entirely the shared suffix
  let pair = SharedPair::new(&[], &[9], &[1, 2]);
  assert_eq!(pair.intersection(), pair.junction());
  assert_eq!(pair.intersection(), pair.head_a());

  let pair = SharedPair::new(&[], &[], &[]);
  assert_eq!(pair.intersection(), None);
  assert!(pair.head_a().is_none() && pair.head_b().is_none());
}

#[test]
fn test_palindrome() {
  assert!(List::from_slice(&[1, 2, 2, 1]).is_palindrome());
  assert!(List::from_slice(&[1, 2, 3, 2, 1]).is_palindrome());
  assert!(! List::from_slice(&[1, 2, 3]).is_palindrome());
  assert!(! List::from_slice(&[1, 2]).is_palindrome());
  assert!(List::from_slice(&[7, 7]).is_palindrome());
  assert!(List::from_slice(&[1]).is_palindrome());
  assert!(List::new().is_palindrome());
  assert!(! List::from_slice(&[1, 2, 2, 3]).is_palindrome());
}

#[test]
fn test_raw_api() {
  let node = relink::Node::new(5);
  assert_eq!(node.val, 5);
  assert!(node.next.is_none());

  unsafe {
    let head = List::from_slice(&[1, 2, 3]).into_head();
    assert_eq!(relink::length(head), 3);

    let head = relink::reverse(head);
    let head = relink::sort_iterative(head);
    let head = relink::dedup_sorted(head);
    let head = relink::remove_all(head, 2);
    assert!(! relink::has_cycle(head));
    assert_eq!(relink::cycle_entry(head), None);

    let list = List::from_head(head);
    assert_eq!(list.to_vec(), [1, 3]);
  }
}
