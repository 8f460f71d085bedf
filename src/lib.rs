#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

use core::ptr::NonNull;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod list;

mod ptr;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE DEFINITIONS                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A link to a list node, or `None` at the end of a list.
///
/// A whole list is represented by the link to its first node; `None` is the
/// empty list.

pub type Link = Option<NonNull<Node>>;

/// A single list cell: one value and an owning link to its successor.
///
/// Each node exclusively owns the node behind its `next` link. The algorithms
/// in this crate transfer that ownership by rewiring links; they never
/// duplicate a node. Nodes are heap-allocated, and node identity is pointer
/// identity, which is what the cycle and intersection detectors compare.

pub struct Node {
  /// The value held by this node.
  pub val: i64,
  /// The owning link to the successor node, or `None` at the end.
  pub next: Link,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Node {
  /// An unlinked node holding the given value.

  #[inline(always)]
  pub fn new(val: i64) -> Self {
    Self { val, next: None }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// TRAVERSAL PRIMITIVES                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// The number of nodes reachable from `head`.
///
/// # Safety
///
/// `head` must be the head of a valid acyclic list.

pub unsafe fn length(head: Link) -> usize {
  let mut n = 0;
  let mut p = head;

  while let Some(q) = p {
    n = n + 1;
    p = ptr::as_ref(q).next;
  }

  n
}

#[inline(always)]
unsafe fn step(p: Link) -> Link {
  match p {
    Some(q) => ptr::as_ref(q).next,
    None => None,
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// DEDUPLICATION                                                              //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Removes every node whose value equals its predecessor's, assuming the
/// list is sorted ascending. Spliced-out duplicates are freed. Returns the
/// head, which is never removed.
///
/// On unsorted input only adjacent duplicates are collapsed; the result is
/// unspecified but still a valid list.
///
/// # Safety
///
/// `head` must be the head of a valid acyclic list, exclusively owned by the
/// caller. Ownership of every surviving node transfers to the returned head.

pub unsafe fn dedup_sorted(head: Link) -> Link {
  let mut p = head;

  while let Some(q) = p {
    let node = ptr::as_mut_ref(q);

    let Some(succ) = node.next else { break };

    if ptr::as_ref(succ).val == node.val {
      // Stay put: the new successor may repeat the same value.
      node.next = ptr::as_ref(succ).next;
      ptr::free(succ);
    } else {
      p = node.next;
    }
  }

  head
}

/// Recursive counterpart of [`dedup_sorted`]: the tail is processed first,
/// then the current node is spliced out (and freed) if its value equals the
/// processed remainder's head value.
///
/// Recursion depth is the list length; prefer [`dedup_sorted`] for long
/// lists.
///
/// # Safety
///
/// Same contract as [`dedup_sorted`].

pub unsafe fn dedup_sorted_recursive(head: Link) -> Link {
  let Some(q) = head else { return None };

  let node = ptr::as_mut_ref(q);
  node.next = dedup_sorted_recursive(node.next);

  match node.next {
    Some(succ) if ptr::as_ref(succ).val == node.val => {
      let rest = node.next;
      ptr::free(q);
      rest
    }
    _ => head,
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// REMOVAL                                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Removes and frees the first node whose value equals `val`, then stops.
/// Returns the new head. A list without a match is returned unchanged.
///
/// A stack-local sentinel in front of the real head makes head removal and
/// interior removal the same splice.
///
/// # Safety
///
/// `head` must be the head of a valid acyclic list, exclusively owned by the
/// caller. Ownership of every surviving node transfers to the returned head.

pub unsafe fn remove_first(head: Link, val: i64) -> Link {
  let mut sentinel = Node { val: 0, next: head };
  let mut prev = ptr::from_mut_ref(&mut sentinel);

  while let Some(q) = ptr::as_ref(prev).next {
    if ptr::as_ref(q).val == val {
      ptr::as_mut_ref(prev).next = ptr::as_ref(q).next;
      ptr::free(q);
      break;
    }

    prev = q;
  }

  sentinel.next
}

/// Removes and frees every node whose value equals `val` in one pass.
/// Returns the new head. A list without a match is returned unchanged.
///
/// # Safety
///
/// Same contract as [`remove_first`].

pub unsafe fn remove_all(head: Link, val: i64) -> Link {
  let mut sentinel = Node { val: 0, next: head };
  let mut prev = ptr::from_mut_ref(&mut sentinel);

  while let Some(q) = ptr::as_ref(prev).next {
    if ptr::as_ref(q).val == val {
      // `prev` stays put: its new successor must be checked too.
      ptr::as_mut_ref(prev).next = ptr::as_ref(q).next;
      ptr::free(q);
    } else {
      prev = q;
    }
  }

  sentinel.next
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// REVERSAL                                                                   //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Reverses the list in place and returns the new head.
///
/// # Safety
///
/// `head` must be the head of a valid acyclic list, exclusively owned by the
/// caller. Ownership of every node transfers to the returned head.

pub unsafe fn reverse(head: Link) -> Link {
  let mut prev: Link = None;
  let mut curr = head;

  while let Some(q) = curr {
    let node = ptr::as_mut_ref(q);
    curr = node.next;
    node.next = prev;
    prev = Some(q);
  }

  prev
}

/// Recursive counterpart of [`reverse`]: the tail is reversed first, then
/// the current node is spliced onto its end and becomes the new tail.
///
/// Recursion depth is the list length; prefer [`reverse`] for long lists.
///
/// # Safety
///
/// Same contract as [`reverse`].

pub unsafe fn reverse_recursive(head: Link) -> Link {
  let Some(q) = head else { return None };

  let node = ptr::as_mut_ref(q);

  let Some(succ) = node.next else { return head };

  let new_head = reverse_recursive(node.next);
  ptr::as_mut_ref(succ).next = head;
  node.next = None;

  new_head
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// MERGE                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Merges two ascending lists into one ascending list by rewiring links
/// behind a stack-local sentinel, and returns the merged head. Once either
/// list is exhausted the other's remainder is attached in O(1).
///
/// Stable: on equal values the node from `a` is attached first.
///
/// # Safety
///
/// `a` and `b` must be heads of valid acyclic lists, disjoint by node
/// identity and exclusively owned by the caller. Ownership of every node
/// transfers to the returned head.

pub unsafe fn merge(a: Link, b: Link) -> Link {
  let mut sentinel = Node::new(0);
  let mut tail = ptr::from_mut_ref(&mut sentinel);
  let mut a = a;
  let mut b = b;

  loop {
    match (a, b) {
      (Some(x), Some(y)) => {
        if ptr::as_ref(x).val <= ptr::as_ref(y).val {
          ptr::as_mut_ref(tail).next = a;
          a = ptr::as_ref(x).next;
          tail = x;
        } else {
          ptr::as_mut_ref(tail).next = b;
          b = ptr::as_ref(y).next;
          tail = y;
        }
      }
      (rest, None) | (None, rest) => {
        ptr::as_mut_ref(tail).next = rest;
        break;
      }
    }
  }

  sentinel.next
}

/// Recursive counterpart of [`merge`], with the same `a`-first tie-break.
///
/// Recursion depth is the total length; prefer [`merge`] for long lists.
///
/// # Safety
///
/// Same contract as [`merge`].

pub unsafe fn merge_recursive(a: Link, b: Link) -> Link {
  match (a, b) {
    (other, None) | (None, other) => other,
    (Some(x), Some(y)) => {
      if ptr::as_ref(x).val <= ptr::as_ref(y).val {
        let node = ptr::as_mut_ref(x);
        node.next = merge_recursive(node.next, b);
        a
      } else {
        let node = ptr::as_mut_ref(y);
        node.next = merge_recursive(a, node.next);
        b
      }
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// CYCLE AND INTERSECTION DETECTION                                           //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Whether a cycle is reachable from `head`, by Floyd's tortoise and hare.
///
/// `slow` starts at the head and advances one node per step; `fast` starts
/// at the head's successor and advances two. They collide, by identity, iff
/// there is a cycle; otherwise `fast` runs off the end. O(n) time, O(1)
/// space, no mutation. This is the one operation family in the crate with
/// no acyclicity precondition.
///
/// # Safety
///
/// Every node reachable from `head` must be a valid node.

pub unsafe fn has_cycle(head: Link) -> bool {
  let Some(mut slow) = head else { return false };
  let Some(mut fast) = ptr::as_ref(slow).next else { return false };

  while slow != fast {
    let Some(next) = ptr::as_ref(fast).next else { return false };
    let Some(next2) = ptr::as_ref(next).next else { return false };
    fast = next2;

    let Some(s) = ptr::as_ref(slow).next else { return false };
    slow = s;
  }

  true
}

/// The first node of the cycle reachable from `head`, or `None` for an
/// acyclic list.
///
/// After the tortoise and hare collide, one pointer restarts at the head
/// and both advance one node per step; they meet again exactly at the
/// cycle's entry node.
///
/// # Safety
///
/// Same contract as [`has_cycle`].

pub unsafe fn cycle_entry(head: Link) -> Link {
  let Some(h) = head else { return None };
  let mut slow = h;
  let mut fast = h;

  loop {
    let Some(next) = ptr::as_ref(fast).next else { return None };
    let Some(next2) = ptr::as_ref(next).next else { return None };
    fast = next2;

    let Some(s) = ptr::as_ref(slow).next else { return None };
    slow = s;

    if slow == fast {
      break;
    }
  }

  let mut walk = h;

  while walk != slow {
    let Some(w) = ptr::as_ref(walk).next else { return None };
    walk = w;

    let Some(s) = ptr::as_ref(slow).next else { return None };
    slow = s;
  }

  Some(walk)
}

/// The first node shared, by identity, between the lists at `a` and `b`,
/// or `None` when they are disjoint.
///
/// Each pointer walks its own list and is re-routed once to the other
/// list's head upon reaching the end. Both then travel the same total
/// distance, so they coincide at the first shared node or become `None`
/// together. Neither list is mutated.
///
/// # Safety
///
/// `a` and `b` must be heads of valid acyclic lists. They may share a
/// suffix by identity.

pub unsafe fn intersection(a: Link, b: Link) -> Link {
  if a.is_none() || b.is_none() {
    return None;
  }

  let mut pa = a;
  let mut pb = b;

  while pa != pb {
    pa = match pa {
      Some(p) => ptr::as_ref(p).next,
      None => b,
    };
    pb = match pb {
      Some(p) => ptr::as_ref(p).next,
      None => a,
    };
  }

  pa
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PALINDROME                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Whether the list's value sequence reads the same in both directions.
///
/// The back half (found with a slow/fast scan) is reversed in place and
/// walked in lockstep with the front half, failing fast on the first
/// mismatch. The check is destructive: the back half stays reversed, and
/// its nodes are no longer reachable from the original head.
///
/// # Safety
///
/// `head` must be the head of a valid acyclic list, exclusively owned by
/// the caller. After the call the caller is still responsible for freeing
/// every node, including the ones the rewiring detached from `head`.

pub unsafe fn is_palindrome(head: Link) -> bool {
  let mut slow = head;
  let mut fast = head;

  while let Some(f) = fast {
    let Some(f2) = ptr::as_ref(f).next else { break };
    fast = ptr::as_ref(f2).next;
    slow = step(slow);
  }

  // `slow` is the first node of the back half.
  let back = reverse(slow);

  let mut left = head;
  let mut right = back;

  while let (Some(l), Some(r)) = (left, right) {
    if ptr::as_ref(l).val != ptr::as_ref(r).val {
      return false;
    }

    left = ptr::as_ref(l).next;
    right = ptr::as_ref(r).next;
  }

  true
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SORT                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Sorts the list ascending with top-down merge sort and returns the new
/// head. Stable. O(n log n) time, O(log n) recursion depth, no allocation.
///
/// The list is recursively split at the midpoint of a half-open range into
/// two true sublists, severing the link between them, so no node is ever
/// seen by both branches.
///
/// # Safety
///
/// `head` must be the head of a valid acyclic list, exclusively owned by
/// the caller. Ownership of every node transfers to the returned head.

pub unsafe fn sort_recursive(head: Link) -> Link {
  sort_range(head, None)
}

/// Sorts the range `[head, tail)`, severing it from `tail`.

unsafe fn sort_range(head: Link, tail: Link) -> Link {
  let Some(h) = head else { return None };

  if ptr::as_ref(h).next == tail {
    ptr::as_mut_ref(h).next = None;
    return head;
  }

  let mid = midpoint(head, tail);

  merge(sort_range(head, mid), sort_range(mid, tail))
}

/// The first node of the back half of `[head, tail)`. The range must hold
/// at least two nodes.

unsafe fn midpoint(head: Link, tail: Link) -> Link {
  let mut slow = head;
  let mut fast = head;

  while fast != tail {
    slow = step(slow);
    fast = step(fast);

    if fast != tail {
      fast = step(fast);
    }
  }

  slow
}

/// Severs the list after at most `width` nodes starting at `first` and
/// returns the remainder's head.

unsafe fn split_after(first: NonNull<Node>, width: usize) -> Link {
  let mut p = first;
  let mut i = 1;

  while i < width {
    match ptr::as_ref(p).next {
      Some(q) => p = q,
      None => break,
    }

    i = i + 1;
  }

  let rest = ptr::as_ref(p).next;
  ptr::as_mut_ref(p).next = None;

  rest
}

/// Sorts the list ascending with bottom-up merge sort and returns the new
/// head. Stable. O(n log n) time, O(1) extra space, no recursion.
///
/// For each run width 1, 2, 4, ... the pass splits the list into
/// consecutive pairs of runs of at most that width, merges each pair, and
/// reattaches the result behind a moving `prev` anchored at a stack-local
/// sentinel. After ceil(log2(n)) passes the sentinel's successor is the
/// sorted head.
///
/// # Safety
///
/// Same contract as [`sort_recursive`].

pub unsafe fn sort_iterative(head: Link) -> Link {
  if head.is_none() {
    return None;
  }

  let total = length(head);

  let mut sentinel = Node { val: 0, next: head };
  let mut width = 1;

  while width < total {
    let mut prev = ptr::from_mut_ref(&mut sentinel);
    let mut curr = ptr::as_ref(prev).next;

    while let Some(first) = curr {
      let second = split_after(first, width);

      let rest = match second {
        Some(s) => split_after(s, width),
        None => None,
      };

      ptr::as_mut_ref(prev).next = merge(Some(first), second);

      while let Some(n) = ptr::as_ref(prev).next {
        prev = n;
      }

      curr = rest;
    }

    width = width << 1;
  }

  sentinel.next
}
