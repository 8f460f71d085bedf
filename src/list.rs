//! Safe owners around raw list heads: [`List`] for exclusively-owned
//! acyclic lists, and the test-oriented builders [`CycleList`] and
//! [`SharedPair`] for wirings (cycles, shared suffixes) that an owning
//! `next` chain cannot represent. The builders keep a side table of every
//! node they allocate, so dropping them frees each node exactly once no
//! matter how the links were rewired.

use alloc::vec::Vec;
use core::fmt;
use core::mem::ManuallyDrop;
use core::ptr::NonNull;

use crate::Link;
use crate::Node;
use crate::ptr;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE DEFINITIONS                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// An exclusively-owned acyclic singly-linked list.
///
/// Wraps the raw head and exposes every algorithm in the crate as a safe
/// method. Dropping the list walks it and frees every node.

pub struct List(Link);

unsafe impl Send for List { }

unsafe impl Sync for List { }

/// A list built from values plus an optional cycle entry index.
///
/// With `entry` of `None` the list is a plain chain; with `Some(i)` the
/// last node's `next` points back at node `i`, which breaks the owning
/// chain, so the nodes are owned through a side table instead of through
/// their links.

pub struct CycleList {
  nodes: Vec<NonNull<Node>>,
}

/// Two lists wired to share a common suffix by node identity.
///
/// Built from two distinct prefixes and one shared suffix; both tails are
/// wired into the same suffix head (the junction). With an empty suffix
/// the two lists are fully disjoint. As with [`CycleList`], nodes are
/// owned through a side table because the suffix has two predecessors.

pub struct SharedPair {
  nodes: Vec<NonNull<Node>>,
  head_a: Link,
  head_b: Link,
  junction: Link,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Allocates a chain of nodes for `values`, records each node in `nodes`,
/// and returns the chain's head and tail.

fn chain(values: &[i64], nodes: &mut Vec<NonNull<Node>>) -> (Link, Link) {
  let mut head: Link = None;
  let mut tail: Link = None;

  for &val in values {
    let node = ptr::alloc(Node::new(val));
    nodes.push(node);

    match tail {
      Some(t) => unsafe { ptr::as_mut_ref(t).next = Some(node) },
      None => head = Some(node),
    }

    tail = Some(node);
  }

  (head, tail)
}

/// Wires `suffix` behind `tail` and returns the combined head.

fn attach(head: Link, tail: Link, suffix: Link) -> Link {
  match tail {
    Some(t) => {
      unsafe { ptr::as_mut_ref(t).next = suffix };
      head
    }
    None => suffix,
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl List {
  /// The empty list.

  pub fn new() -> Self {
    Self(None)
  }

  /// Builds a list holding the values in order.

  pub fn from_slice(values: &[i64]) -> Self {
    let mut head: Link = None;
    let mut tail: Link = None;

    for &val in values {
      let node = ptr::alloc(Node::new(val));

      match tail {
        Some(t) => unsafe { ptr::as_mut_ref(t).next = Some(node) },
        None => head = Some(node),
      }

      tail = Some(node);
    }

    Self(head)
  }

  /// Walks the list and collects its values in order.

  pub fn to_vec(&self) -> Vec<i64> {
    let mut out = Vec::new();
    let mut p = self.0;

    while let Some(q) = p {
      let node = unsafe { ptr::as_ref(q) };
      out.push(node.val);
      p = node.next;
    }

    out
  }

  /// The number of nodes in the list.

  pub fn len(&self) -> usize {
    unsafe { crate::length(self.0) }
  }

  /// Whether the list has no nodes.

  pub fn is_empty(&self) -> bool {
    self.0.is_none()
  }

  /// Releases ownership of the nodes and returns the raw head.

  pub fn into_head(self) -> Link {
    let this = ManuallyDrop::new(self);
    this.0
  }

  /// Takes ownership of a raw head.
  ///
  /// # Safety
  ///
  /// `head` must be the head of a valid acyclic list whose nodes are not
  /// owned by anything else.

  pub unsafe fn from_head(head: Link) -> Self {
    Self(head)
  }

  /// Removes adjacent duplicate values; see [`dedup_sorted`](crate::dedup_sorted).

  pub fn dedup_sorted(&mut self) {
    self.0 = unsafe { crate::dedup_sorted(self.0) };
  }

  /// Recursive variant of [`List::dedup_sorted`].

  pub fn dedup_sorted_recursive(&mut self) {
    self.0 = unsafe { crate::dedup_sorted_recursive(self.0) };
  }

  /// Removes the first node holding `val`, if any.

  pub fn remove_first(&mut self, val: i64) {
    self.0 = unsafe { crate::remove_first(self.0, val) };
  }

  /// Removes every node holding `val`.

  pub fn remove_all(&mut self, val: i64) {
    self.0 = unsafe { crate::remove_all(self.0, val) };
  }

  /// Reverses the list in place.

  pub fn reverse(&mut self) {
    self.0 = unsafe { crate::reverse(self.0) };
  }

  /// Recursive variant of [`List::reverse`].

  pub fn reverse_recursive(&mut self) {
    self.0 = unsafe { crate::reverse_recursive(self.0) };
  }

  /// Merges two ascending lists into one; on equal values `self`'s node
  /// comes first.

  pub fn merge(self, other: List) -> List {
    let a = self.into_head();
    let b = other.into_head();
    unsafe { List::from_head(crate::merge(a, b)) }
  }

  /// Recursive variant of [`List::merge`], same tie-break.

  pub fn merge_recursive(self, other: List) -> List {
    let a = self.into_head();
    let b = other.into_head();
    unsafe { List::from_head(crate::merge_recursive(a, b)) }
  }

  /// Sorts the list ascending with top-down merge sort.

  pub fn sort_recursive(&mut self) {
    self.0 = unsafe { crate::sort_recursive(self.0) };
  }

  /// Sorts the list ascending with bottom-up merge sort.

  pub fn sort_iterative(&mut self) {
    self.0 = unsafe { crate::sort_iterative(self.0) };
  }

  /// Whether the value sequence is a palindrome. Consumes the list: the
  /// check rewires the back half in place and does not restore it.

  pub fn is_palindrome(self) -> bool {
    // The rewiring detaches nodes from the head, so snapshot the node set
    // first and free from the snapshot.
    let mut nodes = Vec::new();
    let mut p = self.0;

    while let Some(q) = p {
      nodes.push(q);
      p = unsafe { ptr::as_ref(q).next };
    }

    let head = self.into_head();
    let result = unsafe { crate::is_palindrome(head) };

    for q in nodes {
      unsafe { ptr::free(q) };
    }

    result
  }
}

impl Default for List {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for List {
  fn drop(&mut self) {
    let mut p = self.0;

    while let Some(q) = p {
      p = unsafe { ptr::as_ref(q).next };
      unsafe { ptr::free(q) };
    }
  }
}

impl fmt::Debug for List {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.to_vec()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// CycleList                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl CycleList {
  /// Builds a chain of `values` and, when `entry` is `Some(i)` with `i` in
  /// bounds, wires the last node's `next` back to node `i`.

  pub fn new(values: &[i64], entry: Option<usize>) -> Self {
    let mut nodes = Vec::with_capacity(values.len());
    let _ = chain(values, &mut nodes);

    if let (Some(i), Some(&last)) = (entry, nodes.last()) {
      if i < nodes.len() {
        unsafe { ptr::as_mut_ref(last).next = Some(nodes[i]) };
      }
    }

    Self { nodes }
  }

  /// The head node, or `None` for an empty list.

  pub fn head(&self) -> Link {
    self.nodes.first().copied()
  }

  /// The node at `index` in construction order, for identity assertions.

  pub fn node(&self, index: usize) -> Link {
    self.nodes.get(index).copied()
  }

  /// Runs Floyd's cycle detection over the list.

  pub fn has_cycle(&self) -> bool {
    unsafe { crate::has_cycle(self.head()) }
  }

  /// The cycle's entry node, or `None` for an acyclic list.

  pub fn cycle_entry(&self) -> Link {
    unsafe { crate::cycle_entry(self.head()) }
  }
}

impl Drop for CycleList {
  fn drop(&mut self) {
    for &q in &self.nodes {
      unsafe { ptr::free(q) };
    }
  }
}

impl fmt::Debug for CycleList {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("CycleList").field(&self.nodes.len()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SharedPair                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl SharedPair {
  /// Builds two lists from distinct prefixes, both ending in the same
  /// `shared` suffix. An empty `shared` yields two disjoint lists.

  pub fn new(prefix_a: &[i64], prefix_b: &[i64], shared: &[i64]) -> Self {
    let mut nodes = Vec::new();

    let (a_head, a_tail) = chain(prefix_a, &mut nodes);
    let (b_head, b_tail) = chain(prefix_b, &mut nodes);
    let (junction, _) = chain(shared, &mut nodes);

    let head_a = attach(a_head, a_tail, junction);
    let head_b = attach(b_head, b_tail, junction);

    Self { nodes, head_a, head_b, junction }
  }

  /// The first list's head.

  pub fn head_a(&self) -> Link {
    self.head_a
  }

  /// The second list's head.

  pub fn head_b(&self) -> Link {
    self.head_b
  }

  /// The shared suffix's head, or `None` for disjoint lists.

  pub fn junction(&self) -> Link {
    self.junction
  }

  /// Runs two-pointer intersection detection over the pair.

  pub fn intersection(&self) -> Link {
    unsafe { crate::intersection(self.head_a, self.head_b) }
  }
}

impl Drop for SharedPair {
  fn drop(&mut self) {
    for &q in &self.nodes {
      unsafe { ptr::free(q) };
    }
  }
}

impl fmt::Debug for SharedPair {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("SharedPair").field(&self.nodes.len()).finish()
  }
}
