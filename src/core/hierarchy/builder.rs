/*!

The base/derived table a hierarchy is declared through, and the one-time
closure computation that turns it into a [`SubtypeRelation`].

See the module level documentation for the
[`hierarchy` module](crate::core::hierarchy) for how the closure is computed
and how cycles in a malformed table are detected.

*/

use std::collections::VecDeque;

use crate::{
  abstractions::{IString, NatSet},
  core::hierarchy::{
    collection::DescriptorCollection,
    descriptor::TypeDescriptor,
    hierarchy_error::HierarchyError,
    relation::SubtypeRelation
  },
  debug,
  warning,
};

#[derive(Default)]
pub struct HierarchyBuilder {
  descriptors : DescriptorCollection,
  /// `direct_bases[i]` holds the indices of the declared direct bases of the
  /// descriptor with index `i`. Parallel to the collection's index order.
  direct_bases: Vec<Vec<u32>>,
}

impl HierarchyBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Interns `name`, declaring a type with no bases if it is new. Returns the
  /// same descriptor for every declaration of the same name.
  pub fn declare(&mut self, name: &str) -> TypeDescriptor {
    let descriptor = self.descriptors.get_or_create(IString::from(name));
    if descriptor.index() == self.direct_bases.len() {
      self.direct_bases.push(Vec::new());
    }
    descriptor
  }

  /// Declares a type together with its direct bases, `class K : public I, public J`
  /// style. Bases must already be declared.
  pub fn declare_derived(&mut self, name: &str, bases: &[&TypeDescriptor]) -> TypeDescriptor {
    let derived = self.declare(name);
    for base in bases {
      self.insert_base(&derived, base);
    }
    derived
  }

  /// Records `base` as a direct base of `derived`. Declaring the same edge
  /// twice is a no-op.
  pub fn insert_base(&mut self, derived: &TypeDescriptor, base: &TypeDescriptor) {
    let bases      = &mut self.direct_bases[derived.index()];
    let base_index = base.index() as u32;
    if !bases.contains(&base_index) {
      bases.push(base_index);
    }
  }

  #[inline(always)]
  pub fn descriptor_count(&self) -> usize {
    self.descriptors.len()
  }

  /// Consumes the table and computes the reflexive-transitive closure of the
  /// declared edges.
  ///
  /// Descriptors are processed base-first: each starts with an
  /// unresolved-base count, and resolving a descriptor decrements the count
  /// of everything derived from it. A descriptor's ancestor set is itself
  /// plus the union of its direct bases' ancestor sets, which are complete by
  /// the time the descriptor is processed. If the work queue runs dry while
  /// descriptors remain unresolved, the declared edges contain a cycle.
  pub fn build(self) -> Result<SubtypeRelation, HierarchyError> {
    let count = self.direct_bases.len();

    // Reverse adjacency and per-descriptor unresolved-base counts.
    let mut derived_of           : Vec<Vec<u32>> = vec![Vec::new(); count];
    let mut unresolved_base_count: Vec<usize>    = vec![0; count];
    for (derived, bases) in self.direct_bases.iter().enumerate() {
      unresolved_base_count[derived] = bases.len();
      for &base in bases.iter() {
        derived_of[base as usize].push(derived as u32);
      }
    }

    let mut ancestor_sets: Vec<NatSet> = vec![NatSet::new(); count];
    let mut resolved_count             = 0usize;

    // Seed the queue with the root descriptors, in declaration order.
    let mut ready: VecDeque<usize> =
        (0..count).filter(|&index| unresolved_base_count[index] == 0).collect();

    while let Some(index) = ready.pop_front() {
      resolved_count += 1;

      let mut ancestors = NatSet::new();
      ancestors.insert(index);
      for &base in self.direct_bases[index].iter() {
        ancestors.union_in_place(&ancestor_sets[base as usize]);
      }
      ancestor_sets[index] = ancestors;

      for &derived in derived_of[index].iter() {
        unresolved_base_count[derived as usize] -= 1;
        if unresolved_base_count[derived as usize] == 0 {
          ready.push_back(derived as usize);
        }
      }
    }

    if resolved_count != count {
      // Pigeonhole: something is still waiting on one of its own descendants.
      for descriptor in self.descriptors.iter() {
        if unresolved_base_count[descriptor.index()] > 0 {
          let error = HierarchyError::CycleDetected { problem: descriptor.clone() };
          warning!(1, "{}", error);
          return Err(error);
        }
      }
    }

    debug!(2, "closed the subtype relation over {} type descriptors", count);
    Ok(SubtypeRelation::new(ancestor_sets))
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  /// A -> B -> C single-inheritance chain.
  fn chain() -> (TypeDescriptor, TypeDescriptor, TypeDescriptor, SubtypeRelation) {
    let mut builder = HierarchyBuilder::new();
    let a = builder.declare("A");
    let b = builder.declare_derived("B", &[&a]);
    let c = builder.declare_derived("C", &[&b]);
    let relation = builder.build().unwrap();
    (a, b, c, relation)
  }

  #[test]
  fn relation_is_reflexive() {
    let (a, b, c, relation) = chain();
    for descriptor in [&a, &b, &c] {
      assert!(relation.is_ancestor(descriptor, descriptor));
    }
  }

  #[test]
  fn relation_is_transitively_closed() {
    let (a, b, c, relation) = chain();
    assert!(relation.is_ancestor(&a, &b));
    assert!(relation.is_ancestor(&b, &c));
    // Never declared directly; implied by transitivity.
    assert!(relation.is_ancestor(&a, &c));
    // The relation is not symmetric.
    assert!(!relation.is_ancestor(&c, &a));
  }

  #[test]
  fn unrelated_descriptors_are_incomparable() {
    let mut builder = HierarchyBuilder::new();
    let a = builder.declare("A");
    let b = builder.declare_derived("B", &[&a]);
    let x = builder.declare("X");
    let relation = builder.build().unwrap();

    assert!(!relation.is_ancestor(&b, &x));
    assert!(!relation.is_ancestor(&x, &b));
    assert_eq!(relation.descriptor_count(), 3);
  }

  #[test]
  fn diamond_closure_reaches_both_branches() {
    let mut builder = HierarchyBuilder::new();
    let f = builder.declare("F");
    let h = builder.declare_derived("H", &[&f]);
    let i = builder.declare_derived("I", &[&h]);
    let j = builder.declare_derived("J", &[&h]);
    let k = builder.declare_derived("K", &[&i, &j]);
    let relation = builder.build().unwrap();

    for base in [&f, &h, &i, &j, &k] {
      assert!(relation.is_ancestor(base, &k));
    }
    // The sibling branches stay incomparable.
    assert!(!relation.is_ancestor(&i, &j));
    assert!(!relation.is_ancestor(&j, &i));
  }

  #[test]
  fn repeated_edges_are_collapsed() {
    let mut builder = HierarchyBuilder::new();
    let a = builder.declare("A");
    let b = builder.declare_derived("B", &[&a, &a]);
    builder.insert_base(&b, &a);
    assert_eq!(builder.descriptor_count(), 2);
    let relation = builder.build().unwrap();

    assert!(relation.is_ancestor(&a, &b));
  }

  #[test]
  fn cyclic_declarations_are_rejected() {
    let mut builder = HierarchyBuilder::new();
    let a = builder.declare("A");
    let b = builder.declare_derived("B", &[&a]);
    let c = builder.declare_derived("C", &[&b]);
    builder.insert_base(&a, &c);

    let result = builder.build();
    assert!(matches!(result, Err(HierarchyError::CycleDetected { .. })));
  }
}
