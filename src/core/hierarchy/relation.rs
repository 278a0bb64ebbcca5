/*!

The closed subtype relation. A `SubtypeRelation` is produced once by
[`HierarchyBuilder::build`](crate::core::hierarchy::HierarchyBuilder::build)
and is immutable thereafter: build it once, pass it everywhere, never mutate
it mid-query. The linearizer only ever consumes it through
[`is_ancestor`](SubtypeRelation::is_ancestor).

*/

use crate::abstractions::NatSet;
use crate::core::hierarchy::descriptor::TypeDescriptor;

pub struct SubtypeRelation {
  /// `ancestor_sets[i]` holds the indices of the ancestors-or-self of the
  /// descriptor with index `i`, the reflexive-transitive closure of its
  /// declared direct bases.
  ancestor_sets: Vec<NatSet>,
}

impl SubtypeRelation {
  pub(crate) fn new(ancestor_sets: Vec<NatSet>) -> Self {
    SubtypeRelation { ancestor_sets }
  }

  /// True when `base` is the same as, or a proper (possibly transitive) base
  /// of, `derived`. Reflexive by construction; false in both directions for
  /// incomparable descriptors.
  pub fn is_ancestor(&self, base: &TypeDescriptor, derived: &TypeDescriptor) -> bool {
    match self.ancestor_sets.get(derived.index()) {
      Some(ancestors) => ancestors.contains(base.index()),
      None => false,
    }
  }

  /// The number of descriptors the relation was closed over.
  #[inline(always)]
  pub fn descriptor_count(&self) -> usize {
    self.ancestor_sets.len()
  }
}
