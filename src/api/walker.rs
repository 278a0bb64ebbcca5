/*!

Walking a computed ancestor chain over a live value.

The walker is a boundary collaborator of the engine: it consumes a finished
chain (ordered root-to-target, duplicate-free, every element validated
against the relation) together with a value tagged with its concrete type.
It steps the chain from first to last and, before invoking the per-step
callback, checks that the step's type is an ancestor-or-self of the value's
concrete type. That check is the runtime stand-in for reinterpreting the
value's address as a view of the step's type, and a step that fails it
stops the walk.

*/

use crate::core::{
  hierarchy::{SubtypeRelation, TypeDescriptor},
  type_list::TypeList
};

/// A polymorphic value tagged with its concrete type.
pub trait Tagged {
  fn concrete_type(&self) -> &TypeDescriptor;
}

/// The simplest `Tagged` value: the tag alone, for callers that only care
/// about the walk itself.
pub struct TaggedInstance {
  concrete: TypeDescriptor,
}

impl TaggedInstance {
  pub fn new(concrete: TypeDescriptor) -> Self {
    TaggedInstance { concrete }
  }
}

impl Tagged for TaggedInstance {
  fn concrete_type(&self) -> &TypeDescriptor {
    &self.concrete
  }
}

/// Steps `chain` from first (root) to last (target), invoking `visit` for
/// each element the relation confirms is an ancestor-or-self of the
/// instance's concrete type, and stopping at the first element that is not.
/// Returns the number of elements visited.
pub fn walk_chain<V>(
  chain    : &TypeList,
  instance : &dyn Tagged,
  relation : &SubtypeRelation,
  mut visit: V,
) -> usize
  where V: FnMut(&TypeDescriptor)
{
  let concrete    = instance.concrete_type();
  let mut visited = 0;

  for step in chain.iter() {
    if !relation.is_ancestor(step, concrete) {
      break;
    }
    visit(step);
    visited += 1;
  }

  visited
}
