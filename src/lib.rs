/*!

`lineage` computes, for a designated target type embedded in a
multiple-inheritance class graph, the ordered chain of its ancestors, from the
most base (root) type down to the target itself. The input is an unordered,
possibly duplicate-laden registry of type descriptors together with a pairwise
subtype relation; the output is a deduplicated, topologically valid sequence.

The crate is layered the same way the engine is:

 - `core::hierarchy` declares types, interns their names, and closes the
   subtype relation once into an immutable `SubtypeRelation`.
 - `core::type_list` is the persistent ordered sequence the algorithm
   consumes and produces.
 - `core::linearize` is the linearization algorithm itself.
 - `api::walker` steps a finished chain over a live tagged value.

*/

pub mod abstractions;
pub mod api;
pub mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};
pub use crate::core::{
  hierarchy::{
    HierarchyBuilder,
    HierarchyError,
    SubtypeRelation,
    TypeDescriptor,
  },
  linearize::find_ancestors,
  LinearizeError,
  TypeList,
};
