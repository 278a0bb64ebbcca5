/*!

A type hierarchy is declared as a base/derived table: named type descriptors
plus directed edges from each derived type to its direct bases. The subtype
relation induced by those edges relates two descriptors when one is the same
as, or a transitively reachable base of, the other. Any two descriptors are
either so related in exactly one direction, or equal, or incomparable.
Descriptors in unrelated components (or sibling branches of a diamond) are
incomparable, so the relation is a partial order, not a total one.

## Lifecycle and Ownership

Declaration happens once, through a [`HierarchyBuilder`]: intern names into
[`TypeDescriptor`]s, record direct-base edges, then call
[`HierarchyBuilder::build`]. Building consumes the table and produces a
[`SubtypeRelation`], which is immutable for its entire lifetime. Queries
never mutate it, so it can be shared freely across concurrent
linearizations. There is no way to remove or relink an edge after `build`;
declare a new hierarchy instead.

## Computing the Closure of the Subtype Relation

Edges are declared as *direct* bases only. The relation the engine needs is
the smallest reflexive, transitively closed relation containing those edges,
so `build` computes the closure up front rather than chasing edges per
query. Descriptors are processed in an order in which every base precedes
all of its derived types: each descriptor starts with an unresolved-base
count, the descriptors with no bases are ready immediately, and resolving a
descriptor decrements the count of everything derived from it. A
descriptor's ancestor set is then itself plus the union of its direct
bases' ancestor sets, each already complete by the time it is needed.

A malformed table can declare a cycle (A a base of B, B a base of C, C a
base of A). Such a table admits no resolution order: when the work queue
runs dry with descriptors still unresolved, the pigeonhole principle says
some descriptor is waiting on itself, and `build` reports
[`HierarchyError::CycleDetected`] naming one of the waiting descriptors.

## Runtime Queries

`SubtypeRelation::is_ancestor(u, v)` is a single bit test: each descriptor
carries a dense index assigned at interning time, and the closure stores one
`NatSet` of ancestor indices per descriptor. Reflexivity holds by
construction because every descriptor's set contains its own index.

*/

pub mod builder;
pub mod collection;
pub mod descriptor;
pub mod relation;
pub(crate) mod hierarchy_error;

pub use builder::HierarchyBuilder;
pub use collection::DescriptorCollection;
pub use descriptor::TypeDescriptor;
pub use hierarchy_error::HierarchyError;
pub use relation::SubtypeRelation;
