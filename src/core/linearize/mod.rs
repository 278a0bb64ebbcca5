/*!

Linearization: converting the inheritance DAG implicit in a registry of type
descriptors into a single deterministic, deduplicated, root-to-target
sequence.

The registry is an arbitrary-order, duplicate-tolerant list of descriptors.
[`find_ancestors`] first restricts it to the entries that are
ancestors-or-self of the target, then repeatedly selects the most ancestral
remaining candidate, appends it to the output, and removes every occurrence
of it. The target itself always survives to the final round (it is the
unique candidate that is an ancestor of nothing else remaining), so a
successful chain always ends with the target.

## Determinism and the Tie-Break

When a hierarchy has several incomparable ancestors at the same generation
(the two middle legs of a diamond, or independent roots), no canonical order
exists between them. [`most_ancestral`] resolves such ties by its reduction
order alone: candidates earlier in the registry win only when the relation
explicitly confirms them against the winner of the remainder, so the final
order of incomparable descriptors is a deterministic function of registry
insertion order. The reduction order is load-bearing; see the function's
documentation.

*/

use crate::{
  core::{
    error::LinearizeError,
    hierarchy::{SubtypeRelation, TypeDescriptor},
    type_list::TypeList
  },
  trace,
};

#[cfg(test)]
mod tests;

/// Restricts `registry` to the entries that are ancestors-or-self of
/// `target`, preserving order. Duplicate occurrences are kept; collapsing
/// them is the selection loop's job, not the filter's.
pub fn restrict_to_ancestors_or_self(
  registry: &TypeList,
  target  : &TypeDescriptor,
  relation: &SubtypeRelation,
) -> TypeList {
  registry.filter(|entry| relation.is_ancestor(entry, target))
}

/// Selects one most-ancestral element of a non-empty `candidates` list.
///
/// This is a right-associative reduction, not a maximum under a total order:
/// the winner of the tail is computed first, and the head is preferred only
/// when the relation explicitly confirms the head is an ancestor-or-self of
/// that winner. When neither direction holds, the tail winner stands. A left
/// fold (or a left-to-right scan tracking a best-so-far) resolves
/// incomparable candidates differently and changes the emitted order on
/// diamond and multi-root inputs. The reduction order is the whole of the
/// tie-break contract, so it must stay exactly as written.
pub fn most_ancestral(
  candidates: &TypeList,
  relation  : &SubtypeRelation,
) -> Result<TypeDescriptor, LinearizeError> {
  if candidates.is_empty() {
    return Err(LinearizeError::EmptySequence);
  }
  if candidates.len() == 1 {
    return Ok(candidates.at(0)?.clone());
  }

  let first       = candidates.at(0)?.clone();
  let tail_winner = most_ancestral(&candidates.pop_front()?, relation)?;
  if relation.is_ancestor(&first, &tail_winner) {
    Ok(first)
  } else {
    Ok(tail_winner)
  }
}

/// Computes the ancestor chain of `target` within `registry`: an ordered,
/// duplicate-free list running from a root ancestor down to `target` itself.
///
/// Fails with `TargetNotInRegistry` when no registry entry is an
/// ancestor-or-self of the target. A missing target is a configuration
/// error, never an empty chain.
pub fn find_ancestors(
  registry: &TypeList,
  target  : &TypeDescriptor,
  relation: &SubtypeRelation,
) -> Result<TypeList, LinearizeError> {
  let mut candidates = restrict_to_ancestors_or_self(registry, target, relation);
  if candidates.is_empty() {
    return Err(LinearizeError::TargetNotInRegistry { target: target.clone() });
  }
  trace!(3, "linearizing {} over {} candidates", target, candidates.len());

  let mut chain = TypeList::new();
  while !candidates.is_empty() {
    let winner = most_ancestral(&candidates, relation)?;
    trace!(3, "selection round winner: {}", winner);
    chain = chain.push_back(winner.clone());
    // Every occurrence of the winner is removed, not just one, so each
    // round strictly shrinks the candidate list and the loop terminates.
    candidates = candidates.filter(|entry| *entry != winner);
  }

  Ok(chain)
}
