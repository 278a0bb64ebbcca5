/*!

Scenario tests for the linearizer, built over the two-component demonstration
hierarchy:

```txt
     A                            F
    / \                          / \
   B   C                        H   \
  /   / \                      / \   \
 T   D   E                    I   J   G
                                \ /   / \
                                 K   L   Z
```

`D` exercises the single-inheritance chain `A -> C -> D` with unrelated noise
in the registry; `K` exercises the diamond, whose incomparable middle legs
are ordered purely by registry insertion order.

*/

use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::core::{
  error::LinearizeError,
  hierarchy::{HierarchyBuilder, SubtypeRelation, TypeDescriptor},
  linearize::{find_ancestors, most_ancestral},
  type_list::TypeList
};

type Descriptors = HashMap<&'static str, TypeDescriptor>;

fn demo_hierarchy() -> (Descriptors, SubtypeRelation) {
  let mut builder = HierarchyBuilder::new();

  let a = builder.declare("A");
  let b = builder.declare_derived("B", &[&a]);
  let c = builder.declare_derived("C", &[&a]);
  let t = builder.declare_derived("T", &[&b]);
  let d = builder.declare_derived("D", &[&c]);
  let e = builder.declare_derived("E", &[&c]);

  let f = builder.declare("F");
  let g = builder.declare_derived("G", &[&f]);
  let l = builder.declare_derived("L", &[&g]);
  let z = builder.declare_derived("Z", &[&g]);
  let h = builder.declare_derived("H", &[&f]);
  let i = builder.declare_derived("I", &[&h]);
  let j = builder.declare_derived("J", &[&h]);
  let k = builder.declare_derived("K", &[&i, &j]);

  let relation = builder.build().unwrap();
  let descriptors = HashMap::from([
    ("A", a), ("B", b), ("C", c), ("T", t), ("D", d), ("E", e),
    ("F", f), ("G", g), ("L", l), ("Z", z), ("H", h), ("I", i),
    ("J", j), ("K", k),
  ]);
  (descriptors, relation)
}

fn list(descriptors: &Descriptors, names: &[&str]) -> TypeList {
  names.iter().map(|name| descriptors[name].clone()).collect()
}

/// The demonstration registry: arbitrary order, duplicates included.
fn demo_registry(descriptors: &Descriptors) -> TypeList {
  list(
    descriptors,
    &["I", "C", "Z", "G", "D", "F", "L", "C", "I", "A", "T", "B", "J", "K", "H", "E", "E"],
  )
}

#[test]
fn single_inheritance_chain_with_noise() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = demo_registry(&descriptors);

  let chain = find_ancestors(&registry, &descriptors["D"], &relation).unwrap();
  assert_eq!(chain, list(&descriptors, &["A", "C", "D"]));
}

#[test]
fn diamond_resolves_by_registry_order() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = demo_registry(&descriptors);

  let chain = find_ancestors(&registry, &descriptors["K"], &relation).unwrap();
  assert_eq!(chain, list(&descriptors, &["F", "H", "J", "I", "K"]));
}

#[test]
fn chain_ends_with_target() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = demo_registry(&descriptors);

  for name in ["A", "B", "C", "T", "D", "E", "F", "G", "L", "Z", "H", "I", "J", "K"] {
    let target = &descriptors[name];
    let chain  = find_ancestors(&registry, target, &relation).unwrap();
    assert!(!chain.is_empty());
    assert_eq!(chain.last(), Some(target));
  }
}

#[test]
fn chain_is_duplicate_free_and_sound() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = demo_registry(&descriptors);

  for name in ["D", "K", "E", "Z"] {
    let target = &descriptors[name];
    let chain  = find_ancestors(&registry, target, &relation).unwrap();

    // No duplicates, no matter how often an entry appeared in the registry.
    let mut seen = HashSet::new();
    for element in chain.iter() {
      assert!(seen.insert(element.clone()), "{} appears twice in {}", element, chain);
      // Soundness: every element is an ancestor-or-self of the target.
      assert!(relation.is_ancestor(element, target));
    }
  }
}

#[test]
fn earlier_elements_are_never_proper_descendants() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = demo_registry(&descriptors);

  let chain = find_ancestors(&registry, &descriptors["K"], &relation).unwrap();
  for i in 0..chain.len() {
    for j in (i + 1)..chain.len() {
      let (earlier, later) = (chain.at(i).unwrap(), chain.at(j).unwrap());
      // Root-first: a later element is never an ancestor of an earlier one.
      assert!(
        !relation.is_ancestor(later, earlier),
        "{} precedes its ancestor {} in {}",
        earlier,
        later,
        chain
      );
    }
  }
}

#[test]
fn selector_returns_the_root_of_a_linear_chain() {
  let (descriptors, relation) = demo_hierarchy();

  // A is a base of C is a base of D.
  let candidates = list(&descriptors, &["A", "C", "D"]);
  assert_eq!(most_ancestral(&candidates, &relation).unwrap(), descriptors["A"]);

  // Same chain presented in reverse order.
  let reversed = list(&descriptors, &["D", "C", "A"]);
  assert_eq!(most_ancestral(&reversed, &relation).unwrap(), descriptors["A"]);
}

#[test]
fn selector_rejects_an_empty_sequence() {
  let (_, relation) = demo_hierarchy();
  let result = most_ancestral(&TypeList::new(), &relation);
  assert!(matches!(result, Err(LinearizeError::EmptySequence)));
}

#[test]
fn absent_target_is_an_error_not_an_empty_chain() {
  let (descriptors, relation) = demo_hierarchy();

  // A registry drawn entirely from the F component has no ancestor of T.
  let registry = list(&descriptors, &["F", "H", "I", "J", "K"]);
  let result   = find_ancestors(&registry, &descriptors["T"], &relation);
  match result {
    Err(LinearizeError::TargetNotInRegistry { target }) => {
      assert_eq!(target, descriptors["T"]);
    }
    other => panic!("expected TargetNotInRegistry, got {:?}", other),
  }
}

#[test]
fn duplicate_occurrences_do_not_affect_the_chain() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = demo_registry(&descriptors);

  // Collapse duplicates to their first occurrence.
  let mut seen = HashSet::new();
  let collapsed: TypeList = registry
      .iter()
      .filter(|entry| seen.insert((*entry).clone()))
      .cloned()
      .collect();

  for name in ["D", "K"] {
    let target = &descriptors[name];
    assert_eq!(
      find_ancestors(&registry, target, &relation).unwrap(),
      find_ancestors(&collapsed, target, &relation).unwrap(),
    );
  }
}

#[test]
fn in_place_duplication_does_not_affect_the_chain() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = demo_registry(&descriptors);

  let expected_d = find_ancestors(&registry, &descriptors["D"], &relation).unwrap();
  let expected_k = find_ancestors(&registry, &descriptors["K"], &relation).unwrap();

  let mut rng = rand::thread_rng();
  for _ in 0..20 {
    // Duplicate a few randomly chosen entries immediately after themselves,
    // which changes multiplicity but not the interleaving of distinct names.
    let mut entries: Vec<TypeDescriptor> = registry.iter().cloned().collect();
    for _ in 0..rng.gen_range(1..=5) {
      let position = rng.gen_range(0..entries.len());
      let duplicate = entries[position].clone();
      entries.insert(position, duplicate);
    }
    let padded: TypeList = entries.into_iter().collect();

    assert_eq!(find_ancestors(&padded, &descriptors["D"], &relation).unwrap(), expected_d);
    assert_eq!(find_ancestors(&padded, &descriptors["K"], &relation).unwrap(), expected_k);
  }
}

#[test]
fn registry_containing_only_the_target_yields_the_singleton_chain() {
  let (descriptors, relation) = demo_hierarchy();
  let registry = list(&descriptors, &["K"]);

  let chain = find_ancestors(&registry, &descriptors["K"], &relation).unwrap();
  assert_eq!(chain, registry);
}
