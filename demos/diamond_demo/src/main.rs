use lineage::{
  api::{walk_chain, TaggedInstance},
  find_ancestors,
  HierarchyBuilder,
  TypeList,
};

/*
=================================================================
                                    F
                                   / \
     A                            H   \
    / \                          / \   \
   B   C                        I   J   G
  /   / \                        \ /   / \
 T   D   E                        K   L   Z
================================================================= */

fn banner(title: &str) {
  println!("{}", "=".repeat(64));
  println!("  {}", title);
  println!("{}", "=".repeat(64));
}

fn main() {
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

  let relation = builder.build().expect("the demonstration hierarchy is acyclic");

  // Arbitrary order, duplicates included.
  let registry: TypeList = [
    &i, &c, &z, &g, &d, &f, &l, &c, &i, &a, &t, &b, &j, &k, &h, &e, &e,
  ]
      .into_iter()
      .cloned()
      .collect();

  banner("ancestors of D");
  let d_chain    = find_ancestors(&registry, &d, &relation).expect("D is in the registry");
  let d_instance = TaggedInstance::new(d.clone());
  walk_chain(&d_chain, &d_instance, &relation, |step| {
    println!("base = {}", step.name);
  });

  println!();

  banner("ancestors of K");
  let k_chain    = find_ancestors(&registry, &k, &relation).expect("K is in the registry");
  let k_instance = TaggedInstance::new(k.clone());
  walk_chain(&k_chain, &k_instance, &relation, |step| {
    println!("base = {}", step.name);
  });
}
