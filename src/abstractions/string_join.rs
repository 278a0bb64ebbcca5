use std::fmt::Display;

/// Join an iterator of items with a separator computed from the following
/// item, which doesn't exist in the stdlib. (C.f. `Vec::join(…)`)
///
/// ```
/// use lineage::abstractions::join_iter;
///
/// let iter = ["Hello", "World"].iter().cloned();
/// let joined = join_iter(iter, |_| ", ").collect::<String>();
/// assert_eq!(joined, "Hello, World");
/// ```
pub fn join_iter<T>(iter: impl Iterator<Item = T>, sep: impl Fn(&T) -> T)
                    -> impl Iterator<Item = T>
{
  let mut first = true;
  iter.flat_map(move |item| {
    let lead = if first { None } else { Some(sep(&item)) };
    first = false;
    lead.into_iter().chain(std::iter::once(item))
  })
}

/// Join a list of things that can be displayed as string with a given separator.
///
/// This is a convenience function that defers to `join_iter`.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_iter(iter.map(|t| t.to_string()), |_| sep.to_string()).collect::<String>()
}
