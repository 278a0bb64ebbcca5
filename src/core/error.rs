/*!

Error kinds surfaced by the sequence operations and the linearizer. All of
them indicate a programmer or configuration error, so callers get them
immediately rather than a silently defaulted result; retrying without
changing the inputs reproduces the identical failure.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::core::hierarchy::TypeDescriptor;

pub enum LinearizeError {
  /// A selection or `pop_front` was attempted on an empty sequence.
  EmptySequence,
  /// Indexed access past the end of a sequence.
  IndexOutOfRange {
    index: usize,
    len  : usize
  },
  /// No registry entry is an ancestor-or-self of the target. Either the
  /// target is absent from the registry or the relation is inconsistent.
  TargetNotInRegistry {
    target: TypeDescriptor
  }
}

impl Display for LinearizeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      LinearizeError::EmptySequence => {
        write!(f, "an empty sequence has no first element")
      }

      LinearizeError::IndexOutOfRange { index, len } => {
        write!(f, "index {} is out of range for a sequence of length {}", index, len)
      }

      LinearizeError::TargetNotInRegistry { target } => {
        write!(
          f,
          "no registry entry is an ancestor of the target type \"{}\"; the target is absent or the relation is inconsistent",
          target
        )
      }

    } // end match on `LinearizeError`
  }
}

impl Debug for LinearizeError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for LinearizeError {}
