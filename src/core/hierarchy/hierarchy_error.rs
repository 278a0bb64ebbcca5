/*!

When closing the subtype relation, a base/derived table whose edges form a
cycle is an error condition.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::core::hierarchy::descriptor::TypeDescriptor;

pub enum HierarchyError {
  CycleDetected {
    problem: TypeDescriptor
  }
}

impl Display for HierarchyError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      HierarchyError::CycleDetected { problem } => {
        write!(
          f,
          "the declared base/derived edges reaching type \"{}\" could not be ordered base-first due to a cycle.",
          problem
        )
      } // end `HierarchyError::CycleDetected` branch

    } // end match on `HierarchyError`
  }
}

impl Debug for HierarchyError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for HierarchyError {}
