use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::abstractions::IString;
use crate::core::hierarchy::descriptor::TypeDescriptor;

/// A set of unique type descriptors with helper methods for creating new
/// descriptors. Each distinct name is interned once and assigned the next
/// dense index in declaration order.
#[derive(Default)]
pub struct DescriptorCollection {
  by_name    : HashMap<IString, u32>,
  descriptors: Vec<TypeDescriptor>,
}

impl DescriptorCollection {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get_or_create(&mut self, name: IString) -> TypeDescriptor {
    match self.by_name.entry(name.clone()) {
      Entry::Occupied(entry) => self.descriptors[*entry.get() as usize].clone(),
      Entry::Vacant(entry) => {
        let index      = self.descriptors.len() as u32;
        let descriptor = TypeDescriptor::new(name, index);
        entry.insert(index);
        self.descriptors.push(descriptor.clone());
        descriptor
      }
    }
  }

  /// Looks up an already-declared descriptor without creating one.
  pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
    self.by_name
        .get(&IString::from(name))
        .map(|&index| &self.descriptors[index as usize])
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.descriptors.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.descriptors.is_empty()
  }

  /// Iterates descriptors in declaration (index) order.
  pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
    self.descriptors.iter()
  }
}
