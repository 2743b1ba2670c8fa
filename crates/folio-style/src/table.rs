//! Per-style storage of resolved values.

use std::cell::OnceCell;
use std::rc::Rc;

use strum::EnumCount;

use crate::property::Property;
use crate::value::ResolvedValue;

/// A fixed-size slot array holding at most one resolved value per property.
///
/// Slots filled from the cascade are set while the owning style is being
/// built. Every other slot is filled at most once, on first resolution, and
/// then never changes. The cells are not thread-safe; a table belongs to the
/// thread that renders its document.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    slots: Box<[OnceCell<Rc<ResolvedValue>>]>,
    /// Slots filled from the cascade rather than by resolution.
    declared: Box<[bool]>,
    /// Slots whose cascade said `initial`: resolution must skip inheritance.
    needs_initial: Box<[bool]>,
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyTable {
    /// A table with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: (0..Property::COUNT).map(|_| OnceCell::new()).collect(),
            declared: vec![false; Property::COUNT].into_boxed_slice(),
            needs_initial: vec![false; Property::COUNT].into_boxed_slice(),
        }
    }

    /// A copy holding only what the cascade declared. Memoized inherited and
    /// initial values are left out, since they may depend on declarations
    /// that a re-styled copy replaces.
    #[must_use]
    pub fn declared_values(&self) -> Self {
        let slots = self
            .slots
            .iter()
            .zip(self.declared.iter())
            .map(|(slot, &declared)| if declared { slot.clone() } else { OnceCell::new() })
            .collect();
        Self {
            slots,
            declared: self.declared.clone(),
            needs_initial: self.needs_initial.clone(),
        }
    }

    /// The value stored for `property`, if any.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<&Rc<ResolvedValue>> {
        self.slots[property.id()].get()
    }

    /// Whether the cascade reset `property` with the `initial` keyword.
    #[must_use]
    pub fn needs_initial(&self, property: Property) -> bool {
        self.needs_initial[property.id()]
    }

    /// Number of slots currently holding a value.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Store a declared value, replacing whatever an earlier declaration put there.
    pub fn declare(&mut self, property: Property, value: Rc<ResolvedValue>) {
        self.slots[property.id()] = OnceCell::from(value);
        self.declared[property.id()] = true;
        self.needs_initial[property.id()] = false;
    }

    /// Record an explicit `initial` declaration.
    pub fn declare_initial(&mut self, property: Property) {
        self.slots[property.id()] = OnceCell::new();
        self.declared[property.id()] = false;
        self.needs_initial[property.id()] = true;
    }

    /// Fill an empty slot with a resolution result and return what the slot
    /// now holds.
    pub(crate) fn memoize(&self, property: Property, value: Rc<ResolvedValue>) -> Rc<ResolvedValue> {
        Rc::clone(self.slots[property.id()].get_or_init(|| value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Ident;

    #[test]
    fn test_later_declaration_overwrites_earlier() {
        let mut table = PropertyTable::new();
        table.declare(Property::Display, Rc::new(ResolvedValue::Ident(Ident::Block)));
        table.declare(Property::Display, Rc::new(ResolvedValue::Ident(Ident::Inline)));
        assert_eq!(
            table.get(Property::Display).map(|value| value.as_ident()),
            Some(Some(Ident::Inline))
        );
        assert_eq!(table.populated(), 1);
    }

    #[test]
    fn test_initial_declaration_clears_slot() {
        let mut table = PropertyTable::new();
        table.declare(Property::Color, Rc::new(ResolvedValue::Number(1.0)));
        table.declare_initial(Property::Color);
        assert!(table.get(Property::Color).is_none());
        assert!(table.needs_initial(Property::Color));
    }

    #[test]
    fn test_memoize_keeps_first_value() {
        let table = PropertyTable::new();
        let first = Rc::new(ResolvedValue::Number(1.0));
        let stored = table.memoize(Property::Opacity, Rc::clone(&first));
        let again = table.memoize(Property::Opacity, Rc::new(ResolvedValue::Number(2.0)));
        assert!(Rc::ptr_eq(&stored, &first));
        assert!(Rc::ptr_eq(&again, &first));
    }

    #[test]
    fn test_declared_values_drop_memoized_slots() {
        let mut table = PropertyTable::new();
        table.declare(Property::Display, Rc::new(ResolvedValue::Ident(Ident::Block)));
        table.declare_initial(Property::Color);
        let _ = table.memoize(Property::Opacity, Rc::new(ResolvedValue::Number(1.0)));

        let copy = table.declared_values();
        assert_eq!(copy.populated(), 1);
        assert!(copy.get(Property::Display).is_some());
        assert!(copy.get(Property::Opacity).is_none());
        assert!(copy.needs_initial(Property::Color));
    }
}
