//! Pattern 1: runtime polymorphism through trait objects.
//!
//! The contract is an object-safe trait. Callers hold the concrete value
//! behind a `Box<dyn Animal>` and every call is resolved through the vtable
//! at run time, so one call site serves every implementor, including ones
//! that do not exist yet.

/// An entity with a name and a diet, resolved at run time.
///
/// Both accessors are pure: same instance, same answer, every call.
pub trait Animal {
    fn name(&self) -> String;
    fn eats(&self) -> String;
}

/// The one concrete animal of this family.
pub struct Cat;

impl Animal for Cat {
    fn name(&self) -> String {
        "cat".to_string()
    }

    fn eats(&self) -> String {
        "delicious mice".to_string()
    }
}

/// Builds the sentence for any animal without knowing its concrete type.
/// The two accessor calls inside go through the vtable.
pub fn describe(animal: &dyn Animal) -> String {
    format!("A {} eats {}", animal.name(), animal.eats())
}
