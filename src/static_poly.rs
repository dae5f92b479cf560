//! Pattern 3: static polymorphism through a self-referential generic base.
//!
//! `Animal<T>` plays the role of a base type parameterized by its own
//! concrete implementer. The base holds no behavior: both accessors forward
//! to `T`'s methods of the same name, and the compiler resolves every call
//! statically. Each instantiation of the base is a distinct type, so
//! `Animal<Cat>` and `Animal<Dog>` cannot share a handle or a collection
//! without an extra abstraction layer.
//!
//! The [`Species`] bound is the pattern's safety net. Placed on the struct
//! itself, it rejects a malformed type where the base is named instead of
//! letting the failure surface later at some distant call site.

/// The methods a concrete species must supply for the base to forward to.
pub trait Species {
    fn name(&self) -> String;
    fn eats(&self) -> String;
}

/// Generic base: owns its species and delegates both accessors to it.
///
/// A type that is not a [`Species`] cannot instantiate the base at all:
///
/// ```compile_fail
/// use polymorphism_patterns::static_poly::Animal;
///
/// struct Stone; // has neither name() nor eats()
///
/// let rock = Animal::new(Stone);
/// ```
pub struct Animal<T: Species> {
    species: T,
}

impl<T: Species> Animal<T> {
    pub fn new(species: T) -> Self {
        Animal { species }
    }

    /// Forwards to the species' method of the same name.
    pub fn name(&self) -> String {
        self.species.name()
    }

    pub fn eats(&self) -> String {
        self.species.eats()
    }
}

pub struct Cat;

impl Species for Cat {
    fn name(&self) -> String {
        "cat".to_string()
    }

    fn eats(&self) -> String {
        "delicious mice".to_string()
    }
}

pub struct Dog;

impl Species for Dog {
    fn name(&self) -> String {
        "dog".to_string()
    }

    fn eats(&self) -> String {
        "meat and bones".to_string()
    }
}
