//! # Polymorphism Patterns in Rust
//!
//! The same contract, an animal with a `name()` and an `eats()`, rendered
//! three independent ways, one per dispatch style:
//!
//! ## Pattern 1: Runtime Polymorphism (`dynamic`)
//! - Object-safe trait held behind `Box<dyn Animal>`
//! - Calls resolved through the vtable at run time
//! - Enables heterogeneous collections (see `menagerie`)
//!
//! ## Pattern 2: Compile-Time Polymorphism (`constrained`)
//! - Trait bounds and `impl Trait`
//! - Monomorphized per concrete type; no indirection
//! - Non-conforming types are rejected at build time
//!
//! ## Pattern 3: Static Polymorphism (`static_poly`)
//! - Generic base `Animal<T>` delegating to its concrete `Species`
//! - Resolved at compile time; `Animal<Cat>` and `Animal<Dog>` are
//!   distinct types
//!
//! The modules are deliberately self-contained: each declares its own
//! contract and concrete animals so it can be read, and taught, in
//! isolation.
//!
//! Run examples with: `cargo run --example <name>`

pub mod constrained;
pub mod dynamic;
pub mod menagerie;
pub mod static_poly;

/// Builds one animal per pattern and returns the sentence each produces.
/// Every line is `A cat eats delicious mice`; only the dispatch mechanism
/// differs.
pub fn showcase() -> [String; 3] {
    // Runtime: single-owner handle, used only through the abstract interface.
    let cat_dynamic: Box<dyn dynamic::Animal> = Box::new(dynamic::Cat);

    // Compile-time: a plain value, used through the bound.
    let cat_generic = constrained::Cat;

    // Static: single-owner handle typed by the concrete species.
    let cat_static: Box<static_poly::Animal<static_poly::Cat>> =
        Box::new(static_poly::Animal::new(static_poly::Cat));

    [
        dynamic::describe(cat_dynamic.as_ref()),
        constrained::describe(&cat_generic),
        format!("A {} eats {}", cat_static.name(), cat_static.eats()),
    ]
}
