//! Pattern 2: Compile-Time Polymorphism
//! Example: Trait Bounds and impl Trait
//!
//! Run with: cargo run --example p2_trait_bounds

use colored::Colorize;
use polymorphism_patterns::constrained::{describe, hungry_cat, Cat};

// A type that satisfies nothing; it can exist but never enter describe().
struct Stone;

fn main() {
    // Usage: describe() is a template stamped out per concrete type; the
    // calls inside are direct, with no vtable.
    println!("=== Generic Call Site ===");
    let cat = Cat;
    println!("{}", describe(&cat));

    println!("\n=== Opaque Return Type ===");
    let animal = hungry_cat(); // "some Animal"; the concrete type is hidden
    println!("{}", describe(&animal));

    println!("\n=== Compile-Time Rejection ===");
    let _stone = Stone;
    // describe(&_stone); // Won't compile: `Stone` does not implement `Animal`
    println!("A type without name() and eats() never reaches run time");

    println!("\n=== Key Points ===");
    println!("- Each concrete type gets its own monomorphized copy");
    println!("- No indirection and no heap requirement");
    println!("- Contract violations are build failures, not runtime errors");
    println!("{}", "Pattern 2 complete".green());
}
