//! Pattern 1: Runtime Polymorphism
//! Example: Trait Objects and Dynamic Dispatch
//!
//! Run with: cargo run --example p1_dynamic_dispatch

use colored::Colorize;
use polymorphism_patterns::dynamic::{describe, Animal, Cat};

// A second implementor, local to the lesson, to make the collection mixed.
struct Dog;

impl Animal for Dog {
    fn name(&self) -> String {
        "dog".to_string()
    }

    fn eats(&self) -> String {
        "meat and bones".to_string()
    }
}

fn main() {
    // Usage: the concrete type is erased behind the interface; every call
    // goes through the vtable.
    println!("=== Single Trait Object ===");
    let animal: Box<dyn Animal> = Box::new(Cat);
    println!("{}", describe(animal.as_ref()));

    println!("\n=== Heterogeneous Collection ===");
    let animals: Vec<Box<dyn Animal>> = vec![Box::new(Cat), Box::new(Dog)];
    for animal in &animals {
        println!("{}", describe(animal.as_ref()));
    }

    // The collection can grow with types chosen at run time.
    println!("\n=== Dynamic Growth ===");
    let mut pen: Vec<Box<dyn Animal>> = Vec::new();
    pen.push(Box::new(Dog));
    println!("Added a dog, count: {}", pen.len());
    pen.push(Box::new(Cat));
    println!("Added a cat, count: {}", pen.len());

    println!("\n=== Key Points ===");
    println!("- One call site serves every implementor via the vtable");
    println!("- The concrete type can be picked at run time");
    println!("- Mixed concrete types share a single collection");
    println!("{}", "Pattern 1 complete".green());
}
