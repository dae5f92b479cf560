//! Pattern 3: Static Polymorphism
//! Example: A Generic Base That Delegates to Its Species
//!
//! Run with: cargo run --example p3_static_delegation

use colored::Colorize;
use polymorphism_patterns::static_poly::{Animal, Cat, Dog};

// Animal<Cat> and Animal<Dog> are distinct types. Mixing them in one
// collection needs an extra abstraction layer; an enum is the cheapest one.
enum AnyAnimal {
    Cat(Animal<Cat>),
    Dog(Animal<Dog>),
}

impl AnyAnimal {
    fn sentence(&self) -> String {
        match self {
            AnyAnimal::Cat(cat) => format!("A {} eats {}", cat.name(), cat.eats()),
            AnyAnimal::Dog(dog) => format!("A {} eats {}", dog.name(), dog.eats()),
        }
    }
}

fn main() {
    // Usage: the base owns its species and forwards both accessors to it;
    // the compiler resolves every call statically.
    println!("=== Delegating Base ===");
    let cat: Box<Animal<Cat>> = Box::new(Animal::new(Cat));
    println!("A {} eats {}", cat.name(), cat.eats());

    let dog = Animal::new(Dog); // works on the stack just as well
    println!("A {} eats {}", dog.name(), dog.eats());

    println!("\n=== Distinct Types ===");
    // let pen = vec![Animal::new(Cat), Animal::new(Dog)]; // Won't compile: mismatched types
    let pen = vec![
        AnyAnimal::Cat(Animal::new(Cat)),
        AnyAnimal::Dog(Animal::new(Dog)),
    ];
    for animal in &pen {
        println!("{}", animal.sentence());
    }

    println!("\n=== Key Points ===");
    println!("- The base holds no behavior; every call lands in the species");
    println!("- Dispatch is resolved at compile time, like Pattern 2");
    println!("- Each instantiation is its own type; mixing needs an enum or a trait object");
    println!("{}", "Pattern 3 complete".green());
}
