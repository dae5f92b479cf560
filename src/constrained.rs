//! Pattern 2: compile-time polymorphism through trait bounds.
//!
//! The same contract as the runtime family, but never used as a trait
//! object. Generic call sites are monomorphized: a separate copy of the
//! function is compiled per concrete type and the calls inside are direct,
//! with no indirection. A type that does not satisfy the bound is rejected
//! before the program ever runs.

/// An entity with a name and a diet, checked entirely at compile time.
///
/// A type lacking either accessor cannot be substituted where the bound is
/// required:
///
/// ```compile_fail
/// use polymorphism_patterns::constrained::describe;
///
/// struct Stone; // has neither name() nor eats()
///
/// describe(&Stone);
/// ```
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

/// Builds the sentence for any animal the compiler can prove conforms.
pub fn describe<A: Animal>(animal: &A) -> String {
    format!("A {} eats {}", animal.name(), animal.eats())
}

/// Hands back "some animal" without naming the concrete type. The caller
/// can only use what the contract grants.
pub fn hungry_cat() -> impl Animal {
    Cat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_returns_fixed_text() {
        let cat = Cat;
        assert_eq!(cat.name(), "cat");
        assert_eq!(cat.eats(), "delicious mice");
    }

    #[test]
    fn accessors_return_non_empty_text() {
        let cat = Cat;
        assert!(!cat.name().is_empty());
        assert!(!cat.eats().is_empty());
    }

    #[test]
    fn repeated_calls_return_identical_results() {
        let cat = Cat;
        assert_eq!(cat.name(), cat.name());
        assert_eq!(cat.eats(), cat.eats());
    }

    #[test]
    fn describe_is_monomorphized_per_type() {
        struct Heron;

        impl Animal for Heron {
            fn name(&self) -> String {
                "heron".to_string()
            }

            fn eats(&self) -> String {
                "small fish".to_string()
            }
        }

        assert_eq!(describe(&Cat), "A cat eats delicious mice");
        assert_eq!(describe(&Heron), "A heron eats small fish");
    }

    #[test]
    fn opaque_return_still_satisfies_the_contract() {
        let animal = hungry_cat();
        assert_eq!(describe(&animal), "A cat eats delicious mice");
    }
}
