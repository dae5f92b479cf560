//! A registry of boxed animals, the capability only the runtime family
//! provides: one collection holding any mix of concrete types behind the
//! abstract interface.

use thiserror::Error;

use crate::dynamic::{describe, Animal};

/// The registry's only failure: asking for an animal that was never
/// registered. The animals themselves stay pure and total.
#[derive(Error, Debug, PartialEq)]
pub enum MenagerieError {
    #[error("no animal named '{0}' in the menagerie")]
    UnknownAnimal(String),
}

/// Keeps every registered animal behind `dyn Animal`.
pub struct Menagerie {
    animals: Vec<Box<dyn Animal>>,
}

impl Menagerie {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
        }
    }

    /// Adds an animal. Registration order is preserved.
    pub fn register(&mut self, animal: Box<dyn Animal>) {
        self.animals.push(animal);
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// First registered animal whose name matches.
    pub fn find(&self, name: &str) -> Option<&dyn Animal> {
        self.animals
            .iter()
            .find(|animal| animal.name() == name)
            .map(|animal| animal.as_ref())
    }

    /// The sentence for the named animal.
    pub fn describe(&self, name: &str) -> Result<String, MenagerieError> {
        self.find(name)
            .map(describe)
            .ok_or_else(|| MenagerieError::UnknownAnimal(name.to_string()))
    }

    /// Sentences for every animal, in registration order.
    pub fn describe_all(&self) -> Vec<String> {
        self.animals
            .iter()
            .map(|animal| describe(animal.as_ref()))
            .collect()
    }
}

impl Default for Menagerie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::Cat;
    use proptest::prelude::*;

    /// Test double with scripted answers, standing in for animals that do
    /// not exist in the library.
    struct ScriptedAnimal {
        name: String,
        eats: String,
    }

    impl Animal for ScriptedAnimal {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn eats(&self) -> String {
            self.eats.clone()
        }
    }

    fn scripted(name: &str, eats: &str) -> Box<dyn Animal> {
        Box::new(ScriptedAnimal {
            name: name.to_string(),
            eats: eats.to_string(),
        })
    }

    #[test]
    fn new_menagerie_is_empty() {
        let menagerie = Menagerie::new();
        assert!(menagerie.is_empty());
        assert_eq!(menagerie.len(), 0);
    }

    #[test]
    fn find_known_and_unknown_animals() {
        let mut menagerie = Menagerie::new();
        menagerie.register(Box::new(Cat));

        assert!(menagerie.find("cat").is_some());
        assert!(menagerie.find("unicorn").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_registered() {
        let mut menagerie = Menagerie::new();
        menagerie.register(scripted("twin", "apples"));
        menagerie.register(scripted("twin", "oranges"));

        assert_eq!(menagerie.find("twin").unwrap().eats(), "apples");
        assert_eq!(
            menagerie.describe("twin"),
            Ok("A twin eats apples".to_string())
        );
    }

    #[test]
    fn describe_a_registered_animal() {
        let mut menagerie = Menagerie::new();
        menagerie.register(Box::new(Cat));

        assert_eq!(
            menagerie.describe("cat"),
            Ok("A cat eats delicious mice".to_string())
        );
    }

    #[test]
    fn describe_an_unknown_animal_is_an_error() {
        let menagerie = Menagerie::new();
        assert_eq!(
            menagerie.describe("unicorn"),
            Err(MenagerieError::UnknownAnimal("unicorn".to_string()))
        );
    }

    #[test]
    fn error_message_names_the_animal() {
        let err = MenagerieError::UnknownAnimal("unicorn".to_string());
        assert_eq!(err.to_string(), "no animal named 'unicorn' in the menagerie");
    }

    #[test]
    fn describe_all_in_registration_order() {
        let mut menagerie = Menagerie::new();
        menagerie.register(scripted("fox", "field mice"));
        menagerie.register(Box::new(Cat));
        menagerie.register(scripted("goat", "tin cans"));

        assert_eq!(
            menagerie.describe_all(),
            vec![
                "A fox eats field mice",
                "A cat eats delicious mice",
                "A goat eats tin cans"
            ]
        );
    }

    proptest! {
        #[test]
        fn scripted_animals_keep_the_sentence_shape(
            name in "[a-z]{1,12}",
            eats in "[a-z][a-z ]{0,19}",
        ) {
            let mut menagerie = Menagerie::new();
            menagerie.register(scripted(&name, &eats));

            let sentence = menagerie.describe(&name).unwrap();
            prop_assert_eq!(sentence, format!("A {} eats {}", name, eats));
        }

        #[test]
        fn registration_order_is_preserved(
            names in prop::collection::vec("[a-z]{1,8}", 1..8),
        ) {
            let mut menagerie = Menagerie::new();
            for name in &names {
                menagerie.register(scripted(name, "grass"));
            }

            let sentences = menagerie.describe_all();
            prop_assert_eq!(sentences.len(), names.len());
            for (sentence, name) in sentences.iter().zip(&names) {
                prop_assert_eq!(sentence, &format!("A {} eats grass", name));
            }
        }
    }
}
