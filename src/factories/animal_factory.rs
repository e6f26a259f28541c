// src/factories/animal_factory.rs

use crate::{Animal, AnimalKind, Cat, Dog, FactoryError};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Builds a fresh animal for one registered discriminator.
pub type AnimalConstructor = Box<dyn Fn() -> Box<dyn Animal> + Send + Sync>;

/// Registry mapping discriminators to animal constructors.
///
/// Callers only see `Box<dyn Animal>`: adding a variant means implementing
/// [`Animal`] and registering one constructor, with no change at call sites.
pub struct AnimalFactory {
    constructors: HashMap<String, AnimalConstructor>,
}

impl AnimalFactory {
    /// Creates a factory with the built-in dog and cat variants.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        for kind in AnimalKind::ALL {
            factory
                .constructors
                .insert(kind.as_str().to_string(), Self::builtin(kind));
        }
        factory
    }

    /// Creates a factory with no registered variants.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    fn builtin(kind: AnimalKind) -> AnimalConstructor {
        match kind {
            AnimalKind::Dog => Box::new(|| Box::new(Dog) as Box<dyn Animal>),
            AnimalKind::Cat => Box::new(|| Box::new(Cat) as Box<dyn Animal>),
        }
    }

    /// Creates the animal registered under `discriminator`.
    ///
    /// # Returns
    /// * `Ok(Box<dyn Animal>)` - new instance owned by the caller
    /// * `Err(FactoryError::UnrecognizedVariant)` - nothing is registered
    ///   under `discriminator`; matching is exact and case-sensitive
    ///
    /// # Examples
    /// ```
    /// use animal_factory::{adapters::RecordingVoice, factories::AnimalFactory};
    ///
    /// let factory = AnimalFactory::new();
    /// let mut voice = RecordingVoice::new();
    ///
    /// factory.create("dog").unwrap().speak(&mut voice);
    /// assert_eq!(voice.messages(), ["Woof!"]);
    ///
    /// assert!(factory.create("lion").is_err());
    /// ```
    pub fn create(&self, discriminator: &str) -> Result<Box<dyn Animal>, FactoryError> {
        match self.constructors.get(discriminator) {
            Some(construct) => {
                debug!(discriminator, "creating animal");
                Ok(construct())
            }
            None => {
                trace!(discriminator, "no constructor registered");
                Err(FactoryError::unrecognized(discriminator))
            }
        }
    }

    /// Registers a new variant under `name`.
    pub fn register<S, F>(&mut self, name: S, constructor: F) -> Result<(), FactoryError>
    where
        S: Into<String>,
        F: Fn() -> Box<dyn Animal> + Send + Sync + 'static,
    {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(FactoryError::validation(
                "Animal type cannot be empty or whitespace",
            ));
        }

        if self.constructors.contains_key(&name) {
            return Err(FactoryError::DuplicateVariant(name));
        }

        debug!(name = %name, "registering animal type");
        self.constructors.insert(name, Box::new(constructor));
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_variant<S, F>(mut self, name: S, constructor: F) -> Result<Self, FactoryError>
    where
        S: Into<String>,
        F: Fn() -> Box<dyn Animal> + Send + Sync + 'static,
    {
        self.register(name, constructor)?;
        Ok(self)
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.constructors.contains_key(discriminator)
    }

    /// Registered discriminators, sorted.
    pub fn variants(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for AnimalFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnimalFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimalFactory")
            .field("variants", &self.variants())
            .finish()
    }
}
