use crate::{AnimalKind, ports::Voice};
use std::fmt;

/// Capability shared by every animal the factory can build.
///
/// Implementors are stateless: `speak` emits the same message on every call
/// and has no effect besides emitting it.
pub trait Animal: Send + Sync {
    /// Discriminator this animal is created under.
    fn kind(&self) -> &str;

    /// Message this animal speaks, without emitting it.
    fn sound(&self) -> &'static str;

    /// Emits the animal's message into `voice` exactly once.
    fn speak(&self, voice: &mut dyn Voice) {
        voice.emit(self.sound());
    }
}

impl fmt::Debug for dyn Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animal")
            .field("kind", &self.kind())
            .field("sound", &self.sound())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dog;

impl Animal for Dog {
    fn kind(&self) -> &str {
        AnimalKind::Dog.as_str()
    }

    fn sound(&self) -> &'static str {
        AnimalKind::Dog.sound()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

impl Animal for Cat {
    fn kind(&self) -> &str {
        AnimalKind::Cat.as_str()
    }

    fn sound(&self) -> &'static str {
        AnimalKind::Cat.sound()
    }
}
