use crate::FactoryError;
use std::fmt;

/// Built-in animal variants known to the default factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl AnimalKind {
    pub const ALL: [AnimalKind; 2] = [Self::Dog, Self::Cat];

    /// Returns the discriminator this kind is registered under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }

    /// Returns the message this kind speaks.
    pub fn sound(&self) -> &'static str {
        match self {
            Self::Dog => "Woof!",
            Self::Cat => "Meow!",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Matching is exact: "DOG" is not a dog.
impl TryFrom<&str> for AnimalKind {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            _ => Err(FactoryError::unrecognized(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_known_kinds() {
        assert_eq!(AnimalKind::try_from("dog").unwrap(), AnimalKind::Dog);
        assert_eq!(AnimalKind::try_from("cat").unwrap(), AnimalKind::Cat);
    }

    #[test]
    fn test_try_from_is_case_sensitive() {
        let err = AnimalKind::try_from("DOG").unwrap_err();
        assert_eq!(err.discriminator(), Some("DOG"));
    }

    #[test]
    fn test_display_matches_discriminator() {
        for kind in AnimalKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
