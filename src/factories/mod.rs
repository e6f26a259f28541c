// src/factories/mod.rs

mod animal_factory;

pub use animal_factory::{AnimalConstructor, AnimalFactory};
