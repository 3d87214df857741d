//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Category, Note)
//! - Domain value objects (CategoryName, ColorHex, NoteTitle, CategoryFilter)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
