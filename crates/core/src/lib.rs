//! Domain types, errors, and validation rules for the Critica data model.
//!
//! This crate is deliberately dependency-light: it defines the shared ID and
//! timestamp types, the domain error enum, and the field-level validation
//! rules that the persistence layer applies before writing a row. Nothing
//! here touches the database.

pub mod catalog;
pub mod error;
pub mod reviews;
pub mod roles;
pub mod types;
pub mod users;
