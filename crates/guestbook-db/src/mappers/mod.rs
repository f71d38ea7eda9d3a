//! Model ↔ Entity mappers

mod guest;
