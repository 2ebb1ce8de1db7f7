pub mod commands;
pub mod entities;
pub mod enums;
pub mod parameters;
pub mod queries;
pub mod value_objects;
