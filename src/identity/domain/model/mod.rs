pub mod commands;
pub mod enums;
pub mod events;
pub mod value_objects;
