pub mod classes;
pub mod events;
pub mod groups;
pub mod meta;
pub mod players;
