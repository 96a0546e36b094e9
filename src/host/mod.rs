pub mod events;
pub mod page;
pub mod timers;
