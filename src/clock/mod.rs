pub mod format;
pub mod updater;
pub mod wall;
