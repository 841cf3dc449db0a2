pub mod portfolio;
pub mod prefs;
pub mod search;
pub mod todo_store;
