pub mod countries;
pub mod forms;
