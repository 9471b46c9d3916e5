pub mod auth_forms;
pub mod expense_forms;
pub mod user_forms;
