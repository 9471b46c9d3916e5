pub mod use_expenses;
pub mod use_session;
pub mod use_users;
