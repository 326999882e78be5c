pub mod chat;
pub mod dashboard;
pub mod demo_form;
pub mod query;
