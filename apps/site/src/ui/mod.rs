pub mod blog;
pub mod chat;
pub mod contact;
pub mod dashboard;
pub mod demo_form;
pub mod landing;
pub mod layout;
pub mod notifications;
pub mod pricing;
pub mod primitives;
