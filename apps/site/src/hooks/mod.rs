pub mod demo_form;
pub mod ping;
pub mod seo;
