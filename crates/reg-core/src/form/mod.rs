pub mod field;
pub mod field_errors;
pub mod registration_form;
