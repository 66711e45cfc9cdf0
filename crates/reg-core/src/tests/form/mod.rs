mod field;
mod registration_form;
