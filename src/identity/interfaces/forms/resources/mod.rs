pub mod login_form_resource;
pub mod register_form_resource;
