pub mod header;
pub mod result_section;
pub mod upload_form;
