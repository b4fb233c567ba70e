pub mod evaluation_form;
