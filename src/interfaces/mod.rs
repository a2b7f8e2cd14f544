pub mod components;
pub mod design_system;
pub mod salary_form;
pub mod ui;
pub mod view_models;
