pub mod batch;
pub mod form;
pub mod panels;
