pub mod canvas;
pub mod form;
pub mod panels;
