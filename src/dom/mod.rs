pub mod document;
pub mod markup;
