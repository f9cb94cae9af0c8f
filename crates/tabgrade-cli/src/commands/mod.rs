pub mod grade;
pub mod indices;
pub mod instructions;
pub mod validate;
