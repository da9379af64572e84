pub mod age;
pub mod csv;
pub mod student;
pub mod text;
