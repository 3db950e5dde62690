pub mod a001_employee;
pub mod a002_chat;
pub mod a003_uploaded_file;
pub mod common;
