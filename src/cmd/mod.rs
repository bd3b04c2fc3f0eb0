pub mod convert;
pub mod init;
pub mod month;
pub mod occasions;
pub mod root;
pub mod today;
