pub mod email;
pub mod password;
pub mod person_name;
pub mod user;
