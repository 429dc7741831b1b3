pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::Password,
    person_name::PersonName,
    user::{ConnectedUser, Credentials, NewUser, User, UserError},
};

pub use ports::repositories::{UserStore, UserStoreError};
