//! Basic Auth credential generation
//!
//! Random username/password generation plus the derived artifacts a
//! developer actually pastes somewhere: the `Authorization` header, an
//! htpasswd-style line and an example URL with embedded credentials.

mod credentials;

pub use credentials::{
    generate_password, generate_username, CredentialOptions, Credentials,
};
