//! Request authentication and authorization.
//!
//! - `token` - HS256 bearer token issuing and verification
//! - `password` - Argon2 password hashing
//! - `auth` - `Credentials` extractor, `Permission` predicates and `AuthGuard`

pub mod auth;
pub mod password;
pub mod token;

#[cfg(test)]
mod test;
