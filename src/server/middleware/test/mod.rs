mod auth;
mod token;
