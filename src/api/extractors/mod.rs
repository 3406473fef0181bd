pub mod admin;
pub mod webhook;
