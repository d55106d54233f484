// src/components/mod.rs
//
// Reusable UI pieces of the site shell.

pub mod navbar;
