//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y utilidades HTTP
//! transversales.

pub mod cors;

pub use cors::*;
