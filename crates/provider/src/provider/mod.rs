//! Provider abstraction and implementations.
//!
//! The server only ever talks to [`PatroProvider`]; concrete sources live in
//! submodules.

mod traits;

pub mod hamro_patro;

pub use traits::PatroProvider;
