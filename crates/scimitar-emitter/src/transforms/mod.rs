//! Synthesis transforms and the Java backend.
//!
//! - `ir`: statement model shared by synthesis and printing
//! - `observer`: method triple -> `StateObserver` dispatch object
//! - `initializer`: binding set -> initializer for the target type
//! - `ir_printer`: IR -> Java source

pub mod initializer;
pub mod ir;
pub mod ir_printer;
pub mod observer;
