pub mod callstack;
pub mod crash;
pub mod current_format;
pub mod dialect;
pub mod frame;
pub mod legacy_format;
