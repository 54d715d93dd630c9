//! BN256 test suite
//!
//! Tests are organized into focused modules for better maintainability.






#[cfg(test)]
mod serialization;
