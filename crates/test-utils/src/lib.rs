pub mod asserts;
pub mod oracle;
pub mod strategies;
pub mod tracing;
