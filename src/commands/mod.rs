// Command handlers module
pub mod run;
pub mod tokens;
pub mod version;

// Re-exports for cleaner imports
pub use run::execute as run;
pub use tokens::execute as tokens;
pub use version::execute as version;
