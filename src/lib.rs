pub mod artifact;
pub mod commands;
pub mod config;
pub mod gemini;
pub mod logging;
pub mod package;
pub mod paths;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use gemini::Generator;
pub use package::PackageName;
pub use paths::Layout;
