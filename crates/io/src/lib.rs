// File I/O operations

pub mod encoding;
pub mod error;
pub mod registry;
pub mod template;

pub use error::LoadError;
pub use registry::load_registry;
pub use template::TemplateFile;
