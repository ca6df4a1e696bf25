pub mod content;
pub mod content_provider;
pub mod subscription;

pub use content::*;
pub use content_provider::*;
pub use subscription::*;
