pub mod access_content;
pub mod add_content;
pub mod cancel_subscription;
pub mod check_subscription;
pub mod initialize_content_provider;
pub mod process_renewal;
pub mod subscribe;
pub mod toggle_auto_renewal;
pub mod update_content_provider;

pub use access_content::*;
pub use add_content::*;
pub use cancel_subscription::*;
pub use check_subscription::*;
pub use initialize_content_provider::*;
pub use process_renewal::*;
pub use subscribe::*;
pub use toggle_auto_renewal::*;
pub use update_content_provider::*;
