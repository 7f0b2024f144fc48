pub mod contact;
pub mod layout;
pub mod path;
pub mod text_input;

pub use contact::{validate_contact, Contact, ContactError};
pub use layout::{center_fixed, center_popup};
pub use path::{get_config_dir, get_config_path, get_log_dir};
pub use text_input::TextInput;
