// Reusable UI widgets

pub mod logo;
pub mod text_input;
pub mod toast;

pub use logo::{Size, ThyneLogo};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant};
