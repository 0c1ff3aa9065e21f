//! In-memory toast notifications with timed auto-dismissal.

pub mod center;
pub mod id;
pub mod model;
pub mod provider;
pub mod timer;

pub use center::ToastCenter;
pub use id::{IdStrategy, generate_toast_id};
pub use model::{Toast, ToastId, ToastRequest, ToastVariant};
pub use provider::{ToastHandle, ToastProvider, try_use_toast, use_toast};
pub use timer::DismissTimer;
