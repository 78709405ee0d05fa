pub mod api;
pub mod common;
pub mod icon;
pub mod intake_chat;
pub mod notifications;
pub mod pages;

pub use icon::{Icon, icons};
pub use intake_chat::IntakeChat;
pub use notifications::{NotificationManager, NotificationsContainer, provide_notifications};
