//! Common reusable UI components
//!
//! Building blocks shared by the landing page, the intake chat and the lead
//! viewer.

pub mod badge;
pub mod button;
pub mod form;
pub mod modal;
pub mod spinner;

pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::{CheckboxField, FormField, RadioGroupField};
pub use modal::BaseModal;
pub use spinner::{Spinner, SpinnerSize, SpinnerStyle};
