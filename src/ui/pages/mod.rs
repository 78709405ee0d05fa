//! Application pages module
//!
//! - Landing page with the intake chat
//! - Lead viewer
//! - 404 page

mod landing;
mod leads;
mod not_found;

pub use landing::LandingPage;
pub use leads::LeadsPage;
pub use not_found::NotFoundPage;
