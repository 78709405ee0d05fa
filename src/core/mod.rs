//! Domain logic shared by the server and the browser bundle

pub mod catalog;
pub mod intake;
pub mod lead;
pub mod wizard;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
#[cfg(feature = "ssr")]
pub mod leads;
