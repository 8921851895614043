//! Routed page shells. Each page mounts its lists and panels; data loading
//! lives in the components they render.

pub mod admin_dashboard;
pub mod clients;
pub mod editor;
pub mod home;
pub mod journalist_dashboard;
pub mod journalists;
pub mod login;
pub mod not_found;
pub mod register;
pub mod templates;
