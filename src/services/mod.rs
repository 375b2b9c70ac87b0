//! Service layer for reimburse-cli
//!
//! Workflows built on top of the models: filling in a form (by hand or from
//! a draft file), submitting it, and reviewing submitted requests.

pub mod draft;
pub mod form;
pub mod review;
pub mod submission;

pub use draft::Draft;
pub use form::{FormAction, FormMode, FormSession};
pub use review::ReviewQueue;
pub use submission::{submit, submit_with_notice, Submission};
