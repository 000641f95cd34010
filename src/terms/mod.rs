pub mod catalog;
pub mod loader;

pub use catalog::Catalog;
pub use loader::{TermsError, load_terms_file};
