pub use crate::cli::{command, run_app};
pub use crate::domain::Contact;
pub use crate::errors::AppError;
pub use crate::store::ContactStore;
pub use crate::validation::validate_name;
