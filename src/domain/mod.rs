pub mod category;
pub mod nomination;
pub mod validate;

pub use nomination::{FileUpload, NominationForm, NominationRecord, Status};
pub use validate::{validate_login, validate_nomination, ValidationErrors};
