pub mod cancellation;
pub mod catalog_source;
pub mod validator;

pub use cancellation::{Cancellable, CancellationToken, NeverCancelled};
pub use catalog_source::ICatalogSource;
pub use validator::ICodeValidator;
