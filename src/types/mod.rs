pub mod directory;
pub mod office;

pub use directory::{Directory, DirectoryError};
pub use office::{FeaturedOffice, Office, OfficeId};
