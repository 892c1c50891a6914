pub mod error;
pub mod file_system_loader;
pub mod traits;

pub use self::file_system_loader::FileSystemLoader;
pub use self::traits::Loadable;
