pub mod archive;
pub mod overrides;

pub use self::archive::CsvMessageArchive;
pub use self::overrides::JsonOverrideStore;
