mod embedded_directory;

pub use embedded_directory::EmbeddedCountryDirectory;
