mod country_directory;

pub use country_directory::CountryDirectory;
