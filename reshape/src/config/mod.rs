pub mod settings;

pub use self::settings::Settings;
