pub mod app_settings;
pub mod occasion;
pub mod persistence;

pub use app_settings::AppSettings;
pub use occasion::OccasionData;
pub use persistence::Persistable;
