pub mod serve;
pub mod show_profile;

pub use serve::serve;
pub use show_profile::show_profile;
