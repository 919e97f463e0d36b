pub mod loading;
pub mod notify;
