pub mod configurator;
pub mod contact;
pub mod hero;
pub mod home;
pub mod roi;

pub use home::HomePage;
