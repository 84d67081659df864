mod about;
mod contact;
mod home;
mod not_found;
mod platform;
mod vision;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use platform::Platform;
pub use vision::Vision;
