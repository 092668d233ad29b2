mod landing;
mod messages;

pub use landing::Landing;
pub use messages::Messages;
