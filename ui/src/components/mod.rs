pub mod fade;
pub mod header;
pub mod icons;
pub mod social_float;

pub use fade::FadeInScale;
pub use header::Header;
pub use social_float::SocialFloat;
