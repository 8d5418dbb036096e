pub mod about;
pub mod contact;
pub mod giftcards;
pub mod home;
pub mod terms;
pub mod treatments;
pub mod videos;
