pub mod button;
pub mod card;
