pub mod card;
pub mod markup;
pub mod text;
