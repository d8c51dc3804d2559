pub mod correlation;
pub mod daily;
pub mod news;
pub mod price;
