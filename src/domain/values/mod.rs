pub mod classification;
pub mod label;
pub mod wib;
