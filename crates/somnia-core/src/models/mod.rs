pub mod answer;
pub mod contact;
pub mod measurement;
pub mod result;
