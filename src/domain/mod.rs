pub mod answers;
pub mod assessment;
pub mod bank;
pub mod classification;
mod couple;
mod individual;
pub mod likert;
pub mod scoring;
pub mod session;
