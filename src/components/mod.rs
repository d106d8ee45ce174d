pub mod accounts;
pub mod calendar;
pub mod contacts;
pub mod copy_button;
pub mod gallery;
pub mod greeting;
pub mod hero;
pub mod location;
pub mod music;
pub mod notices;
