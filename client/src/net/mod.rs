//! Network clients.

pub mod emailjs;
