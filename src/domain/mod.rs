pub mod command;
pub mod destination;
pub mod provider;
pub mod view;
