/// UI module exports

pub mod app;
pub mod components;
pub mod form;
pub mod results;
