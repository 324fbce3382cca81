//! Client for the missing-person records API: loads the collection, renders it as cards,
//! filters it locally and marks records as found.

pub mod api;
pub mod clients;
pub mod consts;
pub mod controller;
pub mod error;
pub mod filter;
pub mod model;
pub mod options;
pub mod render;
pub mod view;
