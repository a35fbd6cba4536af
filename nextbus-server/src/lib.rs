//! Next-bus finder server.
//!
//! A web application that answers: "on this route, in this direction,
//! when does the next bus leave this stop?"

pub mod arrival;
pub mod cache;
pub mod domain;
pub mod form;
pub mod messages;
pub mod nextrip;
pub mod refdata;
pub mod web;
