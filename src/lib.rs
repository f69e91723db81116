// src/lib.rs

//! Content tier for the nonprofit website: fetches page and post content from
//! the headless CMS, normalizes it into view models and decides what each page
//! renders.

pub mod error;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod services;
pub mod utils;
