//! HTTP client for form submission testing

mod client;

pub use client::{HttpClient, HttpError, HttpResponse};
