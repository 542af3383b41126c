//! API route handlers

pub mod accounts;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod semesters;
pub mod users;

use axum::{extract::FromRequest, Json};

use crate::error::ApiError;

/// JSON body extractor whose rejections use the API error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
