// API routes and handlers

pub mod achievements;
pub mod auth;
pub mod dashboard;
pub mod error;
pub mod goals;
pub mod health;
pub mod routes;
pub mod trainers;
pub mod users;
pub mod workouts;
