//! Integration tests driving an AppState the way the dashboard does

mod common;
mod dashboard;
mod records;
mod session;
