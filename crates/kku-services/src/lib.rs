//! # kku-services
//!
//! The logic behind the dashboard widgets and the program finder:
//! - `calendar`: month grid with event annotations
//! - `checklist`: toggle/progress over seeded task lists
//! - `board`: versioned persistence of a task list in local storage
//! - `programs`: static program catalog and its filters
//! - `costs`: living-cost calculator and USD/KRW converter

pub mod board;
pub mod calendar;
pub mod checklist;
pub mod costs;
pub mod programs;
