pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod seating;
pub mod services;

use std::sync::Arc;
use tokio::sync::RwLock;

use services::{seed, ClassSchedule, EventCalendar, SessionRegistry};

// Shared state for the whole application
pub struct AppState {
    pub config: config::Config,
    pub sessions: SessionRegistry,
    pub schedule: RwLock<ClassSchedule>,
    pub calendar: EventCalendar,
    pub announcements: Vec<String>,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            sessions: SessionRegistry::new(),
            schedule: RwLock::new(ClassSchedule::new(seed::classes())),
            calendar: EventCalendar::new(seed::events()),
            announcements: seed::announcements(),
        })
    }
}
