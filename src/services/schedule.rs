use chrono::Weekday;
use tracing::{debug, info};

use crate::error::ScheduleError;
use crate::models::Class;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFilter {
    pub day: Option<Weekday>,
    /// Case-sensitive substring of the instructor name.
    pub instructor: Option<String>,
    pub open_only: bool,
}

impl ClassFilter {
    pub fn matches(&self, class: &Class) -> bool {
        self.day.map_or(true, |day| class.day == day)
            && self
                .instructor
                .as_deref()
                .map_or(true, |needle| class.instructor.contains(needle))
            && (!self.open_only || !class.is_full())
    }
}

/// Weekly class list with live participant counts.
#[derive(Debug, Clone)]
pub struct ClassSchedule {
    classes: Vec<Class>,
}

impl ClassSchedule {
    pub fn new(classes: Vec<Class>) -> Self {
        Self { classes }
    }

    pub fn list(&self, filter: &ClassFilter) -> Vec<&Class> {
        self.classes.iter().filter(|class| filter.matches(class)).collect()
    }

    pub fn get(&self, id: &str) -> Result<&Class, ScheduleError> {
        self.classes
            .iter()
            .find(|class| class.id == id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))
    }

    /// Takes one spot in a class. A full class refuses the registration.
    pub fn register(&mut self, id: &str) -> Result<&Class, ScheduleError> {
        let class = self
            .classes
            .iter_mut()
            .find(|class| class.id == id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))?;

        if class.is_full() {
            debug!(class_id = id, "Registration refused, class is full");
            return Err(ScheduleError::Full(id.to_string()));
        }

        class.current_participants += 1;
        info!(
            class_id = id,
            participants = class.current_participants,
            max = class.max_participants,
            "Registered for class"
        );
        Ok(class)
    }
}
