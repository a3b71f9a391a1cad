use uuid::Uuid;

/// A study task on the session checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique ID for targeting toggles and removals
    pub id: Uuid,
    /// Task description
    pub title: String,
    /// Whether the task has been checked off
    pub done: bool,
}

impl Task {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            done: false,
        }
    }

    /// Checkbox glyph for display
    pub fn checkbox(&self) -> &'static str {
        if self.done {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// Ordered list of tasks, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for title in titles {
            list.add(title.as_ref());
        }
        list
    }

    /// Append a task. Blank titles are ignored.
    pub fn add(&mut self, title: &str) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title.to_string());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Remove a task by id. Removing a missing task is a no-op.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Flip the completion flag. Returns the new state, or `None` if missing.
    pub fn toggle(&mut self, id: Uuid) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = !task.done;
        Some(task.done)
    }

    /// Uncheck every task (used when a new session starts)
    pub fn reset_progress(&mut self) {
        for task in &mut self.tasks {
            task.done = false;
        }
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of checked tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}
