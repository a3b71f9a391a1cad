/// Lifecycle of a study session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Configuring,
    Running,
    Completed,
    ForceQuit,
}

impl SessionPhase {
    /// Terminal phases end the session
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::ForceQuit)
    }

    /// Display label for the phase
    pub fn label(&self) -> &'static str {
        match self {
            Self::Configuring => "Configuring",
            Self::Running => "Running",
            Self::Completed => "Completed",
            Self::ForceQuit => "Ended early",
        }
    }
}

/// State of the countdown controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    Idle,
    Running,
    Expired,
    Cancelled,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Setup,
    Session,
    ConfirmQuit, // Asking before ending the session early
    Summary,
    Error, // Rejected start request
}

/// Focusable field on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Hours,
    Minutes,
    Seconds,
    AppInput,
    AppList,
    TaskInput,
    TaskList,
}

impl SetupField {
    /// Tab order
    pub fn all() -> &'static [SetupField] {
        &[
            SetupField::Hours,
            SetupField::Minutes,
            SetupField::Seconds,
            SetupField::AppInput,
            SetupField::AppList,
            SetupField::TaskInput,
            SetupField::TaskList,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Upper bound for duration fields, `None` for the list and text fields
    pub fn max_value(&self) -> Option<u32> {
        match self {
            SetupField::Hours => Some(23),
            SetupField::Minutes | SetupField::Seconds => Some(59),
            _ => None,
        }
    }

    pub fn is_duration(&self) -> bool {
        self.max_value().is_some()
    }
}
