/// Built-in preset of commonly distracting applications
pub const DEFAULT_SUPPRESSED_APPS: [&str; 4] = ["Steam", "Riot", "Discord", "Minecraft"];

/// Application names to keep closed during a session
///
/// Names are kept in insertion order for display. Membership is
/// case-insensitive, so "steam" and "Steam" are the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressedAppSet {
    names: Vec<String>,
}

impl SuppressedAppSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of names, skipping blanks and duplicates
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.add(name.as_ref());
        }
        set
    }

    /// Add a name. Returns false for blank or already-present names.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a name. Removing a missing name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        let before = self.names.len();
        self.names.retain(|n| n.to_lowercase() != needle);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.names.iter().any(|n| n.to_lowercase() == needle)
    }

    /// Replace every entry with the given preset
    pub fn apply_preset<S: AsRef<str>>(&mut self, preset: &[S]) {
        self.names.clear();
        for name in preset {
            self.add(name.as_ref());
        }
    }

    /// Replace every entry with the built-in default preset
    pub fn use_default_preset(&mut self) {
        self.apply_preset(&DEFAULT_SUPPRESSED_APPS);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Case-insensitive substring match of a suppressed name against a process name.
///
/// "Steam" matches "steam.exe", "SteamService" and also "SteamVR".
pub fn matches_process(suppressed: &str, process_name: &str) -> bool {
    let needle = suppressed.trim().to_lowercase();
    !needle.is_empty() && process_name.to_lowercase().contains(&needle)
}
