use std::collections::HashSet;

/// Configured "core" last names. Keeps the first-seen casing for display and
/// a lowercased set for lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreFamilies {
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl CoreFamilies {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut families = Self::default();
        families.replace(names);
        families
    }

    /// Parse a comma separated list such as `"Rice, Harlan"`.
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.clear();
        self.lookup.clear();

        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            // 大小寫不敏感去重，保留第一次出現的寫法
            if self.lookup.insert(trimmed.to_lowercase()) {
                self.names.push(trimmed.to_string());
            }
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    pub fn display(&self) -> String {
        if self.is_empty() {
            "None".to_string()
        } else {
            self.names.join(", ")
        }
    }

    pub fn contains(&self, last_name: &str) -> bool {
        if last_name.is_empty() {
            return false;
        }
        self.lookup.contains(&last_name.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
