use serde::{Deserialize, Serialize};
use std::fmt;

/// A person taking part in the exchange.
///
/// Names are trimmed on construction. The family group defaults to the last
/// name when no (non-blank) group is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    pub family_group: String,
}

impl Participant {
    pub fn new(first_name: &str, last_name: &str, family_group: Option<&str>) -> Self {
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();
        let family_group = family_group
            .map(str::trim)
            .filter(|group| !group.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| last_name.clone());

        Self {
            first_name,
            last_name,
            family_group,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn display_group(&self) -> String {
        format!("[{}]", self.family_group)
    }

    /// Case-insensitive (first, last) comparison used for roster uniqueness.
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.trim().to_lowercase()
            && self.last_name.to_lowercase() == last_name.trim().to_lowercase()
    }

    pub fn group_key(&self) -> String {
        self.family_group.to_lowercase()
    }

    pub fn shares_group_with(&self, other: &Participant) -> bool {
        self.group_key() == other.group_key()
    }

    /// A giver may never draw themselves or anyone from their own family group.
    pub fn can_give_to(&self, receiver: &Participant) -> bool {
        !receiver.has_name(&self.first_name, &self.last_name) && !self.shares_group_with(receiver)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.full_name(), self.display_group())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: String,
    pub receiver: String,
}

impl Assignment {
    pub fn new(giver: &Participant, receiver: &Participant) -> Self {
        Self {
            giver: giver.full_name(),
            receiver: receiver.full_name(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver, self.receiver)
    }
}

/// Which of the two independently matched pools a participant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolKind {
    Core,
    Other,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Core => write!(f, "Core"),
            PoolKind::Other => write!(f, "non-Core"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_trims_and_defaults_group() {
        let person = Participant::new("  John ", " Doe ", None);
        assert_eq!(person.first_name, "John");
        assert_eq!(person.last_name, "Doe");
        assert_eq!(person.family_group, "Doe");

        let blank_group = Participant::new("John", "Doe", Some("   "));
        assert_eq!(blank_group.family_group, "Doe");

        let grouped = Participant::new("John", "Doe", Some(" Doe Family "));
        assert_eq!(grouped.family_group, "Doe Family");
        assert_eq!(grouped.display_group(), "[Doe Family]");
    }

    #[test]
    fn test_can_give_to_rejects_self_and_same_group() {
        let alice = Participant::new("Alice", "A", Some("GroupA"));
        let anna = Participant::new("Anna", "A", Some("groupa"));
        let bob = Participant::new("Bob", "B", Some("GroupB"));

        assert!(!alice.can_give_to(&alice));
        assert!(!alice.can_give_to(&anna));
        assert!(alice.can_give_to(&bob));
    }

    #[test]
    fn test_assignment_display() {
        let alice = Participant::new("Alice", "A", None);
        let bob = Participant::new("Bob", "B", None);
        assert_eq!(Assignment::new(&alice, &bob).to_string(), "Alice A -> Bob B");
    }
}
