use crate::game::Mark;

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Participant {
    Human { name: String, mark: Mark },
    Heuristic { mark: Mark },
}

impl Participant {
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Participant::Human {
            name: name.into(),
            mark,
        }
    }

    pub fn heuristic(mark: Mark) -> Self {
        Participant::Heuristic { mark }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Participant::Human { mark, .. } | Participant::Heuristic { mark } => *mark,
        }
    }

    /// Whether moves come from the computer rather than from input.
    pub fn is_automated(&self) -> bool {
        matches!(self, Participant::Heuristic { .. })
    }

    /// Name for display and history; the heuristic side uses `computer_name`.
    pub fn display_name<'a>(&'a self, computer_name: &'a str) -> &'a str {
        match self {
            Participant::Human { name, .. } => name,
            Participant::Heuristic { .. } => computer_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name must be at most {max} characters")]
    TooLong { max: usize },

    #[error("name '{0}' is already taken")]
    Taken(String),
}

/// Validate a human name entry, returning the trimmed name. `taken` lists
/// names already in use this session; comparison ignores case.
pub fn validate_name(input: &str, max_len: usize, taken: &[&str]) -> Result<String, NameError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > max_len {
        return Err(NameError::TooLong { max: max_len });
    }
    if taken.iter().any(|t| t.trim().eq_ignore_ascii_case(name)) {
        return Err(NameError::Taken(name.to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_accessors() {
        let human = Participant::human("Ada", Mark::A);
        let computer = Participant::heuristic(Mark::B);

        assert_eq!(human.mark(), Mark::A);
        assert_eq!(computer.mark(), Mark::B);
        assert!(!human.is_automated());
        assert!(computer.is_automated());
        assert_eq!(human.display_name("Computer"), "Ada");
        assert_eq!(computer.display_name("Computer"), "Computer");
    }

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Ada \n", 20, &[]), Ok("Ada".to_string()));
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert_eq!(validate_name("   ", 20, &[]), Err(NameError::Empty));
    }

    #[test]
    fn test_validate_name_rejects_long() {
        assert_eq!(
            validate_name("Bartholomew", 5, &[]),
            Err(NameError::TooLong { max: 5 })
        );
        // Length counts characters, not bytes.
        assert!(validate_name("Zoë", 3, &[]).is_ok());
    }

    #[test]
    fn test_validate_name_rejects_taken() {
        assert_eq!(
            validate_name("computer", 20, &["Computer"]),
            Err(NameError::Taken("computer".to_string()))
        );
        assert!(validate_name("Grace", 20, &["Ada", "Computer"]).is_ok());
    }
}
