use serde::{Deserialize, Serialize};

// Contribution payload kind: text body or uploaded file, never both
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    Text,
    File,
}

impl<'de> Deserialize<'de> for ContributionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ContributionKind>()
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContributionKind::Text => write!(f, "text"),
            ContributionKind::File => write!(f, "file"),
        }
    }
}

impl std::str::FromStr for ContributionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContributionKind::Text),
            "file" => Ok(ContributionKind::File),
            _ => Err(format!(
                "Invalid contribution kind: '{s}'. Supported kinds: text, file"
            )),
        }
    }
}

// Where a contribution thread lives: under an assignment (membership
// gated) or under a student-created discussion topic (open to students)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContributionScope {
    Assignment(i64),
    Topic(i64),
}

impl ContributionScope {
    /// Splits the scope into the (assignment_id, topic_id) column pair;
    /// exactly one side is set.
    pub fn parent_ids(self) -> (Option<i64>, Option<i64>) {
        match self {
            ContributionScope::Assignment(id) => (Some(id), None),
            ContributionScope::Topic(id) => (None, Some(id)),
        }
    }
}

// Student post under an assignment or a discussion topic; exactly one
// of the two parent ids is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: i64,
    pub author_id: i64,
    pub kind: ContributionKind,
    pub content: Option<String>,
    pub file_token: Option<String>,
    pub assignment_id: Option<i64>,
    pub topic_id: Option<i64>,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}

// Student-created discussion topic; its contribution thread parallels
// the assignment forums
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionTopic {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub author_id: i64,
    pub contribution_id: i64,
    pub content: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl<'de> Deserialize<'de> for ReactionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ReactionKind>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactionKind::Like => write!(f, "like"),
            ReactionKind::Dislike => write!(f, "dislike"),
        }
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(ReactionKind::Like),
            "dislike" => Ok(ReactionKind::Dislike),
            _ => Err(format!(
                "Invalid reaction kind: '{s}'. Supported kinds: like, dislike"
            )),
        }
    }
}

// One reaction per (student, contribution); no timestamp on purpose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    pub student_id: i64,
    pub contribution_id: i64,
    pub kind: ReactionKind,
}

/// Checks that a contribution payload is consistent with its declared kind.
/// Returns the broken rule on failure.
pub fn validate_contribution(
    kind: ContributionKind,
    content: Option<&str>,
    file_token: Option<&str>,
) -> Result<(), &'static str> {
    match kind {
        ContributionKind::Text => {
            if content.is_none_or(|c| c.trim().is_empty()) {
                return Err("text contribution requires non-empty content");
            }
            if file_token.is_some() {
                return Err("text contribution must not carry a file");
            }
        }
        ContributionKind::File => {
            if file_token.is_none_or(|t| t.is_empty()) {
                return Err("file contribution requires an uploaded file");
            }
            if content.is_some_and(|c| !c.trim().is_empty()) {
                return Err("file contribution must not carry text content");
            }
        }
    }
    Ok(())
}

/// Checks a new discussion topic. Both fields are shown on the topic
/// index, so neither may be blank.
pub fn validate_topic(title: &str, description: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("topic title is required");
    }
    if description.trim().is_empty() {
        return Err("topic description is required");
    }
    Ok(())
}

// Outcome of applying a reaction to the current (student, contribution) state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReactionTransition {
    // No existing reaction: insert the requested kind
    Insert,
    // Same kind again: toggle off, delete the row
    Remove,
    // Different kind: update the row in place
    Switch,
}

/// The reaction toggle state machine. Pure; the storage layer applies the
/// resulting transition inside one transaction on the unique key.
pub fn reaction_transition(
    current: Option<ReactionKind>,
    requested: ReactionKind,
) -> ReactionTransition {
    match current {
        None => ReactionTransition::Insert,
        Some(existing) if existing == requested => ReactionTransition::Remove,
        Some(_) => ReactionTransition::Switch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_contribution_valid() {
        assert!(validate_contribution(ContributionKind::Text, Some("hello"), None).is_ok());
    }

    #[test]
    fn test_text_contribution_requires_content() {
        assert!(validate_contribution(ContributionKind::Text, None, None).is_err());
        assert!(validate_contribution(ContributionKind::Text, Some("   "), None).is_err());
    }

    #[test]
    fn test_text_contribution_rejects_file() {
        assert!(validate_contribution(ContributionKind::Text, Some("hello"), Some("tok")).is_err());
    }

    #[test]
    fn test_file_contribution_valid() {
        assert!(validate_contribution(ContributionKind::File, None, Some("tok")).is_ok());
        // An empty content string is treated as absent
        assert!(validate_contribution(ContributionKind::File, Some(""), Some("tok")).is_ok());
    }

    #[test]
    fn test_file_contribution_requires_file() {
        assert!(validate_contribution(ContributionKind::File, None, None).is_err());
        assert!(validate_contribution(ContributionKind::File, None, Some("")).is_err());
    }

    #[test]
    fn test_file_contribution_rejects_content() {
        assert!(validate_contribution(ContributionKind::File, Some("text"), Some("tok")).is_err());
    }

    // A contribution hangs off exactly one parent: the assignment or
    // the topic, never both
    #[test]
    fn test_scope_sets_exactly_one_parent() {
        assert_eq!(
            ContributionScope::Assignment(7).parent_ids(),
            (Some(7), None)
        );
        assert_eq!(ContributionScope::Topic(3).parent_ids(), (None, Some(3)));
    }

    #[test]
    fn test_topic_requires_title_and_description() {
        assert!(validate_topic("Exam prep", "Pooling notes for the final").is_ok());
        assert!(validate_topic("", "Pooling notes").is_err());
        assert!(validate_topic("  ", "Pooling notes").is_err());
        assert!(validate_topic("Exam prep", "").is_err());
        assert!(validate_topic("Exam prep", "   ").is_err());
    }

    #[test]
    fn test_reaction_insert_from_none() {
        assert_eq!(
            reaction_transition(None, ReactionKind::Like),
            ReactionTransition::Insert
        );
        assert_eq!(
            reaction_transition(None, ReactionKind::Dislike),
            ReactionTransition::Insert
        );
    }

    #[test]
    fn test_reaction_same_kind_toggles_off() {
        assert_eq!(
            reaction_transition(Some(ReactionKind::Like), ReactionKind::Like),
            ReactionTransition::Remove
        );
        assert_eq!(
            reaction_transition(Some(ReactionKind::Dislike), ReactionKind::Dislike),
            ReactionTransition::Remove
        );
    }

    #[test]
    fn test_reaction_other_kind_switches() {
        assert_eq!(
            reaction_transition(Some(ReactionKind::Like), ReactionKind::Dislike),
            ReactionTransition::Switch
        );
        assert_eq!(
            reaction_transition(Some(ReactionKind::Dislike), ReactionKind::Like),
            ReactionTransition::Switch
        );
    }

    // like,like -> none; like,dislike -> disliked; dislike,dislike -> none
    #[test]
    fn test_reaction_two_cycles() {
        let apply = |state: Option<ReactionKind>, req: ReactionKind| match reaction_transition(
            state, req,
        ) {
            ReactionTransition::Insert | ReactionTransition::Switch => Some(req),
            ReactionTransition::Remove => None,
        };

        let state = apply(apply(None, ReactionKind::Like), ReactionKind::Like);
        assert_eq!(state, None);

        let state = apply(apply(None, ReactionKind::Like), ReactionKind::Dislike);
        assert_eq!(state, Some(ReactionKind::Dislike));

        let state = apply(apply(None, ReactionKind::Dislike), ReactionKind::Dislike);
        assert_eq!(state, None);
    }
}
