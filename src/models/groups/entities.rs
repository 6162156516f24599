use serde::{Deserialize, Serialize};

// Work group lifecycle status
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    Open,
    Closed,
    Pending,
    Ready,
}

impl<'de> Deserialize<'de> for GroupStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<GroupStatus>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupStatus::Open => write!(f, "open"),
            GroupStatus::Closed => write!(f, "closed"),
            GroupStatus::Pending => write!(f, "pending"),
            GroupStatus::Ready => write!(f, "ready"),
        }
    }
}

impl std::str::FromStr for GroupStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(GroupStatus::Open),
            "closed" => Ok(GroupStatus::Closed),
            "pending" => Ok(GroupStatus::Pending),
            "ready" => Ok(GroupStatus::Ready),
            _ => Err(format!(
                "Invalid group status: '{s}'. Supported statuses: open, closed, pending, ready"
            )),
        }
    }
}

// Work group scoped to one assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkGroup {
    pub id: i64,
    pub name: String,
    pub status: GroupStatus,
    pub capacity: i32,
    pub assignment_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// Join record linking a student to a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: i64,
    pub student_id: i64,
    pub group_id: i64,
    pub is_leader: bool,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// Final report handed in for a group, referencing an uploaded file.
// A group may hand in several revisions; the latest one counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub id: i64,
    pub group_id: i64,
    pub file_token: String,
    pub submitted_by: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Capacity gate for the join flow. The storage layer re-checks this inside
/// the join transaction; it lives here so the rule is testable on its own.
pub fn has_free_seat(member_count: i64, capacity: i32) -> bool {
    member_count < capacity as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_seat_below_capacity() {
        assert!(has_free_seat(0, 5));
        assert!(has_free_seat(4, 5));
    }

    #[test]
    fn test_no_seat_at_or_above_capacity() {
        assert!(!has_free_seat(5, 5));
        assert!(!has_free_seat(6, 5));
    }

    #[test]
    fn test_zero_capacity_group_never_accepts() {
        assert!(!has_free_seat(0, 0));
    }

    // Six students try a five-seat group: the first five are seated,
    // the sixth is refused and the count stays at capacity.
    #[test]
    fn test_join_sequence_stops_at_capacity() {
        let capacity = 5;
        let mut member_count: i64 = 0;

        let mut join = |count: &mut i64| -> bool {
            if has_free_seat(*count, capacity) {
                *count += 1;
                true
            } else {
                false
            }
        };

        for _ in 0..5 {
            assert!(join(&mut member_count));
        }
        assert_eq!(member_count, 5);

        assert!(!join(&mut member_count), "sixth join must be refused");
        assert_eq!(member_count, 5);
    }
}
