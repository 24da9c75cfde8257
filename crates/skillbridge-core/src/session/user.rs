//! User profile domain model.
//!
//! Represents the logged-in learner: identity, optional public profile fields
//! and learning progress.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A learner's profile and progress.
///
/// Optional profile fields are omitted from the serialized form when absent,
/// so absence survives a persist/rehydrate round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    /// Display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Employer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default)]
    pub completed_courses: BTreeSet<String>,

    /// Learning path the user is enrolled in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_path: Option<String>,

    /// Course id -> completion percentage.
    ///
    /// Values are stored as given; nothing here enforces the 0-100 range.
    #[serde(default)]
    pub progress: BTreeMap<String, u32>,
}

impl User {
    /// Creates a user with only the identity fields set.
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            avatar: None,
            bio: None,
            location: None,
            company: None,
            website: None,
            completed_courses: BTreeSet::new(),
            current_path: None,
            progress: BTreeMap::new(),
        }
    }

    /// Shallow-merges `update` into this record. Fields left `None` in the
    /// update are retained.
    pub fn apply(&mut self, update: UserUpdate) {
        let UserUpdate {
            id,
            email,
            name,
            avatar,
            bio,
            location,
            company,
            website,
            completed_courses,
            current_path,
            progress,
        } = update;

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(company) = company {
            self.company = company;
        }
        if let Some(website) = website {
            self.website = website;
        }
        if let Some(completed_courses) = completed_courses {
            self.completed_courses = completed_courses;
        }
        if let Some(current_path) = current_path {
            self.current_path = current_path;
        }
        if let Some(progress) = progress {
            self.progress = progress;
        }
    }

    /// Completion percentage for a course, if any was recorded.
    pub fn progress_for(&self, course_id: &str) -> Option<u32> {
        self.progress.get(course_id).copied()
    }
}

/// Partial user record for [`User::apply`].
///
/// Optional profile fields are doubly wrapped: `Some(None)` clears the field,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub completed_courses: Option<BTreeSet<String>>,
    pub current_path: Option<Option<String>>,
    pub progress: Option<BTreeMap<String, u32>>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = Some(location);
        self
    }

    pub fn company(mut self, company: Option<String>) -> Self {
        self.company = Some(company);
        self
    }

    pub fn website(mut self, website: Option<String>) -> Self {
        self.website = Some(website);
        self
    }

    pub fn completed_courses(mut self, courses: BTreeSet<String>) -> Self {
        self.completed_courses = Some(courses);
        self
    }

    pub fn current_path(mut self, path: Option<String>) -> Self {
        self.current_path = Some(path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        let mut user = User::new("u-1", "u1@example.com", "Ada");
        user.bio = Some("Curious".to_string());
        user.location = Some("Lisbon".to_string());
        user
    }

    #[test]
    fn test_apply_overwrites_supplied_and_keeps_absent() {
        let mut user = sample();
        user.apply(UserUpdate::new().name("Ada L.").company(Some("Engines Ltd".to_string())));

        assert_eq!(user.name, "Ada L.");
        assert_eq!(user.company.as_deref(), Some("Engines Ltd"));
        assert_eq!(user.bio.as_deref(), Some("Curious"));
        assert_eq!(user.email, "u1@example.com");
    }

    #[test]
    fn test_apply_can_clear_optional_field() {
        let mut user = sample();
        user.apply(UserUpdate::new().location(None));
        assert!(user.location.is_none());
        assert_eq!(user.bio.as_deref(), Some("Curious"));
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut user = sample();
        let update = UserUpdate::new();
        assert!(update.is_empty());
        user.apply(update);
        assert_eq!(user, sample());
    }

    #[test]
    fn test_absent_optional_fields_are_not_serialized() {
        let user = User::new("u-2", "u2@example.com", "Bo");
        let json = serde_json::to_value(&user).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("avatar"));
        assert!(!object.contains_key("currentPath"));
        assert!(object.contains_key("completedCourses"));
    }
}
