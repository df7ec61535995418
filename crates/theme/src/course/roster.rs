//! Teacher roster shown in the course header.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ThemeResult;
use crate::host::CourseDirectory;

/// Role whose holders are listed as course teachers.
pub const TEACHER_ROLE: &str = "editingteacher";

/// Default profile picture size in the roster.
const ROSTER_PICTURE_SIZE: u32 = 35;

/// A teacher card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub fullname: String,
    /// Only present when the teacher shows their address to others.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Profile picture URL.
    pub image: String,
}

/// Users holding the editing-teacher role in `context_id`.
///
/// A site without that role yields an empty roster.
pub async fn teacher_roster<D>(directory: &D, context_id: i64) -> ThemeResult<Vec<Teacher>>
where
    D: CourseDirectory + ?Sized,
{
    let Some(role_id) = directory.role_id(TEACHER_ROLE).await? else {
        warn!(role = TEACHER_ROLE, "teacher role missing, roster left empty");
        return Ok(Vec::new());
    };

    let users = directory.role_users(role_id, context_id).await?;
    let mut teachers = Vec::with_capacity(users.len());
    for user in users {
        let image = directory.picture_url(user.id, ROSTER_PICTURE_SIZE).await?;
        let email = (user.mail_display > 0 && !user.email.is_empty()).then(|| user.email.clone());
        teachers.push(Teacher {
            id: user.id,
            fullname: user.fullname(),
            email,
            image,
        });
    }

    debug!(context_id, teachers = teachers.len(), "built teacher roster");
    Ok(teachers)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::host::{StaticHost, UserRecord};

    fn user(id: i64, first: &str, mail_display: i32) -> UserRecord {
        UserRecord {
            id,
            firstname: first.to_string(),
            lastname: "Teacher".to_string(),
            email: format!("{}@lms.test", first.to_lowercase()),
            mail_display,
            description: String::new(),
            context_id: 0,
        }
    }

    #[tokio::test]
    async fn lists_teachers_and_hides_private_email() {
        let host = StaticHost {
            picture_base: "http://lms.test/pix".to_string(),
            ..StaticHost::default()
        }
        .with_role(TEACHER_ROLE, 3)
        .with_user(user(10, "Ana", 1))
        .with_user(user(11, "Ben", 0))
        .with_assignment(3, 50, 10)
        .with_assignment(3, 50, 11);

        let roster = teacher_roster(&host, 50).await.unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].fullname, "Ana Teacher");
        assert_eq!(roster[0].email.as_deref(), Some("ana@lms.test"));
        assert_eq!(roster[0].image, "http://lms.test/pix/user/10/f35");
        assert_eq!(roster[1].email, None);

        let json = serde_json::to_value(&roster[1]).unwrap();
        assert!(json.get("email").is_none());
    }

    #[tokio::test]
    async fn missing_role_gives_empty_roster() {
        let host = StaticHost::default().with_user(user(10, "Ana", 1));
        assert!(teacher_roster(&host, 50).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_contexts_are_ignored() {
        let host = StaticHost::default()
            .with_role(TEACHER_ROLE, 3)
            .with_user(user(10, "Ana", 1))
            .with_assignment(3, 99, 10);
        assert!(teacher_roster(&host, 50).await.unwrap().is_empty());
    }
}
