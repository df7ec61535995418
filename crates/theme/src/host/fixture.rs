//! In-memory host used by the preview CLI and tests.

use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;

use super::{AssetSource, CourseCatalog, CourseDirectory, CourseModule, UserRecord};

/// A role assignment inside one context.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleAssignment {
    pub role_id: i64,
    pub context_id: i64,
    pub user_id: i64,
}

/// Host state held entirely in memory, loadable from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticHost {
    /// Role short name -> role id.
    pub roles: HashMap<String, i64>,
    pub users: Vec<UserRecord>,
    pub assignments: Vec<RoleAssignment>,
    /// Course id -> module instances.
    pub modules: HashMap<i64, Vec<CourseModule>>,
    /// Relative path -> file content.
    pub assets: HashMap<String, String>,
    /// Uploaded preset name -> content.
    pub presets: HashMap<String, String>,
    /// Base used for generated picture URLs.
    pub picture_base: String,
}

impl StaticHost {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid host fixture")
    }

    pub fn with_role(mut self, shortname: &str, id: i64) -> Self {
        self.roles.insert(shortname.to_string(), id);
        self
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_assignment(mut self, role_id: i64, context_id: i64, user_id: i64) -> Self {
        self.assignments.push(RoleAssignment {
            role_id,
            context_id,
            user_id,
        });
        self
    }

    pub fn with_modules(mut self, course_id: i64, modules: Vec<CourseModule>) -> Self {
        self.modules.insert(course_id, modules);
        self
    }

    pub fn with_asset(mut self, path: &str, content: &str) -> Self {
        self.assets.insert(path.to_string(), content.to_string());
        self
    }

    pub fn with_preset(mut self, name: &str, content: &str) -> Self {
        self.presets.insert(name.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl CourseDirectory for StaticHost {
    async fn role_id(&self, shortname: &str) -> Result<Option<i64>> {
        Ok(self.roles.get(shortname).copied())
    }

    async fn role_users(&self, role_id: i64, context_id: i64) -> Result<Vec<UserRecord>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.role_id == role_id && a.context_id == context_id)
            .filter_map(|a| self.users.iter().find(|u| u.id == a.user_id))
            .cloned()
            .collect())
    }

    async fn user(&self, user_id: i64) -> Result<Option<UserRecord>> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn picture_url(&self, user_id: i64, size: u32) -> Result<String> {
        Ok(format!("{}/user/{user_id}/f{size}", self.picture_base))
    }
}

#[async_trait]
impl CourseCatalog for StaticHost {
    async fn course_modules(&self, course_id: i64) -> Result<Vec<CourseModule>> {
        Ok(self.modules.get(&course_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl AssetSource for StaticHost {
    async fn read_asset(&self, relative_path: &str) -> Result<String> {
        self.assets
            .get(relative_path)
            .cloned()
            .ok_or_else(|| anyhow!("asset not found: {relative_path}"))
    }

    async fn stored_preset(&self, filename: &str) -> Result<Option<String>> {
        Ok(self.presets.get(filename).cloned())
    }
}
