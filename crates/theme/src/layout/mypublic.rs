//! Public profile layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HostFragments, LayoutContext, rewrite_pluginfile_urls};
use crate::config::{ThemeSettings, ThemeStrings};
use crate::error::{ThemeError, ThemeResult};
use crate::host::{CourseDirectory, SITE_COURSE_ID, SiteInfo, UserRecord};

/// Profile picture size on the profile page.
const PROFILE_PICTURE_SIZE: u32 = 100;

/// Page state for a public profile view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePage {
    /// The logged-in user looking at the profile.
    pub viewer_id: i64,
    /// Requested profile (`id` parameter); `None` or `0` means the viewer.
    pub profile_id: Option<i64>,
    /// Course the profile is viewed from (`course` parameter).
    pub course_id: Option<i64>,
    pub messaging_enabled: bool,
    /// Viewer may edit other users' profiles.
    pub can_edit_profiles: bool,
    /// Profile user is already one of the viewer's contacts.
    pub is_contact: bool,
    /// Page has secondary navigation with children.
    pub has_secondary_navigation: bool,
    pub fragments: HostFragments,
}

/// A button in the profile header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileButton {
    pub title: String,
    pub url: String,
    pub icon: String,
}

/// Template context for `trellis/mypublic`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MypublicContext {
    pub sitename: String,
    pub bodyclasses: Vec<String>,
    #[serde(flatten)]
    pub fragments: HostFragments,
    pub hasregionmainsettingsmenu: bool,
    pub userpicture: String,
    pub userfullname: String,
    pub headerbuttons: Vec<ProfileButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editprofileurl: Option<String>,
    pub userdescription: String,
    #[serde(flatten)]
    pub footer: BTreeMap<String, serde_json::Value>,
}

impl LayoutContext for MypublicContext {
    const TEMPLATE: &'static str = "trellis/mypublic";
}

/// Message and contact buttons, shown only on other people's profiles.
fn header_buttons(
    page: &ProfilePage,
    user: &UserRecord,
    site: &SiteInfo,
    strings: &ThemeStrings,
) -> Vec<ProfileButton> {
    if user.id == page.viewer_id || !page.messaging_enabled {
        return Vec::new();
    }

    let uid = user.id.to_string();
    let contact = if page.is_contact {
        ProfileButton {
            title: strings.remove_contact.clone(),
            url: site.link("message/index.php", &[("id", uid.as_str()), ("removecontact", uid.as_str())]),
            icon: "fa fa-user-times".to_string(),
        }
    } else {
        ProfileButton {
            title: strings.add_contact.clone(),
            url: site.link("message/index.php", &[("id", uid.as_str()), ("addcontact", uid.as_str())]),
            icon: "fa fa-address-card".to_string(),
        }
    };

    vec![
        ProfileButton {
            title: strings.send_message.clone(),
            url: site.link("message/index.php", &[("id", uid.as_str())]),
            icon: "fa fa-comment".to_string(),
        },
        contact,
    ]
}

/// Edit link for the profile, when the viewer may edit it.
fn edit_profile_url(page: &ProfilePage, user: &UserRecord, course_id: i64, site: &SiteInfo) -> Option<String> {
    let uid = user.id.to_string();
    let course = course_id.to_string();
    let query = [("id", uid.as_str()), ("course", course.as_str())];

    if user.id == page.viewer_id {
        Some(site.link("user/edit.php", &query))
    } else if page.can_edit_profiles {
        Some(site.link("user/editadvanced.php", &query))
    } else {
        None
    }
}

/// Assemble the public profile layout.
pub async fn build<D>(
    page: ProfilePage,
    site: &SiteInfo,
    settings: &ThemeSettings,
    directory: &D,
) -> ThemeResult<MypublicContext>
where
    D: CourseDirectory + ?Sized,
{
    let user_id = page
        .profile_id
        .filter(|id| *id != 0)
        .unwrap_or(page.viewer_id);
    let course_id = page.course_id.unwrap_or(SITE_COURSE_ID);

    let user = directory
        .user(user_id)
        .await?
        .ok_or(ThemeError::UserNotFound(user_id))?;

    let userpicture = directory.picture_url(user.id, PROFILE_PICTURE_SIZE).await?;
    let userdescription =
        rewrite_pluginfile_urls(&user.description, site, user.context_id, "user", "profile", Some(0));

    let mut bodyclasses = Vec::new();
    if page.has_secondary_navigation {
        bodyclasses.push("has-secondarynavigation".to_string());
    }

    let headerbuttons = header_buttons(&page, &user, site, &settings.strings);
    let editprofileurl = edit_profile_url(&page, &user, course_id, site);

    debug!(
        user_id,
        viewer_id = page.viewer_id,
        buttons = headerbuttons.len(),
        "built profile layout"
    );

    let fragments = page.fragments;
    Ok(MypublicContext {
        sitename: site.shortname.clone(),
        bodyclasses,
        hasregionmainsettingsmenu: fragments.has_region_main_settings_menu(),
        fragments,
        userpicture,
        userfullname: user.fullname(),
        headerbuttons,
        editprofileurl,
        userdescription,
        footer: settings.footer.context(),
    })
}
