// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Single per-farm settings document. PUT merges at section granularity:
/// a patch carrying a section replaces that section wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub preferences: PreferenceSettings,
    pub security: SecuritySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub farm_name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub reminder_alerts: bool,
    pub health_alerts: bool,
    pub production_alerts: bool,
    pub low_stock_alerts: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSettings {
    pub currency: String,
    pub date_format: String,
    pub time_zone: String,
    pub language: String,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub session_timeout: i64,
    pub password_change_required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SettingsPatch {
    pub profile: Option<ProfileSettings>,
    pub notifications: Option<NotificationSettings>,
    pub preferences: Option<PreferenceSettings>,
    pub security: Option<SecuritySettings>,
}

impl UserSettings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(profile) = patch.profile {
            self.profile = profile;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(preferences) = patch.preferences {
            self.preferences = preferences;
        }
        if let Some(security) = patch.security {
            self.security = security;
        }
    }
}
