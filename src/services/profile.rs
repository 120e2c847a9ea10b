use crate::{
    error::{AppError, AppResult},
    models::{profile::VILLAGES, UserProfile},
};

/// Editable fields of the profile. The email address is not among them.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub village: Option<String>,
}

pub struct ProfileService {
    profile: UserProfile,
}

impl ProfileService {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Apply an edit. All fields are checked before anything is written.
    pub fn update(&mut self, update: ProfileUpdate) -> AppResult<UserProfile> {
        if let Some(name) = &update.first_name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("first_name must not be empty".to_string()));
            }
        }
        if let Some(name) = &update.last_name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("last_name must not be empty".to_string()));
            }
        }
        if let Some(phone) = &update.phone {
            if !is_phone_number(phone) {
                return Err(AppError::Validation(
                    "phone may only contain digits, spaces, '+' or '-'".to_string(),
                ));
            }
        }
        if let Some(village) = &update.village {
            if !VILLAGES.contains(&village.as_str()) {
                return Err(AppError::Validation(format!("unknown village '{}'", village)));
            }
        }

        if let Some(v) = update.first_name {
            self.profile.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.profile.last_name = v;
        }
        if let Some(v) = update.phone {
            self.profile.phone = v;
        }
        if let Some(v) = update.address {
            self.profile.address = v;
        }
        if let Some(v) = update.village {
            self.profile.village = v;
        }

        tracing::info!("Profile updated");
        Ok(self.profile.clone())
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}

fn is_phone_number(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '+' || c == '-')
}
