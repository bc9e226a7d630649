//! The contact-card data model.
//!
//! This module defines the single record the whole application revolves
//! around, plus the mutation operations the editor exposes. Field names
//! serialize in camelCase so stored snapshots keep the established shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Color theme for the rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Visual template for the rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// The default layout.
    #[default]
    Modern,
    /// A traditional layout.
    Classic,
    /// A stripped-down layout.
    Minimal,
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modern => write!(f, "modern"),
            Self::Classic => write!(f, "classic"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

/// Well-known social media handles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProfiles {
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// Instagram profile URL.
    pub instagram: String,
    /// WhatsApp phone number (digits, no URL).
    pub whatsapp: String,
}

/// Postal address of the contact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    /// Street and number.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Country.
    pub country: String,
}

impl PostalAddress {
    /// Check whether the address carries any content at all.
    ///
    /// The serializer keys the ADR line off the street, but the preview
    /// shows whatever parts are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.zip.is_empty()
            && self.country.is_empty()
    }
}

/// A user-defined label/value pair shown under "Additional Information".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Generated unique identifier, used for removal.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Display value.
    pub value: String,
    /// Optional icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A social platform link beyond the well-known set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform name, unique within a card.
    pub platform: String,
    /// Profile URL.
    pub url: String,
    /// Icon name.
    pub icon: String,
}

/// The contact record.
///
/// Created with defaults, mutated field-by-field by the editor, optionally
/// serialized into a shared snapshot, and cleared when the user resets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactCard {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Company or organization.
    pub organization: String,
    /// Job title.
    pub title: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Website URL.
    pub website: String,
    /// Profile photo as a data URI.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub photo: String,
    /// Company logo as a data URI.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub logo: String,
    /// Well-known social handles.
    pub social: SocialProfiles,
    /// Postal address.
    pub address: PostalAddress,
    /// Color theme.
    pub theme: Theme,
    /// Layout template.
    pub template: Template,
    /// Accent color as a hex string.
    pub brand_color: String,
    /// User-defined label/value fields.
    pub custom_fields: Vec<CustomField>,
    /// Additional social platform links.
    pub additional_social: Vec<SocialLink>,
    /// Gallery image URLs.
    pub images: Vec<String>,
    /// Last generated shareable link, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shareable_link: Option<String>,
}

/// Default accent color.
const DEFAULT_BRAND_COLOR: &str = "#0066ff";

impl Default for ContactCard {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            organization: String::new(),
            title: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            photo: String::new(),
            logo: String::new(),
            social: SocialProfiles::default(),
            address: PostalAddress::default(),
            theme: Theme::default(),
            template: Template::default(),
            brand_color: DEFAULT_BRAND_COLOR.to_string(),
            custom_fields: Vec::new(),
            additional_social: Vec::new(),
            images: Vec::new(),
            shareable_link: None,
        }
    }
}

impl ContactCard {
    /// The full display name, with surrounding whitespace trimmed when a
    /// part is missing.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Initials used as the photo placeholder.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        if let Some(c) = self.first_name.chars().next() {
            initials.push(c);
        }
        if let Some(c) = self.last_name.chars().next() {
            initials.push(c);
        }
        initials
    }

    /// Append a custom field with a freshly generated unique id.
    ///
    /// Returns the id assigned to the new field.
    pub fn add_custom_field(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        icon: Option<String>,
    ) -> String {
        let id = Uuid::new_v4().simple().to_string();
        self.custom_fields.push(CustomField {
            id: id.clone(),
            label: label.into(),
            value: value.into(),
            icon,
        });
        id
    }

    /// Remove a custom field by id.
    ///
    /// Returns `true` if a field was removed.
    pub fn remove_custom_field(&mut self, id: &str) -> bool {
        let before = self.custom_fields.len();
        self.custom_fields.retain(|field| field.id != id);
        self.custom_fields.len() < before
    }

    /// Add a social platform link.
    ///
    /// Platform names are unique within a card.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSocialPlatform`] if a link for the platform
    /// already exists.
    pub fn add_social_link(
        &mut self,
        platform: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<()> {
        let platform = platform.into();
        if self
            .additional_social
            .iter()
            .any(|link| link.platform == platform)
        {
            return Err(Error::duplicate_platform(platform));
        }
        self.additional_social.push(SocialLink {
            platform,
            url: url.into(),
            icon: icon.into(),
        });
        Ok(())
    }

    /// Remove a social platform link by platform name.
    ///
    /// Returns `true` if a link was removed.
    pub fn remove_social_link(&mut self, platform: &str) -> bool {
        let before = self.additional_social.len();
        self.additional_social.retain(|link| link.platform != platform);
        self.additional_social.len() < before
    }

    /// Add a gallery image URL, ignoring exact duplicates.
    pub fn add_image(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.images.contains(&url) {
            self.images.push(url);
        }
    }

    /// Remove a gallery image by URL.
    ///
    /// Returns `true` if an image was removed.
    pub fn remove_image(&mut self, url: &str) -> bool {
        let before = self.images.len();
        self.images.retain(|image| image != url);
        self.images.len() < before
    }

    /// Reset the record to its defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
