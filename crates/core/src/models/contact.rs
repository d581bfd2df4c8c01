use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CareError, CareResult};

/// Relationship labels offered by the contact form.
pub const RELATIONSHIPS: &[&str] = &[
    "Primary Doctor",
    "Specialist Doctor",
    "Nurse",
    "Family Member",
    "Son/Daughter",
    "Spouse",
    "Caregiver",
    "Friend",
    "Neighbor",
    "Emergency Services",
];

/// Someone to reach when the user needs help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub relationship: String,
    pub email: Option<String>,
}

impl EmergencyContact {
    /// # Errors
    ///
    /// Returns `CareError::InvalidContact` when the name or phone number
    /// is empty.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        relationship: impl Into<String>,
        email: Option<String>,
    ) -> CareResult<Self> {
        let name = name.into();
        let phone = phone.into();
        if name.trim().is_empty() {
            return Err(CareError::InvalidContact(
                "contact name must not be empty".to_string(),
            ));
        }
        if phone.trim().is_empty() {
            return Err(CareError::InvalidContact(
                "contact phone must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            phone,
            relationship: relationship.into(),
            email,
        })
    }
}

/// Preset one-tap alerts the user can send to caretakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAlert {
    Help,
    Fall,
    Medicine,
    Pain,
    Confused,
    Sick,
}

impl QuickAlert {
    pub const ALL: [QuickAlert; 6] = [
        QuickAlert::Help,
        QuickAlert::Fall,
        QuickAlert::Medicine,
        QuickAlert::Pain,
        QuickAlert::Confused,
        QuickAlert::Sick,
    ];

    pub fn message(self) -> &'static str {
        match self {
            QuickAlert::Help => "I need help",
            QuickAlert::Fall => "I have fallen and need assistance",
            QuickAlert::Medicine => "I forgot to take my medicine",
            QuickAlert::Pain => "I am experiencing pain",
            QuickAlert::Confused => "I am feeling confused or disoriented",
            QuickAlert::Sick => "I am not feeling well",
        }
    }
}

/// Outbound message to the caretaker circle. Delivery (phone/SMS/email)
/// is a best-effort external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "text")]
pub enum CaretakerMessage {
    Quick(QuickAlert),
    Custom(String),
}

impl CaretakerMessage {
    /// # Errors
    ///
    /// Returns `CareError::InvalidContact` for an empty custom message.
    pub fn custom(text: impl Into<String>) -> CareResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CareError::InvalidContact(
                "custom message must not be empty".to_string(),
            ));
        }
        Ok(CaretakerMessage::Custom(text))
    }

    pub fn text(&self) -> &str {
        match self {
            CaretakerMessage::Quick(quick) => quick.message(),
            CaretakerMessage::Custom(text) => text,
        }
    }
}
