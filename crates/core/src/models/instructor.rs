use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    /// Join codes this instructor generated, in creation order.
    #[serde(default)]
    pub class_codes: Vec<String>,
}

impl Instructor {
    pub fn owns_code(&self, code: &str) -> bool {
        self.class_codes.iter().any(|c| c == code)
    }

    pub fn profile(&self) -> InstructorProfile {
        InstructorProfile {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            class_codes: self.class_codes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorProfile {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub class_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInstructorRequest {
    pub full_name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateClassCodeResponse {
    pub code: String,
    pub class_codes: Vec<String>,
}
