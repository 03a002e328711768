use std::{collections::BTreeMap, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The content rendered by the front-end, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub personal_info: PersonalInfo,
    pub professional_summary: ProfessionalSummary,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub contact: ContactSection,
    pub footer: Footer,
    pub navigation: Vec<String>,
}

impl Portfolio {
    #[tracing::instrument(name = "Load portfolio content")]
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a valid portfolio document", path.display()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_name: String,
    pub avatar: String,
    pub whatsapp_number: String,
    pub resume_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalSummary {
    pub text: String,
    pub stats: SummaryStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub years_experience: String,
    pub projects_completed: String,
    pub api_integrations: String,
}

/// A third-party product with its logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showcase {
    pub name: String,
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub core_expertise: Vec<String>,
    pub technical: BTreeMap<String, Vec<String>>,
    pub api_integrations: Vec<Showcase>,
    pub zoho_experience: Vec<Showcase>,
    pub other: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coursework: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub form_title: String,
    pub form_description: String,
    pub message_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: String,
}
