use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::consts::RecordId;

use super::status::RecordStatus;

/// The backend writes `null` for form fields that were left empty, treat those as the default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DisappearanceLocation {
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
    #[serde(
        rename = "pontoReferencia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_point: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MissingPersonRecord {
    pub id: RecordId,
    #[serde(rename = "nomeCompleto", default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "telefoneContato", default)]
    pub contact_phone: Option<String>,
    #[serde(rename = "sexo", default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(rename = "dataDesaparecimento", default)]
    pub disappearance_date: Option<String>,
    #[serde(
        rename = "localDesaparecimento",
        default,
        deserialize_with = "null_as_default"
    )]
    pub disappearance_location: DisappearanceLocation,
    #[serde(rename = "caracteristicas", default)]
    pub characteristics: Option<String>,
    #[serde(rename = "fotoUrl", default, deserialize_with = "null_as_default")]
    pub photo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl MissingPersonRecord {
    /// A freshly registered record: only the id and name are known and the person is missing
    pub fn new(id: RecordId, full_name: String) -> Self {
        MissingPersonRecord {
            id,
            full_name,
            birth_date: None,
            contact_phone: None,
            sex: None,
            disappearance_date: None,
            disappearance_location: DisappearanceLocation::default(),
            characteristics: None,
            photo_url: String::new(),
            status: RecordStatus::Missing.to_string(),
        }
    }

    pub fn classify_status(&self) -> RecordStatus {
        RecordStatus::classify(&self.status)
    }

    pub fn city(&self) -> &str {
        self.disappearance_location.city.as_deref().unwrap_or("")
    }

    pub fn state(&self) -> &str {
        self.disappearance_location.state.as_deref().unwrap_or("")
    }

    /// Date portion of the disappearance timestamp, `None` when the backend has no date
    pub fn disappearance_day(&self) -> Option<&str> {
        match self.disappearance_date.as_deref() {
            Some("") | None => None,
            Some(date) => date.split('T').next(),
        }
    }

    /// Photo path rooted at `/`, `None` when the record has no photo
    pub fn photo_path(&self) -> Option<String> {
        if self.photo_url.is_empty() {
            return None;
        }

        if self.photo_url.starts_with('/') {
            Some(self.photo_url.clone())
        } else {
            Some(format!("/{}", self.photo_url))
        }
    }
}
