use mongodb::bson::{self, Document};
use serde::Serialize;

/// Multipart field name carrying the optional prescription file.
pub const PRESCRIPTION_FIELD: &str = "prescription";

/// The surgery booking contract fields. Everything is optional at the
/// boundary; the store accepts whatever subset the client sent.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeryBooking {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub doctor: Option<String>,
    pub surgery_type: Option<String>,
    pub date: Option<String>,
    pub prescription_file_name: Option<String>,
}

impl SurgeryBooking {
    /// Assign one multipart text field. Fields outside the contract are
    /// ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = Some(value),
            "email" => self.email = Some(value),
            "phone" => self.phone = Some(value),
            "doctor" => self.doctor = Some(value),
            "surgeryType" => self.surgery_type = Some(value),
            "date" => self.date = Some(value),
            _ => {}
        }
    }

    pub fn to_document(&self) -> bson::ser::Result<Document> {
        bson::to_document(self)
    }
}
