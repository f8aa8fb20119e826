//! The Form 283 structured record.
//!
//! All leaf values are strings to match the form's text-based input; empty
//! strings mean missing. Serde keys are the Hebrew field labels used on the
//! printed form (with the original camelCase names accepted as aliases),
//! so extracted JSON round-trips byte-for-byte. Values are trimmed and
//! numbers are coerced to strings at deserialization, matching what the
//! extraction model is allowed to emit.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a leaf value: accept string/number/null, trim whitespace.
fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(String::new()),
        Some(Raw::Text(s)) => Ok(s.trim().to_string()),
        Some(Raw::Int(n)) => Ok(n.to_string()),
        Some(Raw::Float(n)) => Ok(n.to_string()),
    }
}

/// A date in day/month/year form, as three separate text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    /// Day (יום)
    #[serde(rename = "יום", alias = "day", default, deserialize_with = "de_text")]
    pub day: String,
    /// Month (חודש)
    #[serde(rename = "חודש", alias = "month", default, deserialize_with = "de_text")]
    pub month: String,
    /// Year (שנה)
    #[serde(rename = "שנה", alias = "year", default, deserialize_with = "de_text")]
    pub year: String,
}

impl DateValue {
    /// True when all three components are empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    /// Display form `DD/MM/YYYY`, or an empty string when unfilled.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// A full Israeli address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressValue {
    /// Street name (רחוב)
    #[serde(rename = "רחוב", alias = "street", default, deserialize_with = "de_text")]
    pub street: String,
    /// House number (מספר בית)
    #[serde(
        rename = "מספר בית",
        alias = "houseNumber",
        default,
        deserialize_with = "de_text"
    )]
    pub house_number: String,
    /// Entrance (כניסה)
    #[serde(rename = "כניסה", alias = "entrance", default, deserialize_with = "de_text")]
    pub entrance: String,
    /// Apartment number (דירה)
    #[serde(rename = "דירה", alias = "apartment", default, deserialize_with = "de_text")]
    pub apartment: String,
    /// City or settlement (ישוב)
    #[serde(rename = "ישוב", alias = "city", default, deserialize_with = "de_text")]
    pub city: String,
    /// Postal code (מיקוד)
    #[serde(
        rename = "מיקוד",
        alias = "postalCode",
        default,
        deserialize_with = "de_text"
    )]
    pub postal_code: String,
    /// P.O. box (תא דואר)
    #[serde(rename = "תא דואר", alias = "poBox", default, deserialize_with = "de_text")]
    pub po_box: String,
}

impl AddressValue {
    /// True when every address component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.house_number.is_empty()
            && self.entrance.is_empty()
            && self.apartment.is_empty()
            && self.city.is_empty()
            && self.postal_code.is_empty()
            && self.po_box.is_empty()
    }

    /// Single-line display form, or an empty string when unfilled.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut parts = Vec::new();
        if !self.street.is_empty() {
            let mut street_part = self.street.clone();
            if !self.house_number.is_empty() {
                street_part.push(' ');
                street_part.push_str(&self.house_number);
            }
            if !self.entrance.is_empty() {
                street_part.push_str(" כניסה ");
                street_part.push_str(&self.entrance);
            }
            if !self.apartment.is_empty() {
                street_part.push_str(" דירה ");
                street_part.push_str(&self.apartment);
            }
            parts.push(street_part);
        }
        if !self.city.is_empty() {
            parts.push(self.city.clone());
        }
        if !self.postal_code.is_empty() {
            parts.push(format!("מיקוד {}", self.postal_code));
        }
        if !self.po_box.is_empty() {
            parts.push(format!("ת.ד. {}", self.po_box));
        }

        parts.join(", ")
    }
}

/// Fields filled by the medical institution (Part 5 of the form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalInfo {
    /// Health fund membership (חבר בקופת חולים): כללית/מכבי/מאוחדת/לאומית
    #[serde(
        rename = "חבר בקופת חולים",
        alias = "healthFundMember",
        default,
        deserialize_with = "de_text"
    )]
    pub health_fund_member: String,
    /// Nature of the accident (מהות התאונה)
    #[serde(
        rename = "מהות התאונה",
        alias = "natureOfAccident",
        default,
        deserialize_with = "de_text"
    )]
    pub nature_of_accident: String,
    /// Medical diagnoses (אבחנות רפואיות)
    #[serde(
        rename = "אבחנות רפואיות",
        alias = "medicalDiagnoses",
        default,
        deserialize_with = "de_text"
    )]
    pub medical_diagnoses: String,
}

/// Complete Form 283 record.
///
/// Field declaration order matches the printed form and fixes the leaf
/// enumeration order of [`FIELD_SPECS`](crate::FIELD_SPECS) — do not
/// reorder fields without updating the schema table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Last name (שם משפחה)
    #[serde(rename = "שם משפחה", alias = "lastName", default, deserialize_with = "de_text")]
    pub last_name: String,
    /// First name (שם פרטי)
    #[serde(rename = "שם פרטי", alias = "firstName", default, deserialize_with = "de_text")]
    pub first_name: String,
    /// Israeli ID number (מספר זהות)
    #[serde(rename = "מספר זהות", alias = "idNumber", default, deserialize_with = "de_text")]
    pub id_number: String,
    /// Gender (מין): זכר/נקבה
    #[serde(rename = "מין", alias = "gender", default, deserialize_with = "de_text")]
    pub gender: String,
    /// Date of birth (תאריך לידה)
    #[serde(rename = "תאריך לידה", alias = "dateOfBirth", default)]
    pub date_of_birth: DateValue,
    /// Full address (כתובת)
    #[serde(rename = "כתובת", alias = "address", default)]
    pub address: AddressValue,
    /// Landline phone (טלפון קווי)
    #[serde(
        rename = "טלפון קווי",
        alias = "landlinePhone",
        default,
        deserialize_with = "de_text"
    )]
    pub landline_phone: String,
    /// Mobile phone (טלפון נייד)
    #[serde(
        rename = "טלפון נייד",
        alias = "mobilePhone",
        default,
        deserialize_with = "de_text"
    )]
    pub mobile_phone: String,
    /// Type of work (סוג העבודה)
    #[serde(rename = "סוג העבודה", alias = "jobType", default, deserialize_with = "de_text")]
    pub job_type: String,
    /// Date of injury (תאריך הפגיעה)
    #[serde(rename = "תאריך הפגיעה", alias = "dateOfInjury", default)]
    pub date_of_injury: DateValue,
    /// Time of injury (שעת הפגיעה)
    #[serde(
        rename = "שעת הפגיעה",
        alias = "timeOfInjury",
        default,
        deserialize_with = "de_text"
    )]
    pub time_of_injury: String,
    /// Accident location type (מקום התאונה)
    #[serde(
        rename = "מקום התאונה",
        alias = "accidentLocation",
        default,
        deserialize_with = "de_text"
    )]
    pub accident_location: String,
    /// Address where the accident occurred (כתובת מקום התאונה)
    #[serde(
        rename = "כתובת מקום התאונה",
        alias = "accidentAddress",
        default,
        deserialize_with = "de_text"
    )]
    pub accident_address: String,
    /// Description of the circumstances (תיאור התאונה)
    #[serde(
        rename = "תיאור התאונה",
        alias = "accidentDescription",
        default,
        deserialize_with = "de_text"
    )]
    pub accident_description: String,
    /// Injured body part (האיבר שנפגע)
    #[serde(
        rename = "האיבר שנפגע",
        alias = "injuredBodyPart",
        default,
        deserialize_with = "de_text"
    )]
    pub injured_body_part: String,
    /// Signature (חתימה)
    #[serde(rename = "חתימה", alias = "signature", default, deserialize_with = "de_text")]
    pub signature: String,
    /// Date the form was filled (תאריך מילוי הטופס)
    #[serde(rename = "תאריך מילוי הטופס", alias = "formFillingDate", default)]
    pub form_filling_date: DateValue,
    /// Date the form was received at the clinic (תאריך קבלת הטופס בקופה)
    #[serde(
        rename = "תאריך קבלת הטופס בקופה",
        alias = "formReceiptDateAtClinic",
        default
    )]
    pub form_receipt_date_at_clinic: DateValue,
    /// Fields completed by the medical institution (למילוי ע"י המוסד הרפואי)
    #[serde(
        rename = "למילוי ע\"י המוסד הרפואי",
        alias = "medicalInstitutionFields",
        default
    )]
    pub medical_institution_fields: MedicalInfo,
}
