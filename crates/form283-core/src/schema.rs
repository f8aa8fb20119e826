//! Static field schema for Form 283.
//!
//! The schema is an ordered table of every leaf field in the record:
//! its dotted Hebrew path, the format rule it is subject to (if any),
//! and a pure getter from [`FormRecord`]. The table order matches field
//! declaration order on the form (root fields in declared order,
//! composite sub-fields depth-first) and fixes the enumeration order of
//! leaf traversal, missing-field reporting, and correction ordering.
//!
//! Representing the schema as data — rather than introspecting the
//! record at runtime — keeps traversal a pure function and decides each
//! field's rule at schema-definition time.

use crate::record::{DateValue, FormRecord};

/// Pure getter for a leaf value.
pub type Getter = for<'a> fn(&'a FormRecord) -> &'a str;

/// Pure getter for the date composite owning a date-component leaf.
pub type DateGetter = for<'a> fn(&'a FormRecord) -> &'a DateValue;

/// Which component of a date composite a leaf holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComponent {
    /// Day of month
    Day,
    /// Month
    Month,
    /// Year
    Year,
}

/// The format rule a leaf field is subject to.
///
/// `FreeText` leaves count toward completeness only; every other kind
/// marks a *data field* that also counts toward accuracy.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// No format rule; filled/unfilled only.
    FreeText,
    /// Israeli ID number with check digit (מספר זהות).
    NationalId,
    /// Israeli mobile phone, 10 digits starting 05.
    MobilePhone,
    /// Israeli landline phone, 9 digits starting 0.
    LandlinePhone,
    /// Israeli postal code, 7 digits.
    PostalCode,
    /// One component of a day/month/year date. Carries a getter for the
    /// owning composite so day validity can see its sibling month/year.
    Date {
        /// The component this leaf holds.
        component: DateComponent,
        /// Getter for the owning date composite.
        date: DateGetter,
    },
}

impl FieldKind {
    /// True for leaves subject to a format rule ("data fields").
    #[inline]
    #[must_use]
    pub const fn is_data_field(&self) -> bool {
        !matches!(self, Self::FreeText)
    }
}

/// One leaf field of the schema.
pub struct FieldSpec {
    /// Dotted path from the record root, in the form's Hebrew labels.
    pub path: &'static str,
    /// Format rule assignment.
    pub kind: FieldKind,
    /// Pure getter for the leaf value.
    pub get: Getter,
}

/// Total number of leaf fields in the Form 283 schema.
///
/// Fixed at compile time; identical across every validation call.
pub const TOTAL_FIELDS: usize = 35;

/// The ordered leaf schema for Form 283.
pub static FIELD_SPECS: [FieldSpec; TOTAL_FIELDS] = [
    FieldSpec {
        path: "שם משפחה",
        kind: FieldKind::FreeText,
        get: |r| r.last_name.as_str(),
    },
    FieldSpec {
        path: "שם פרטי",
        kind: FieldKind::FreeText,
        get: |r| r.first_name.as_str(),
    },
    FieldSpec {
        path: "מספר זהות",
        kind: FieldKind::NationalId,
        get: |r| r.id_number.as_str(),
    },
    FieldSpec {
        path: "מין",
        kind: FieldKind::FreeText,
        get: |r| r.gender.as_str(),
    },
    FieldSpec {
        path: "תאריך לידה.יום",
        kind: FieldKind::Date {
            component: DateComponent::Day,
            date: |r| &r.date_of_birth,
        },
        get: |r| r.date_of_birth.day.as_str(),
    },
    FieldSpec {
        path: "תאריך לידה.חודש",
        kind: FieldKind::Date {
            component: DateComponent::Month,
            date: |r| &r.date_of_birth,
        },
        get: |r| r.date_of_birth.month.as_str(),
    },
    FieldSpec {
        path: "תאריך לידה.שנה",
        kind: FieldKind::Date {
            component: DateComponent::Year,
            date: |r| &r.date_of_birth,
        },
        get: |r| r.date_of_birth.year.as_str(),
    },
    FieldSpec {
        path: "כתובת.רחוב",
        kind: FieldKind::FreeText,
        get: |r| r.address.street.as_str(),
    },
    FieldSpec {
        path: "כתובת.מספר בית",
        kind: FieldKind::FreeText,
        get: |r| r.address.house_number.as_str(),
    },
    FieldSpec {
        path: "כתובת.כניסה",
        kind: FieldKind::FreeText,
        get: |r| r.address.entrance.as_str(),
    },
    FieldSpec {
        path: "כתובת.דירה",
        kind: FieldKind::FreeText,
        get: |r| r.address.apartment.as_str(),
    },
    FieldSpec {
        path: "כתובת.ישוב",
        kind: FieldKind::FreeText,
        get: |r| r.address.city.as_str(),
    },
    FieldSpec {
        path: "כתובת.מיקוד",
        kind: FieldKind::PostalCode,
        get: |r| r.address.postal_code.as_str(),
    },
    FieldSpec {
        path: "כתובת.תא דואר",
        kind: FieldKind::FreeText,
        get: |r| r.address.po_box.as_str(),
    },
    FieldSpec {
        path: "טלפון קווי",
        kind: FieldKind::LandlinePhone,
        get: |r| r.landline_phone.as_str(),
    },
    FieldSpec {
        path: "טלפון נייד",
        kind: FieldKind::MobilePhone,
        get: |r| r.mobile_phone.as_str(),
    },
    FieldSpec {
        path: "סוג העבודה",
        kind: FieldKind::FreeText,
        get: |r| r.job_type.as_str(),
    },
    FieldSpec {
        path: "תאריך הפגיעה.יום",
        kind: FieldKind::Date {
            component: DateComponent::Day,
            date: |r| &r.date_of_injury,
        },
        get: |r| r.date_of_injury.day.as_str(),
    },
    FieldSpec {
        path: "תאריך הפגיעה.חודש",
        kind: FieldKind::Date {
            component: DateComponent::Month,
            date: |r| &r.date_of_injury,
        },
        get: |r| r.date_of_injury.month.as_str(),
    },
    FieldSpec {
        path: "תאריך הפגיעה.שנה",
        kind: FieldKind::Date {
            component: DateComponent::Year,
            date: |r| &r.date_of_injury,
        },
        get: |r| r.date_of_injury.year.as_str(),
    },
    FieldSpec {
        path: "שעת הפגיעה",
        kind: FieldKind::FreeText,
        get: |r| r.time_of_injury.as_str(),
    },
    FieldSpec {
        path: "מקום התאונה",
        kind: FieldKind::FreeText,
        get: |r| r.accident_location.as_str(),
    },
    FieldSpec {
        path: "כתובת מקום התאונה",
        kind: FieldKind::FreeText,
        get: |r| r.accident_address.as_str(),
    },
    FieldSpec {
        path: "תיאור התאונה",
        kind: FieldKind::FreeText,
        get: |r| r.accident_description.as_str(),
    },
    FieldSpec {
        path: "האיבר שנפגע",
        kind: FieldKind::FreeText,
        get: |r| r.injured_body_part.as_str(),
    },
    FieldSpec {
        path: "חתימה",
        kind: FieldKind::FreeText,
        get: |r| r.signature.as_str(),
    },
    FieldSpec {
        path: "תאריך מילוי הטופס.יום",
        kind: FieldKind::Date {
            component: DateComponent::Day,
            date: |r| &r.form_filling_date,
        },
        get: |r| r.form_filling_date.day.as_str(),
    },
    FieldSpec {
        path: "תאריך מילוי הטופס.חודש",
        kind: FieldKind::Date {
            component: DateComponent::Month,
            date: |r| &r.form_filling_date,
        },
        get: |r| r.form_filling_date.month.as_str(),
    },
    FieldSpec {
        path: "תאריך מילוי הטופס.שנה",
        kind: FieldKind::Date {
            component: DateComponent::Year,
            date: |r| &r.form_filling_date,
        },
        get: |r| r.form_filling_date.year.as_str(),
    },
    FieldSpec {
        path: "תאריך קבלת הטופס בקופה.יום",
        kind: FieldKind::Date {
            component: DateComponent::Day,
            date: |r| &r.form_receipt_date_at_clinic,
        },
        get: |r| r.form_receipt_date_at_clinic.day.as_str(),
    },
    FieldSpec {
        path: "תאריך קבלת הטופס בקופה.חודש",
        kind: FieldKind::Date {
            component: DateComponent::Month,
            date: |r| &r.form_receipt_date_at_clinic,
        },
        get: |r| r.form_receipt_date_at_clinic.month.as_str(),
    },
    FieldSpec {
        path: "תאריך קבלת הטופס בקופה.שנה",
        kind: FieldKind::Date {
            component: DateComponent::Year,
            date: |r| &r.form_receipt_date_at_clinic,
        },
        get: |r| r.form_receipt_date_at_clinic.year.as_str(),
    },
    FieldSpec {
        path: "למילוי ע\"י המוסד הרפואי.חבר בקופת חולים",
        kind: FieldKind::FreeText,
        get: |r| r.medical_institution_fields.health_fund_member.as_str(),
    },
    FieldSpec {
        path: "למילוי ע\"י המוסד הרפואי.מהות התאונה",
        kind: FieldKind::FreeText,
        get: |r| r.medical_institution_fields.nature_of_accident.as_str(),
    },
    FieldSpec {
        path: "למילוי ע\"י המוסד הרפואי.אבחנות רפואיות",
        kind: FieldKind::FreeText,
        get: |r| r.medical_institution_fields.medical_diagnoses.as_str(),
    },
];
