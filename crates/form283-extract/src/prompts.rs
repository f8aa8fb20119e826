//! Prompt templates for the field extraction model.

/// System message for the extraction model.
pub const SYSTEM_MESSAGE: &str = "You are an expert at extracting structured data from Hebrew and English forms.
You specialize in processing Israeli National Insurance forms with high accuracy.

Your task is to:
1. Read OCR-extracted text from Form 283 (Israeli workplace injury form)
2. Extract all fields into the exact JSON structure provided
3. Preserve Hebrew text exactly as it appears in the OCR
4. Use empty strings (\"\") for any missing or unreadable fields
5. Format dates as separate day/month/year fields
6. Clean phone numbers (remove dashes/spaces but preserve digits)

Important rules:
- NEVER invent data that's not in the OCR text
- If a field is unclear or missing, use empty string \"\"
- Preserve Hebrew characters exactly (do not transliterate)
- Return ONLY valid JSON matching the schema provided";

/// The target JSON shape, with the Hebrew keys the record deserializes.
const JSON_SCHEMA: &str = r#"{
  "שם משפחה": "",
  "שם פרטי": "",
  "מספר זהות": "",
  "מין": "",
  "תאריך לידה": {"יום": "", "חודש": "", "שנה": ""},
  "כתובת": {
    "רחוב": "",
    "מספר בית": "",
    "כניסה": "",
    "דירה": "",
    "ישוב": "",
    "מיקוד": "",
    "תא דואר": ""
  },
  "טלפון קווי": "",
  "טלפון נייד": "",
  "סוג העבודה": "",
  "תאריך הפגיעה": {"יום": "", "חודש": "", "שנה": ""},
  "שעת הפגיעה": "",
  "מקום התאונה": "",
  "כתובת מקום התאונה": "",
  "תיאור התאונה": "",
  "האיבר שנפגע": "",
  "חתימה": "",
  "תאריך מילוי הטופס": {"יום": "", "חודש": "", "שנה": ""},
  "תאריך קבלת הטופס בקופה": {"יום": "", "חודש": "", "שנה": ""},
  "למילוי ע\"י המוסד הרפואי": {
    "חבר בקופת חולים": "",
    "מהות התאונה": "",
    "אבחנות רפואיות": ""
  }
}"#;

const EXTRACTION_RULES: &str = r#"LANGUAGE HANDLING (CRITICAL):
- The form may be filled in HEBREW, ENGLISH, or MIXED (both languages)
- ALWAYS output JSON with Hebrew field names (as shown in the schema above)
- Preserve field VALUES in their original language from the OCR
- Field labels may appear in Hebrew, English, or camelCase; map ALL
  variations to the Hebrew JSON keys shown in the schema

PHONE NUMBERS:
- טלפון קווי (landline): 9 digits total, ALWAYS starts with 0
- טלפון נייד (mobile): 10 digits total, ALWAYS starts with 05
- Remove dashes/spaces/parentheses but preserve ALL digits including the
  leading 0 (do NOT confuse 0 with 6 or the letter O in handwriting)
  Example: "055-441-2742" -> "0554412742"

DATES:
- Accept DDMMYYYY concatenated (e.g. "25012023"), DD.MM.YYYY, DD/MM/YYYY,
  or labeled boxes ("יום 25 חודש 01 שנה 2023")
- ALWAYS extract to {"יום": "DD", "חודש": "MM", "שנה": "YYYY"}
- Keep leading zeros; use empty strings for all three when missing

CHECKBOXES:
- Checkboxes appear as ":selected:" or ":unselected:"; in Hebrew RTL text
  the marker appears IMMEDIATELY BEFORE the option name
- מקום התאונה has exactly 5 options (במפעל / ת. דרכים בעבודה /
  ת. דרכים בדרך לעבודה/מהעבודה / תאונה בדרך ללא רכב / אחר);
  extract the one option marked selected, plus any free text after "אחר"
- חבר בקופת חולים is one of: כללית, מכבי, מאוחדת, לאומית

SIGNATURE:
- חתימה is the signature mark, not the applicant name; if only a mark
  like "X" appears, use empty string ""

CRITICAL RULES:
- Use empty string "" for missing fields, NOT null or undefined
- Preserve text in its original language
- Do not add explanatory text or comments in the JSON output"#;

/// Build the complete extraction prompt for one document's OCR text.
#[must_use]
pub fn extraction_prompt(ocr_text: &str) -> String {
    format!(
        "Extract all fields from the following Israeli National Insurance Form 283 OCR text.\n\
         This form may be in HEBREW, ENGLISH, or MIXED languages.\n\n\
         **REQUIRED JSON SCHEMA** (use this exact structure with Hebrew keys):\n\
         {JSON_SCHEMA}\n\n\
         {EXTRACTION_RULES}\n\n\
         **OCR TEXT TO PROCESS**:\n\
         ---\n\
         {ocr_text}\n\
         ---\n\n\
         Return ONLY the JSON object with extracted data. Use empty strings (\"\") for missing fields.\n\
         Remember: Hebrew field names in output, but preserve VALUE language from OCR."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_block_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(JSON_SCHEMA).unwrap();
        assert!(value.get("שם משפחה").is_some());
        assert!(value.get("למילוי ע\"י המוסד הרפואי").is_some());
    }

    #[test]
    fn test_schema_matches_record_shape() {
        // The empty schema must deserialize into an all-empty record
        let record: form283_core::FormRecord = serde_json::from_str(JSON_SCHEMA).unwrap();
        assert_eq!(record, form283_core::FormRecord::default());
    }

    #[test]
    fn test_prompt_embeds_ocr_text() {
        let prompt = extraction_prompt("שם משפחה: כהן");
        assert!(prompt.contains("שם משפחה: כהן"));
        assert!(prompt.contains("REQUIRED JSON SCHEMA"));
        assert!(prompt.contains("מיקוד"));
    }

    #[test]
    fn test_system_message_constraints() {
        assert!(SYSTEM_MESSAGE.contains("NEVER invent data"));
        assert!(SYSTEM_MESSAGE.contains("ONLY valid JSON"));
    }
}
