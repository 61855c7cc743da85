//! Localized user-facing strings.

use crate::model::note::ValidationIssue;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Display language for user-facing strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ar => &AR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ar" | "arabic" => Ok(Self::Ar),
            other => Err(format!("unsupported locale `{other}`; expected en|ar")),
        }
    }
}

/// String table for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub missing_title: &'static str,
    pub missing_content: &'static str,
    pub no_notes: &'static str,
    pub select_note: &'static str,
    pub create_form_title: &'static str,
    pub edit_form_title: &'static str,
    pub save_label: &'static str,
    pub update_label: &'static str,
}

impl Messages {
    pub fn validation(&self, issue: ValidationIssue) -> &'static str {
        match issue {
            ValidationIssue::MissingTitle => self.missing_title,
            ValidationIssue::MissingContent => self.missing_content,
        }
    }
}

static EN: Messages = Messages {
    missing_title: "Please enter the note title",
    missing_content: "Please enter the note content",
    no_notes: "No notes yet",
    select_note: "Please select a note",
    create_form_title: "New note",
    edit_form_title: "Edit note",
    save_label: "Save",
    update_label: "Update",
};

static AR: Messages = Messages {
    missing_title: "الرجاء إدخال عنوان الملاحظة",
    missing_content: "الرجاء إدخال محتوى الملاحظة",
    no_notes: "لا يوجد ملاحظات",
    select_note: "الرجاء اختيار ملاحظة",
    create_form_title: "ملاحظة جديدة",
    edit_form_title: "تعديل ملاحظة",
    save_label: "حفظ",
    update_label: "تعديل",
};

#[cfg(test)]
mod tests {
    use super::Locale;
    use crate::model::note::ValidationIssue;

    #[test]
    fn locale_parses_codes_case_insensitively() {
        assert_eq!(" AR ".parse::<Locale>().unwrap(), Locale::Ar);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn every_locale_has_distinct_validation_messages() {
        for locale in [Locale::En, Locale::Ar] {
            let messages = locale.messages();
            assert_ne!(
                messages.validation(ValidationIssue::MissingTitle),
                messages.validation(ValidationIssue::MissingContent)
            );
        }
    }
}
