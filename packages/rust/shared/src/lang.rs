//! Language and audience helpers.
//!
//! The pipeline generates courses in several languages; prompts and injected
//! section headings are fully localized only for Indonesian ("id") and
//! English, with English as the fallback for everything else.

/// Language codes accepted in the input file.
pub const VALID_LANGUAGES: &[&str] = &["id", "en", "es", "fr", "de", "pt", "zh", "ja", "ko"];

/// Audience levels accepted in the input file.
pub const VALID_AUDIENCES: &[&str] = &["beginner", "intermediate", "advanced"];

/// Human-readable language name for a language code.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "id" => "Bahasa Indonesia",
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "pt" => "Portuguese",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        _ => "English",
    }
}

/// Audience description in the course language (unknown levels map to
/// intermediate).
pub fn audience_description(audience: &str, language: &str) -> &'static str {
    if language == "id" {
        match audience {
            "beginner" => "pemula yang baru memulai",
            "advanced" => "tingkat lanjut dengan pengalaman yang cukup",
            _ => "tingkat menengah dengan pengetahuan dasar",
        }
    } else {
        match audience {
            "beginner" => "beginners who are just starting",
            "advanced" => "advanced level with sufficient experience",
            _ => "intermediate level with basic knowledge",
        }
    }
}

/// Map a learning-focus option code ("1".."4") to its description.
/// Unrecognized codes are passed through unchanged.
pub fn learning_focus_text(code: &str, language: &str) -> String {
    let text = if language == "id" {
        match code {
            "1" => "Teori mendalam",
            "2" => "Praktik dan implementasi",
            "3" => "Kombinasi teori dan praktik",
            "4" => "Studi kasus dan aplikasi real-world",
            other => other,
        }
    } else {
        match code {
            "1" => "In-depth theory",
            "2" => "Practice and implementation",
            "3" => "Combination of theory and practice",
            "4" => "Case studies and real-world applications",
            other => other,
        }
    };
    text.to_string()
}

/// Language instruction appended to content-generation prompts.
pub fn language_instruction(language: &str) -> String {
    match language {
        "id" => "PENTING: Tulis semua konten dalam Bahasa Indonesia. Gunakan gaya \
                 penulisan yang ramah dan mudah dipahami untuk materi pembelajaran."
            .to_string(),
        "en" => "IMPORTANT: Write all content in English. Use a friendly and \
                 easy-to-understand writing style for learning materials."
            .to_string(),
        other => format!(
            "IMPORTANT: Write all content in the target language (code: {other}). \
             Use a friendly and easy-to-understand writing style for learning materials."
        ),
    }
}

// ---------------------------------------------------------------------------
// Section labels
// ---------------------------------------------------------------------------

/// Localized headings used by the normalization pass and the index page.
#[derive(Debug, Clone)]
pub struct SectionLabels {
    pub learning_objectives: &'static str,
    pub introduction: &'static str,
    pub summary: &'static str,
    pub summary_placeholder: &'static str,
    pub reflection: &'static str,
    pub reflection_intro: &'static str,
    pub reflection_placeholder: &'static str,
    pub references: &'static str,
    pub references_placeholder: &'static str,
}

impl SectionLabels {
    /// Labels for a language code (Indonesian or the English fallback).
    pub fn for_language(language: &str) -> Self {
        if language == "id" {
            Self {
                learning_objectives: "Tujuan Pembelajaran",
                introduction: "Pengantar",
                summary: "Ringkasan",
                summary_placeholder: "*Ringkasan akan membantu memperkuat pemahaman \
                                      tentang konsep-konsep utama yang telah dipelajari.*",
                reflection: "Pertanyaan Refleksi",
                reflection_intro: "*Gunakan pertanyaan-pertanyaan berikut untuk \
                                   merefleksikan dan memperdalam pemahaman Anda:*",
                reflection_placeholder: "*[Pertanyaan refleksi akan ditambahkan]*",
                references: "Referensi",
                references_placeholder: "*Referensi akan ditambahkan setelah proses \
                                         research selesai.*",
            }
        } else {
            Self {
                learning_objectives: "Learning Objectives",
                introduction: "Introduction",
                summary: "Summary",
                summary_placeholder: "*Summary will help reinforce understanding of \
                                      the main concepts learned.*",
                reflection: "Reflection Questions",
                reflection_intro: "*Use the following questions to reflect and deepen \
                                   your understanding:*",
                reflection_placeholder: "*[Reflection questions will be added]*",
                references: "References",
                references_placeholder: "*References will be added after research is \
                                         complete.*",
            }
        }
    }
}
