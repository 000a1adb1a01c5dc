//! Language code to display name mapping.

/// Human-readable English name for a caption language code.
///
/// Codes outside the table pass through unchanged.
pub fn language_name(code: &str) -> String {
    let name = match code {
        "en" => "English",
        "hi" => "Hindi",
        "ta" => "Tamil",
        "te" => "Telugu",
        "kn" => "Kannada",
        "mr" => "Marathi",
        "bn" => "Bengali",
        "ml" => "Malayalam",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        "fr" => "French",
        "de" => "German",
        "es" => "Spanish",
        "pt" => "Portuguese",
        "ar" => "Arabic",
        "ru" => "Russian",
        "id" => "Indonesian",
        "it" => "Italian",
        "tr" => "Turkish",
        "vi" => "Vietnamese",
        "th" => "Thai",
        "pl" => "Polish",
        "nl" => "Dutch",
        other => return other.to_string(),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("hi"), "Hindi");
        assert_eq!(language_name("nl"), "Dutch");
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        assert_eq!(language_name("xx"), "xx");
        assert_eq!(language_name("en-US"), "en-US");
        assert_eq!(language_name("unknown"), "unknown");
    }
}
