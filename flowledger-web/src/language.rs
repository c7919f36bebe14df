use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages. Chinese is the default: the service
/// and its users are Chinese-speaking, English exists for operators.
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "zh-CN",
            LanguageInfo {
                code: "zh-CN",
                flag: "🇨🇳",
                translation: include_str!("../translations/zh-CN.json"),
                native_name: "简体中文",
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_are_registered() {
        let languages = supported_languages();
        assert!(languages.contains_key("zh-CN"));
        assert!(languages.contains_key("en"));
    }

    #[test]
    fn translations_are_valid_json_with_matching_keys() {
        fn keys(value: &serde_json::Value, prefix: String, out: &mut Vec<String>) {
            if let serde_json::Value::Object(map) = value {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    if child.is_object() {
                        keys(child, path, out);
                    } else {
                        out.push(path);
                    }
                }
            }
        }

        let languages = supported_languages();
        let mut key_sets: Vec<(String, Vec<String>)> = languages
            .values()
            .map(|info| {
                let parsed: serde_json::Value =
                    serde_json::from_str(info.translation).expect("translation must be JSON");
                let mut out = Vec::new();
                keys(&parsed, String::new(), &mut out);
                out.sort();
                (info.code.to_string(), out)
            })
            .collect();
        key_sets.sort_by(|a, b| a.0.cmp(&b.0));

        let (_, reference) = &key_sets[0];
        for (code, set) in &key_sets {
            assert_eq!(set, reference, "translation keys diverge for {code}");
        }
    }
}
