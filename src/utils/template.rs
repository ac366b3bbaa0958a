use crate::utils::error::{QuestError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static PLACEHOLDER: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}"));

/// 以參數取代路徑樣板中的 `{name}` 佔位符
pub fn replace(template: &str, params: &HashMap<String, String>) -> Result<String> {
    let re = (*PLACEHOLDER)
        .as_ref()
        .map_err(|e| QuestError::TemplateError {
            template: template.to_string(),
            message: e.to_string(),
        })?;

    let missing: Vec<String> = re
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .filter(|name| !params.contains_key(name))
        .collect();
    if !missing.is_empty() {
        return Err(QuestError::TemplateError {
            template: template.to_string(),
            message: format!("missing value for {}", missing.join(", ")),
        });
    }

    let result = re.replace_all(template, |caps: &regex::Captures| {
        params.get(&caps[1]).cloned().unwrap_or_default()
    });
    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replace_placeholders() {
        let path = replace(
            "/lol/champion-mastery/v4/champion-masteries/by-summoner/{id}/by-champion/{championId}",
            &params(&[("id", "abc"), ("championId", "103")]),
        )
        .unwrap();
        assert_eq!(
            path,
            "/lol/champion-mastery/v4/champion-masteries/by-summoner/abc/by-champion/103"
        );
    }

    #[test]
    fn test_missing_value_is_error() {
        let err = replace("/summoners/{id}", &params(&[])).unwrap_err();
        assert!(err.to_string().contains("missing value for id"));
    }

    #[test]
    fn test_repeated_calls_share_pattern() {
        let values = params(&[("queue", "RANKED_SOLO_5x5")]);
        for _ in 0..3 {
            assert_eq!(
                replace("/challengerleagues/by-queue/{queue}", &values).unwrap(),
                "/challengerleagues/by-queue/RANKED_SOLO_5x5"
            );
        }
        assert_eq!(replace("/static", &values).unwrap(), "/static");
    }
}
