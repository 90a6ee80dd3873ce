use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static JSON_OBJECT: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\{[\s\S]*\}").ok());
static JSON_ARRAY: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\[[\s\S]*\]").ok());

/// Text of the first `output_text` item of a Responses API reply.
pub fn responses_output_text(data: &Value) -> Option<&str> {
    data["output"]
        .as_array()
        .and_then(|outputs| outputs.iter().find(|o| o["type"] == "message"))
        .and_then(|msg| msg["content"].as_array())
        .and_then(|contents| contents.iter().find(|c| c["type"] == "output_text"))
        .and_then(|c| c["text"].as_str())
}

/// Message content of the first choice of a Chat Completions reply.
pub fn chat_completion_text(data: &Value) -> Option<&str> {
    data["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .and_then(|choice| choice["message"]["content"].as_str())
}

/// Outermost `{...}` span in free-form model output.
pub fn find_json_object(content: &str) -> Option<&str> {
    JSON_OBJECT
        .as_ref()
        .and_then(|re| re.find(content))
        .map(|m| m.as_str())
}

/// Outermost `[...]` span in free-form model output.
pub fn find_json_array(content: &str) -> Option<&str> {
    JSON_ARRAY
        .as_ref()
        .and_then(|re| re.find(content))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_extract_output_text_from_responses_reply() {
        let data = json!({
            "output": [
                {"type": "reasoning", "summary": []},
                {
                    "type": "message",
                    "content": [{"type": "output_text", "text": "{\"dishName\":\"Paella\"}"}]
                }
            ]
        });

        assert_eq!(responses_output_text(&data), Some("{\"dishName\":\"Paella\"}"));
    }

    #[test]
    fn should_return_none_when_responses_reply_has_no_message() {
        assert_eq!(responses_output_text(&json!({"output": []})), None);
    }

    #[test]
    fn should_extract_first_choice_content() {
        let data = json!({"choices": [{"message": {"content": "hello"}}]});
        assert_eq!(chat_completion_text(&data), Some("hello"));
    }

    #[test]
    fn should_find_json_inside_markdown_fence() {
        let content = "```json\n{\"a\": [1, 2]}\n```";
        assert_eq!(find_json_object(content), Some("{\"a\": [1, 2]}"));
    }

    #[test]
    fn should_find_array_in_chatty_output() {
        let content = "Sure! Here you go: [\"tomato\", \"basil\"] Enjoy.";
        assert_eq!(find_json_array(content), Some("[\"tomato\", \"basil\"]"));
    }
}
