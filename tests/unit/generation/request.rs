//! Tests for the generation endpoint wire format

#[cfg(test)]
mod tests {
    use jigsnap::generation::{GenerateRequest, GenerateResponse, PromptSelection};
    use serde_json::{Value, json};

    // Tests default request fields and JSON field names
    #[test]
    fn test_request_json() {
        let selection: PromptSelection = ["city"].into_iter().collect();
        let request = GenerateRequest::from_selection(&selection);

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["userid"], json!("user1"));
        assert_eq!(value["courseID"], json!("course1"));
        assert_eq!(value["steps"], json!(10));
        assert_eq!(value["cfg_scale"], json!(7.5));
        assert_eq!(value["width"], json!(512));
        assert_eq!(value["height"], json!(512));
        assert!(value["prompt"].as_str().unwrap().starts_with("city, 4k"));
        assert_eq!(value.get("course_id"), None);
    }

    // Tests response parsing and that extra fields are ignored
    #[test]
    fn test_response_json() {
        let body = r#"{"imageUrl": "/images/abc.png", "seed": 3}"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.image_url, "/images/abc.png");
    }

    // Tests that a response without an image URL is rejected
    #[test]
    fn test_response_missing_url() {
        let parsed: Result<GenerateResponse, _> = serde_json::from_str(r#"{"url": "x"}"#);
        assert!(parsed.is_err());

        let value: Value = serde_json::to_value(GenerateResponse {
            image_url: "a.png".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({ "imageUrl": "a.png" }));
    }
}
