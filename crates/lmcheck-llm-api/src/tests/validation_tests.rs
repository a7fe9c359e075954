#[cfg(test)]
mod validation_tests {
    use lmcheck_models::{ChatMessage, ChatRequest};

    use crate::{validate_request, LlmError};

    fn request() -> ChatRequest {
        ChatRequest::new("test-model", vec![ChatMessage::user("hi")])
    }

    #[test]
    fn test_valid_requests() {
        assert!(validate_request(&request()).is_ok());
        assert!(validate_request(&request().with_max_tokens(1).with_temperature(0.0)).is_ok());
        assert!(validate_request(&request().with_temperature(2.0)).is_ok());
    }

    #[test]
    fn test_empty_messages_rejected() {
        let request = ChatRequest::new("test-model", vec![]);
        assert!(matches!(validate_request(&request), Err(LlmError::InvalidRequest(_))));
    }

    #[test]
    fn test_empty_model_rejected() {
        let request = ChatRequest::new("  ", vec![ChatMessage::user("hi")]);
        assert!(matches!(validate_request(&request), Err(LlmError::InvalidRequest(_))));
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        assert!(matches!(
            validate_request(&request().with_max_tokens(0)),
            Err(LlmError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        for temperature in [-0.1, 2.01, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(
                    validate_request(&request().with_temperature(temperature)),
                    Err(LlmError::InvalidRequest(_))
                ),
                "temperature {} should be rejected",
                temperature
            );
        }
    }
}
