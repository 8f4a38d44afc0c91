use base64::{prelude::BASE64_STANDARD, Engine};

pub fn encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_text() {
        assert_eq!(encode(&[104, 105]), "aGk=");
    }

    #[test]
    fn should_encode_empty_content() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn should_encode_non_utf8_bytes() {
        assert_eq!(encode(&[0xff, 0x00, 0xfe]), "/wD+");
    }
}
