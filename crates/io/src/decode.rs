//! Byte-stream decoding for store exports.

/// Decode bytes as UTF-8, falling back to Windows-1252 (the superset of
/// Latin-1 that Excel-era retail exports actually use).
pub fn decode_text(bytes: Vec<u8>) -> String {
    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        let text = "Código do Produto;Venda Atual\n6;10,00\n";
        assert_eq!(decode_text(text.as_bytes().to_vec()), text);
    }

    #[test]
    fn latin1_falls_back() {
        // "Código" with ó encoded as 0xF3 is invalid UTF-8.
        let bytes = b"C\xF3digo do Produto\n".to_vec();
        assert_eq!(decode_text(bytes), "Código do Produto\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(decode_text(Vec::new()), "");
    }
}
