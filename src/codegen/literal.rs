use crate::lut::DECIMAL_U8;

/// Decimal text of an id, straight from the lookup table.
pub fn id_text(id: u8) -> &'static str {
    DECIMAL_U8[id as usize]
}

/// Append `label` as a C string literal, quotes included.
///
/// Quotes and backslashes get a backslash, other ASCII control characters a
/// three digit octal escape so a following digit can't extend it.
pub fn push_c_string(buffer: &mut String, label: &str) {
    buffer.push('"');
    for c in label.chars() {
        match c {
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            c if c.is_ascii_control() => push_octal_escape(buffer, c as u8),
            c => buffer.push(c),
        }
    }
    buffer.push('"');
}

fn push_octal_escape(buffer: &mut String, byte: u8) {
    buffer.push('\\');
    for shift in [6, 3, 0] {
        buffer.push(char::from(b'0' + ((byte >> shift) & 0o7)));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{id_text, push_c_string};

    fn literal(label: &str) -> String {
        let mut buffer = String::new();
        push_c_string(&mut buffer, label);
        buffer
    }

    #[test]
    fn ids() {
        assert_eq!(id_text(0), "0");
        assert_eq!(id_text(42), "42");
        assert_eq!(id_text(255), "255");
    }

    #[test]
    fn plain_labels_are_quoted() {
        assert_eq!(literal("RED"), "\"RED\"");
        assert_eq!(literal("with space"), "\"with space\"");
        assert_eq!(literal("grün"), "\"grün\"");
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(literal("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(literal(r"C:\dir"), r#""C:\\dir""#);
        assert_eq!(literal("tab\there"), r#""tab\011here""#);
        assert_eq!(literal("bell\x071"), r#""bell\0071""#);
        assert_eq!(literal("\x1f\x7f"), r#""\037\177""#);
    }
}
