/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them,
/// and closer searches for other delimiters step over them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Drops one leading and one trailing space when both are present and the
    /// body is not made only of spaces.
    pub fn trim_body(body: &str) -> &str {
        let padded = body.len() >= 2 && body.starts_with(' ') && body.ends_with(' ');
        if padded && body.bytes().any(|b| b != b' ') {
            &body[1..body.len() - 1]
        } else {
            body
        }
    }
}
