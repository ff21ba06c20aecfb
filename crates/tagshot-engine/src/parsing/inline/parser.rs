use log::trace;

use crate::{
    node::{Mention, MentionKind, Node, Timestamp},
    roles::RoleResolver,
};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, MentionMarker, TimeMarker},
    types::Segment,
};

/// Tokenizes one line (or a block remainder, or a span body) into nodes.
///
/// Never fails: anything that does not form a complete construct is kept as
/// literal text.
pub fn tokenize(s: &str, roles: &dyn RoleResolver) -> Vec<Node> {
    tokenize_segments(0, s, roles)
        .into_iter()
        .map(|seg| seg.node)
        .collect()
}

/// Tokenizes `s` into position-ordered [`Segment`]s.
///
/// # Arguments
/// - `base`: Byte offset in the content where `s` begins (for absolute spans)
/// - `s`: The text to scan
///
/// # Precedence
/// At each position the constructs are tried in this order: spoiler, bold,
/// underline, italic (`*`, then `_`), code, link, timestamp, mentions. The
/// first that forms a complete span wins and the cursor jumps past it.
///
/// # Returns
/// Segments covering the entire input with no gaps or overlaps. Text between
/// constructs is emitted as `Node::Text`.
pub fn tokenize_segments(base: usize, s: &str, roles: &dyn RoleResolver) -> Vec<Segment> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text segment
    fn flush_text(out: &mut Vec<Segment>, cur: &Cursor<'_>, start: usize, end: usize) {
        if end > start {
            let text = &cur.s[start - cur.base..end - cur.base];
            out.push(Segment::new(start, end, Node::text(text)));
        }
    }

    while !cur.eof() {
        if let Some(seg) = try_parse_construct(&mut cur, roles) {
            flush_text(&mut out, &cur, text_start, seg.span.start);
            text_start = seg.span.end;
            out.push(seg);
            continue;
        }
        // An unmatched backtick run is literal as a whole, so a shorter run
        // inside it never opens a code span.
        match cur.run_len(CodeSpan::TICK) {
            0 => {
                cur.bump_char();
            }
            n => cur.bump_n(n),
        }
    }

    flush_text(&mut out, &cur, text_start, cur.pos());
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>, roles: &dyn RoleResolver) -> Option<Segment> {
    for kind in Emphasis::PRECEDENCE {
        if let Some(seg) = try_parse_emphasis(cur, kind, roles) {
            return Some(seg);
        }
    }
    if let Some(seg) = try_parse_code_span(cur) {
        return Some(seg);
    }
    if let Some(seg) = try_parse_link(cur) {
        return Some(seg);
    }
    if let Some(seg) = try_parse_timestamp(cur) {
        return Some(seg);
    }
    try_parse_mention(cur, roles)
}

/// Attempts to parse a delimited formatting span at the cursor.
///
/// The body is non-empty and closes at the first valid closer; code spans
/// inside the body are skipped over whole. Returns `None` (cursor untouched)
/// when no closer exists.
fn try_parse_emphasis(
    cur: &mut Cursor<'_>,
    kind: Emphasis,
    roles: &dyn RoleResolver,
) -> Option<Segment> {
    let delim = kind.delimiter();
    if !cur.starts_with(delim) {
        return None;
    }

    let open = cur.i;
    let body_start = open + delim.len();
    if !kind.is_doubled() {
        // A single marker inside a longer run belongs to the run, so an
        // unmatched `**` or `__` stays literal as a whole.
        let c = kind.byte();
        if cur.peek_at(delim.len()) == Some(c) || cur.prev_char() == Some(char::from(c)) {
            return None;
        }
        if kind.is_word_bound() && cur.prev_char().is_some_and(char::is_alphanumeric) {
            return None;
        }
    }

    let s = cur.s;
    let mut close = find_closer(s, body_start, body_start + 1, |j| closes_at(s, j, kind))?;
    if kind.is_doubled() {
        // `***x***`: the closer is the last two bytes of the run.
        let b = s.as_bytes();
        while b.get(close + 2) == Some(&kind.byte()) {
            close += 1;
        }
    }
    let end = close + delim.len();

    let children = tokenize_segments(cur.base + body_start, &s[body_start..close], roles)
        .into_iter()
        .map(|seg| seg.node)
        .collect();
    let seg = Segment::new(cur.base + open, cur.base + end, kind.wrap(children));
    cur.i = end;
    Some(seg)
}

fn closes_at(s: &str, j: usize, kind: Emphasis) -> bool {
    let b = s.as_bytes();
    if !b[j..].starts_with(kind.delimiter()) {
        return false;
    }
    if kind.is_doubled() {
        return true;
    }
    let c = kind.byte();
    if b[j - 1] == c || b.get(j + 1) == Some(&c) {
        return false;
    }
    !(kind.is_word_bound() && s[j + 1..].chars().next().is_some_and(char::is_alphanumeric))
}

/// Scans `s` from `scan_from` for the first position `>= min` accepted by
/// `closes`, stepping over complete code spans (raw zones).
fn find_closer(
    s: &str,
    scan_from: usize,
    min: usize,
    closes: impl Fn(usize) -> bool,
) -> Option<usize> {
    let b = s.as_bytes();
    let mut j = scan_from;
    while j < b.len() {
        if b[j] == CodeSpan::TICK {
            j = match match_code_span(s, j) {
                Some(code) => code.end,
                None => j + tick_run(b, j),
            };
            continue;
        }
        if j >= min && closes(j) {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// Local byte positions of a complete code span.
struct CodeMatch {
    inner_start: usize,
    inner_end: usize,
    end: usize,
}

fn tick_run(b: &[u8], at: usize) -> usize {
    b[at..].iter().take_while(|&&c| c == CodeSpan::TICK).count()
}

/// Matches a run of N backticks closed by the next run of exactly N.
fn match_code_span(s: &str, at: usize) -> Option<CodeMatch> {
    let b = s.as_bytes();
    let run = tick_run(b, at);
    if run == 0 {
        return None;
    }

    // The opening run is maximal, so any run found here is a separate one and
    // the body is never empty.
    let inner_start = at + run;
    let mut j = inner_start;
    while j < b.len() {
        if b[j] == CodeSpan::TICK {
            let n = tick_run(b, j);
            if n == run {
                return Some(CodeMatch {
                    inner_start,
                    inner_end: j,
                    end: j + n,
                });
            }
            j += n;
        } else {
            j += 1;
        }
    }
    None
}

/// Attempts to parse a code span starting at the current position.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Segment> {
    let code = match_code_span(cur.s, cur.i)?;
    let body = CodeSpan::trim_body(&cur.s[code.inner_start..code.inner_end]);
    let seg = Segment::new(
        cur.pos(),
        cur.base + code.end,
        Node::Code(body.to_string()),
    );
    cur.i = code.end;
    Some(seg)
}

/// Attempts to parse `[label](url)`.
///
/// The label runs to the first `]` and must be non-empty; the url runs to the
/// first `)` and must be non-empty and free of whitespace.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Segment> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let rest = &cur.s[cur.i..];
    let b = rest.as_bytes();
    let label_end = b.iter().position(|&c| c == Link::LABEL_END)?;
    if label_end <= 1 || b.get(label_end + 1) != Some(&Link::URL_OPEN) {
        return None;
    }
    let url_start = label_end + 2;
    let url_len = b[url_start..].iter().position(|&c| c == Link::CLOSE)?;
    let url = &rest[url_start..url_start + url_len];
    if url.is_empty() || url.contains(char::is_whitespace) {
        return None;
    }

    let end = cur.i + url_start + url_len + 1;
    let seg = Segment::new(
        cur.pos(),
        cur.base + end,
        Node::Link {
            label: rest[1..label_end].to_string(),
            url: url.to_string(),
        },
    );
    cur.i = end;
    Some(seg)
}

fn digit_run(b: &[u8], at: usize) -> usize {
    b.get(at..)
        .map_or(0, |rest| rest.iter().take_while(|c| c.is_ascii_digit()).count())
}

/// Attempts to parse `<t:SECONDS>` or `<t:SECONDS:STYLE>`.
fn try_parse_timestamp(cur: &mut Cursor<'_>) -> Option<Segment> {
    if !cur.starts_with(TimeMarker::OPEN) {
        return None;
    }

    let b = cur.s.as_bytes();
    let digits_start = cur.i + TimeMarker::OPEN.len();
    let digits_end = digits_start + digit_run(b, digits_start);
    if digits_end == digits_start {
        return None;
    }

    let (style, close) = match b.get(digits_end) {
        Some(&TimeMarker::CLOSE) => (None, digits_end),
        Some(&TimeMarker::STYLE_SEP) => {
            let flag = *b.get(digits_end + 1)?;
            if !TimeMarker::is_style(flag) || b.get(digits_end + 2) != Some(&TimeMarker::CLOSE) {
                return None;
            }
            (Some(char::from(flag)), digits_end + 2)
        }
        _ => return None,
    };
    // Out-of-range seconds stay literal.
    let seconds = cur.s[digits_start..digits_end].parse::<u64>().ok()?;

    let end = close + 1;
    let seg = Segment::new(
        cur.pos(),
        cur.base + end,
        Node::Timestamp(Timestamp {
            raw: cur.s[cur.i..end].to_string(),
            seconds,
            style,
        }),
    );
    cur.i = end;
    Some(seg)
}

/// Attempts each mention form in [`MentionMarker::PREFIXES`] order.
fn try_parse_mention(cur: &mut Cursor<'_>, roles: &dyn RoleResolver) -> Option<Segment> {
    for (prefix, kind) in MentionMarker::PREFIXES {
        if !cur.starts_with(prefix) {
            continue;
        }
        if let Some(seg) = try_parse_mention_kind(cur, prefix.len(), kind, roles) {
            return Some(seg);
        }
    }
    None
}

fn try_parse_mention_kind(
    cur: &mut Cursor<'_>,
    prefix_len: usize,
    kind: MentionKind,
    roles: &dyn RoleResolver,
) -> Option<Segment> {
    let b = cur.s.as_bytes();
    let mut at = cur.i + prefix_len;
    let mut label = None;

    if kind == MentionKind::SlashCommand {
        let name_end = command_name_end(b, at)?;
        if b.get(name_end) != Some(&MentionMarker::COMMAND_SEP) {
            return None;
        }
        label = Some(cur.s[at..name_end].to_string());
        at = name_end + 1;
    }

    let digits = digit_run(b, at);
    if !MentionMarker::ID_DIGITS.contains(&digits)
        || b.get(at + digits) != Some(&MentionMarker::CLOSE)
    {
        return None;
    }
    let id = cur.s[at..at + digits].to_string();

    if kind == MentionKind::Role {
        label = roles.resolve(&id);
        if label.is_none() {
            trace!("no display label for role {id}");
        }
    }

    let end = at + digits + 1;
    let seg = Segment::new(
        cur.pos(),
        cur.base + end,
        Node::Mention(Mention { kind, id, label }),
    );
    cur.i = end;
    Some(seg)
}

/// End of a slash-command name: one to three words separated by single spaces.
fn command_name_end(b: &[u8], start: usize) -> Option<usize> {
    let mut j = start;
    let mut words = 0;
    loop {
        let word = b
            .get(j..)?
            .iter()
            .take_while(|&&c| MentionMarker::is_command_char(c))
            .count();
        if word == 0 {
            return None;
        }
        j += word;
        words += 1;
        if words == MentionMarker::MAX_COMMAND_WORDS || b.get(j) != Some(&b' ') {
            return Some(j);
        }
        j += 1;
    }
}
