//! Whole-content parsing tests.
//!
//! Example tables pin the documented behaviour; the generated tests below run
//! the parser over seeded pseudo-random inputs and check the properties every
//! parse must satisfy.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    node::{Mention, MentionKind, Node, plain_text},
    parsing::{
        blocks::BlockClassifier, invariants::check_segments, lines::split_lines, parse_content,
        segment_line,
    },
    roles::NoRoles,
};

fn parse(s: &str) -> Vec<Node> {
    parse_content(s, &NoRoles)
}

fn text(s: &str) -> Node {
    Node::text(s)
}

#[rstest]
#[case("**bold**", vec![Node::Bold(vec![text("bold")])])]
#[case("*a* **b**", vec![
    Node::Italic(vec![text("a")]),
    text(" "),
    Node::Bold(vec![text("b")]),
])]
#[case("# Title", vec![Node::Header { level: 1, children: vec![text("Title")] }])]
#[case("#### Title", vec![text("#### Title")])]
#[case("<@123456789012345678>", vec![Node::Mention(Mention {
    kind: MentionKind::User,
    id: "123456789012345678".into(),
    label: None,
})])]
#[case("<@123>", vec![text("<@123>")])]
#[case("**unterminated", vec![text("**unterminated")])]
fn documented_examples(#[case] input: &str, #[case] expected: Vec<Node>) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("-# small", vec![Node::Subscript(vec![text("small")])])]
#[case("## Sub", vec![Node::Header { level: 2, children: vec![text("Sub")] }])]
#[case("> said", vec![Node::Quote { level: 1, children: vec![text("said")] }])]
#[case(">>> deep", vec![Node::Quote { level: 3, children: vec![text("deep")] }])]
#[case("#", vec![text("#")])]
#[case("# ", vec![text("# ")])]
#[case("  # indented", vec![text("  # indented")])]
fn block_lines(#[case] input: &str, #[case] expected: Vec<Node>) {
    assert_eq!(parse(input), expected);
}

#[test]
fn block_remainder_is_tokenized_inline() {
    assert_eq!(
        parse("# **Big** <#123456789012345678>"),
        vec![Node::Header {
            level: 1,
            children: vec![
                Node::Bold(vec![text("Big")]),
                text(" "),
                Node::Mention(Mention {
                    kind: MentionKind::Channel,
                    id: "123456789012345678".into(),
                    label: None,
                }),
            ],
        }]
    );
}

#[test]
fn block_marker_mid_line_is_text() {
    assert_eq!(parse("a # b"), vec![text("a # b")]);
}

#[test]
fn one_line_break_per_newline() {
    assert_eq!(
        parse("a\n\n# b\n"),
        vec![
            text("a"),
            Node::LineBreak,
            Node::LineBreak,
            Node::Header {
                level: 1,
                children: vec![text("b")],
            },
            Node::LineBreak,
        ]
    );
}

#[test]
fn carriage_return_is_literal() {
    assert_eq!(
        parse("a\r\nb"),
        vec![text("a\r"), Node::LineBreak, text("b")]
    );
}

#[test]
fn spans_never_cross_lines() {
    assert_eq!(
        parse("**a\nb**"),
        vec![text("**a"), Node::LineBreak, text("b**")]
    );
}

#[test]
fn empty_content_is_empty() {
    assert!(parse("").is_empty());
}

// Generated inputs

/// xorshift64; deterministic so failures reproduce.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

const SOUP: &[&str] = &[
    "*", "**", "***", "_", "__", "||", "`", "``", "[", "]", "(", ")", "](", "<", ">", "<@", "<@&",
    "<#", "</", "<t:", ":", ":R", "#", "# ", "> ", ">> ", "-# ", "-", " ", " ", "a", "word", "é",
    "✨", "\n", "\r", "1", "123456789012345678", "https://x.io",
];

fn soup(rng: &mut Rng) -> String {
    let len = rng.below(40);
    (0..len).map(|_| *rng.pick(SOUP)).collect()
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
}

#[test]
fn arbitrary_markup_never_panics_and_keeps_order() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    let classifier = BlockClassifier;

    for _ in 0..2000 {
        let input = soup(&mut rng);
        let nodes = parse(&input);

        let breaks = nodes.iter().filter(|n| **n == Node::LineBreak).count();
        assert_eq!(breaks, input.matches('\n').count(), "input: {input:?}");

        for line in split_lines(&input) {
            let segments = segment_line(&classifier, &line, &NoRoles);
            check_segments(line.span, &segments);

            let line_nodes: Vec<Node> = segments.into_iter().map(|s| s.node).collect();
            let visible = plain_text(&line_nodes);
            assert!(
                is_subsequence(&visible, line.text),
                "text reordered: {visible:?} from line {:?}",
                line.text
            );
        }
    }
}

/// Builds a document from marker-free words wrapped in well-formed markup,
/// returning it with its expected plain text.
fn well_formed(rng: &mut Rng) -> (String, String) {
    const WORDS: &[&str] = &["alpha", "beta", "gamma", "délta", "x"];
    const WRAPPERS: &[(&str, &str)] = &[
        ("||", "||"),
        ("**", "**"),
        ("__", "__"),
        ("*", "*"),
        ("_", "_"),
    ];
    const BLOCKS: &[&str] = &["", "", "", "# ", "## ", "### ", "> ", ">> ", "-# "];

    let mut doc = Vec::new();
    let mut plain = Vec::new();
    for _ in 0..=rng.below(4) {
        let mut line = Vec::new();
        let mut line_plain = Vec::new();
        for _ in 0..=rng.below(5) {
            let word = *rng.pick(WORDS);
            let (mut piece, shown) = match rng.below(6) {
                0 => (format!("`{word}`"), word.to_string()),
                1 => (format!("[{word}](https://example.com/{word})"), word.to_string()),
                2 => {
                    let raw = "<@123456789012345678>".to_string();
                    (raw.clone(), raw)
                }
                3 => {
                    let raw = "<t:1700000000:R>".to_string();
                    (raw.clone(), raw)
                }
                _ => (word.to_string(), word.to_string()),
            };

            // Distinct wrappers, outermost last.
            let mut used = Vec::new();
            for _ in 0..rng.below(4) {
                let w = rng.below(WRAPPERS.len());
                if used.contains(&w) {
                    continue;
                }
                used.push(w);
                let (open, close) = WRAPPERS[w];
                piece = format!("{open}{piece}{close}");
            }
            line.push(piece);
            line_plain.push(shown);
        }
        doc.push(format!("{}{}", rng.pick(BLOCKS), line.join(" ")));
        plain.push(line_plain.join(" "));
    }
    (doc.join("\n"), plain.join("\n"))
}

#[test]
fn plain_text_round_trips_for_well_formed_markup() {
    let mut rng = Rng(42);
    for _ in 0..1000 {
        let (doc, expected) = well_formed(&mut rng);
        assert_eq!(plain_text(&parse(&doc)), expected, "doc: {doc:?}");
    }
}

#[test]
fn reparsing_plain_text_is_stable() {
    let mut rng = Rng(7);
    for _ in 0..1000 {
        let (doc, _) = well_formed(&mut rng);
        let once = plain_text(&parse(&doc));
        let twice = plain_text(&parse(&once));
        assert_eq!(twice, once, "doc: {doc:?}");
    }
}

/// A line opening with an unmatched `**` or `__`, followed by pieces that use
/// only single-marker italics and atomic constructs. Returns the line, its
/// expected plain text, and the literal prefix that must stay whole.
fn unmatched_double_then_pieces(rng: &mut Rng) -> (String, String, String) {
    const WORDS: &[&str] = &["alpha", "beta", "délta", "x"];
    let lead = *rng.pick(&["**", "__", "***"]);
    let prefix = format!("{lead}{} ", rng.pick(WORDS));

    let mut line = prefix.clone();
    let mut plain = prefix.clone();
    for n in 0..=rng.below(4) {
        if n > 0 {
            line.push(' ');
            plain.push(' ');
        }
        let word = *rng.pick(WORDS);
        let piece = match rng.below(5) {
            0 => format!("*{word}*"),
            1 => format!("_{word}_"),
            2 => format!("`{word}`"),
            3 => format!("[{word}](https://example.com)"),
            _ => word.to_string(),
        };
        line.push_str(&piece);
        plain.push_str(word);
    }
    (line, plain, prefix)
}

#[test]
fn unmatched_double_markers_stay_whole_before_later_spans() {
    let mut rng = Rng(0xD0B1_E5);
    for _ in 0..1000 {
        let (line, expected, prefix) = unmatched_double_then_pieces(&mut rng);
        let nodes = parse(&line);

        assert_eq!(plain_text(&nodes), expected, "line: {line:?}");
        match nodes.first() {
            Some(Node::Text(first)) => {
                assert!(first.starts_with(&prefix), "split marker in {line:?}: {nodes:?}")
            }
            other => panic!("line {line:?} should open with literal text, got {other:?}"),
        }
    }
}
