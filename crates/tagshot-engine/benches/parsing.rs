use criterion::{Criterion, criterion_group, criterion_main};
use tagshot_engine::{NoRoles, parse_content};

fn generate_tag_content(lines: usize) -> String {
    let mut out = String::new();
    for i in 0..lines {
        match i % 5 {
            0 => out.push_str(&format!("# Section {i}\n")),
            1 => out.push_str("> **bold** and *italic* with `code` and ||spoiler||\n"),
            2 => out.push_str("see [docs](https://example.com/docs) <t:1700000000:R>\n"),
            3 => out.push_str("-# ping <@123456789012345678> in <#123456789012345678>\n"),
            _ => out.push_str("**unclosed *markers __everywhere `in this line\n"),
        }
    }
    out
}

fn bench_parse_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for lines in [10, 100, 1000] {
        let content = generate_tag_content(lines);
        group.bench_function(format!("parse_content_{lines}_lines"), |b| {
            b.iter(|| {
                let nodes = parse_content(std::hint::black_box(&content), &NoRoles);
                std::hint::black_box(nodes);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_content);
criterion_main!(benches);
