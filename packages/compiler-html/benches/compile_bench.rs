use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagesmith_compiler_html::{compile, CompileOptions};
use pagesmith_model::{Document, Locale, Section, SectionKind, Theme};

fn landing_page(repeat: usize) -> Document {
    let kinds = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Stats,
        SectionKind::Testimonials,
        SectionKind::Pricing,
        SectionKind::Cta,
    ];

    let sections = (0..repeat)
        .flat_map(|round| {
            kinds
                .iter()
                .map(move |kind| Section::with_defaults(format!("{}-{}", kind, round), kind.clone()))
        })
        .collect();

    Document::new(sections)
}

fn compile_small_page(c: &mut Criterion) {
    let doc = landing_page(1);
    let theme = Theme::default();
    let options = CompileOptions::default();

    c.bench_function("compile_small_page", |b| {
        b.iter(|| compile(black_box(&doc), black_box(&theme), &options))
    });
}

fn compile_large_page_rtl(c: &mut Criterion) {
    let doc = landing_page(20);
    let theme = Theme {
        locale: Locale::Ar,
        ..Theme::default()
    };
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };

    c.bench_function("compile_large_page_rtl", |b| {
        b.iter(|| compile(black_box(&doc), black_box(&theme), &options))
    });
}

criterion_group!(benches, compile_small_page, compile_large_page_rtl);
criterion_main!(benches);
