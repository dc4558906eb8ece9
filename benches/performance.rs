use classweb::core::{AnalyzerConfig, CodebaseAnalyzer, MemorySourceReader, Project};
use classweb::parsers::parse_source;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;

fn generate_corpus(classes: usize) -> (Vec<Project>, MemorySourceReader) {
    let mut reader = MemorySourceReader::new();
    let mut files = Vec::with_capacity(classes);

    for i in 0..classes {
        let next = (i + 1) % classes;
        let content = format!(
            r#"
using System;
using System.Collections.Generic;

namespace Bench.Services
{{
    public class Service{i} : ServiceBase
    {{
        private readonly Dictionary<string, List<Service{next}>> _cache = new();
        public Repository<Item{i}> Items {{ get; set; }}

        public Service{i}(ILogger logger, Options options) : base(logger)
        {{
            _cache = new Dictionary<string, List<Service{next}>>();
        }}

        public async Task<Result{i}> ProcessAsync(Request request, CancellationToken token)
        {{
            // "quoted { braces }" must not disturb depth tracking
            var label = "value; {{ }}";
            Logger.Info(label);
            return new Result{i}(request.Id);
        }}
    }}
}}
"#
        );
        let path = PathBuf::from(format!("src/Service{i}.cs"));
        reader.insert(path.clone(), content);
        files.push(path);
    }

    (vec![Project::new("bench", files)], reader)
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("codebase_analysis");

    let (small_projects, small_reader) = generate_corpus(10);
    group.bench_function("small_codebase", |b| {
        b.iter(|| {
            let analyzer = CodebaseAnalyzer::new();
            let result = analyzer.analyze(black_box(&small_projects), black_box(&small_reader));
            black_box(result)
        });
    });

    let (large_projects, large_reader) = generate_corpus(500);
    group.bench_function("large_codebase", |b| {
        b.iter(|| {
            let analyzer = CodebaseAnalyzer::new();
            let result = analyzer.analyze(black_box(&large_projects), black_box(&large_reader));
            black_box(result)
        });
    });

    group.bench_function("large_codebase_sequential", |b| {
        b.iter(|| {
            let analyzer = CodebaseAnalyzer::with_config(AnalyzerConfig::sequential());
            let result = analyzer.analyze(black_box(&large_projects), black_box(&large_reader));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let source = "class Wide {\n".to_string()
        + &"private Map<Key<(int, string)>, List<Value>> field;\n".repeat(200)
        + "}\n";
    group.bench_function("wide_class", |b| {
        b.iter(|| black_box(parse_source(black_box(&source))));
    });

    let hostile = format!("class H {{ {} }}", "<".repeat(4096));
    group.bench_function("unbalanced_brackets", |b| {
        b.iter(|| black_box(parse_source(black_box(&hostile))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_analysis, benchmark_parsing);
criterion_main!(benches);
