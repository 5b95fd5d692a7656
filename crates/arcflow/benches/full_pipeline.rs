use arcflow_core::{Config, FlowParser};
use arcflow_report::{render_report, ReportInput};
use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn flow_json(images: usize) -> String {
    let mut steps = vec![r#"{"type": "CHAPTER", "title": "Bench flow"}"#.to_string()];
    for i in 0..images {
        steps.push(format!(
            r#"{{"type": "IMAGE", "id": "s{i}",
               "pageContext": {{"url": "https://shop.example/p/{i}", "title": "Page {i}"}},
               "clickContext": {{"text": "Scooter {i}", "elementType": "image"}}}}"#
        ));
    }
    steps.push(r#"{"type": "CHAPTER", "title": "Thank you"}"#.to_string());
    format!(r#"{{"name": "Bench", "steps": [{}]}}"#, steps.join(","))
}

fn bench_full_pipeline_50_steps(c: &mut Criterion) {
    let config = Config::new();
    let json = flow_json(50);
    let generated_at = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    c.bench_function("full_pipeline_50_steps", |b| {
        b.iter(|| {
            let flow = FlowParser::new(&config).parse_str(black_box(&json)).unwrap();
            let insights = arcflow_insights::analyze(&flow);
            let summary = arcflow_summary::fallback_summary(&flow, &insights);
            render_report(&ReportInput {
                flow: &flow,
                insights: &insights,
                summary: &summary,
                generated_at,
                source_file: "flow.json",
                report_file_name: "report.md",
                image: None,
                model: &config.model,
            })
        });
    });
}

criterion_group!(benches, bench_full_pipeline_50_steps);
criterion_main!(benches);
