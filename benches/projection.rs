//! Benchmarks for markdown extraction and graph projection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use per_ankh::extract;
use per_ankh::graph;
use per_ankh::node::{KnowledgeNode, NodeId, NodeStatus, Relation};

fn synthetic_nodes(count: u64) -> Vec<KnowledgeNode> {
    (1..=count)
        .map(|id| KnowledgeNode {
            id: NodeId::new(id),
            content: format!("Synthetic node {id} body text for projection."),
            status: if id % 3 == 0 {
                NodeStatus::Draft
            } else {
                NodeStatus::Validated
            },
            author: "User Master".to_string(),
            validator: (id % 3 != 0).then(|| "Igor".to_string()),
            title: format!("Node {id}"),
            concepts: vec![format!("concept-{id}"), "shared".to_string()],
            relations: if id > 1 {
                vec![Relation {
                    target: format!("Node {}", id - 1),
                    relation: "relates to".to_string(),
                }]
            } else {
                Vec::new()
            },
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let mut doc = String::from("Quarterly Notes\n");
    for line in 0..200 {
        doc.push_str(&format!("- concept {line}\n"));
        doc.push_str(&format!("paragraph {line} relates to: Node {line}\n"));
    }
    let data = doc.into_bytes();

    c.bench_function("extract_markdown_400_lines", |bench| {
        bench.iter(|| black_box(extract::extract("notes.md", &data)))
    });
}

fn bench_project(c: &mut Criterion) {
    let nodes = synthetic_nodes(100);

    c.bench_function("project_100_nodes", |bench| {
        bench.iter(|| black_box(graph::project(&nodes)))
    });
}

fn bench_project_chain(c: &mut Criterion) {
    // Stripping relations forces the synthetic chain path.
    let mut nodes = synthetic_nodes(100);
    for node in &mut nodes {
        node.relations.clear();
    }

    c.bench_function("project_100_nodes_chain", |bench| {
        bench.iter(|| black_box(graph::project(&nodes)))
    });
}

criterion_group!(benches, bench_extract, bench_project, bench_project_chain);
criterion_main!(benches);
