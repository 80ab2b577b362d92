use std::path::Path;

use criterion::Criterion;

use contentcat::{AggregationResult, Aggregator, OsFileSystem};

pub fn criterion_benchmark(c: &mut Criterion) {
    let root = std::path::absolute(Path::new("src")).unwrap();
    println!("root: {:?}", root);

    let result = execute_aggregate(&root);
    assert!(
        !result.text.is_empty(),
        "Expected result to have a length greater than 0"
    );
    assert!(result.file_count > 0, "Expected file_count to be greater than 0");
    println!("Length of result: {}", result.text.len());
    println!("File count: {}", result.file_count);

    c.bench_function("aggregate", |b| {
        b.iter(|| execute_aggregate(&root));
    });
}

fn execute_aggregate(root: &Path) -> AggregationResult {
    let aggregator = Aggregator::new(OsFileSystem::default());
    aggregator.aggregate_paths(&[root])
}
