use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postfix_trainer::validator::validate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let cases = [
        ("cmd1 && cmd2 || cmd3", "cmd1 cmd2 && cmd3 ||"),
        ("ls -l && grep \"err\" log.txt", "ls -l grep \"err\" log.txt &&"),
        ("(a || b) && (c || d) ; e", "a b || c d || e ; &&"),
        (
            "make 2> errors.txt && cat < in | sort >> sorted",
            "make errors.txt 2> cat in < sort sorted >> | &&",
        ),
    ];
    for (command, postfix) in cases {
        group.throughput(Throughput::Elements(command.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(command),
            &(command, postfix),
            |bencher, (command, postfix)| {
                bencher.iter(|| validate(command, postfix));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
