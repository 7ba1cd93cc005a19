//! Dispatch benchmarks

use core::ffi::{c_int, c_void};
use core::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nos_unistd::{FileControlFunctions, PidT, SsizeT, Unistd};

extern "C" fn write_count(_fd: c_int, _buf: *const c_void, count: usize) -> SsizeT {
    count as SsizeT
}

extern "C" fn kill_ok(_pid: PidT, _sig: c_int) -> c_int {
    0
}

fn console() -> Unistd {
    let mut unistd: Unistd = Unistd::new();
    let functions = FileControlFunctions {
        write_func: Some(write_count),
        ..FileControlFunctions::EMPTY
    };
    let _ = unistd.register_new_file_descriptor(1, Some(&functions));
    let _ = unistd.register_new_process(1, Some(kill_ok));
    unistd
}

fn bench_write_dispatch(c: &mut Criterion) {
    let unistd = console();
    let buf = [0u8; 64];
    c.bench_function("write_registered", |b| {
        b.iter(|| unistd.write(black_box(1), buf.as_ptr().cast(), black_box(buf.len())))
    });
    c.bench_function("write_out_of_range", |b| {
        b.iter(|| unistd.write(black_box(-1), buf.as_ptr().cast(), black_box(buf.len())))
    });
}

fn bench_kill_dispatch(c: &mut Criterion) {
    let unistd = console();
    c.bench_function("kill_current", |b| b.iter(|| unistd.kill(black_box(0), black_box(9))));
}

criterion_group!(dispatch_benchmarks, bench_write_dispatch, bench_kill_dispatch);
criterion_main!(dispatch_benchmarks);
