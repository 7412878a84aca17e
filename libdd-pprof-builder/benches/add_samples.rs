// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use criterion::*;
use libdd_pprof_builder::{api, BacktraceFrame, ProfileBuilder};
use std::time::{Duration, SystemTime};

fn make_frames() -> Vec<BacktraceFrame> {
    // A Rack request served by puma, listed root first.
    let mut frames = vec![
        BacktraceFrame::new(
            "/gems/logging-2.4.0/lib/logging/diagnostic_context.rb",
            474,
            "create_with_logging_context",
        ),
        BacktraceFrame::new(
            "/gems/puma-6.4.3/lib/puma/thread_pool.rb",
            155,
            "spawn_thread",
        ),
        BacktraceFrame::new("/gems/puma-6.4.3/lib/puma/server.rb", 245, "run"),
        BacktraceFrame::new("/gems/puma-6.4.3/lib/puma/server.rb", 464, "process_client"),
        BacktraceFrame::new("/gems/puma-6.4.3/lib/puma/request.rb", 99, "handle_request"),
        BacktraceFrame::new(
            "/gems/puma-6.4.3/lib/puma/thread_pool.rb",
            378,
            "with_force_shutdown",
        ),
        BacktraceFrame::new(
            "/gems/puma-6.4.3/lib/puma/request.rb",
            100,
            "handle_request",
        ),
        BacktraceFrame::new("/gems/puma-6.4.3/lib/puma/configuration.rb", 272, "call"),
        BacktraceFrame::new("/gems/railties-7.0.8.7/lib/rails/engine.rb", 530, "call"),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/tracing/contrib/rack/middlewares.rb",
            474,
            "call",
        ),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/tracing/contrib/rack/trace_proxy_middleware.rb",
            17,
            "call",
        ),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/tracing/contrib/rack/middlewares.rb",
            70,
            "call",
        ),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/appsec/contrib/rack/request_middleware.rb",
            82,
            "call",
        ),
        BacktraceFrame::new("/usr/local/lib/libruby.so.3.3", 0, "catch"),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/appsec/contrib/rack/request_middleware.rb",
            85,
            "catch",
        ),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/appsec/instrumentation/gateway.rb",
            41,
            "push",
        ),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/appsec/instrumentation/gateway.rb",
            37,
            "push",
        ),
        BacktraceFrame::new(
            "/gems/datadog-2.18.0/lib/datadog/appsec/instrumentation/gateway/middleware.rb",
            18,
            "call",
        ),
    ];
    frames.reverse();
    frames
}

pub fn bench_add_samples(c: &mut Criterion) {
    let frames = make_frames();
    // Pretend the sampler cut the stack short, so the placeholder frame is
    // exercised too.
    let target_depth = frames.len() + 2;

    c.bench_function("build_locations_and_add_sample_x1000", |b| {
        b.iter(|| {
            let mut builder = ProfileBuilder::new();
            builder.declare_value_type("cpu-samples", "count").unwrap();
            builder.declare_value_type("wall-time", "nanoseconds").unwrap();
            for i in 0..1000 {
                let locations = builder.build_locations(&frames, target_depth).unwrap();
                let labels = [api::Label::num("thread id", i % 8, "")];
                black_box(builder.add_sample(&locations, &[1, 10_000], &labels)).unwrap();
            }
            black_box(builder.samples().len())
        })
    });

    let mut builder = ProfileBuilder::new();
    builder.declare_value_type("cpu-samples", "count").unwrap();
    for _ in 0..1000 {
        let locations = builder.build_locations(&frames, target_depth).unwrap();
        builder.add_sample(&locations, &[1], &[]).unwrap();
    }
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let finish = start + Duration::from_secs(60);

    c.bench_function("build_and_encode_1000_samples", |b| {
        b.iter(|| builder.build_and_encode(start, finish))
    });
}

criterion_group!(benches, bench_add_samples);
criterion_main!(benches);
